//! Ad creation, retrieval and update service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{Ad, AdActivityFilter, AdCategory, AdPatch, NewAd};
use crate::domain::repositories::AdRepository;
use crate::error::AppError;

/// Service for managing ads within their package scope.
///
/// Owns the business validation the storage layer cannot express: the
/// date-window ordering invariant, the image-link scheme check and the
/// empty-patch rejection.
pub struct AdService<R: AdRepository> {
    ad_repository: Arc<R>,
}

impl<R: AdRepository> AdService<R> {
    /// Creates a new ad service.
    pub fn new(ad_repository: Arc<R>) -> Self {
        Self { ad_repository }
    }

    /// Creates an ad, generating its identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `beginning_date` is after `expiration_date`
    /// - the image link does not use an HTTP(S) scheme
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_ad(&self, new_ad: NewAd) -> Result<Ad, AppError> {
        validate_date_window(new_ad.beginning_date, new_ad.expiration_date)?;
        validate_image_link(&new_ad.ad_image_link)?;

        let now = Utc::now();
        let ad = Ad {
            id: Uuid::new_v4().to_string(),
            package_name: new_ad.package_name,
            name: new_ad.name,
            description: new_ad.description,
            ad_type: new_ad.ad_type,
            category: new_ad.category,
            beginning_date: new_ad.beginning_date,
            expiration_date: new_ad.expiration_date,
            ad_location: new_ad.ad_location,
            ad_link: new_ad.ad_link,
            ad_image_link: new_ad.ad_image_link,
            created_at: now,
            updated_at: now,
        };

        let ad = self.ad_repository.insert(ad).await?;
        tracing::info!(ad_id = %ad.id, package_name = %ad.package_name, "Ad created");

        Ok(ad)
    }

    /// Lists every ad for a package. An unknown package yields an empty list.
    pub async fn list_ads(&self, package_name: &str) -> Result<Vec<Ad>, AppError> {
        self.ad_repository.list_by_package(package_name).await
    }

    /// Retrieves one ad by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no ad matches.
    pub async fn get_ad(&self, package_name: &str, ad_id: &str) -> Result<Ad, AppError> {
        self.ad_repository
            .find_by_id(package_name, ad_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Ad not found",
                    json!({ "package_name": package_name, "ad_id": ad_id }),
                )
            })
    }

    /// Partially updates an ad.
    ///
    /// The effective date window is validated against the existing row, so
    /// moving only `expiration_date` before the stored `beginning_date` (or
    /// vice versa) is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch is empty, violates the
    /// date ordering, or carries a non-HTTP(S) image link.
    /// Returns [`AppError::NotFound`] if no ad matches.
    pub async fn update_ad(
        &self,
        package_name: &str,
        ad_id: &str,
        patch: AdPatch,
    ) -> Result<Ad, AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request("No fields to update", json!({})));
        }

        if let Some(image_link) = &patch.ad_image_link {
            validate_image_link(image_link)?;
        }

        // Fetch-validate-write without a transaction; a concurrent update to
        // the same ad between these two statements can be lost.
        let existing = self.get_ad(package_name, ad_id).await?;

        let beginning = patch.beginning_date.unwrap_or(existing.beginning_date);
        let expiration = patch.expiration_date.unwrap_or(existing.expiration_date);
        validate_date_window(beginning, expiration)?;

        let updated = self
            .ad_repository
            .update(package_name, ad_id, patch)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Ad not found",
                    json!({ "package_name": package_name, "ad_id": ad_id }),
                )
            })?;

        tracing::info!(ad_id = %ad_id, package_name = %package_name, "Ad updated");
        Ok(updated)
    }

    /// Returns ads active at the given instant (defaulting to now),
    /// optionally narrowed by location and category.
    pub async fn find_active_ads(
        &self,
        package_name: &str,
        at: Option<DateTime<Utc>>,
        location: Option<String>,
        category: Option<AdCategory>,
    ) -> Result<Vec<Ad>, AppError> {
        let filter = AdActivityFilter {
            at: at.unwrap_or_else(Utc::now),
            location,
            category,
        };

        self.ad_repository.find_active(package_name, filter).await
    }

    /// Deletes every ad across all packages. Returns the number of rows
    /// removed.
    pub async fn delete_all_ads(&self) -> Result<u64, AppError> {
        let deleted = self.ad_repository.delete_all().await?;
        tracing::warn!(deleted, "All ads deleted");
        Ok(deleted)
    }
}

/// Enforces `beginning_date <= expiration_date`.
fn validate_date_window(
    beginning: DateTime<Utc>,
    expiration: DateTime<Utc>,
) -> Result<(), AppError> {
    if beginning > expiration {
        return Err(AppError::bad_request(
            "Beginning date must be before expiration date",
            json!({
                "beginning_date": beginning.to_rfc3339(),
                "expiration_date": expiration.to_rfc3339(),
            }),
        ));
    }
    Ok(())
}

/// Enforces the HTTP(S) scheme marker on image links.
fn validate_image_link(link: &str) -> Result<(), AppError> {
    if link.starts_with("http://") || link.starts_with("https://") {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Image link must start with http:// or https://",
            json!({ "ad_image_link": link }),
        ))
    }
}
