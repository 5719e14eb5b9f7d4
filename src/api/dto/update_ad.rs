//! DTO for the ad update endpoint.

use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::api::dto::create_ad::parse_body_date;
use crate::domain::entities::{AdCategory, AdPatch};
use crate::error::AppError;

/// Request body for `PUT /ad_sdk/{package_name}/{ad_id}`.
///
/// All fields are optional — only provided fields are changed. Dates use
/// the fixed `YYYY-MM-DD HH:MM:SS` format.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAdRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub ad_type: Option<String>,

    pub category: Option<String>,

    pub beginning_date: Option<String>,

    pub expiration_date: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub ad_location: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub ad_link: Option<String>,

    pub ad_image_link: Option<String>,
}

impl UpdateAdRequest {
    /// Converts the request into a domain patch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on an unparseable date or an
    /// unknown category. Date ordering against the stored ad and the
    /// image-link scheme are checked by the service.
    pub fn into_patch(self) -> Result<AdPatch, AppError> {
        let category = self
            .category
            .map(|c| {
                AdCategory::parse(&c).ok_or_else(|| {
                    AppError::bad_request(
                        "Unknown category",
                        json!({ "category": c, "allowed": AdCategory::ALL }),
                    )
                })
            })
            .transpose()?;

        let beginning_date = self
            .beginning_date
            .map(|d| parse_body_date(&d))
            .transpose()?;
        let expiration_date = self
            .expiration_date
            .map(|d| parse_body_date(&d))
            .transpose()?;

        Ok(AdPatch {
            name: self.name,
            description: self.description,
            ad_type: self.ad_type,
            category,
            beginning_date,
            expiration_date,
            ad_location: self.ad_location,
            ad_link: self.ad_link,
            ad_image_link: self.ad_image_link,
        })
    }
}
