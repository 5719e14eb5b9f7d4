//! JSON representation of ads and the active-ads query parameters.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Ad, AdCategory};
use crate::error::AppError;
use crate::utils::datetime::{format_datetime, parse_date, DATE_FORMAT};
use chrono::{DateTime, Utc};
use serde_json::json;

/// Ad as returned by every read endpoint.
///
/// Identifiers are always serialized as strings; timestamps use the fixed
/// `YYYY-MM-DD HH:MM:SS` body format.
#[derive(Debug, Serialize)]
pub struct AdResponse {
    pub id: String,
    pub package_name: String,
    pub name: String,
    pub description: String,
    pub ad_type: String,
    pub category: AdCategory,
    pub beginning_date: String,
    pub expiration_date: String,
    pub ad_location: String,
    pub ad_link: String,
    pub ad_image_link: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Ad> for AdResponse {
    fn from(ad: Ad) -> Self {
        AdResponse {
            id: ad.id,
            package_name: ad.package_name,
            name: ad.name,
            description: ad.description,
            ad_type: ad.ad_type,
            category: ad.category,
            beginning_date: format_datetime(ad.beginning_date),
            expiration_date: format_datetime(ad.expiration_date),
            ad_location: ad.ad_location,
            ad_link: ad.ad_link,
            ad_image_link: ad.ad_image_link,
            created_at: format_datetime(ad.created_at),
            updated_at: format_datetime(ad.updated_at),
        }
    }
}

/// Query parameters for `GET /ad_sdk/{package_name}`.
#[derive(Debug, Default, Deserialize)]
pub struct ActiveAdsQuery {
    /// Filter date in `YYYY-MM-DD` form; defaults to the current instant.
    pub date: Option<String>,
    /// Exact-match location filter.
    pub location: Option<String>,
    /// Exact-match category filter.
    pub category: Option<String>,
}

impl ActiveAdsQuery {
    /// Parses the textual parameters into their domain forms.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on an unparseable date or an
    /// unknown category.
    pub fn parse_filters(
        self,
    ) -> Result<(Option<DateTime<Utc>>, Option<String>, Option<AdCategory>), AppError> {
        let at = self
            .date
            .map(|d| {
                parse_date(&d).map_err(|_| {
                    AppError::bad_request(
                        "Invalid date format",
                        json!({ "date": d, "expected": DATE_FORMAT }),
                    )
                })
            })
            .transpose()?;

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

        Ok((at, self.location, category))
    }
}

/// Response for `DELETE /ad_sdk`.
#[derive(Debug, Serialize)]
pub struct DeleteAllResponse {
    pub deleted_ads: u64,
    pub deleted_stats: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters_full() {
        let query = ActiveAdsQuery {
            date: Some("2024-06-15".to_string()),
            location: Some("NYC".to_string()),
            category: Some("Hotel".to_string()),
        };

        let (at, location, category) = query.parse_filters().unwrap();
        assert_eq!(format_datetime(at.unwrap()), "2024-06-15 00:00:00");
        assert_eq!(location.as_deref(), Some("NYC"));
        assert_eq!(category, Some(AdCategory::Hotel));
    }

    #[test]
    fn test_parse_filters_empty() {
        let (at, location, category) = ActiveAdsQuery::default().parse_filters().unwrap();
        assert!(at.is_none());
        assert!(location.is_none());
        assert!(category.is_none());
    }

    #[test]
    fn test_parse_filters_bad_date() {
        let query = ActiveAdsQuery {
            date: Some("15/06/2024".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.parse_filters().unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[test]
    fn test_parse_filters_bad_category() {
        let query = ActiveAdsQuery {
            category: Some("Car".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.parse_filters().unwrap_err(),
            AppError::Validation { .. }
        ));
    }
}
