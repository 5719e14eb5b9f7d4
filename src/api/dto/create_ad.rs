//! DTO for the ad creation endpoint.

use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{AdCategory, NewAd};
use crate::error::AppError;
use crate::utils::datetime::{parse_datetime, DATETIME_FORMAT};

/// Request body for `POST /ad_sdk`.
///
/// Every field is required; fields are modeled as `Option` so missing ones
/// can be reported together as a validation error instead of a JSON decode
/// failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub package_name: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub ad_type: Option<String>,

    pub category: Option<String>,

    /// `YYYY-MM-DD HH:MM:SS`
    pub beginning_date: Option<String>,

    /// `YYYY-MM-DD HH:MM:SS`
    pub expiration_date: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub ad_location: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub ad_link: Option<String>,

    pub ad_image_link: Option<String>,
}

impl CreateAdRequest {
    /// Converts the request into domain input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing all missing required fields,
    /// or describing an unparseable date / unknown category. Date ordering
    /// and the image-link scheme are checked by the service.
    pub fn into_new_ad(self) -> Result<NewAd, AppError> {
        let mut missing = Vec::new();

        macro_rules! require {
            ($field:ident) => {
                match self.$field {
                    Some(value) => Some(value),
                    None => {
                        missing.push(stringify!($field));
                        None
                    }
                }
            };
        }

        let package_name = require!(package_name);
        let name = require!(name);
        let description = require!(description);
        let ad_type = require!(ad_type);
        let category = require!(category);
        let beginning_date = require!(beginning_date);
        let expiration_date = require!(expiration_date);
        let ad_location = require!(ad_location);
        let ad_link = require!(ad_link);
        let ad_image_link = require!(ad_image_link);

        if !missing.is_empty() {
            return Err(AppError::bad_request(
                "Missing required fields",
                json!({ "fields": missing }),
            ));
        }

        // All Options are Some beyond this point.
        let category = category.unwrap_or_default();
        let category = AdCategory::parse(&category).ok_or_else(|| {
            AppError::bad_request(
                "Unknown category",
                json!({ "category": category, "allowed": AdCategory::ALL }),
            )
        })?;

        let beginning_date = parse_body_date(&beginning_date.unwrap_or_default())?;
        let expiration_date = parse_body_date(&expiration_date.unwrap_or_default())?;

        Ok(NewAd {
            package_name: package_name.unwrap_or_default(),
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            ad_type: ad_type.unwrap_or_default(),
            category,
            beginning_date,
            expiration_date,
            ad_location: ad_location.unwrap_or_default(),
            ad_link: ad_link.unwrap_or_default(),
            ad_image_link: ad_image_link.unwrap_or_default(),
        })
    }
}

pub(crate) fn parse_body_date(value: &str) -> Result<chrono::DateTime<chrono::Utc>, AppError> {
    parse_datetime(value).map_err(|_| {
        AppError::bad_request(
            "Invalid date format",
            json!({ "value": value, "expected": DATETIME_FORMAT }),
        )
    })
}
