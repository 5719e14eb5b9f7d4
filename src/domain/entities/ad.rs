//! Ad entity and its activity-window semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of ad categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdCategory {
    Hotel,
    Restaurant,
    Attraction,
    Shop,
    Product,
}

impl AdCategory {
    /// All known categories, in declaration order.
    pub const ALL: [AdCategory; 5] = [
        AdCategory::Hotel,
        AdCategory::Restaurant,
        AdCategory::Attraction,
        AdCategory::Shop,
        AdCategory::Product,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdCategory::Hotel => "Hotel",
            AdCategory::Restaurant => "Restaurant",
            AdCategory::Attraction => "Attraction",
            AdCategory::Shop => "Shop",
            AdCategory::Product => "Product",
        }
    }

    /// Parses a category name. Matching is exact, not case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for AdCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An advertisement scoped to an app package.
///
/// The `id` is an opaque string identifier generated at creation time and
/// immutable afterwards. The activity window is boundary-inclusive on both
/// ends.
#[derive(Debug, Clone)]
pub struct Ad {
    pub id: String,
    pub package_name: String,
    pub name: String,
    pub description: String,
    pub ad_type: String,
    pub category: AdCategory,
    pub beginning_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    pub ad_location: String,
    pub ad_link: String,
    pub ad_image_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ad {
    /// Returns true if the ad's validity window contains `at`.
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.beginning_date <= at && at <= self.expiration_date
    }
}

/// Input data for creating a new ad.
///
/// The identifier and the `created_at`/`updated_at` stamps are generated by
/// the service at insert time.
#[derive(Debug, Clone)]
pub struct NewAd {
    pub package_name: String,
    pub name: String,
    pub description: String,
    pub ad_type: String,
    pub category: AdCategory,
    pub beginning_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    pub ad_location: String,
    pub ad_link: String,
    pub ad_image_link: String,
}

/// Partial update for an existing ad.
///
/// `None` fields are left unchanged. `updated_at` is always refreshed by
/// the repository regardless of which fields are staged.
#[derive(Debug, Clone, Default)]
pub struct AdPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ad_type: Option<String>,
    pub category: Option<AdCategory>,
    pub beginning_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub ad_location: Option<String>,
    pub ad_link: Option<String>,
    pub ad_image_link: Option<String>,
}

impl AdPatch {
    /// Returns true when no field is staged.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.ad_type.is_none()
            && self.category.is_none()
            && self.beginning_date.is_none()
            && self.expiration_date.is_none()
            && self.ad_location.is_none()
            && self.ad_link.is_none()
            && self.ad_image_link.is_none()
    }
}

/// Filters for the active-ads query.
#[derive(Debug, Clone)]
pub struct AdActivityFilter {
    /// Instant the validity window must contain.
    pub at: DateTime<Utc>,
    /// Exact-match location filter.
    pub location: Option<String>,
    /// Exact-match category filter.
    pub category: Option<AdCategory>,
}
