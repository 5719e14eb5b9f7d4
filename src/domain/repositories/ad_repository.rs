//! Repository trait for ad data access.

use crate::domain::entities::{Ad, AdActivityFilter, AdPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing ads.
///
/// All reads and writes are scoped by `package_name`; a package never sees
/// another package's ads except through [`AdRepository::delete_all`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAdRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Inserts a fully-populated ad and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, ad: Ad) -> Result<Ad, AppError>;

    /// Lists every ad belonging to a package, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_package(&self, package_name: &str) -> Result<Vec<Ad>, AppError>;

    /// Finds a single ad by identifier within a package.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Ad))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, package_name: &str, ad_id: &str) -> Result<Option<Ad>, AppError>;

    /// Partially updates an ad. Only staged fields in [`AdPatch`] change;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `Ok(None)` if no ad matches `package_name` + `ad_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        package_name: &str,
        ad_id: &str,
        patch: AdPatch,
    ) -> Result<Option<Ad>, AppError>;

    /// Returns ads whose validity window contains `filter.at`, optionally
    /// narrowed by exact-match location and category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_active(
        &self,
        package_name: &str,
        filter: AdActivityFilter,
    ) -> Result<Vec<Ad>, AppError>;

    /// Deletes every ad across all packages. Returns the number of rows
    /// removed. Irreversible; intended for test/reset use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_all(&self) -> Result<u64, AppError>;
}
