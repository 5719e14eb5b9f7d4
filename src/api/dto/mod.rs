//! Request/response data transfer objects.

pub mod ad;
pub mod create_ad;
pub mod health;
pub mod stats;
pub mod update_ad;
