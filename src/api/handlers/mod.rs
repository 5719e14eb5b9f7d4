//! REST API handlers.

pub mod ads;
pub mod health;
pub mod stats;

pub use ads::{
    active_ads_handler, create_ad_handler, delete_all_handler, get_ad_handler, index_handler,
    list_ads_handler, update_ad_handler,
};
pub use health::health_handler;
pub use stats::{click_handler, completed_view_handler, summary_handler, view_handler};
