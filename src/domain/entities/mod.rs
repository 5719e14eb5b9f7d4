//! Core business entities.

pub mod ad;
pub mod ad_stat;

pub use ad::{Ad, AdActivityFilter, AdCategory, AdPatch, NewAd};
pub use ad_stat::{AdClickStat, AdSnapshot, StatUpsert, StatsSummary};
