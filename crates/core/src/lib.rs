#![warn(clippy::all, missing_docs)]

//! Core domain logic for the gamedex catalog browser.
//!
//! This crate hosts the data models, configuration handling,
//! catalog loading/filtering, and the simulated promotion lookup
//! used by the terminal UI and any future frontends.

pub mod catalog;
pub mod config;
pub mod models;
pub mod promo;
pub mod view;

pub use catalog::{filter, highlights, CatalogError, CatalogStore};
pub use config::{AppConfig, ThemePreference};
pub use models::{DealResult, GameRecord};
pub use promo::PromoFinder;
pub use view::{BrowseMode, ViewEvent, ViewState, CATEGORY_ALL};
