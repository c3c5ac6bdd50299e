pub mod animated_counter;
pub mod clipboard;
pub mod config;
pub mod dom;
pub mod icons;
pub mod portfolio_assets;
pub mod query;
