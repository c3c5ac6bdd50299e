pub mod view;

pub use view::{filter, PortfolioView, DEFAULT_PREVIEW_LIMIT};
