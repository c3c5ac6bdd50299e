pub mod aggregate;

pub use aggregate::{title_from_path, PortfolioCatalog, PortfolioItem, PortfolioItemId};
