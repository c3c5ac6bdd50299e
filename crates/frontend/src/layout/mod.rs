pub mod footer;
pub mod global_context;
pub mod header;

pub use footer::Footer;
pub use global_context::SiteContext;
pub use header::Header;
