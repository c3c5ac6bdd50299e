pub mod backoff;
pub mod navigation;
pub mod site_state;
