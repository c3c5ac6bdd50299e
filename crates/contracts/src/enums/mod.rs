pub mod category;
pub mod project_type;
pub mod section;

pub use category::Category;
pub use project_type::ProjectType;
pub use section::Section;
