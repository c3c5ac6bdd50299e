pub mod about;
pub mod categories;
pub mod contact;
pub mod hero;
pub mod portfolio;

pub use about::About;
pub use categories::Categories;
pub use contact::Contact;
pub use hero::Hero;
pub use portfolio::Portfolio;
