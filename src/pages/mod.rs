//! Page components.

mod card;

pub use card::CardPage;
