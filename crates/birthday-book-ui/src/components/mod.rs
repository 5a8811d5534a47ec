//! Reusable card components
//!
//! Class names line up with the global stylesheet in the app crate.

mod book;
mod button;
mod controls;
mod effects;
mod final_page;

pub use book::*;
pub use button::*;
pub use controls::*;
pub use effects::*;
pub use final_page::*;
