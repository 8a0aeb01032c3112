//! Interactive prompt mode.

mod input;
mod menu;

pub use input::*;
pub use menu::run;
