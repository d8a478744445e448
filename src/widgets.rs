//! Small layout and drawing helpers shared by the screens

pub mod field;
pub mod popup;
