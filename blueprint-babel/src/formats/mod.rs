//! Built-in formats.

pub mod html;
pub mod layout;
pub mod pagebuilder;
