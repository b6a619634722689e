//! Structural rewrites shared by the page-builder dialects.

pub mod column_size;
pub mod flatten;
pub mod split;
