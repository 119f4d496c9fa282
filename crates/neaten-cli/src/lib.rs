//! CLI library components for the neatEN validator.

pub mod check;
pub mod logging;
pub mod summary;
