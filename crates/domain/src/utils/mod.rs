//! Domain utilities

pub mod week;
