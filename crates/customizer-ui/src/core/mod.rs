//! Core, DOM-free primitives for the article customizer.
pub mod dismiss;
pub mod error;
pub mod labels;
pub mod options;
pub mod state;
