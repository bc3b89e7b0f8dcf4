//! Coldpress - Session core for a two-group cold pressor experiment
//!
//! This library provides the data-handling core behind the experiment UI:
//! recording validated observations, comparing the two groups with Welch's
//! t-test, and exporting the session as CSV. Rendering and input widgets
//! live in the presentation layer, which calls into this crate.

pub mod comparison;
pub mod csv_export;
pub mod observation;
pub mod store;
