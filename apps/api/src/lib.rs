//! Resume feedback service.
//!
//! The [`feedback`] module is the scoring engine: pure functions over a resume
//! record and an optional job description. The rest of the crate serves it over
//! HTTP and reads stored resumes.

pub mod config;
pub mod errors;
pub mod feedback;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
