//! This is intended to serve as a binary crate.
//!
//! Downloads one image from an HTTP or HTTPS URL into `Fetched_Images/`,
//! keeping the file name from the URL when it has one.
pub mod config;
pub mod fetch;
pub mod file;
pub mod input;
pub mod io;
pub mod outcome;
pub mod resolve;
