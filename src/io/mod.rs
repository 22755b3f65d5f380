//! CSV boundary: profile loading and result export.

pub mod export;
pub mod loader;
