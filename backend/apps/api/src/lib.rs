//! Quill API
//!
//! Process wiring for the auth and posts crates: configuration, router
//! composition and CORS. The binary in `main.rs` adds tracing, storage
//! selection and the server loop.

pub mod app;
pub mod config;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
