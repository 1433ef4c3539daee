//! Application configuration.
//!
//! Centralized configuration for the Dataset Converter frontend.
//! The app is served by the conversion server itself, so every endpoint
//! is resolved against the page origin by default.

/// Conversion server base URL.
///
/// Empty means same origin (`/upload`, `/process`, `/download/..`).
pub const API_BASE_URL: &str = "";

/// Multipart field name shared by every uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Local storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Document attribute read by Bootstrap to pick its color mode.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// How long a toast stays on screen (milliseconds).
pub const TOAST_DURATION_MS: u32 = 3_000;

/// File types the server knows how to read.
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,.csv,.json,.txt";

/// Request size limit enforced by the server (in bytes).
///
/// 16 MB limit.
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Console log verbosity.
pub const LOG_LEVEL: log::Level = log::Level::Debug;
