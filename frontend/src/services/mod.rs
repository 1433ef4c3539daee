//! Server communication and page logic that does not need a DOM.
//!
//! # Services
//!
//! - [`api`] - `/upload` and `/process` calls to the conversion server
//! - [`submission`] - Upload-then-process state machine behind the form
//! - [`theme`] - Light/dark preference persistence

pub mod api;
pub mod submission;
pub mod theme;

pub use api::*;
pub use submission::*;
pub use theme::*;
