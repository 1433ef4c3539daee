//! UI Components for the Dataset Converter page.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with the theme toggle
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - File picker, drag & drop, format choice, submit
//! - [`LogsPanel`] - Timestamped processing log
//! - [`ConvertedFiles`] - Per-file results with download links
//! - [`ToastHost`] - Transient notifications
//! - [`LoadingOverlay`] - Blocking overlay during a submission

mod header;
mod hero;
mod upload;
mod logs;
mod results;
mod toast;
mod loading;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use logs::*;
pub use results::*;
pub use toast::*;
pub use loading::*;
pub use footer::*;
