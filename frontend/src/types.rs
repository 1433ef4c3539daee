//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Theme Types** - Light/dark display preference
//! - **Selection Types** - Files staged for upload
//! - **API Types** - Conversion server request/response structures
//! - **Log Types** - Processing log panel
//! - **Toast Types** - Transient notifications

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

// =============================================================================
// Theme Types
// =============================================================================

/// Display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute / storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Read a theme attribute value. Anything but `dark` is light.
    pub fn from_attribute(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Read a local storage value: the plain name, tolerating JSON quotes.
    pub fn from_stored(value: &str) -> Self {
        Self::from_attribute(value.trim().trim_matches('"'))
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The moon icon is shown while dark mode is active.
    pub fn shows_dark_icon(self) -> bool {
        self == Theme::Dark
    }
}

// =============================================================================
// Selection Types
// =============================================================================

/// A file handle that can be listed and uploaded.
pub trait FileHandle {
    fn file_name(&self) -> String;
    fn size_bytes(&self) -> u64;
}

impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn size_bytes(&self) -> u64 {
        self.size() as u64
    }
}

/// Files currently staged for upload.
///
/// Replaced wholesale on every picker choice or drop.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFiles<F> {
    files: Vec<F>,
}

impl<F> Default for PendingFiles<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F> FromIterator<F> for PendingFiles<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl<F> PendingFiles<F> {
    pub fn new(files: Vec<F>) -> Self {
        Self { files }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn as_slice(&self) -> &[F] {
        &self.files
    }
}

impl<F: FileHandle> PendingFiles<F> {
    /// What the file list panel should show for this selection.
    pub fn listing(&self) -> FileListView {
        if self.files.is_empty() {
            FileListView::Placeholder
        } else {
            FileListView::Files(self.files.iter().map(FileHandle::file_name).collect())
        }
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(FileHandle::size_bytes).sum()
    }
}

/// Rendered state of the pending file list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileListView {
    /// "No files selected"
    Placeholder,
    /// One line per staged file name, in selection order.
    Files(Vec<String>),
}

// =============================================================================
// API Types
// =============================================================================

/// Conversion target understood by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    #[serde(rename = "Alpaca Format")]
    Alpaca,
    #[serde(rename = "Prompt-Completion Format")]
    PromptCompletion,
    #[serde(rename = "Chat Format")]
    Chat,
    #[serde(rename = "Q/A Format")]
    QuestionAnswer,
    #[serde(rename = "JSONL")]
    Jsonl,
    #[serde(rename = "CSV")]
    Csv,
    #[serde(rename = "Table Format")]
    Table,
}

impl OutputFormat {
    /// Every format, in the order offered by the selector.
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Alpaca,
        OutputFormat::PromptCompletion,
        OutputFormat::Chat,
        OutputFormat::QuestionAnswer,
        OutputFormat::Jsonl,
        OutputFormat::Csv,
        OutputFormat::Table,
    ];

    /// Label shown in the selector and sent to the server.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Alpaca => "Alpaca Format",
            OutputFormat::PromptCompletion => "Prompt-Completion Format",
            OutputFormat::Chat => "Chat Format",
            OutputFormat::QuestionAnswer => "Q/A Format",
            OutputFormat::Jsonl => "JSONL",
            OutputFormat::Csv => "CSV",
            OutputFormat::Table => "Table Format",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.label() == label)
    }
}

/// Response from the `/upload` endpoint.
///
/// `{files: [...]}` on success, `{error: "..."}` on failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Server-assigned identifiers of the stored files
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    /// Identifiers to hand to `/process`, or the server's error.
    pub fn into_result(self) -> AppResult<Vec<String>> {
        match non_empty(self.error) {
            Some(error) => Err(AppError::Upstream(error)),
            None => Ok(self.files),
        }
    }
}

/// Body of the `/process` request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub files: Vec<String>,
    pub format: OutputFormat,
}

/// Response from the `/process` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub results: Vec<ConversionOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessResponse {
    pub fn into_result(self) -> AppResult<Vec<ConversionOutcome>> {
        match non_empty(self.error) {
            Some(error) => Err(AppError::Upstream(error)),
            None => Ok(self.results),
        }
    }
}

/// Per-file result of a conversion.
///
/// Only `status: "success"` with a converted name is a success; any other
/// entry renders as a failure instead of rejecting the whole response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase", from = "OutcomeEntry")]
pub enum ConversionOutcome {
    Success {
        original: String,
        converted: String,
    },
    #[serde(rename = "error")]
    Failure {
        original: String,
        error: String,
    },
}

/// One `results` entry as the server sends it.
#[derive(Deserialize)]
struct OutcomeEntry {
    #[serde(default)]
    status: String,
    #[serde(default)]
    original: String,
    #[serde(default)]
    converted: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl From<OutcomeEntry> for ConversionOutcome {
    fn from(entry: OutcomeEntry) -> Self {
        match (entry.status.as_str(), entry.converted) {
            ("success", Some(converted)) => ConversionOutcome::Success {
                original: entry.original,
                converted,
            },
            _ => ConversionOutcome::Failure {
                original: entry.original,
                error: entry.error.unwrap_or_default(),
            },
        }
    }
}

impl ConversionOutcome {
    pub fn original(&self) -> &str {
        match self {
            ConversionOutcome::Success { original, .. } => original,
            ConversionOutcome::Failure { original, .. } => original,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success { .. })
    }

    /// Download link for a converted file. Failures have none.
    pub fn download_url(&self, base_url: &str) -> Option<String> {
        match self {
            ConversionOutcome::Success { converted, .. } => {
                Some(format!("{}/download/{}", base_url, converted))
            }
            ConversionOutcome::Failure { .. } => None,
        }
    }
}

/// JS-style truthiness: an empty error string is no error.
fn non_empty(error: Option<String>) -> Option<String> {
    error.filter(|e| !e.is_empty())
}

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Something the user should know about, not fatal
    Warning,
    /// Error message
    Error,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "text-body",
            LogLevel::Warning => "text-warning",
            LogLevel::Error => "text-danger",
        }
    }
}

/// A single line of the processing log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Stamp a message with the current local time.
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

// =============================================================================
// Toast Types
// =============================================================================

/// Toast styling level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Bootstrap icon classes for the toast header.
    pub fn icon_class(&self) -> &'static str {
        match self {
            ToastLevel::Error => "bi-exclamation-circle text-danger",
            ToastLevel::Warning => "bi-exclamation-triangle text-warning",
            ToastLevel::Success | ToastLevel::Info => "bi-check-circle text-success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
///
/// Every toast is scheduled to expire when pushed. Dismissing it by hand
/// cancels that expiry, so a late timer never touches the stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
    scheduled: Vec<u64>,
}

impl ToastStack {
    /// Add a toast, schedule its expiry and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        self.scheduled.push(id);
        id
    }

    /// Remove a toast now and cancel its expiry. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        self.scheduled.retain(|scheduled| *scheduled != id);
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Timer callback. Only removes the toast if its expiry is still pending.
    pub fn expire(&mut self, id: u64) -> bool {
        if !self.is_scheduled(id) {
            return false;
        }
        self.dismiss(id)
    }

    pub fn is_scheduled(&self, id: u64) -> bool {
        self.scheduled.contains(&id)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
