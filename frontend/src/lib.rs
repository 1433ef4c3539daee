//! Dataset Converter - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading documents to the conversion
//! server and downloading them as training dataset files.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (theme toggle)                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (picker, drop zone, format, submit)      │
//! │  ├── LogsPanel                                               │
//! │  └── ConvertedFiles                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer, ToastHost, LoadingOverlay                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (PendingFiles, ConversionOutcome, LogEntry, etc.)
//! - [`error`] - Error taxonomy
//! - [`services`] - Server calls, submission flow, theme persistence
//! - [`ui`] - Signal handles shared by the components
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod services;
pub mod ui;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{AppError, AppResult};

// Types
pub use types::{
    // Theme
    Theme,
    // Selection
    FileHandle, FileListView, PendingFiles,
    // API
    ConversionOutcome, OutputFormat, ProcessRequest, ProcessResponse, UploadResponse,
    // Logs
    LogEntry, LogLevel,
    // Toasts
    Toast, ToastLevel, ToastStack,
};

// Components
pub use components::*;

// Services
pub use services::*;

pub use ui::{Toaster, UiHandles};

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Dataset Converter"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the page
    let ui = UiHandles::new();

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <UploadSection ui=ui/>
            <div class="row">
                <div class="col-lg-6">
                    <LogsPanel ui=ui/>
                </div>
                <div class="col-lg-6">
                    <ConvertedFiles ui=ui/>
                </div>
            </div>
        </div>

        <Footer/>
        <ToastHost toaster=ui.toaster/>
        <LoadingOverlay visible=ui.loading/>
    }
}
