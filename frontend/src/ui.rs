//! Shared page state.
//!
//! Components never look elements up by id; they receive these handles as
//! props and render from the signals inside.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::TOAST_DURATION_MS;
use crate::services::submission::{SubmissionView, SubmitPhase};
use crate::types::{ConversionOutcome, LogEntry, LogLevel, Toast, ToastLevel, ToastStack};

/// Toast notifications that remove themselves after [`TOAST_DURATION_MS`].
#[derive(Clone, Copy)]
pub struct Toaster {
    stack: RwSignal<ToastStack>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            stack: create_rw_signal(ToastStack::default()),
        }
    }

    /// Show a toast and schedule its expiry.
    pub fn show(&self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.add(level, message);
        let toaster = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toaster.expire(id);
        });
        id
    }

    fn add(&self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let message = message.into();
        self.stack
            .try_update(|stack| stack.push(level, message))
            .unwrap_or_default()
    }

    /// Close a toast now; its pending expiry becomes a no-op.
    pub fn dismiss(&self, id: u64) {
        self.stack.update(|stack| {
            stack.dismiss(id);
        });
    }

    fn expire(&self, id: u64) {
        // the page may be gone by the time the timer fires
        let _ = self.stack.try_update(|stack| stack.expire(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.stack.with(|stack| stack.toasts().to_vec())
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Named UI handles shared by the page components.
#[derive(Clone, Copy)]
pub struct UiHandles {
    pub phase: RwSignal<SubmitPhase>,
    pub loading: RwSignal<bool>,
    pub logs: RwSignal<Vec<LogEntry>>,
    pub outcomes: RwSignal<Vec<ConversionOutcome>>,
    pub toaster: Toaster,
}

impl UiHandles {
    pub fn new() -> Self {
        Self {
            phase: create_rw_signal(SubmitPhase::Idle),
            loading: create_rw_signal(false),
            logs: create_rw_signal(Vec::new()),
            outcomes: create_rw_signal(Vec::new()),
            toaster: Toaster::new(),
        }
    }

    pub fn clear_logs(&self) {
        self.logs.set(Vec::new());
    }

    pub fn clear_outcomes(&self) {
        self.outcomes.set(Vec::new());
    }
}

impl Default for UiHandles {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionView for UiHandles {
    fn phase(&self) -> SubmitPhase {
        self.phase.get_untracked()
    }

    fn set_phase(&self, phase: SubmitPhase) {
        log::debug!("Submission phase: {:?}", phase);
        self.phase.set(phase);
    }

    fn show_loading(&self, visible: bool) {
        self.loading.set(visible);
    }

    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => log::info!("{}", message),
            LogLevel::Warning => log::warn!("{}", message),
            LogLevel::Error => log::error!("{}", message),
        }
        self.logs.update(|logs| logs.push(LogEntry::now(level, message)));
    }

    fn notify(&self, level: ToastLevel, message: &str) {
        self.toaster.show(level, message);
    }

    fn append_outcomes(&self, outcomes: Vec<ConversionOutcome>) {
        self.outcomes.update(|current| current.extend(outcomes));
    }
}
