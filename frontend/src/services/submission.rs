//! Upload-then-process flow behind the conversion form.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──▶ Uploading ──▶ Processing ──▶ Done
//!   ▲                                 │              │             │
//!   └───────────── error ─────────────┴──────────────┴─────────────┘
//! ```
//!
//! `Done` is passed through on success and the form settles back on `Idle`.
//! A submission is only accepted while not busy, and the loading overlay is
//! hidden on every exit.

use crate::config::MAX_UPLOAD_BYTES;
use crate::error::{AppError, AppResult};
use crate::services::api::ConversionApi;
use crate::types::{
    ConversionOutcome, FileHandle, LogLevel, OutputFormat, PendingFiles, ProcessRequest,
    ToastLevel,
};

/// Where the form currently is in the submission flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Uploading,
    Processing,
    Done,
}

impl SubmitPhase {
    /// A request is in flight.
    pub fn is_busy(self) -> bool {
        matches!(
            self,
            SubmitPhase::Submitting | SubmitPhase::Uploading | SubmitPhase::Processing
        )
    }
}

/// Everything the flow needs to show on the page.
pub trait SubmissionView {
    fn phase(&self) -> SubmitPhase;
    fn set_phase(&self, phase: SubmitPhase);
    fn show_loading(&self, visible: bool);
    fn log(&self, level: LogLevel, message: &str);
    fn notify(&self, level: ToastLevel, message: &str);
    fn append_outcomes(&self, outcomes: Vec<ConversionOutcome>);
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Refused before contacting the server.
    Rejected(AppError),
    /// Both calls succeeded; `converted` outcomes were rendered.
    Completed { converted: usize },
    /// Upload or process failed.
    Failed(AppError),
}

/// Run one form submission.
pub async fn submit<A, V>(
    api: &A,
    view: &V,
    files: &PendingFiles<A::File>,
    format: OutputFormat,
) -> SubmitOutcome
where
    A: ConversionApi,
    A::File: FileHandle,
    V: SubmissionView,
{
    if view.phase().is_busy() {
        log::warn!("Submission ignored, previous one still running");
        let err = AppError::Busy;
        view.notify(ToastLevel::Warning, &err.to_string());
        return SubmitOutcome::Rejected(err);
    }

    if files.is_empty() {
        let err = AppError::NoFilesSelected;
        view.notify(ToastLevel::Warning, &err.to_string());
        view.set_phase(SubmitPhase::Idle);
        return SubmitOutcome::Rejected(err);
    }

    view.set_phase(SubmitPhase::Submitting);
    view.show_loading(true);

    let outcome = match upload_and_process(api, view, files, format).await {
        Ok(outcomes) => {
            let converted = outcomes.len();
            view.log(LogLevel::Info, "Processing complete!");
            view.append_outcomes(outcomes);
            view.notify(ToastLevel::Success, "Files processed successfully!");
            view.set_phase(SubmitPhase::Done);
            view.set_phase(SubmitPhase::Idle);
            SubmitOutcome::Completed { converted }
        }
        Err(err) => {
            view.log(LogLevel::Error, &format!("Error: {}", err));
            view.notify(ToastLevel::Error, &err.to_string());
            view.set_phase(SubmitPhase::Idle);
            SubmitOutcome::Failed(err)
        }
    };

    view.show_loading(false);
    outcome
}

async fn upload_and_process<A, V>(
    api: &A,
    view: &V,
    files: &PendingFiles<A::File>,
    format: OutputFormat,
) -> AppResult<Vec<ConversionOutcome>>
where
    A: ConversionApi,
    A::File: FileHandle,
    V: SubmissionView,
{
    let total = files.total_size();
    if total > MAX_UPLOAD_BYTES {
        view.log(
            LogLevel::Warning,
            &format!(
                "Selected files total {:.1} MB, above the server's {} MB limit",
                total as f64 / (1024.0 * 1024.0),
                MAX_UPLOAD_BYTES / (1024 * 1024)
            ),
        );
    }

    view.set_phase(SubmitPhase::Uploading);
    let uploaded = api.upload(files.as_slice()).await?.into_result()?;
    view.log(
        LogLevel::Info,
        "Files uploaded successfully. Starting processing...",
    );

    view.set_phase(SubmitPhase::Processing);
    let request = ProcessRequest {
        files: uploaded,
        format,
    };
    api.process(&request).await?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProcessResponse, UploadResponse};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile {
        name: &'static str,
        size: u64,
    }

    impl FileHandle for FakeFile {
        fn file_name(&self) -> String {
            self.name.to_string()
        }

        fn size_bytes(&self) -> u64 {
            self.size
        }
    }

    fn files(names: &[&'static str]) -> PendingFiles<FakeFile> {
        names.iter().map(|&name| FakeFile { name, size: 128 }).collect()
    }

    struct FakeApi {
        upload: AppResult<UploadResponse>,
        process: AppResult<ProcessResponse>,
        uploaded: RefCell<Vec<String>>,
        processed: RefCell<Vec<ProcessRequest>>,
    }

    impl FakeApi {
        fn new(upload: AppResult<UploadResponse>, process: AppResult<ProcessResponse>) -> Self {
            Self {
                upload,
                process,
                uploaded: RefCell::new(Vec::new()),
                processed: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            usize::from(!self.uploaded.borrow().is_empty()) + self.processed.borrow().len()
        }
    }

    impl ConversionApi for FakeApi {
        type File = FakeFile;

        async fn upload(&self, files: &[FakeFile]) -> AppResult<UploadResponse> {
            self.uploaded
                .borrow_mut()
                .extend(files.iter().map(FakeFile::file_name));
            self.upload.clone()
        }

        async fn process(&self, request: &ProcessRequest) -> AppResult<ProcessResponse> {
            self.processed.borrow_mut().push(request.clone());
            self.process.clone()
        }
    }

    #[derive(Default)]
    struct RecordingView {
        phase: Cell<SubmitPhase>,
        phases: RefCell<Vec<SubmitPhase>>,
        loading: Cell<bool>,
        loading_changes: Cell<usize>,
        logs: RefCell<Vec<(LogLevel, String)>>,
        toasts: RefCell<Vec<(ToastLevel, String)>>,
        outcomes: RefCell<Vec<ConversionOutcome>>,
    }

    impl SubmissionView for RecordingView {
        fn phase(&self) -> SubmitPhase {
            self.phase.get()
        }

        fn set_phase(&self, phase: SubmitPhase) {
            self.phase.set(phase);
            self.phases.borrow_mut().push(phase);
        }

        fn show_loading(&self, visible: bool) {
            self.loading.set(visible);
            self.loading_changes.set(self.loading_changes.get() + 1);
        }

        fn log(&self, level: LogLevel, message: &str) {
            self.logs.borrow_mut().push((level, message.to_string()));
        }

        fn notify(&self, level: ToastLevel, message: &str) {
            self.toasts.borrow_mut().push((level, message.to_string()));
        }

        fn append_outcomes(&self, outcomes: Vec<ConversionOutcome>) {
            self.outcomes.borrow_mut().extend(outcomes);
        }
    }

    fn uploaded(names: &[&str]) -> AppResult<UploadResponse> {
        Ok(UploadResponse {
            files: names.iter().map(|n| n.to_string()).collect(),
            error: None,
        })
    }

    fn upstream_error(message: &str) -> UploadResponse {
        UploadResponse {
            files: Vec::new(),
            error: Some(message.to_string()),
        }
    }

    fn success(original: &str, converted: &str) -> ConversionOutcome {
        ConversionOutcome::Success {
            original: original.into(),
            converted: converted.into(),
        }
    }

    #[test]
    fn test_empty_selection_never_hits_network() {
        let api = FakeApi::new(uploaded(&["a.txt"]), Ok(ProcessResponse::default()));
        let view = RecordingView::default();

        let outcome = block_on(submit(&api, &view, &files(&[]), OutputFormat::Csv));

        assert_eq!(outcome, SubmitOutcome::Rejected(AppError::NoFilesSelected));
        assert_eq!(api.calls(), 0);
        assert_eq!(view.phase.get(), SubmitPhase::Idle);
        assert_eq!(view.loading_changes.get(), 0);
        assert_eq!(
            *view.toasts.borrow(),
            vec![(ToastLevel::Warning, "Please select files to process".to_string())]
        );
    }

    #[test]
    fn test_successful_conversion() {
        let api = FakeApi::new(
            uploaded(&["a.bin"]),
            Ok(ProcessResponse {
                status: Some("success".into()),
                results: vec![success("a.txt", "a.bin")],
                error: None,
            }),
        );
        let view = RecordingView::default();

        let outcome = block_on(submit(&api, &view, &files(&["a.txt"]), OutputFormat::Jsonl));

        assert_eq!(outcome, SubmitOutcome::Completed { converted: 1 });
        assert_eq!(*api.uploaded.borrow(), vec!["a.txt".to_string()]);
        assert_eq!(
            *api.processed.borrow(),
            vec![ProcessRequest {
                files: vec!["a.bin".into()],
                format: OutputFormat::Jsonl,
            }]
        );

        let outcomes = view.outcomes.borrow();
        assert_eq!(*outcomes, vec![success("a.txt", "a.bin")]);
        assert_eq!(outcomes[0].download_url(""), Some("/download/a.bin".into()));

        assert!(!view.loading.get());
        assert_eq!(
            *view.toasts.borrow(),
            vec![(ToastLevel::Success, "Files processed successfully!".to_string())]
        );
        assert_eq!(
            *view.phases.borrow(),
            vec![
                SubmitPhase::Submitting,
                SubmitPhase::Uploading,
                SubmitPhase::Processing,
                SubmitPhase::Done,
                SubmitPhase::Idle,
            ]
        );
        assert_eq!(view.phase.get(), SubmitPhase::Idle);
    }

    #[test]
    fn test_logs_uploaded_then_complete() {
        let api = FakeApi::new(
            uploaded(&["a.bin", "b.bin"]),
            Ok(ProcessResponse {
                status: None,
                results: vec![
                    success("a.txt", "a.bin"),
                    ConversionOutcome::Failure {
                        original: "b.pdf".into(),
                        error: "unreadable".into(),
                    },
                ],
                error: None,
            }),
        );
        let view = RecordingView::default();

        block_on(submit(&api, &view, &files(&["a.txt", "b.pdf"]), OutputFormat::Chat));

        let logs = view.logs.borrow();
        let info: Vec<&str> = logs
            .iter()
            .filter(|(level, _)| *level == LogLevel::Info)
            .map(|(_, message)| message.as_str())
            .collect();
        assert_eq!(
            info,
            vec![
                "Files uploaded successfully. Starting processing...",
                "Processing complete!"
            ]
        );

        let outcomes = view.outcomes.borrow();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].original(), "a.txt");
        assert_eq!(outcomes[1].original(), "b.pdf");
        assert_eq!(outcomes[1].download_url(""), None);
    }

    #[test]
    fn test_upload_error_skips_process() {
        let api = FakeApi::new(
            Ok(upstream_error("too large")),
            Ok(ProcessResponse::default()),
        );
        let view = RecordingView::default();
        view.outcomes.borrow_mut().push(success("old.txt", "old.bin"));

        let outcome = block_on(submit(&api, &view, &files(&["a.txt"]), OutputFormat::Csv));

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(AppError::Upstream("too large".into()))
        );
        assert!(api.processed.borrow().is_empty());
        assert!(view
            .logs
            .borrow()
            .iter()
            .any(|(level, message)| *level == LogLevel::Error && message.contains("too large")));
        assert_eq!(
            *view.toasts.borrow(),
            vec![(ToastLevel::Error, "too large".to_string())]
        );
        assert!(!view.loading.get());
        assert_eq!(view.phase.get(), SubmitPhase::Idle);
        // previous results untouched
        assert_eq!(view.outcomes.borrow().len(), 1);
    }

    #[test]
    fn test_process_error_is_reported() {
        let api = FakeApi::new(
            uploaded(&["a.txt"]),
            Ok(ProcessResponse {
                status: None,
                results: Vec::new(),
                error: Some("No API keys configured".into()),
            }),
        );
        let view = RecordingView::default();

        let outcome = block_on(submit(&api, &view, &files(&["a.txt"]), OutputFormat::Table));

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(AppError::Upstream("No API keys configured".into()))
        );
        assert_eq!(
            view.logs.borrow().last(),
            Some(&(LogLevel::Error, "Error: No API keys configured".to_string()))
        );
        assert!(view.outcomes.borrow().is_empty());
        assert!(!view.loading.get());
    }

    #[test]
    fn test_transport_error_takes_same_path() {
        let api = FakeApi::new(
            Err(AppError::Transport("HTTP request failed: connection refused".into())),
            Ok(ProcessResponse::default()),
        );
        let view = RecordingView::default();

        let outcome = block_on(submit(&api, &view, &files(&["a.txt"]), OutputFormat::Csv));

        assert!(matches!(outcome, SubmitOutcome::Failed(AppError::Transport(_))));
        assert_eq!(
            *view.toasts.borrow(),
            vec![(
                ToastLevel::Error,
                "HTTP request failed: connection refused".to_string()
            )]
        );
        assert!(!view.loading.get());
        assert_eq!(view.phase.get(), SubmitPhase::Idle);
    }

    #[test]
    fn test_busy_guard_rejects_second_submission() {
        let api = FakeApi::new(uploaded(&["a.txt"]), Ok(ProcessResponse::default()));
        let view = RecordingView::default();
        view.phase.set(SubmitPhase::Uploading);

        let outcome = block_on(submit(&api, &view, &files(&["a.txt"]), OutputFormat::Csv));

        assert_eq!(outcome, SubmitOutcome::Rejected(AppError::Busy));
        assert_eq!(api.calls(), 0);
        assert_eq!(view.phase.get(), SubmitPhase::Uploading);
        assert_eq!(view.loading_changes.get(), 0);
    }

    #[test]
    fn test_success_returns_to_idle_and_accepts_resubmit() {
        let api = FakeApi::new(
            uploaded(&["a.bin"]),
            Ok(ProcessResponse {
                status: None,
                results: vec![success("a.txt", "a.bin")],
                error: None,
            }),
        );
        let view = RecordingView::default();

        block_on(submit(&api, &view, &files(&["a.txt"]), OutputFormat::Csv));
        assert_eq!(view.phase.get(), SubmitPhase::Idle);
        assert!(!view.phase.get().is_busy());
        let second = block_on(submit(&api, &view, &files(&["a.txt"]), OutputFormat::Csv));
        assert_eq!(second, SubmitOutcome::Completed { converted: 1 });

        // results accumulate across submissions
        assert_eq!(view.outcomes.borrow().len(), 2);
        assert_eq!(api.processed.borrow().len(), 2);
    }

    #[test]
    fn test_oversized_selection_warns_but_uploads() {
        let api = FakeApi::new(uploaded(&["big.pdf"]), Ok(ProcessResponse::default()));
        let view = RecordingView::default();
        let big = PendingFiles::new(vec![FakeFile {
            name: "big.pdf",
            size: MAX_UPLOAD_BYTES + 1,
        }]);

        block_on(submit(&api, &view, &big, OutputFormat::Csv));

        assert_eq!(view.logs.borrow()[0].0, LogLevel::Warning);
        assert_eq!(*api.uploaded.borrow(), vec!["big.pdf".to_string()]);
    }

    #[test]
    fn test_phase_busy_states() {
        assert!(!SubmitPhase::Idle.is_busy());
        assert!(SubmitPhase::Submitting.is_busy());
        assert!(SubmitPhase::Uploading.is_busy());
        assert!(SubmitPhase::Processing.is_busy());
        assert!(!SubmitPhase::Done.is_busy());
    }
}
