//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose roster load/save, job assignment and clear as sync calls.
//! - Translate core errors into message strings for the UI.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Every call opens its own connection; no session state lives here.
//! - Slot responses always carry all four job slots in display order.

use jobchart_core::db::open_db;
use jobchart_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, AssignOutcome,
    AssignmentService, JobChartService, Notice, Notifier, RosterStore, SlotBoard,
    SqliteKeyValueStore,
};
use log::error;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const ROSTER_DB_FILE_NAME: &str = "jobchart.sqlite3";
static ROSTER_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// Returns an empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Saved roster text for the two input boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterTextResponse {
    pub ok: bool,
    /// Third-grade names joined by `\n`.
    pub third_text: String,
    /// Second-grade names joined by `\n`.
    pub second_text: String,
    pub message: String,
}

/// Rendered content of one job slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    /// Slot id (`paperPassers|messenger|weeklyHelper1|weeklyHelper2`).
    pub slot_id: String,
    pub title: String,
    /// Names, or the single placeholder glyph.
    pub lines: Vec<String>,
}

/// Envelope for save / assign / clear actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobChartActionResponse {
    /// False on storage failure and on the empty-roster warning.
    pub ok: bool,
    /// Notice text to show the user, or the error message.
    pub message: String,
    /// Job slots after the action; empty for `roster_save` and failures.
    pub slots: Vec<SlotView>,
}

impl JobChartActionResponse {
    fn from_notice(notice: Option<Notice>, slots: Vec<SlotView>) -> Self {
        Self {
            ok: !notice.is_some_and(Notice::is_warning),
            message: notice.map(Notice::message).unwrap_or_default().to_string(),
            slots,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            slots: Vec::new(),
        }
    }
}

/// Loads saved rosters as input-box text.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_load() -> RosterTextResponse {
    roster_load_at(&resolve_roster_db_path())
}

/// Saves both roster inputs.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_save(third_text: String, second_text: String) -> JobChartActionResponse {
    roster_save_at(&resolve_roster_db_path(), third_text, second_text)
}

/// Assigns jobs from both roster inputs and saves them.
#[flutter_rust_bridge::frb(sync)]
pub fn jobs_assign(third_text: String, second_text: String) -> JobChartActionResponse {
    jobs_assign_at(&resolve_roster_db_path(), third_text, second_text)
}

/// Deletes saved rosters and returns the reset job slots.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_clear() -> JobChartActionResponse {
    roster_clear_at(&resolve_roster_db_path())
}

type FfiSession<'conn> =
    JobChartService<SqliteKeyValueStore<'conn>, SlotBoard, LastNotice, StdRng>;

/// Keeps the most recent notice so it can be returned in the envelope.
#[derive(Debug, Default)]
struct LastNotice(Option<Notice>);

impl Notifier for LastNotice {
    fn notify(&mut self, notice: Notice) {
        self.0 = Some(notice);
    }
}

fn roster_load_at(db_path: &Path) -> RosterTextResponse {
    match with_session(db_path, |session| Ok(session.inputs().clone())) {
        Ok(inputs) => RosterTextResponse {
            ok: true,
            third_text: inputs.third,
            second_text: inputs.second,
            message: String::new(),
        },
        Err(message) => RosterTextResponse {
            ok: false,
            third_text: String::new(),
            second_text: String::new(),
            message,
        },
    }
}

fn roster_save_at(
    db_path: &Path,
    third_text: String,
    second_text: String,
) -> JobChartActionResponse {
    let result = with_session(db_path, |session| {
        session.inputs_mut().third = third_text;
        session.inputs_mut().second = second_text;
        session.save()?;
        Ok(JobChartActionResponse::from_notice(session.notifier().0, Vec::new()))
    });
    result.unwrap_or_else(JobChartActionResponse::failure)
}

fn jobs_assign_at(
    db_path: &Path,
    third_text: String,
    second_text: String,
) -> JobChartActionResponse {
    let result = with_session(db_path, |session| {
        session.inputs_mut().third = third_text;
        session.inputs_mut().second = second_text;
        let slots = match session.assign()? {
            AssignOutcome::Assigned(_) => slot_views(session.target()),
            AssignOutcome::EmptyRosters => Vec::new(),
        };
        Ok(JobChartActionResponse::from_notice(session.notifier().0, slots))
    });
    result.unwrap_or_else(JobChartActionResponse::failure)
}

fn roster_clear_at(db_path: &Path) -> JobChartActionResponse {
    let result = with_session(db_path, |session| {
        session.clear()?;
        Ok(JobChartActionResponse::from_notice(
            session.notifier().0,
            slot_views(session.target()),
        ))
    });
    result.unwrap_or_else(JobChartActionResponse::failure)
}

fn resolve_roster_db_path() -> PathBuf {
    ROSTER_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("JOBCHART_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(ROSTER_DB_FILE_NAME)
        })
        .clone()
}

fn with_session<T>(
    db_path: &Path,
    f: impl FnOnce(&mut FfiSession<'_>) -> jobchart_core::ServiceResult<T>,
) -> Result<T, String> {
    let conn = open_db(db_path).map_err(|err| format!("roster DB open failed: {err}"))?;
    let backend = SqliteKeyValueStore::try_new(&conn)
        .map_err(|err| format!("roster store init failed: {err}"))?;
    let assigner = AssignmentService::with_entropy(RosterStore::new(backend));
    let mut session = JobChartService::open(assigner, SlotBoard::job_chart(), LastNotice::default())
        .map_err(|err| err.to_string())?;
    f(&mut session).map_err(|err| {
        error!("event=ffi_call module=ffi status=error error={err}");
        err.to_string()
    })
}

fn slot_views(board: &SlotBoard) -> Vec<SlotView> {
    board
        .iter()
        .map(|(slot, display)| SlotView {
            slot_id: slot.slot_id().to_string(),
            title: slot.title().to_string(),
            lines: display.texts().into_iter().map(str::to_string).collect(),
        })
        .collect()
}
