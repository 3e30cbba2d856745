//! Core domain logic for the classroom job chart.
//! This crate owns roster parsing, random job selection, slot rendering and
//! roster persistence. Hosts (CLI, FFI) only wire inputs and outputs.

pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod select;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::assignment::{Assignment, JobSlot};
pub use model::roster::{Grade, Roster, RosterPair};
pub use render::slots::{
    set_lines, DisplaySlot, RenderTarget, SlotBoard, SlotContent, SlotLine, LINE_CLASS,
    PLACEHOLDER_GLYPH,
};
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use repo::roster_store::{RosterStore, ROSTER_STORAGE_KEY};
pub use select::picker::{pick_one, pick_two_distinct, pick_two_distinct_indices};
pub use service::assignment_service::{
    plan_assignment, render_assignment, reset_slots, AssignOutcome, AssignmentService,
};
pub use service::job_chart_service::{JobChartService, Notice, Notifier, RosterInputs};
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
