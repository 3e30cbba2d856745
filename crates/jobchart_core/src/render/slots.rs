//! Display slots and the line renderer.
//!
//! # Responsibility
//! - Replace a slot's content with one labeled line per picked name.
//! - Show a single placeholder glyph when there is nothing to show.
//!
//! # Invariants
//! - A rendered slot never contains an empty line.
//! - Rendering into an unknown slot id changes nothing.

use crate::model::assignment::JobSlot;
use std::fmt::Write as _;

/// Shown when a slot has no assigned name.
pub const PLACEHOLDER_GLYPH: &str = "\u{2014}";
/// Label attached to every rendered name line.
pub const LINE_CLASS: &str = "line";

/// One rendered name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLine {
    pub class: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotContent {
    /// Nothing rendered yet.
    #[default]
    Blank,
    /// The placeholder glyph.
    Placeholder,
    Lines(Vec<SlotLine>),
}

/// A single display region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySlot {
    content: SlotContent,
}

impl DisplaySlot {
    pub fn content(&self) -> &SlotContent {
        &self.content
    }

    pub fn clear(&mut self) {
        self.content = SlotContent::Blank;
    }

    pub fn show_placeholder(&mut self) {
        self.content = SlotContent::Placeholder;
    }

    pub fn append_line(&mut self, text: &str) {
        let line = SlotLine {
            class: LINE_CLASS,
            text: text.to_string(),
        };
        match &mut self.content {
            SlotContent::Lines(lines) => lines.push(line),
            other => *other = SlotContent::Lines(vec![line]),
        }
    }

    /// Visible text of the slot, one entry per displayed element.
    pub fn texts(&self) -> Vec<&str> {
        match &self.content {
            SlotContent::Blank => Vec::new(),
            SlotContent::Placeholder => vec![PLACEHOLDER_GLYPH],
            SlotContent::Lines(lines) => lines.iter().map(|line| line.text.as_str()).collect(),
        }
    }
}

/// Host surface that owns display slots addressable by id.
pub trait RenderTarget {
    fn slot_mut(&mut self, slot_id: &str) -> Option<&mut DisplaySlot>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn slot_mut(&mut self, slot_id: &str) -> Option<&mut DisplaySlot> {
        (**self).slot_mut(slot_id)
    }
}

/// Renders `values` into the slot named `slot_id`.
///
/// `None` and empty strings count as absent. When nothing is present the slot
/// shows [`PLACEHOLDER_GLYPH`]; otherwise one line per present value, in order.
pub fn set_lines<T>(target: &mut T, slot_id: &str, values: &[Option<&str>])
where
    T: RenderTarget + ?Sized,
{
    let Some(slot) = target.slot_mut(slot_id) else {
        return;
    };
    slot.clear();

    let mut present = values
        .iter()
        .copied()
        .filter_map(|value| value.filter(|name| !name.is_empty()))
        .peekable();
    if present.peek().is_none() {
        slot.show_placeholder();
        return;
    }
    for name in present {
        slot.append_line(name);
    }
}

/// In-memory board of job slots, used by terminal and FFI hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBoard {
    slots: Vec<(JobSlot, DisplaySlot)>,
}

impl SlotBoard {
    /// Board with all four job slots, each blank.
    pub fn job_chart() -> Self {
        Self::with_slots(JobSlot::ALL)
    }

    /// Board with only the given slots; other ids are treated as missing.
    pub fn with_slots(slots: impl IntoIterator<Item = JobSlot>) -> Self {
        Self {
            slots: slots
                .into_iter()
                .map(|slot| (slot, DisplaySlot::default()))
                .collect(),
        }
    }

    pub fn slot(&self, job: JobSlot) -> Option<&DisplaySlot> {
        self.slots
            .iter()
            .find(|(slot, _)| *slot == job)
            .map(|(_, display)| display)
    }

    /// Visible texts of `job`; empty when the board has no such slot.
    pub fn texts(&self, job: JobSlot) -> Vec<String> {
        self.slot(job)
            .map(|display| display.texts().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (JobSlot, &DisplaySlot)> {
        self.slots.iter().map(|(slot, display)| (*slot, display))
    }

    /// One `Title: name, name` line per slot.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (slot, display) in self.iter() {
            let _ = writeln!(out, "{}: {}", slot.title(), display.texts().join(", "));
        }
        out
    }
}

impl Default for SlotBoard {
    fn default() -> Self {
        Self::job_chart()
    }
}

impl RenderTarget for SlotBoard {
    fn slot_mut(&mut self, slot_id: &str) -> Option<&mut DisplaySlot> {
        let job = JobSlot::from_slot_id(slot_id)?;
        self.slots
            .iter_mut()
            .find(|(slot, _)| *slot == job)
            .map(|(_, display)| display)
    }
}

#[cfg(test)]
mod tests {
    use super::{set_lines, SlotBoard, SlotContent, LINE_CLASS, PLACEHOLDER_GLYPH};
    use crate::model::assignment::JobSlot;

    #[test]
    fn present_values_render_as_labeled_lines() {
        let mut board = SlotBoard::job_chart();
        set_lines(&mut board, "paperPassers", &[Some("Ann"), Some("Cy")]);

        let slot = board.slot(JobSlot::PaperPassers).unwrap();
        match slot.content() {
            SlotContent::Lines(lines) => {
                assert_eq!(lines.len(), 2);
                assert!(lines.iter().all(|line| line.class == LINE_CLASS));
            }
            other => panic!("expected lines, got {other:?}"),
        }
        assert_eq!(board.texts(JobSlot::PaperPassers), ["Ann", "Cy"]);
    }

    #[test]
    fn absent_values_render_single_placeholder() {
        let mut board = SlotBoard::job_chart();
        set_lines(&mut board, "messenger", &[]);
        set_lines(&mut board, "weeklyHelper1", &[None]);
        set_lines(&mut board, "weeklyHelper2", &[None, Some("")]);

        for slot in [JobSlot::Messenger, JobSlot::WeeklyHelper1, JobSlot::WeeklyHelper2] {
            assert_eq!(board.texts(slot), [PLACEHOLDER_GLYPH]);
        }
    }

    #[test]
    fn absent_entries_are_filtered_from_mixed_values() {
        let mut board = SlotBoard::job_chart();
        set_lines(&mut board, "paperPassers", &[None, Some("Bo"), Some("")]);
        assert_eq!(board.texts(JobSlot::PaperPassers), ["Bo"]);
    }

    #[test]
    fn rendering_replaces_previous_content() {
        let mut board = SlotBoard::job_chart();
        set_lines(&mut board, "messenger", &[Some("Ann")]);
        set_lines(&mut board, "messenger", &[Some("Bo")]);
        assert_eq!(board.texts(JobSlot::Messenger), ["Bo"]);
    }

    #[test]
    fn unknown_or_missing_slot_is_ignored() {
        let mut board = SlotBoard::with_slots([JobSlot::Messenger]);
        let before = board.clone();
        set_lines(&mut board, "lineLeader", &[Some("Ann")]);
        set_lines(&mut board, "paperPassers", &[Some("Ann")]);
        assert_eq!(board, before);
    }

    #[test]
    fn render_text_lists_every_slot() {
        let mut board = SlotBoard::job_chart();
        set_lines(&mut board, "messenger", &[Some("Bo")]);
        let text = board.render_text();
        assert!(text.contains("Messenger: Bo"));
        assert_eq!(text.lines().count(), 4);
    }
}
