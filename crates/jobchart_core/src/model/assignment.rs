//! Job slots and the result of one assignment round.

/// A named result region shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobSlot {
    /// Two students from the combined pool.
    PaperPassers,
    /// One student from the combined pool.
    Messenger,
    /// One third-grade student.
    WeeklyHelper1,
    /// One second-grade student.
    WeeklyHelper2,
}

impl JobSlot {
    pub const ALL: [JobSlot; 4] = [
        JobSlot::PaperPassers,
        JobSlot::Messenger,
        JobSlot::WeeklyHelper1,
        JobSlot::WeeklyHelper2,
    ];

    /// Stable identifier hosts use to locate the display region.
    pub fn slot_id(self) -> &'static str {
        match self {
            Self::PaperPassers => "paperPassers",
            Self::Messenger => "messenger",
            Self::WeeklyHelper1 => "weeklyHelper1",
            Self::WeeklyHelper2 => "weeklyHelper2",
        }
    }

    pub fn from_slot_id(slot_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.slot_id() == slot_id)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PaperPassers => "Paper Passers",
            Self::Messenger => "Messenger",
            Self::WeeklyHelper1 => "Weekly Helper (3rd grade)",
            Self::WeeklyHelper2 => "Weekly Helper (2nd grade)",
        }
    }
}

/// Names picked for every job in one round. `None` means nobody was available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pub paper_passers: (Option<String>, Option<String>),
    pub messenger: Option<String>,
    pub weekly_helper_1: Option<String>,
    pub weekly_helper_2: Option<String>,
}

impl Assignment {
    /// Values to render into `slot`, in display order.
    pub fn slot_values(&self, slot: JobSlot) -> Vec<Option<&str>> {
        match slot {
            JobSlot::PaperPassers => vec![
                self.paper_passers.0.as_deref(),
                self.paper_passers.1.as_deref(),
            ],
            JobSlot::Messenger => vec![self.messenger.as_deref()],
            JobSlot::WeeklyHelper1 => vec![self.weekly_helper_1.as_deref()],
            JobSlot::WeeklyHelper2 => vec![self.weekly_helper_2.as_deref()],
        }
    }
}
