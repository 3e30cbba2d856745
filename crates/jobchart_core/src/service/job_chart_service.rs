//! Host-facing job chart session: roster inputs bound to save, assign and clear.
//!
//! # Responsibility
//! - Fill roster inputs from storage when a session opens.
//! - Run the three user actions and report them through a `Notifier`.
//!
//! # Invariants
//! - Actions are independent; none requires another to run first.
//! - A rejected assign leaves inputs, slots and storage untouched.

use crate::model::roster::{Grade, Roster, RosterPair};
use crate::render::slots::RenderTarget;
use crate::repo::kv_store::KeyValueStore;
use crate::service::assignment_service::{reset_slots, AssignOutcome, AssignmentService};
use crate::service::ServiceResult;
use log::info;
use rand::Rng;

/// User-facing acknowledgement raised by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ListsSaved,
    ListsCleared,
    EmptyRosters,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::ListsSaved => "Lists saved!",
            Self::ListsCleared => "Saved lists cleared.",
            Self::EmptyRosters => "Please enter at least one student in either list.",
        }
    }

    /// Warnings abort the action that raised them.
    pub fn is_warning(self) -> bool {
        matches!(self, Self::EmptyRosters)
    }
}

/// Delivers notices to the user; hosts decide how they are shown.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

impl<F: FnMut(Notice)> Notifier for F {
    fn notify(&mut self, notice: Notice) {
        self(notice)
    }
}

/// Raw text of the two roster input boxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterInputs {
    pub third: String,
    pub second: String,
}

impl RosterInputs {
    pub fn from_rosters(rosters: &RosterPair) -> Self {
        Self {
            third: rosters.third.to_input_text(),
            second: rosters.second.to_input_text(),
        }
    }

    pub fn text(&self, grade: Grade) -> &str {
        match grade {
            Grade::Third => &self.third,
            Grade::Second => &self.second,
        }
    }

    pub fn set_text(&mut self, grade: Grade, text: impl Into<String>) {
        let slot = match grade {
            Grade::Third => &mut self.third,
            Grade::Second => &mut self.second,
        };
        *slot = text.into();
    }

    pub fn parse(&self) -> RosterPair {
        RosterPair::new(Roster::parse(&self.third), Roster::parse(&self.second))
    }

    pub fn clear(&mut self) {
        self.third.clear();
        self.second.clear();
    }
}

/// One interactive session over a store, a render target and a notifier.
pub struct JobChartService<S, T, N, R>
where
    S: KeyValueStore,
    T: RenderTarget,
    N: Notifier,
    R: Rng,
{
    inputs: RosterInputs,
    target: T,
    notifier: N,
    assigner: AssignmentService<S, R>,
}

impl<S, T, N, R> JobChartService<S, T, N, R>
where
    S: KeyValueStore,
    T: RenderTarget,
    N: Notifier,
    R: Rng,
{
    /// Opens a session and fills the inputs from saved rosters.
    pub fn open(assigner: AssignmentService<S, R>, target: T, notifier: N) -> ServiceResult<Self> {
        let saved = assigner.store().load()?;
        Ok(Self {
            inputs: RosterInputs::from_rosters(&saved),
            target,
            notifier,
            assigner,
        })
    }

    pub fn inputs(&self) -> &RosterInputs {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut RosterInputs {
        &mut self.inputs
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn assigner(&self) -> &AssignmentService<S, R> {
        &self.assigner
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Parses and saves both inputs.
    pub fn save(&mut self) -> ServiceResult<RosterPair> {
        let rosters = self.inputs.parse();
        self.assigner.store().save(&rosters)?;
        self.notifier.notify(Notice::ListsSaved);
        Ok(rosters)
    }

    /// Assigns jobs from the current inputs; warns when both are empty.
    pub fn assign(&mut self) -> ServiceResult<AssignOutcome> {
        let outcome = self.assigner.assign(
            &self.inputs.third,
            &self.inputs.second,
            &mut self.target,
        )?;
        if outcome == AssignOutcome::EmptyRosters {
            self.notifier.notify(Notice::EmptyRosters);
        }
        Ok(outcome)
    }

    /// Deletes saved rosters, blanks inputs and resets every job slot.
    pub fn clear(&mut self) -> ServiceResult<()> {
        self.assigner.store().clear()?;
        self.inputs.clear();
        reset_slots(&mut self.target);
        info!("event=session_clear module=service status=ok");
        self.notifier.notify(Notice::ListsCleared);
        Ok(())
    }
}
