//! Assignment orchestration: parse, pick, render, persist.
//!
//! # Invariants
//! - When both rosters are empty nothing is rendered and nothing is saved.
//! - Weekly helper 1 is drawn from third grade only; helper 2 from second only.
//! - Every successful assignment also saves the rosters it was drawn from.

use crate::model::assignment::{Assignment, JobSlot};
use crate::model::roster::{Roster, RosterPair};
use crate::render::slots::{set_lines, RenderTarget};
use crate::repo::kv_store::KeyValueStore;
use crate::repo::roster_store::RosterStore;
use crate::select::picker::{pick_one, pick_two_distinct};
use crate::service::ServiceResult;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of one `assign` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    Assigned(Assignment),
    /// Both rosters were empty; nothing changed.
    EmptyRosters,
}

/// Draws one round of jobs from `rosters`.
///
/// Draw order: paper passers, messenger, weekly helper 1, weekly helper 2.
pub fn plan_assignment<R>(rosters: &RosterPair, rng: &mut R) -> Assignment
where
    R: Rng + ?Sized,
{
    let combined = rosters.combined();
    let (first_passer, second_passer) = pick_two_distinct(&combined, rng);
    let messenger = pick_one(&combined, rng);
    let weekly_helper_1 = pick_one(rosters.third.names(), rng);
    let weekly_helper_2 = pick_one(rosters.second.names(), rng);

    Assignment {
        paper_passers: (
            first_passer.map(|name| name.to_string()),
            second_passer.map(|name| name.to_string()),
        ),
        messenger: messenger.map(|name| name.to_string()),
        weekly_helper_1: weekly_helper_1.cloned(),
        weekly_helper_2: weekly_helper_2.cloned(),
    }
}

/// Renders every job slot of `assignment` into `target`.
pub fn render_assignment<T>(target: &mut T, assignment: &Assignment)
where
    T: RenderTarget + ?Sized,
{
    for slot in JobSlot::ALL {
        set_lines(target, slot.slot_id(), &assignment.slot_values(slot));
    }
}

/// Resets every job slot in `target` to the placeholder.
pub fn reset_slots<T>(target: &mut T)
where
    T: RenderTarget + ?Sized,
{
    for slot in JobSlot::ALL {
        set_lines(target, slot.slot_id(), &[]);
    }
}

/// Assignment use case over a roster store and a random source.
pub struct AssignmentService<S: KeyValueStore, R: Rng> {
    store: RosterStore<S>,
    rng: R,
}

impl<S: KeyValueStore> AssignmentService<S, StdRng> {
    /// Service with a generator seeded from OS entropy.
    pub fn with_entropy(store: RosterStore<S>) -> Self {
        Self::new(store, StdRng::from_entropy())
    }

    /// Service with a fixed seed; identical seeds replay identical rounds.
    pub fn with_seed(store: RosterStore<S>, seed: u64) -> Self {
        Self::new(store, StdRng::seed_from_u64(seed))
    }
}

impl<S: KeyValueStore, R: Rng> AssignmentService<S, R> {
    pub fn new(store: RosterStore<S>, rng: R) -> Self {
        Self { store, rng }
    }

    pub fn store(&self) -> &RosterStore<S> {
        &self.store
    }

    /// Parses both roster inputs, assigns jobs, renders them and saves the rosters.
    pub fn assign<T>(
        &mut self,
        third_text: &str,
        second_text: &str,
        target: &mut T,
    ) -> ServiceResult<AssignOutcome>
    where
        T: RenderTarget + ?Sized,
    {
        let rosters = RosterPair::new(Roster::parse(third_text), Roster::parse(second_text));
        if rosters.is_empty() {
            warn!("event=jobs_assign module=service status=rejected reason=empty_rosters");
            return Ok(AssignOutcome::EmptyRosters);
        }

        let assignment = plan_assignment(&rosters, &mut self.rng);
        render_assignment(target, &assignment);
        self.store.save(&rosters)?;

        info!(
            "event=jobs_assign module=service status=ok third={} second={}",
            rosters.third.len(),
            rosters.second.len()
        );
        Ok(AssignOutcome::Assigned(assignment))
    }
}
