//! A single participant's voting session.

use quadra_grid::GridSpec;
use quadra_ledger::{Allocator, Decision, ResultSet, WeightChange};
use tracing::{debug, info};

use crate::error::{Result, SessionError};
use crate::events::{SessionEvent, SessionSnapshot};

/// Drives one [`Allocator`] from the first request to the final result set,
/// recording every request on a timeline.
#[derive(Debug, Clone)]
pub struct Session {
    allocator: Allocator,
    events: Vec<SessionEvent>,
    next_seq: u64,
    finished: bool,
}

impl Session {
    /// Open a session on an ordered candidate list.
    pub fn new(candidates: Vec<String>, spec: GridSpec) -> Result<Self> {
        let allocator = Allocator::new(candidates, spec)?;
        Ok(Self {
            allocator,
            events: Vec::new(),
            next_seq: 0,
            finished: false,
        })
    }

    fn push(&mut self, event: SessionEvent) {
        self.events.push(event);
        self.next_seq += 1;
    }

    fn ensure_open(&self) -> Result<()> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        Ok(())
    }

    fn record(&mut self, decision: Decision) -> Decision {
        let remaining = self.allocator.remaining_budget();
        if let Some(rejection) = decision.rejection() {
            debug!(seq = self.next_seq, %rejection, "request not applied");
        }
        self.push(SessionEvent::from_decision(self.next_seq, &decision, remaining));
        decision
    }

    /// Set a candidate's weight.
    pub fn request(&mut self, candidate: usize, weight: u32) -> Result<Decision> {
        self.ensure_open()?;
        let decision = self.allocator.propose_weight(candidate, weight)?;
        Ok(self.record(decision))
    }

    /// The "+" action.
    pub fn increment(&mut self, candidate: usize) -> Result<Decision> {
        self.ensure_open()?;
        let decision = self.allocator.increment(candidate)?;
        Ok(self.record(decision))
    }

    /// The "−" action.
    pub fn decrement(&mut self, candidate: usize) -> Result<Decision> {
        self.ensure_open()?;
        let decision = self.allocator.decrement(candidate)?;
        Ok(self.record(decision))
    }

    /// Apply an untyped request, e.g. one parsed from JSON.
    pub fn apply(&mut self, request: WeightChange) -> Result<Decision> {
        self.ensure_open()?;
        let decision = self.allocator.apply(request)?;
        Ok(self.record(decision))
    }

    /// Close the ballot and hand back the final allocation.
    pub fn finish(&mut self) -> Result<ResultSet> {
        self.ensure_open()?;
        let results = self.allocator.finalize();
        let spent = results.total_cost();
        self.push(SessionEvent::Finalized {
            seq: self.next_seq,
            spent,
        });
        self.finished = true;
        info!(
            candidates = results.len(),
            spent,
            requests = self.events.len() - 1,
            "session finished"
        );
        Ok(results)
    }

    pub fn allocator(&self) -> &Allocator {
        &self.allocator
    }

    /// Timeline of every request so far.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            candidates: self.allocator.candidates().to_vec(),
            allocation: self.allocator.snapshot(),
            event_count: self.events.len(),
            finished: self.finished,
        }
    }

    /// Current state as JSON.
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}
