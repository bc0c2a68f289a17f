//! Single-slot solve history with replay.
//!
//! State machine
//! - `Empty`: nothing recorded yet.
//! - `Populated`: an attempt is held and displayed normally.
//! - `Suppressed`: an attempt is held, but the last action replayed it, so the
//!   panel shows all-NA ("history used as current input").
//!
//! Transitions
//! - `record`: any → `Populated`, overwriting the held attempt.
//! - `replay`: `Populated | Suppressed` → `Suppressed`; `Empty` stays `Empty`.
//!
//! Nothing ever removes a held attempt.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cfg::SolveCfg;
use crate::classify::SolveResult;
use crate::solve::{solve_with, Mode, Snapshot};
use crate::types::{Angles, Reason};

/// Immutable record of one solve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryAttempt {
    snapshot: Snapshot,
    result: SolveResult,
}

impl HistoryAttempt {
    pub fn new(snapshot: Snapshot, result: SolveResult) -> Self {
        Self { snapshot, result }
    }

    pub fn mode(&self) -> Mode {
        self.snapshot.mode()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn result(&self) -> &SolveResult {
        &self.result
    }

    pub fn preview(&self) -> Option<Angles> {
        self.result.preview
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum HistoryState {
    #[default]
    Empty,
    Populated(HistoryAttempt),
    Suppressed(HistoryAttempt),
}

impl HistoryState {
    pub fn exists(&self) -> bool {
        !matches!(self, HistoryState::Empty)
    }

    pub fn suppressed(&self) -> bool {
        matches!(self, HistoryState::Suppressed(_))
    }

    pub fn attempt(&self) -> Option<&HistoryAttempt> {
        match self {
            HistoryState::Empty => None,
            HistoryState::Populated(a) | HistoryState::Suppressed(a) => Some(a),
        }
    }
}

/// What a replay hands back to the input surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Replay {
    /// Points or inputs to re-populate.
    pub snapshot: Snapshot,
    /// Fresh solve of `snapshot`; not recorded.
    pub result: SolveResult,
}

#[derive(Clone, Debug, Default)]
pub struct HistoryStore {
    state: HistoryState,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    pub fn record(&mut self, attempt: HistoryAttempt) {
        info!(mode = ?attempt.mode(), status = %attempt.result.status, "history recorded");
        self.state = HistoryState::Populated(attempt);
    }

    /// Re-solve the held attempt without recording it and enter `Suppressed`.
    pub fn replay(&mut self, cfg: &SolveCfg) -> Option<Replay> {
        let attempt = match std::mem::take(&mut self.state) {
            HistoryState::Empty => return None,
            HistoryState::Populated(a) | HistoryState::Suppressed(a) => a,
        };
        let snapshot = attempt.snapshot.clone();
        let result = solve_with(cfg, &snapshot);
        info!(mode = ?attempt.mode(), "history replayed");
        self.state = HistoryState::Suppressed(attempt);
        Some(Replay { snapshot, result })
    }

    /// Result the history panel should show in the current state.
    pub fn display(&self) -> SolveResult {
        match &self.state {
            HistoryState::Empty => SolveResult::all_na(Reason::NoHistory),
            HistoryState::Suppressed(_) => SolveResult::all_na(Reason::HistoryInUse),
            HistoryState::Populated(a) => a.result,
        }
    }
}
