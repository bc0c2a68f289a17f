//! Session controller: the single explicit state record behind the UI.
//!
//! One `Session` owns the active mode, the clicked points, the field inputs,
//! the current result and the history. Each UI event maps to one method that
//! runs to completion; rendering reads through `&self` only.

use tracing::debug;

use crate::cfg::SolveCfg;
use crate::classify::SolveResult;
use crate::history::{HistoryAttempt, HistoryState, HistoryStore};
use crate::preview::Scene;
use crate::solve::{solve_with, Mode, Snapshot};
use crate::text::parse_number;
use crate::types::{Angles, FieldKey, Inputs, Point, Reason};

/// Points needed for a drawn triangle; further clicks are ignored.
pub const MAX_POINTS: usize = 3;

#[derive(Clone, Debug)]
pub struct Session {
    cfg: SolveCfg,
    mode: Mode,
    points: Vec<Point>,
    hover: Option<Point>,
    inputs: Inputs,
    current: SolveResult,
    preview: Option<Angles>,
    history: HistoryStore,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_cfg(SolveCfg::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts in draw mode with nothing entered.
    pub fn with_cfg(cfg: SolveCfg) -> Self {
        Self {
            cfg,
            mode: Mode::Draw,
            points: Vec::with_capacity(MAX_POINTS),
            hover: None,
            inputs: Inputs::default(),
            current: SolveResult::all_na(Reason::WaitingForInput),
            preview: None,
            history: HistoryStore::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }
    pub fn current(&self) -> &SolveResult {
        &self.current
    }
    pub fn preview(&self) -> Option<&Angles> {
        self.preview.as_ref()
    }
    pub fn history(&self) -> &HistoryState {
        self.history.state()
    }
    /// What the history panel shows right now.
    pub fn history_display(&self) -> SolveResult {
        self.history.display()
    }

    /// Switch mode and clear the surface being left.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        match mode {
            Mode::Draw => self.inputs = Inputs::default(),
            Mode::Angles => self.clear_points(),
        }
        self.preview = None;
        self.current = SolveResult::all_na(Reason::WaitingForInput);
    }

    /// Switch mode keeping inputs, points and the current result.
    pub fn set_mode_preserving(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Add a canvas click. Ignored outside draw mode or once three points exist.
    pub fn click(&mut self, p: Point) -> bool {
        if self.mode != Mode::Draw || self.points.len() >= MAX_POINTS {
            return false;
        }
        self.points.push(p);
        true
    }

    pub fn hover(&mut self, p: Option<Point>) {
        if self.mode == Mode::Draw {
            self.hover = p;
        }
    }

    pub fn set_input(&mut self, key: FieldKey, value: Option<f64>) {
        self.inputs.set(key, value);
    }

    /// Set a field from its text; unparsable text clears the field.
    pub fn set_input_text(&mut self, key: FieldKey, text: &str) {
        self.inputs.set(key, parse_number(text));
    }

    /// Clear the active surface.
    pub fn reset(&mut self) {
        let reason = match self.mode {
            Mode::Draw => {
                self.clear_points();
                Reason::WaitingForPoints
            }
            Mode::Angles => {
                self.inputs = Inputs::default();
                Reason::WaitingForInput
            }
        };
        self.preview = None;
        self.current = SolveResult::all_na(reason);
    }

    fn snapshot(&self) -> Snapshot {
        match self.mode {
            Mode::Draw => Snapshot::Draw(self.points.clone()),
            Mode::Angles => Snapshot::Angles(self.inputs),
        }
    }

    fn apply(&mut self, result: SolveResult) {
        self.preview = result.preview;
        self.current = result;
    }

    /// Solve the active surface and record the attempt.
    pub fn compute(&mut self) -> &SolveResult {
        let snapshot = self.snapshot();
        let result = solve_with(&self.cfg, &snapshot);
        self.apply(result);
        self.history.record(HistoryAttempt::new(snapshot, result));
        &self.current
    }

    /// Restore the last attempt into the input surface and re-solve it
    /// without recording. Returns false when there is no history.
    pub fn replay(&mut self) -> bool {
        let Some(replay) = self.history.replay(&self.cfg) else {
            return false;
        };
        self.set_mode_preserving(replay.snapshot.mode());
        match replay.snapshot {
            Snapshot::Draw(points) => {
                self.points = points;
                self.hover = None;
            }
            Snapshot::Angles(inputs) => self.inputs = inputs,
        }
        debug!(mode = ?self.mode, status = %replay.result.status, "replay applied");
        self.apply(replay.result);
        true
    }

    /// Main canvas scene for a `width × height` viewport.
    pub fn scene(&self, width: f64, height: f64) -> Scene {
        match self.mode {
            Mode::Draw => Scene::drawing(&self.points, self.hover, self.preview.as_ref()),
            Mode::Angles => Scene::from_angles(self.preview.as_ref(), width, height, true),
        }
    }

    /// History thumbnail: the stored preview triangle without labels.
    pub fn history_scene(&self, width: f64, height: f64) -> Scene {
        let angles = self.history.state().attempt().and_then(|a| a.preview());
        Scene::from_angles(angles.as_ref(), width, height, false)
    }

    fn clear_points(&mut self) {
        self.points.clear();
        self.hover = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Status;
    use nalgebra::vector;

    #[test]
    fn clicks_stop_at_three_and_only_in_draw_mode() {
        let mut s = Session::new();
        for i in 0..5 {
            s.click(vector![i as f64, (i * i) as f64]);
        }
        assert_eq!(s.points().len(), MAX_POINTS);
        s.set_mode(Mode::Angles);
        assert!(s.points().is_empty());
        assert!(!s.click(vector![1.0, 1.0]));
        assert!(s.points().is_empty());
    }

    #[test]
    fn compute_records_and_replay_restores() {
        let mut s = Session::new();
        s.set_mode(Mode::Angles);
        s.set_input_text(FieldKey::A, "60");
        s.set_input_text(FieldKey::B, "60");
        assert_eq!(s.compute().status, Status::Ok);
        let recorded = s.history().attempt().cloned().unwrap();

        // switch away, which clears the angle inputs
        s.set_mode(Mode::Draw);
        assert!(s.inputs().is_empty());
        assert_eq!(s.history_display(), *recorded.result());

        assert!(s.replay());
        assert_eq!(s.mode(), Mode::Angles);
        assert_eq!(s.inputs().interior(crate::Vertex::A), Some(60.0));
        assert_eq!(s.current(), recorded.result());
        assert_eq!(s.history().attempt(), Some(&recorded));
        assert!(s.history().suppressed());
        assert_eq!(s.history_display().status_reason, Some(Reason::HistoryInUse));

        // a fresh compute lifts the suppression
        s.compute();
        assert!(!s.history().suppressed());
    }

    #[test]
    fn replay_without_history_is_a_no_op() {
        let mut s = Session::new();
        assert!(!s.replay());
        assert_eq!(*s.history(), HistoryState::Empty);
        assert_eq!(s.history_display().status_reason, Some(Reason::NoHistory));
    }

    #[test]
    fn reset_reason_depends_on_mode() {
        let mut s = Session::new();
        s.click(vector![0.0, 0.0]);
        s.reset();
        assert!(s.points().is_empty());
        assert_eq!(s.current().status_reason, Some(Reason::WaitingForPoints));

        s.set_mode(Mode::Angles);
        s.set_input(FieldKey::C, Some(20.0));
        s.reset();
        assert!(s.inputs().is_empty());
        assert_eq!(s.current().status_reason, Some(Reason::WaitingForInput));
    }

    #[test]
    fn draw_replay_restores_points() {
        let mut s = Session::new();
        for p in [vector![0.0, 0.0], vector![10.0, 0.0], vector![5.0, 5.0]] {
            s.click(p);
        }
        s.compute();
        assert!(s.preview().is_some());
        s.set_mode(Mode::Angles);
        assert!(s.preview().is_none());
        assert!(s.replay());
        assert_eq!(s.mode(), Mode::Draw);
        assert_eq!(s.points().len(), 3);
        assert_eq!(s.scene(200.0, 200.0).labels.len(), 3);
        assert_eq!(s.history_scene(100.0, 100.0).segments.len(), 3);
        assert!(s.history_scene(100.0, 100.0).labels.is_empty());
    }

    #[test]
    fn scenes_do_not_touch_state() {
        let mut s = Session::new();
        s.set_mode(Mode::Angles);
        s.set_input(FieldKey::A, Some(50.0));
        s.set_input(FieldKey::B, Some(60.0));
        s.compute();
        let before = *s.current();
        let a = s.scene(300.0, 200.0);
        let b = s.scene(300.0, 200.0);
        assert_eq!(a, b);
        assert_eq!(*s.current(), before);
    }
}
