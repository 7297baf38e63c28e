//! The visualizer session model.
//!
//! An explicit state machine drives the session: pick the two endpoints,
//! draw walls, replay the search animation, show the result. The A* core
//! runs to completion inside a single `update`; its per-neighbor snapshots
//! are replayed one per animation tick.

use std::collections::VecDeque;

use waygrid_astar::search;
use waygrid_core::{
    ButtonView, Canvas, CellState, Effect, Key, Model, MouseAction, Msg, Point, ViewFrame,
    VisualizerConfig,
};

use crate::layout::Layout;

const PICK_BANNER: &str = "First, pick a start and end point and press DONE";
const WALLS_BANNER: &str = "Now, draw some walls and press DONE";
const SEARCH_BANNER: &str = "Searching...";
const NO_PATH_MSG: &str = "No path found, make sure there is a gap between the walls";

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

enum Phase {
    /// Waiting for the user to mark the start and end cells.
    PickEndpoints { placed: u8 },
    /// Endpoints fixed; the user paints wall obstacles.
    DrawWalls,
    /// Search finished; its canvas snapshots are replayed one per tick.
    Animating {
        frames: VecDeque<Canvas>,
        shown: Canvas,
        outcome: Option<Vec<Point>>,
    },
    /// Final state: committed path (or absence) plus a summary message.
    ShowResult { message: String },
}

// ---------------------------------------------------------------------------
// PainterModel
// ---------------------------------------------------------------------------

/// The pathpainter application model.
pub struct PainterModel {
    layout: Layout,
    canvas: Canvas,
    phase: Phase,
    /// Start and end cells, recovered from the two painted Path markers in
    /// row-major order (first hit = start).
    endpoints: Option<(Point, Point)>,
    /// Primary button held, for drag-painting walls.
    dragging: bool,
}

impl PainterModel {
    pub fn new(viz: VisualizerConfig) -> Self {
        Self {
            layout: Layout::new(&viz),
            canvas: Canvas::new(viz.dimension),
            phase: Phase::PickEndpoints { placed: 0 },
            endpoints: None,
            dragging: false,
        }
    }

    fn animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    /// Effect to return from handlers that leave the phase untouched.
    fn keep(&self) -> Option<Effect> {
        if self.animating() {
            Some(Effect::Animate)
        } else {
            None
        }
    }

    // -----------------------------------------------------------------------
    // Input handling
    // -----------------------------------------------------------------------

    fn on_mouse(&mut self, action: MouseAction, pos: Point) -> Option<Effect> {
        match action {
            MouseAction::Main => {
                if self.animating() {
                    return self.keep();
                }
                if self.layout.done_rect().contains(pos) {
                    return self.on_done();
                }
                if self.layout.reset_rect().contains(pos) {
                    self.on_reset();
                    return None;
                }
                if let Some(cell) = self.layout.cell_at(pos) {
                    self.dragging = true;
                    self.paint_press(cell);
                }
                None
            }
            MouseAction::Move => {
                if !self.animating() && self.dragging {
                    if let Some(cell) = self.layout.cell_at(pos) {
                        self.paint_drag(cell);
                    }
                }
                self.keep()
            }
            MouseAction::Release => {
                self.dragging = false;
                self.keep()
            }
        }
    }

    /// A primary-button press on a grid cell.
    fn paint_press(&mut self, cell: Point) {
        match &mut self.phase {
            Phase::PickEndpoints { placed } => {
                if *placed < 2 && self.canvas.at(cell) != CellState::Path {
                    self.canvas.set(cell, CellState::Path);
                    *placed += 1;
                }
            }
            Phase::DrawWalls => {
                // Endpoint markers are never painted over.
                if self.canvas.at(cell) != CellState::Path {
                    self.canvas.set(cell, CellState::Wall);
                }
            }
            _ => {}
        }
    }

    /// Cursor movement with the button held: wall painting only.
    fn paint_drag(&mut self, cell: Point) {
        if matches!(self.phase, Phase::DrawWalls) {
            self.paint_press(cell);
        }
    }

    // -----------------------------------------------------------------------
    // DONE / RESET
    // -----------------------------------------------------------------------

    fn on_done(&mut self) -> Option<Effect> {
        match self.phase {
            Phase::PickEndpoints { placed } => {
                // With fewer than two markers DONE is ignored. The endpoints
                // are recovered from the canvas in row-major scan order, so
                // the topmost-leftmost marker is the start regardless of the
                // order the user clicked.
                if placed == 2 {
                    if let [start, end] = self.canvas.find_all(CellState::Path)[..] {
                        log::info!("endpoints picked: start={start} end={end}");
                        self.endpoints = Some((start, end));
                        self.phase = Phase::DrawWalls;
                    }
                }
                None
            }
            Phase::DrawWalls => self.start_search(),
            Phase::Animating { .. } => Some(Effect::Animate),
            Phase::ShowResult { .. } => None,
        }
    }

    fn on_reset(&mut self) {
        self.dragging = false;
        self.canvas.reset(self.canvas.dim());
        match self.phase {
            Phase::PickEndpoints { .. } => {
                self.endpoints = None;
                self.phase = Phase::PickEndpoints { placed: 0 };
            }
            Phase::DrawWalls | Phase::ShowResult { .. } => {
                // Keep the chosen endpoints and go back to wall drawing.
                if let Some((start, end)) = self.endpoints {
                    self.canvas.set(start, CellState::Path);
                    self.canvas.set(end, CellState::Path);
                    self.phase = Phase::DrawWalls;
                } else {
                    self.phase = Phase::PickEndpoints { placed: 0 };
                }
            }
            Phase::Animating { .. } => {}
        }
    }

    // -----------------------------------------------------------------------
    // Search + animation
    // -----------------------------------------------------------------------

    fn start_search(&mut self) -> Option<Effect> {
        let Some((start, end)) = self.endpoints else {
            log::warn!("DONE pressed with no endpoints recorded");
            return None;
        };

        let mut frames = VecDeque::new();
        match search(&mut self.canvas, start, end, |c| frames.push_back(c.clone())) {
            Ok(outcome) => {
                match &outcome {
                    Some(path) => log::info!("path found, {} cells", path.len()),
                    None => log::info!("no path between {start} and {end}"),
                }
                let shown = frames.pop_front().unwrap_or_else(|| self.canvas.clone());
                self.phase = Phase::Animating {
                    frames,
                    shown,
                    outcome,
                };
                Some(Effect::Animate)
            }
            Err(e) => {
                log::error!("search rejected: {e}");
                self.phase = Phase::ShowResult {
                    message: e.to_string(),
                };
                None
            }
        }
    }

    fn on_tick(&mut self) -> Option<Effect> {
        let Phase::Animating {
            frames,
            shown,
            outcome,
        } = &mut self.phase
        else {
            return None;
        };

        if let Some(next) = frames.pop_front() {
            *shown = next;
            return Some(Effect::Animate);
        }

        // Replay finished: sweep the markers and commit the outcome.
        let outcome = outcome.take();
        self.canvas.clear_markers();
        let message = match outcome {
            Some(path) => {
                for p in &path {
                    self.canvas.set(*p, CellState::Path);
                }
                format!("The end point is {} blocks away", path.len())
            }
            None => NO_PATH_MSG.to_string(),
        };
        self.phase = Phase::ShowResult { message };
        None
    }
}

impl Model for PainterModel {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => None,
            Msg::Quit => Some(Effect::End),
            Msg::Tick => self.on_tick(),
            Msg::Mouse { action, pos, .. } => self.on_mouse(action, pos),
            Msg::KeyDown { key, .. } => match key {
                Key::Escape | Key::Char('q') | Key::Char('Q') => Some(Effect::End),
                _ => self.keep(),
            },
        }
    }

    fn draw(&self, frame: &mut ViewFrame) {
        frame.canvas = match &self.phase {
            Phase::Animating { shown, .. } => shown.clone(),
            _ => self.canvas.clone(),
        };
        frame.buttons.push(ButtonView {
            rect: self.layout.done_rect(),
            label: "DONE".into(),
        });
        frame.buttons.push(ButtonView {
            rect: self.layout.reset_rect(),
            label: "RESET".into(),
        });
        frame.banner = Some(match &self.phase {
            Phase::PickEndpoints { .. } => PICK_BANNER.to_string(),
            Phase::DrawWalls => WALLS_BANNER.to_string(),
            Phase::Animating { .. } => SEARCH_BANNER.to_string(),
            Phase::ShowResult { message } => message.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5×5 grid at 10 px per cell: grid area 50×50, DONE at y 75..125.
    fn model() -> PainterModel {
        PainterModel::new(VisualizerConfig {
            dimension: 5,
            cell_px: 10,
            ..Default::default()
        })
    }

    fn click(m: &mut PainterModel, pos: Point) -> Option<Effect> {
        let effect = m.update(Msg::mouse(MouseAction::Main, pos));
        m.update(Msg::mouse(MouseAction::Release, pos));
        effect
    }

    fn click_cell(m: &mut PainterModel, x: i32, y: i32) {
        click(m, Point::new(x * 10 + 5, y * 10 + 5));
    }

    fn click_done(m: &mut PainterModel) -> Option<Effect> {
        click(m, Point::new(5, 80))
    }

    fn click_reset(m: &mut PainterModel) {
        click(m, Point::new(45, 80));
    }

    /// Drive the animation to its end state.
    fn run_animation(m: &mut PainterModel) {
        for _ in 0..100_000 {
            if m.update(Msg::Tick).is_none() {
                return;
            }
        }
        panic!("animation did not terminate");
    }

    fn result_message(m: &PainterModel) -> &str {
        match &m.phase {
            Phase::ShowResult { message } => message,
            _ => panic!("not in ShowResult"),
        }
    }

    #[test]
    fn full_session_finds_and_commits_path() {
        let mut m = model();
        click_cell(&mut m, 0, 0);
        click_cell(&mut m, 4, 4);
        click_done(&mut m);
        assert!(matches!(m.phase, Phase::DrawWalls));
        assert_eq!(m.endpoints, Some((Point::new(0, 0), Point::new(4, 4))));

        let effect = click_done(&mut m);
        assert_eq!(effect, Some(Effect::Animate));
        run_animation(&mut m);

        assert_eq!(result_message(&m), "The end point is 5 blocks away");
        // The committed diagonal, endpoints included.
        for i in 0..5 {
            assert_eq!(m.canvas.at(Point::new(i, i)), CellState::Path);
        }
        // Markers are swept before the path is committed.
        assert!(m.canvas.find_all(CellState::Frontier).is_empty());
        assert!(m.canvas.find_all(CellState::Visited).is_empty());
    }

    #[test]
    fn blocked_grid_reports_no_path() {
        let mut m = model();
        click_cell(&mut m, 1, 0);
        click_cell(&mut m, 1, 4);
        click_done(&mut m);

        // Drag a solid wall across row 2.
        m.update(Msg::mouse(MouseAction::Main, Point::new(5, 25)));
        for x in 1..5 {
            m.update(Msg::mouse(MouseAction::Move, Point::new(x * 10 + 5, 25)));
        }
        m.update(Msg::mouse(MouseAction::Release, Point::new(45, 25)));
        for x in 0..5 {
            assert_eq!(m.canvas.at(Point::new(x, 2)), CellState::Wall);
        }

        click_done(&mut m);
        run_animation(&mut m);
        assert_eq!(result_message(&m), NO_PATH_MSG);
    }

    #[test]
    fn endpoint_count_is_capped_at_two() {
        let mut m = model();
        click_cell(&mut m, 0, 0);
        click_cell(&mut m, 2, 2);
        click_cell(&mut m, 4, 4); // ignored, both endpoints placed
        assert_eq!(m.canvas.find_all(CellState::Path).len(), 2);
    }

    #[test]
    fn done_requires_both_endpoints() {
        let mut m = model();
        click_cell(&mut m, 0, 0);
        click_done(&mut m);
        assert!(matches!(m.phase, Phase::PickEndpoints { placed: 1 }));
    }

    #[test]
    fn clicking_same_cell_twice_places_one_endpoint() {
        let mut m = model();
        click_cell(&mut m, 2, 2);
        click_cell(&mut m, 2, 2);
        assert!(matches!(m.phase, Phase::PickEndpoints { placed: 1 }));
        assert_eq!(m.canvas.find_all(CellState::Path).len(), 1);
    }

    #[test]
    fn walls_never_overwrite_endpoints() {
        let mut m = model();
        click_cell(&mut m, 0, 0);
        click_cell(&mut m, 4, 4);
        click_done(&mut m);
        click_cell(&mut m, 0, 0);
        assert_eq!(m.canvas.at(Point::new(0, 0)), CellState::Path);
    }

    #[test]
    fn reset_during_wall_phase_restores_endpoints() {
        let mut m = model();
        click_cell(&mut m, 0, 0);
        click_cell(&mut m, 4, 4);
        click_done(&mut m);
        click_cell(&mut m, 2, 2); // a wall
        click_reset(&mut m);

        assert!(matches!(m.phase, Phase::DrawWalls));
        assert_eq!(m.canvas.at(Point::new(2, 2)), CellState::Empty);
        assert_eq!(m.canvas.at(Point::new(0, 0)), CellState::Path);
        assert_eq!(m.canvas.at(Point::new(4, 4)), CellState::Path);
    }

    #[test]
    fn reset_during_pick_phase_starts_over() {
        let mut m = model();
        click_cell(&mut m, 0, 0);
        click_reset(&mut m);
        assert!(matches!(m.phase, Phase::PickEndpoints { placed: 0 }));
        assert!(m.canvas.find_all(CellState::Path).is_empty());
    }

    #[test]
    fn reset_after_result_returns_to_wall_drawing() {
        let mut m = model();
        click_cell(&mut m, 0, 0);
        click_cell(&mut m, 4, 4);
        click_done(&mut m);
        click_done(&mut m);
        run_animation(&mut m);
        click_reset(&mut m);

        assert!(matches!(m.phase, Phase::DrawWalls));
        assert_eq!(m.canvas.find_all(CellState::Path).len(), 2);
    }

    #[test]
    fn input_is_ignored_while_animating() {
        let mut m = model();
        click_cell(&mut m, 0, 0);
        click_cell(&mut m, 4, 4);
        click_done(&mut m);
        click_done(&mut m);
        assert!(m.animating());

        // Clicks keep the animation running and paint nothing.
        let effect = m.update(Msg::mouse(MouseAction::Main, Point::new(25, 25)));
        assert_eq!(effect, Some(Effect::Animate));
        assert!(m.animating());
    }

    #[test]
    fn escape_ends_the_session() {
        let mut m = model();
        assert_eq!(m.update(Msg::key(Key::Escape)), Some(Effect::End));
    }

    #[test]
    fn draw_emits_buttons_and_banner() {
        let m = model();
        let mut frame = ViewFrame::new(5);
        m.draw(&mut frame);
        assert_eq!(frame.buttons.len(), 2);
        assert_eq!(frame.buttons[0].label, "DONE");
        assert_eq!(frame.buttons[1].label, "RESET");
        assert_eq!(frame.banner.as_deref(), Some(PICK_BANNER));
    }
}
