//! The application contract between a model and a frontend driver:
//! [`Model`], [`Effect`], and [`ViewFrame`].
//!
//! Update/draw follow the Elm shape: the driver translates raw input into
//! [`Msg`] values, feeds them to [`Model::update`], then asks the model to
//! describe the next frame via [`Model::draw`]. Everything is synchronous
//! and single-threaded; the only scheduling primitive is
//! [`Effect::Animate`], which asks the driver to deliver another
//! [`Msg::Tick`] after presenting the current frame.

use crate::canvas::Canvas;
use crate::geom::Rect;
use crate::messages::Msg;

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A request returned by [`Model::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Deliver another [`Msg::Tick`] after the next frame is presented.
    /// Returned while a search animation is replaying.
    Animate,
    /// Stop the application loop.
    End,
}

// ---------------------------------------------------------------------------
// ViewFrame
// ---------------------------------------------------------------------------

/// A clickable region with a text label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    /// Hit/draw rectangle, in window pixel coordinates.
    pub rect: Rect,
    pub label: String,
}

/// Everything the renderer needs for one frame: the grid of cell states,
/// the buttons, and an optional status banner line.
#[derive(Clone, Debug)]
pub struct ViewFrame {
    pub canvas: Canvas,
    pub buttons: Vec<ButtonView>,
    pub banner: Option<String>,
}

impl ViewFrame {
    /// An empty frame for a `dim` × `dim` grid.
    pub fn new(dim: i32) -> Self {
        Self {
            canvas: Canvas::new(dim),
            buttons: Vec::new(),
            banner: None,
        }
    }

    /// Clear per-frame content so a model can redraw from scratch.
    pub fn reset(&mut self) {
        let dim = self.canvas.dim();
        self.canvas.reset(dim);
        self.buttons.clear();
        self.banner = None;
    }
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model.
pub trait Model {
    /// Process a message, optionally returning an effect request.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `frame`.
    fn draw(&self, frame: &mut ViewFrame);
}
