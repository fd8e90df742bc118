use gtk4 as gtk;

use crate::api::StoryEngine;
use crate::error::StoryResult;
use crate::render::{CairoContextRenderer, Renderer};

/// Thin holder wiring a [`StoryEngine`] into a GTK scrolled window.
///
/// Hosts connect the vertical `Adjustment` to [`GtkStoryAdapter::on_scroll`]
/// and the widget frame clock to [`GtkStoryAdapter::on_frame`].
pub struct GtkStoryAdapter<R: Renderer> {
    engine: StoryEngine<R>,
}

impl<R: Renderer> GtkStoryAdapter<R> {
    #[must_use]
    pub fn new(engine: StoryEngine<R>) -> Self {
        let _ = std::mem::size_of::<gtk::DrawingArea>();
        Self { engine }
    }

    /// Feeds the scrolled window's vertical offset in pixels.
    pub fn on_scroll(&mut self, offset: f64) -> StoryResult<()> {
        self.engine.observe_scroll(offset)
    }

    /// Advances animation by one frame delta and redraws.
    ///
    /// Returns `true` while transitions are still in flight, so the host
    /// knows to keep the tick callback armed.
    pub fn on_frame(&mut self, delta_seconds: f64) -> StoryResult<bool> {
        let busy = self.engine.advance(delta_seconds)?;
        self.engine.render()?;
        Ok(busy)
    }

    #[must_use]
    pub fn engine(&self) -> &StoryEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut StoryEngine<R> {
        &mut self.engine
    }
}

impl<R: Renderer + CairoContextRenderer> GtkStoryAdapter<R> {
    /// `DrawingArea` draw-func hook: paints the current frame on the
    /// widget's own context instead of the offscreen surface.
    pub fn on_draw(&mut self, context: &cairo::Context) -> StoryResult<()> {
        self.engine.render_on_cairo_context(context)
    }
}
