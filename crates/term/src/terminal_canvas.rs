//! TerminalCanvas: the scene's render target in a real terminal.

use std::io;

use anyhow::Result;

use crate::assets::PixelImage;
use crate::canvas::PixelCanvas;
use crate::core::Canvas;
use crate::fb::{FrameBuffer, Rgb};
use crate::renderer::TerminalRenderer;
use crate::scene_view::{SceneView, Viewport};
use crate::types::Position;

/// Size assumed when the terminal cannot report its own.
pub const FALLBACK_VIEWPORT: Viewport = Viewport::new(80, 24);

/// Composes frames on a `PixelCanvas`; `present` scales the result into the
/// terminal, flushes the diff, and clears the canvas for the next frame.
pub struct TerminalCanvas {
    renderer: TerminalRenderer,
    pixels: PixelCanvas,
    view: SceneView,
    fb: FrameBuffer,
    status: Option<String>,
    size_warned: bool,
}

impl TerminalCanvas {
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            pixels: PixelCanvas::new(canvas_width, canvas_height),
            view: SceneView::default(),
            fb: FrameBuffer::new(0, 0),
            status: None,
            size_warned: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Bottom-row text; `None` gives the whole terminal to the scene.
    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    /// Force a full redraw on the next present.
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    /// Turn a terminal size query into a viewport, falling back to
    /// [`FALLBACK_VIEWPORT`]. The first failure is logged.
    fn viewport_from(&mut self, size: io::Result<(u16, u16)>) -> Viewport {
        match size {
            Ok((w, h)) => {
                self.size_warned = false;
                Viewport::new(w, h)
            }
            Err(err) => {
                if !self.size_warned {
                    log::warn!(
                        "terminal size unavailable ({err}); assuming {}x{}",
                        FALLBACK_VIEWPORT.width,
                        FALLBACK_VIEWPORT.height
                    );
                    self.size_warned = true;
                }
                FALLBACK_VIEWPORT
            }
        }
    }
}

impl Canvas<PixelImage> for TerminalCanvas {
    type Error = anyhow::Error;

    fn draw_frame(&mut self, frame: &PixelImage, at: Position) {
        self.pixels.blit(frame, at);
    }

    fn present(&mut self) -> Result<()> {
        let viewport = self.viewport_from(crossterm::terminal::size());
        self.view
            .render_into(&self.pixels, self.status.as_deref(), viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)?;
        self.pixels.clear(Rgb::default());
        Ok(())
    }
}
