//! The browser viewport: size plus a clamped vertical scroll offset.

use crate::geometry::Rect;

/// Visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scroll_y: f64,
    width: f64,
    height: f64,
    /// Total scrollable height. Unbounded until the host reports it.
    document_height: f64,
}

impl Viewport {
    /// Creates a viewport scrolled to the top of an unbounded document.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            width,
            height,
            document_height: f64::INFINITY,
        }
    }

    /// Sets the total document height, re-clamping the scroll offset.
    #[must_use]
    pub fn with_document_height(mut self, document_height: f64) -> Self {
        self.set_document_height(document_height);
        self
    }

    /// Returns the current vertical scroll offset, the analogue of `pageYOffset`.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Returns the viewport width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the viewport height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the furthest the page can scroll.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.height).max(0.0)
    }

    /// Clamps a scroll destination into range.
    #[must_use]
    pub fn clamp(&self, y: f64) -> f64 {
        y.clamp(0.0, self.max_scroll())
    }

    /// Scrolls to `y` (clamped). Returns the offset actually applied.
    pub fn set_scroll_y(&mut self, y: f64) -> f64 {
        self.scroll_y = self.clamp(y);
        self.scroll_y
    }

    /// Updates the total document height.
    pub fn set_document_height(&mut self, document_height: f64) {
        self.document_height = document_height.max(0.0);
        self.scroll_y = self.clamp(self.scroll_y);
    }

    /// Resizes the viewport.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.scroll_y = self.clamp(self.scroll_y);
    }

    /// Returns the visible region in document coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.height)
    }

    /// Converts a layout box to viewport coordinates (`getBoundingClientRect`).
    #[must_use]
    pub fn client_rect(&self, layout: Rect) -> Rect {
        layout.translate(0.0, -self.scroll_y)
    }

    /// Returns the fraction of `layout` inside the viewport, in `[0, 1]`.
    #[must_use]
    pub fn visible_ratio(&self, layout: Rect) -> f64 {
        let area = layout.area();
        if area <= 0.0 {
            return 0.0;
        }
        self.visible_rect()
            .intersection(&layout)
            .map_or(0.0, |hit| (hit.area() / area).min(1.0))
    }
}
