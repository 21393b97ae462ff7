//! In-page anchor navigation with an eased scroll.

use serde::{Deserialize, Serialize};
use vitrine_core::{
    Document, DomResult, EventKind, ListenerStore, ListenerTarget, NodeId, Scheduler, TimerId,
    Viewport,
};

use crate::animation::{Animation, Easing};
use crate::markup;
use crate::wiring::{Action, Task};

/// Tuning for anchor scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Height of the sticky header the destination clears.
    pub header_offset: f64,
    /// Length of the scroll animation.
    pub duration_ms: u64,
    /// Frame interval for the animation.
    pub frame_ms: u64,
    /// Curve of the animation.
    pub easing: Easing,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            duration_ms: 400,
            frame_ms: 16,
            easing: Easing::EaseInOutCubic,
        }
    }
}

/// Routes anchor clicks to an animated viewport scroll.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    config: ScrollConfig,
    animation: Option<Animation>,
    frame_timer: Option<TimerId>,
}

impl SmoothScroll {
    /// Registers a click listener on every in-page anchor.
    ///
    /// # Errors
    ///
    /// Only on selector failures.
    pub fn mount(
        doc: &Document,
        listeners: &mut ListenerStore<Action>,
        config: ScrollConfig,
    ) -> DomResult<Self> {
        let anchors = doc.query_selector_all(markup::IN_PAGE_ANCHORS)?;
        tracing::debug!(count = anchors.len(), "in-page anchors wired");
        for anchor in anchors {
            listeners.add(
                ListenerTarget::Node(anchor),
                EventKind::Click,
                Action::AnchorClicked { anchor },
            );
        }
        Ok(Self {
            config,
            animation: None,
            frame_timer: None,
        })
    }

    /// Resolves an anchor's `#fragment` to an element. A bare `#` resolves to nothing.
    #[must_use]
    pub fn target_of(doc: &Document, anchor: NodeId) -> Option<NodeId> {
        let href = doc.get(anchor)?.attr("href")?;
        let fragment = href.strip_prefix('#')?;
        doc.get_element_by_id(fragment)
    }

    /// Scroll offset that puts `target` just below the header.
    #[must_use]
    pub fn destination(&self, doc: &Document, viewport: &Viewport, target: NodeId) -> Option<f64> {
        let layout = doc.get(target)?.layout();
        let top = viewport.client_rect(layout).y;
        Some(top + viewport.scroll_y() - self.config.header_offset)
    }

    /// Starts scrolling towards the anchor's target. Missing targets are a no-op.
    ///
    /// Returns true if an animation started.
    pub fn navigate(
        &mut self,
        doc: &Document,
        viewport: &Viewport,
        timers: &mut Scheduler<Task>,
        anchor: NodeId,
    ) -> bool {
        let Some(destination) =
            Self::target_of(doc, anchor).and_then(|target| self.destination(doc, viewport, target))
        else {
            tracing::debug!(%anchor, "anchor target not found");
            return false;
        };
        self.scroll_to(viewport, timers, destination);
        true
    }

    /// Animates the viewport towards `y`, replacing any scroll in flight.
    pub fn scroll_to(&mut self, viewport: &Viewport, timers: &mut Scheduler<Task>, y: f64) {
        self.stop(timers);

        let mut animation = Animation::new(viewport.scroll_y(), self.config.easing)
            .with_duration(ms(self.config.duration_ms));
        animation.set_target(viewport.clamp(y));

        self.animation = Some(animation);
        self.frame_timer = Some(timers.set_interval(self.config.frame_ms, Task::ScrollFrame));
    }

    /// Applies one animation frame to the viewport.
    pub fn on_frame(&mut self, viewport: &mut Viewport, timers: &mut Scheduler<Task>) {
        let Some(animation) = self.animation.as_mut() else {
            self.stop(timers);
            return;
        };

        animation.update(ms(self.config.frame_ms));
        viewport.set_scroll_y(animation.value());

        if animation.is_complete() {
            self.stop(timers);
        }
    }

    /// Returns true while a scroll animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn stop(&mut self, timers: &mut Scheduler<Task>) {
        if let Some(timer) = self.frame_timer.take() {
            timers.cancel(timer);
        }
        self.animation = None;
    }
}

#[allow(clippy::cast_precision_loss)]
fn ms(value: u64) -> f64 {
    value as f64
}
