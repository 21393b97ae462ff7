//! Testimonials carousel.
//!
//! The last card duplicates the first, so the offset cycles over
//! `cards - 1` positions and the wrap from the duplicate back to the start
//! is visually seamless without a jump-reset.

use serde::{Deserialize, Serialize};
use vitrine_core::{
    Document, DomResult, EventKind, ListenerStore, ListenerTarget, NodeId, Scheduler, TimerId,
};

use crate::markup;
use crate::wiring::{Action, Task};

/// Tuning for the testimonials carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestimonialsConfig {
    /// Autoplay period.
    pub interval_ms: u64,
    /// Horizontal space around each card, added to its measured width.
    pub card_margin: f64,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            card_margin: 30.0,
        }
    }
}

/// The sliding card strip.
#[derive(Debug, Clone)]
pub struct TestimonialsCarousel {
    track: NodeId,
    total_cards: usize,
    /// Card width plus margin, measured once at mount.
    stride: f64,
    offset: usize,
    timer: Option<TimerId>,
    /// Pinned pause. Checked on pointer leave, but nothing sets it yet.
    paused: bool,
    interval_ms: u64,
}

impl TestimonialsCarousel {
    /// Measures the first card, applies the initial translation and starts autoplay.
    ///
    /// # Errors
    ///
    /// Only on selector failures.
    pub fn mount(
        doc: &mut Document,
        listeners: &mut ListenerStore<Action>,
        timers: &mut Scheduler<Task>,
        config: TestimonialsConfig,
    ) -> DomResult<Option<Self>> {
        let Some(region) = doc.query_selector(markup::TESTIMONIALS)? else {
            return Ok(None);
        };
        let (Some(track), cards) = (
            doc.query_selector(markup::TESTIMONIALS_TRACK)?,
            doc.query_selector_all(markup::TESTIMONIAL_CARDS)?,
        ) else {
            tracing::debug!("testimonials track missing, carousel disabled");
            return Ok(None);
        };
        let Some(&first) = cards.first() else {
            tracing::debug!("no testimonial cards, carousel disabled");
            return Ok(None);
        };

        let stride = doc.element(first)?.offset_width() + config.card_margin;
        listeners.add(ListenerTarget::Node(region), EventKind::PointerEnter, Action::TestimonialsPause);
        listeners.add(ListenerTarget::Node(region), EventKind::PointerLeave, Action::TestimonialsResume);

        let mut carousel = Self {
            track,
            total_cards: cards.len(),
            stride,
            offset: 0,
            timer: None,
            paused: false,
            interval_ms: config.interval_ms,
        };
        carousel.apply(doc);
        carousel.start(timers);

        tracing::debug!(cards = carousel.total_cards, stride, "testimonials mounted");
        Ok(Some(carousel))
    }

    /// Returns the current offset, always below `total_cards - 1` (or 0).
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of cards, the trailing duplicate included.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Returns true while the autoplay interval is armed.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Returns the pinned-pause flag. No interaction sets it.
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.paused
    }

    /// Returns the translation currently applied to the track.
    #[must_use]
    pub fn transform(&self) -> String {
        // `offset * stride` prints without a fraction for whole pixels: "-330px".
        #[allow(clippy::cast_precision_loss)]
        let px = self.offset as f64 * self.stride;
        format!("translateX(-{px}px)")
    }

    /// Moves one card forward, wrapping before the trailing duplicate.
    pub fn advance(&mut self, doc: &mut Document) {
        let cycle = self.total_cards.saturating_sub(1);
        self.offset = if cycle == 0 { 0 } else { (self.offset + 1) % cycle };
        self.apply(doc);
        tracing::trace!(offset = self.offset, "testimonials advanced");
    }

    /// (Re)starts autoplay, replacing any running interval.
    pub fn start(&mut self, timers: &mut Scheduler<Task>) {
        self.stop(timers);
        self.timer = Some(timers.set_interval(self.interval_ms, Task::TestimonialsAdvance));
    }

    /// Stops autoplay.
    pub fn stop(&mut self, timers: &mut Scheduler<Task>) {
        if let Some(timer) = self.timer.take() {
            timers.cancel(timer);
        }
    }

    /// Pointer left: resume unless pinned.
    pub fn resume(&mut self, timers: &mut Scheduler<Task>) {
        if !self.paused {
            self.start(timers);
        }
    }

    fn apply(&self, doc: &mut Document) {
        let transform = self.transform();
        if let Some(track) = doc.get_mut(self.track) {
            track.set_style("transform", &transform);
        }
    }
}
