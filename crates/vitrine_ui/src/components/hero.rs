//! # Hero Slider
//!
//! Cyclic slide index with autoplay.
//!
//! ## States
//!
//! - **Autoplay**: interval fires `next` every `interval_ms`
//! - **Paused**: pointer is over the slider, no timer
//! - **Grace**: manual navigation happened, autoplay restarts after `resume_delay_ms`
//!
//! Whatever the state, exactly one slide and its dot carry `active`.

use serde::{Deserialize, Serialize};
use vitrine_core::{
    Document, DomResult, Element, EventKind, ListenerStore, ListenerTarget, NodeId, Scheduler,
    TimerId,
};

use crate::markup;
use crate::wiring::{Action, Task};

/// Tuning for the hero slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Autoplay period.
    pub interval_ms: u64,
    /// Delay before autoplay resumes after manual navigation.
    pub resume_delay_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            interval_ms: 5000,
            resume_delay_ms: 1000,
        }
    }
}

/// Manual navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideNav {
    /// Previous button.
    Prev,
    /// Next button.
    Next,
    /// Indicator dot at the given index.
    Dot(usize),
}

/// The banner slider.
#[derive(Debug, Clone)]
pub struct HeroSlider {
    slides: Vec<NodeId>,
    dots: Vec<NodeId>,
    current: usize,
    autoplay: Option<TimerId>,
    grace: Option<TimerId>,
    config: HeroConfig,
}

impl HeroSlider {
    /// Builds the indicator dots, registers listeners and starts autoplay.
    ///
    /// Inert (returns `None`) without a slider region, slides, or a dots container.
    ///
    /// # Errors
    ///
    /// Only on selector failures or a corrupted document.
    pub fn mount(
        doc: &mut Document,
        listeners: &mut ListenerStore<Action>,
        timers: &mut Scheduler<Task>,
        config: HeroConfig,
    ) -> DomResult<Option<Self>> {
        let Some(region) = doc.query_selector(markup::HERO_SLIDER)? else {
            return Ok(None);
        };
        let slides = doc.query_selector_all(markup::HERO_SLIDES)?;
        if slides.is_empty() {
            tracing::debug!("hero slider has no slides, autoplay disabled");
            return Ok(None);
        }
        let Some(container) = doc.query_selector(markup::SLIDER_DOTS)? else {
            tracing::debug!("hero slider has no dots container, autoplay disabled");
            return Ok(None);
        };

        let mut dots = Vec::with_capacity(slides.len());
        for index in 0..slides.len() {
            let dot = doc.append(container, Element::new("div").with_class(markup::SLIDER_DOT_CLASS))?;
            listeners.add(ListenerTarget::Node(dot), EventKind::Click, Action::HeroDot(index));
            dots.push(dot);
        }

        if let Some(prev) = doc.query_selector(markup::SLIDER_PREV)? {
            listeners.add(ListenerTarget::Node(prev), EventKind::Click, Action::HeroPrev);
        }
        if let Some(next) = doc.query_selector(markup::SLIDER_NEXT)? {
            listeners.add(ListenerTarget::Node(next), EventKind::Click, Action::HeroNext);
        }
        listeners.add(ListenerTarget::Node(region), EventKind::PointerEnter, Action::HeroPause);
        listeners.add(ListenerTarget::Node(region), EventKind::PointerLeave, Action::HeroResume);

        let mut slider = Self {
            slides,
            dots,
            current: 0,
            autoplay: None,
            grace: None,
            config,
        };
        // Markup may ship with any slide pre-marked; start from a single active pair.
        for i in 0..slider.len() {
            slider.mark(doc, i, i == 0);
        }
        slider.start(timers);

        tracing::debug!(slides = slider.len(), "hero slider mounted");
        Ok(Some(slider))
    }

    /// Returns the active slide index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Returns true if there are no slides. A mounted slider always has some.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Returns the generated indicator dots.
    #[must_use]
    pub fn dots(&self) -> &[NodeId] {
        &self.dots
    }

    /// Returns the slide elements.
    #[must_use]
    pub fn slides(&self) -> &[NodeId] {
        &self.slides
    }

    /// Returns true while the autoplay interval is armed.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Moves to slide `n`, wrapping in both directions.
    pub fn go_to(&mut self, doc: &mut Document, n: isize) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.mark(doc, self.current, false);
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        let next = n.rem_euclid(len as isize) as usize;
        self.current = next;
        self.mark(doc, self.current, true);
        tracing::trace!(slide = self.current, "hero slide changed");
    }

    /// Advances one slide.
    pub fn next(&mut self, doc: &mut Document) {
        self.go_to(doc, self.offset(1));
    }

    /// Goes back one slide.
    pub fn prev(&mut self, doc: &mut Document) {
        self.go_to(doc, self.offset(-1));
    }

    /// Handles a button or dot: navigate, stop autoplay, restart it after the grace delay.
    pub fn navigate(&mut self, doc: &mut Document, timers: &mut Scheduler<Task>, nav: SlideNav) {
        match nav {
            SlideNav::Prev => self.prev(doc),
            SlideNav::Next => self.next(doc),
            SlideNav::Dot(index) => self.go_to(doc, isize::try_from(index).unwrap_or(isize::MAX)),
        }
        self.stop(timers);
        self.cancel_grace(timers);
        self.grace = Some(timers.set_timeout(self.config.resume_delay_ms, Task::HeroResume));
    }

    /// Pointer entered: stop autoplay and any pending restart.
    pub fn pause(&mut self, timers: &mut Scheduler<Task>) {
        self.stop(timers);
        self.cancel_grace(timers);
    }

    /// (Re)starts autoplay, replacing any running interval.
    pub fn start(&mut self, timers: &mut Scheduler<Task>) {
        self.stop(timers);
        self.autoplay = Some(timers.set_interval(self.config.interval_ms, Task::HeroAdvance));
    }

    /// Stops autoplay.
    pub fn stop(&mut self, timers: &mut Scheduler<Task>) {
        if let Some(timer) = self.autoplay.take() {
            timers.cancel(timer);
        }
    }

    /// Routes a scheduler task owned by the slider.
    pub fn on_task(&mut self, doc: &mut Document, timers: &mut Scheduler<Task>, task: Task) {
        match task {
            Task::HeroAdvance => self.next(doc),
            Task::HeroResume => {
                self.grace = None;
                self.start(timers);
            }
            _ => {}
        }
    }

    fn cancel_grace(&mut self, timers: &mut Scheduler<Task>) {
        if let Some(timer) = self.grace.take() {
            timers.cancel(timer);
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn offset(&self, delta: isize) -> isize {
        self.current as isize + delta
    }

    fn mark(&self, doc: &mut Document, index: usize, on: bool) {
        for node in [self.slides.get(index), self.dots.get(index)].into_iter().flatten() {
            if let Some(el) = doc.get_mut(*node) {
                el.set_class(markup::ACTIVE, on);
            }
        }
    }
}
