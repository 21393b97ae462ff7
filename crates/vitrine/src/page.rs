//! # Page Runtime
//!
//! Owns the document, the viewport, the scheduler, the listener registry and
//! every mounted feature. Hosts feed it input and elapsed time; it routes
//! listener actions and scheduler tasks back to the feature that owns them.
//!
//! ```text
//! click / key / pointer / load ─► ListenerStore ─► Action ─┐
//!                                                          ├─► feature ─► Document / Viewport
//! advance(ms) ─────────────────► Scheduler ─────► Task ────┘
//!                                                                 │
//! scroll / layout change ──────► VisibilityObserver ◄─────────────┘
//! ```

use vitrine_core::{
    Document, Event, EventKind, ListenerStore, NodeId, PendingTimer, Rect, Scheduler, Viewport,
};
use vitrine_ui::{
    setup_infinite_scroller, Action, GalleryTabs, HeroSlider, ImageFadeIn, Key, Lightbox,
    MenuController, SlideNav, SmoothScroll, StatCounter, Task, TestimonialsCarousel,
};

use crate::config::PageConfig;
use crate::error::PageResult;

/// A landing page with every feature mounted.
#[derive(Debug)]
pub struct Page {
    document: Document,
    viewport: Viewport,
    timers: Scheduler<Task>,
    listeners: ListenerStore<Action>,
    config: PageConfig,

    menu: Option<MenuController>,
    scroll: SmoothScroll,
    hero: Option<HeroSlider>,
    testimonials: Option<TestimonialsCarousel>,
    counter: Option<StatCounter>,
    fade_in: ImageFadeIn,
    tabs: Option<GalleryTabs>,
    lightbox: Option<Lightbox>,
}

impl Page {
    /// Mounts every feature onto a loaded document.
    ///
    /// Features whose markup is missing stay off. The stats section is
    /// measured once immediately, so a page opened already scrolled to it
    /// starts the counters without waiting for a scroll.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Config` on an invalid config and `PageError::Dom`
    /// if a configured marquee selector is not supported.
    pub fn ready(mut document: Document, viewport: Viewport, config: PageConfig) -> PageResult<Self> {
        config.validate()?;

        let mut timers = Scheduler::new();
        let mut listeners = ListenerStore::new();

        let menu = MenuController::mount(&document, &mut listeners)?;
        let scroll = SmoothScroll::mount(&document, &mut listeners, config.scroll)?;
        let hero = HeroSlider::mount(&mut document, &mut listeners, &mut timers, config.hero)?;
        let testimonials =
            TestimonialsCarousel::mount(&mut document, &mut listeners, &mut timers, config.testimonials)?;

        let mut doubled = 0;
        for strip in &config.marquee.strips {
            doubled += setup_infinite_scroller(&mut document, strip)?;
        }

        let counter = StatCounter::mount(&document, config.counter)?;
        let fade_in = ImageFadeIn::mount(&document, &mut listeners)?;
        let tabs = GalleryTabs::mount(&document, &mut listeners)?;
        let lightbox = Lightbox::mount(&document, &mut listeners);

        tracing::debug!(
            menu = menu.is_some(),
            hero = hero.is_some(),
            testimonials = testimonials.is_some(),
            counter = counter.is_some(),
            tabs = tabs.is_some(),
            lightbox = lightbox.is_some(),
            marquee_copies = doubled,
            listeners = listeners.len(),
            "page ready"
        );

        let mut page = Self {
            document,
            viewport,
            timers,
            listeners,
            config,
            menu,
            scroll,
            hero,
            testimonials,
            counter,
            fade_in,
            tabs,
            lightbox,
        };
        page.refresh_visibility();
        Ok(page)
    }

    /// Replaces the runaway guard applied to each [`Page::advance`].
    #[must_use]
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.timers = std::mem::take(&mut self.timers).with_step_limit(limit);
        self
    }

    // =========================================================================
    // HOST INPUT
    // =========================================================================

    /// Clicks `target`. The returned event tells whether default navigation was suppressed.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Dom` if `target` is not a node of this document.
    pub fn click(&mut self, target: NodeId) -> PageResult<Event> {
        self.dispatch_at(EventKind::Click, target)
    }

    /// Presses a key with focus on the document.
    pub fn key_down(&mut self, key: Key) -> Event {
        self.dispatch(Event::new(EventKind::KeyDown, None), &[], Some(key))
    }

    /// Moves the pointer onto `target`.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Dom` if `target` is not a node of this document.
    pub fn pointer_enter(&mut self, target: NodeId) -> PageResult<Event> {
        self.dispatch_at(EventKind::PointerEnter, target)
    }

    /// Moves the pointer off `target`.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Dom` if `target` is not a node of this document.
    pub fn pointer_leave(&mut self, target: NodeId) -> PageResult<Event> {
        self.dispatch_at(EventKind::PointerLeave, target)
    }

    /// Reports that an image finished loading. Failed loads are simply never reported.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Dom` if `image` is not a node of this document.
    pub fn image_loaded(&mut self, image: NodeId) -> PageResult<Event> {
        self.dispatch_at(EventKind::Load, image)
    }

    /// Jumps the viewport (user scrolling). Returns the clamped offset applied.
    pub fn scroll_to(&mut self, y: f64) -> f64 {
        let applied = self.viewport.set_scroll_y(y);
        self.refresh_visibility();
        applied
    }

    /// Resizes the viewport.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
        self.refresh_visibility();
    }

    /// Updates an element's layout box after the host re-laid out the page.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Dom` if `node` is not a node of this document.
    pub fn set_layout(&mut self, node: NodeId, layout: Rect) -> PageResult<()> {
        self.document.element_mut(node)?.set_layout(layout);
        self.refresh_visibility();
        Ok(())
    }

    /// Advances virtual time by `ms`, running every task that falls due.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Scheduler` if more tasks than the step limit fall
    /// due within this advance. Tasks that ran before the limit keep their
    /// effects; the rest stay queued and the clock stops at the last one run.
    pub fn advance(&mut self, ms: u64) -> PageResult<()> {
        let horizon = self.timers.now_ms().saturating_add(ms);
        let mut steps = 0;

        while self.timers.has_due(horizon) {
            if steps == self.timers.step_limit() {
                return Err(self.timers.step_limit_error().into());
            }
            let Some(fired) = self.timers.pop_due(horizon) else {
                break;
            };
            steps += 1;
            self.run_task(fired.task);
        }
        self.timers.settle(horizon);
        Ok(())
    }

    // =========================================================================
    // LIGHTBOX ENTRY POINTS
    // =========================================================================

    /// Shows `src` in the lightbox. Returns false if the page has none.
    pub fn open_lightbox(&mut self, src: &str) -> bool {
        let Some(lightbox) = &self.lightbox else {
            return false;
        };
        lightbox.open(&mut self.document, src);
        true
    }

    /// Hides the lightbox. Returns false if the page has none.
    pub fn close_lightbox(&mut self) -> bool {
        let Some(lightbox) = &self.lightbox else {
            return false;
        };
        lightbox.close(&mut self.document);
        true
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Returns the document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the config the page was mounted with.
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Returns the current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Returns the queued timers in firing order.
    #[must_use]
    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        self.timers.pending()
    }

    /// Gives access to the registered listeners, e.g. to remove one.
    pub fn listeners_mut(&mut self) -> &mut ListenerStore<Action> {
        &mut self.listeners
    }

    /// Returns the mobile menu, if mounted.
    #[must_use]
    pub fn menu(&self) -> Option<&MenuController> {
        self.menu.as_ref()
    }

    /// Returns the anchor scroller.
    #[must_use]
    pub fn smooth_scroll(&self) -> &SmoothScroll {
        &self.scroll
    }

    /// Returns the hero slider, if mounted.
    #[must_use]
    pub fn hero(&self) -> Option<&HeroSlider> {
        self.hero.as_ref()
    }

    /// Returns the testimonials carousel, if mounted.
    #[must_use]
    pub fn testimonials(&self) -> Option<&TestimonialsCarousel> {
        self.testimonials.as_ref()
    }

    /// Returns the stat counter, if mounted.
    #[must_use]
    pub fn counter(&self) -> Option<&StatCounter> {
        self.counter.as_ref()
    }

    /// Returns the gallery tabs, if mounted.
    #[must_use]
    pub fn tabs(&self) -> Option<&GalleryTabs> {
        self.tabs.as_ref()
    }

    /// Returns the lightbox, if mounted.
    #[must_use]
    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }

    // =========================================================================
    // ROUTING
    // =========================================================================

    fn dispatch_at(&mut self, kind: EventKind, target: NodeId) -> PageResult<Event> {
        let path = self.document.event_path(target)?;
        Ok(self.dispatch(Event::new(kind, Some(target)), &path, None))
    }

    fn dispatch(&mut self, mut event: Event, path: &[NodeId], key: Option<Key>) -> Event {
        for action in self.listeners.collect(event.kind, path) {
            self.handle(action, &mut event, key);
        }
        event
    }

    fn handle(&mut self, action: Action, event: &mut Event, key: Option<Key>) {
        let doc = &mut self.document;
        match action {
            Action::ToggleMenu => {
                if let Some(menu) = &mut self.menu {
                    menu.toggle(doc);
                }
            }
            Action::NavLinkClicked => self.close_menu(),
            Action::AnchorClicked { anchor } => {
                event.prevent_default();
                self.close_menu();
                self.scroll
                    .navigate(&self.document, &self.viewport, &mut self.timers, anchor);
            }
            Action::HeroPrev => self.navigate_hero(SlideNav::Prev),
            Action::HeroNext => self.navigate_hero(SlideNav::Next),
            Action::HeroDot(index) => self.navigate_hero(SlideNav::Dot(index)),
            Action::HeroPause => {
                if let Some(hero) = &mut self.hero {
                    hero.pause(&mut self.timers);
                }
            }
            Action::HeroResume => {
                if let Some(hero) = &mut self.hero {
                    hero.start(&mut self.timers);
                }
            }
            Action::TestimonialsPause => {
                if let Some(carousel) = &mut self.testimonials {
                    carousel.stop(&mut self.timers);
                }
            }
            Action::TestimonialsResume => {
                if let Some(carousel) = &mut self.testimonials {
                    carousel.resume(&mut self.timers);
                }
            }
            Action::ImageLoaded { image } => self.fade_in.on_load(doc, image),
            Action::TabSelected { button } => {
                if let Some(tabs) = &mut self.tabs {
                    tabs.select(doc, button);
                }
            }
            Action::LightboxClicked => {
                if let (Some(lightbox), Some(target)) = (&self.lightbox, event.target) {
                    lightbox.on_click(doc, target);
                }
            }
            Action::LightboxKey => {
                if let (Some(lightbox), Some(key)) = (&self.lightbox, key) {
                    lightbox.on_key(doc, key);
                }
            }
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::HeroAdvance | Task::HeroResume => {
                if let Some(hero) = &mut self.hero {
                    hero.on_task(&mut self.document, &mut self.timers, task);
                }
            }
            Task::TestimonialsAdvance => {
                if let Some(carousel) = &mut self.testimonials {
                    carousel.advance(&mut self.document);
                }
            }
            Task::CounterStep(slot) => {
                if let Some(counter) = &mut self.counter {
                    counter.on_step(&mut self.document, &mut self.timers, slot);
                }
            }
            Task::ScrollFrame => {
                self.scroll.on_frame(&mut self.viewport, &mut self.timers);
                self.refresh_visibility();
            }
        }
    }

    fn close_menu(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.close(&mut self.document);
        }
    }

    fn navigate_hero(&mut self, nav: SlideNav) {
        if let Some(hero) = &mut self.hero {
            hero.navigate(&mut self.document, &mut self.timers, nav);
        }
    }

    fn refresh_visibility(&mut self) {
        if let Some(counter) = &mut self.counter {
            if counter.on_visibility(&mut self.document, &self.viewport, &mut self.timers) {
                tracing::debug!(scroll_y = self.viewport.scroll_y(), "stats section entered view");
            }
        }
    }
}
