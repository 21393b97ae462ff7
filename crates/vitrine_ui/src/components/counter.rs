//! Impact-stats number ramp.
//!
//! Fires once, the first time the stats section is at least half visible.
//! Each `.stat-number` ramps linearly from 0 to the number it displays,
//! keeping whatever non-numeric suffix the text carries ("%", "+", "M").

use serde::{Deserialize, Serialize};
use vitrine_core::{
    Document, DomResult, NodeId, Scheduler, TimerId, Viewport, VisibilityObserver,
};

use crate::markup;
use crate::wiring::Task;

/// Tuning for the counter ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    /// Total ramp length.
    pub duration_ms: u64,
    /// Delay between steps.
    pub step_ms: u64,
    /// Visible fraction of the section that triggers the ramp.
    pub visibility_threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            step_ms: 20,
            visibility_threshold: 0.5,
        }
    }
}

impl CounterConfig {
    /// Number of steps in one ramp.
    #[must_use]
    pub fn steps(&self) -> u64 {
        (self.duration_ms / self.step_ms.max(1)).max(1)
    }
}

/// One element being ramped.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTarget {
    element: NodeId,
    source: String,
    target: f64,
    suffix: String,
    has_decimal: bool,
    current: f64,
    increment: f64,
    done: bool,
}

impl CounterTarget {
    /// Reads the displayed text. Returns `None` if it does not start with a number.
    #[must_use]
    pub fn parse(element: NodeId, text: &str, steps: u64) -> Option<Self> {
        let target = parse_leading_float(text)?;
        let suffix: String = text
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != '.' && *c != '-')
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let increment = target / steps as f64;
        Some(Self {
            element,
            source: text.to_owned(),
            target,
            suffix,
            has_decimal: text.contains('.'),
            current: 0.0,
            increment,
            done: false,
        })
    }

    /// Returns the element this counter writes to.
    #[must_use]
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Returns the number the ramp ends at.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns the preserved non-numeric characters.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns true once the source text has been restored.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Renders an intermediate value in the source's format.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if self.has_decimal {
            format!("{}{}", fixed_one(value), self.suffix)
        } else {
            format!("{}{}", value.floor(), self.suffix)
        }
    }

    /// Advances one increment and returns the text to display.
    ///
    /// The step that reaches the target returns the untouched source text.
    pub fn step(&mut self) -> String {
        self.current += self.increment;
        if self.current >= self.target {
            self.done = true;
            return self.source.clone();
        }
        self.format(self.current)
    }
}

/// One decimal place with exact `x.x5` ties rounded away from zero.
///
/// `{:.1}` alone rounds those ties to even ("0.2" for 0.25).
#[allow(clippy::float_cmp)]
fn fixed_one(value: f64) -> String {
    // A tie at one decimal is an odd number of quarters; `* 4.0` is exact.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (value.abs() * 10.0).ceil().copysign(value);
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}

/// Parses the longest numeric prefix, skipping leading whitespace.
///
/// `"4.5M"` gives 4.5, `"10,000+"` gives 10, `"M4"` gives `None`.
#[must_use]
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// One-shot ramp over every stat number.
#[derive(Debug, Clone)]
pub struct StatCounter {
    section: NodeId,
    numbers: Vec<NodeId>,
    observer: VisibilityObserver,
    counters: Vec<CounterTarget>,
    timers: Vec<Option<TimerId>>,
    has_animated: bool,
    config: CounterConfig,
}

impl StatCounter {
    /// Finds the stats section and starts observing it.
    ///
    /// # Errors
    ///
    /// Only on selector failures.
    pub fn mount(doc: &Document, config: CounterConfig) -> DomResult<Option<Self>> {
        let Some(section) = doc.get_element_by_id(markup::IMPACT_STATS_ID) else {
            tracing::debug!("stats section missing, counters disabled");
            return Ok(None);
        };
        let numbers = doc.query_selector_all(markup::STAT_NUMBERS)?;

        let mut observer = VisibilityObserver::new(config.visibility_threshold);
        observer.observe(section);
        Ok(Some(Self {
            section,
            numbers,
            observer,
            counters: Vec::new(),
            timers: Vec::new(),
            has_animated: false,
            config,
        }))
    }

    /// Returns true once the ramp has been triggered.
    #[must_use]
    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    /// Returns true while any counter still has a step queued.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timers.iter().any(Option::is_some)
    }

    /// Returns true while the section is still being watched.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observer.is_observing(self.section)
    }

    /// Returns the counters started by the trigger.
    #[must_use]
    pub fn counters(&self) -> &[CounterTarget] {
        &self.counters
    }

    /// Re-measures the section. Starts the ramp on the first crossing into view.
    ///
    /// Returns true if this call triggered it.
    pub fn on_visibility(
        &mut self,
        doc: &mut Document,
        viewport: &Viewport,
        timers: &mut Scheduler<Task>,
    ) -> bool {
        if self.has_animated {
            return false;
        }
        let entered = self
            .observer
            .check(doc, viewport)
            .iter()
            .any(|entry| entry.is_intersecting);
        if !entered {
            return false;
        }

        self.has_animated = true;
        self.observer.unobserve(self.section);
        self.start(doc, timers);
        true
    }

    /// Starts a ramp on every number that parses. Runs the first step now.
    pub fn start(&mut self, doc: &mut Document, timers: &mut Scheduler<Task>) {
        let steps = self.config.steps();
        self.counters = self
            .numbers
            .iter()
            .filter_map(|&node| {
                let counter = CounterTarget::parse(node, doc.get(node)?.text(), steps);
                if counter.is_none() {
                    tracing::debug!(%node, "stat number is not numeric, skipped");
                }
                counter
            })
            .collect();
        self.timers = vec![None; self.counters.len()];

        tracing::debug!(count = self.counters.len(), "stat counters started");
        for slot in 0..self.counters.len() {
            self.on_step(doc, timers, slot);
        }
    }

    /// Runs one step for the counter in `slot` and queues the next.
    pub fn on_step(&mut self, doc: &mut Document, timers: &mut Scheduler<Task>, slot: usize) {
        let Some(counter) = self.counters.get_mut(slot) else {
            return;
        };
        self.timers[slot] = None;

        let text = counter.step();
        if let Some(el) = doc.get_mut(counter.element()) {
            el.set_text(text);
        }
        if !counter.is_done() {
            self.timers[slot] = Some(timers.set_timeout(self.config.step_ms, Task::CounterStep(slot)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::drive;
    use vitrine_core::{Element, Rect};

    fn stats_doc(values: &[&str]) -> (Document, Vec<NodeId>) {
        let mut doc = Document::new();
        let body = doc.body();
        let section = doc
            .append(
                body,
                Element::new("section")
                    .with_id("impact-stats")
                    .with_layout(Rect::new(0.0, 2000.0, 1200.0, 400.0)),
            )
            .unwrap();
        let numbers = values
            .iter()
            .map(|v| {
                doc.append(section, Element::new("span").with_class("stat-number").with_text(v))
                    .unwrap()
            })
            .collect();
        (doc, numbers)
    }

    fn run_to_end(
        doc: &mut Document,
        counter: &mut StatCounter,
        timers: &mut Scheduler<Task>,
        node: NodeId,
    ) -> Vec<String> {
        let mut seen = vec![doc.get(node).unwrap().text().to_owned()];
        drive(timers, 5000, |timers, task| {
            let Task::CounterStep(slot) = task else {
                panic!("unexpected task {task:?}");
            };
            counter.on_step(doc, timers, slot);
            seen.push(doc.get(node).unwrap().text().to_owned());
        });
        seen
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("72%"), Some(72.0));
        assert_eq!(parse_leading_float("4.5M"), Some(4.5));
        assert_eq!(parse_leading_float("  -3.25e2x"), Some(-325.0));
        assert_eq!(parse_leading_float("10,000+"), Some(10.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("M4"), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float(""), None);
    }

    #[test]
    fn test_suffix_strips_number_characters() {
        let node = Document::new().body();
        let counter = CounterTarget::parse(node, "1,200+ families", 100).unwrap();
        assert_eq!(counter.suffix(), ",+ families");
        assert!((counter.target() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_integer_ends_on_source_text() {
        let (mut doc, numbers) = stats_doc(&["72%"]);
        let mut timers = Scheduler::new();
        let mut counter = StatCounter::mount(&doc, CounterConfig::default()).unwrap().unwrap();

        counter.start(&mut doc, &mut timers);
        let seen = run_to_end(&mut doc, &mut counter, &mut timers, numbers[0]);

        assert_eq!(seen.first().map(String::as_str), Some("0%"));
        assert_eq!(seen.last().map(String::as_str), Some("72%"));
        assert!(seen.iter().all(|t| !t.contains('.')));
        assert!(!counter.is_running());
    }

    #[test]
    fn test_decimal_ties_round_up() {
        let node = Document::new().body();
        let mut counter = CounterTarget::parse(node, "12.5%", 100).unwrap();

        let ramp: Vec<String> = (0..10).map(|_| counter.step()).collect();
        assert_eq!(
            ramp,
            ["0.1%", "0.3%", "0.4%", "0.5%", "0.6%", "0.8%", "0.9%", "1.0%", "1.1%", "1.3%"]
        );
        assert_eq!(counter.format(-0.25), "-0.3%");
        assert_eq!(counter.format(0.3), "0.3%");
    }

    #[test]
    fn test_decimal_keeps_one_place() {
        let (mut doc, numbers) = stats_doc(&["4.5M"]);
        let mut timers = Scheduler::new();
        let mut counter = StatCounter::mount(&doc, CounterConfig::default()).unwrap().unwrap();

        counter.start(&mut doc, &mut timers);
        let seen = run_to_end(&mut doc, &mut counter, &mut timers, numbers[0]);

        assert_eq!(seen.last().map(String::as_str), Some("4.5M"));
        for text in &seen {
            let number = text.strip_suffix('M').unwrap();
            let (_, frac) = number.split_once('.').unwrap();
            assert_eq!(frac.len(), 1, "{text}");
        }
    }

    #[test]
    fn test_ramp_takes_about_two_seconds() {
        let (mut doc, _) = stats_doc(&["500+"]);
        let mut timers = Scheduler::new();
        let mut counter = StatCounter::mount(&doc, CounterConfig::default()).unwrap().unwrap();

        counter.start(&mut doc, &mut timers);
        let mut last = 0;
        drive(&mut timers, 5000, |timers, task| {
            if let Task::CounterStep(slot) = task {
                last = timers.now_ms();
                counter.on_step(&mut doc, timers, slot);
            }
        });
        assert!((1980..=2000).contains(&last), "finished at {last}");
    }

    #[test]
    fn test_non_numeric_is_skipped() {
        let (mut doc, numbers) = stats_doc(&["N/A", "12"]);
        let mut timers = Scheduler::new();
        let mut counter = StatCounter::mount(&doc, CounterConfig::default()).unwrap().unwrap();

        counter.start(&mut doc, &mut timers);
        assert_eq!(counter.counters().len(), 1);
        assert_eq!(counter.counters()[0].element(), numbers[1]);
        assert_eq!(doc.get(numbers[0]).unwrap().text(), "N/A");
    }

    #[test]
    fn test_triggers_once_at_half_visibility() {
        let (mut doc, _) = stats_doc(&["72%"]);
        let mut timers = Scheduler::new();
        let mut vp = Viewport::new(1200.0, 800.0);
        let mut counter = StatCounter::mount(&doc, CounterConfig::default()).unwrap().unwrap();

        assert!(!counter.on_visibility(&mut doc, &vp, &mut timers));

        // 100 of 400 px visible
        vp.set_scroll_y(1300.0);
        assert!(!counter.on_visibility(&mut doc, &vp, &mut timers));

        vp.set_scroll_y(1500.0);
        assert!(counter.on_visibility(&mut doc, &vp, &mut timers));
        assert!(counter.has_animated());
        assert!(!counter.is_observing());

        vp.set_scroll_y(0.0);
        vp.set_scroll_y(1500.0);
        assert!(!counter.on_visibility(&mut doc, &vp, &mut timers));
    }

    #[test]
    fn test_missing_section_disables_counter() {
        let doc = Document::new();
        assert!(StatCounter::mount(&doc, CounterConfig::default()).unwrap().is_none());
    }
}
