//! Infinite marquee strips.
//!
//! The looping motion is pure CSS. This only doubles the strip's content so
//! the animation can wrap at the halfway point without a visible seam.

use serde::{Deserialize, Serialize};
use vitrine_core::{Document, DomResult};

use crate::markup;

/// Which strips get doubled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarqueeConfig {
    /// Selectors of the strips.
    pub strips: Vec<String>,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            strips: vec![markup::WHO_IMAGES.to_owned(), markup::LOGO_TRACK.to_owned()],
        }
    }
}

/// Appends an `aria-hidden` deep copy of every child of the first element
/// matching `selector`. Returns how many copies were added (0 if absent).
///
/// # Errors
///
/// Only on selector failures.
pub fn setup_infinite_scroller(doc: &mut Document, selector: &str) -> DomResult<usize> {
    let Some(strip) = doc.query_selector(selector)? else {
        tracing::debug!(selector, "marquee strip missing");
        return Ok(0);
    };

    let originals = doc.children(strip).to_vec();
    for &item in &originals {
        let copy = doc.clone_subtree(item)?;
        doc.element_mut(copy)?.set_attr("aria-hidden", "true");
        doc.append_child(strip, copy)?;
    }
    Ok(originals.len())
}
