//! Process-wide page slot.
//!
//! Gallery thumbnails open the lightbox from markup the page runtime does not
//! own, so the two lightbox entry points need a globally reachable page.
//! Every call is a no-op until a page is installed.

use parking_lot::Mutex;

use crate::page::Page;

static PAGE: Mutex<Option<Page>> = parking_lot::const_mutex(None);

/// Installs `page` as the global page, returning the one it replaced.
pub fn install(page: Page) -> Option<Page> {
    PAGE.lock().replace(page)
}

/// Removes the global page.
pub fn uninstall() -> Option<Page> {
    PAGE.lock().take()
}

/// Runs `f` against the global page. Returns `None` if none is installed.
///
/// The lock is held for the duration of `f`; calling back into this module
/// from inside `f` deadlocks.
pub fn with_page<R>(f: impl FnOnce(&mut Page) -> R) -> Option<R> {
    PAGE.lock().as_mut().map(f)
}

/// Shows `src` in the global page's lightbox.
pub fn open_lightbox(src: &str) {
    if with_page(|page| page.open_lightbox(src)).is_none() {
        tracing::debug!(src, "open_lightbox called without a page");
    }
}

/// Hides the global page's lightbox.
pub fn close_lightbox() {
    with_page(Page::close_lightbox);
}
