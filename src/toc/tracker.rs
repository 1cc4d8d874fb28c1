//! Active-heading tracker.
//!
//! The tracker owns no layout. A [`LayoutHost`] answers where each heading
//! currently is and performs scrolling and history updates, so the same
//! logic drives a browser binding or a test double.
//!
//! The active heading is the one whose top edge is closest to a fixed
//! offset below the viewport top. Scroll, resize and hash-change all run
//! the same computation, so for one scroll position they agree.
//!
//! Rendered pages run the same rules in the browser through
//! `embed::page::CLIENT_JS`, reading the offset from the nav's
//! `data-offset`.

use crate::content::Heading;
use crate::sanitize::decode_uri_component;

/// Pixels between the viewport top and the reading line (fixed header).
pub const DEFAULT_OFFSET: f64 = 100.0;

/// Layout and navigation services the tracker needs.
pub trait LayoutHost {
    /// Top edge of the element with `id`, relative to the viewport.
    /// `None` when no such element is mounted.
    fn viewport_top(&self, id: &str) -> Option<f64>;

    /// Top edge of the element with `id`, relative to the document.
    fn document_top(&self, id: &str) -> Option<f64>;

    /// Scroll the viewport so its top is at `y` (document coordinates).
    fn scroll_to(&mut self, y: f64, smooth: bool);

    /// Push `#id` onto history without navigating.
    fn push_fragment(&mut self, id: &str);
}

/// Something that may change which heading is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocEvent<'a> {
    Scroll,
    Resize,
    /// The location fragment changed; with or without the leading `#`.
    HashChange(&'a str),
    /// A TOC entry for this id was clicked.
    Click(&'a str),
}

/// Tracks the active heading of one page.
#[derive(Debug, Clone)]
pub struct TocTracker {
    ids: Vec<String>,
    offset: f64,
    active: Option<String>,
    mounted: bool,
}

impl TocTracker {
    pub fn new(headings: &[Heading]) -> Self {
        Self {
            ids: headings.iter().map(|h| h.id.clone()).collect(),
            offset: DEFAULT_OFFSET,
            active: None,
            mounted: false,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start reacting to events and compute the initial active heading.
    pub fn mount(&mut self, host: &impl LayoutHost) -> Option<&str> {
        self.mounted = true;
        self.recompute(host);
        self.active()
    }

    /// Stop reacting to events.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Apply one event. Ignored while unmounted.
    pub fn handle(&mut self, event: TocEvent<'_>, host: &mut impl LayoutHost) -> Option<&str> {
        if !self.mounted {
            return self.active();
        }

        match event {
            TocEvent::Scroll | TocEvent::Resize => {
                self.recompute(host);
            }
            TocEvent::HashChange(fragment) => {
                if !self.recompute(host) {
                    let id = normalize_fragment(fragment);
                    if self.ids.contains(&id) {
                        self.active = Some(id);
                    }
                }
            }
            TocEvent::Click(id) => self.navigate(id, host),
        }
        self.active()
    }

    fn navigate(&mut self, id: &str, host: &mut impl LayoutHost) {
        if !self.ids.iter().any(|known| known == id) {
            return;
        }
        let Some(top) = host.document_top(id) else {
            return;
        };
        host.scroll_to(top - self.offset, true);
        self.active = Some(id.to_string());
        host.push_fragment(id);
    }

    /// Pick the heading closest to the reading line. Ties keep the earlier
    /// heading; unresolvable headings are skipped. Returns whether any
    /// heading could be measured.
    fn recompute(&mut self, host: &impl LayoutHost) -> bool {
        let mut best: Option<(&str, f64)> = None;
        for id in &self.ids {
            let Some(top) = host.viewport_top(id).filter(|t| t.is_finite()) else {
                continue;
            };
            let distance = (top - self.offset).abs();
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((id, distance));
            }
        }

        match best {
            Some((id, _)) => {
                if self.active.as_deref() != Some(id) {
                    self.active = Some(id.to_string());
                }
                true
            }
            None => false,
        }
    }
}

fn normalize_fragment(fragment: &str) -> String {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    decode_uri_component(raw).unwrap_or_else(|| raw.to_string())
}
