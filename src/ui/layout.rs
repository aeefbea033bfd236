//! Frame geometry bookkeeping.
//!
//! The renderer records where it drew every interactive thing; the mouse
//! handler resolves clicks against those records on the next event. This is
//! the terminal's stand-in for DOM hit-testing.

use ratatui::layout::Rect;

use crate::i18n::Language;

/// Clickable regions recorded during the last rendered frame.
#[derive(Debug, Default)]
pub struct HitRegions {
    pub lang_controls: Vec<(Rect, Language)>,
    /// Copy affordances, mapped to the id of the element they copy.
    pub copy_sources: Vec<(Rect, String)>,
    /// Project cards, mapped to their gallery bridge key.
    pub project_cards: Vec<(Rect, String)>,
    pub gallery_image: Option<Rect>,
    pub gallery_prev: Option<Rect>,
    pub gallery_next: Option<Rect>,
    pub gallery_close: Option<Rect>,
    /// Where each copy source was drawn; feedback bubbles anchor here.
    pub bubble_anchors: Vec<(String, Rect)>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.lang_controls.clear();
        self.copy_sources.clear();
        self.project_cards.clear();
        self.gallery_image = None;
        self.gallery_prev = None;
        self.gallery_next = None;
        self.gallery_close = None;
        self.bubble_anchors.clear();
    }

    pub fn lang_at(&self, column: u16, row: u16) -> Option<Language> {
        self.lang_controls
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|&(_, language)| language)
    }

    pub fn copy_source_at(&self, column: u16, row: u16) -> Option<String> {
        self.copy_sources
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, id)| id.clone())
    }

    pub fn project_at(&self, column: u16, row: u16) -> Option<String> {
        self.project_cards
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, key)| key.clone())
    }

    pub fn anchor_of(&self, element_id: &str) -> Option<Rect> {
        self.bubble_anchors
            .iter()
            .find(|(id, _)| id == element_id)
            .map(|&(_, rect)| rect)
    }

    pub fn hits(&self, rect: Option<Rect>, column: u16, row: u16) -> bool {
        rect.is_some_and(|rect| contains(rect, column, row))
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// A rect of at most `width` x `height`, centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
