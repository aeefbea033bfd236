//! The central application state.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::clipboard::{ClipboardWriter, CopyOutcome, FeedbackBubble};
use crate::document::Document;
use crate::event::Event;
use crate::gallery::Gallery;
use crate::i18n::I18n;
use crate::storage::PrefStore;
use crate::ui::layout::HitRegions;

/// The main application state: the single owner of everything the three
/// utilities mutate.
pub struct App {
    /// Flag to indicate whether the event loop should keep running.
    pub running: bool,
    /// The document all three utilities operate on.
    pub document: Document,
    /// Dictionary plus active language.
    pub i18n: I18n,
    /// The modal gallery state machine.
    pub gallery: Gallery,
    /// Live copy-feedback bubbles, newest last. Several may stack.
    pub bubbles: Vec<FeedbackBubble>,
    /// The message currently displayed in the status bar.
    pub status_message: String,
    /// Body scroll offset in rows. Frozen while the gallery is open.
    pub scroll: u16,
    /// Clickable regions the renderer recorded last frame.
    pub hit_regions: HitRegions,

    pub(crate) store: Box<dyn PrefStore>,
    pub(crate) clipboard: Arc<dyn ClipboardWriter>,
    pub(crate) copy_tx: mpsc::UnboundedSender<CopyOutcome>,
    pub(crate) copy_rx: mpsc::UnboundedReceiver<CopyOutcome>,
    /// Last left-button press, for double-click detection.
    pub(crate) last_click: Option<(Instant, u16, u16)>,
    pub(crate) last_tick: Instant,
    /// The gallery image area measured by the renderer, in cells. The
    /// deferred widget initialization needs it.
    pub(crate) gallery_viewport: (f64, f64),
}

impl App {
    /// Routes one input event. Ticks go through `on_tick` instead.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Tick => self.on_tick(),
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
        }
    }
}
