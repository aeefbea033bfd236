use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::debug;
use tokio::sync::mpsc;

use super::App;
use crate::clipboard::ClipboardWriter;
use crate::document::Document;
use crate::gallery::Gallery;
use crate::i18n::{Dictionary, I18n, LANGUAGE_PREF_KEY, Language};
use crate::panzoom::PanZoomFactory;
use crate::storage::PrefStore;
use crate::ui::layout::HitRegions;

impl App {
    /// Creates the application state and applies the persisted language
    /// exactly once, falling back to the default when the stored value is
    /// absent or unrecognized.
    ///
    /// The store, clipboard writer and pan/zoom factory are injected so
    /// tests can run the full controller without a terminal, a clipboard or
    /// a real widget.
    pub fn new(
        store: Box<dyn PrefStore>,
        clipboard: Arc<dyn ClipboardWriter>,
        factory: Box<dyn PanZoomFactory>,
    ) -> Result<Self> {
        let dictionary = Dictionary::bundled().context("bundled dictionary data is invalid")?;

        let saved = store.get(LANGUAGE_PREF_KEY);
        let initial = saved
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_default();
        debug!(
            "startup language: saved={:?}, applying '{}'",
            saved,
            initial.code()
        );

        let (copy_tx, copy_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            running: true,
            document: Document::portfolio(),
            i18n: I18n::new(dictionary, initial),
            gallery: Gallery::new(factory),
            bubbles: Vec::new(),
            status_message: String::new(),
            scroll: 0,
            hit_regions: HitRegions::default(),
            store,
            clipboard,
            copy_tx,
            copy_rx,
            last_click: None,
            last_tick: Instant::now(),
            gallery_viewport: (80.0, 24.0),
        };

        app.set_language(initial.code());
        app.status_message = String::from(
            "l: language | e/p: copy email/phone | 1-9: open gallery | q: quit",
        );
        Ok(app)
    }
}
