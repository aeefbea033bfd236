use log::{debug, warn};

use super::App;
use crate::i18n::{Entry, LANGUAGE_PREF_KEY, Language};

// Implementation block for language switching.
impl App {
    /// Applies a language by code: rewrites every tagged element whose key
    /// exists in the target table, swaps video-slot sources, persists the
    /// choice and refreshes the selector highlight.
    ///
    /// Unsupported codes are a silent no-op (nothing changes, including the
    /// persisted value). Keys missing from the target table leave their
    /// elements untouched: partial translations degrade silently instead of
    /// breaking the page. Calling this twice with the same code yields the
    /// same document state.
    pub fn set_language(&mut self, code: &str) -> bool {
        let Some(language) = Language::from_code(code) else {
            debug!("ignoring unsupported language code '{code}'");
            return false;
        };
        let Some(table) = self.i18n.dictionary().table(language.code()) else {
            debug!("no dictionary table for '{code}'");
            return false;
        };

        for element in self.document.tagged_elements_mut() {
            if let Some(key) = element.key.as_deref()
                && let Some(markup) = table.get(key).and_then(Entry::as_markup)
            {
                element.markup = markup.to_string();
            }
        }

        if let Some(videos) = table.get("videos").and_then(Entry::as_videos) {
            for slot in self.document.video_slots_mut() {
                if let Some(src) = videos.get(&slot.id) {
                    slot.src = src.clone();
                }
            }
        }

        self.document.set_active_language(language);
        self.i18n.set_active(language);
        if let Err(err) = self.store.set(LANGUAGE_PREF_KEY, language.code()) {
            // Losing the preference is not worth interrupting the user for.
            warn!("failed to persist language preference: {err}");
        }
        debug!("applied language '{}'", language.code());
        true
    }

    /// Steps to the next language in selector order.
    pub fn cycle_language(&mut self) {
        let all = Language::all();
        let position = all
            .iter()
            .position(|&language| language == self.i18n.active())
            .unwrap_or(0);
        let next = all[(position + 1) % all.len()];
        if self.set_language(next.code()) {
            self.status_message = format!("Language: {}", next.display_name());
        }
    }

    /// The language code currently in the preference store, if any.
    pub fn persisted_language(&self) -> Option<String> {
        self.store.get(LANGUAGE_PREF_KEY)
    }
}
