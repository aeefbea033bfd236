use std::time::Instant;

use log::debug;

use super::App;
use crate::clipboard::FeedbackBubble;

// Implementation block for tick-driven logic.
impl App {
    /// Called on every tick of the event loop.
    pub fn on_tick(&mut self) {
        self.advance(Instant::now());
    }

    /// The tick body with an explicit clock, so tests can drive time.
    ///
    /// Three things happen per tick: completed clipboard writes turn into
    /// feedback bubbles, bubbles past the end of their fade-out are
    /// removed, and the gallery advances its deferred widget creation and
    /// zoom animation.
    pub fn advance(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        while let Ok(outcome) = self.copy_rx.try_recv() {
            // The message language is whatever the document marker says at
            // completion time, not what was active at dispatch.
            let language = self.document.active_language();
            let key = if outcome.result.is_ok() {
                "copy_success"
            } else {
                "copy_error"
            };
            let message = self
                .i18n
                .dictionary()
                .markup(language, key)
                .unwrap_or(key)
                .to_string();
            if let Err(err) = &outcome.result {
                debug!("clipboard write for '{}' failed: {err}", outcome.element_id);
            }
            self.bubbles
                .push(FeedbackBubble::new(outcome.element_id, message, now));
        }

        self.bubbles.retain(|bubble| !bubble.expired(now));

        let viewport = self.gallery_viewport;
        self.gallery.tick(now, dt, viewport);
    }
}
