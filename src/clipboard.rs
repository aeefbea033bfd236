//! Clipboard writing and the transient feedback bubble.
//!
//! The write itself is the one genuinely asynchronous operation in the
//! application: it runs on a blocking task and reports back through a
//! channel the controller drains on tick. Whatever happens, the user gets a
//! bubble; the error never propagates past the component.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use thiserror::Error;

/// How long after insertion the bubble starts fading in.
pub const FADE_IN_DELAY: Duration = Duration::from_millis(10);

/// How long a fade (either direction) takes.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// How long after insertion the bubble starts fading out.
pub const VISIBLE_UNTIL: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// The platform rejected the write (the permission-denied analog).
    #[error("clipboard rejected the write: {0}")]
    Denied(String),
    /// No clipboard could be reached at all.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// The asynchronous clipboard seam. Production goes through `arboard`;
/// tests substitute writers that succeed or fail on demand.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError>;
}

/// The system clipboard. `arboard` is synchronous, so the write is pushed
/// onto the blocking pool.
pub struct SystemClipboard;

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|err| ClipboardError::Denied(err.to_string()))
        })
        .await
        .map_err(|err| ClipboardError::Unavailable(err.to_string()))?
    }
}

/// The completion of one copy request, delivered back to the controller.
#[derive(Debug)]
pub struct CopyOutcome {
    /// Id of the element the text was read from; the bubble anchors here.
    pub element_id: String,
    pub result: Result<(), ClipboardError>,
}

/// One floating confirmation/error bubble.
///
/// Lifecycle: inserted invisible, fades in after a beat, holds, fades out
/// and removes itself. Several bubbles may be alive at once; nothing
/// serializes rapid copies.
#[derive(Debug, Clone)]
pub struct FeedbackBubble {
    pub anchor_id: String,
    pub message: String,
    created: Instant,
}

impl FeedbackBubble {
    pub fn new(anchor_id: String, message: String, now: Instant) -> Self {
        Self {
            anchor_id,
            message,
            created: now,
        }
    }

    /// Opacity in `[0, 1]` at `now`, following the fade timeline.
    pub fn opacity(&self, now: Instant) -> f64 {
        let age = now.saturating_duration_since(self.created);
        if age < FADE_IN_DELAY {
            return 0.0;
        }
        let fade_in_end = FADE_IN_DELAY + FADE_DURATION;
        if age < fade_in_end {
            return (age - FADE_IN_DELAY).as_secs_f64() / FADE_DURATION.as_secs_f64();
        }
        if age < VISIBLE_UNTIL {
            return 1.0;
        }
        let fade_out_end = VISIBLE_UNTIL + FADE_DURATION;
        if age < fade_out_end {
            return 1.0 - (age - VISIBLE_UNTIL).as_secs_f64() / FADE_DURATION.as_secs_f64();
        }
        0.0
    }

    /// True once the fade-out has completed and the bubble should be
    /// removed from the document.
    pub fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= VISIBLE_UNTIL + FADE_DURATION
    }
}
