use std::sync::Arc;

use super::App;
use crate::clipboard::CopyOutcome;

// Implementation block for user-triggered actions.
impl App {
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Copies the trimmed text content of the element with `element_id` to
    /// the system clipboard. A missing element is a silent no-op.
    ///
    /// The write happens asynchronously; its outcome arrives through the
    /// copy channel and becomes a feedback bubble on the next tick, with
    /// the message localized against the language active at that moment.
    pub fn copy_element(&mut self, element_id: &str) {
        let Some(element) = self.document.element_by_id(element_id) else {
            return;
        };
        let text = element.text_content();
        let writer = Arc::clone(&self.clipboard);
        let tx = self.copy_tx.clone();
        let element_id = element_id.to_string();
        tokio::spawn(async move {
            let result = writer.write_text(text).await;
            // The receiver only disappears on shutdown; nothing to do then.
            let _ = tx.send(CopyOutcome { element_id, result });
        });
    }
}
