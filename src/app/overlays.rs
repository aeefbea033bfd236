use std::time::Instant;

use log::debug;

use super::App;

// Implementation block for the gallery overlay glue.
impl App {
    /// Opens the gallery for a project's per-language image set. The bridge
    /// lookup goes through the active language; an empty result keeps the
    /// gallery closed.
    pub fn open_project_gallery(&mut self, gallery_key: &str) {
        let images = self.i18n.gallery_images(gallery_key).to_vec();
        if self.gallery.open(&images, Instant::now()) {
            self.document.lock_scroll();
            self.status_message = String::from("Esc: close | left/right: navigate | double-click: zoom");
        } else {
            debug!("gallery stayed closed for key '{gallery_key}'");
        }
    }

    /// Opens the n-th project card's gallery (1-based, from the digit keys).
    pub fn open_project_by_ordinal(&mut self, ordinal: usize) {
        let Some(card) = self
            .document
            .project_cards()
            .get(ordinal.wrapping_sub(1))
            .cloned()
        else {
            return;
        };
        self.open_project_gallery(&card.gallery_key);
    }

    pub fn close_gallery(&mut self) {
        self.gallery.close();
        self.document.unlock_scroll();
    }

    pub fn gallery_next(&mut self) {
        self.gallery.next();
    }

    pub fn gallery_previous(&mut self) {
        self.gallery.previous();
    }
}
