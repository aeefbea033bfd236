use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

// Implementation block for keyboard event handling.
impl App {
    /// Routes a key event. While the gallery overlay is open it captures
    /// all input and only its three bindings do anything.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.gallery.is_open() {
            match key.code {
                KeyCode::Esc => self.close_gallery(),
                KeyCode::Right => self.gallery_next(),
                KeyCode::Left => self.gallery_previous(),
                _ => {}
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('l') => self.cycle_language(),
            KeyCode::Char('e') => self.copy_element("contact_email"),
            KeyCode::Char('p') => self.copy_element("contact_phone"),
            KeyCode::Char(digit @ '1'..='9') => {
                let ordinal = digit as usize - '0' as usize;
                self.open_project_by_ordinal(ordinal);
            }
            KeyCode::Up => self.scroll_body(-1),
            KeyCode::Down => self.scroll_body(1),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }

    /// Scrolls the body, unless a modal overlay has scrolling locked.
    pub(crate) fn scroll_body(&mut self, delta: i16) {
        if self.document.scroll_locked() {
            return;
        }
        self.scroll = self.scroll.saturating_add_signed(delta);
    }
}
