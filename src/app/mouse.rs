use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::App;

/// Two presses on the same cell within this window make a double-click.
/// Terminals deliver no native double-click event.
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

// Implementation block for mouse event handling.
impl App {
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_mouse_down(event.column, event.row);
            }
            MouseEventKind::ScrollUp => self.scroll_body(-2),
            MouseEventKind::ScrollDown => self.scroll_body(2),
            _ => {}
        }
    }

    fn handle_mouse_down(&mut self, column: u16, row: u16) {
        let now = Instant::now();
        let double = matches!(
            self.last_click,
            Some((at, c, r))
                if c == column && r == row && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
        );
        // A consumed double-click must not chain into a triple.
        self.last_click = if double { None } else { Some((now, column, row)) };

        if self.gallery.is_open() {
            self.handle_gallery_click(column, row, double);
            return;
        }

        if let Some(language) = self.hit_regions.lang_at(column, row) {
            self.set_language(language.code());
            return;
        }
        if let Some(element_id) = self.hit_regions.copy_source_at(column, row) {
            self.copy_element(&element_id);
            return;
        }
        if let Some(gallery_key) = self.hit_regions.project_at(column, row) {
            self.open_project_gallery(&gallery_key);
        }
    }

    fn handle_gallery_click(&mut self, column: u16, row: u16, double: bool) {
        let regions = &self.hit_regions;
        if regions.hits(regions.gallery_close, column, row) {
            self.close_gallery();
            return;
        }
        if regions.hits(regions.gallery_prev, column, row) {
            self.gallery_previous();
            return;
        }
        if regions.hits(regions.gallery_next, column, row) {
            self.gallery_next();
            return;
        }
        if let Some(image) = regions.gallery_image
            && regions.hits(Some(image), column, row)
            && double
        {
            let x = f64::from(column - image.x);
            let y = f64::from(row - image.y);
            self.gallery.double_click(x, y);
        }
    }
}
