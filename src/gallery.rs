//! The modal image gallery.
//!
//! A two-state machine (closed / open) owning the image list, the cursor
//! into it and the lifetime of the pan/zoom widget. The widget is created
//! through the injected factory after a short deferred delay, mirroring the
//! layout-settling pause the overlay needs, and is always disposed before a
//! replacement is created.

use std::time::{Duration, Instant};

use crate::panzoom::{PanZoom, PanZoomFactory, PanZoomOptions};

/// Delay between the overlay appearing and the widget being initialized.
pub const WIDGET_INIT_DELAY: Duration = Duration::from_millis(50);

/// Above this scale a double-click resets the view instead of zooming in.
const ZOOMED_THRESHOLD: f64 = 1.05;

/// The scale a double-click zooms to.
const DOUBLE_CLICK_ZOOM: f64 = 2.5;

/// What the pointer over the image would do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    ZoomIn,
    Pan,
}

pub struct Gallery {
    factory: Box<dyn PanZoomFactory>,
    images: Vec<String>,
    current: usize,
    widget: Option<Box<dyn PanZoom>>,
    widget_due: Option<Instant>,
    cursor_hint: CursorHint,
    open: bool,
}

impl Gallery {
    pub fn new(factory: Box<dyn PanZoomFactory>) -> Self {
        Self {
            factory,
            images: Vec::new(),
            current: 0,
            widget: None,
            widget_due: None,
            cursor_hint: CursorHint::ZoomIn,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// The "position / total" counter text.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.cursor_hint
    }

    pub fn widget(&self) -> Option<&dyn PanZoom> {
        self.widget.as_deref()
    }

    pub fn has_widget(&self) -> bool {
        self.widget.is_some()
    }

    /// Opens the gallery over `images`. An empty list is a no-op and the
    /// machine stays closed. Any previous state is fully torn down first so
    /// rapid repeated opens cannot leak widget instances.
    pub fn open(&mut self, images: &[String], now: Instant) -> bool {
        if images.is_empty() {
            return false;
        }
        self.dispose_widget();
        self.images = images.to_vec();
        self.current = 0;
        self.cursor_hint = CursorHint::ZoomIn;
        self.open = true;
        self.widget_due = Some(now + WIDGET_INIT_DELAY);
        true
    }

    /// Closes the gallery: widget disposed, handle cleared, cursor reset.
    pub fn close(&mut self) {
        self.open = false;
        self.current = 0;
        self.widget_due = None;
        self.dispose_widget();
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    /// Advances the cursor with wraparound and resets the view so zoom
    /// state never leaks from one image to the next.
    pub fn step(&mut self, step: isize) {
        if !self.open || self.images.is_empty() {
            return;
        }
        self.current = wrap_index(self.current, self.images.len(), step);
        self.reset_view();
    }

    /// Puts the widget back at its un-zoomed, centered baseline.
    pub fn reset_view(&mut self) {
        if let Some(widget) = self.widget.as_mut() {
            widget.zoom_abs(0.0, 0.0, 1.0);
            widget.move_to(0.0, 0.0);
        }
        self.cursor_hint = CursorHint::ZoomIn;
    }

    /// A double-click on the image toggles between the baseline view and a
    /// smooth zoom-in centered on the click position.
    pub fn double_click(&mut self, x: f64, y: f64) {
        if !self.open {
            return;
        }
        let Some(widget) = self.widget.as_mut() else {
            return;
        };
        if widget.transform().scale > ZOOMED_THRESHOLD {
            widget.zoom_abs(0.0, 0.0, 1.0);
            widget.move_to(0.0, 0.0);
            self.cursor_hint = CursorHint::ZoomIn;
        } else {
            widget.smooth_zoom(x, y, DOUBLE_CLICK_ZOOM);
            self.cursor_hint = CursorHint::Pan;
        }
    }

    /// Drives deferred widget creation and the widget's own animation.
    /// `viewport` is the image area the renderer measured last frame.
    pub fn tick(&mut self, now: Instant, dt: Duration, viewport: (f64, f64)) {
        if !self.open {
            return;
        }
        if let Some(due) = self.widget_due
            && now >= due
        {
            self.widget_due = None;
            self.dispose_widget();
            let mut widget = self.factory.create(viewport, PanZoomOptions::gallery());
            // Start from the baseline regardless of what the factory built.
            widget.zoom_abs(0.0, 0.0, 1.0);
            widget.move_to(0.0, 0.0);
            self.widget = Some(widget);
            self.cursor_hint = CursorHint::ZoomIn;
        }
        if let Some(widget) = self.widget.as_mut() {
            widget.animate(dt);
        }
    }

    fn dispose_widget(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.dispose();
        }
    }
}

/// Wraparound index arithmetic: one step past the end returns to the
/// start, one step before the start lands on the last image.
pub fn wrap_index(current: usize, len: usize, step: isize) -> usize {
    debug_assert!(len > 0);
    let mut next = current as isize + step;
    if next >= len as isize {
        next = 0;
    }
    if next < 0 {
        next = len as isize - 1;
    }
    next as usize
}
