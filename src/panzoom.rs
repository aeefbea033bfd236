//! The pan/zoom capability boundary.
//!
//! The gallery only ever talks to the [`PanZoom`] trait, mirroring the
//! narrow surface of the interaction widget it wraps: dispose, read the
//! current transform, absolute moves and zooms, and a smooth zoom toward a
//! focal point. [`ViewportPanZoom`] is the concrete implementation; tests
//! inject mocks through [`PanZoomFactory`].

use std::time::Duration;

/// How long a smooth zoom takes to reach its target scale.
const SMOOTH_ZOOM_DURATION: Duration = Duration::from_millis(200);

/// An absolute 2D transform: translation in viewport units plus scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };
}

/// Construction-time configuration for a pan/zoom instance.
#[derive(Debug, Clone, Copy)]
pub struct PanZoomOptions {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Constrain movement so the content always covers the viewport.
    pub bounds: bool,
    /// Extra slack allowed beyond the bounds, in viewport units.
    pub bounds_padding: f64,
    pub initial: Transform,
    /// When false, key input passes through to the application.
    pub capture_keys: bool,
    /// When false, wheel input passes through to the application.
    pub capture_wheel: bool,
}

impl PanZoomOptions {
    /// The gallery configuration: 1x-5x zoom, hard bounds with no padding,
    /// un-zoomed and centered start, and no input interception so the
    /// overlay's own shortcuts and buttons keep working.
    pub fn gallery() -> Self {
        Self {
            min_zoom: 1.0,
            max_zoom: 5.0,
            bounds: true,
            bounds_padding: 0.0,
            initial: Transform::IDENTITY,
            capture_keys: false,
            capture_wheel: false,
        }
    }
}

/// The widget surface the gallery depends on.
pub trait PanZoom {
    /// Releases the instance. Every later mutation is a no-op.
    fn dispose(&mut self);
    fn transform(&self) -> Transform;
    /// Absolute translation, clamped to bounds when they are enabled.
    fn move_to(&mut self, x: f64, y: f64);
    /// Absolute zoom keeping the focal point (viewport coordinates) fixed.
    fn zoom_abs(&mut self, focal_x: f64, focal_y: f64, scale: f64);
    /// Starts an animated zoom toward `scale` centered on the given point.
    fn smooth_zoom(&mut self, client_x: f64, client_y: f64, scale: f64);
    /// Advances any running animation. Tick-driven hosts call this once per
    /// frame; implementations without animations ignore it.
    fn animate(&mut self, dt: Duration) {
        let _ = dt;
    }
}

/// Creates pan/zoom instances for a viewport. The factory is the injection
/// seam: production uses [`ViewportPanZoomFactory`], tests count instances.
pub trait PanZoomFactory {
    fn create(&self, viewport: (f64, f64), options: PanZoomOptions) -> Box<dyn PanZoom>;
}

#[derive(Debug)]
struct SmoothZoom {
    focal: (f64, f64),
    from_scale: f64,
    to_scale: f64,
    elapsed: Duration,
}

/// A pan/zoom instance over a rectangular viewport.
///
/// The content is assumed to fill the viewport exactly at scale 1, which is
/// why `min_zoom: 1.0` means "never smaller than native size".
#[derive(Debug)]
pub struct ViewportPanZoom {
    viewport: (f64, f64),
    options: PanZoomOptions,
    current: Transform,
    animation: Option<SmoothZoom>,
    disposed: bool,
}

impl ViewportPanZoom {
    pub fn new(viewport: (f64, f64), options: PanZoomOptions) -> Self {
        let mut instance = Self {
            viewport,
            options,
            current: options.initial,
            animation: None,
            disposed: false,
        };
        instance.current.scale = instance.clamp_scale(options.initial.scale);
        instance.clamp_position();
        instance
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.options.min_zoom, self.options.max_zoom)
    }

    fn clamp_position(&mut self) {
        if !self.options.bounds {
            return;
        }
        let pad = self.options.bounds_padding;
        let (vw, vh) = self.viewport;
        self.current.x = clamp_axis(self.current.x, vw, self.current.scale, pad);
        self.current.y = clamp_axis(self.current.y, vh, self.current.scale, pad);
    }

    fn apply_zoom_abs(&mut self, focal_x: f64, focal_y: f64, scale: f64) {
        let new_scale = self.clamp_scale(scale);
        let old_scale = self.current.scale;
        if old_scale > 0.0 {
            let ratio = new_scale / old_scale;
            self.current.x = focal_x - (focal_x - self.current.x) * ratio;
            self.current.y = focal_y - (focal_y - self.current.y) * ratio;
        }
        self.current.scale = new_scale;
        self.clamp_position();
    }
}

impl PanZoom for ViewportPanZoom {
    fn dispose(&mut self) {
        self.disposed = true;
        self.animation = None;
    }

    fn transform(&self) -> Transform {
        self.current
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if self.disposed {
            return;
        }
        self.current.x = x;
        self.current.y = y;
        self.clamp_position();
    }

    fn zoom_abs(&mut self, focal_x: f64, focal_y: f64, scale: f64) {
        if self.disposed {
            return;
        }
        self.animation = None;
        self.apply_zoom_abs(focal_x, focal_y, scale);
    }

    fn smooth_zoom(&mut self, client_x: f64, client_y: f64, scale: f64) {
        if self.disposed {
            return;
        }
        self.animation = Some(SmoothZoom {
            focal: (client_x, client_y),
            from_scale: self.current.scale,
            to_scale: self.clamp_scale(scale),
            elapsed: Duration::ZERO,
        });
    }

    fn animate(&mut self, dt: Duration) {
        if self.disposed {
            return;
        }
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        animation.elapsed += dt;
        let progress =
            (animation.elapsed.as_secs_f64() / SMOOTH_ZOOM_DURATION.as_secs_f64()).min(1.0);
        // Smoothstep easing.
        let eased = progress * progress * (3.0 - 2.0 * progress);
        let scale = animation.from_scale + (animation.to_scale - animation.from_scale) * eased;
        let (fx, fy) = animation.focal;
        let finished = progress >= 1.0;
        self.apply_zoom_abs(fx, fy, scale);
        if finished {
            self.animation = None;
        }
    }
}

/// Clamps one translation axis so the scaled content keeps covering the
/// viewport, give or take the configured padding.
fn clamp_axis(value: f64, extent: f64, scale: f64, pad: f64) -> f64 {
    let low = extent - extent * scale - pad;
    let high = pad;
    if low > high {
        // Content smaller than the viewport on this axis: center it.
        (extent - extent * scale) / 2.0
    } else {
        value.clamp(low, high)
    }
}

/// The production factory.
#[derive(Debug, Default)]
pub struct ViewportPanZoomFactory;

impl PanZoomFactory for ViewportPanZoomFactory {
    fn create(&self, viewport: (f64, f64), options: PanZoomOptions) -> Box<dyn PanZoom> {
        Box::new(ViewportPanZoom::new(viewport, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ViewportPanZoom {
        ViewportPanZoom::new((100.0, 80.0), PanZoomOptions::gallery())
    }

    #[test]
    fn scale_is_clamped_to_configured_range() {
        let mut pz = widget();
        pz.zoom_abs(0.0, 0.0, 9.0);
        assert_eq!(pz.transform().scale, 5.0);
        pz.zoom_abs(0.0, 0.0, 0.2);
        assert_eq!(pz.transform().scale, 1.0);
    }

    #[test]
    fn unzoomed_content_cannot_be_panned() {
        let mut pz = widget();
        pz.move_to(40.0, -25.0);
        assert_eq!(pz.transform(), Transform::IDENTITY);
    }

    #[test]
    fn pan_is_bounded_when_zoomed() {
        let mut pz = widget();
        pz.zoom_abs(0.0, 0.0, 2.0);
        pz.move_to(-500.0, -500.0);
        let t = pz.transform();
        // At 2x over a 100x80 viewport the offsets bottom out at -100/-80.
        assert_eq!((t.x, t.y), (-100.0, -80.0));
        pz.move_to(500.0, 500.0);
        let t = pz.transform();
        assert_eq!((t.x, t.y), (0.0, 0.0));
    }

    #[test]
    fn zoom_abs_keeps_the_focal_point_fixed() {
        let mut pz = widget();
        let (fx, fy) = (50.0, 40.0);
        let before = pz.transform();
        let content_x = (fx - before.x) / before.scale;
        let content_y = (fy - before.y) / before.scale;

        pz.zoom_abs(fx, fy, 2.0);
        let after = pz.transform();
        assert!(((fx - after.x) / after.scale - content_x).abs() < 1e-9);
        assert!(((fy - after.y) / after.scale - content_y).abs() < 1e-9);
    }

    #[test]
    fn smooth_zoom_converges_on_the_target_scale() {
        let mut pz = widget();
        pz.smooth_zoom(50.0, 40.0, 2.5);
        for _ in 0..10 {
            pz.animate(Duration::from_millis(50));
        }
        assert!((pz.transform().scale - 2.5).abs() < 1e-9);
    }

    #[test]
    fn disposed_instance_ignores_every_mutation() {
        let mut pz = widget();
        pz.zoom_abs(0.0, 0.0, 2.0);
        let frozen = pz.transform();
        pz.dispose();
        pz.move_to(-10.0, -10.0);
        pz.zoom_abs(0.0, 0.0, 3.0);
        pz.smooth_zoom(1.0, 1.0, 4.0);
        pz.animate(Duration::from_millis(500));
        assert_eq!(pz.transform(), frozen);
    }
}
