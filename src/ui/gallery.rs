//! The gallery overlay.
//!
//! Draws the modal viewer on top of everything: the image surface, the
//! "position / total" counter, the navigation controls and the pan/zoom
//! readout. The measured image area is fed back to the controller so the
//! deferred widget initialization knows its viewport.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::layout::centered;
use super::theme::*;
use crate::app::App;
use crate::gallery::CursorHint;

pub(super) fn render(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let overlay = centered(
        area,
        (area.width * 4 / 5).max(40),
        (area.height * 4 / 5).max(12),
    );
    f.render_widget(Clear, overlay);

    let block = Block::default()
        .title(format!(" {} ", app.gallery.counter()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(OVERLAY_BORDER))
        .style(Style::default().bg(OVERLAY_BG));
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
    let image_area = rows[0];
    let controls_area = rows[1];
    let hint_area = rows[2];

    app.hit_regions.gallery_image = Some(image_area);
    app.gallery_viewport = (f64::from(image_area.width), f64::from(image_area.height));

    render_image(f, app, image_area);
    render_controls(f, app, controls_area);
    render_hint(f, app, hint_area);
}

/// The image surface. The terminal cannot decode the file, so it draws the
/// path plus a window indicator derived from the live transform.
fn render_image(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(path) = app.gallery.current_image() else {
        return;
    };

    let mut lines: Vec<Line> = vec![
        Line::default(),
        Line::styled(
            path.to_string(),
            Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(widget) = app.gallery.widget() {
        let t = widget.transform();
        lines.push(Line::styled(
            format!("zoom {:.2}x  offset ({:.0}, {:.0})", t.scale, t.x, t.y),
            Style::default().fg(FG_DIM),
        ));
        lines.push(Line::default());
        lines.push(Line::styled(
            window_bar(t.x, t.scale, f64::from(area.width), 24),
            Style::default().fg(ACCENT),
        ));
    } else {
        lines.push(Line::styled(
            "loading viewer...",
            Style::default().fg(FG_DIM),
        ));
    }

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

/// A one-line map of which horizontal slice of the image is visible.
fn window_bar(offset_x: f64, scale: f64, viewport_width: f64, cells: usize) -> String {
    let content_width = viewport_width * scale;
    let (start, len) = if content_width <= 0.0 {
        (0.0, 1.0)
    } else {
        ((-offset_x / content_width).clamp(0.0, 1.0), (1.0 / scale).clamp(0.0, 1.0))
    };
    let from = (start * cells as f64).round() as usize;
    let to = ((start + len) * cells as f64).round().max((from + 1) as f64) as usize;
    (0..cells)
        .map(|i| if i >= from && i < to.min(cells) { '#' } else { '.' })
        .collect()
}

fn render_controls(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let controls = ["  < prev  ", "  next >  ", "  x close  "];
    // Cursor-walk the three controls, centered as a group.
    let total: u16 = controls
        .iter()
        .map(|label| UnicodeWidthStr::width(*label) as u16 + 2)
        .sum();
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    for (index, label) in controls.iter().enumerate() {
        let width = UnicodeWidthStr::width(*label) as u16;
        let rect = Rect {
            x,
            y: area.y,
            width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(*label).style(Style::default().fg(BAR_TEXT).bg(BAR_BG)),
            rect,
        );
        match index {
            0 => app.hit_regions.gallery_prev = Some(rect),
            1 => app.hit_regions.gallery_next = Some(rect),
            _ => app.hit_regions.gallery_close = Some(rect),
        }
        x = x.saturating_add(width + 2);
    }
}

fn render_hint(f: &mut Frame<'_>, app: &App, area: Rect) {
    let hint = match app.gallery.cursor_hint() {
        CursorHint::ZoomIn => "double-click: zoom in",
        CursorHint::Pan => "drag to pan | double-click: reset",
    };
    f.render_widget(
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .style(Style::default().fg(FG_DIM)),
        area,
    );
}
