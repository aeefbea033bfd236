//! Rendering.
//!
//! The renderer walks the document and draws it; it never mutates content.
//! The one piece of state it feeds back is geometry: the hit regions for
//! the mouse handler and the gallery viewport size for the deferred widget
//! initialization.

use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::document::{Document, strip_markup};

mod gallery;
pub mod layout;
mod theme;
use theme::*;

/// Keys of the navigation labels, in display order.
const NAV_KEYS: [&str; 5] = [
    "nav_top",
    "nav_about",
    "nav_skills",
    "nav_experience",
    "nav_contact",
];

pub fn render(f: &mut Frame<'_>, app: &mut App) {
    app.hit_regions.clear();
    let size = f.size();

    let base = Block::default().style(Style::default().bg(BG_PRIMARY));
    f.render_widget(base, size);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);
    let nav_area = vertical[0];
    let body_area = vertical[1];
    let status_area = vertical[2];

    render_nav(f, app, nav_area);
    render_body(f, app, body_area);
    render_status_bar(f, app, status_area);

    if app.gallery.is_open() {
        gallery::render(f, app, size);
    }

    render_bubbles(f, app);
}

fn render_nav(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let document = &app.document;
    let regions = &mut app.hit_regions;

    f.render_widget(
        Block::default().style(Style::default().bg(BAR_BG)),
        area,
    );

    let mut spans: Vec<Span> = vec![Span::styled(
        " folio ",
        Style::default()
            .fg(ACCENT)
            .bg(BAR_BG)
            .add_modifier(Modifier::BOLD),
    )];
    for key in NAV_KEYS {
        let label = strip_markup(document.markup_of(key));
        if label.is_empty() {
            continue;
        }
        spans.push(Span::styled(
            format!("  {label}"),
            Style::default().fg(BAR_TEXT).bg(BAR_BG),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);

    // Language selector, right-aligned. Rightmost control is laid out
    // first, walking the cursor leftwards.
    let mut x_end = area.x.saturating_add(area.width);
    for control in document.lang_controls().iter().rev() {
        let label = format!(" {} ", control.language.display_name());
        let width = UnicodeWidthStr::width(label.as_str()) as u16;
        let x = x_end.saturating_sub(width + 1);
        let rect = Rect {
            x,
            y: area.y,
            width,
            height: 1,
        };
        let style = if control.active {
            Style::default()
                .fg(LANG_ACTIVE_TEXT)
                .bg(LANG_ACTIVE_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(LANG_IDLE_TEXT).bg(BAR_BG)
        };
        f.render_widget(Paragraph::new(label).style(style), rect);
        regions.lang_controls.push((rect, control.language));
        x_end = x;
    }
}

/// How one body line reacts to a click.
#[derive(Debug, Clone)]
enum LineTag {
    Plain,
    /// Copies the named element.
    Copy(String),
    /// Opens the gallery for the named bridge key.
    Project(String),
}

fn render_body(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let inner = Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(4),
        height: area.height,
    };
    let lines = body_lines(&app.document, inner.width.saturating_sub(2) as usize);

    let max_scroll = lines.len().saturating_sub(inner.height as usize) as u16;
    if app.scroll > max_scroll {
        app.scroll = max_scroll;
    }
    let scroll = app.scroll as usize;
    let end = (scroll + inner.height as usize).min(lines.len());

    let visible: Vec<Line> = lines[scroll..end].iter().map(|(line, _)| line.clone()).collect();
    f.render_widget(Paragraph::new(visible), inner);

    let regions = &mut app.hit_regions;
    for (offset, (_, tag)) in lines[scroll..end].iter().enumerate() {
        let rect = Rect {
            x: inner.x,
            y: inner.y + offset as u16,
            width: inner.width,
            height: 1,
        };
        match tag {
            LineTag::Plain => {}
            LineTag::Copy(id) => {
                regions.copy_sources.push((rect, id.clone()));
                regions.bubble_anchors.push((id.clone(), rect));
            }
            LineTag::Project(key) => regions.project_cards.push((rect, key.clone())),
        }
    }
}

/// Builds the scrollable body: every line paired with its click behavior.
/// Elements whose markup is still empty (keys the active language does not
/// translate) simply produce no line.
fn body_lines(document: &Document, width: usize) -> Vec<(Line<'static>, LineTag)> {
    let mut lines: Vec<(Line<'static>, LineTag)> = Vec::new();
    let base = Style::default().fg(FG_PRIMARY);
    let dim = Style::default().fg(FG_DIM);
    let accent = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    let plain = |line: Line<'static>| (line, LineTag::Plain);
    let push_wrapped =
        |lines: &mut Vec<(Line<'static>, LineTag)>, markup: &str, style: Style| {
            for line in wrap_markup(markup, style, width) {
                lines.push((line, LineTag::Plain));
            }
        };

    // Home.
    lines.push(plain(Line::default()));
    lines.push(plain(Line::styled(
        strip_markup(document.markup_of("home_roles")),
        accent,
    )));
    push_wrapped(&mut lines, document.markup_of("home_description"), base);
    lines.push(plain(Line::styled(
        strip_markup(document.markup_of("home_slogan")),
        dim.add_modifier(Modifier::ITALIC),
    )));
    if let Some(slot) = document.video_slot("demo_reel")
        && !slot.src.is_empty()
    {
        lines.push(plain(Line::styled(format!("> demo reel: {}", slot.src), dim)));
    }

    // About.
    push_section_title(&mut lines, document, "aboutMe_title", width);
    for key in ["aboutMe_p1", "aboutMe_p2", "aboutMe_p3"] {
        push_wrapped(&mut lines, document.markup_of(key), base);
        lines.push(plain(Line::default()));
    }

    // Skills.
    push_section_title(&mut lines, document, "skills_title", width);
    push_wrapped(&mut lines, document.markup_of("skills_description"), base);
    let skill_keys = [
        "skills_programming",
        "skills_unity",
        "skills_unreal",
        "skills_gameDesign",
        "skills_systems",
        "skills_narrative",
        "skills_level",
        "skills_producing",
        "skills_communication",
        "skills_leadership",
        "skills_blender",
    ];
    let chips: Vec<String> = skill_keys
        .iter()
        .map(|key| strip_markup(document.markup_of(key)))
        .filter(|chip| !chip.is_empty())
        .collect();
    push_wrapped(&mut lines, &chips.join(" | "), dim);

    // Experience and project cards.
    push_section_title(&mut lines, document, "experience_title", width);
    push_wrapped(&mut lines, document.markup_of("experience_description"), base);
    let professional = strip_markup(document.markup_of("experience_professional"));
    if !professional.is_empty() {
        lines.push(plain(Line::styled(professional, accent)));
    }
    for (index, card) in document.project_cards().iter().enumerate() {
        let title = strip_markup(document.markup_of(&card.title_key));
        let summary = strip_markup(document.markup_of(&card.summary_key));
        let label = format!("  {}. {} - {}  [gallery]", index + 1, title, summary);
        lines.push((
            Line::styled(label, Style::default().fg(FG_PRIMARY).bg(BAR_BG)),
            LineTag::Project(card.gallery_key.clone()),
        ));
    }
    let personal = strip_markup(document.markup_of("experience_personal"));
    if !personal.is_empty() {
        lines.push(plain(Line::styled(personal, accent)));
    }

    // Contact: the copy sources.
    push_section_title(&mut lines, document, "contact_title", width);
    push_wrapped(&mut lines, document.markup_of("contact_hint"), dim);
    lines.push(plain(Line::default()));
    for (element_id, shortcut) in [("contact_email", "e"), ("contact_phone", "p")] {
        if let Some(element) = document.element_by_id(element_id) {
            let label = format!("  {}   ({})", element.text_content(), shortcut);
            lines.push((
                Line::styled(label, Style::default().fg(FG_PRIMARY).bg(BAR_BG)),
                LineTag::Copy(element_id.to_string()),
            ));
            lines.push(plain(Line::default()));
        }
    }

    lines
}

fn push_section_title(
    lines: &mut Vec<(Line<'static>, LineTag)>,
    document: &Document,
    key: &str,
    width: usize,
) {
    let title = strip_markup(document.markup_of(key));
    if title.is_empty() {
        return;
    }
    lines.push((Line::default(), LineTag::Plain));
    let rule_len = width.saturating_sub(UnicodeWidthStr::width(title.as_str()) + 4);
    let text = format!("-- {title} {}", "-".repeat(rule_len));
    lines.push((
        Line::styled(text, Style::default().fg(ACCENT)),
        LineTag::Plain,
    ));
    lines.push((Line::default(), LineTag::Plain));
}

fn render_status_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let language = app.i18n.active();
    let right = format!(" {} ", language.code());
    let right_width = UnicodeWidthStr::width(right.as_str()) as u16;
    let line = Line::from(vec![Span::styled(
        format!(" {}", app.status_message),
        Style::default().fg(BAR_TEXT).bg(BAR_BG),
    )]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(BAR_BG)),
        area,
    );
    let right_rect = Rect {
        x: area.x + area.width.saturating_sub(right_width),
        y: area.y,
        width: right_width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(right).style(Style::default().fg(ACCENT).bg(BAR_BG)),
        right_rect,
    );
}

fn render_bubbles(f: &mut Frame<'_>, app: &App) {
    let now = Instant::now();
    let size = f.size();
    // Bubbles on the same anchor stack upwards.
    let mut stacked: Vec<(&str, u16)> = Vec::new();
    for bubble in &app.bubbles {
        let Some(anchor) = app.hit_regions.anchor_of(&bubble.anchor_id) else {
            // Anchor scrolled out of view; the bubble just has nowhere to be.
            continue;
        };
        let opacity = bubble.opacity(now);
        if opacity <= 0.0 {
            continue;
        }
        let level = stacked
            .iter()
            .filter(|(id, _)| *id == bubble.anchor_id)
            .count() as u16;
        stacked.push((bubble.anchor_id.as_str(), level));

        let text = format!(" {} ", bubble.message);
        let width = (UnicodeWidthStr::width(text.as_str()) as u16).min(size.width);
        let y = anchor.y.saturating_sub(1 + level);
        let x = (anchor.x + 2).min(size.width.saturating_sub(width));
        let rect = Rect {
            x,
            y,
            width,
            height: 1,
        };
        let mut style = Style::default().fg(BUBBLE_TEXT).bg(BUBBLE_BG);
        if opacity < 0.5 {
            style = style.add_modifier(Modifier::DIM);
        }
        f.render_widget(Clear, rect);
        f.render_widget(Paragraph::new(text).style(style), rect);
    }
}

/// Converts markup into styled spans: `<strong>` runs get bold, every other
/// tag is dropped.
fn markup_spans(markup: &str, base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut buffer = String::new();
    let mut bold = false;
    let mut chars = markup.chars();
    while let Some(ch) = chars.next() {
        if ch != '<' {
            buffer.push(ch);
            continue;
        }
        let mut tag = String::new();
        for tag_ch in chars.by_ref() {
            if tag_ch == '>' {
                break;
            }
            tag.push(tag_ch);
        }
        let toggles = matches!(tag.as_str(), "strong" | "/strong");
        if toggles {
            if !buffer.is_empty() {
                let style = if bold {
                    base.add_modifier(Modifier::BOLD)
                } else {
                    base
                };
                spans.push(Span::styled(std::mem::take(&mut buffer), style));
            }
            bold = tag == "strong";
        }
    }
    if !buffer.is_empty() {
        let style = if bold {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        };
        spans.push(Span::styled(buffer, style));
    }
    spans
}

/// Greedy word wrap over styled spans.
fn wrap_markup(markup: &str, base: Style, width: usize) -> Vec<Line<'static>> {
    let width = width.max(8);
    let mut words: Vec<(String, Style)> = Vec::new();
    for span in markup_spans(markup, base) {
        for word in span.content.split_whitespace() {
            words.push((word.to_string(), span.style));
        }
    }

    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    for (word, style) in words {
        let word_width = UnicodeWidthStr::width(word.as_str());
        if used > 0 && used + 1 + word_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if used > 0 {
            current.push(Span::styled(" ", base));
            used += 1;
        }
        used += word_width;
        current.push(Span::styled(word, style));
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    if lines.is_empty() {
        lines.push(Line::default());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_spans_bolds_strong_runs_and_drops_other_tags() {
        let spans = markup_spans("I studied <strong>design</strong> in <em>Madrid</em>", Style::default());
        let text: String = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "I studied design in Madrid");
        assert!(
            spans
                .iter()
                .any(|span| span.content == "design"
                    && span.style.add_modifier.contains(Modifier::BOLD))
        );
    }

    #[test]
    fn wrap_markup_respects_the_width_limit() {
        let lines = wrap_markup(
            "one two three four five six seven eight nine ten",
            Style::default(),
            16,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            let total: usize = line
                .spans
                .iter()
                .map(|span| UnicodeWidthStr::width(span.content.as_ref()))
                .sum();
            assert!(total <= 16, "line too wide: {total}");
        }
    }
}
