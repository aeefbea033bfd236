//! The renderable document model.
//!
//! This is the substrate all three utilities share: a flat list of elements
//! addressable by id, some of them tagged with a translation key, plus the
//! embedded video slots, the language-selector controls and the project
//! cards. The renderer walks it; the i18n controller rewrites it; the
//! clipboard reads from it. It knows nothing about the terminal.

use crate::i18n::Language;

/// A single addressable piece of content.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    /// Translation key, when the element participates in language switches.
    /// Untagged elements (contact data) keep their literal markup forever.
    pub key: Option<String>,
    /// Rendered markup. May contain `<strong>` tags, which the renderer
    /// styles and `text_content` strips.
    pub markup: String,
}

impl Element {
    /// The trimmed plain text of the element, markup tags removed. This is
    /// what a clipboard copy of the element yields.
    pub fn text_content(&self) -> String {
        strip_markup(&self.markup).trim().to_string()
    }
}

/// An embedded media slot whose source is swapped per language.
#[derive(Debug, Clone)]
pub struct VideoSlot {
    pub id: String,
    pub src: String,
}

/// One language-selector control and its active highlight.
#[derive(Debug, Clone)]
pub struct LangControl {
    pub language: Language,
    pub active: bool,
}

/// A project teaser that opens a per-language gallery image set.
#[derive(Debug, Clone)]
pub struct ProjectCard {
    pub title_key: String,
    pub summary_key: String,
    pub gallery_key: String,
}

#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    video_slots: Vec<VideoSlot>,
    lang_controls: Vec<LangControl>,
    project_cards: Vec<ProjectCard>,
    /// The document-level language marker (the `<html lang>` analog).
    active_language: Language,
    /// While true the body ignores scroll input (a modal overlay is up).
    scroll_locked: bool,
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            video_slots: Vec::new(),
            lang_controls: Language::all()
                .iter()
                .map(|&language| LangControl {
                    language,
                    active: false,
                })
                .collect(),
            project_cards: Vec::new(),
            active_language: Language::default(),
            scroll_locked: false,
        }
    }

    /// Builds the portfolio document: the fixed structure whose tagged
    /// elements the dictionary fills in. Initial markup for tagged elements
    /// is empty until the first language application.
    pub fn portfolio() -> Self {
        let mut doc = Self::new();

        for key in [
            "nav_top",
            "nav_about",
            "nav_skills",
            "nav_experience",
            "nav_contact",
            "home_roles",
            "home_description",
            "home_slogan",
            "aboutMe_title",
            "aboutMe_p1",
            "aboutMe_p2",
            "aboutMe_p3",
            "skills_title",
            "skills_description",
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
            "experience_title",
            "experience_description",
            "experience_professional",
            "experience_personal",
            "contact_title",
            "contact_hint",
        ] {
            doc.push_tagged(key);
        }

        // Contact entries are literal content, not translated.
        doc.push_literal("contact_email", "hello@adrianvega.dev");
        doc.push_literal("contact_phone", "+34 600 123 456");

        doc.video_slots.push(VideoSlot {
            id: "demo_reel".to_string(),
            src: String::new(),
        });

        let cards = vec![
            ProjectCard {
                title_key: "project_lanterns_title".to_string(),
                summary_key: "project_lanterns_summary".to_string(),
                gallery_key: "project_lanterns_gallery".to_string(),
            },
            ProjectCard {
                title_key: "project_onepagers_title".to_string(),
                summary_key: "project_onepagers_summary".to_string(),
                gallery_key: "project_onepagers_gallery".to_string(),
            },
        ];
        for card in &cards {
            doc.push_tagged(&card.title_key);
            doc.push_tagged(&card.summary_key);
        }
        doc.project_cards = cards;

        doc
    }

    /// Adds an element whose id doubles as its translation key.
    pub fn push_tagged(&mut self, key: &str) {
        self.elements.push(Element {
            id: key.to_string(),
            key: Some(key.to_string()),
            markup: String::new(),
        });
    }

    /// Adds an untagged element with fixed markup.
    pub fn push_literal(&mut self, id: &str, markup: &str) {
        self.elements.push(Element {
            id: id.to_string(),
            key: None,
            markup: markup.to_string(),
        });
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// Elements tagged with a translation key, mutable for rewriting.
    pub fn tagged_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements
            .iter_mut()
            .filter(|element| element.key.is_some())
    }

    pub fn video_slots_mut(&mut self) -> impl Iterator<Item = &mut VideoSlot> {
        self.video_slots.iter_mut()
    }

    pub fn video_slot(&self, id: &str) -> Option<&VideoSlot> {
        self.video_slots.iter().find(|slot| slot.id == id)
    }

    pub fn lang_controls(&self) -> &[LangControl] {
        &self.lang_controls
    }

    pub fn project_cards(&self) -> &[ProjectCard] {
        &self.project_cards
    }

    pub fn active_language(&self) -> Language {
        self.active_language
    }

    /// Sets the document language marker and refreshes the selector
    /// controls' active highlight to match.
    pub fn set_active_language(&mut self, language: Language) {
        self.active_language = language;
        for control in &mut self.lang_controls {
            control.active = control.language == language;
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    pub fn unlock_scroll(&mut self) {
        self.scroll_locked = false;
    }

    /// Markup of the element with `id`, or an empty string. Convenience for
    /// the renderer, which treats missing content as blank rather than an
    /// error.
    pub fn markup_of(&self, id: &str) -> &str {
        self.element_by_id(id)
            .map(|element| element.markup.as_str())
            .unwrap_or("")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes angle-bracket tags from markup, keeping the text between them.
pub fn strip_markup(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_strips_tags_and_trims() {
        let element = Element {
            id: "x".to_string(),
            key: None,
            markup: "  I studied <strong>game design</strong> in Madrid. ".to_string(),
        };
        assert_eq!(element.text_content(), "I studied game design in Madrid.");
    }

    #[test]
    fn element_lookup_by_missing_id_is_none() {
        let doc = Document::portfolio();
        assert!(doc.element_by_id("does_not_exist").is_none());
    }

    #[test]
    fn active_language_drives_selector_highlight() {
        let mut doc = Document::portfolio();
        doc.set_active_language(Language::Spanish);
        for control in doc.lang_controls() {
            assert_eq!(control.active, control.language == Language::Spanish);
        }
        doc.set_active_language(Language::English);
        for control in doc.lang_controls() {
            assert_eq!(control.active, control.language == Language::English);
        }
    }

    #[test]
    fn portfolio_has_contact_sources() {
        let doc = Document::portfolio();
        assert!(doc.element_by_id("contact_email").is_some());
        assert!(doc.element_by_id("contact_phone").is_some());
    }
}
