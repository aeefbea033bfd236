//! End-to-end tests for the portfolio controller.
//!
//! These drive the full `App` without a terminal: an in-memory preference
//! store, stub clipboard writers and a counting pan/zoom factory stand in
//! for the real seams.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use folio::app::App;
use folio::clipboard::{ClipboardError, ClipboardWriter};
use folio::gallery::WIDGET_INIT_DELAY;
use folio::i18n::LANGUAGE_PREF_KEY;
use folio::panzoom::{PanZoom, PanZoomFactory, PanZoomOptions, Transform};
use folio::storage::{MemoryPrefStore, PrefStore};

// ==================== Test doubles ====================

struct AcceptingClipboard;

#[async_trait]
impl ClipboardWriter for AcceptingClipboard {
    async fn write_text(&self, _text: String) -> Result<(), ClipboardError> {
        Ok(())
    }
}

struct RejectingClipboard;

#[async_trait]
impl ClipboardWriter for RejectingClipboard {
    async fn write_text(&self, _text: String) -> Result<(), ClipboardError> {
        Err(ClipboardError::Denied("permission denied".into()))
    }
}

#[derive(Default)]
struct FactoryLog {
    created: usize,
    disposed: usize,
}

struct CountingWidget {
    log: Arc<Mutex<FactoryLog>>,
    scale: f64,
}

impl PanZoom for CountingWidget {
    fn dispose(&mut self) {
        self.log.lock().unwrap().disposed += 1;
    }

    fn transform(&self) -> Transform {
        Transform {
            x: 0.0,
            y: 0.0,
            scale: self.scale,
        }
    }

    fn move_to(&mut self, _x: f64, _y: f64) {}

    fn zoom_abs(&mut self, _fx: f64, _fy: f64, scale: f64) {
        self.scale = scale;
    }

    fn smooth_zoom(&mut self, _cx: f64, _cy: f64, scale: f64) {
        self.scale = scale;
    }
}

struct CountingFactory {
    log: Arc<Mutex<FactoryLog>>,
}

impl PanZoomFactory for CountingFactory {
    fn create(&self, _viewport: (f64, f64), _options: PanZoomOptions) -> Box<dyn PanZoom> {
        self.log.lock().unwrap().created += 1;
        Box::new(CountingWidget {
            log: Arc::clone(&self.log),
            scale: 1.0,
        })
    }
}

// ==================== Helpers ====================

fn app_with(
    store: MemoryPrefStore,
    clipboard: Arc<dyn ClipboardWriter>,
) -> (App, Arc<Mutex<FactoryLog>>) {
    let log = Arc::new(Mutex::new(FactoryLog::default()));
    let factory = CountingFactory {
        log: Arc::clone(&log),
    };
    let app = App::new(Box::new(store), clipboard, Box::new(factory))
        .expect("app construction must succeed");
    (app, log)
}

fn default_app() -> (App, Arc<Mutex<FactoryLog>>) {
    app_with(MemoryPrefStore::new(), Arc::new(AcceptingClipboard))
}

/// Lets spawned clipboard tasks finish, then runs a tick at `now`.
async fn settle(app: &mut App, now: Instant) {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
    app.advance(now);
}

fn shown(app: &App, element_id: &str) -> String {
    app.document
        .element_by_id(element_id)
        .map(|element| element.markup.clone())
        .unwrap_or_default()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// ==================== I18n ====================

#[tokio::test]
async fn startup_applies_the_persisted_language_once() {
    let mut store = MemoryPrefStore::new();
    store.set(LANGUAGE_PREF_KEY, "es").unwrap();
    let (app, _log) = app_with(store, Arc::new(AcceptingClipboard));

    assert_eq!(shown(&app, "nav_top"), "Inicio");
    assert_eq!(shown(&app, "aboutMe_title"), "Sobre mí");
    assert_eq!(app.persisted_language().as_deref(), Some("es"));
}

#[tokio::test]
async fn startup_falls_back_to_english_for_unrecognized_values() {
    let mut store = MemoryPrefStore::new();
    store.set(LANGUAGE_PREF_KEY, "klingon").unwrap();
    let (app, _log) = app_with(store, Arc::new(AcceptingClipboard));

    assert_eq!(shown(&app, "nav_top"), "Top");
    assert_eq!(app.persisted_language().as_deref(), Some("en"));
}

#[tokio::test]
async fn set_language_rewrites_persists_and_ignores_unsupported_codes() {
    let (mut app, _log) = default_app();

    assert!(app.set_language("es"));
    assert_eq!(shown(&app, "nav_top"), "Inicio");
    assert_eq!(app.persisted_language().as_deref(), Some("es"));

    // Unsupported code: nothing changes, including the persisted value.
    assert!(!app.set_language("fr"));
    assert_eq!(shown(&app, "nav_top"), "Inicio");
    assert_eq!(app.persisted_language().as_deref(), Some("es"));
}

#[tokio::test]
async fn set_language_is_idempotent() {
    let (mut app, _log) = default_app();

    app.set_language("es");
    let first: Vec<String> = ["nav_top", "aboutMe_p1", "skills_title", "contact_title"]
        .iter()
        .map(|id| shown(&app, id))
        .collect();
    app.set_language("es");
    let second: Vec<String> = ["nav_top", "aboutMe_p1", "skills_title", "contact_title"]
        .iter()
        .map(|id| shown(&app, id))
        .collect();

    assert_eq!(first, second);
    assert_eq!(app.persisted_language().as_deref(), Some("es"));
}

#[tokio::test]
async fn keys_missing_from_the_target_language_keep_their_content() {
    let (mut app, _log) = default_app();

    // "skills_blender" only exists in the English table.
    assert_eq!(shown(&app, "skills_blender"), "Blender");
    app.set_language("es");
    assert_eq!(shown(&app, "skills_blender"), "Blender");

    // "experience_personal" only exists in the Spanish table; switching
    // back to English leaves the Spanish text in place.
    assert_eq!(shown(&app, "experience_personal"), "Proyectos personales");
    app.set_language("en");
    assert_eq!(shown(&app, "experience_personal"), "Proyectos personales");
}

#[tokio::test]
async fn language_switch_rewrites_video_sources() {
    let (mut app, _log) = default_app();
    let english_src = app.document.video_slot("demo_reel").unwrap().src.clone();
    assert_eq!(english_src, "assets/videos/demo_reel_en.mp4");

    app.set_language("es");
    assert_eq!(
        app.document.video_slot("demo_reel").unwrap().src,
        "assets/videos/demo_reel_es.mp4"
    );
}

#[tokio::test]
async fn cycling_with_the_keyboard_switches_and_persists() {
    let (mut app, _log) = default_app();
    app.handle_key(key(KeyCode::Char('l')));
    assert_eq!(app.persisted_language().as_deref(), Some("es"));
    app.handle_key(key(KeyCode::Char('l')));
    assert_eq!(app.persisted_language().as_deref(), Some("en"));
}

// ==================== Gallery ====================

#[tokio::test]
async fn gallery_opens_with_the_active_languages_image_set() {
    let (mut app, log) = default_app();
    let start = Instant::now();

    app.open_project_gallery("project_lanterns_gallery");
    assert!(app.gallery.is_open());
    assert!(app.document.scroll_locked());
    assert_eq!(app.gallery.counter(), "1 / 3");
    assert_eq!(
        app.gallery.current_image(),
        Some("assets/projects/lanterns/overview_en.png")
    );

    // The widget only exists after the deferred initialization.
    assert!(!app.gallery.has_widget());
    app.advance(start + WIDGET_INIT_DELAY + Duration::from_millis(10));
    assert!(app.gallery.has_widget());
    assert_eq!(log.lock().unwrap().created, 1);
}

#[tokio::test]
async fn gallery_with_an_unknown_key_stays_closed() {
    let (mut app, log) = default_app();
    app.open_project_gallery("no_such_project");
    assert!(!app.gallery.is_open());
    assert!(!app.document.scroll_locked());
    app.advance(Instant::now() + WIDGET_INIT_DELAY);
    assert_eq!(log.lock().unwrap().created, 0);
}

#[tokio::test]
async fn gallery_navigation_wraps_and_updates_the_counter() {
    let (mut app, _log) = default_app();
    app.open_project_gallery("project_lanterns_gallery");

    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.gallery.current_index(), 2);
    assert_eq!(app.gallery.counter(), "3 / 3");
    assert_eq!(
        app.gallery.current_image(),
        Some("assets/projects/lanterns/progression_en.png")
    );

    for _ in 0..3 {
        app.handle_key(key(KeyCode::Right));
    }
    assert_eq!(app.gallery.current_index(), 2);
}

#[tokio::test]
async fn escape_closes_the_gallery_and_releases_the_widget() {
    let (mut app, log) = default_app();
    let start = Instant::now();
    app.open_project_gallery("project_lanterns_gallery");
    app.advance(start + WIDGET_INIT_DELAY + Duration::from_millis(10));
    assert!(app.gallery.has_widget());

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.gallery.is_open());
    assert!(!app.gallery.has_widget());
    assert!(!app.document.scroll_locked());
    assert_eq!(app.gallery.current_index(), 0);
    assert_eq!(log.lock().unwrap().disposed, 1);

    // Reopening builds exactly one fresh widget.
    let reopen = Instant::now();
    app.open_project_gallery("project_onepagers_gallery");
    app.advance(reopen + WIDGET_INIT_DELAY + Duration::from_millis(10));
    assert_eq!(log.lock().unwrap().created, 2);
    assert_eq!(app.gallery.counter(), "1 / 4");
}

#[tokio::test]
async fn switching_language_changes_the_gallery_bridge_result() {
    let (mut app, _log) = default_app();
    app.set_language("es");
    app.open_project_gallery("project_lanterns_gallery");
    assert_eq!(
        app.gallery.current_image(),
        Some("assets/projects/lanterns/overview_es.png")
    );
}

// ==================== ClipboardCopy ====================

#[tokio::test]
async fn successful_copy_shows_the_localized_confirmation() {
    let (mut app, _log) = default_app();

    app.copy_element("contact_email");
    settle(&mut app, Instant::now()).await;

    assert_eq!(app.bubbles.len(), 1);
    assert_eq!(app.bubbles[0].anchor_id, "contact_email");
    assert_eq!(app.bubbles[0].message, "Copied!");
}

#[tokio::test]
async fn rejected_copy_shows_the_error_message_not_the_success_one() {
    let (mut app, _log) = app_with(MemoryPrefStore::new(), Arc::new(RejectingClipboard));
    app.set_language("es");

    app.copy_element("contact_phone");
    settle(&mut app, Instant::now()).await;

    assert_eq!(app.bubbles.len(), 1);
    assert_eq!(app.bubbles[0].message, "Error al copiar");
}

#[tokio::test]
async fn bubble_language_is_resolved_at_completion_time() {
    let (mut app, _log) = default_app();

    // Dispatch under English, switch to Spanish before the outcome is
    // collected: the bubble must speak Spanish.
    app.copy_element("contact_email");
    app.set_language("es");
    settle(&mut app, Instant::now()).await;

    assert_eq!(app.bubbles[0].message, "¡Copiado!");
}

#[tokio::test]
async fn copying_a_missing_element_is_a_silent_no_op() {
    let (mut app, _log) = default_app();
    app.copy_element("not_an_element");
    settle(&mut app, Instant::now()).await;
    assert!(app.bubbles.is_empty());
}

#[tokio::test]
async fn rapid_copies_stack_bubbles_and_they_expire_on_their_own() {
    let (mut app, _log) = default_app();
    let start = Instant::now();

    app.copy_element("contact_email");
    app.copy_element("contact_email");
    settle(&mut app, start).await;
    assert_eq!(app.bubbles.len(), 2);

    // Well past the fade-out, both bubbles remove themselves.
    app.advance(start + Duration::from_secs(3));
    assert!(app.bubbles.is_empty());
}
