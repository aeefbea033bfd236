//! folio: a bilingual terminal portfolio viewer.
//!
//! Three independent UI utilities over one document model: clipboard copy
//! with transient feedback, a modal image gallery with pan/zoom and
//! keyboard navigation, and language switching with a persisted preference.

pub mod app;
pub mod clipboard;
pub mod document;
pub mod event;
pub mod gallery;
pub mod i18n;
pub mod panzoom;
pub mod storage;
pub mod tui;
pub mod ui;
