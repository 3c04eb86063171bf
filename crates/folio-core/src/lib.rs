//! Folio Core Library
//!
//! Headless core for the Folio portfolio app: static content tables,
//! the modal open/close lifecycle, and the development-only image
//! override store.
//!
//! ## Overview
//!
//! The desktop UI is a thin Dioxus layer over this crate. Everything
//! with observable behavior lives here so it can be tested without a
//! window:
//!
//! - **Content tables**: immutable experience/project/certification
//!   records keyed by string identifier.
//! - **Image catalog**: per-variant identifier to card-image mappings,
//!   resolved once at render time.
//! - **Modal controllers**: a two-state (Closed/Open) machine per
//!   variant that snapshots the looked-up record on open.
//! - **Overlay manager**: a single stack of open overlays with a
//!   reference-counted page scroll lock and one Escape dispatcher.
//! - **Override store**: dev-mode persistent mapping from
//!   (variant, id, target) to an image path, stored in redb.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::content::ContentTables;
//! use folio_core::modal::ModalController;
//!
//! let tables = ContentTables::shared();
//! let mut modal = ModalController::new();
//!
//! if modal.open(tables.experience(), "1") {
//!     let record = modal.current().unwrap();
//!     println!("{} at {}", record.title, record.company);
//! }
//! ```

pub mod content;
pub mod error;
pub mod modal;
pub mod overlay;
pub mod overrides;

// Re-exports
pub use content::{
    CertificationRecord, ContentTables, ExperienceRecord, ProjectRecord, RecordTable, Variant,
};
pub use error::FolioError;
pub use modal::{resolve_modal_image, ModalController, ModalState};
pub use overlay::{OverlayKind, OverlayManager, ScrollLock};
pub use overrides::{ImageTarget, OverrideKey, OverrideStore};
