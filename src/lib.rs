//! Tooling for a CSS animation gallery.
//!
//! - [`css::extract`] pulls a single `@keyframes` or class rule out of raw stylesheet text.
//! - [`css::export`] turns a catalog entry into copy/download-ready CSS, degrading to a
//!   synthesized rule instead of failing.
//! - [`share`] encodes preview parameters into a query string and builds absolute share links.
//! - [`catalog`] and [`preview`] load the animation catalog and resolve shared parameters
//!   against its defaults.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod css;
mod foundation;
pub mod preview;
pub mod share;
pub mod state;

pub use catalog::{AnimationDefaults, AnimationRecord, Catalog, CatalogFilter};
pub use css::export::{
    CssTarget, FileStylesheet, InlineStylesheet, StylesheetSource, build_animation_css,
    export_animation_css, export_file_name, fallback_rule,
};
pub use css::extract::{
    ClassHeader, HeaderPattern, KeyframesHeader, StylesheetBlock, extract_block,
};
pub use foundation::error::{AnimlibError, AnimlibResult};
pub use preview::{AnimationSettings, ResolvedPreview, restore};
pub use share::codec::{decode, encode};
pub use share::link::{build_share_url, share_base};
pub use state::{AnimationPreviewState, DemoKind, Direction, Easing, FillMode, IterationCount};
