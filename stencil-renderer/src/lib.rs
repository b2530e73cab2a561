//! # stencil-renderer
//!
//! Tera-based render capability consumed by the generation engine.
//!
//! The engine treats rendering as an opaque boundary: the [`Render`]
//! trait takes a logical template name, an optional opaque model value,
//! and [`RenderOptions`] (template search root, application name,
//! reference handles) and returns text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use stencil_renderer::{Render, RenderOptions, TeraRenderer};
//!
//! fn render_readme() {
//!     let renderer = TeraRenderer::new();
//!     let opts = RenderOptions {
//!         templates_root: PathBuf::from("templates"),
//!         application_name: "demo".to_string(),
//!         references: vec![],
//!     };
//!     if let Ok(text) = renderer.render("readme", None, &opts) {
//!         println!("{} bytes", text.len());
//!     }
//! }
//! ```

pub mod engine;
pub mod error;

pub use engine::{Render, RenderOptions, ReferenceHandle, TeraRenderer};
pub use error::RenderError;
