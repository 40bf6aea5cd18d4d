//! luadoc Core - API reference rendering for Lua projects
//!
//! This crate provides the core functionality:
//! - Doc: data model of the language server's `doc.json` and the renderer
//! - Config: the names to document and the external type links
//! - Extract: running `lua-language-server` to produce `doc.json`

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Documentation model, cross-linking and rendering
pub mod doc;

/// Render configuration (`luadoc.toml`)
pub mod config;

/// Invocation of the external documentation extractor
pub mod extract;

mod error;

pub use config::RenderConfig;
pub use doc::{AnchorStyle, ApiObject, DocRenderer, OutputFormat, TypeLinker};
pub use error::{DocError, Result};
pub use extract::Extractor;
