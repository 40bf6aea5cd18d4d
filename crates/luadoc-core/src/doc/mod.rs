//! API reference generation from lua-language-server output
//!
//! This module holds the data model of the language server's `doc.json`,
//! the type cross-linker and the renderer that produces AsciiDoc or Markdown.

mod crosslink;
mod format;
mod renderer;
mod types;

pub use crosslink::TypeLinker;
pub use format::{AnchorStyle, OutputFormat};
pub use renderer::DocRenderer;
pub use types::{ApiObject, Definition, Field, FunctionExtension, Param};
