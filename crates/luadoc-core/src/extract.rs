//! Running `lua-language-server --doc` and loading the `doc.json` it writes.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::doc::ApiObject;
use crate::error::{DocError, Result};

/// Default language server executable
pub const DEFAULT_SERVER: &str = "lua-language-server";

/// File the language server writes into its output directory
pub const DOC_JSON: &str = "doc.json";

/// Produces the API description of a Lua project
#[derive(Debug, Clone)]
pub struct Extractor {
    program: String,
    project_dir: PathBuf,
    out_dir: PathBuf,
}

impl Extractor {
    /// Document `project_dir`, writing `doc.json` into `out_dir`
    pub fn new(project_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: DEFAULT_SERVER.to_string(),
            project_dir: project_dir.into(),
            out_dir: out_dir.into(),
        }
    }

    /// Use a different language server executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Path of the JSON file the server produces
    pub fn doc_json_path(&self) -> PathBuf {
        self.out_dir.join(DOC_JSON)
    }

    /// Run the language server and load its output
    ///
    /// The server's stdout goes to our stderr so that it never ends up in a
    /// document written to stdout.
    pub fn run(&self) -> Result<Vec<ApiObject>> {
        info!(
            program = %self.program,
            project = %self.project_dir.display(),
            "running documentation extractor"
        );

        let status = Command::new(&self.program)
            .arg("--doc_out_path")
            .arg(&self.out_dir)
            .arg("--doc")
            .arg(&self.project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::from(std::io::stderr()))
            .status()
            .map_err(|source| DocError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(DocError::ToolFailed {
                program: self.program.clone(),
                status,
            });
        }

        load_objects(&self.doc_json_path())
    }
}

/// Load an API description from a `doc.json` file
pub fn load_objects(path: &Path) -> Result<Vec<ApiObject>> {
    let text = std::fs::read_to_string(path)?;
    let objects = parse_objects(&text)?;
    debug!(path = %path.display(), objects = objects.len(), "loaded API description");
    Ok(objects)
}

/// Parse an API description from JSON text
pub fn parse_objects(json: &str) -> Result<Vec<ApiObject>> {
    Ok(serde_json::from_str(json)?)
}
