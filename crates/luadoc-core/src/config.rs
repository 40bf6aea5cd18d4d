//! Render configuration (`luadoc.toml`) loading and defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::doc::{AnchorStyle, DocRenderer, OutputFormat};
use crate::error::{DocError, Result};

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "luadoc.toml";

/// Placeholder replaced by each name of an external link group.
const NAME_PLACEHOLDER: &str = "{name}";

const DEFAULT_TITLE: &str = "API Reference";

const FACTORIO_CLASSES: &str = "https://lua-api.factorio.com/stable/classes/{name}.html";
const FACTORIO_CONCEPTS: &str = "https://lua-api.factorio.com/stable/concepts/{name}.html";

/// What to document and how to link it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Document title; `None` omits the title block.
    pub title: Option<String>,
    pub format: OutputFormat,
    pub anchor_style: AnchorStyle,
    /// Objects to document, in output order.
    pub relevant: Vec<String>,
    /// Type name to documentation URL, with link groups already expanded.
    pub external_links: BTreeMap<String, String>,
}

/// On-disk form of [`RenderConfig`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    format: OutputFormat,
    #[serde(default)]
    anchor_style: AnchorStyle,
    relevant: Vec<String>,
    #[serde(default)]
    external_links: BTreeMap<String, String>,
    #[serde(default)]
    external_link_groups: Vec<LinkGroup>,
}

/// Several type names sharing one URL template.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LinkGroup {
    url: String,
    names: Vec<String>,
}

impl LinkGroup {
    fn expand(&self, links: &mut BTreeMap<String, String>) -> Result<()> {
        if !self.url.contains(NAME_PLACEHOLDER) {
            return Err(DocError::InvalidLinkTemplate(self.url.clone()));
        }
        self.insert_into(links);
        Ok(())
    }

    fn insert_into(&self, links: &mut BTreeMap<String, String>) {
        for name in &self.names {
            links.insert(name.clone(), self.url.replace(NAME_PLACEHOLDER, name));
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        let groups = [
            LinkGroup {
                url: FACTORIO_CLASSES.to_string(),
                names: vec!["LuaPlayer".to_string(), "LuaEntity".to_string()],
            },
            LinkGroup {
                url: FACTORIO_CONCEPTS.to_string(),
                names: vec!["MapPosition".to_string(), "GuiLocation".to_string()],
            },
        ];
        let mut external_links = BTreeMap::new();
        for group in &groups {
            group.insert_into(&mut external_links);
        }

        Self {
            title: Some(DEFAULT_TITLE.to_string()),
            format: OutputFormat::default(),
            anchor_style: AnchorStyle::default(),
            relevant: vec!["remote.windowed-cameras".to_string(), "CameraViewSpec".to_string()],
            external_links,
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from TOML text; `path` is only used in errors.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text).map_err(|source| DocError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        // Explicit entries override the ones generated from groups.
        let mut external_links = BTreeMap::new();
        for group in &file.external_link_groups {
            group.expand(&mut external_links)?;
        }
        external_links.extend(file.external_links);

        Ok(Self {
            title: match file.title {
                Some(title) if title.is_empty() => None,
                Some(title) => Some(title),
                None => Some(DEFAULT_TITLE.to_string()),
            },
            format: file.format,
            anchor_style: file.anchor_style,
            relevant: file.relevant,
            external_links,
        })
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DocError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        debug!(
            path = %path.display(),
            relevant = config.relevant.len(),
            external_links = config.external_links.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Load a configuration file, falling back to the built-in defaults
    /// when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Build a renderer from this configuration.
    pub fn renderer(&self) -> DocRenderer {
        let renderer = DocRenderer::new(self.relevant.clone(), self.format)
            .with_external_links(self.external_links.clone())
            .with_anchor_style(self.anchor_style);
        match &self.title {
            Some(title) => renderer.with_title(title.clone()),
            None => renderer,
        }
    }
}
