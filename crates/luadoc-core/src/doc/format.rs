//! Output syntax for the supported markup languages
//!
//! Everything that differs between AsciiDoc and Markdown lives here; the
//! renderer only decides what to emit and in which order.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

/// Markup language of the generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    #[serde(alias = "adoc")]
    AsciiDoc,
    #[serde(alias = "md")]
    Markdown,
}

/// How object names are turned into anchor ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorStyle {
    /// Runs of characters outside `[A-Za-z0-9]` become a single `-`
    #[default]
    Collapsed,
    /// The object name is used unchanged
    Raw,
}

impl AnchorStyle {
    /// Anchor id for an object name
    pub fn anchor_id(self, name: &str) -> String {
        match self {
            AnchorStyle::Collapsed => separator_runs().replace_all(name, "-").into_owned(),
            AnchorStyle::Raw => name.to_string(),
        }
    }
}

fn separator_runs() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").expect("separator pattern is valid"))
}

impl OutputFormat {
    /// Conventional file extension for the format
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::AsciiDoc => "adoc",
            OutputFormat::Markdown => "md",
        }
    }

    /// Document title block
    pub fn title(self, title: &str) -> String {
        match self {
            // Every object heading carries an explicit id, so generated
            // section ids are turned off.
            OutputFormat::AsciiDoc => format!("= {}\n:!sectids:", title),
            OutputFormat::Markdown => format!("# {}", title),
        }
    }

    /// Top-level heading for an object, preceded by its anchor
    pub fn object_heading(self, name: &str, anchor: &str) -> String {
        match self {
            OutputFormat::AsciiDoc => format!("[#{}]\n== {}", anchor, name),
            OutputFormat::Markdown => format!("<a id=\"{}\"></a>\n## {}", anchor, name),
        }
    }

    /// Sub-heading for a function field
    pub fn member_heading(self, name: &str) -> String {
        match self {
            OutputFormat::AsciiDoc => format!("=== {}", name),
            OutputFormat::Markdown => format!("### {}", name),
        }
    }

    // Code syntax is shared by both formats; these stay methods so the
    // renderer emits all markup through the format.
    /// Fenced Lua code block
    #[allow(clippy::unused_self)]
    pub fn code_block(self, code: &str) -> String {
        format!("```lua\n{}\n```", code)
    }

    #[allow(clippy::unused_self)]
    pub fn inline_code(self, text: &str) -> String {
        format!("`{}`", text)
    }

    /// Link to an anchor in the same document
    pub fn internal_link(self, text: &str, anchor: &str) -> String {
        match self {
            OutputFormat::AsciiDoc => format!("<<{}>>", anchor),
            OutputFormat::Markdown => format!("[{}](#{})", text, anchor),
        }
    }

    pub fn external_link(self, text: &str, url: &str) -> String {
        match self {
            OutputFormat::AsciiDoc => format!("{}[{}]", url, text),
            OutputFormat::Markdown => format!("[{}]({})", text, url),
        }
    }

    /// Emphasized tag that opens a param/return/field line, e.g. `@param`
    pub fn tag(self, tag: &str) -> String {
        match self {
            OutputFormat::AsciiDoc => format!("@__{}__", tag),
            OutputFormat::Markdown => format!("@*{}*", tag),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asciidoc" | "adoc" => Ok(OutputFormat::AsciiDoc),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!(
                "unknown output format '{}', expected 'asciidoc' or 'markdown'",
                other
            )),
        }
    }
}

impl FromStr for AnchorStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "collapsed" => Ok(AnchorStyle::Collapsed),
            "raw" => Ok(AnchorStyle::Raw),
            other => Err(format!(
                "unknown anchor style '{}', expected 'collapsed' or 'raw'",
                other
            )),
        }
    }
}
