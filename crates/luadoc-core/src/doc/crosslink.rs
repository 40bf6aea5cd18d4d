//! Cross-linking for type signatures
//!
//! Type names in a `view` string are replaced with links: documented objects
//! link to their heading in the same document, known external types link to
//! their own documentation.

use std::collections::{BTreeMap, HashSet};

use super::format::{AnchorStyle, OutputFormat};

/// Rewrites type names in signatures into links
pub struct TypeLinker<'a> {
    relevant: HashSet<&'a str>,
    external_links: &'a BTreeMap<String, String>,
    format: OutputFormat,
    anchor_style: AnchorStyle,
}

impl<'a> TypeLinker<'a> {
    /// Create a linker for one document
    pub fn new(
        relevant_names: &'a [String],
        external_links: &'a BTreeMap<String, String>,
        format: OutputFormat,
        anchor_style: AnchorStyle,
    ) -> Self {
        Self {
            relevant: relevant_names.iter().map(String::as_str).collect(),
            external_links,
            format,
            anchor_style,
        }
    }

    /// Replace every recognized type name in `view` with a link
    ///
    /// Tokens are maximal runs of ASCII letters, digits and underscores.
    /// Documented objects take priority over external links; everything else,
    /// including punctuation such as `|`, `?` and `[]`, is copied unchanged.
    pub fn add_type_links(&self, view: &str) -> String {
        let mut result = String::with_capacity(view.len());
        let mut word_start = None;

        for (i, c) in view.char_indices() {
            if is_word_char(c) {
                word_start.get_or_insert(i);
            } else {
                if let Some(start) = word_start.take() {
                    self.push_token(&mut result, &view[start..i]);
                }
                result.push(c);
            }
        }
        if let Some(start) = word_start {
            self.push_token(&mut result, &view[start..]);
        }

        result
    }

    fn push_token(&self, out: &mut String, token: &str) {
        match self.resolve(token) {
            Some(link) => out.push_str(&link),
            None => out.push_str(token),
        }
    }

    fn resolve(&self, token: &str) -> Option<String> {
        if self.relevant.contains(token) {
            let anchor = self.anchor_style.anchor_id(token);
            Some(self.format.internal_link(token, &anchor))
        } else {
            self.external_links
                .get(token)
                .map(|url| self.format.external_link(token, url))
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
