//! API reference renderer
//!
//! One renderer serves both markup languages; [`OutputFormat`] supplies the
//! syntax and [`AnchorStyle`] the anchor ids.

use std::collections::BTreeMap;

use tracing::debug;

use super::crosslink::TypeLinker;
use super::format::{AnchorStyle, OutputFormat};
use super::types::{ApiObject, Field, FunctionExtension, Param};
use crate::error::{DocError, Result};

/// Prefix of objects that are reached through `remote.call`
const REMOTE_PREFIX: &str = "remote.";

/// Renders selected API objects into a single reference document
#[derive(Debug, Clone, Default)]
pub struct DocRenderer {
    relevant_names: Vec<String>,
    external_links: BTreeMap<String, String>,
    format: OutputFormat,
    anchor_style: AnchorStyle,
    title: Option<String>,
}

impl DocRenderer {
    /// Create a renderer documenting `relevant_names`, in that order
    pub fn new(relevant_names: Vec<String>, format: OutputFormat) -> Self {
        Self {
            relevant_names,
            format,
            ..Self::default()
        }
    }

    /// Set the external type links
    pub fn with_external_links(mut self, links: BTreeMap<String, String>) -> Self {
        self.external_links = links;
        self
    }

    pub fn with_anchor_style(mut self, style: AnchorStyle) -> Self {
        self.anchor_style = style;
        self
    }

    /// Set the document title; without one no title block is emitted
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render the document
    ///
    /// Fails with [`DocError::UnknownObject`] on the first relevant name that
    /// has no object in `objects`; nothing is returned in that case.
    pub fn render(&self, objects: &[ApiObject]) -> Result<String> {
        let linker = TypeLinker::new(
            &self.relevant_names,
            &self.external_links,
            self.format,
            self.anchor_style,
        );
        let mut blocks = Vec::new();

        if let Some(title) = &self.title {
            blocks.push(self.format.title(title));
        }

        for name in &self.relevant_names {
            let object = objects
                .iter()
                .find(|o| &o.name == name)
                .ok_or_else(|| DocError::UnknownObject(name.clone()))?;

            debug!(object = %object.name, fields = object.fields.len(), "rendering object");
            self.render_object(&mut blocks, object, &linker);
        }

        let mut output = blocks.join("\n\n");
        output.push('\n');
        Ok(output)
    }

    fn render_object(
        &self,
        blocks: &mut Vec<String>,
        object: &ApiObject,
        linker: &TypeLinker<'_>,
    ) {
        let anchor = self.anchor_style.anchor_id(&object.name);
        blocks.push(self.format.object_heading(&object.name, &anchor));

        if let Some(desc) = object.description() {
            blocks.push(desc.to_string());
        }

        for field in object.sorted_fields() {
            match field.as_function() {
                Some(function) => self.render_function(blocks, object, field, function, linker),
                None => match field.description() {
                    Some(desc) => blocks.push(self.doc_line(
                        "field",
                        Some(&field.name),
                        &linker.add_type_links(&field.view),
                        desc,
                    )),
                    None => debug!(
                        object = %object.name,
                        field = %field.name,
                        "skipping undocumented field"
                    ),
                },
            }
        }
    }

    fn render_function(
        &self,
        blocks: &mut Vec<String>,
        object: &ApiObject,
        field: &Field,
        function: &FunctionExtension,
        linker: &TypeLinker<'_>,
    ) {
        blocks.push(self.format.member_heading(&field.name));
        let signature = call_signature(&object.name, &field.name, &function.args);
        blocks.push(self.format.code_block(&signature));

        if let Some(rawdesc) = field.raw_description() {
            blocks.push(rawdesc.to_string());
        }

        for arg in &function.args {
            if let Some(desc) = arg.description() {
                let view = linker.add_type_links(&arg.view);
                blocks.push(self.doc_line("param", Some(arg.name()), &view, desc));
            }
        }
        for ret in &function.returns {
            if let Some(desc) = ret.description() {
                let view = linker.add_type_links(&ret.view);
                blocks.push(self.doc_line("return", None, &view, desc));
            }
        }
    }

    /// A tagged documentation line: `@param `name` view — desc`
    fn doc_line(&self, tag: &str, name: Option<&str>, view: &str, desc: &str) -> String {
        let mut line = self.format.tag(tag);
        if let Some(name) = name {
            line.push(' ');
            line.push_str(&self.format.inline_code(name));
        }
        line.push(' ');
        line.push_str(view);
        line.push_str(" — ");
        line.push_str(desc);
        line
    }
}

/// Call signature for a function field, using parameter names only
///
/// Functions of a `remote.<interface>` object are not called through dotted
/// access but through `remote.call("<interface>", "<function>", ...)`.
fn call_signature(object: &str, function: &str, args: &[Param]) -> String {
    let arg_names: Vec<&str> = args.iter().map(Param::name).collect();

    match object.strip_prefix(REMOTE_PREFIX).filter(|ns| !ns.is_empty()) {
        Some(interface) => {
            let mut call_args = vec![format!("\"{}\"", interface), format!("\"{}\"", function)];
            call_args.extend(arg_names.iter().map(|a| (*a).to_string()));
            format!("remote.call({})", call_args.join(", "))
        }
        None => format!("{}.{}({})", object, function, arg_names.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape() -> ApiObject {
        ApiObject::new("Shape")
            .with_desc("A geometric shape.")
            .with_field(Field::function(
                "area",
                2,
                vec![Param::new("self", "Shape")],
                vec![Param::unnamed("number").with_desc("the area")],
            ))
            .with_field(Field::new("kind", 1, "string").with_desc("shape kind"))
    }

    #[test]
    fn test_call_signature_plain() {
        let args = vec![Param::new("self", "Shape"), Param::new("scale", "number")];
        assert_eq!(call_signature("Shape", "grow", &args), "Shape.grow(self, scale)");
        assert_eq!(call_signature("Shape", "new", &[]), "Shape.new()");
    }

    #[test]
    fn test_call_signature_remote() {
        let args = vec![Param::new("player", "LuaPlayer")];
        assert_eq!(
            call_signature("remote.windowed-cameras", "open", &args),
            "remote.call(\"windowed-cameras\", \"open\", player)"
        );
        assert_eq!(
            call_signature("remote.windowed-cameras", "count", &[]),
            "remote.call(\"windowed-cameras\", \"count\")"
        );
    }

    #[test]
    fn test_unnamed_arg_shown_as_vararg() {
        let object = ApiObject::new("remote.a.b").with_field(Field::function(
            "f",
            1,
            vec![Param::unnamed("any").with_desc("rest")],
            vec![],
        ));
        let renderer = DocRenderer::new(vec!["remote.a.b".to_string()], OutputFormat::AsciiDoc);
        let output = renderer.render(&[object]).unwrap();

        assert!(output.contains("remote.call(\"a.b\", \"f\", ...)"));
        assert!(output.contains("@__param__ `...` any — rest"));
        assert!(!output.contains(", )"));
        assert!(!output.contains("``"));
    }

    #[test]
    fn test_call_signature_remote_requires_namespace() {
        assert_eq!(call_signature("remote.", "f", &[]), "remote..f()");
        assert_eq!(call_signature("remotes.x", "f", &[]), "remotes.x.f()");
        assert_eq!(call_signature("my.remote.x", "f", &[]), "my.remote.x.f()");
    }

    #[test]
    fn test_render_markdown_example() {
        let renderer = DocRenderer::new(vec!["Shape".to_string()], OutputFormat::Markdown);
        let output = renderer.render(&[shape()]).unwrap();

        let expected = "<a id=\"Shape\"></a>\n## Shape\n\n\
            A geometric shape.\n\n\
            @*field* `kind` string — shape kind\n\n\
            ### area\n\n\
            ```lua\nShape.area(self)\n```\n\n\
            @*return* number — the area\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_asciidoc_with_title() {
        let renderer = DocRenderer::new(vec!["Shape".to_string()], OutputFormat::AsciiDoc)
            .with_title("API Reference");
        let output = renderer.render(&[shape()]).unwrap();

        assert!(output.starts_with("= API Reference\n:!sectids:\n\n[#Shape]\n== Shape\n\n"));
        assert!(output.contains("@__field__ `kind` string — shape kind"));
        assert!(output.contains("=== area"));
        assert!(output.contains("@__return__ number — the area"));
    }

    #[test]
    fn test_unknown_object_fails() {
        let renderer = DocRenderer::new(
            vec!["Shape".to_string(), "Missing".to_string()],
            OutputFormat::Markdown,
        );
        let err = renderer.render(&[shape()]).unwrap_err();
        assert!(matches!(err, DocError::UnknownObject(name) if name == "Missing"));
    }

    #[test]
    fn test_undocumented_plain_field_skipped() {
        let object = ApiObject::new("Shape").with_field(Field::new("secret", 1, "string"));
        let renderer = DocRenderer::new(vec!["Shape".to_string()], OutputFormat::Markdown);
        let output = renderer.render(&[object]).unwrap();

        assert_eq!(output, "<a id=\"Shape\"></a>\n## Shape\n");
    }

    #[test]
    fn test_rawdesc_and_params() {
        let object = ApiObject::new("remote.windowed-cameras").with_field(
            Field::function(
                "open",
                1,
                vec![
                    Param::new("player", "LuaPlayer").with_desc("who sees it"),
                    Param::new("spec", "CameraViewSpec?"),
                ],
                vec![],
            )
            .with_desc("short")
            .with_rawdesc("Opens a camera window.\n\nMore text."),
        );
        let mut links = BTreeMap::new();
        links.insert("LuaPlayer".to_string(), "https://x/LuaPlayer.html".to_string());
        let renderer = DocRenderer::new(
            vec!["remote.windowed-cameras".to_string()],
            OutputFormat::AsciiDoc,
        )
        .with_external_links(links);
        let output = renderer.render(&[object]).unwrap();

        assert!(output.starts_with("[#remote-windowed-cameras]\n== remote.windowed-cameras\n\n"));
        assert!(output.contains("remote.call(\"windowed-cameras\", \"open\", player, spec)"));
        assert!(output.contains("Opens a camera window.\n\nMore text."));
        assert!(!output.contains("short"));
        assert!(output
            .contains("@__param__ `player` https://x/LuaPlayer.html[LuaPlayer] — who sees it"));
        assert!(!output.contains("`spec`"));
    }
}
