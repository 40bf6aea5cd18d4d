//! Types for the API description produced by `lua-language-server --doc`

use serde::Deserialize;

/// Extension type that marks a field as callable
const FUNCTION_KIND: &str = "function";

/// Name shown for a parameter the language server reports without one
const VARARG_NAME: &str = "...";

/// A named unit of API surface (a class, module table or global)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiObject {
    /// Fully qualified name, unique within one description
    pub name: String,
    /// Declaration sites; only the first one carries the object description
    #[serde(default)]
    pub defines: Vec<Definition>,
    /// Members of the object, in no particular order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl ApiObject {
    /// Create an object with no definitions or fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the description of the first definition
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.defines.insert(0, Definition {
            desc: Some(desc.into()),
            rawdesc: None,
        });
        self
    }

    /// Add a field
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Description of the first definition, if it has any text
    pub fn description(&self) -> Option<&str> {
        self.defines.first().and_then(|d| non_empty(d.desc.as_deref()))
    }

    /// Fields ordered by their source position
    pub fn sorted_fields(&self) -> Vec<&Field> {
        let mut fields: Vec<&Field> = self.fields.iter().collect();
        fields.sort_by_key(|f| f.start);
        fields
    }
}

/// One declaration site of an object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub rawdesc: Option<String>,
}

/// A member of an object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Field {
    pub name: String,
    /// Source position, used only to restore declaration order
    #[serde(default)]
    pub start: i64,
    /// Type signature as text
    #[serde(default)]
    pub view: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// Full description including markup; preferred for function bodies
    #[serde(default)]
    pub rawdesc: Option<String>,
    #[serde(default)]
    pub extends: Option<FunctionExtension>,
}

impl Field {
    /// Create a plain field
    pub fn new(name: impl Into<String>, start: i64, view: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start,
            view: view.into(),
            ..Self::default()
        }
    }

    /// Create a function field
    pub fn function(
        name: impl Into<String>,
        start: i64,
        args: Vec<Param>,
        returns: Vec<Param>,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            view: "function".to_string(),
            extends: Some(FunctionExtension {
                kind: FUNCTION_KIND.to_string(),
                args,
                returns,
            }),
            ..Self::default()
        }
    }

    /// Set the short description
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Set the full description
    pub fn with_rawdesc(mut self, rawdesc: impl Into<String>) -> Self {
        self.rawdesc = Some(rawdesc.into());
        self
    }

    /// The function signature, if this field is rendered as a function
    pub fn as_function(&self) -> Option<&FunctionExtension> {
        self.extends.as_ref().filter(|e| e.kind == FUNCTION_KIND)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(self.desc.as_deref())
    }

    pub fn raw_description(&self) -> Option<&str> {
        non_empty(self.rawdesc.as_deref())
    }
}

/// Extra type information attached to a field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionExtension {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub args: Vec<Param>,
    #[serde(default)]
    pub returns: Vec<Param>,
}

/// A function parameter or return value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Param {
    /// Returns are usually unnamed
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub view: String,
    #[serde(default)]
    pub desc: Option<String>,
}

impl Param {
    /// Create a named parameter
    pub fn new(name: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            view: view.into(),
            desc: None,
        }
    }

    /// Create an unnamed parameter or return value
    pub fn unnamed(view: impl Into<String>) -> Self {
        Self {
            name: None,
            view: view.into(),
            desc: None,
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Parameter name; unnamed parameters are varargs
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(VARARG_NAME)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(self.desc.as_deref())
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
