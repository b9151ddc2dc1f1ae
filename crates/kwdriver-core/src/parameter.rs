//! Parameter declarations and their normalized definitions.
//!
//! A [`ParamSpec`] is the declarative record a keyword attaches to one of its
//! fields; [`ParameterDefinition::from_spec`] resolves it into the normalized
//! form the execution engine consumes. Resolution can fail on malformed
//! declarations; those errors are fatal to the enclosing keyword build.

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::util::non_blank;

/// Value kind accepted by a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
    /// Free-form text.
    Text,
    /// Whole number.
    Integer,
    /// Decimal number.
    Number,
    /// Boolean flag.
    Flag,
}

impl ParamKind {
    /// JSON Schema type name for this kind.
    pub const fn schema_type(self) -> &'static str {
        match self {
            ParamKind::Text => "string",
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
            ParamKind::Flag => "boolean",
        }
    }
}

/// Declarative record marking one field of a keyword as an execution
/// parameter.
///
/// Constructors are `const fn` so declarations can live in the trait's
/// `PARAMETERS` slice. `new` yields a required parameter named after its
/// field; the chained constructors override the parts that differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Name of the declaring field on the implementing type.
    pub field: &'static str,
    /// Public name override; blank means "use the field name".
    pub name: &'static str,
    /// Description override; blank means "use the resolved name".
    pub description: &'static str,
    /// Value kind.
    pub kind: ParamKind,
    /// Whether the engine must receive a value for this parameter.
    pub required: bool,
    /// Default value applied when an optional parameter is omitted.
    pub default: Option<&'static str>,
}

impl ParamSpec {
    pub const fn new(field: &'static str, kind: ParamKind) -> Self {
        Self {
            field,
            name: "",
            description: "",
            kind,
            required: true,
            default: None,
        }
    }

    /// Overrides the public parameter name.
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Sets the parameter description.
    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Marks the parameter as optional.
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the default value. Only valid on optional parameters; a required
    /// parameter with a default is rejected as malformed at build time.
    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

/// Normalized description of one execution parameter.
///
/// Identity is the resolved `name`; the enclosing keyword definition keys its
/// parameter set by it and rejects duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDefinition {
    /// Public parameter name, used by the engine to map external input.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Field on the implementing type this parameter binds to.
    pub field: &'static str,
    /// Value kind.
    pub kind: ParamKind,
    /// Whether a value must be supplied.
    pub required: bool,
    /// Default value for an omitted optional parameter.
    pub default: Option<String>,
}

impl ParameterDefinition {
    /// Resolves a declaration into its normalized definition.
    ///
    /// The public name is the declaration's name override when non-blank,
    /// otherwise the declaring field name; the description falls back to the
    /// resolved name the same way.
    pub fn from_spec(spec: &ParamSpec) -> Result<Self, ParameterError> {
        let name = match non_blank(spec.name).or_else(|| non_blank(spec.field)) {
            Some(name) => name.to_string(),
            None => {
                return Err(ParameterError::MissingName {
                    field: spec.field.to_string(),
                })
            }
        };

        if spec.required && spec.default.is_some() {
            return Err(ParameterError::DefaultOnRequired { name });
        }

        let description = match non_blank(spec.description) {
            Some(text) => text.to_string(),
            None => name.clone(),
        };

        Ok(Self {
            name,
            description,
            field: spec.field,
            kind: spec.kind,
            required: spec.required,
            default: spec.default.map(str::to_string),
        })
    }
}
