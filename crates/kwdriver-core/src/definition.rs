use std::any::TypeId;
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::parameter::ParameterDefinition;

/// Normalized description of one automation keyword.
///
/// Produced by [`DefinitionBuilder::build`](crate::DefinitionBuilder::build)
/// and owned by whoever called it. Treat it as a value: its invariants
/// (non-empty name and description, parameter identities unique) are enforced
/// at construction and not re-checked afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordDefinition {
    /// Public keyword name, never empty.
    pub name: String,
    /// Keyword description, never empty.
    pub description: String,
    /// Identity of the implementing type.
    #[serde(skip)]
    pub type_id: TypeId,
    /// Fully-qualified path of the implementing type.
    pub type_name: &'static str,
    /// Parameter definitions keyed by parameter identity.
    pub parameters: BTreeMap<String, ParameterDefinition>,
}

impl KeywordDefinition {
    /// Looks up a parameter by its identity.
    pub fn parameter(&self, name: &str) -> Option<&ParameterDefinition> {
        self.parameters.get(name)
    }

    /// Renders the parameter set as a JSON Schema object.
    ///
    /// One property per parameter (`type`, `description`, and `default` when
    /// present) plus a `required` array. Output order follows parameter
    /// identity order and is stable across calls.
    pub fn input_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for (name, param) in &self.parameters {
            let mut property = serde_json::Map::new();
            property.insert("type".to_string(), Value::String(param.kind.schema_type().to_string()));
            property.insert("description".to_string(), Value::String(param.description.clone()));
            if let Some(default) = &param.default {
                property.insert("default".to_string(), Value::String(default.clone()));
            }
            properties.insert(name.clone(), Value::Object(property));

            if param.required {
                required.push(Value::String(name.clone()));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DefinitionBuilder;
    use crate::keyword::AutomationKeyword;
    use crate::parameter::{ParamKind, ParamSpec};

    struct EnterText;

    impl AutomationKeyword for EnterText {
        const PARAMETERS: &'static [ParamSpec] = &[
            ParamSpec::new("locator", ParamKind::Text),
            ParamSpec::new("text", ParamKind::Text).describe("Text to type into the element"),
            ParamSpec::new("clear_first", ParamKind::Flag).optional().with_default("true"),
        ];
    }

    fn definition() -> KeywordDefinition {
        DefinitionBuilder::<EnterText>::new().build().unwrap()
    }

    #[test]
    fn parameter_lookup_by_identity() {
        let definition = definition();
        assert!(definition.parameter("locator").is_some());
        assert!(definition.parameter("missing").is_none());
    }

    #[test]
    fn input_schema_is_an_object_schema() {
        let schema = definition().input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["locator"]["type"], "string");
        assert_eq!(schema["properties"]["clear_first"]["type"], "boolean");
        assert_eq!(
            schema["properties"]["text"]["description"],
            "Text to type into the element"
        );
    }

    #[test]
    fn input_schema_includes_defaults() {
        let schema = definition().input_schema();
        assert_eq!(schema["properties"]["clear_first"]["default"], "true");
        assert!(schema["properties"]["locator"].get("default").is_none());
    }

    #[test]
    fn input_schema_required_lists_only_required_parameters() {
        let schema = definition().input_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required, &vec![json!("locator"), json!("text")]);
    }

    #[test]
    fn definition_serializes_without_type_id() {
        let value = serde_json::to_value(definition()).unwrap();
        assert_eq!(value["name"], "EnterText");
        assert!(value.get("type_id").is_none());
        assert!(value["type_name"].as_str().unwrap().ends_with("EnterText"));
        assert!(value["parameters"]["text"]["required"].as_bool().unwrap());
    }
}
