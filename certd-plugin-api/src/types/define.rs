// ============ Plugin Metadata Types ============

use serde::{Deserialize, Serialize};

/// Value type of an input field (affects UI rendering and host-side validation).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text.
    Text,
    /// One value out of [`ComponentHint::options`].
    Select,
    /// Reference to an entry of the host's access store.
    Access,
}

/// A selectable option of a [`FieldType::Select`] field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    /// Value stored in the props.
    pub value: String,
    /// Human-readable label.
    pub label: String,
    /// Optional tooltip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Rendering hint for the host UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHint {
    /// UI component name (e.g. `a-select`, `access-selector`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Access type filter for `access-selector`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Options for select components.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<SelectOption>,
}

/// Definition of a single input accepted by a plugin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    /// Machine-readable key; matches the props field name.
    pub key: String,
    /// Human-readable label.
    pub label: String,
    /// Value type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    /// Default value, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Optional help text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub component: ComponentHint,
}

impl InputField {
    /// Optional free-text field.
    pub fn text(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            field_type: FieldType::Text,
            required: false,
            default: None,
            desc: None,
            component: ComponentHint::default(),
        }
    }

    /// Required access-store reference filtered to one access type.
    pub fn access(key: &str, label: &str, filter: &str) -> Self {
        Self {
            field_type: FieldType::Access,
            required: true,
            component: ComponentHint {
                name: Some("access-selector".to_string()),
                filter: Some(filter.to_string()),
                ..ComponentHint::default()
            },
            ..Self::text(key, label)
        }
    }

    /// Select field rendered as a dropdown.
    pub fn select(key: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self {
            field_type: FieldType::Select,
            component: ComponentHint {
                name: Some("a-select".to_string()),
                options,
                ..ComponentHint::default()
            },
            ..Self::text(key, label)
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: &str) -> Self {
        self.default = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn with_desc(mut self, desc: &str) -> Self {
        self.desc = Some(desc.to_string());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.component.placeholder = Some(placeholder.to_string());
        self
    }
}

/// Static metadata describing a plugin.
///
/// Purely descriptive: consumed by the host UI and orchestrator, never by the
/// plugin's executable logic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PluginDefine {
    /// Unique plugin name (e.g. `aliyun`, `deployCertToAliyunCDN`).
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Short description.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub desc: String,
    /// Inputs in display order.
    pub input: Vec<InputField>,
}

impl PluginDefine {
    /// Look up an input definition by key.
    pub fn input(&self, key: &str) -> Option<&InputField> {
        self.input.iter().find(|f| f.key == key)
    }

    /// Keys of all required inputs.
    pub fn required_keys(&self) -> impl Iterator<Item = &str> {
        self.input
            .iter()
            .filter(|f| f.required)
            .map(|f| f.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PluginDefine {
        PluginDefine {
            name: "sample".to_string(),
            label: "Sample".to_string(),
            desc: String::new(),
            input: vec![
                InputField::text("domainName", "Domain")
                    .required()
                    .with_placeholder("cdn domain"),
                InputField::select(
                    "from",
                    "Source",
                    vec![SelectOption {
                        value: "upload".to_string(),
                        label: "Upload".to_string(),
                        title: None,
                    }],
                )
                .with_default("upload"),
                InputField::access("accessId", "Access", "aliyun"),
            ],
        }
    }

    #[test]
    fn serializes_camel_case_schema() {
        let json = serde_json::to_value(sample()).unwrap();
        let domain = &json["input"][0];
        assert_eq!(domain["key"], "domainName");
        assert_eq!(domain["type"], "text");
        assert_eq!(domain["required"], true);
        assert_eq!(domain["component"]["placeholder"], "cdn domain");
        assert!(domain.get("default").is_none());
        assert!(json.get("desc").is_none());

        let access = &json["input"][2];
        assert_eq!(access["type"], "access");
        assert_eq!(access["component"]["name"], "access-selector");
        assert_eq!(access["component"]["filter"], "aliyun");
    }

    #[test]
    fn select_keeps_options_and_default() {
        let define = sample();
        let from = define.input("from").unwrap();
        assert_eq!(from.field_type, FieldType::Select);
        assert_eq!(from.default.as_deref(), Some("upload"));
        assert_eq!(from.component.options.len(), 1);
        assert!(!from.required);
    }

    #[test]
    fn required_keys_in_order() {
        let define = sample();
        let keys: Vec<_> = define.required_keys().collect();
        assert_eq!(keys, vec!["domainName", "accessId"]);
    }
}
