// ABOUTME: Render context management for template evaluation
// ABOUTME: Holds the immutable value mapping applied to every render in one run

use serde_json::{Map, Value};

use super::error::{Result, TemplateError};

/// The value mapping handed to every render within a single run. Values are
/// arbitrary JSON: strings, numbers, booleans, lists, and nested mappings.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: Map<String, Value>,
}

impl RenderContext {
    /// Create a context from a value mapping
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Create a context from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(TemplateError::Render(format!(
                "values must be an object, got {other}"
            ))),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Add or replace a value
    pub fn set(&mut self, key: String, value: Value) {
        self.values.insert(key, value);
    }

    /// The full mapping as a JSON object, for handing to the engine
    pub fn as_json(&self) -> Value {
        Value::Object(self.values.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_from_object() {
        let context = RenderContext::from_value(json!({
            "name": "test-project",
            "count": 1234,
        }))
        .unwrap();

        assert_eq!(context.get("name"), Some(&json!("test-project")));
        assert_eq!(context.get("count"), Some(&json!(1234)));
    }

    #[test]
    fn test_context_rejects_non_object() {
        let result = RenderContext::from_value(json!(["not", "a", "map"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_context_set_and_as_json() {
        let mut context = RenderContext::default();
        assert!(context.is_empty());

        context.set("greeting".to_string(), json!("hello"));
        let json = context.as_json();
        assert_eq!(json["greeting"], "hello");
    }
}
