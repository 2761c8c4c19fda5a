use gray_matter::{Matter, engine::YAML};
use serde_json::{Map, Value};
use tracing::debug;

/// Key/value fields from the top of a post.
pub type Metadata = Map<String, Value>;

/// A source file split into its metadata block and markdown body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrontMatter {
    pub data: Metadata,
    pub body: String,
}

impl From<&str> for FrontMatter {
    /// Never fails: a missing or malformed block leaves `data` empty and the
    /// whole input as `body`.
    fn from(value: &str) -> Self {
        let matter = Matter::<YAML>::new();
        match matter.parse::<Value>(value) {
            Ok(parsed) => match parsed.data {
                Some(Value::Object(data)) => Self {
                    data,
                    body: parsed.content,
                },
                Some(Value::Null) => Self {
                    data: Metadata::new(),
                    body: parsed.content,
                },
                None => Self::body_only(value),
                Some(other) => {
                    debug!("front matter is not a mapping: {other}");
                    Self::body_only(value)
                }
            },
            Err(e) => {
                debug!("unreadable front matter: {e}");
                Self::body_only(value)
            }
        }
    }
}

impl FrontMatter {
    fn body_only(raw: &str) -> Self {
        Self {
            data: Metadata::new(),
            body: raw.to_string(),
        }
    }

    /// The field as display text, if it holds a non-empty scalar.
    pub fn text(&self, key: &str) -> Option<String> {
        self.data.get(key).and_then(field_text)
    }
}

/// Scalar metadata rendered as text. Empty strings, nulls and containers
/// yield `None`.
pub fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Whether a field counts as present for validation: set to something other
/// than null or the empty string.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests;
