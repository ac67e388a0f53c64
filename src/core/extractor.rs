//! Depth-first field lookup over loosely shaped API JSON.
//!
//! The vacancies API nests the same field at different depths depending on the
//! posting, so fields are located by name rather than by fixed path.

use serde_json::Value;

/// Outcome of a [`lookup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// The key was found with a non-null value.
    Found(&'a Value),
    /// The node was absent, or the key was found holding `null`.
    Null,
    /// The key does not occur anywhere in the searched tree.
    Missing,
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<&'a Value> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Null | Lookup::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing)
    }

    /// Resolves to the found value, or `default` for both `Null` and `Missing`.
    pub fn or(self, default: impl Into<Value>) -> Value {
        match self {
            Lookup::Found(value) => value.clone(),
            Lookup::Null | Lookup::Missing => default.into(),
        }
    }
}

/// Searches `node` for `key`.
///
/// Direct members win. Otherwise members are visited in key order: object
/// members are searched recursively and the first non-`Missing` answer is
/// returned; array members are scanned for the first element object that holds
/// `key` directly.
pub fn lookup<'a>(key: &str, node: impl Into<Option<&'a Value>>) -> Lookup<'a> {
    match node.into() {
        None => Lookup::Null,
        Some(node) => search(key, node),
    }
}

/// [`lookup`] with the fallback applied.
pub fn lookup_or<'a>(
    key: &str,
    node: impl Into<Option<&'a Value>>,
    default: impl Into<Value>,
) -> Value {
    let result = lookup(key, node);
    match result {
        Lookup::Found(_) => {}
        Lookup::Null => tracing::trace!("'{}' is null, using default", key),
        Lookup::Missing => tracing::trace!("'{}' not found, using default", key),
    }
    result.or(default)
}

fn search<'a>(key: &str, node: &'a Value) -> Lookup<'a> {
    let map = match node {
        Value::Object(map) => map,
        Value::Null => return Lookup::Null,
        _ => return Lookup::Missing,
    };

    if let Some(value) = map.get(key) {
        return if value.is_null() {
            Lookup::Null
        } else {
            Lookup::Found(value)
        };
    }

    for value in map.values() {
        match value {
            Value::Object(_) => {
                let result = search(key, value);
                if !result.is_missing() {
                    return result;
                }
            }
            Value::Array(items) => {
                let holder = items
                    .iter()
                    .find(|item| item.as_object().is_some_and(|obj| obj.contains_key(key)));
                if let Some(item) = holder {
                    return search(key, item);
                }
            }
            _ => {}
        }
    }

    Lookup::Missing
}
