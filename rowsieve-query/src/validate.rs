use crate::spec::{Node, Operator};
use rowsieve_core::{Error, Result};
use serde_json::Value;
use std::collections::HashSet;

/// Maximum tree depth; every logical node and leaf counts one level.
pub const MAX_DEPTH: usize = 12;

/// Maximum number of children under a single `and`/`or`.
pub const MAX_LIST_LEN: usize = 50;

/// Check an untrusted spec tree against the field allow-list, the operator
/// set and the structural limits, without building anything. Reports the
/// first violation found in a depth-first, left-to-right walk.
pub fn validate(spec: &Value, allowed: &HashSet<String>) -> Result<()> {
    Node::from_spec(spec, allowed).map(|_| ())
}

impl Node {
    /// Parse-and-validate an untrusted spec tree. This is the only way to
    /// construct a [`Node`] from external input; a tree that exists has
    /// passed every structural check.
    pub fn from_spec(spec: &Value, allowed: &HashSet<String>) -> Result<Node> {
        parse_node(spec, allowed, 1)
    }
}

fn parse_node(spec: &Value, allowed: &HashSet<String>, depth: usize) -> Result<Node> {
    if depth > MAX_DEPTH {
        return Err(Error::SpecTooDeep {
            depth,
            max: MAX_DEPTH,
        });
    }

    let obj = match spec {
        Value::Object(map) => map,
        other => {
            return Err(Error::InvalidNode(format!(
                "expected an object, got {}",
                json_kind(other)
            )))
        }
    };

    for key in ["and", "or", "not"] {
        if let Some(inner) = obj.get(key) {
            if obj.len() != 1 {
                let extra: Vec<&str> = obj
                    .keys()
                    .map(String::as_str)
                    .filter(|k| *k != key)
                    .collect();
                return Err(Error::UnexpectedKeys(format!(
                    "'{}' node also carries {}",
                    key,
                    extra.join(", ")
                )));
            }
            return parse_logical(key, inner, allowed, depth);
        }
    }

    parse_leaf(obj, allowed)
}

fn parse_logical(
    key: &str,
    inner: &Value,
    allowed: &HashSet<String>,
    depth: usize,
) -> Result<Node> {
    if key == "not" {
        return Ok(Node::Not(Box::new(parse_node(inner, allowed, depth + 1)?)));
    }

    let items = match inner {
        Value::Array(items) => items,
        other => {
            return Err(Error::InvalidNode(format!(
                "'{}' expects a list of nodes, got {}",
                key,
                json_kind(other)
            )))
        }
    };
    if items.len() > MAX_LIST_LEN {
        return Err(Error::ListTooLong {
            len: items.len(),
            max: MAX_LIST_LEN,
        });
    }
    let children = items
        .iter()
        .map(|item| parse_node(item, allowed, depth + 1))
        .collect::<Result<Vec<Node>>>()?;

    Ok(match key {
        "and" => Node::And(children),
        _ => Node::Or(children),
    })
}

fn parse_leaf(obj: &serde_json::Map<String, Value>, allowed: &HashSet<String>) -> Result<Node> {
    let field = match obj.get("field") {
        None => return Err(Error::MissingField),
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(Error::InvalidNode(format!(
                "'field' must be a string, got {}",
                json_kind(other)
            )))
        }
    };
    if !allowed.contains(field) {
        return Err(Error::UnknownField {
            field: field.clone(),
        });
    }

    let op = match obj.get("op") {
        None => return Err(Error::MissingOp),
        Some(Value::String(name)) => Operator::parse(name).ok_or_else(|| Error::UnsupportedOp {
            op: name.clone(),
        })?,
        Some(other) => {
            return Err(Error::InvalidNode(format!(
                "'op' must be a string, got {}",
                json_kind(other)
            )))
        }
    };

    let stray: Vec<&str> = obj
        .keys()
        .map(String::as_str)
        .filter(|k| *k != "field" && *k != "op" && !(*k == "value" && op.requires_value()))
        .collect();
    if !stray.is_empty() {
        return Err(Error::UnexpectedKeys(format!(
            "leaf with op '{}' also carries {}",
            op,
            stray.join(", ")
        )));
    }

    let value = obj.get("value").cloned();
    if op.requires_value() && value.is_none() {
        return Err(Error::MissingValue { op: op.to_string() });
    }

    Ok(Node::Leaf {
        field: field.clone(),
        op,
        value,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
