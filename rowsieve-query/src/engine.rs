use crate::eval::matches;
use crate::spec::Node;
use rowsieve_core::{Error, Result};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Apply a validated spec tree to a record collection. Single ordered pass;
/// the result is an order-preserving subsequence of the input. Non-object
/// elements never match and never error.
pub fn filter_rows(records: &[Value], node: &Node) -> Vec<Value> {
    let kept: Vec<Value> = filter_iter(records, node).cloned().collect();
    debug!(total = records.len(), kept = kept.len(), "filtered record collection");
    kept
}

/// Streaming form of [`filter_rows`]: works over any lazily-produced
/// sequence of records without materializing the collection.
pub fn filter_iter<'a, I>(records: I, node: &'a Node) -> impl Iterator<Item = &'a Value> + 'a
where
    I: IntoIterator<Item = &'a Value>,
    I::IntoIter: 'a,
{
    records
        .into_iter()
        .filter(move |record| record.is_object() && matches(record, node))
}

/// Union of top-level keys across the object-typed records of a collection.
/// Callers derive the field allow-list for a dataset snapshot this way.
pub fn observed_fields(records: &[Value]) -> HashSet<String> {
    let mut fields = HashSet::new();
    for record in records {
        if let Value::Object(map) = record {
            for key in map.keys() {
                fields.insert(key.clone());
            }
        }
    }
    fields
}

/// Extract the row collection from a preview data document of the form
/// `{"rows_as_objects": [...]}`. A missing key yields an empty collection;
/// a present key of any other type is a malformed document.
pub fn rows_of(data: &Value) -> Result<&[Value]> {
    match data.get("rows_as_objects") {
        None => Ok(&[]),
        Some(Value::Array(rows)) => Ok(rows.as_slice()),
        Some(other) => Err(Error::Document(format!(
            "expected 'rows_as_objects' to be an array, got {}",
            match other {
                Value::Null => "null",
                Value::Bool(_) => "a boolean",
                Value::Number(_) => "a number",
                Value::String(_) => "a string",
                Value::Object(_) => "an object",
                Value::Array(_) => "an array",
            }
        ))),
    }
}
