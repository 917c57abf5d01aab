use serde_json::Value;

/// Dot-path lookup inside a record.
///
/// `resolve(record, "meta.paginator.current_page")` walks nested objects
/// segment by segment. Flat names (no dot) are the common case and resolve
/// directly. Returns `None` when any intermediate value is missing or not
/// an object; an explicit JSON `null` still resolves to `Some(Null)`.
pub fn resolve<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let mut current = record;
    for segment in path.split('.') {
        match current {
            Value::Object(map) => current = map.get(segment)?,
            _ => return None,
        }
    }
    Some(current)
}
