use crate::spec::{Node, Operator};
use regex::RegexBuilder;
use rowsieve_core::{coerce_number, resolve, text_equal};
use serde_json::Value;

/// Evaluate a validated spec tree against one record. Pure and total:
/// malformed field values degrade to `false` for the affected condition,
/// never to an error.
pub fn matches(record: &Value, node: &Node) -> bool {
    match node {
        Node::And(children) => children.iter().all(|child| matches(record, child)),
        Node::Or(children) => children.iter().any(|child| matches(record, child)),
        Node::Not(child) => !matches(record, child),
        Node::Leaf { field, op, value } => {
            eval_condition(resolve(record, field), *op, value.as_ref())
        }
    }
}

/// Apply one operator to one resolved field value. An unresolved field and
/// an explicit JSON `null` are both treated as "no value".
pub fn eval_condition(value: Option<&Value>, op: Operator, expected: Option<&Value>) -> bool {
    let value = match value {
        Some(v) if !v.is_null() => Some(v),
        _ => None,
    };

    match op {
        Operator::Exists => return value.is_some(),
        Operator::IsNull => return value.is_none(),
        _ => {}
    }

    // The validator guarantees every remaining operator carries a literal;
    // reaching this point without one means it was bypassed.
    let expected = match expected {
        Some(e) => e,
        None => unreachable!("operator '{}' evaluated without a literal; spec was not validated", op),
    };
    let value_or_null = value.unwrap_or(&Value::Null);

    match op {
        Operator::Eq => text_equal(value_or_null, expected),
        Operator::Ne => !text_equal(value_or_null, expected),
        Operator::In => in_list(value_or_null, expected),
        Operator::Nin => match expected {
            // "not in an invalid set" is vacuously true.
            Value::Array(_) => !in_list(value_or_null, expected),
            _ => true,
        },
        Operator::Contains | Operator::StartsWith | Operator::EndsWith => {
            let Some(v) = value else { return false };
            let subject = display_text(v).to_lowercase();
            let probe = display_text(expected).to_lowercase();
            match op {
                Operator::Contains => subject.contains(&probe),
                Operator::StartsWith => subject.starts_with(&probe),
                _ => subject.ends_with(&probe),
            }
        }
        Operator::Regex => {
            let Some(v) = value else { return false };
            match RegexBuilder::new(&display_text(expected))
                .case_insensitive(true)
                .build()
            {
                Ok(re) => re.is_match(&display_text(v)),
                Err(_) => false,
            }
        }
        Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte => {
            match (coerce_number(value_or_null), coerce_number(expected)) {
                (Some(a), Some(b)) => match op {
                    Operator::Gt => a > b,
                    Operator::Gte => a >= b,
                    Operator::Lt => a < b,
                    _ => a <= b,
                },
                _ => false,
            }
        }
        Operator::Exists | Operator::IsNull => unreachable!(),
    }
}

fn in_list(value: &Value, expected: &Value) -> bool {
    let Value::Array(items) = expected else {
        return false;
    };
    if value.is_string() {
        items.iter().any(|item| text_equal(value, item))
    } else {
        items.iter().any(|item| item == value)
    }
}

/// Textual form used by the string operators. Strings pass through
/// unquoted, a null literal becomes the empty string (so a `contains` or
/// `regex` probe of null matches every present value), and everything
/// else renders as its JSON text.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
