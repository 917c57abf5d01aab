use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;

/// Leaf comparison operator. Closed set; the validator rejects anything
/// outside it before a spec reaches evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Exists,
    IsNull,
    Eq,
    Ne,
    In,
    Nin,
    Contains,
    StartsWith,
    EndsWith,
    Regex,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Operator {
    pub fn parse(name: &str) -> Option<Operator> {
        match name {
            "exists" => Some(Operator::Exists),
            "isnull" => Some(Operator::IsNull),
            "eq" => Some(Operator::Eq),
            "ne" => Some(Operator::Ne),
            "in" => Some(Operator::In),
            "nin" => Some(Operator::Nin),
            "contains" => Some(Operator::Contains),
            "startswith" => Some(Operator::StartsWith),
            "endswith" => Some(Operator::EndsWith),
            "regex" => Some(Operator::Regex),
            "gt" => Some(Operator::Gt),
            "gte" => Some(Operator::Gte),
            "lt" => Some(Operator::Lt),
            "lte" => Some(Operator::Lte),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Exists => "exists",
            Operator::IsNull => "isnull",
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::In => "in",
            Operator::Nin => "nin",
            Operator::Contains => "contains",
            Operator::StartsWith => "startswith",
            Operator::EndsWith => "endswith",
            Operator::Regex => "regex",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
        }
    }

    /// `exists` and `isnull` are the only operators that take no literal.
    pub fn requires_value(&self) -> bool {
        !matches!(self, Operator::Exists | Operator::IsNull)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated boolean spec tree. Built once per query by
/// [`Node::from_spec`](crate::validate), evaluated against every record,
/// then discarded. Each subtree has exactly one parent, so plain owned
/// recursion is enough.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// True iff every child is true; vacuously true when empty.
    And(Vec<Node>),
    /// True iff any child is true; vacuously false when empty.
    Or(Vec<Node>),
    Not(Box<Node>),
    Leaf {
        field: String,
        op: Operator,
        value: Option<Value>,
    },
}

impl Node {
    /// Render the tree back into the wire grammar
    /// (`{"and": [...]}`, `{"or": [...]}`, `{"not": ...}`, leaf objects).
    pub fn to_spec(&self) -> Value {
        match self {
            Node::And(children) => {
                json!({ "and": children.iter().map(Node::to_spec).collect::<Vec<_>>() })
            }
            Node::Or(children) => {
                json!({ "or": children.iter().map(Node::to_spec).collect::<Vec<_>>() })
            }
            Node::Not(child) => json!({ "not": child.to_spec() }),
            Node::Leaf { field, op, value } => match value {
                Some(v) => json!({ "field": field, "op": op.as_str(), "value": v }),
                None => json!({ "field": field, "op": op.as_str() }),
            },
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_spec().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_round_trip() {
        for name in [
            "exists", "isnull", "eq", "ne", "in", "nin", "contains", "startswith", "endswith",
            "regex", "gt", "gte", "lt", "lte",
        ] {
            let op = Operator::parse(name).unwrap();
            assert_eq!(op.as_str(), name);
        }
        assert_eq!(Operator::parse("between"), None);
    }

    #[test]
    fn test_requires_value() {
        assert!(!Operator::Exists.requires_value());
        assert!(!Operator::IsNull.requires_value());
        assert!(Operator::Eq.requires_value());
        assert!(Operator::Regex.requires_value());
    }

    #[test]
    fn test_to_spec_grammar() {
        let node = Node::And(vec![
            Node::Leaf {
                field: "Cohort".to_string(),
                op: Operator::Eq,
                value: Some(json!("Legacy")),
            },
            Node::Not(Box::new(Node::Leaf {
                field: "Comments".to_string(),
                op: Operator::IsNull,
                value: None,
            })),
        ]);
        assert_eq!(
            node.to_spec(),
            json!({"and": [
                {"field": "Cohort", "op": "eq", "value": "Legacy"},
                {"not": {"field": "Comments", "op": "isnull"}},
            ]})
        );
    }
}
