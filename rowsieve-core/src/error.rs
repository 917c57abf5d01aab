use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid spec node: {0}")]
    InvalidNode(String),

    #[error("Unexpected keys on spec node: {0}")]
    UnexpectedKeys(String),

    #[error("Leaf condition is missing 'field'")]
    MissingField,

    #[error("Leaf condition is missing 'op'")]
    MissingOp,

    #[error("Operator '{op}' requires a 'value'")]
    MissingValue { op: String },

    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Unsupported operator: {op}")]
    UnsupportedOp { op: String },

    #[error("Spec tree too deep: depth {depth} exceeds limit of {max}")]
    SpecTooDeep { depth: usize, max: usize },

    #[error("Child list too long: {len} entries exceeds limit of {max}")]
    ListTooLong { len: usize, max: usize },

    #[error("Malformed data document: {0}")]
    Document(String),
}

pub type Result<T> = std::result::Result<T, Error>;
