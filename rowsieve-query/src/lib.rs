pub mod spec;
pub mod validate;
pub mod eval;
pub mod engine;

pub use spec::{Node, Operator};
pub use validate::{validate, MAX_DEPTH, MAX_LIST_LEN};
pub use eval::{eval_condition, matches};
pub use engine::{filter_iter, filter_rows, observed_fields, rows_of};
