pub mod ln;

pub use ln::{log_op, LOG_EPSILON};
