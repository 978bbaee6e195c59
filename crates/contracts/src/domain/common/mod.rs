pub mod lenient;
pub mod text;

pub use text::{is_set, js_round, leading_integer, parse_number_lossy};
