//! Parameter sources
//!
//! A run's parameters come from exactly one of two places: the table in the
//! body of a triggering issue, or the action's direct inputs.

mod inputs;
mod table;

pub use inputs::{parse_bool_input, DirectInputs, ResolvedInputs};
pub use table::{params_from_issue_body, parse_table_rows};
