mod row_set;
mod sql_value;

pub use row_set::RowSet;
pub use sql_value::SqlValue;
