pub mod row;
pub mod source;

pub use row::{ControlRow, Group, COLUMNS, COLUMN_COUNT};
pub use source::ControlSource;
