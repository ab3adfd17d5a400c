pub mod error;
pub mod schema;
pub mod table;

pub use error::{Result, TableError};
pub use table::{CellValue, Record, Table};
