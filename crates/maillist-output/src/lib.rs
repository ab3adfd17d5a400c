pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::{table_to_string, write_table, write_table_to_writer};
