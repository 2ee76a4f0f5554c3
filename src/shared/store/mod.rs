mod json_file;
mod json_file_table;
mod memory_table;

pub use json_file::{load_json, save_json, write_atomically, StoreError};
pub use json_file_table::JsonFileTable;
pub use memory_table::{Identified, MemoryTable};
