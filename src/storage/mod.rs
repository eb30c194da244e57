pub mod loader;
pub mod writer;

pub use loader::{load_carers, parse_carers, INPUT_COLUMNS};
pub use writer::{write_carers, write_carers_to, DEFAULT_OUTPUT_FILE, OUTPUT_COLUMNS};
