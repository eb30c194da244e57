pub mod types;

pub use types::{CarerRecord, CarerRecordBuilder, CarerType};
