pub mod carer;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod storage;
pub mod telemetry;

pub use carer::{CarerRecord, CarerType};
pub use error::RatingError;
pub use pipeline::{rank_file, rank_roster};
