use crate::carer::CarerRecord;
use crate::error::{RatingError, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Default output file name for a ranked roster
pub const DEFAULT_OUTPUT_FILE: &str = "sorted_carers.csv";

/// Output header. `id` is intentionally absent.
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "first_name",
    "last_name",
    "type",
    "num_reviews",
    "avg_review",
    "img_problems",
    "num_previous_clients",
    "days_since_login",
    "age",
    "years_experience",
];

#[derive(Serialize)]
struct OutputRow<'a> {
    first_name: &'a str,
    last_name: &'a str,
    carer_type: &'a str,
    num_reviews: i64,
    avg_review: f64,
    img_problems: i64,
    num_previous_clients: u32,
    days_since_login: i64,
    age: i64,
    years_experience: i64,
}

impl<'a> From<&'a CarerRecord> for OutputRow<'a> {
    fn from(carer: &'a CarerRecord) -> Self {
        Self {
            first_name: &carer.first_name,
            last_name: &carer.last_name,
            carer_type: &carer.carer_type,
            num_reviews: carer.num_reviews,
            avg_review: carer.avg_review,
            img_problems: carer.img_problems,
            num_previous_clients: carer.num_previous_clients,
            days_since_login: carer.days_since_login,
            age: carer.age,
            years_experience: carer.years_experience,
        }
    }
}

/// Write carers, in the given order, to a CSV file atomically.
///
/// The target is only replaced once every row has been written, so a failure
/// leaves any previous file untouched.
pub fn write_carers(path: &Path, carers: &[CarerRecord]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path).map_err(|err| RatingError::io(path, err))?;

    write_carers_to(&mut file, carers).map_err(|err| match err {
        RatingError::Io { source, .. } => RatingError::io(path, source),
        other => other,
    })?;

    file.commit().map_err(|err| RatingError::io(path, err))?;
    tracing::debug!(count = carers.len(), path = %path.display(), "wrote ranked carers");
    Ok(())
}

/// Write the header and one row per carer to `writer`.
pub fn write_carers_to<W: Write>(writer: W, carers: &[CarerRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(OUTPUT_COLUMNS)
        .map_err(into_rating_error)?;
    for carer in carers {
        csv_writer
            .serialize(OutputRow::from(carer))
            .map_err(into_rating_error)?;
    }
    csv_writer
        .flush()
        .map_err(|err| RatingError::io("<output>", err))
}

fn into_rating_error(err: csv::Error) -> RatingError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => RatingError::io("<output>", io),
        other => RatingError::io(
            "<output>",
            std::io::Error::new(std::io::ErrorKind::InvalidData, format!("{:?}", other)),
        ),
    }
}
