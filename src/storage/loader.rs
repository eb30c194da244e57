use crate::carer::CarerRecord;
use crate::error::{RatingError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns every input roster must carry, in their conventional order.
pub const INPUT_COLUMNS: [&str; 11] = [
    "id",
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

/// Load every carer from a CSV roster.
///
/// Fails on the first malformed row; nothing is returned from a partially
/// valid file.
pub fn load_carers(path: &Path) -> Result<Vec<CarerRecord>> {
    let file = File::open(path).map_err(|err| RatingError::io(path, err))?;
    let carers = read_carers(file, path)?;
    tracing::debug!(count = carers.len(), path = %path.display(), "loaded carers");
    Ok(carers)
}

/// Parse carers from any reader holding CSV with a header row.
pub fn parse_carers<R: Read>(reader: R) -> Result<Vec<CarerRecord>> {
    read_carers(reader, Path::new("<input>"))
}

fn read_carers<R: Read>(reader: R, source: &Path) -> Result<Vec<CarerRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| from_csv_error(err, source))?;
    let missing: Vec<&str> = INPUT_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(RatingError::MalformedInput {
            line: 1,
            message: format!("missing column(s): {}", missing.join(", ")),
        });
    }

    let mut carers = Vec::new();
    for record in csv_reader.deserialize::<CarerRecord>() {
        carers.push(record.map_err(|err| from_csv_error(err, source))?);
    }
    Ok(carers)
}

fn from_csv_error(err: csv::Error, source: &Path) -> RatingError {
    let line = err.position().map(|pos| pos.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(io) => RatingError::io(source, io),
        csv::ErrorKind::Deserialize { err, .. } => RatingError::MalformedInput {
            line,
            message: err.to_string(),
        },
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => RatingError::MalformedInput {
            line,
            message: format!("expected {} fields, found {}", expected_len, len),
        },
        csv::ErrorKind::Utf8 { err, .. } => RatingError::MalformedInput {
            line,
            message: err.to_string(),
        },
        other => RatingError::MalformedInput {
            line,
            message: format!("{:?}", other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    const HEADER: &str = "id,first_name,last_name,type,num_reviews,avg_review,img_problems,num_previous_clients,days_since_login,age,years_experience";

    fn roster(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out.push('\n');
        out
    }

    #[test]
    fn test_parse_typed_fields() {
        let data = roster(&["1,Ann,Lee,expert,10,4.0,0,2,5,40,8"]);
        let carers = parse_carers(data.as_bytes()).unwrap();
        assert_eq!(carers.len(), 1);

        let ann = &carers[0];
        assert_eq!(ann.id, "1");
        assert_eq!(ann.first_name, "Ann");
        assert_eq!(ann.last_name, "Lee");
        assert_eq!(ann.carer_type, "expert");
        assert_eq!(ann.num_reviews, 10);
        assert_eq!(ann.avg_review, 4.0);
        assert_eq!(ann.img_problems, 0);
        assert_eq!(ann.num_previous_clients, 2);
        assert_eq!(ann.days_since_login, 5);
        assert_eq!(ann.age, 40);
        assert_eq!(ann.years_experience, 8);
    }

    #[test]
    fn test_header_only_is_empty_batch() {
        let carers = parse_carers(roster(&[]).as_bytes()).unwrap();
        assert!(carers.is_empty());
    }

    #[test]
    fn test_numeric_cells_tolerate_whitespace() {
        let data = roster(&["1,Ann,Lee,advanced, 10 , 4.5 ,1,2,5,40, 8"]);
        let carers = parse_carers(data.as_bytes()).unwrap();
        assert_eq!(carers[0].num_reviews, 10);
        assert_eq!(carers[0].avg_review, 4.5);
        assert_eq!(carers[0].years_experience, 8);
    }

    #[test]
    fn test_text_cells_kept_verbatim() {
        let data = roster(&["1, Ann,Lee,Expert ,10,4.0,0,2,5,40,8"]);
        let carers = parse_carers(data.as_bytes()).unwrap();
        assert_eq!(carers[0].first_name, " Ann");
        assert_eq!(carers[0].carer_type, "Expert ");
    }

    #[test]
    fn test_columns_matched_by_name() {
        let data = "years_experience,id,first_name,last_name,type,num_reviews,avg_review,img_problems,num_previous_clients,days_since_login,age,notes\n\
                    3,9,Bo,Ray,advanced,1,2.5,0,0,1,51,ignored\n";
        let carers = parse_carers(data.as_bytes()).unwrap();
        assert_eq!(carers[0].id, "9");
        assert_eq!(carers[0].years_experience, 3);
        assert_eq!(carers[0].age, 51);
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let data = "id,first_name,last_name,num_reviews,avg_review,img_problems,num_previous_clients,days_since_login,age,years_experience\n\
                    1,Ann,Lee,10,4.0,0,2,5,40,8\n";
        let err = parse_carers(data.as_bytes()).unwrap_err();
        match err {
            RatingError::MalformedInput { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("type"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_file_is_malformed() {
        let err = parse_carers("".as_bytes()).unwrap_err();
        assert!(matches!(err, RatingError::MalformedInput { .. }));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let data = roster(&["1,Ann,Lee,expert,10,4.0,0,2,5,40,8", "2,Bob,Ng,expert,10"]);
        let err = parse_carers(data.as_bytes()).unwrap_err();
        match err {
            RatingError::MalformedInput { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_surplus_trailing_cell_loads() {
        let data = roster(&[
            "1,Ann,Lee,expert,10,4.0,0,2,5,40,8,",
            "2,Bob,Ng,advanced,3,3.5,0,0,1,29,2",
        ]);
        let carers = parse_carers(data.as_bytes()).unwrap();
        assert_eq!(carers.len(), 2);
        assert_eq!(carers[0].years_experience, 8);
        assert_eq!(carers[1].id, "2");
    }

    #[test]
    fn test_negative_unscored_count_loads() {
        let data = roster(&["1,Ann,Lee,expert,-1,4.0,0,2,5,40,8"]);
        let carers = parse_carers(data.as_bytes()).unwrap();
        assert_eq!(carers[0].num_reviews, -1);
    }

    #[test]
    fn test_unparsable_number_is_malformed() {
        let data = roster(&["1,Ann,Lee,expert,ten,4.0,0,2,5,40,8"]);
        let err = parse_carers(data.as_bytes()).unwrap_err();
        match err {
            RatingError::MalformedInput { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_previous_clients_is_malformed() {
        let data = roster(&["1,Ann,Lee,expert,10,4.0,0,-2,5,40,8"]);
        assert!(matches!(
            parse_carers(data.as_bytes()),
            Err(RatingError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_out_of_range_img_problems_loads() {
        let data = roster(&["1,Ann,Lee,expert,10,4.0,12,2,5,40,8"]);
        let carers = parse_carers(data.as_bytes()).unwrap();
        assert_eq!(carers[0].img_problems, 12);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = env::temp_dir().join("carer_rank_test_does_not_exist.csv");
        let _ = std::fs::remove_file(&path);
        let err = load_carers(&path).unwrap_err();
        assert!(matches!(err, RatingError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join("carer_rank_test_load.csv");
        std::fs::write(&path, roster(&["1,Ann,Lee,expert,10,4.0,0,2,5,40,8"])).unwrap();

        let carers = load_carers(&path).unwrap();
        assert_eq!(carers.len(), 1);

        let _ = std::fs::remove_file(&path);
    }
}
