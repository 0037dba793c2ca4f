//! Cast/gender table reader
//!
//! Turns each data line of the input table into a [`CastRecord`]. The first
//! line is a header and is discarded, blank lines are skipped, and every
//! field is trimmed and stripped of `"` quote characters.

use crate::config::InputConfig;
use crate::error::{CastError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Column holding the movie title
pub const MOVIE_COLUMN: usize = 0;
/// Column holding the performer name
pub const ACTOR_COLUMN: usize = 1;
/// Column holding the character type ("Leading", "Supporting", ...)
pub const CHARACTER_TYPE_COLUMN: usize = 3;
/// Column holding the performer gender
pub const GENDER_COLUMN: usize = 5;

/// One row of the cast table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastRecord {
    pub movie: String,
    pub actor: String,
    /// Empty when the row has no such column
    pub character_type: String,
    /// Empty when the row has no such column
    pub gender: String,
    /// 1-based line number in the source file
    pub line: usize,
}

impl CastRecord {
    pub fn new(movie: &str, actor: &str, character_type: &str, gender: &str) -> Self {
        Self {
            movie: movie.to_string(),
            actor: actor.to_string(),
            character_type: character_type.to_string(),
            gender: gender.to_string(),
            line: 0,
        }
    }

    /// Does this row credit a lead role?
    pub fn is_lead(&self, lead_marker: &str) -> bool {
        self.character_type.contains(lead_marker)
    }

    /// Does this row credit a female lead?
    pub fn is_female_lead(&self, lead_marker: &str, female_marker: &str) -> bool {
        self.is_lead(lead_marker) && self.gender.contains(female_marker)
    }
}

/// Strip quotes and surrounding whitespace from a raw field
fn clean_field(raw: &str) -> String {
    raw.trim().replace('"', "")
}

/// Parse one data line. Returns `None` for rows without a movie and an actor.
pub fn parse_line(line: &str, delimiter: char) -> Option<CastRecord> {
    let fields: Vec<String> = line.split(delimiter).map(clean_field).collect();
    if fields.len() <= ACTOR_COLUMN {
        return None;
    }

    let column = |i: usize| fields.get(i).cloned().unwrap_or_default();

    Some(CastRecord {
        movie: column(MOVIE_COLUMN),
        actor: column(ACTOR_COLUMN),
        character_type: column(CHARACTER_TYPE_COLUMN),
        gender: column(GENDER_COLUMN),
        line: 0,
    })
}

/// Parse a whole table held in memory
pub fn parse_records(text: &str, input: &InputConfig) -> Vec<CastRecord> {
    let skip = usize::from(input.skip_header);
    let mut records = Vec::new();

    for (i, line) in text.lines().enumerate().skip(skip) {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line, input.delimiter) {
            Some(mut record) => {
                record.line = i + 1;
                records.push(record);
            }
            None => warn!("Skipping malformed row at line {}: {:?}", i + 1, line),
        }
    }

    records
}

/// Read and parse a cast table from disk
pub fn read_records(path: &Path, input: &InputConfig) -> Result<Vec<CastRecord>> {
    let text = std::fs::read_to_string(path).map_err(|e| CastError::io(path, e))?;
    let records = parse_records(&text, input);
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
MOVIE,ACTOR,CHARACTER_NAME,TYPE,BILLING,GENDER
\"Up\",\"Ed Asner\",\"Carl\",\"Leading\",\"1\",\"Male\"

\"Up\", \"Elie Docter\" ,\"Ellie\",\"Leading\",\"2\",\"Female\"
";

    #[test]
    fn test_header_skipped_and_quotes_stripped() {
        let records = parse_records(SAMPLE, &InputConfig::default());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].movie, "Up");
        assert_eq!(records[0].actor, "Ed Asner");
        assert_eq!(records[0].character_type, "Leading");
        assert_eq!(records[0].gender, "Male");
    }

    #[test]
    fn test_whitespace_trimmed_and_line_numbers_kept() {
        let records = parse_records(SAMPLE, &InputConfig::default());
        assert_eq!(records[1].actor, "Elie Docter");
        // Blank line 3 is skipped but still counted
        assert_eq!(records[0].line, 2);
        assert_eq!(records[1].line, 4);
    }

    #[test]
    fn test_short_rows() {
        // Two columns is enough for the graph; aggregation columns come back empty
        let record = parse_line("Up,Ed", ',').expect("two-column row");
        assert_eq!(record.character_type, "");
        assert_eq!(record.gender, "");

        assert!(parse_line("just a title", ',').is_none());
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let text = "header\nlonely\nUp,Ed,x,Lead,1,M\n";
        let records = parse_records(text, &InputConfig::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].actor, "Ed");
    }

    #[test]
    fn test_no_header_and_custom_delimiter() {
        let input = InputConfig {
            skip_header: false,
            delimiter: ';',
        };
        let records = parse_records("Up;Ed;x;Lead;1;M\n", &input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].movie, "Up");
    }

    #[test]
    fn test_lead_markers() {
        let lead = CastRecord::new("Up", "Ellie", "Leading", "Female");
        let support = CastRecord::new("Up", "Dug", "Supporting", "Male");
        assert!(lead.is_lead("Lead"));
        assert!(lead.is_female_lead("Lead", "F"));
        assert!(!support.is_lead("Lead"));
        assert!(!support.is_female_lead("Lead", "F"));
    }

    #[test]
    fn test_read_records_missing_file() {
        let err = read_records(Path::new("/definitely/not/here.txt"), &InputConfig::default())
            .unwrap_err();
        assert!(matches!(err, CastError::FileNotFound { .. }));
    }
}
