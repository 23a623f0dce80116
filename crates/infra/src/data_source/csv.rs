//! Delimited-file data source.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use halflife_core::SkillRecord;

use super::{DataSource, LoadError};

/// Reads skill records from a CSV file with a header row.
///
/// Columns are matched by header name; extra columns are ignored and
/// missing required columns fail the load.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse records from any reader (used by `load`, handy for tests).
    pub fn read_records<R: Read>(reader: R, delimiter: u8) -> Result<Vec<SkillRecord>, LoadError> {
        let mut rdr = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .trim(::csv::Trim::All)
            .from_reader(reader);

        let headers: HashSet<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let missing: Vec<String> = SkillRecord::COLUMNS
            .iter()
            .filter(|c| !headers.contains(**c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        rdr.deserialize::<SkillRecord>()
            .map(|row| row.map_err(LoadError::from))
            .collect()
    }
}

impl DataSource for CsvDataSource {
    fn load(&self) -> Result<Vec<SkillRecord>, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        Self::read_records(file, self.delimiter)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "skill_category,industry,ai_exposure_level,automation_risk,skill_half_life_years,reskilling_frequency_years,current_market_demand";

    #[test]
    fn reads_rows_by_header_name() {
        let data = format!("{HEADER}\nTech,Finance,85,60,2,1.5,90\nCreative,Media,20,10,8,4,55\n");
        let rows = CsvDataSource::read_records(data.as_bytes(), b',').unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].skill_category, "Tech");
        assert_eq!(rows[0].reskilling_frequency_years, 1.5);
        assert_eq!(rows[1].industry, "Media");
        assert_eq!(rows[1].skill_half_life_years, 8.0);
    }

    #[test]
    fn extra_columns_and_reordering_are_tolerated() {
        let data = "skill_name,industry,skill_category,current_market_demand,automation_risk,ai_exposure_level,reskilling_frequency_years,skill_half_life_years\n\
                    Prompting,Finance,Tech,90,60,85,1.5,2\n";
        let rows = CsvDataSource::read_records(data.as_bytes(), b',').unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ai_exposure_level, 85.0);
        assert_eq!(rows[0].current_market_demand, 90.0);
    }

    #[test]
    fn missing_columns_are_listed() {
        let data = "skill_category,industry,ai_exposure_level\nTech,Finance,85\n";
        let err = CsvDataSource::read_records(data.as_bytes(), b',').unwrap_err();

        match err {
            LoadError::MissingColumns(cols) => {
                assert_eq!(cols.len(), 4);
                assert!(cols.contains(&"automation_risk".to_string()));
                assert!(cols.contains(&"current_market_demand".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_value_is_a_csv_error() {
        let data = format!("{HEADER}\nTech,Finance,high,60,2,1.5,90\n");
        let err = CsvDataSource::read_records(data.as_bytes(), b',').unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn semicolon_delimited_files_load_with_custom_delimiter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER.replace(',', ";")).unwrap();
        writeln!(file, "Tech;Finance;85;60;2;1.5;90").unwrap();

        let source = CsvDataSource::new(file.path()).with_delimiter(b';');
        let rows = source.load().unwrap();
        assert_eq!(rows.len(), 1);
        assert!(source.describe().starts_with("csv:"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvDataSource::new(dir.path().join("nope.csv"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
