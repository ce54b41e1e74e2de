// The MIT License (MIT)
// Copyright © 2026 AIE425 Assignment Group X
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use csv::Writer;
use log::debug;
use recsys_error::RecsysError;
use std::fs;
use std::path::{Path, PathBuf};

/// Rows of string cells under a header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Anything that can be written to the results directory.
#[derive(Debug, Clone, PartialEq)]
pub enum Results {
    /// Written with its header row followed by every row
    Table(Table),
    /// Keys become the header row, values a single data row
    Record(Vec<(String, String)>),
    /// A single `value` column
    Array(Vec<f64>),
}

impl From<Table> for Results {
    fn from(table: Table) -> Results {
        Results::Table(table)
    }
}

impl From<Vec<f64>> for Results {
    fn from(values: Vec<f64>) -> Results {
        Results::Array(values)
    }
}

/// Writes `data` as delimited text into `results_path/filename` and returns
/// the full path of the written file. The directory is created if missing.
pub fn save_results(
    data: &Results,
    filename: &str,
    results_path: impl AsRef<Path>,
) -> Result<PathBuf, RecsysError> {
    let results_path = results_path.as_ref();
    fs::create_dir_all(results_path)?;
    let filepath = results_path.join(filename);

    let mut writer = Writer::from_path(&filepath)?;
    match data {
        Results::Table(table) => {
            writer.write_record(&table.headers)?;
            for row in &table.rows {
                writer.write_record(row)?;
            }
        }
        Results::Record(fields) => {
            writer.write_record(fields.iter().map(|(key, _)| key))?;
            writer.write_record(fields.iter().map(|(_, value)| value))?;
        }
        Results::Array(values) => {
            writer.write_record(["value"])?;
            for value in values {
                writer.write_record([value.to_string()])?;
            }
        }
    }
    writer.flush()?;

    debug!("Results saved to {}", filepath.display());
    Ok(filepath)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_table_with_header() {
        let dir = tempdir().unwrap();
        let table = Table {
            headers: vec!["user_id".into(), "ratings".into()],
            rows: vec![
                vec!["A1".into(), "2".into()],
                vec!["A2".into(), "1".into()],
            ],
        };
        let path = save_results(&table.into(), "counts.csv", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("counts.csv"));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "user_id,ratings\nA1,2\nA2,1\n"
        );
    }

    #[test]
    fn save_record_as_single_row() {
        let dir = tempdir().unwrap();
        let record = Results::Record(vec![
            ("mean".into(), "3.5".into()),
            ("sparsity".into(), "99.1".into()),
        ]);
        let path = save_results(&record, "summary.csv", dir.path()).unwrap();
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "mean,sparsity\n3.5,99.1\n"
        );
    }

    #[test]
    fn save_array_as_single_column() {
        let dir = tempdir().unwrap();
        let path = save_results(&vec![1.5, 2.0].into(), "values.csv", dir.path()).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "value\n1.5\n2\n");
    }

    #[test]
    fn create_missing_results_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("results").join("task1");
        let path = save_results(&Results::Array(vec![]), "empty.csv", &nested).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(path).unwrap(), "value\n");
    }
}
