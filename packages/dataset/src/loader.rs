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

use crate::results::Table;
use csv::{ReaderBuilder, Trim};
use log::debug;
use recsys_config::Schema;
use recsys_error::RecsysError;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;

pub const DIGITAL_MUSIC_FILENAME: &str = "Digital_Music.csv";
pub const BOOK_RATINGS_FILENAME: &str = "ratings.csv";
pub const BOOKS_FILENAME: &str = "books.csv";

/// A single user rating of an item, independent of the file layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub user_id: String,
    pub item_id: String,
    pub rating: f64,
    pub timestamp: Option<i64>,
}

// Headerless, read by position
#[derive(Debug, Deserialize)]
struct DigitalMusicRecord {
    item_id: String,
    user_id: String,
    rating: f64,
    timestamp: Option<i64>,
}

impl From<DigitalMusicRecord> for Rating {
    fn from(r: DigitalMusicRecord) -> Rating {
        Rating {
            user_id: r.user_id,
            item_id: r.item_id,
            rating: r.rating,
            timestamp: r.timestamp,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BookRatingRecord {
    user_id: String,
    book_id: String,
    rating: f64,
}

impl From<BookRatingRecord> for Rating {
    fn from(r: BookRatingRecord) -> Rating {
        Rating {
            user_id: r.user_id,
            item_id: r.book_id,
            rating: r.rating,
            timestamp: None,
        }
    }
}

fn open(path: &Path) -> Result<File, RecsysError> {
    File::open(path).map_err(|e| {
        RecsysError::IoError(io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}

fn dataset_dir(dataset_path: &Path) -> Result<&Path, RecsysError> {
    if !dataset_path.is_dir() {
        return Err(RecsysError::ConfigError(format!(
            "dataset path {} is not a directory",
            dataset_path.display()
        )));
    }
    Ok(dataset_path)
}

/// Loads every rating of the dataset found under `dataset_path`.
///
/// The file name and column layout are fixed by `schema`.
pub fn load_ratings(
    dataset_path: impl AsRef<Path>,
    schema: Schema,
) -> Result<Vec<Rating>, RecsysError> {
    let dataset_path = dataset_dir(dataset_path.as_ref())?;
    let ratings: Vec<Rating> = match schema {
        Schema::DigitalMusic => {
            let path = dataset_path.join(DIGITAL_MUSIC_FILENAME);
            let mut reader = ReaderBuilder::new()
                .has_headers(false)
                .trim(Trim::All)
                .from_reader(open(&path)?);
            reader
                .deserialize::<DigitalMusicRecord>()
                .map(|r| r.map(Rating::from))
                .collect::<Result<_, _>>()?
        }
        Schema::Books => {
            let path = dataset_path.join(BOOK_RATINGS_FILENAME);
            let mut reader = ReaderBuilder::new()
                .has_headers(true)
                .trim(Trim::All)
                .from_reader(open(&path)?);
            reader
                .deserialize::<BookRatingRecord>()
                .map(|r| r.map(Rating::from))
                .collect::<Result<_, _>>()?
        }
    };
    debug!("Loaded {} ratings ({} schema)", ratings.len(), schema);
    Ok(ratings)
}

/// Loads `books.csv` as-is; its columns are not interpreted.
pub fn load_books(dataset_path: impl AsRef<Path>) -> Result<Table, RecsysError> {
    let path = dataset_dir(dataset_path.as_ref())?.join(BOOKS_FILENAME);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(open(&path)?);

    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    debug!("Loaded {} books", rows.len());
    Ok(Table { headers, rows })
}

pub fn ratings(data: &[Rating]) -> Vec<f64> {
    data.iter().map(|r| r.rating).collect()
}

pub fn user_ids(data: &[Rating]) -> Vec<String> {
    data.iter().map(|r| r.user_id.clone()).collect()
}

pub fn item_ids(data: &[Rating]) -> Vec<String> {
    data.iter().map(|r| r.item_id.clone()).collect()
}

pub fn timestamps(data: &[Rating]) -> Vec<i64> {
    data.iter().filter_map(|r| r.timestamp).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_digital_music_ratings() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DIGITAL_MUSIC_FILENAME),
            "B001,A1,5.0,1390003200\nB002,A1,3.0,1390089600\nB001,A2,4.0,1390176000\n",
        )
        .unwrap();

        let data = load_ratings(dir.path(), Schema::DigitalMusic).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(
            data[0],
            Rating {
                user_id: "A1".into(),
                item_id: "B001".into(),
                rating: 5.0,
                timestamp: Some(1390003200),
            }
        );
        assert_eq!(ratings(&data), vec![5.0, 3.0, 4.0]);
        assert_eq!(user_ids(&data), vec!["A1", "A1", "A2"]);
        assert_eq!(item_ids(&data), vec!["B001", "B002", "B001"]);
        assert_eq!(timestamps(&data).len(), 3);
    }

    #[test]
    fn load_book_ratings_with_header() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(BOOK_RATINGS_FILENAME),
            "user_id,book_id,rating\n1, 258 ,5\n2,4081,4\n",
        )
        .unwrap();

        let data = load_ratings(dir.path(), Schema::Books).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].item_id, "258");
        assert_eq!(data[1].rating, 4.0);
        assert_eq!(data[1].timestamp, None);
        assert!(timestamps(&data).is_empty());
    }

    #[test]
    fn missing_dataset_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = load_ratings(dir.path(), Schema::DigitalMusic).unwrap_err();
        match err {
            RecsysError::IoError(e) => {
                assert_eq!(e.kind(), io::ErrorKind::NotFound);
                assert!(e.to_string().contains(DIGITAL_MUSIC_FILENAME));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn dataset_path_must_be_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join(DIGITAL_MUSIC_FILENAME);
        fs::write(&file, "").unwrap();
        let err = load_ratings(&file, Schema::DigitalMusic).unwrap_err();
        assert!(matches!(err, RecsysError::ConfigError(_)));
        assert!(matches!(load_books(&file), Err(RecsysError::ConfigError(_))));
    }

    #[test]
    fn malformed_rating_is_a_csv_error() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DIGITAL_MUSIC_FILENAME),
            "B001,A1,five,1390003200\n",
        )
        .unwrap();
        let err = load_ratings(dir.path(), Schema::DigitalMusic).unwrap_err();
        assert!(matches!(err, RecsysError::CsvError(_)));
    }

    #[test]
    fn load_books_table() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(BOOKS_FILENAME),
            "book_id,title,authors\n1,The Hunger Games,Suzanne Collins\n2,\"Harry Potter, Vol. 1\",J.K. Rowling\n",
        )
        .unwrap();

        let books = load_books(dir.path()).unwrap();
        assert_eq!(books.headers, vec!["book_id", "title", "authors"]);
        assert_eq!(books.rows.len(), 2);
        assert_eq!(books.rows[1][1], "Harry Potter, Vol. 1");
    }
}
