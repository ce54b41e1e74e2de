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

use thiserror::Error;

/// Recsys specific error messages
#[derive(Error, Debug)]
pub enum RecsysError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Other error: {0}")]
    Other(String),
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn it_converts_io_errors() {
        let err: RecsysError = io::Error::new(io::ErrorKind::NotFound, "ratings.csv").into();
        assert!(matches!(err, RecsysError::IoError(_)));
        assert_eq!(err.to_string(), "IO error: ratings.csv");
    }

    #[test]
    fn it_displays_other_errors() {
        let err = RecsysError::Other("no ratings found in dataset".into());
        assert_eq!(err.to_string(), "Other error: no ratings found in dataset");
    }
}
