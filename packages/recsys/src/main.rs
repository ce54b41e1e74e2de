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
//
use log::{error, info};
use recsys_config::{Config, CONFIG};
use recsys_dataset::{load_ratings, save_results};
use recsys_error::RecsysError;
use recsys_report::{Report, Summary, Verbosity};
use std::{env, process, result::Result};

const SUMMARY_FILENAME: &str = "summary.csv";
const USER_GROUPS_FILENAME: &str = "user_groups.csv";
const ITEM_GROUPS_FILENAME: &str = "item_groups.csv";

fn main() {
    let config = CONFIG.clone();
    if config.is_debug {
        env::set_var("RUST_LOG", "recsys=debug");
    } else {
        env::set_var("RUST_LOG", "recsys=info");
    }
    env_logger::try_init().unwrap_or_default();

    info!(
        "{} v{} * {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION")
    );

    if let Err(e) = run(&config) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), RecsysError> {
    info!(
        "Loading {} ratings from {}",
        config.schema, config.dataset_path
    );
    let ratings = load_ratings(&config.dataset_path, config.schema)?;
    if ratings.is_empty() {
        return Err(RecsysError::Other(format!(
            "no ratings found in {} ({} schema)",
            config.dataset_path, config.schema
        )));
    }

    let summary = Summary::from_ratings(&ratings, config.decimals);
    Report::from_summary(&summary, Verbosity::from(config.is_short)).log();

    for (results, filename) in [
        (summary.record(), SUMMARY_FILENAME),
        (summary.user_groups_table(), USER_GROUPS_FILENAME),
        (summary.item_groups_table(), ITEM_GROUPS_FILENAME),
    ] {
        let path = save_results(&results, filename, &config.results_path)?;
        info!("Saved {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recsys_config::Schema;
    use std::fs;
    use tempfile::tempdir;

    fn config_for(dataset_path: &str, results_path: &str) -> Config {
        Config {
            dataset_path: dataset_path.into(),
            results_path: results_path.into(),
            schema: Schema::DigitalMusic,
            decimals: 2,
            is_debug: false,
            is_short: true,
        }
    }

    #[test]
    fn it_saves_every_results_file() {
        let dataset = tempdir().unwrap();
        let results = tempdir().unwrap();
        fs::write(
            dataset.path().join("Digital_Music.csv"),
            "B001,A1,5.0,1390003200\nB002,A1,3.0,1390089600\nB001,A2,4.0,1390176000\n",
        )
        .unwrap();
        let config = config_for(
            dataset.path().to_str().unwrap(),
            results.path().to_str().unwrap(),
        );

        run(&config).unwrap();

        for filename in [SUMMARY_FILENAME, USER_GROUPS_FILENAME, ITEM_GROUPS_FILENAME] {
            assert!(results.path().join(filename).exists());
        }
        let user_groups =
            fs::read_to_string(results.path().join(USER_GROUPS_FILENAME)).unwrap();
        assert!(user_groups.starts_with("user_id,ratings,group\nA1,2,G10\n"));
    }

    #[test]
    fn it_fails_on_an_empty_dataset() {
        let dataset = tempdir().unwrap();
        let results = tempdir().unwrap();
        fs::write(dataset.path().join("Digital_Music.csv"), "").unwrap();
        let config = config_for(
            dataset.path().to_str().unwrap(),
            results.path().to_str().unwrap(),
        );

        let err = run(&config).unwrap_err();
        assert!(matches!(err, RecsysError::Other(_)));
        assert!(!results.path().join(SUMMARY_FILENAME).exists());
    }
}
