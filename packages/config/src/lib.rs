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

// Load environment variables into a Config struct
//
// Envy is a library for deserializing environment variables into
// typesafe structs
//
// Dotenv loads environment variables from a .env file, if available,
// and mashes those with the actual environment variables provided by
// the operative system.
//
// Set Config struct into a CONFIG lazy_static to avoid multiple processing.
//
use clap::{App, Arg, ArgMatches};
use lazy_static::lazy_static;
use log::info;
use serde::Deserialize;
use std::env;

// Set Config struct into a CONFIG lazy_static to avoid multiple processing
lazy_static! {
    pub static ref CONFIG: Config = get_config();
}

/// provides default value for dataset_path if RECSYS_DATASET_PATH env var is not set
fn default_dataset_path() -> String {
    "dataset".into()
}

/// provides default value for results_path if RECSYS_RESULTS_PATH env var is not set
fn default_results_path() -> String {
    "results".into()
}

/// provides default value for decimals if RECSYS_DECIMALS env var is not set
fn default_decimals() -> u32 {
    2
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    #[serde(default = "default_results_path")]
    pub results_path: String,
    #[serde(default)]
    pub schema: Schema,
    #[serde(default = "default_decimals")]
    pub decimals: u32,
    #[serde(default)]
    pub is_debug: bool,
    #[serde(default)]
    pub is_short: bool,
}

/// Layout of the ratings file found under the dataset path.
#[derive(Default, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum Schema {
    /// `Digital_Music.csv`, headerless `item_id,user_id,rating,timestamp`
    #[default]
    DigitalMusic,
    /// `ratings.csv` with a `user_id,book_id,rating` header
    Books,
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DigitalMusic => write!(f, "digital-music"),
            Self::Books => write!(f, "books"),
        }
    }
}

fn cli<'a, 'b>() -> App<'a, 'b> {
    App::new(env!("CARGO_PKG_NAME"))
    .version(env!("CARGO_PKG_VERSION"))
    .author(env!("CARGO_PKG_AUTHORS"))
    .about(env!("CARGO_PKG_DESCRIPTION"))
    .arg(
      Arg::with_name("SCHEMA")
          .index(1)
          .possible_values(&["digital-music", "books"])
          .takes_value(true)
          .help(
            "Sets the ratings dataset layout 'recsys' will try to load. [default: digital-music]",
          )
    )
    .arg(
      Arg::with_name("dataset-path")
        .short("d")
        .long("dataset-path")
        .takes_value(true)
        .value_name("DIR")
        .help(
          "Directory containing the dataset files (e.g. Digital_Music.csv, ratings.csv, books.csv). [default: dataset]",
        ))
    .arg(
      Arg::with_name("results-path")
        .short("r")
        .long("results-path")
        .takes_value(true)
        .value_name("DIR")
        .help(
          "Directory where computed results are saved. It is created if missing. [default: results]",
        ))
    .arg(
      Arg::with_name("decimals")
        .long("decimals")
        .takes_value(true)
        .help("Number of decimal places used to round reported statistics. [default: 2]"))
    .arg(
      Arg::with_name("debug")
        .long("debug")
        .help("Prints debug information verbosely."))
    .arg(
      Arg::with_name("short")
        .long("short")
        .help("Display only minimum information (e.g. with this flag active the report skips per group details)"))
    .arg(
      Arg::with_name("config-path")
        .short("c")
        .long("config-path")
        .takes_value(true)
        .value_name("FILE")
        .default_value(".env")
        .help(
          "Sets a custom config file path. The config file contains 'recsys' configuration variables.",
        ))
}

/// Maps CLI flags into their RECSYS_* environment variable counterparts
fn env_vars_from_matches(matches: &ArgMatches) -> Vec<(&'static str, String)> {
    let mut vars = Vec::new();

    if let Some(schema) = matches.value_of("SCHEMA") {
        vars.push(("RECSYS_SCHEMA", schema.to_string()));
    }

    if let Some(dataset_path) = matches.value_of("dataset-path") {
        vars.push(("RECSYS_DATASET_PATH", dataset_path.to_string()));
    }

    if let Some(results_path) = matches.value_of("results-path") {
        vars.push(("RECSYS_RESULTS_PATH", results_path.to_string()));
    }

    if let Some(decimals) = matches.value_of("decimals") {
        vars.push(("RECSYS_DECIMALS", decimals.to_string()));
    }

    if matches.is_present("debug") {
        vars.push(("RECSYS_IS_DEBUG", "true".to_string()));
    }

    if matches.is_present("short") {
        vars.push(("RECSYS_IS_SHORT", "true".to_string()));
    }

    vars
}

/// Inject dotenv and env vars into the Config struct
fn get_config() -> Config {
    let matches = cli().get_matches();

    // Try to load configuration from file first
    let config_path = matches.value_of("config-path").unwrap_or(".env");
    match dotenv::from_filename(config_path).ok() {
        Some(_) => info!("Loading configuration from {} file", config_path),
        None => {
            let config_path =
                env::var("RECSYS_CONFIG_FILENAME").unwrap_or(".env".to_string());
            if dotenv::from_filename(&config_path).is_ok() {
                info!("Loading configuration from {} file", &config_path);
            }
        }
    }

    // CLI flags take precedence over the config file
    for (key, value) in env_vars_from_matches(&matches) {
        env::set_var(key, value);
    }

    match envy::prefixed("RECSYS_").from_env::<Config>() {
        Ok(config) => config,
        Err(error) => panic!("Configuration error: {:#?}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(vars: Vec<(&str, &str)>) -> Config {
        envy::prefixed("RECSYS_")
            .from_iter(vars.into_iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .unwrap()
    }

    #[test]
    fn it_gets_a_default_config() {
        let config = config_from(vec![]);
        assert_eq!(config.dataset_path, "dataset");
        assert_eq!(config.results_path, "results");
        assert_eq!(config.schema, Schema::DigitalMusic);
        assert_eq!(config.decimals, 2);
        assert!(!config.is_debug);
        assert!(!config.is_short);
    }

    #[test]
    fn it_reads_prefixed_variables() {
        let config = config_from(vec![
            ("RECSYS_SCHEMA", "books"),
            ("RECSYS_DATASET_PATH", "/data/books"),
            ("RECSYS_DECIMALS", "4"),
            ("RECSYS_IS_DEBUG", "true"),
        ]);
        assert_eq!(config.schema, Schema::Books);
        assert_eq!(config.dataset_path, "/data/books");
        assert_eq!(config.decimals, 4);
        assert!(config.is_debug);
    }

    #[test]
    fn it_rejects_unknown_schema() {
        let result = envy::prefixed("RECSYS_")
            .from_iter::<_, Config>(vec![("RECSYS_SCHEMA".to_string(), "movies".to_string())]);
        assert!(result.is_err());
    }

    #[test]
    fn it_maps_cli_flags_to_env_vars() {
        let matches = cli().get_matches_from(vec![
            "recsys",
            "books",
            "--dataset-path",
            "/data/books",
            "--debug",
        ]);
        let vars = env_vars_from_matches(&matches);
        assert_eq!(
            vars,
            vec![
                ("RECSYS_SCHEMA", "books".to_string()),
                ("RECSYS_DATASET_PATH", "/data/books".to_string()),
                ("RECSYS_IS_DEBUG", "true".to_string()),
            ]
        );
    }

    #[test]
    fn it_leaves_unset_flags_alone() {
        let matches = cli().get_matches_from(vec!["recsys"]);
        assert!(env_vars_from_matches(&matches).is_empty());
        assert_eq!(matches.value_of("config-path"), Some(".env"));
    }
}
