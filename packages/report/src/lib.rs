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

mod summary;

pub use summary::{Activity, Summary};

use log::info;
use recsys_stats::round_values;

type Body = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verbosity {
    Short,
    Long,
}

impl Verbosity {
    fn is_long(&self) -> bool {
        *self == Verbosity::Long
    }
}

impl From<bool> for Verbosity {
    /// `true` when only the minimum information should be displayed
    fn from(is_short: bool) -> Self {
        if is_short {
            return Self::Short;
        }
        Self::Long
    }
}

pub struct Report {
    body: Body,
    verbosity: Verbosity,
}

impl Report {
    pub fn new(verbosity: Verbosity) -> Report {
        Report {
            body: Vec::new(),
            verbosity,
        }
    }

    pub fn add_raw_text(&mut self, t: String) {
        self.body.push(t);
    }

    pub fn add_text(&mut self, t: String) {
        if self.verbosity.is_long() {
            self.add_raw_text(t);
        }
    }

    pub fn add_break(&mut self) {
        self.add_raw_text("".into());
    }

    pub fn message(&self) -> String {
        self.body.join("\n")
    }

    pub fn log(&self) {
        info!("__START__");
        for t in &self.body {
            info!("{}", t);
        }
        info!("__END__");
    }

    /// Builds the human readable report of a dataset [`Summary`].
    pub fn from_summary(summary: &Summary, verbosity: Verbosity) -> Report {
        let d = summary.decimals;
        let mut report = Report::new(verbosity);

        report.add_raw_text(format!(
            "{} ratings by {} users on {} items",
            summary.n_ratings, summary.n_users, summary.n_items
        ));
        report.add_raw_text(format!("Sparsity → {}%", summary.sparsity));
        if let (Some(first), Some(last)) = (&summary.first_rating, &summary.last_rating) {
            report.add_raw_text(format!("Rated between {} and {}", first, last));
        }
        report.add_break();

        report.add_raw_text(format!(
            "Rating mean {} · median {} · std {}",
            round_values(summary.rating_mean, d),
            round_values(summary.rating_median, d),
            round_values(summary.rating_std, d),
        ));
        report.add_raw_text(format!(
            "Rating min {} · max {}",
            display_option(summary.rating_min, d),
            display_option(summary.rating_max, d),
        ));
        for (rating, count) in &summary.rating_distribution {
            report.add_text(format!("  {} → {}", rating, count));
        }
        report.add_break();

        report.add_raw_text(format!(
            "Ratings per user: mean {} · max {}",
            round_values(summary.user_activity_mean, d),
            summary.max_user_activity(),
        ));
        for (group, count) in &summary.user_groups {
            report.add_text(format!("  {} ({}) → {} users", group, group.range(), count));
        }
        report.add_break();

        report.add_raw_text(format!(
            "Ratings per item: mean {} · max {}",
            round_values(summary.item_activity_mean, d),
            summary.max_item_activity(),
        ));
        for (group, count) in &summary.item_groups {
            report.add_text(format!("  {} ({}) → {} items", group, group.range(), count));
        }

        report
    }
}

fn display_option(value: Option<f64>, decimals: u32) -> String {
    match value {
        Some(v) => round_values(v, decimals).to_string(),
        None => String::from("n/a"),
    }
}
