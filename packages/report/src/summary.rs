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

use chrono::{DateTime, Utc};
use recsys_dataset::{item_ids, ratings, timestamps, user_ids, Rating, Results, Table};
use recsys_stats::{
    compute_sparsity, max, mean, median, min, percentile_group, round_values,
    standard_deviation, unique_count, value_counts, PercentileGroup,
};
use std::collections::HashMap;

pub type Activity = Vec<(String, usize, PercentileGroup)>;

/// Descriptive statistics of a ratings dataset.
#[derive(Debug, Clone)]
pub struct Summary {
    pub decimals: u32,
    pub n_ratings: usize,
    pub n_users: usize,
    pub n_items: usize,
    pub sparsity: f64,
    pub rating_mean: f64,
    pub rating_median: f64,
    pub rating_std: f64,
    pub rating_min: Option<f64>,
    pub rating_max: Option<f64>,
    /// (rating, occurrences) in ascending rating order
    pub rating_distribution: Vec<(f64, usize)>,
    /// (user_id, ratings, group), most active first
    pub user_activity: Activity,
    /// (item_id, ratings, group), most rated first
    pub item_activity: Activity,
    pub user_activity_mean: f64,
    pub item_activity_mean: f64,
    pub user_groups: Vec<(PercentileGroup, usize)>,
    pub item_groups: Vec<(PercentileGroup, usize)>,
    pub first_rating: Option<String>,
    pub last_rating: Option<String>,
}

// Counts per id, each classified against the largest count.
fn activity(ids: &[String]) -> Activity {
    let counts = value_counts(ids);
    let values: Vec<u32> = counts.values().map(|&c| c as u32).collect();
    let mut activity: Activity = match max(&values) {
        Some(max_count) => counts
            .into_iter()
            .map(|(id, count)| {
                let group = percentile_group(count as f64, max_count as f64);
                (id, count, group)
            })
            .collect(),
        None => Vec::new(),
    };
    activity.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    activity
}

fn activity_mean(activity: &Activity) -> f64 {
    let counts: Vec<u32> = activity.iter().map(|(_, count, _)| *count as u32).collect();
    mean(&counts)
}

fn group_distribution(activity: &Activity) -> Vec<(PercentileGroup, usize)> {
    let groups: Vec<PercentileGroup> = activity.iter().map(|(_, _, group)| *group).collect();
    let counts = value_counts(&groups);
    PercentileGroup::all()
        .into_iter()
        .map(|group| (group, counts.get(&group).copied().unwrap_or(0)))
        .collect()
}

fn rating_distribution(values: &[f64]) -> Vec<(f64, usize)> {
    // f64 is not hashable, count on its bit pattern instead
    let bits: Vec<u64> = values.iter().map(|v| v.to_bits()).collect();
    let counts: HashMap<u64, usize> = value_counts(&bits);
    let mut distribution: Vec<(f64, usize)> = counts
        .into_iter()
        .map(|(bits, count)| (f64::from_bits(bits), count))
        .collect();
    distribution.sort_by(|a, b| a.0.total_cmp(&b.0));
    distribution
}

fn format_date(timestamp: Option<i64>) -> Option<String> {
    timestamp
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|date| date.format("%Y-%m-%d").to_string())
}

fn format_option(value: Option<f64>, decimals: u32) -> String {
    match value {
        Some(v) => round_values(v, decimals).to_string(),
        None => String::new(),
    }
}

impl Summary {
    pub fn from_ratings(data: &[Rating], decimals: u32) -> Summary {
        let values = ratings(data);
        let users = user_ids(data);
        let items = item_ids(data);
        let times = timestamps(data);

        let n_users = unique_count(&users);
        let n_items = unique_count(&items);
        let rating_mean = mean(&values);
        let user_activity = activity(&users);
        let item_activity = activity(&items);

        Summary {
            decimals,
            n_ratings: data.len(),
            n_users,
            n_items,
            sparsity: compute_sparsity(n_users, n_items, data.len()),
            rating_mean,
            rating_median: median(&values),
            rating_std: standard_deviation(&values, Some(rating_mean)),
            rating_min: min(&values),
            rating_max: max(&values),
            rating_distribution: rating_distribution(&values),
            user_activity_mean: activity_mean(&user_activity),
            item_activity_mean: activity_mean(&item_activity),
            user_groups: group_distribution(&user_activity),
            item_groups: group_distribution(&item_activity),
            user_activity,
            item_activity,
            first_rating: format_date(min(&times)),
            last_rating: format_date(max(&times)),
        }
    }

    pub fn max_user_activity(&self) -> usize {
        self.user_activity.first().map(|(_, count, _)| *count).unwrap_or(0)
    }

    pub fn max_item_activity(&self) -> usize {
        self.item_activity.first().map(|(_, count, _)| *count).unwrap_or(0)
    }

    /// Every scalar statistic as a single results row.
    pub fn record(&self) -> Results {
        let d = self.decimals;
        Results::Record(vec![
            ("n_ratings".into(), self.n_ratings.to_string()),
            ("n_users".into(), self.n_users.to_string()),
            ("n_items".into(), self.n_items.to_string()),
            ("sparsity".into(), self.sparsity.to_string()),
            ("rating_mean".into(), round_values(self.rating_mean, d).to_string()),
            ("rating_median".into(), round_values(self.rating_median, d).to_string()),
            ("rating_std".into(), round_values(self.rating_std, d).to_string()),
            ("rating_min".into(), format_option(self.rating_min, d)),
            ("rating_max".into(), format_option(self.rating_max, d)),
            (
                "user_activity_mean".into(),
                round_values(self.user_activity_mean, d).to_string(),
            ),
            (
                "item_activity_mean".into(),
                round_values(self.item_activity_mean, d).to_string(),
            ),
            ("max_user_activity".into(), self.max_user_activity().to_string()),
            ("max_item_activity".into(), self.max_item_activity().to_string()),
            ("first_rating".into(), self.first_rating.clone().unwrap_or_default()),
            ("last_rating".into(), self.last_rating.clone().unwrap_or_default()),
        ])
    }

    pub fn user_groups_table(&self) -> Results {
        activity_table("user_id", &self.user_activity)
    }

    pub fn item_groups_table(&self) -> Results {
        activity_table("item_id", &self.item_activity)
    }
}

fn activity_table(id_header: &str, activity: &Activity) -> Results {
    Results::Table(Table {
        headers: vec![id_header.into(), "ratings".into(), "group".into()],
        rows: activity
            .iter()
            .map(|(id, count, group)| vec![id.clone(), count.to_string(), group.to_string()])
            .collect(),
    })
}
