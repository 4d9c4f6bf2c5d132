//! The reloaded users table with its derived columns.

use crate::derive::{char_length, domain_or_fallback, email_domain, value_counts, UNKNOWN_DOMAIN};
use crate::types::{UserRow, ValueCount};
use serde::Serialize;
use std::collections::HashSet;

/// A stored row plus the columns computed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedUser {
    #[serde(flatten)]
    pub row: UserRow,
    /// Email domain, or `"unknown"`
    pub domain: String,
    /// Characters in `name`
    pub name_length: usize,
    /// Characters in `username`
    pub username_length: usize,
}

impl From<UserRow> for DerivedUser {
    fn from(row: UserRow) -> Self {
        Self {
            domain: domain_or_fallback(&row.email),
            name_length: char_length(&row.name),
            username_length: char_length(&row.username),
            row,
        }
    }
}

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_users: usize,
    pub distinct_domains: usize,
    pub distinct_companies: usize,
    pub mean_name_length: f64,
    pub mean_username_length: f64,
}

/// In-memory users table, ordered by id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserFrame {
    rows: Vec<DerivedUser>,
}

impl UserFrame {
    /// Build the frame from reloaded rows, computing every derived column.
    pub fn from_rows(rows: impl IntoIterator<Item = UserRow>) -> Self {
        let mut rows: Vec<DerivedUser> = rows.into_iter().map(DerivedUser::from).collect();
        rows.sort_by_key(|r| r.row.id);
        Self { rows }
    }

    pub fn rows(&self) -> &[DerivedUser] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Users per email domain
    pub fn domain_counts(&self) -> Vec<ValueCount> {
        value_counts(self.rows.iter().map(|r| r.domain.as_str()))
    }

    /// Users per company name
    pub fn company_counts(&self) -> Vec<ValueCount> {
        value_counts(
            self.rows
                .iter()
                .map(|r| r.row.company_name.as_deref().unwrap_or(UNKNOWN_DOMAIN)),
        )
    }

    /// Users per city
    pub fn city_counts(&self) -> Vec<ValueCount> {
        value_counts(
            self.rows
                .iter()
                .map(|r| r.row.city.as_deref().unwrap_or(UNKNOWN_DOMAIN)),
        )
    }

    /// Name lengths in row order
    pub fn name_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.name_length).collect()
    }

    /// Metrics over the frame. Fallback labels are not counted as distinct
    /// domains or companies.
    pub fn summary(&self) -> Summary {
        let distinct_domains = self
            .rows
            .iter()
            .filter_map(|r| email_domain(&r.row.email))
            .collect::<HashSet<_>>()
            .len();
        let distinct_companies = self
            .rows
            .iter()
            .filter_map(|r| r.row.company_name.as_deref())
            .collect::<HashSet<_>>()
            .len();

        Summary {
            total_users: self.len(),
            distinct_domains,
            distinct_companies,
            mean_name_length: mean(self.rows.iter().map(|r| r.name_length)),
            mean_username_length: mean(self.rows.iter().map(|r| r.username_length)),
        }
    }
}

fn mean(values: impl Iterator<Item = usize>) -> f64 {
    let (sum, n) = values.fold((0usize, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum as f64 / n as f64
    }
}
