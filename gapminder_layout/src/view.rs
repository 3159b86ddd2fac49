// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View selection: which rows a frame shows.
//!
//! A chart shows either a cross-sectional [`ViewSelection::Snapshot`] of every country in
//! one year, or the longitudinal [`ViewSelection::Trajectory`] of one highlighted country.

extern crate alloc;

use alloc::vec::Vec;

use crate::data::{self, DataRow};

/// Minimum number of rows a highlighted country needs before its history is shown.
///
/// Two points are the fewest that define a line segment; with fewer, the chart falls
/// back to the snapshot.
pub const MIN_TRAJECTORY_POINTS: usize = 2;

/// The subset of rows a frame renders.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewSelection<'a> {
    /// All rows of one year, largest population first.
    Snapshot {
        /// The resolved year, or `None` if there was no data to resolve it from.
        year: Option<i32>,
        /// Rows in draw order.
        rows: Vec<&'a DataRow>,
    },
    /// All rows of one country, oldest first.
    Trajectory {
        /// The highlighted country.
        country: &'a str,
        /// Rows in ascending year order.
        rows: Vec<&'a DataRow>,
    },
}

impl<'a> ViewSelection<'a> {
    /// Returns the selected rows.
    pub fn rows(&self) -> &[&'a DataRow] {
        match self {
            Self::Snapshot { rows, .. } | Self::Trajectory { rows, .. } => rows,
        }
    }

    /// Returns `true` for a trajectory.
    pub fn is_trajectory(&self) -> bool {
        matches!(self, Self::Trajectory { .. })
    }
}

/// Resolves the target year: `year` if given, otherwise the most recent year in `data`.
pub fn resolve_year(data: &[DataRow], year: Option<i32>) -> Option<i32> {
    year.or_else(|| data::max_year(data))
}

/// Returns every row of `year`, sorted by descending population.
///
/// The sort is stable, so rows with equal population keep their input order.
pub fn snapshot(data: &[DataRow], year: i32) -> Vec<&DataRow> {
    let mut rows: Vec<&DataRow> = data.iter().filter(|row| row.year == year).collect();
    rows.sort_by(|a, b| b.population.total_cmp(&a.population));
    rows
}

/// Returns every row of `country`, sorted by ascending year.
pub fn trajectory<'a>(data: &'a [DataRow], country: &str) -> Vec<&'a DataRow> {
    let mut rows: Vec<&DataRow> = data.iter().filter(|row| row.country == country).collect();
    rows.sort_by_key(|row| row.year);
    rows
}

/// Selects the rows to show.
///
/// If `highlighted_country` names a country with at least [`MIN_TRAJECTORY_POINTS`] rows,
/// its trajectory is returned; otherwise the snapshot for the resolved year.
pub fn select_view<'a>(
    data: &'a [DataRow],
    year: Option<i32>,
    highlighted_country: Option<&str>,
) -> ViewSelection<'a> {
    if let Some(country) = highlighted_country {
        let rows = trajectory(data, country);
        if let Some(&first) = rows.first()
            && rows.len() >= MIN_TRAJECTORY_POINTS
        {
            return ViewSelection::Trajectory {
                country: first.country.as_str(),
                rows,
            };
        }
    }
    let year = resolve_year(data, year);
    let rows = year.map(|y| snapshot(data, y)).unwrap_or_default();
    ViewSelection::Snapshot { year, rows }
}

/// Filters `rows` to `countries`, sorted by ascending population.
///
/// Labels of small circles come first, so large (more prominent) countries are drawn last.
pub fn annotated_rows<'a, S: AsRef<str>>(
    rows: &[&'a DataRow],
    countries: &[S],
) -> Vec<&'a DataRow> {
    let mut out: Vec<&DataRow> = rows
        .iter()
        .copied()
        .filter(|row| countries.iter().any(|c| c.as_ref() == row.country))
        .collect();
    out.sort_by(|a, b| a.population.total_cmp(&b.population));
    out
}
