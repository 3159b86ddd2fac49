// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis tick planning and marker-year resolution.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::data::DataRow;
use crate::format::TickFormat;
use crate::scale::ScaleContinuous;

/// Returns the tick values for an axis.
///
/// Explicit values are returned verbatim (no sorting, no domain filtering); otherwise the
/// scale's own nice ticks for `count` are used.
pub fn plan_ticks(scale: &ScaleContinuous, explicit: Option<&[f64]>, count: usize) -> Vec<f64> {
    match explicit {
        Some(values) => values.to_vec(),
        None => scale.ticks(count),
    }
}

/// Returns the labelled (major) ticks: the explicit list if given, otherwise every tick.
pub fn plan_major_ticks(ticks: &[f64], explicit_major: Option<&[f64]>) -> Vec<f64> {
    explicit_major.unwrap_or(ticks).to_vec()
}

/// A positioned axis tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Data value.
    pub value: f64,
    /// Pixel position along the axis.
    pub position: f64,
    /// Label text; only major ticks carry one.
    pub label: Option<String>,
}

impl AxisTick {
    /// Returns `true` if the tick is labelled.
    pub fn is_major(&self) -> bool {
        self.label.is_some()
    }
}

/// Positions every tick and labels the major ones.
///
/// The result is sorted by value and deduplicated. A major value missing from `ticks` still
/// gets a tick.
pub fn axis_ticks(
    scale: &ScaleContinuous,
    ticks: &[f64],
    major: &[f64],
    format: &TickFormat,
) -> Vec<AxisTick> {
    let mut values: Vec<f64> = ticks.iter().chain(major).copied().collect();
    values.sort_by(f64::total_cmp);
    values.dedup();

    values
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: scale.map(value),
            label: major.contains(&value).then(|| format.format(value)),
        })
        .collect()
}

/// A year to call out on a trajectory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerYear {
    /// The year.
    pub year: i32,
    /// Label drawn next to the marker.
    pub label: String,
}

impl MarkerYear {
    /// Creates a marker.
    pub fn new(year: i32, label: impl Into<String>) -> Self {
        Self {
            year,
            label: label.into(),
        }
    }
}

/// A marker whose year is present in the trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedMarker<'a> {
    /// The marker year.
    pub year: i32,
    /// The marker label.
    pub label: &'a str,
    /// The trajectory row of that year.
    pub row: &'a DataRow,
}

/// Resolves marker years against a trajectory.
///
/// Markers whose year has no row are dropped silently. The remaining markers keep their
/// request order. If the trajectory has several rows for one year, the last one wins.
pub fn resolve_markers<'a>(
    trajectory: &[&'a DataRow],
    markers: &'a [MarkerYear],
) -> SmallVec<[ResolvedMarker<'a>; 4]> {
    let by_year: HashMap<i32, &'a DataRow> =
        trajectory.iter().map(|row| (row.year, *row)).collect();

    markers
        .iter()
        .filter_map(|marker| {
            by_year.get(&marker.year).map(|row| ResolvedMarker {
                year: marker.year,
                label: marker.label.as_str(),
                row,
            })
        })
        .collect()
}
