// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Country-year observations and extent helpers.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

/// One country-year observation.
///
/// Rows are identified by `(country, year)`; a country's rows ordered by year form its
/// history.
#[derive(Clone, Debug, PartialEq)]
pub struct DataRow {
    /// Country name.
    pub country: String,
    /// Observation year.
    pub year: i32,
    /// Income per capita. Must be positive to be placed on a log axis.
    pub gdp: f64,
    /// Life expectancy in years.
    pub life_expectancy: f64,
    /// Population estimate.
    pub population: f64,
}

impl DataRow {
    /// Creates a new row.
    pub fn new(
        country: impl Into<String>,
        year: i32,
        gdp: f64,
        life_expectancy: f64,
        population: f64,
    ) -> Self {
        Self {
            country: country.into(),
            year,
            gdp,
            life_expectancy,
            population,
        }
    }

    /// Reads the numeric value of `field`.
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Gdp => self.gdp,
            Field::LifeExpectancy => self.life_expectancy,
            Field::Population => self.population,
            Field::Year => f64::from(self.year),
        }
    }
}

/// Numeric fields of a [`DataRow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// [`DataRow::gdp`].
    Gdp,
    /// [`DataRow::life_expectancy`].
    LifeExpectancy,
    /// [`DataRow::population`].
    Population,
    /// [`DataRow::year`].
    Year,
}

/// Infer a `(min, max)` extent for a numeric field.
///
/// Non-finite values are ignored. Returns `None` if no finite values are present.
pub fn extent<'a>(rows: impl IntoIterator<Item = &'a DataRow>, field: Field) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in rows {
        let v = row.value(field);
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Returns the most recent year present in `rows`.
pub fn max_year<'a>(rows: impl IntoIterator<Item = &'a DataRow>) -> Option<i32> {
    rows.into_iter().map(|row| row.year).max()
}

/// Lists distinct country names in first-seen order.
pub fn countries(rows: &[DataRow]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for row in rows {
        if seen.insert(row.country.as_str()) {
            out.push(row.country.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn extent_skips_non_finite_values() {
        let rows = vec![
            DataRow::new("A", 2000, 500.0, 40.0, 10.0),
            DataRow::new("B", 2000, f64::NAN, 70.0, 20.0),
            DataRow::new("C", 2000, 9_000.0, f64::INFINITY, 5.0),
        ];
        assert_eq!(extent(&rows, Field::Gdp), Some((500.0, 9_000.0)));
        assert_eq!(extent(&rows, Field::LifeExpectancy), Some((40.0, 70.0)));
        assert_eq!(extent(&rows, Field::Population), Some((5.0, 20.0)));
    }

    #[test]
    fn extent_of_empty_rows_is_none() {
        let rows: Vec<DataRow> = Vec::new();
        assert_eq!(extent(&rows, Field::Gdp), None);
        assert_eq!(max_year(&rows), None);
    }

    #[test]
    fn countries_are_listed_once_in_first_seen_order() {
        let rows = vec![
            DataRow::new("Chile", 1990, 1.0, 1.0, 1.0),
            DataRow::new("Peru", 1990, 1.0, 1.0, 1.0),
            DataRow::new("Chile", 2000, 1.0, 1.0, 1.0),
        ];
        assert_eq!(countries(&rows), vec!["Chile", "Peru"]);
    }
}
