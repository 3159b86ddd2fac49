// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds the x/y/r scales for a data set and viewport.

use kurbo::Point;

use crate::data::{self, DataRow, Field};
use crate::dimensions::Dimensions;
use crate::scale::{DEFAULT_TICK_COUNT, ScaleLinear, ScaleLog, ScaleSqrt};

/// Default radius range in pixels.
pub const DEFAULT_RANGE_R: (f64, f64) = (2.0, 10.0);

/// A visual channel driven by a scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Horizontal position (income).
    X,
    /// Vertical position (life expectancy).
    Y,
    /// Circle radius (population).
    R,
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::R => "r",
        })
    }
}

/// Errors returned by [`build_scales`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleError {
    /// A domain had to be inferred from the data, but no finite value was found.
    EmptyDomain(Channel),
}

impl core::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyDomain(channel) => {
                write!(f, "cannot infer the {channel} domain from an empty data set")
            }
        }
    }
}

impl core::error::Error for ScaleError {}

/// Explicit domains and ranges that replace the inferred ones.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleOverrides {
    /// Income domain. Both bounds must be positive.
    pub domain_x: Option<(f64, f64)>,
    /// Life-expectancy domain (niced before use).
    pub domain_y: Option<(f64, f64)>,
    /// Population domain.
    pub domain_r: Option<(f64, f64)>,
    /// Radius range in pixels; defaults to [`DEFAULT_RANGE_R`].
    pub range_r: Option<(f64, f64)>,
}

impl ScaleOverrides {
    /// Sets the income domain.
    pub fn with_domain_x(mut self, domain: (f64, f64)) -> Self {
        self.domain_x = Some(domain);
        self
    }

    /// Sets the life-expectancy domain.
    pub fn with_domain_y(mut self, domain: (f64, f64)) -> Self {
        self.domain_y = Some(domain);
        self
    }

    /// Sets the population domain.
    pub fn with_domain_r(mut self, domain: (f64, f64)) -> Self {
        self.domain_r = Some(domain);
        self
    }

    /// Sets the radius range.
    pub fn with_range_r(mut self, range: (f64, f64)) -> Self {
        self.range_r = Some(range);
        self
    }
}

/// The three scales of a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    /// Income → x pixel, logarithmic, range `[0, bounded_width]`.
    pub x: ScaleLog,
    /// Life expectancy → y pixel, linear and niced, range `[bounded_height, 0]`.
    pub y: ScaleLinear,
    /// Population → radius, square-root.
    pub r: ScaleSqrt,
}

impl ChartScales {
    /// Returns the plot-space center of a row's circle.
    pub fn position(&self, row: &DataRow) -> Point {
        Point::new(self.x.map(row.gdp), self.y.map(row.life_expectancy))
    }

    /// Returns a row's circle radius.
    pub fn radius(&self, row: &DataRow) -> f64 {
        self.r.map(row.population)
    }
}

/// Builds the x, y, and r scales.
///
/// Domains without an override are inferred from the extent of `data`. The result is a pure
/// function of its inputs.
pub fn build_scales(
    data: &[DataRow],
    overrides: &ScaleOverrides,
    dimensions: &Dimensions,
) -> Result<ChartScales, ScaleError> {
    let domain = |over: Option<(f64, f64)>, field: Field, channel: Channel| match over {
        Some(d) => Ok(d),
        None => data::extent(data, field).ok_or(ScaleError::EmptyDomain(channel)),
    };

    let domain_x = domain(overrides.domain_x, Field::Gdp, Channel::X)?;
    let domain_y = domain(overrides.domain_y, Field::LifeExpectancy, Channel::Y)?;
    let domain_r = domain(overrides.domain_r, Field::Population, Channel::R)?;

    Ok(ChartScales {
        x: ScaleLog::new(domain_x, (0.0, dimensions.bounded_width)),
        y: ScaleLinear::new(domain_y, (dimensions.bounded_height, 0.0)).nice(DEFAULT_TICK_COUNT),
        r: ScaleSqrt::new(domain_r, overrides.range_r.unwrap_or(DEFAULT_RANGE_R)),
    })
}
