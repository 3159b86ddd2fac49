// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::annotation::{AnnotationPosition, AnnotationRule};
use crate::chart_scales::ScaleOverrides;
use crate::dimensions::{Margins, Sizing};
use crate::format::TickFormat;
use crate::history::HistoryConfig;
use crate::scale::DEFAULT_TICK_COUNT;
use crate::ticks::MarkerYear;

/// Default label font size, in pixels. Resolves `em` offsets.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Everything a chart needs besides data and a viewport.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    /// Margins around the plot area.
    pub margins: Margins,
    /// How the chart height is derived.
    pub sizing: Sizing,
    /// Explicit scale domains and ranges.
    pub overrides: ScaleOverrides,
    /// Lower bound of the life-expectancy domain when it is inferred.
    ///
    /// The upper bound still comes from the data.
    pub domain_y_min: Option<f64>,
    /// Approximate tick count for generated ticks.
    pub tick_count: usize,
    /// Explicit x ticks.
    pub ticks_x: Option<Vec<f64>>,
    /// Explicit labelled x ticks.
    pub major_ticks_x: Option<Vec<f64>>,
    /// Explicit y ticks.
    pub ticks_y: Option<Vec<f64>>,
    /// Explicit labelled y ticks.
    pub major_ticks_y: Option<Vec<f64>>,
    /// x tick label format.
    pub format_x: TickFormat,
    /// y tick label format.
    pub format_y: TickFormat,
    /// Years called out on trajectories.
    pub markers: Vec<MarkerYear>,
    /// Countries labelled in snapshots.
    pub annotations: Vec<AnnotationRule>,
    /// Label font size in pixels.
    pub font_size: f64,
    /// History trail decoration sizes.
    pub history: HistoryConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            sizing: Sizing::Measured,
            overrides: ScaleOverrides::default(),
            domain_y_min: None,
            tick_count: DEFAULT_TICK_COUNT,
            ticks_x: None,
            major_ticks_x: None,
            ticks_y: None,
            major_ticks_y: None,
            format_x: TickFormat::Plain,
            format_y: TickFormat::Plain,
            markers: Vec::new(),
            annotations: Vec::new(),
            font_size: DEFAULT_FONT_SIZE,
            history: HistoryConfig::default(),
        }
    }
}

impl ChartConfig {
    /// The wealth-and-health chart: income from $500 to $200k, life expectancy from 10, the
    /// two world wars marked, and a handful of countries labelled.
    pub fn gapminder() -> Self {
        let minor_x: Vec<f64> = [1_000.0, 10_000.0]
            .into_iter()
            .flat_map(|decade| (1..10).map(move |k| f64::from(k) * decade))
            .chain([100_000.0])
            .collect();

        let annotations = [
            "China",
            "India",
            "Russia",
            "United States",
            "Equatorial Guinea",
            "Nigeria",
            "North Korea",
            "Central African Republic",
            "Qatar",
        ]
        .into_iter()
        .map(|country| {
            let rule = AnnotationRule::new(country);
            if matches!(country, "China" | "India") {
                rule.with_position(AnnotationPosition::Top)
            } else {
                rule
            }
        })
        .collect();

        Self {
            margins: Margins::default().with_bottom(20.0).with_left(20.0),
            sizing: Sizing::FixedHeight(400.0),
            overrides: ScaleOverrides::default()
                .with_domain_x((500.0, 200_000.0))
                .with_range_r((4.0, 40.0)),
            domain_y_min: Some(10.0),
            ticks_x: Some(minor_x),
            major_ticks_x: Some(vec![1_000.0, 10_000.0, 100_000.0]),
            ticks_y: Some((2..=9).map(|t| f64::from(t) * 10.0).collect()),
            format_x: TickFormat::thousands("$"),
            markers: vec![
                MarkerYear::new(1918, "End of World War I (1918)"),
                MarkerYear::new(1945, "End of World War II (1945)"),
            ],
            annotations,
            ..Self::default()
        }
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the sizing mode.
    pub fn with_sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Sets the scale overrides.
    pub fn with_overrides(mut self, overrides: ScaleOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Sets the marker years.
    pub fn with_markers(mut self, markers: Vec<MarkerYear>) -> Self {
        self.markers = markers;
        self
    }

    /// Sets the annotation rules.
    pub fn with_annotations(mut self, annotations: Vec<AnnotationRule>) -> Self {
        self.annotations = annotations;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_infers_everything() {
        let c = ChartConfig::default();
        assert_eq!(c.overrides, ScaleOverrides::default());
        assert_eq!(c.tick_count, 10);
        assert!(c.ticks_x.is_none() && c.ticks_y.is_none());
        assert!(c.markers.is_empty() && c.annotations.is_empty());
    }

    #[test]
    fn gapminder_preset_ticks() {
        let c = ChartConfig::gapminder();
        let minor = c.ticks_x.unwrap();
        assert_eq!(minor.len(), 19);
        assert_eq!(minor[0], 1_000.0);
        assert_eq!(minor[9], 10_000.0);
        assert_eq!(minor[18], 100_000.0);
        assert_eq!(c.ticks_y.unwrap(), vec![20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0]);
        assert_eq!(c.format_x.format(10_000.0), "$10k");
    }

    #[test]
    fn gapminder_preset_markers_and_annotations() {
        let c = ChartConfig::gapminder();
        assert_eq!(c.markers[0], MarkerYear::new(1918, "End of World War I (1918)"));
        assert_eq!(c.markers[1].label, "End of World War II (1945)");
        assert_eq!(c.annotations.len(), 9);
        let top: Vec<&str> = c
            .annotations
            .iter()
            .filter(|r| r.position == AnnotationPosition::Top)
            .map(|r| r.country.as_str())
            .collect();
        assert_eq!(top, vec!["China", "India"]);
    }
}
