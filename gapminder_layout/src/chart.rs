// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition.
//!
//! [`GapminderChart::frame`] turns a data set, one [`Dimensions`] value, and a view request
//! into a [`ChartFrame`]: every pixel position a renderer needs, computed in one pass.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Rect};
use peniko::Color;

use crate::annotation::{Annotation, place_annotations};
use crate::chart_scales::{ChartScales, ScaleError, ScaleOverrides, build_scales};
use crate::config::ChartConfig;
use crate::data::{self, DataRow, Field};
use crate::dimensions::{DimensionObserver, Dimensions};
use crate::history::{HistoryGeometry, history_geometry};
use crate::scale::ScaleContinuous;
use crate::ticks::{AxisTick, axis_ticks, plan_major_ticks, plan_ticks, resolve_markers};
use crate::view::{ViewSelection, annotated_rows, select_view};

/// What the caller wants to see.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewRequest {
    /// Target year; the most recent year when `None`.
    pub year: Option<i32>,
    /// Country whose history replaces the snapshot.
    pub highlighted_country: Option<String>,
}

impl ViewRequest {
    /// Requests the snapshot of `year`.
    pub fn year(year: i32) -> Self {
        Self {
            year: Some(year),
            highlighted_country: None,
        }
    }

    /// Requests the history of `country`.
    pub fn country(country: impl Into<String>) -> Self {
        Self {
            year: None,
            highlighted_country: Some(country.into()),
        }
    }
}

/// A filled circle for one row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleGlyph<'a> {
    /// The row.
    pub row: &'a DataRow,
    /// Circle in plot space.
    pub circle: Circle,
    /// Fill color.
    pub color: Color,
}

/// A history trail and its color.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail<'a> {
    /// Trail geometry.
    pub geometry: HistoryGeometry<'a>,
    /// Stroke and fill color of the trail.
    pub color: Color,
}

/// Everything needed to draw one state of the chart.
///
/// Positions are in plot space; translate by the plot origin
/// (`dimensions.plot_rect().origin()`) to get container coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame<'a> {
    /// The viewport the frame was computed for.
    pub dimensions: Dimensions,
    /// The scales.
    pub scales: ChartScales,
    /// x axis ticks, sorted by value.
    pub x_ticks: Vec<AxisTick>,
    /// y axis ticks, sorted by value.
    pub y_ticks: Vec<AxisTick>,
    /// The selected rows.
    pub view: ViewSelection<'a>,
    /// Snapshot circles in draw order. Empty for a trajectory.
    pub circles: Vec<CircleGlyph<'a>>,
    /// Snapshot labels in draw order. Empty for a trajectory.
    pub annotations: Vec<Annotation<'a>>,
    /// History trail. Present for a trajectory.
    pub trail: Option<Trail<'a>>,
}

impl ChartFrame<'_> {
    /// The plot area in container coordinates.
    pub fn plot_rect(&self) -> Rect {
        self.dimensions.plot_rect()
    }
}

/// A configured chart.
#[derive(Clone, Debug, Default)]
pub struct GapminderChart {
    config: ChartConfig,
}

impl GapminderChart {
    /// Creates a chart.
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Creates a detached dimension observer using the chart's margins and sizing.
    pub fn observer(&self) -> DimensionObserver {
        DimensionObserver::new(self.config.margins, self.config.sizing)
    }

    /// Scale overrides after applying [`ChartConfig::domain_y_min`].
    fn overrides(&self, data: &[DataRow]) -> ScaleOverrides {
        let mut overrides = self.config.overrides;
        if overrides.domain_y.is_none()
            && let Some(min) = self.config.domain_y_min
            && let Some((_, max)) = data::extent(data, Field::LifeExpectancy)
        {
            overrides.domain_y = Some((min, max));
        }
        overrides
    }

    /// Computes a frame.
    ///
    /// Scales are built from the whole data set, so circles keep their size and axes stay
    /// put when the view changes. `color` picks the fill of each snapshot circle and of
    /// the trail (using its first row).
    pub fn frame<'a>(
        &'a self,
        data: &'a [DataRow],
        dimensions: &Dimensions,
        request: &ViewRequest,
        color: impl Fn(&DataRow) -> Color,
    ) -> Result<ChartFrame<'a>, ScaleError> {
        let config = &self.config;
        let scales = build_scales(data, &self.overrides(data), dimensions)?;

        let x_scale = ScaleContinuous::from(scales.x);
        let x_values = plan_ticks(&x_scale, config.ticks_x.as_deref(), config.tick_count);
        let x_major = plan_major_ticks(&x_values, config.major_ticks_x.as_deref());
        let x_ticks = axis_ticks(&x_scale, &x_values, &x_major, &config.format_x);

        let y_scale = ScaleContinuous::from(scales.y);
        let y_values = plan_ticks(&y_scale, config.ticks_y.as_deref(), config.tick_count);
        let y_major = plan_major_ticks(&y_values, config.major_ticks_y.as_deref());
        let y_ticks = axis_ticks(&y_scale, &y_values, &y_major, &config.format_y);

        let view = select_view(data, request.year, request.highlighted_country.as_deref());

        let mut circles = Vec::new();
        let mut annotations = Vec::new();
        let mut trail = None;
        match &view {
            ViewSelection::Snapshot { rows, .. } => {
                circles = rows
                    .iter()
                    .map(|&row| CircleGlyph {
                        row,
                        circle: Circle::new(scales.position(row), scales.radius(row)),
                        color: color(row),
                    })
                    .collect();
                let countries: Vec<&str> = config
                    .annotations
                    .iter()
                    .map(|rule| rule.country.as_str())
                    .collect();
                let labelled = annotated_rows(rows, &countries);
                annotations =
                    place_annotations(&labelled, &config.annotations, &scales, config.font_size);
            }
            ViewSelection::Trajectory { rows, .. } => {
                let markers = resolve_markers(rows, &config.markers);
                let geometry =
                    history_geometry(rows, &markers, &scales, &config.history, config.font_size);
                trail = rows.first().map(|&first| Trail {
                    geometry,
                    color: color(first),
                });
            }
        }

        Ok(ChartFrame {
            dimensions: *dimensions,
            scales,
            x_ticks,
            y_ticks,
            view,
            circles,
            annotations,
            trail,
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::annotation::{AnnotationPosition, AnnotationRule, TextAnchor};
    use crate::color::{DEFAULT_COLOR, default_color};
    use crate::dimensions::Margins;

    fn data() -> Vec<DataRow> {
        vec![
            DataRow::new("China", 1918, 600.0, 30.0, 4.5e8),
            DataRow::new("China", 1945, 700.0, 35.0, 5.0e8),
            DataRow::new("China", 2018, 16_000.0, 76.0, 1.4e9),
            DataRow::new("Qatar", 2018, 120_000.0, 80.0, 2.7e6),
            DataRow::new("Chad", 2018, 1_800.0, 54.0, 1.5e7),
        ]
    }

    fn dims() -> Dimensions {
        Dimensions::new(820.0, 400.0, Margins::default().with_bottom(20.0).with_left(20.0))
    }

    #[test]
    fn preset_snapshot_has_circles_labels_and_ticks() {
        let chart = GapminderChart::new(ChartConfig::gapminder());
        let data = data();
        let frame = chart.frame(&data, &dims(), &ViewRequest::default(), default_color).unwrap();

        assert_eq!(frame.scales.y.domain(), (10.0, 80.0));
        assert_eq!(frame.scales.x.domain(), (500.0, 200_000.0));

        let countries: Vec<&str> = frame.circles.iter().map(|c| c.row.country.as_str()).collect();
        assert_eq!(countries, vec!["China", "Chad", "Qatar"]);
        assert!(frame.circles.iter().all(|c| c.color == DEFAULT_COLOR));

        let labels: Vec<&str> = frame.annotations.iter().map(|a| a.text).collect();
        assert_eq!(labels, vec!["Qatar", "China"]);
        assert_eq!(frame.annotations[1].placement.text_anchor, TextAnchor::End);

        assert_eq!(frame.x_ticks.len(), 19);
        assert_eq!(frame.x_ticks.iter().filter(|t| t.is_major()).count(), 3);
        assert_eq!(frame.y_ticks.len(), 8);
        assert!(frame.trail.is_none());
    }

    #[test]
    fn highlighted_country_yields_a_trail_with_markers() {
        let chart = GapminderChart::new(ChartConfig::gapminder());
        let data = data();
        let frame = chart
            .frame(&data, &dims(), &ViewRequest::country("China"), |_| DEFAULT_COLOR)
            .unwrap();

        assert!(frame.view.is_trajectory());
        assert!(frame.circles.is_empty());
        assert!(frame.annotations.is_empty());
        let trail = frame.trail.unwrap();
        assert_eq!(trail.color, DEFAULT_COLOR);
        let years: Vec<i32> = trail.geometry.markers.iter().map(|m| m.year).collect();
        assert_eq!(years, vec![1918, 1945]);
        assert_eq!(trail.geometry.first.unwrap().year_label, "1918");
        assert_eq!(trail.geometry.last.unwrap().row.year, 2018);
    }

    #[test]
    fn empty_data_without_overrides_is_an_error() {
        let chart = GapminderChart::default();
        let err = chart
            .frame(&[], &dims(), &ViewRequest::default(), default_color)
            .unwrap_err();
        assert_eq!(err, ScaleError::EmptyDomain(crate::chart_scales::Channel::X));
    }

    #[test]
    fn annotation_rules_follow_config() {
        let config = ChartConfig::default().with_annotations(vec![
            AnnotationRule::new("Chad").with_position(AnnotationPosition::Bottom),
        ]);
        let chart = GapminderChart::new(config);
        let data = data();
        let frame = chart.frame(&data, &dims(), &ViewRequest::year(2018), default_color).unwrap();
        assert_eq!(frame.annotations.len(), 1);
        assert_eq!(frame.annotations[0].placement.text_anchor, TextAnchor::Middle);
    }

    #[test]
    fn observer_uses_config_margins() {
        let chart = GapminderChart::new(ChartConfig::gapminder());
        let observer = chart.observer();
        assert_eq!(observer.dimensions().height, 400.0);
        assert_eq!(observer.dimensions().bounded_height, 380.0);
    }
}
