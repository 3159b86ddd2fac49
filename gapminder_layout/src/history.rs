// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry of a country's history trail.
//!
//! A trajectory is drawn as a polyline through its points in year order, with circles at
//! both ends, a bold year label under the first point, and an indicator plus arrow for each
//! marker year.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Circle, Point};
use smallvec::SmallVec;

use crate::annotation::{AnnotationPlacement, AnnotationPosition};
use crate::arrow::{ArrowHead, arrow_path};
use crate::chart_scales::ChartScales;
use crate::data::DataRow;
use crate::ticks::ResolvedMarker;

/// Sizes of the marker decorations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoryConfig {
    /// Length of each marker arrow.
    pub arrow_length: f64,
    /// Radius of the indicator circle around a marker point.
    pub annotation_radius: f64,
    /// Gap between the indicator circle and the arrow.
    pub padding: f64,
    /// Arrowhead shape.
    pub head: ArrowHead,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            arrow_length: 24.0,
            annotation_radius: 6.0,
            padding: 4.0,
            head: ArrowHead::default(),
        }
    }
}

/// A trajectory point drawn as a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoryPoint<'a> {
    /// The row.
    pub row: &'a DataRow,
    /// Circle in plot space.
    pub circle: Circle,
}

/// The first point of a trail with its year label.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryStart<'a> {
    /// The point.
    pub point: HistoryPoint<'a>,
    /// Year text, drawn bold.
    pub year_label: String,
    /// Placement of the year text.
    pub placement: AnnotationPlacement,
}

/// Decorations for one resolved marker year.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerGeometry<'a> {
    /// Marker year.
    pub year: i32,
    /// Marker label.
    pub label: &'a str,
    /// Unfilled circle around the marker point.
    pub indicator: Circle,
    /// Arrow pointing back at the indicator.
    pub arrow: BezPath,
    /// Placement of the label, right of the arrow's far end.
    pub label_placement: AnnotationPlacement,
}

/// Everything needed to draw a history trail.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryGeometry<'a> {
    /// Polyline through every point; present with two or more points.
    pub line: Option<BezPath>,
    /// First point; present with two or more points.
    pub first: Option<HistoryStart<'a>>,
    /// Last point; present with one or more points.
    pub last: Option<HistoryPoint<'a>>,
    /// Marker decorations in request order.
    pub markers: SmallVec<[MarkerGeometry<'a>; 4]>,
}

/// Computes the trail geometry for `trajectory` (ascending year order).
pub fn history_geometry<'a>(
    trajectory: &[&'a DataRow],
    markers: &[ResolvedMarker<'a>],
    scales: &ChartScales,
    config: &HistoryConfig,
    font_size: f64,
) -> HistoryGeometry<'a> {
    let point = |row: &'a DataRow| HistoryPoint {
        row,
        circle: Circle::new(scales.position(row), scales.radius(row)),
    };

    let mut geometry = HistoryGeometry::default();

    if trajectory.len() >= 2 {
        let mut line = BezPath::new();
        for (i, row) in trajectory.iter().enumerate() {
            let p = scales.position(row);
            if i == 0 {
                line.move_to(p);
            } else {
                line.line_to(p);
            }
        }
        geometry.line = Some(line);

        let first = point(trajectory[0]);
        geometry.first = Some(HistoryStart {
            placement: AnnotationPosition::Bottom.place(
                first.circle.center,
                first.circle.radius,
                font_size,
            ),
            year_label: alloc::format!("{}", first.row.year),
            point: first,
        });
    }

    geometry.last = trajectory.last().map(|&row| point(row));

    geometry.markers = markers
        .iter()
        .map(|marker| {
            let center = scales.position(marker.row);
            let start_x = center.x + config.annotation_radius + config.padding;
            let start = Point::new(start_x, center.y);
            let end = Point::new(start_x + config.arrow_length, center.y);
            MarkerGeometry {
                year: marker.year,
                label: marker.label,
                indicator: Circle::new(center, config.annotation_radius),
                arrow: arrow_path(start, end, config.head),
                label_placement: AnnotationPosition::Right.place(end, 0.0, font_size),
            }
        })
        .collect();

    geometry
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use kurbo::PathEl;

    use super::*;
    use crate::annotation::TextAnchor;
    use crate::scale::{ScaleLinear, ScaleLog, ScaleSqrt};
    use crate::ticks::{MarkerYear, resolve_markers};

    fn scales() -> ChartScales {
        ChartScales {
            x: ScaleLog::new((1.0, 10_000.0), (0.0, 400.0)),
            y: ScaleLinear::new((0.0, 100.0), (200.0, 0.0)),
            r: ScaleSqrt::new((0.0, 100.0), (0.0, 20.0)),
        }
    }

    fn rows() -> Vec<DataRow> {
        alloc::vec![
            DataRow::new("X", 1900, 10.0, 25.0, 25.0),
            DataRow::new("X", 1918, 100.0, 50.0, 36.0),
            DataRow::new("X", 2000, 1_000.0, 75.0, 100.0),
        ]
    }

    #[test]
    fn full_trail_has_line_and_both_ends() {
        let data = rows();
        let trajectory: Vec<&DataRow> = data.iter().collect();
        let g = history_geometry(&trajectory, &[], &scales(), &HistoryConfig::default(), 10.0);

        let line = g.line.unwrap();
        assert_eq!(line.elements().len(), 3);
        assert!(matches!(line.elements()[0], PathEl::MoveTo(_)));

        let first = g.first.unwrap();
        assert_eq!(first.year_label, "1900");
        assert_eq!(first.point.row.year, 1900);
        assert!((first.point.circle.radius - 10.0).abs() < 1e-9);
        assert_eq!(first.placement.text_anchor, TextAnchor::Middle);
        assert!((first.placement.anchor.y - (first.point.circle.center.y + 10.0)).abs() < 1e-9);

        let last = g.last.unwrap();
        assert_eq!(last.row.year, 2000);
        assert!(g.markers.is_empty());
    }

    #[test]
    fn single_point_is_a_lone_last_marker() {
        let data = rows();
        let g = history_geometry(&[&data[2]], &[], &scales(), &HistoryConfig::default(), 10.0);
        assert!(g.line.is_none());
        assert!(g.first.is_none());
        assert_eq!(g.last.map(|p| p.row.year), Some(2000));
    }

    #[test]
    fn empty_trajectory_draws_nothing() {
        let g = history_geometry(&[], &[], &scales(), &HistoryConfig::default(), 10.0);
        assert_eq!(g, HistoryGeometry::default());
    }

    #[test]
    fn marker_arrow_starts_past_the_indicator() {
        let data = rows();
        let trajectory: Vec<&DataRow> = data.iter().collect();
        let markers = [MarkerYear::new(1918, "End of World War I (1918)")];
        let resolved = resolve_markers(&trajectory, &markers);
        let g = history_geometry(
            &trajectory,
            &resolved,
            &scales(),
            &HistoryConfig::default(),
            10.0,
        );

        assert_eq!(g.markers.len(), 1);
        let m = &g.markers[0];
        assert_eq!(m.year, 1918);
        assert_eq!(m.label, "End of World War I (1918)");
        let center = scales().position(&data[1]);
        assert_eq!(m.indicator, Circle::new(center, 6.0));

        let PathEl::MoveTo(start) = m.arrow.elements()[0] else {
            panic!("arrow must start with a move");
        };
        let PathEl::LineTo(end) = m.arrow.elements()[1] else {
            panic!("arrow shaft must be a line");
        };
        assert!((start.x - (center.x + 10.0)).abs() < 1e-9);
        assert!((end.x - (center.x + 34.0)).abs() < 1e-9);
        assert_eq!(start.y, center.y);
        assert_eq!(m.label_placement.anchor, end);
        assert_eq!(m.label_placement.text_anchor, TextAnchor::Start);
    }
}
