// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text annotations attached to circles.
//!
//! An annotation is positioned relative to the circle it labels: beside it, above it, or
//! below it. Placement produces an anchor point, an offset, and a text anchor; the
//! renderer draws the text at `anchor + offset` without further coordinate math.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::chart_scales::ChartScales;
use crate::data::DataRow;
use crate::dimensions::Dimensions;

/// Horizontal gap between a circle and a right-placed label, in pixels.
pub const RIGHT_DX: f64 = 2.0;
/// Vertical shift of a right-placed label, in em. Centers the text on the anchor.
pub const RIGHT_DY_EM: f64 = 0.35;
/// Horizontal shift of a top-placed label, in pixels.
pub const TOP_DX: f64 = -10.0;
/// Vertical shift of a bottom-placed label, in em.
pub const BOTTOM_DY_EM: f64 = 1.0;

/// Where a label sits relative to its circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnnotationPosition {
    /// Right of the circle, vertically centered.
    #[default]
    Right,
    /// Above the circle, ending slightly left of its center.
    Top,
    /// Below the circle, horizontally centered.
    Bottom,
}

/// Horizontal text alignment relative to the text origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the origin.
    #[default]
    Start,
    /// Text is centered on the origin.
    Middle,
    /// Text ends at the origin.
    End,
}

impl TextAnchor {
    /// The SVG `text-anchor` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// A resolved label position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationPlacement {
    /// Point on the circle's edge the label is attached to.
    pub anchor: Point,
    /// Offset from the anchor to the text origin, in pixels.
    pub offset: Vec2,
    /// Alignment of the text relative to its origin.
    pub text_anchor: TextAnchor,
}

impl AnnotationPlacement {
    /// Returns `anchor + offset`.
    pub fn text_origin(&self) -> Point {
        self.anchor + self.offset
    }
}

impl AnnotationPosition {
    /// Places a label for the circle at `center` with radius `radius`.
    ///
    /// Offsets given in em are resolved against `font_size`.
    pub fn place(self, center: Point, radius: f64, font_size: f64) -> AnnotationPlacement {
        match self {
            Self::Right => AnnotationPlacement {
                anchor: Point::new(center.x + radius, center.y),
                offset: Vec2::new(RIGHT_DX, RIGHT_DY_EM * font_size),
                text_anchor: TextAnchor::Start,
            },
            Self::Top => AnnotationPlacement {
                anchor: Point::new(center.x, center.y - radius),
                offset: Vec2::new(TOP_DX, 0.0),
                text_anchor: TextAnchor::End,
            },
            Self::Bottom => AnnotationPlacement {
                anchor: Point::new(center.x, center.y + radius),
                offset: Vec2::new(0.0, BOTTOM_DY_EM * font_size),
                text_anchor: TextAnchor::Middle,
            },
        }
    }
}

/// Width available to an HTML overlay label whose left edge is at plot-space `x`.
///
/// The label may extend into the right margin.
pub fn html_available_width(dimensions: &Dimensions, x: f64) -> f64 {
    dimensions.bounded_width - x + dimensions.margins.right
}

/// Annotates one country at a given position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationRule {
    /// Country name.
    pub country: String,
    /// Label position.
    pub position: AnnotationPosition,
}

impl AnnotationRule {
    /// Annotates `country` to the right of its circle.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            position: AnnotationPosition::default(),
        }
    }

    /// Sets the label position.
    pub fn with_position(mut self, position: AnnotationPosition) -> Self {
        self.position = position;
        self
    }
}

/// A placed text annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation<'a> {
    /// The annotated row.
    pub row: &'a DataRow,
    /// Label text.
    pub text: &'a str,
    /// Resolved placement.
    pub placement: AnnotationPlacement,
}

/// Places labels for every row matched by a rule.
///
/// `rows` is expected in label draw order (see [`annotated_rows`](crate::annotated_rows)).
pub fn place_annotations<'a>(
    rows: &[&'a DataRow],
    rules: &[AnnotationRule],
    scales: &ChartScales,
    font_size: f64,
) -> Vec<Annotation<'a>> {
    rows.iter()
        .filter_map(|&row| {
            let rule = rules.iter().find(|rule| rule.country == row.country)?;
            Some(Annotation {
                row,
                text: row.country.as_str(),
                placement: rule
                    .position
                    .place(scales.position(row), scales.radius(row), font_size),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::dimensions::Margins;
    use crate::scale::{ScaleLinear, ScaleLog, ScaleSqrt};

    #[test]
    fn right_placement_starts_after_the_circle() {
        let p = AnnotationPosition::Right.place(Point::new(100.0, 50.0), 8.0, 10.0);
        assert_eq!(p.anchor, Point::new(108.0, 50.0));
        assert!((p.offset - Vec2::new(2.0, 3.5)).hypot() < 1e-9);
        assert_eq!(p.text_anchor, TextAnchor::Start);
        assert!(p.text_origin().distance(Point::new(110.0, 53.5)) < 1e-9);
    }

    #[test]
    fn top_placement_ends_left_of_center() {
        let p = AnnotationPosition::Top.place(Point::new(100.0, 50.0), 8.0, 10.0);
        assert_eq!(p.anchor, Point::new(100.0, 42.0));
        assert_eq!(p.text_origin(), Point::new(90.0, 42.0));
        assert_eq!(p.text_anchor, TextAnchor::End);
    }

    #[test]
    fn bottom_placement_is_centered_one_line_below() {
        let p = AnnotationPosition::Bottom.place(Point::new(100.0, 50.0), 8.0, 12.0);
        assert_eq!(p.anchor, Point::new(100.0, 58.0));
        assert_eq!(p.text_origin(), Point::new(100.0, 70.0));
        assert_eq!(p.text_anchor.as_str(), "middle");
    }

    #[test]
    fn html_width_extends_into_right_margin() {
        let d = Dimensions::new(500.0, 300.0, Margins::new(0.0, 30.0, 0.0, 20.0));
        assert_eq!(d.bounded_width, 450.0);
        assert_eq!(html_available_width(&d, 400.0), 80.0);
    }

    #[test]
    fn only_rows_with_rules_are_annotated() {
        let scales = ChartScales {
            x: ScaleLog::new((1.0, 1_000.0), (0.0, 300.0)),
            y: ScaleLinear::new((0.0, 100.0), (100.0, 0.0)),
            r: ScaleSqrt::new((0.0, 100.0), (0.0, 10.0)),
        };
        let qatar = DataRow::new("Qatar", 2000, 10.0, 75.0, 1.0);
        let china = DataRow::new("China", 2000, 100.0, 70.0, 100.0);
        let chad = DataRow::new("Chad", 2000, 1.0, 50.0, 25.0);
        let rules = vec![
            AnnotationRule::new("Qatar"),
            AnnotationRule::new("China").with_position(AnnotationPosition::Top),
        ];

        let out = place_annotations(&[&qatar, &chad, &china], &rules, &scales, 10.0);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "Qatar");
        assert!(out[0].placement.anchor.distance(Point::new(101.0, 25.0)) < 1e-9);
        assert_eq!(out[1].text, "China");
        assert!(out[1].placement.anchor.distance(Point::new(200.0, 20.0)) < 1e-9);
        assert_eq!(out[1].placement.text_anchor, TextAnchor::End);
    }
}
