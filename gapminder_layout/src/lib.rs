// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate and layout engine for Gapminder-style "wealth and health" charts.
//!
//! Countries are plotted by income (x, log scale), life expectancy (y, linear) and
//! population (circle radius, square-root so area tracks population). This crate owns the
//! math between a data set and pixels:
//! - **Dimensions**: margin-adjusted viewport size, updated from resize notifications.
//! - **Scales** map data values into screen coordinates.
//! - **Views** pick the rows to draw: one year for every country, or one country's history.
//! - **Guides**: axis ticks with labels, marker years, annotation placement, arrows.
//!
//! [`GapminderChart::frame`] composes all of it into a [`ChartFrame`] that a renderer
//! draws without further coordinate math. Rendering and text layout are out of scope.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod annotation;
mod arrow;
mod chart;
mod chart_scales;
mod color;
mod config;
mod data;
mod dimensions;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod history;
mod scale;
mod ticks;
mod view;

pub use annotation::{
    Annotation, AnnotationPlacement, AnnotationPosition, AnnotationRule, BOTTOM_DY_EM, RIGHT_DX,
    RIGHT_DY_EM, TOP_DX, TextAnchor, html_available_width, place_annotations,
};
pub use arrow::{ArrowHead, arrow_barbs, arrow_path};
pub use chart::{ChartFrame, CircleGlyph, GapminderChart, Trail, ViewRequest};
pub use chart_scales::{
    Channel, ChartScales, DEFAULT_RANGE_R, ScaleError, ScaleOverrides, build_scales,
};
pub use color::{
    ContinentLookup, CountryGroup, DEFAULT_COLOR, LegendItem, OrdinalColorScale, UNKNOWN_COLOR,
    continent_color, continent_palette, countries_by_continent, default_color,
};
pub use config::{ChartConfig, DEFAULT_FONT_SIZE};
pub use data::{DataRow, Field, countries, extent, max_year};
pub use dimensions::{
    ContentRect, DimensionObserver, Dimensions, Margins, Sizing, SubscriptionId,
};
pub use format::{TickFormat, format_number};
pub use history::{
    HistoryConfig, HistoryGeometry, HistoryPoint, HistoryStart, MarkerGeometry, history_geometry,
};
pub use scale::{
    DEFAULT_TICK_COUNT, ScaleContinuous, ScaleLinear, ScaleLog, ScaleSqrt, nice_domain,
    nice_ticks,
};
pub use ticks::{
    AxisTick, MarkerYear, ResolvedMarker, axis_ticks, plan_major_ticks, plan_ticks,
    resolve_markers,
};
pub use view::{
    MIN_TRAJECTORY_POINTS, ViewSelection, annotated_rows, resolve_year, select_view, snapshot,
    trajectory,
};
