// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive chart dimensions.
//!
//! A [`DimensionObserver`] stands in for a resize observer attached to the chart's
//! container. The host forwards content-box measurements with
//! [`DimensionObserver::notify`]; each accepted notification replaces the current
//! [`Dimensions`] wholesale and hands the new value to every subscribed handler.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Rect;

/// Fixed chart margins, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Space above the plot area.
    pub top: f64,
    /// Space right of the plot area.
    pub right: f64,
    /// Space below the plot area.
    pub bottom: f64,
    /// Space left of the plot area.
    pub left: f64,
}

impl Margins {
    /// Creates margins from all four sides.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sets the top margin.
    pub fn with_top(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    /// Sets the right margin.
    pub fn with_right(mut self, right: f64) -> Self {
        self.right = right;
        self
    }

    /// Sets the bottom margin.
    pub fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = bottom;
        self
    }

    /// Sets the left margin.
    pub fn with_left(mut self, left: f64) -> Self {
        self.left = left;
        self
    }
}

/// A measured viewport with its margin-adjusted plot area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    /// Measured width.
    pub width: f64,
    /// Measured (or derived) height.
    pub height: f64,
    /// Margins the plot area is inset by.
    pub margins: Margins,
    /// `max(width - left - right, 0)`.
    pub bounded_width: f64,
    /// `max(height - top - bottom, 0)`.
    pub bounded_height: f64,
}

impl Dimensions {
    /// Computes dimensions for a measured size.
    ///
    /// The bounded size is clamped at zero, so a not-yet-measured (zero-sized) container
    /// never produces a negative plot area.
    pub fn new(width: f64, height: f64, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
            bounded_width: (width - margins.left - margins.right).max(0.0),
            bounded_height: (height - margins.top - margins.bottom).max(0.0),
        }
    }

    /// Returns the plot area in container coordinates.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.top,
            self.margins.left + self.bounded_width,
            self.margins.top + self.bounded_height,
        )
    }
}

/// How the chart height is obtained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sizing {
    /// Width and height are both measured from the container.
    Measured,
    /// The container has a fixed height; only the width is measured.
    FixedHeight(f64),
    /// The height follows the measured width: `clamp(width * ratio, min_height, max_height)`.
    AspectRatio {
        /// Height-to-width ratio.
        ratio: f64,
        /// Lower bound for the derived height.
        min_height: f64,
        /// Upper bound for the derived height.
        max_height: f64,
    },
}

impl Sizing {
    fn resolve(self, measured: ContentRect) -> (f64, f64) {
        match self {
            Self::Measured => (measured.width, measured.height),
            Self::FixedHeight(height) => (measured.width, height),
            Self::AspectRatio {
                ratio,
                min_height,
                max_height,
            } => {
                let height = (measured.width * ratio).max(min_height).min(max_height);
                (measured.width, height)
            }
        }
    }
}

/// A content-box measurement delivered by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentRect {
    /// Content-box width.
    pub width: f64,
    /// Content-box height.
    pub height: f64,
}

impl ContentRect {
    /// Creates a measurement.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Handle returned by [`DimensionObserver::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&Dimensions)>;

/// Tracks a container's size and republishes margin-adjusted [`Dimensions`].
pub struct DimensionObserver {
    sizing: Sizing,
    current: Dimensions,
    observing: bool,
    handlers: Vec<(SubscriptionId, Handler)>,
    next_id: u64,
}

impl core::fmt::Debug for DimensionObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DimensionObserver")
            .field("sizing", &self.sizing)
            .field("current", &self.current)
            .field("observing", &self.observing)
            .field("handlers", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl DimensionObserver {
    /// Creates a detached observer with zero-sized dimensions.
    pub fn new(margins: Margins, sizing: Sizing) -> Self {
        let (width, height) = sizing.resolve(ContentRect::default());
        Self {
            sizing,
            current: Dimensions::new(width, height, margins),
            observing: false,
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the current dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.current
    }

    /// Returns `true` between [`observe`](Self::observe) and [`unobserve`](Self::unobserve).
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Starts accepting size notifications.
    pub fn observe(&mut self) {
        self.observing = true;
    }

    /// Stops accepting size notifications. Later notifications are dropped.
    pub fn unobserve(&mut self) {
        self.observing = false;
    }

    /// Registers a handler invoked with every new [`Dimensions`] value.
    pub fn subscribe(&mut self, handler: impl FnMut(&Dimensions) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Removes a handler. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Delivers a batch of measurements.
    ///
    /// Only the first entry is used; an empty batch, or a batch delivered while not
    /// observing, is ignored. Returns the new dimensions if they were recomputed.
    pub fn notify(&mut self, entries: &[ContentRect]) -> Option<Dimensions> {
        if !self.observing {
            return None;
        }
        let entry = *entries.first()?;
        let (width, height) = self.sizing.resolve(entry);
        let next = Dimensions::new(width, height, self.current.margins);
        self.current = next;
        for (_, handler) in &mut self.handlers {
            handler(&next);
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    use super::*;

    #[test]
    fn bounded_size_is_never_negative() {
        let margins = Margins::new(30.0, 40.0, 50.0, 60.0);
        for (w, h) in [(0.0, 0.0), (10.0, 10.0), (100.0, 79.0), (1e6, 1e6)] {
            let d = Dimensions::new(w, h, margins);
            assert!(d.bounded_width >= 0.0, "{d:?}");
            assert!(d.bounded_height >= 0.0, "{d:?}");
        }
        let d = Dimensions::new(300.0, 200.0, margins);
        assert_eq!(d.bounded_width, 200.0);
        assert_eq!(d.bounded_height, 120.0);
    }

    #[test]
    fn missing_margin_sides_default_to_zero() {
        let margins = Margins::default().with_bottom(20.0).with_left(20.0);
        let d = Dimensions::new(400.0, 400.0, margins);
        assert_eq!(d.bounded_width, 380.0);
        assert_eq!(d.bounded_height, 380.0);
        assert_eq!(d.plot_rect(), Rect::new(20.0, 0.0, 400.0, 380.0));
    }

    #[test]
    fn observer_starts_at_zero_and_ignores_notifications_until_observing() {
        let mut obs =
            DimensionObserver::new(Margins::new(10.0, 10.0, 10.0, 10.0), Sizing::Measured);
        assert_eq!(obs.dimensions().width, 0.0);
        assert_eq!(obs.dimensions().bounded_width, 0.0);
        assert_eq!(obs.notify(&[ContentRect::new(200.0, 100.0)]), None);

        obs.observe();
        let d = obs.notify(&[ContentRect::new(200.0, 100.0)]).unwrap();
        assert_eq!(d.bounded_width, 180.0);
        assert_eq!(d.bounded_height, 80.0);
        assert_eq!(obs.dimensions(), d);
    }

    #[test]
    fn empty_batches_are_ignored_and_first_entry_wins() {
        let mut obs = DimensionObserver::new(Margins::default(), Sizing::Measured);
        obs.observe();
        assert_eq!(obs.notify(&[]), None);
        let d = obs
            .notify(&[ContentRect::new(50.0, 60.0), ContentRect::new(1.0, 1.0)])
            .unwrap();
        assert_eq!((d.width, d.height), (50.0, 60.0));
    }

    #[test]
    fn aspect_ratio_height_is_clamped() {
        let sizing = Sizing::AspectRatio {
            ratio: 0.5,
            min_height: 200.0,
            max_height: 500.0,
        };
        let mut obs = DimensionObserver::new(Margins::default(), sizing);
        obs.observe();
        let small = obs.notify(&[ContentRect::new(300.0, 999.0)]).unwrap();
        assert_eq!(small.height, 200.0);
        let mid = obs.notify(&[ContentRect::new(800.0, 999.0)]).unwrap();
        assert_eq!(mid.height, 400.0);
        let large = obs.notify(&[ContentRect::new(2000.0, 999.0)]).unwrap();
        assert_eq!(large.height, 500.0);
    }

    #[test]
    fn fixed_height_ignores_measured_height() {
        let mut obs = DimensionObserver::new(Margins::default(), Sizing::FixedHeight(400.0));
        assert_eq!(obs.dimensions().height, 400.0);
        obs.observe();
        let d = obs.notify(&[ContentRect::new(640.0, 12.0)]).unwrap();
        assert_eq!((d.width, d.height), (640.0, 400.0));
    }

    #[test]
    fn handlers_see_each_new_value_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(vec![]));
        let mut obs = DimensionObserver::new(Margins::default(), Sizing::Measured);
        let sink = Rc::clone(&seen);
        let id = obs.subscribe(move |d| sink.borrow_mut().push(d.width));
        obs.observe();

        obs.notify(&[ContentRect::new(100.0, 10.0)]);
        obs.notify(&[ContentRect::new(120.0, 10.0)]);
        assert!(obs.unsubscribe(id));
        assert!(!obs.unsubscribe(id));
        obs.notify(&[ContentRect::new(140.0, 10.0)]);

        assert_eq!(*seen.borrow(), vec![100.0, 120.0]);
        assert_eq!(obs.dimensions().width, 140.0);
    }

    #[test]
    fn unobserve_stops_updates() {
        let mut obs = DimensionObserver::new(Margins::default(), Sizing::Measured);
        obs.observe();
        obs.notify(&[ContentRect::new(100.0, 100.0)]);
        obs.unobserve();
        assert!(!obs.is_observing());
        assert_eq!(obs.notify(&[ContentRect::new(5.0, 5.0)]), None);
        assert_eq!(obs.dimensions().width, 100.0);
    }
}
