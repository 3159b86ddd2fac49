// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders Gapminder chart frames into an HTML report.
//!
//! The demo plays the page around the engine: it owns the data, forwards simulated
//! container resizes to a [`DimensionObserver`](gapminder_layout::DimensionObserver), and
//! draws each computed frame as SVG.

mod html;
mod svg;

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use gapminder_layout::{
    ChartConfig, ContentRect, ContinentLookup, DataRow, Dimensions, GapminderChart, ViewRequest,
    continent_color, continent_palette, countries, countries_by_continent,
};

use crate::html::Section;

const OUTPUT: &str = "gapminder_demo.html";

fn main() -> Result<(), Box<dyn Error>> {
    let data = demo_data();
    let continents = demo_continents();
    let palette = continent_palette();
    let chart = GapminderChart::new(ChartConfig::gapminder());
    let font_size = chart.config().font_size;

    // Every accepted resize lands here; frames are recomputed from each value.
    let seen = Rc::new(RefCell::new(Vec::<Dimensions>::new()));
    let mut observer = chart.observer();
    let sink = Rc::clone(&seen);
    let subscription = observer.subscribe(move |d| sink.borrow_mut().push(*d));

    // Delivered before attaching, so it is dropped.
    observer.notify(&[ContentRect::new(320.0, 0.0)]);
    observer.observe();
    observer.notify(&[]);
    for width in [960.0, 640.0, 0.0] {
        observer.notify(&[ContentRect::new(width, 0.0)]);
    }
    observer.unsubscribe(subscription);
    observer.notify(&[ContentRect::new(1_100.0, 0.0)]);
    observer.unobserve();

    let mut sections = Vec::new();
    for dims in seen.borrow().iter() {
        let frame = chart.frame(
            &data,
            dims,
            &ViewRequest::default(),
            continent_color(&continents, &palette),
        )?;
        sections.push(Section {
            title: format!("Most recent year at {} px", dims.width),
            notes: vec![format!(
                "plot area {} x {}, {} countries, {} labels",
                dims.bounded_width,
                dims.bounded_height,
                frame.circles.len(),
                frame.annotations.len()
            )],
            svg: svg::render_frame(&frame, font_size),
        });
    }

    let dims = observer.dimensions();
    let snapshot_1945 = chart.frame(
        &data,
        &dims,
        &ViewRequest::year(1945),
        continent_color(&continents, &palette),
    )?;
    sections.push(Section {
        title: "1945".to_string(),
        notes: vec![format!("{} countries", snapshot_1945.circles.len())],
        svg: svg::render_frame(&snapshot_1945, font_size),
    });

    for country in ["China", "United States", "Qatar", "Atlantis"] {
        let frame = chart.frame(
            &data,
            &dims,
            &ViewRequest::country(country),
            continent_color(&continents, &palette),
        )?;
        let note = match &frame.trail {
            Some(trail) => format!(
                "history of {} points, {} marker years",
                frame.view.rows().len(),
                trail.geometry.markers.len()
            ),
            None => "not enough history; showing the most recent year".to_string(),
        };
        sections.push(Section {
            title: format!("Highlighted: {country}"),
            notes: vec![note],
            svg: svg::render_frame(&frame, font_size),
        });
    }

    let groups = countries_by_continent(&data, &continents);
    sections.push(Section {
        title: "Countries by continent".to_string(),
        notes: groups
            .iter()
            .map(|group| {
                format!(
                    "{}: {}",
                    group.continent.unwrap_or("Unknown"),
                    group.countries.join(", ")
                )
            })
            .collect(),
        svg: String::new(),
    });

    let title = format!("Wealth & Health of Nations ({} countries)", countries(&data).len());
    let html = html::render_report(&title, &palette.legend(), &sections);
    std::fs::write(OUTPUT, html)?;
    println!("wrote {OUTPUT}");
    Ok(())
}

fn demo_continents() -> ContinentLookup {
    [
        ("China", "Asia"),
        ("India", "Asia"),
        ("Qatar", "Asia"),
        ("North Korea", "Asia"),
        ("Russia", "Europe"),
        ("Sweden", "Europe"),
        ("United States", "North America"),
        ("Brazil", "South America"),
        ("Nigeria", "Africa"),
        ("Equatorial Guinea", "Africa"),
        ("Central African Republic", "Africa"),
        ("Australia", "Oceania"),
    ]
    .into_iter()
    .collect()
}

/// Rounded figures: income per person, life expectancy, population.
fn demo_data() -> Vec<DataRow> {
    let rows: &[(&str, i32, f64, f64, f64)] = &[
        ("China", 1918, 960.0, 32.0, 4.7e8),
        ("China", 1945, 840.0, 32.0, 5.3e8),
        ("China", 1980, 1_060.0, 64.5, 9.8e8),
        ("China", 2000, 3_680.0, 71.7, 1.29e9),
        ("China", 2018, 16_000.0, 76.9, 1.42e9),
        ("India", 1918, 980.0, 22.3, 2.5e8),
        ("India", 1945, 950.0, 31.0, 3.3e8),
        ("India", 1980, 1_240.0, 53.3, 7.0e8),
        ("India", 2000, 2_550.0, 62.6, 1.06e9),
        ("India", 2018, 6_890.0, 69.4, 1.35e9),
        ("United States", 1918, 9_480.0, 39.1, 1.03e8),
        ("United States", 1945, 17_500.0, 65.2, 1.4e8),
        ("United States", 1980, 30_500.0, 73.8, 2.3e8),
        ("United States", 2000, 48_600.0, 76.9, 2.82e8),
        ("United States", 2018, 55_300.0, 79.1, 3.27e8),
        ("Russia", 1945, 3_460.0, 38.8, 9.8e7),
        ("Russia", 1980, 16_300.0, 67.4, 1.39e8),
        ("Russia", 2018, 24_800.0, 72.6, 1.44e8),
        ("Sweden", 1918, 6_570.0, 40.0, 5.8e6),
        ("Sweden", 1945, 11_300.0, 68.3, 6.6e6),
        ("Sweden", 1980, 28_000.0, 75.9, 8.3e6),
        ("Sweden", 2018, 47_000.0, 82.6, 1.0e7),
        ("Brazil", 1945, 2_130.0, 44.3, 4.5e7),
        ("Brazil", 1980, 11_300.0, 62.7, 1.22e8),
        ("Brazil", 2018, 14_300.0, 75.7, 2.09e8),
        ("Nigeria", 1945, 1_240.0, 32.0, 2.7e7),
        ("Nigeria", 1980, 3_860.0, 46.5, 7.3e7),
        ("Nigeria", 2018, 5_340.0, 64.6, 1.96e8),
        ("Equatorial Guinea", 1980, 1_320.0, 48.1, 2.2e5),
        ("Equatorial Guinea", 2018, 22_300.0, 65.0, 1.3e6),
        ("Central African Republic", 1980, 1_190.0, 47.9, 2.3e6),
        ("Central African Republic", 2018, 660.0, 49.7, 4.7e6),
        ("North Korea", 1980, 2_580.0, 63.0, 1.7e7),
        ("North Korea", 2018, 1_390.0, 71.9, 2.56e7),
        ("Qatar", 2018, 116_000.0, 80.5, 2.8e6),
        ("Australia", 1918, 8_240.0, 56.4, 5.3e6),
        ("Australia", 1945, 11_900.0, 67.1, 7.4e6),
        ("Australia", 2018, 45_800.0, 82.9, 2.5e7),
    ];
    rows.iter()
        .map(|&(country, year, gdp, life, population)| {
            DataRow::new(country, year, gdp, life, population)
        })
        .collect()
}
