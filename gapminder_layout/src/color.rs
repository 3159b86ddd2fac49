// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle colors.
//!
//! Rows are colored through a strategy `Fn(&DataRow) -> Color`. The default paints every
//! circle the same blue; [`continent_color`] looks up each country's continent and maps it
//! through an [`OrdinalColorScale`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;
use peniko::color::palette::css;

use crate::data::{DataRow, countries};

/// Color of circles when no strategy is given.
pub const DEFAULT_COLOR: Color = css::STEEL_BLUE;

/// Color for continents missing from the palette.
pub const UNKNOWN_COLOR: Color = css::BLACK;

/// Maps discrete categories to colors, in a fixed order.
#[derive(Clone, Debug)]
pub struct OrdinalColorScale {
    entries: Vec<(String, Color)>,
    index: HashMap<String, usize>,
    unknown: Color,
}

impl OrdinalColorScale {
    /// Creates a scale from ordered `(category, color)` pairs.
    ///
    /// A repeated category keeps its first position and color.
    pub fn new<S: Into<String>>(
        pairs: impl IntoIterator<Item = (S, Color)>,
        unknown: Color,
    ) -> Self {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        for (category, color) in pairs {
            let category = category.into();
            if index.contains_key(&category) {
                continue;
            }
            index.insert(category.clone(), entries.len());
            entries.push((category, color));
        }
        Self {
            entries,
            index,
            unknown,
        }
    }

    /// Returns the color of `category`, or the unknown color.
    pub fn color(&self, category: &str) -> Color {
        self.index
            .get(category)
            .map_or(self.unknown, |&i| self.entries[i].1)
    }

    /// Returns the fallback color.
    pub fn unknown(&self) -> Color {
        self.unknown
    }

    /// Categories and colors in order, e.g. for a legend.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.entries.iter().map(|(c, color)| (c.as_str(), *color))
    }

    /// Returns one legend item per category.
    pub fn legend(&self) -> Vec<LegendItem> {
        self.entries()
            .map(|(label, color)| LegendItem::new(label, color))
            .collect()
    }
}

/// One row of a color legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// The label shown next to the swatch.
    pub label: String,
    /// The swatch color.
    pub color: Color,
}

impl LegendItem {
    /// Creates a legend item.
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// The continent palette in legend order.
pub fn continent_palette() -> OrdinalColorScale {
    OrdinalColorScale::new(
        [
            ("Africa", css::MEDIUM_PURPLE),
            ("Asia", css::CRIMSON),
            ("Oceania", css::GOLDENROD),
            ("North America", css::TURQUOISE),
            ("South America", css::MEDIUM_SEA_GREEN),
            ("Europe", css::ROYAL_BLUE),
            ("Antarctica", css::TAN),
        ],
        UNKNOWN_COLOR,
    )
}

/// Country → continent side table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContinentLookup {
    map: HashMap<String, String>,
}

impl ContinentLookup {
    /// Creates an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the continent of a country, replacing any previous entry.
    pub fn insert(&mut self, country: impl Into<String>, continent: impl Into<String>) {
        self.map.insert(country.into(), continent.into());
    }

    /// Returns the continent of `country`.
    pub fn continent(&self, country: &str) -> Option<&str> {
        self.map.get(country).map(String::as_str)
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no country is recorded.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<C: Into<String>, K: Into<String>> FromIterator<(C, K)> for ContinentLookup {
    fn from_iter<T: IntoIterator<Item = (C, K)>>(iter: T) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(country, continent)| (country.into(), continent.into()))
                .collect(),
        }
    }
}

/// Countries sharing one continent, for a grouped country selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryGroup<'a> {
    /// The continent, or `None` for countries missing from the lookup.
    pub continent: Option<&'a str>,
    /// Country names in first-seen order.
    pub countries: Vec<&'a str>,
}

/// Groups the distinct countries of `rows` by continent.
///
/// Groups appear in the order their first country appears in `rows`.
pub fn countries_by_continent<'a>(
    rows: &'a [DataRow],
    lookup: &'a ContinentLookup,
) -> Vec<CountryGroup<'a>> {
    let mut groups: Vec<CountryGroup<'a>> = Vec::new();
    let mut index: HashMap<Option<&'a str>, usize> = HashMap::new();
    for country in countries(rows) {
        let continent = lookup.continent(country);
        let i = *index.entry(continent).or_insert_with(|| {
            groups.push(CountryGroup {
                continent,
                countries: Vec::new(),
            });
            groups.len() - 1
        });
        groups[i].countries.push(country);
    }
    groups
}

/// The default strategy: every row gets [`DEFAULT_COLOR`].
pub fn default_color(_row: &DataRow) -> Color {
    DEFAULT_COLOR
}

/// Colors rows by continent. Countries without a continent get the scale's unknown color.
pub fn continent_color<'a>(
    lookup: &'a ContinentLookup,
    scale: &'a OrdinalColorScale,
) -> impl Fn(&DataRow) -> Color + 'a {
    move |row: &DataRow| match lookup.continent(&row.country) {
        Some(continent) => scale.color(continent),
        None => scale.unknown(),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn ordinal_scale_falls_back_to_unknown() {
        let scale = OrdinalColorScale::new([("a", css::RED), ("b", css::GREEN)], css::GRAY);
        assert_eq!(scale.color("a"), css::RED);
        assert_eq!(scale.color("b"), css::GREEN);
        assert_eq!(scale.color("c"), css::GRAY);
    }

    #[test]
    fn repeated_categories_keep_first_entry() {
        let scale = OrdinalColorScale::new(
            [("a", css::RED), ("b", css::GREEN), ("a", css::BLUE)],
            css::GRAY,
        );
        assert_eq!(scale.color("a"), css::RED);
        let labels: Vec<&str> = scale.entries().map(|(c, _)| c).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn palette_legend_keeps_order() {
        let legend = continent_palette().legend();
        assert_eq!(legend.len(), 7);
        assert_eq!(legend[0].label, "Africa");
        assert_eq!(legend[5], LegendItem::new("Europe", css::ROYAL_BLUE));
    }

    #[test]
    fn rows_are_colored_by_continent() {
        let lookup: ContinentLookup = [("Chad", "Africa"), ("Peru", "South America")]
            .into_iter()
            .collect();
        let palette = continent_palette();
        let color = continent_color(&lookup, &palette);

        assert_eq!(color(&DataRow::new("Chad", 2000, 1.0, 1.0, 1.0)), css::MEDIUM_PURPLE);
        assert_eq!(color(&DataRow::new("Peru", 2000, 1.0, 1.0, 1.0)), css::MEDIUM_SEA_GREEN);
        assert_eq!(color(&DataRow::new("Atlantis", 2000, 1.0, 1.0, 1.0)), UNKNOWN_COLOR);
        assert_eq!(default_color(&DataRow::new("Chad", 2000, 1.0, 1.0, 1.0)), DEFAULT_COLOR);
    }

    #[test]
    fn countries_are_grouped_by_continent_in_first_seen_order() {
        let lookup: ContinentLookup = [
            ("Chad", "Africa"),
            ("Peru", "South America"),
            ("Mali", "Africa"),
        ]
        .into_iter()
        .collect();
        let rows = [
            DataRow::new("Peru", 2000, 1.0, 1.0, 1.0),
            DataRow::new("Chad", 2000, 1.0, 1.0, 1.0),
            DataRow::new("Atlantis", 2000, 1.0, 1.0, 1.0),
            DataRow::new("Peru", 2010, 1.0, 1.0, 1.0),
            DataRow::new("Mali", 2000, 1.0, 1.0, 1.0),
        ];

        let groups = countries_by_continent(&rows, &lookup);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].continent, Some("South America"));
        assert_eq!(groups[0].countries, vec!["Peru"]);
        assert_eq!(groups[1].continent, Some("Africa"));
        assert_eq!(groups[1].countries, vec!["Chad", "Mali"]);
        assert_eq!(groups[2].continent, None);
        assert_eq!(groups[2].countries, vec!["Atlantis"]);
    }

    #[test]
    fn lookup_insert_replaces() {
        let mut lookup = ContinentLookup::new();
        assert!(lookup.is_empty());
        lookup.insert("Russia", "Asia");
        lookup.insert("Russia", "Europe");
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.continent("Russia"), Some("Europe"));
        assert_eq!(lookup.continent("Mars"), None);
    }
}
