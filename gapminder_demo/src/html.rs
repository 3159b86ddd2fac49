// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML report wrapper around rendered SVG sections.

use gapminder_layout::LegendItem;

use crate::svg::escape_xml;

/// One titled block of the report.
#[derive(Debug)]
pub(crate) struct Section {
    pub(crate) title: String,
    pub(crate) notes: Vec<String>,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, legend: &[LegendItem], sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:2rem;max-width:1100px}\
         section{margin-bottom:2.5rem}svg{border:1px solid #eee}\
         .legend{list-style:none;padding:0;display:flex;gap:1rem}\
         .swatch{display:inline-block;width:.8rem;height:.8rem;\
         border-radius:50%;margin-right:.3rem}\
         .notes{color:#666;font-size:.85rem}</style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_xml(title)));

    out.push_str("<ul class=\"legend\">\n");
    for item in legend {
        let rgba = item.color.to_rgba8();
        out.push_str(&format!(
            "<li><span class=\"swatch\" style=\"background:#{:02x}{:02x}{:02x}\"></span>{}</li>\n",
            rgba.r,
            rgba.g,
            rgba.b,
            escape_xml(&item.label)
        ));
    }
    out.push_str("</ul>\n<p class=\"notes\">Circles sized by population estimates</p>\n");

    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_xml(&section.title)));
        for note in &section.notes {
            out.push_str(&format!("<p class=\"notes\">{}</p>\n", escape_xml(note)));
        }
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}
