// src/graph/svg.rs

//! SVG serialization of a [`GraphLayout`].
//!
//! Edges are drawn before nodes so arrows end underneath the circles.

use std::fmt::Write;

use crate::graph::layout::{CANVAS_HEIGHT, CANVAS_WIDTH, CENTER_X, CENTER_Y, GraphLayout};

pub const NODE_RADIUS: f64 = 22.0;

const EDGE_STROKE: &str = "rgba(148,163,184,0.75)";
const ARROW_FILL: &str = "rgba(148,163,184,0.9)";
const NODE_STROKE: &str = "rgba(15,23,42,1)";
const ID_FILL: &str = "#0b1120";
const TITLE_FILL: &str = "rgba(148,163,184,0.9)";

pub const EMPTY_STATE_TEXT: &str = "No tasks to visualize yet.";

pub fn render_svg(layout: &GraphLayout) -> String {
    let mut out = String::new();
    write_svg(&mut out, layout).expect("fmt::Write for String is infallible");
    out
}

fn write_svg(out: &mut String, layout: &GraphLayout) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}">"#
    )?;

    if layout.is_empty() {
        writeln!(
            out,
            r#"  <text x="{CENTER_X}" y="{CENTER_Y}" text-anchor="middle" font-size="12" fill="{TITLE_FILL}">{EMPTY_STATE_TEXT}</text>"#
        )?;
        return writeln!(out, "</svg>");
    }

    writeln!(out, "  <defs>")?;
    writeln!(
        out,
        r#"    <marker id="arrowhead" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse">"#
    )?;
    writeln!(out, r#"      <path d="M 0 0 L 10 5 L 0 10 z" fill="{ARROW_FILL}"/>"#)?;
    writeln!(out, "    </marker>")?;
    writeln!(out, "  </defs>")?;

    for edge in &layout.edges {
        writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{EDGE_STROKE}" stroke-width="1.5" marker-end="url(#arrowhead)"/>"#,
            edge.from_pos.x, edge.from_pos.y, edge.to_pos.x, edge.to_pos.y
        )?;
    }

    for node in &layout.nodes {
        let (x, y) = (node.position.x, node.position.y);
        let id = if node.id.is_empty() { "?" } else { node.id.as_str() };

        writeln!(out, "  <g>")?;
        writeln!(
            out,
            r#"    <circle cx="{x}" cy="{y}" r="{NODE_RADIUS}" fill="{}" stroke="{NODE_STROKE}" stroke-width="2"/>"#,
            node.class.fill()
        )?;
        writeln!(
            out,
            r#"    <text x="{x}" y="{}" text-anchor="middle" dominant-baseline="central" font-size="11" font-weight="700" fill="{ID_FILL}">{}</text>"#,
            y - 2.0,
            escape_xml(id)
        )?;
        writeln!(
            out,
            r#"    <text x="{x}" y="{}" text-anchor="middle" font-size="9" fill="{TITLE_FILL}">{}</text>"#,
            y + 24.0,
            escape_xml(&node.label)
        )?;
        writeln!(out, "  </g>")?;
    }

    writeln!(out, "</svg>")
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
