//! SVG rendering of an index.
//!
//! Draws every node boundary and every stored city, highlighting the city
//! matched by the last lookup. Canvas Y grows downward, so larger world Y
//! values are drawn lower on the picture.

use quadtree::{Entry, Index, Point};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

const MARGIN: f64 = 40.0;
const DOT_RADIUS: f64 = 3.0;
const CITY_COLOR: &str = "red";
const FOUND_COLOR: &str = "green";

/// Maps world coordinates to canvas pixels.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    origin: Point,
    scale: f64,
}

impl Viewport {
    fn new(index: &Index, size: u32) -> Self {
        let world = index.world();
        let longest = world.width().max(world.height());
        Self {
            origin: Point::new(world.x_min(), world.y_min()),
            scale: f64::from(size) / longest,
        }
    }

    #[inline]
    fn project(&self, p: Point) -> Point {
        (p - self.origin) * self.scale + Point::splat(MARGIN)
    }
}

/// Render `index` as an SVG document whose longer world side spans `size` pixels.
pub fn render_svg(index: &Index, size: u32) -> String {
    let view = Viewport::new(index, size);
    let world = index.world();
    let width = world.width() * view.scale + 2.0 * MARGIN;
    let height = world.height() * view.scale + 2.0 * MARGIN;
    let found = index.last_found();

    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.2} {height:.2}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="16">Quadtree Visualization</text>"#,
        width / 2.0,
        MARGIN * 0.6
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="12">X Coordinate</text>"#,
        width / 2.0,
        height - MARGIN * 0.25
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="12" transform="rotate(-90 {x:.2} {y:.2})">Y Coordinate</text>"#,
        x = MARGIN * 0.4,
        y = height / 2.0
    );

    for node in index.nodes() {
        let r = node.region();
        let top_left = view.project(Point::new(r.x_min(), r.y_min()));
        let _ = writeln!(
            svg,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
            top_left.x,
            top_left.y,
            r.width() * view.scale,
            r.height() * view.scale
        );
    }

    for node in index.nodes() {
        for city in node.entries() {
            write_city(&mut svg, &view, city, found == Some(city));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_city(svg: &mut String, view: &Viewport, city: &Entry, highlighted: bool) {
    let p = view.project(city.point());
    let color = if highlighted { FOUND_COLOR } else { CITY_COLOR };
    let _ = writeln!(
        svg,
        r#"  <circle cx="{:.2}" cy="{:.2}" r="{DOT_RADIUS}" fill="{color}"/>"#,
        p.x, p.y
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" text-anchor="end" font-size="11"> {}</text>"#,
        p.x,
        p.y - DOT_RADIUS,
        escape(city.label())
    );
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `index` and write the SVG to `path`.
pub fn write_svg(index: &Index, size: u32, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, render_svg(index, size))?;
    info!(
        "Wrote {} ({} nodes, {} cities)",
        path.display(),
        index.node_count(),
        index.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadtree::Region;

    fn populated() -> Index {
        let mut index = Index::new(Region::new(0.0, 0.0, 100.0, 100.0).unwrap(), 1).unwrap();
        index.insert(Entry::new("A", 10.0, 10.0)).unwrap();
        index.insert(Entry::new("B", 80.0, 60.0)).unwrap();
        index
    }

    #[test]
    fn test_draws_every_node_and_city() {
        let index = populated();
        let svg = render_svg(&index, 100);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<rect").count(), index.node_count());
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(!svg.contains(FOUND_COLOR));
    }

    #[test]
    fn test_has_title_and_axis_labels() {
        let svg = render_svg(&populated(), 100);

        assert!(svg.contains(">Quadtree Visualization</text>"));
        assert!(svg.contains(">X Coordinate</text>"));
        assert!(svg.contains(">Y Coordinate</text>"));
        assert!(svg.contains("rotate(-90"));
    }

    #[test]
    fn test_highlights_last_found() {
        let mut index = populated();
        index.find(Point::new(80.0, 60.0));
        let svg = render_svg(&index, 100);

        assert_eq!(svg.matches(r#"fill="green""#).count(), 1);
        assert_eq!(svg.matches(r#"fill="red""#).count(), 1);
        // 100 px world, 40 px margin: world (80, 60) lands at (120, 100).
        assert!(svg.contains(r#"<circle cx="120.00" cy="100.00" r="3" fill="green"/>"#));
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut index = populated();
        index.insert(Entry::new("<Ur & Co>", 30.0, 70.0)).unwrap();
        let svg = render_svg(&index, 100);

        assert!(svg.contains("&lt;Ur &amp; Co&gt;"));
    }
}
