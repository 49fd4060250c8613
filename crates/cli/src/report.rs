//! Figure summaries for `inspect` and `report` (plain text or JSON).

use std::io::BufRead;
use std::rc::Rc;

use anyhow::{Context, Result};
use figures::{Coord, Figure, FigureKind, Shape, SharedFigureArray};
use serde::Serialize;

/// One figure, flattened for JSON output.
#[derive(Debug, Serialize)]
pub struct FigureSummary {
    pub kind: &'static str,
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
    pub center: [f64; 2],
}

impl FigureSummary {
    pub fn of<S: Shape>(shape: &S) -> Self {
        let c = shape.center();
        Self {
            kind: shape.kind().name(),
            vertices: shape
                .vertices()
                .iter()
                .map(|p| [p.x.as_f64(), p.y.as_f64()])
                .collect(),
            area: shape.surface(),
            center: [c.x.as_f64(), c.y.as_f64()],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub figures: Vec<FigureSummary>,
    pub total_area: f64,
}

impl Report {
    pub fn of(figures: &SharedFigureArray<Figure>) -> Self {
        Self {
            figures: figures.iter().map(FigureSummary::of).collect(),
            total_area: figures.total_surface(),
        }
    }
}

/// `"<kind>: <vertices>"`, then area and center with two decimals.
pub fn describe(figure: &Figure) -> String {
    format!(
        "{}: {figure}\narea = {:.2}\ncenter = {:.2}\n",
        figure.kind(),
        figure.surface(),
        figure.center()
    )
}

/// Text report: areas, centers, total.
pub fn render_text(figures: &SharedFigureArray<Figure>) -> String {
    format!(
        "=== areas ===\n{}=== centers ===\n{}total area = {:.2}\n",
        figures.surface_report(),
        figures.center_report(),
        figures.total_surface()
    )
}

/// Parse `"<kind> x1 y1 x2 y2 ..."`; blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Figure>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (name, coords) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let kind: FigureKind = name.parse()?;
    Ok(Some(Figure::parse(kind, coords)?))
}

/// Read one figure per line into a shared-handle array; bad lines are logged and skipped.
pub fn load<R: BufRead>(reader: R) -> Result<SharedFigureArray<Figure>> {
    let mut figures = SharedFigureArray::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", n + 1))?;
        match parse_line(&line) {
            Ok(Some(f)) => figures.push(Rc::new(f)),
            Ok(None) => {}
            Err(e) => tracing::warn!(line = n + 1, error = %e, "skipping figure"),
        }
    }
    Ok(figures)
}
