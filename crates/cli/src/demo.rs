//! Interactive walkthrough of figures and both container flavours.
//!
//! Reads vertices from `input` (whitespace-separated, any line layout) and
//! writes the narrative to `out`. An invalid figure aborts the walkthrough;
//! out-of-range probes are expected and only reported.

use std::io::{BufRead, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use figures::{Figure, FigureArray, FigureKind, Pentagon, Rhombus, Shape, SharedFigureArray};

use crate::input::Tokens;

pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<()> {
    let mut tokens = Tokens::new(input);
    shared_section(&mut tokens, out)?;
    owned_section(&mut tokens, out)?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W, kind: FigureKind) -> Result<()> {
    writeln!(
        out,
        "Enter {} vertices of the {kind} (x y) in order:",
        kind.vertex_count()
    )?;
    out.flush()?;
    Ok(())
}

fn shared_section<I, W>(tokens: &mut I, out: &mut W) -> Result<()>
where
    I: Iterator<Item = String>,
    W: Write,
{
    let mut figures: SharedFigureArray<Figure> = SharedFigureArray::new();

    writeln!(out, "=== Vertices for 3 polymorphic figures ===")?;
    for (i, kind) in FigureKind::ALL.into_iter().enumerate() {
        writeln!(out, "\nFigure {i} - {kind}")?;
        prompt(out, kind)?;
        let mut figure: Figure = Figure::empty(kind);
        figure
            .read(tokens)
            .with_context(|| format!("reading figure {i}"))?;
        tracing::info!(index = i, %kind, area = figure.surface(), "figure stored");
        figures.push(Rc::new(figure));
    }

    writeln!(out, "\n=== Stored figures and their areas ===")?;
    write!(out, "{}", figures.surface_report())?;
    writeln!(out, "\n=== Centers ===")?;
    write!(out, "{}", figures.center_report())?;
    writeln!(
        out,
        "\nTotal area of the polymorphic container = {:.2}",
        figures.total_surface()
    )?;

    writeln!(out, "\n=== Operators ===")?;
    let verdict = if figures.get(0)? == figures.get(1)? {
        "equals"
    } else {
        "differs from"
    };
    writeln!(out, "Figure 0 {verdict} figure 1")?;
    writeln!(out, "Area of figure 0 = {:.2}", f64::from(&**figures.get(0)?))?;

    writeln!(out, "\n=== Copy and move (rhombus) ===")?;
    prompt(out, FigureKind::Rhombus)?;
    let mut rh1 = Rhombus::<f64>::default();
    rh1.read(tokens).context("reading rhombus")?;
    copy_and_move(out, "rhombus", rh1)?;

    writeln!(out, "\nRemoving figure 1...")?;
    figures.remove(1)?;
    write!(out, "{}", figures.surface_report())?;

    writeln!(out, "\nAccessing figure 10:")?;
    probe(out, figures.get(10).map(|f| f.to_string()))?;
    Ok(())
}

fn owned_section<I, W>(tokens: &mut I, out: &mut W) -> Result<()>
where
    I: Iterator<Item = String>,
    W: Write,
{
    writeln!(out, "\n=== Value container: FigureArray<Pentagon> ===")?;
    let mut pentagons: FigureArray<Pentagon> = FigureArray::new();
    for _ in 0..3 {
        pentagons.push(Pentagon::default());
    }
    for i in 0..pentagons.len() {
        writeln!(out, "\nPentagon {i}")?;
        prompt(out, FigureKind::Pentagon)?;
        pentagons
            .get_mut(i)?
            .read(tokens)
            .with_context(|| format!("reading pentagon {i}"))?;
    }

    writeln!(out, "\nPentagons and their areas:")?;
    write!(out, "{}", pentagons.surface_report())?;
    writeln!(out, "\nPentagon centers:")?;
    write!(out, "{}", pentagons.center_report())?;
    writeln!(
        out,
        "\nTotal area of the pentagons = {:.2}",
        pentagons.total_surface()
    )?;

    let verdict = if pentagons.get(0)? == pentagons.get(1)? {
        "equals"
    } else {
        "differs from"
    };
    writeln!(out, "\nPentagon 0 {verdict} pentagon 1")?;

    writeln!(out, "\nCopy and move (pentagon):")?;
    prompt(out, FigureKind::Pentagon)?;
    let mut p1 = Pentagon::<f64>::default();
    p1.read(tokens).context("reading pentagon")?;
    copy_and_move(out, "pentagon", p1)?;

    writeln!(out, "\nRemoving pentagon 1...")?;
    pentagons.remove(1)?;
    writeln!(out, "Remaining pentagons:")?;
    write!(out, "{}", pentagons.surface_report())?;

    writeln!(out, "Accessing pentagon 9...")?;
    probe(out, pentagons.get(9).map(|p| p.to_string()))?;
    Ok(())
}

fn copy_and_move<S, W>(out: &mut W, name: &str, mut original: S) -> Result<()>
where
    S: Shape + Clone + Default + std::fmt::Display,
    W: Write,
{
    writeln!(out, "Original {name}:\n{original}")?;
    let copy = original.clone();
    writeln!(out, "After copy:\n{copy}")?;
    let moved = std::mem::take(&mut original);
    writeln!(out, "After move:\n{moved}")?;
    writeln!(out, "Moved-from {name}:\n{original}")?;
    Ok(())
}

fn probe<W: Write>(out: &mut W, lookup: Result<String, figures::IndexOutOfRange>) -> Result<()> {
    match lookup {
        Ok(s) => writeln!(out, "{s}")?,
        Err(e) => {
            tracing::warn!(index = e.index, len = e.len, "out of range");
            writeln!(out, "Out of range: {e}")?;
        }
    }
    Ok(())
}
