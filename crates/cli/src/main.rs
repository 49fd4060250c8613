use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use figures::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod input;
mod report;

#[derive(Parser)]
#[command(name = "figures")]
#[command(about = "Validate, measure and collect regular figures", version = figures::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Guided walkthrough reading vertices from stdin
    Demo,
    /// Validate one figure and print its area and center
    Inspect {
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// Coordinates `x0 y0 x1 y1 ...`; read from stdin when omitted
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        coords: Vec<String>,
    },
    /// Read `<kind> x0 y0 ...` lines from stdin and summarize them
    Report {
        #[arg(long)]
        json: bool,
        /// Drop the figure at this index before summarizing
        #[arg(long)]
        remove: Option<usize>,
    },
    /// Print the coordinates of a reproducible valid figure
    Sample {
        #[arg(long, value_enum)]
        kind: KindArg,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = SampleCfg::default().radius_min)]
        radius_min: f64,
        #[arg(long, default_value_t = SampleCfg::default().radius_max)]
        radius_max: f64,
        #[arg(long, default_value_t = SampleCfg::default().center_span)]
        center_span: f64,
        /// Keep the first vertex on the positive x axis
        #[arg(long)]
        no_phase: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Rhombus,
    Pentagon,
    Hexagon,
}

impl From<KindArg> for FigureKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Rhombus => FigureKind::Rhombus,
            KindArg::Pentagon => FigureKind::Pentagon,
            KindArg::Hexagon => FigureKind::Hexagon,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => {
            let stdout = io::stdout();
            demo::run(io::stdin().lock(), &mut stdout.lock())
        }
        Action::Inspect { kind, json, coords } => inspect(kind.into(), json, coords),
        Action::Report { json, remove } => run_report(json, remove),
        Action::Sample {
            kind,
            seed,
            index,
            radius_min,
            radius_max,
            center_span,
            no_phase,
        } => {
            let cfg = SampleCfg {
                radius_min,
                radius_max,
                center_span,
                random_phase: !no_phase,
            };
            sample(kind.into(), cfg, ReplayToken { seed, index })
        }
    }
}

fn inspect(kind: FigureKind, json: bool, coords: Vec<String>) -> Result<()> {
    let raw = if coords.is_empty() {
        io::read_to_string(io::stdin()).context("reading stdin")?
    } else {
        coords.join(" ")
    };
    tracing::info!(%kind, tokens = raw.split_whitespace().count(), "inspect");
    let figure: Figure = Figure::parse(kind, &raw)?;
    let mut out = io::stdout().lock();
    if json {
        let summary = report::FigureSummary::of(&figure);
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write!(out, "{}", report::describe(&figure))?;
    }
    Ok(())
}

fn run_report(json: bool, remove: Option<usize>) -> Result<()> {
    let mut figures = report::load(io::stdin().lock())?;
    if let Some(i) = remove {
        figures.remove(i)?;
        tracing::info!(index = i, remaining = figures.len(), "removed");
    }
    let mut out = io::stdout().lock();
    if json {
        let rep = report::Report::of(&figures);
        writeln!(out, "{}", serde_json::to_string_pretty(&rep)?)?;
    } else {
        write!(out, "{}", report::render_text(&figures))?;
    }
    Ok(())
}

fn sample(kind: FigureKind, cfg: SampleCfg, tok: ReplayToken) -> Result<()> {
    let figure = draw_figure(kind, cfg, tok).context("drawing sample")?;
    tracing::info!(%kind, seed = tok.seed, index = tok.index, area = figure.surface(), "sample");
    let line: Vec<String> = figure
        .vertices()
        .iter()
        .flat_map(|p| [p.x.to_string(), p.y.to_string()])
        .collect();
    writeln!(io::stdout().lock(), "{}", line.join(" "))?;
    Ok(())
}
