//! Print a few sampled figures with their areas and centers.
//!
//! Usage:
//!   cargo run -p figures --example gallery -- [seed]

use figures::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let cfg = SampleCfg {
        random_phase: false,
        ..SampleCfg::default()
    };
    for (index, kind) in FigureKind::ALL.into_iter().enumerate() {
        match draw_figure(kind, cfg, ReplayToken { seed, index: index as u64 }) {
            Ok(f) => println!(
                "{kind}: area = {:.2}, center = {:.2}\n  {f:.3}",
                f.surface(),
                f.center()
            ),
            Err(e) => eprintln!("{e}"),
        }
    }
}
