mod scene;

use anyhow::Context;
use strata_engine::logging::{LoggingConfig, init_logging};
use strata_symbolizer::{RecordingContext, StrokeAndFillSymbolizer, applies};

use scene::Scene;

const USAGE: &str = "usage: strata-preview <scene.json> [log-filter]";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().context(USAGE)?;
    init_logging(args.next().map(LoggingConfig::with_filter).unwrap_or_default());

    let text = std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    let scene = Scene::from_json_str(&text).with_context(|| format!("failed to load scene {path}"))?;
    log::info!(
        "scene {path}: {:?}, {} style keys, {} patterns",
        scene.geometry.kind,
        scene.symbol.len(),
        scene.patterns.len()
    );

    if !applies(Some(&scene.symbol), scene.geometry.kind) {
        println!("  symbol does not apply to {:?}; nothing to draw", scene.geometry.kind);
        return Ok(());
    }

    let painter = scene.painter();
    let mut symbolizer = StrokeAndFillSymbolizer::new(&scene.symbol, &scene.geometry, &painter);
    let mut ctx = RecordingContext::new();
    symbolizer.symbolize(&mut ctx, Some(&scene.patterns));

    println!();
    println!("  {} draw calls, {} commands", ctx.draw_call_count(), ctx.commands().len());
    for cmd in ctx.commands() {
        println!("    {cmd:?}");
    }

    // ── culling extent ────────────────────────────────────────────────────
    match symbolizer.get_2d_extent() {
        Some(e) => println!("  extent: x {:.1}..{:.1}  y {:.1}..{:.1}", e.xmin, e.xmax, e.ymin, e.ymax),
        None => println!("  extent: none"),
    }
    println!();
    Ok(())
}
