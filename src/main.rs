//! Geo-Plotting Kommandozeile.
//!
//! Erzeugt ein Symbol aus Kontrollpunkten und gibt den Umriss aus:
//! `geo-plotting <symbol> <x,y> <x,y> ...`

use anyhow::{bail, Context};
use geo_plotting::{DrawingSession, HaversineGeodesy, PlottingOptions, SessionEvent, SymbolKind};
use glam::DVec2;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Geo-Plotting v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let Some(name) = args.next() else {
        print_usage();
        return Ok(());
    };
    let kind = SymbolKind::from_name(&name)
        .with_context(|| format!("Unbekanntes Symbol '{}'", name))?;
    let points = args
        .map(|arg| parse_point(&arg))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if points.len() < kind.min_points() {
        bail!(
            "{} braucht mindestens {} Punkte, erhalten: {}",
            kind,
            kind.min_points(),
            points.len()
        );
    }

    let options = PlottingOptions::load_from_file(&PlottingOptions::config_path());
    let mut session = DrawingSession::new(options, Box::new(HaversineGeodesy));
    session.handle_event(SessionEvent::SelectTool(kind))?;
    for pos in points {
        session
            .handle_event(SessionEvent::PointerClick { pos })
            .with_context(|| format!("Punkt ({}, {}) abgelehnt", pos.x, pos.y))?;
    }

    for shape in session.layer().iter() {
        println!("# {} #{}", shape.kind, shape.id);
        for p in shape.outline.points() {
            println!("{} {}", p.x, p.y);
        }
    }
    Ok(())
}

fn parse_point(arg: &str) -> anyhow::Result<DVec2> {
    let (x, y) = arg
        .split_once(',')
        .with_context(|| format!("Punkt '{}' erwartet als x,y", arg))?;
    let x: f64 = x.trim().parse().with_context(|| format!("Ungültiges x in '{}'", arg))?;
    let y: f64 = y.trim().parse().with_context(|| format!("Ungültiges y in '{}'", arg))?;
    Ok(DVec2::new(x, y))
}

fn print_usage() {
    println!("Verwendung: geo-plotting <symbol> <x,y> <x,y> ...");
    println!("Symbole:");
    for kind in SymbolKind::ALL {
        println!("  {:<16} ab {} Punkten", kind.name(), kind.min_points());
    }
}
