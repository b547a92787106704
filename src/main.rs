//! Warband - Panel Walkthrough
//!
//! Spawns a race's worker from the data directory, plays a short sequence of
//! cursor input against the control panel and prints what each frame draws
//! along with the orders issued.

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use warband::core::error::{Result, WarbandError};
use warband::core::types::{EntityId, Race};
use warband::core::GameConfig;
use warband::renderer::{DrawCall, RecordingSurface};
use warband::skills::{BASE_GROUP, BUILD_GROUP};
use warband::ui::{Cursor, MouseButton, PanelOrder};
use warband::GameSession;

/// Frame duration used by the walkthrough, in milliseconds
const FRAME_MS: f64 = 1000.0 / 60.0;

/// Control panel walkthrough
#[derive(Parser, Debug)]
#[command(name = "warband")]
#[command(about = "Drive a worker's control panel headless and print the draw calls")]
struct Args {
    /// Data directory holding skills/, entities/ and launchers/
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Optional config file; its data paths are replaced by --data
    #[arg(long)]
    config: Option<PathBuf>,

    /// Race of the worker (human or orc)
    #[arg(long, default_value = "orc")]
    race: String,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

#[derive(Serialize)]
struct Frame {
    step: &'static str,
    group: usize,
    calls: Vec<DrawCall>,
}

#[derive(Serialize)]
struct Report {
    unit: String,
    frames: Vec<Frame>,
    orders: Vec<PanelOrder>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let race = Race::parse(&args.race)
        .ok_or_else(|| WarbandError::InvalidConfig(format!("unknown race {}", args.race)))?;

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    }
    .with_data_root(&args.data);

    let mut session = GameSession::new(config)?;
    let unit = session.spawn_worker(race)?;
    session.select(unit)?;

    let report = walkthrough(&mut session, unit)?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_text(&report),
    }
    Ok(())
}

/// Hover the base group, open the build menu, hover and place a farm
fn walkthrough(session: &mut GameSession, unit: EntityId) -> Result<Report> {
    let slot = |session: &GameSession, group: usize, priority: u32| -> Result<(i32, i32)> {
        session
            .units
            .get(unit)
            .and_then(|u| u.skill(group, priority))
            .map(|s| (s.x() + 1, s.y() + 1))
            .ok_or_else(|| {
                WarbandError::UnknownSkill(format!("group {} priority {}", group, priority))
            })
    };

    let mut frames = Vec::new();
    let mut g = RecordingSurface::new();
    let mut cursor = Cursor::new();

    let steps: [(&'static str, usize, u32, bool); 3] = [
        ("hover move", BASE_GROUP, 0, false),
        ("open build menu", BASE_GROUP, 2, true),
        ("pick farm", BUILD_GROUP, 0, true),
    ];
    for (step, group, priority, click) in steps {
        let (x, y) = slot(&*session, group, priority)?;
        cursor.move_to(x, y, &session.camera);
        if click {
            cursor.press(MouseButton::Left);
        }
        session.update(FRAME_MS, &cursor);
        cursor.end_frame();
        session.render(&mut g, &cursor);
        frames.push(Frame {
            step,
            group: session.panel.active_group(),
            calls: g.take(),
        });
    }

    // Place the farm in the middle of the map view
    cursor.move_to(192, 100, &session.camera);
    cursor.press(MouseButton::Left);
    session.update(FRAME_MS, &cursor);
    cursor.end_frame();
    session.render(&mut g, &cursor);
    frames.push(Frame {
        step: "place farm",
        group: session.panel.active_group(),
        calls: g.take(),
    });

    let kind = session
        .units
        .get(unit)
        .map(|u| u.kind.clone())
        .unwrap_or_default();
    Ok(Report {
        unit: kind,
        frames,
        orders: session.drain_orders(),
    })
}

fn print_text(report: &Report) {
    println!("=== {} ===", report.unit);
    for entry in &report.frames {
        println!("\n[{}] group {}", entry.step, entry.group);
        for call in &entry.calls {
            match call {
                DrawCall::Tile { sheet, frame, x, y } => {
                    println!("  tile  {:<28} #{} at ({}, {})", sheet, frame, x, y)
                }
                DrawCall::Image { name, x, y } => println!("  image {:<28} at ({}, {})", name, x, y),
                DrawCall::Text { content, x, y, .. } => {
                    println!("  text  {:<28} at ({}, {})", format!("{:?}", content), x, y)
                }
            }
        }
    }
    println!("\nOrders:");
    for order in &report.orders {
        println!(
            "  {:?} target {:?} cost {}g/{}w",
            order.order, order.target, order.cost.gold, order.cost.wood
        );
    }
}
