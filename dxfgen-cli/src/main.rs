//! dxfgen - demo CLI that plots a sample drawing with dxfgen-core.
//!
//! The library is the product; this binary only exercises the public
//! encoder surface with a fixed set of figures and writes the result to a
//! DXF file that any AC1009-capable viewer can open.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dxfgen_core::{Document, Entity};

/// Plot a sample 2D drawing as an ASCII DXF file.
#[derive(Parser, Debug)]
#[command(name = "dxfgen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output DXF file path
    #[arg(default_value = "test.dxf")]
    output: PathBuf,

    /// Print the demo entities as JSON instead of writing DXF
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// The demo drawing: three circles, a horizontal line, the arc closing it
/// into a half-stadium, and a trapezoid outline on its own layer.
fn demo_entities() -> Vec<Entity<f32>> {
    let arc_radius = (200.0 - 35.0 - 35.0) / 2.0;
    vec![
        Entity::Circle {
            radius: 100.0,
            x: 100.0,
            y: 100.0,
            width: 0.0,
            layer: 0,
        },
        Entity::Circle {
            radius: 20.0,
            x: 200.0 - 64.0,
            y: 145.0,
            width: 3.0,
            layer: 0,
        },
        Entity::Circle {
            radius: 20.0,
            x: 64.0,
            y: 145.0,
            width: 0.0,
            layer: 0,
        },
        Entity::Line {
            x1: 35.0,
            y1: 75.0,
            x2: 200.0 - 35.0,
            y2: 75.0,
            width: 0.0,
            layer: 0,
        },
        Entity::Arc {
            center_x: 100.0,
            center_y: 75.0,
            radius: arc_radius,
            start_angle_deg: 180.0,
            end_angle_deg: 360.0,
            width: 0.0,
            layer: 0,
        },
        Entity::Polyline {
            xs: vec![0.0, 0.0, 300.0, 300.0],
            ys: vec![0.0, 200.0, 200.0, 0.0],
            width: 10.0,
            layer: 2,
            closed: true,
        },
    ]
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let entities = demo_entities();

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&entities)?;
        println!("{}", json);
        return Ok(());
    }

    let mut dxf = Document::<f32>::new();
    dxf.begin(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    for entity in &entities {
        dxf.write_entity(entity)
            .with_context(|| format!("Failed to encode {}", entity.type_name()))?;
    }

    dxf.end()
        .with_context(|| format!("Failed to finalize {}", args.output.display()))?;

    info!("Generated: {}", args.output.display());

    Ok(())
}
