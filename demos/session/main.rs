//! Replays a scripted drawing session and prints the resulting walls.
//!
//! Usage:
//! ```text
//! cargo run --example session                  # merge + split
//! cargo run --example session -- --split-only  # split only
//! RUST_LOG=wallgrid=trace cargo run --example session
//! ```

use wallgrid::{DrawingSession, GridSnap, Point2, WallgridError};

/// Raw pointer strokes, as a grid collaborator would report them.
const STROKES: &[((f64, f64), (f64, f64))] = &[
    ((10.2, 10.1), (30.0, 9.8)),
    ((30.0, 10.0), (29.9, 30.3)),
    ((30.0, 30.0), (10.0, 30.0)),
    ((10.0, 30.0), (10.0, 10.0)),
    ((20.0, 5.0), (20.0, 35.0)),
    ((4.6, 20.0), (20.0, 20.0)),
    ((20.0, 20.0), (36.0, 20.0)),
    ((40.0, 40.0), (40.4, 40.2)),
];

fn main() -> Result<(), WallgridError> {
    // Default: WARN for everything, INFO for wallgrid.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("wallgrid=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let split_only = std::env::args().any(|arg| arg == "--split-only");
    let mut session = DrawingSession::new(GridSnap::new(100, 1)?).with_combine(!split_only);

    for &((x0, y0), (x1, y1)) in STROKES {
        match session.submit(Point2::new(x0, y0), Point2::new(x1, y1)) {
            Ok(segments) => println!("stroke ({x0}, {y0}) -> ({x1}, {y1}): {} segments", segments.len()),
            Err(err) => println!("stroke ({x0}, {y0}) -> ({x1}, {y1}) rejected: {err}"),
        }
    }

    println!("\nSegments:");
    for (i, segment) in session.segments().iter().enumerate() {
        println!("  ({}) {segment}", i + 1);
    }
    println!("\nJunctions:");
    for (i, point) in session.intersections().iter().enumerate() {
        println!("  ({}) ({}, {})", i + 1, point.x, point.y);
    }

    Ok(())
}
