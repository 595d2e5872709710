//! Runs a handful of kernel queries and logs the results.
//!
//! Usage:
//! ```text
//! cargo run --example intersections
//! RUST_LOG=geometria=trace cargo run --example intersections   # show merge diagnostics
//! ```

use geometria::math::{circle_2d, line_2d, segment_2d, vector_2d};
use geometria::{RectangleQuery, Vector};
use tracing::info;

fn main() {
    // Default: WARN for everything, INFO for the demo and the kernel.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geometria=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("intersections=info".parse().unwrap_or_default())
        .add_directive("geometria=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let origin = Vector::new(0.0_f32, 0.0);
    match line_2d::intersect_line(&origin, &Vector::new(1.0, 0.0), &Vector::new(0.5, -1.0), &Vector::new(0.0, 1.0)) {
        Some(hit) => info!(point = ?hit.point, t = hit.t, "line/line"),
        None => info!("line/line: parallel"),
    }

    let tangent = segment_2d::intersect_circle(1.0_f32, &Vector::new(-2.0, 1.0), &Vector::new(2.0, 1.0));
    info!(points = ?tangent.map(|hits| vector_2d::flatten(hits.points())), "tangent segment/circle");

    let queries = [
        ("crossing", RectangleQuery::new(Vector::new(2.0_f32, 0.0), Vector::new(1.5, 10.0))),
        ("enclosed", RectangleQuery::new(Vector::new(0.0, 0.0), Vector::new(0.1, 0.1))),
        ("disjoint", RectangleQuery::new(Vector::new(4.0, -1.0), Vector::new(0.5, 0.5))),
        (
            "rotated",
            RectangleQuery::new(Vector::new(0.0, 2.0), Vector::new(1.5, 10.0)).with_angle(std::f32::consts::FRAC_PI_2),
        ),
    ];
    for (case, query) in queries {
        match query.intersect_circle(1.0) {
            Some(hits) if hits.is_empty() => info!(case, "rectangle inside circle"),
            Some(hits) => info!(case, points = ?vector_2d::flatten(hits.points()), "circle/rectangle"),
            None => info!(case, "no intersection"),
        }
    }

    let inside = circle_2d::contains_polygon(1.0_f32, &[Vector::new(0.5, 0.5), Vector::new(-0.5, 0.5)]);
    info!(inside, "contains polygon");
}
