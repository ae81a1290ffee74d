//! Runs a handful of vector and line computations and logs the results.
//!
//! ```text
//! cargo run --example walkthrough
//! RUST_LOG=geodec=trace cargo run --example walkthrough
//! ```

use geodec::{Line, LineIntersection, Result, Vector};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this demo and geodec.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("walkthrough=info".parse().unwrap_or_default())
        .add_directive("geodec=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let v = Vector::parse(&["-7.579", "-7.88"])?;
    let w = Vector::parse(&["22.737", "23.64"])?;
    tracing::info!(
        %v,
        %w,
        parallel = v.is_parallel_to(&w)?,
        orthogonal = v.is_orthogonal_to(&w)?,
        "vector predicates"
    );

    let a = Vector::parse(&["8.462", "7.893", "-8.187"])?;
    let b = Vector::parse(&["6.984", "-5.975", "4.778"])?;
    tracing::info!(
        cross = %a.cross(&b)?,
        parallelogram = %a.area_of_parallelogram(&b)?,
        triangle = %a.area_of_triangle(&b)?,
        "cross product"
    );

    let pairs = [
        (
            Line::parse(&["4.046", "2.836"], "1.21")?,
            Line::parse(&["10.115", "7.09"], "3.025")?,
        ),
        (
            Line::parse(&["7.204", "3.182"], "8.68")?,
            Line::parse(&["8.172", "4.114"], "9.883")?,
        ),
        (
            Line::parse(&["1.182", "5.562"], "6.744")?,
            Line::parse(&["1.773", "8.343"], "9.525")?,
        ),
    ];
    for (first, second) in &pairs {
        match first.intersection_with(second)? {
            Some(LineIntersection::Coincident(line)) => {
                tracing::info!(%first, %second, "coincident along {line}");
            }
            Some(LineIntersection::Point(p)) => {
                tracing::info!(%first, %second, x = %p.x.round(3), y = %p.y.round(3), "single point");
            }
            None => tracing::info!(%first, %second, "no intersection"),
        }
    }

    Ok(())
}
