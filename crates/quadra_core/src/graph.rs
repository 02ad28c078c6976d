use crate::error::EngineError;
use crate::eval::{compile_expression, execute_checked, Bytecode};
use crate::integral;
use crate::ode::{self, OdePoint};
use serde::Serialize;
use std::cmp::Ordering;

/// Sampling window and resolution: x = -10, -9.9, ..., 10. Generated by
/// index so the grid hits round values (notably x = 0) exactly.
pub const X_MIN: f64 = -10.0;
pub const X_MAX: f64 = 10.0;
pub const X_STEP: f64 = 0.1;

/// Maximum distance between a graph x and a computed ODE sample for that
/// sample to be plotted at x.
pub const ODE_LOOKUP_TOLERANCE: f64 = 0.1;

/// One plottable point. `y: None` marks the function as undefined or
/// non-finite there; the chart renders it as a gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub x: f64,
    pub y: Option<f64>,
}

/// An ordered point sequence over the sampling window.
pub type Curve = Vec<Sample>;

/// How each graph point gets its y value.
enum PointSource {
    /// Evaluate a compiled expression at x directly. Used for plain
    /// expressions and for integral input, which plots the first factor's
    /// raw integrand rather than an accumulated integral.
    Direct(Bytecode),
    /// Look up the nearest sample of a pre-solved ODE curve.
    Lookup(Vec<OdePoint>),
    /// Setup failed; every point is a gap.
    Broken,
}

/// Samples the input over the graph window, dispatching on notation.
///
/// Never fails: a setup failure (unparseable integral, unknown symbol,
/// failed ODE solve) degrades the whole curve to gaps, and a per-point
/// failure or non-finite value degrades that point only.
pub fn sample(text: &str) -> Curve {
    let source = build_source(text).unwrap_or(PointSource::Broken);

    let steps = ((X_MAX - X_MIN) / X_STEP).round() as usize;
    let mut stack = Vec::with_capacity(16);
    let mut curve = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let x = X_MIN + i as f64 * X_STEP;
        let y = point_at(&source, x, &mut stack).filter(|value| value.is_finite());
        curve.push(Sample { x, y });
    }
    curve
}

fn build_source(text: &str) -> Result<PointSource, EngineError> {
    if integral::has_marker(text) {
        let first = integral::split_factors(text).next().unwrap_or("");
        let spec = integral::parse_integral(first)?;
        let code = compile_expression(&spec.integrand, &["x"])?;
        return Ok(PointSource::Direct(code));
    }
    if ode::is_ode(text) {
        let points = ode::solve_ode(text)?;
        return Ok(PointSource::Lookup(points));
    }
    let code = compile_expression(text, &["x"])?;
    Ok(PointSource::Direct(code))
}

fn point_at(source: &PointSource, x: f64, stack: &mut Vec<f64>) -> Option<f64> {
    match source {
        PointSource::Direct(code) => execute_checked(code, &[x], stack).ok(),
        PointSource::Lookup(points) => points
            .iter()
            .filter(|p| (p.x - x).abs() < ODE_LOOKUP_TOLERANCE)
            .min_by(|a, b| {
                (a.x - x)
                    .abs()
                    .partial_cmp(&(b.x - x).abs())
                    .unwrap_or(Ordering::Equal)
            })
            .map(|p| p.y),
        PointSource::Broken => None,
    }
}
