use crate::error::EngineError;
use crate::eval::evaluate;
use crate::integral::{self, IntegralFactor};
use crate::ode::{self, OdePoint};
use crate::validate::validate;
use serde::Serialize;
use std::fmt;

/// Results whose magnitude falls below this are displayed as exactly 0,
/// suppressing floating-point noise like sin(pi) ≈ 1.2e-16.
pub const ZERO_EPSILON: f64 = 1e-10;

/// Structured outcome of a solve request, serialized across the
/// presentation boundary. `Display` renders the textual form shown in the
/// result area.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Solution {
    /// Plain arithmetic input, zero-snapped.
    Value { value: f64 },
    /// Integral input: the product of all factors plus per-factor detail.
    Integral {
        total: f64,
        factors: Vec<IntegralFactor>,
    },
    /// Differential-equation input: the discretized solution curve.
    OdeCurve { points: Vec<OdePoint> },
}

/// Snaps near-zero results to exactly 0 for display.
pub fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < ZERO_EPSILON {
        0.0
    } else {
        value
    }
}

/// Validates the input and dispatches on its notation: integral glyph,
/// `dy/dx` marker, or plain arithmetic with no bindings.
pub fn solve(input: &str) -> Result<Solution, EngineError> {
    validate(input)?;

    if integral::has_marker(input) {
        let solution = integral::solve_integral(input)?;
        return Ok(Solution::Integral {
            total: solution.total,
            factors: solution.factors,
        });
    }

    if ode::is_ode(input) {
        return Ok(Solution::OdeCurve {
            points: ode::solve_ode(input)?,
        });
    }

    let value = snap_to_zero(evaluate(input, &[])?);
    Ok(Solution::Value { value })
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Value { value } => write!(f, "{value}"),
            Solution::Integral { total, factors } => {
                write!(f, "Result = {total:.6}\n\nDetails:")?;
                for factor in factors {
                    write!(
                        f,
                        "\n{} ({}-fold integral) = {:.6}",
                        factor.source, factor.order, factor.value
                    )?;
                }
                Ok(())
            }
            Solution::OdeCurve { points } => {
                for (i, point) in points.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "x = {:.1}, y = {:.6}", point.x, point.y)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{snap_to_zero, solve, Solution};
    use crate::error::EngineError;
    use crate::quadrature::integrate;

    fn assert_validation(input: &str, needle: &str) {
        match solve(input) {
            Err(EngineError::Validation(message)) => {
                assert!(
                    message.contains(needle),
                    "expected \"{needle}\" in \"{message}\""
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn solves_plain_arithmetic() {
        match solve("2+2").unwrap() {
            Solution::Value { value } => assert_eq!(value, 4.0),
            other => panic!("expected value, got {other:?}"),
        }
    }

    #[test]
    fn plain_display_is_the_bare_number() {
        assert_eq!(solve("2+2").unwrap().to_string(), "4");
        assert_eq!(solve("7/2").unwrap().to_string(), "3.5");
    }

    #[test]
    fn near_zero_results_snap_to_zero() {
        assert_eq!(snap_to_zero(5e-11), 0.0);
        assert_eq!(snap_to_zero(-5e-11), 0.0);
        assert_eq!(snap_to_zero(2e-10), 2e-10);

        // sin(pi) is ~1.2e-16, well under the snap threshold.
        assert_eq!(solve("sin(pi)").unwrap().to_string(), "0");
        assert_eq!(solve("0.0000000000001").unwrap().to_string(), "0");
    }

    #[test]
    fn validation_runs_before_any_numeric_work() {
        assert_validation("", "Expression cannot be empty");
        assert_validation("(2+3", "Unmatched opening parenthesis");
        assert_validation("2+3)", "Unmatched closing parenthesis");
        assert_validation("2++2", "Invalid operator: ++");
        assert_validation("∫ x dx)", "Unmatched closing parenthesis");
    }

    #[test]
    fn unbound_variables_fail_plain_solve() {
        match solve("x+1") {
            Err(EngineError::Eval(message)) => assert!(message.contains("Unknown variable")),
            other => panic!("expected eval error, got {other:?}"),
        }
    }

    #[test]
    fn integral_input_reports_total_and_factors() {
        let solution = solve("∫ x dx").unwrap();
        let single = integrate(|v| Ok(v), 0.0, 1.0).unwrap();
        match &solution {
            Solution::Integral { total, factors } => {
                assert_eq!(total.to_bits(), single.to_bits());
                assert_eq!(factors.len(), 1);
                assert_eq!(factors[0].order, 1);
            }
            other => panic!("expected integral, got {other:?}"),
        }

        let expected = format!(
            "Result = {single:.6}\n\nDetails:\n∫ x dx (1-fold integral) = {single:.6}"
        );
        assert_eq!(solution.to_string(), expected);
    }

    #[test]
    fn factor_products_are_reported_per_factor() {
        let solution = solve("∫ x dx * ∫ y dy").unwrap();
        match solution {
            Solution::Integral { factors, .. } => {
                assert_eq!(factors.len(), 2);
                assert_eq!(factors[0].source, "∫ x dx");
                assert_eq!(factors[1].source, "∫ y dy");
            }
            other => panic!("expected integral, got {other:?}"),
        }
    }

    #[test]
    fn ode_input_yields_the_full_curve() {
        match solve("dy/dx = y").unwrap() {
            Solution::OdeCurve { points } => {
                assert_eq!(points.len(), 101);
                assert_eq!(points[0].x, 0.0);
                assert_eq!(points[0].y, 1.0);
            }
            other => panic!("expected curve, got {other:?}"),
        }
    }

    #[test]
    fn missing_integral_marker_is_a_parse_error() {
        // The glyph routes to the integral path, but the pattern also
        // needs a differential; without one the parse fails cleanly.
        match solve("∫ x") {
            Err(EngineError::Parse(message)) => {
                assert_eq!(message, "No valid integral found");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn repeated_solves_are_bit_identical() {
        let first = solve("∫ sin(x) dx").unwrap();
        let second = solve("∫ sin(x) dx").unwrap();
        match (first, second) {
            (
                Solution::Integral { total: a, .. },
                Solution::Integral { total: b, .. },
            ) => assert_eq!(a.to_bits(), b.to_bits()),
            other => panic!("expected integrals, got {other:?}"),
        }
    }
}
