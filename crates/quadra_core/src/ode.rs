use crate::error::EngineError;
use crate::eval::{compile_expression, Bytecode, EquationSystem, OpCode};
use crate::solvers::Euler;
use crate::traits::{Steppable, VectorField};
use serde::Serialize;

/// Marker that selects the differential-equation path, matched
/// case-insensitively.
pub const ODE_TOKEN: &str = "dy/dx";

/// Fixed initial condition and discretization. The solver always starts
/// at (0, 1) and takes 100 steps of 0.1, yielding 101 samples.
pub const INITIAL_X: f64 = 0.0;
pub const INITIAL_Y: f64 = 1.0;
pub const STEP_SIZE: f64 = 0.1;
pub const STEP_COUNT: usize = 100;

/// One sample of the discretized solution curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OdePoint {
    pub x: f64,
    pub y: f64,
}

/// Case-insensitive ASCII substring search. Returns a byte offset, which
/// is always a character boundary because only ASCII bytes can match.
fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if haystack.len() < needle.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

pub fn is_ode(text: &str) -> bool {
    find_ascii_ci(text, ODE_TOKEN).is_some()
}

/// Strips the first `dy/dx` token and the first `=` from the input,
/// leaving the right-hand side f(x, y).
pub fn right_hand_side(text: &str) -> String {
    let mut rhs = text.to_string();
    if let Some(pos) = find_ascii_ci(&rhs, ODE_TOKEN) {
        rhs.replace_range(pos..pos + ODE_TOKEN.len(), "");
    }
    if let Some(pos) = rhs.find('=') {
        rhs.remove(pos);
    }
    rhs.trim().to_string()
}

/// Solves dy/dx = f(x, y) by forward Euler from the fixed initial
/// condition.
///
/// The state vector is [x, y] with equations [1, f]: advancing x with unit
/// slope makes a single Euler step perform exactly the update
/// y += h * f(x, y); x += h. Each loop iteration records the current
/// sample and then steps, so the derivative is also evaluated once past
/// the final recorded sample; a failure there still fails the solve.
pub fn solve_ode(text: &str) -> Result<Vec<OdePoint>, EngineError> {
    let rhs = right_hand_side(text);
    let slope = compile_expression(&rhs, &["x", "y"])?;
    let unit = Bytecode {
        ops: vec![OpCode::LoadConst(1.0)],
    };
    let field = EquationSystem::new(vec![unit, slope]);

    let mut stepper = Euler::new(field.dimension());
    let mut t = INITIAL_X;
    let mut state = [INITIAL_X, INITIAL_Y];
    let mut points = Vec::with_capacity(STEP_COUNT + 1);

    for _ in 0..=STEP_COUNT {
        points.push(OdePoint {
            x: state[0],
            y: state[1],
        });
        stepper.step(&field, &mut t, &mut state, STEP_SIZE);
        if !state[1].is_finite() {
            return Err(EngineError::eval(format!(
                "Differential equation produced a non-finite value near x = {}",
                state[0]
            )));
        }
    }

    Ok(points)
}
