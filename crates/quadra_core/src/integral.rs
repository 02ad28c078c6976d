use crate::error::EngineError;
use crate::eval::{compile_expression, execute_checked, Bytecode};
use crate::quadrature;
use regex::Regex;
use serde::Serialize;

/// Glyph that marks integral notation in raw input.
pub const INTEGRAL_MARKER: char = '∫';

/// Integration bounds. Every fold runs over the unit interval; the
/// notation carries no user-supplied bounds.
pub const LOWER_BOUND: f64 = 0.0;
pub const UPPER_BOUND: f64 = 1.0;

// Glyph, optional integrand text (anything but the letter d), then the
// differential marker and its variable letter.
const INTEGRAL_PATTERN: &str = r"(?i)∫\s*([^d]*)\s*d([a-z])";

/// One integral extracted from input text: the innermost integrand and the
/// integration variables in outer-to-inner order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegralSpec {
    pub integrand: String,
    pub variables: Vec<String>,
}

/// A solved multiplicative factor of an integral input.
#[derive(Debug, Clone, Serialize)]
pub struct IntegralFactor {
    pub source: String,
    pub value: f64,
    pub order: usize,
}

/// Result of solving a full integral input: the product of all factors
/// plus each factor's own value and fold count.
#[derive(Debug, Clone, Serialize)]
pub struct IntegralSolution {
    pub total: f64,
    pub factors: Vec<IntegralFactor>,
}

pub fn has_marker(text: &str) -> bool {
    text.contains(INTEGRAL_MARKER)
}

/// Splits input on `*` into independent multiplicative factors. The split
/// is purely textual and ignores parenthesization, so a `*` inside an
/// integrand splits too; factor results are multiplied back together by
/// `solve_integral`.
pub fn split_factors(text: &str) -> impl Iterator<Item = &str> {
    text.split('*').map(str::trim)
}

/// Extracts the integral structure from `text`.
///
/// The first marker match supplies the outermost variable. When further
/// matches exist, the first match is replaced by its bare integrand and
/// the remainder re-parsed, so each round peels one variable off the left.
/// The innermost round's integrand is the one that survives. This includes
/// texts where a marker glyph ends up inside a captured integrand; the
/// recursion is defined by the pattern, not by balanced notation.
pub fn parse_integral(text: &str) -> Result<IntegralSpec, EngineError> {
    let re = Regex::new(INTEGRAL_PATTERN).expect("hard-coded pattern compiles");

    let match_count = re.find_iter(text).count();
    let caps = match re.captures(text) {
        Some(caps) => caps,
        None => return Err(EngineError::parse("No valid integral found")),
    };
    let Some(whole) = caps.get(0) else {
        return Err(EngineError::parse("No valid integral found"));
    };

    let integrand = caps[1].trim().to_string();
    let variable = caps[2].to_lowercase();

    if match_count > 1 {
        let remaining = format!(
            "{}{}{}",
            &text[..whole.start()],
            integrand,
            &text[whole.end()..]
        );
        let nested = parse_integral(&remaining)?;
        let mut variables = vec![variable];
        variables.extend(nested.variables);
        return Ok(IntegralSpec {
            integrand: nested.integrand,
            variables,
        });
    }

    Ok(IntegralSpec {
        integrand,
        variables: vec![variable],
    })
}

/// Evaluates a (possibly nested) integral over the unit hypercube.
///
/// The integrand is compiled once against the full variable list; each
/// fold fixes its variable in the shared state vector and integrates the
/// next level, so inner evaluations see every enclosing binding. A
/// duplicate variable letter resolves to the innermost fold's slot.
pub fn solve_nested(spec: &IntegralSpec) -> Result<f64, EngineError> {
    let names: Vec<&str> = spec.variables.iter().map(String::as_str).collect();
    let code = compile_expression(&spec.integrand, &names)?;
    let mut state = vec![0.0; spec.variables.len()];
    let mut stack = Vec::with_capacity(16);
    integrate_level(&code, 0, &mut state, &mut stack)
}

fn integrate_level(
    code: &Bytecode,
    depth: usize,
    state: &mut Vec<f64>,
    stack: &mut Vec<f64>,
) -> Result<f64, EngineError> {
    if depth == state.len() {
        return execute_checked(code, state, stack);
    }
    quadrature::integrate(
        |v| {
            state[depth] = v;
            integrate_level(code, depth + 1, state, stack)
        },
        LOWER_BOUND,
        UPPER_BOUND,
    )
}

/// Solves every `*`-separated factor of an integral input and multiplies
/// the results, keeping each factor's value and fold order for the report.
pub fn solve_integral(text: &str) -> Result<IntegralSolution, EngineError> {
    let mut total = 1.0;
    let mut factors = Vec::new();

    for part in split_factors(text) {
        let spec = parse_integral(part)?;
        let value = solve_nested(&spec)?;
        total *= value;
        factors.push(IntegralFactor {
            source: part.to_string(),
            value,
            order: spec.variables.len(),
        });
    }

    Ok(IntegralSolution { total, factors })
}
