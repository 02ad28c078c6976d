use crate::error::EngineError;

/// Operator sequences rejected outright. `^` is the power operator here,
/// so a doubled `*` or `/` is never meaningful input.
const FORBIDDEN_OPERATORS: [&str; 5] = ["++", "--", "**", "//", "=="];

/// Checks raw input before any numeric work: non-empty, balanced
/// parentheses, no doubled operators. The graph sampler skips this and
/// degrades bad input to gaps instead.
pub fn validate(input: &str) -> Result<(), EngineError> {
    if input.trim().is_empty() {
        return Err(EngineError::validation("Expression cannot be empty"));
    }

    let mut depth = 0usize;
    for c in input.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Err(EngineError::validation("Unmatched closing parenthesis"));
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    if depth > 0 {
        return Err(EngineError::validation("Unmatched opening parenthesis"));
    }

    for op in FORBIDDEN_OPERATORS {
        if input.contains(op) {
            return Err(EngineError::validation(format!("Invalid operator: {op}")));
        }
    }

    Ok(())
}
