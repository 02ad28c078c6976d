use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Numeric scalar the engine computes over. Everything is `f64` in
/// practice; the bound keeps the VM and steppers independent of a concrete
/// float type.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A first-order vector field: evaluates the right-hand side of
/// state' = f(t, state).
pub trait VectorField<T: Scalar> {
    /// Dimension of the state vector.
    fn dimension(&self) -> usize;

    /// Writes f(t, state) into `out`. `out` has length `dimension()`.
    fn apply(&self, t: T, state: &[T], out: &mut [T]);
}

/// A fixed-step integrator that advances a vector field by one step.
pub trait Steppable<T: Scalar> {
    /// Advances `state` (and `t`) by one step of size `dt`.
    fn step(&mut self, field: &impl VectorField<T>, t: &mut T, state: &mut [T], dt: T);
}
