use crate::traits::{Scalar, Steppable, VectorField};

/// Explicit (forward) Euler stepper.
///
/// One field evaluation per step: state += dt * f(t, state). First order,
/// fixed step; exactly the discretization the solution curves are defined
/// by, so no higher-order method belongs here.
pub struct Euler<T: Scalar> {
    slope: Vec<T>,
}

impl<T: Scalar> Euler<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            slope: vec![T::from_f64(0.0).unwrap(); dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for Euler<T> {
    fn step(&mut self, field: &impl VectorField<T>, t: &mut T, state: &mut [T], dt: T) {
        let t0 = *t;

        field.apply(t0, state, &mut self.slope);

        for i in 0..state.len() {
            state[i] = state[i] + dt * self.slope[i];
        }

        *t = t0 + dt;
    }
}
