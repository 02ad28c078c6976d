//! Core numeric engine for the quadra calculator.
//!
//! Takes a user-typed formula string (plain arithmetic, `∫`-notation
//! integrals, or a first-order differential equation written
//! `dy/dx = ...`) and produces numeric results and plottable curves.
//!
//! Key components:
//! - **Evaluation**: a tokenizer/parser and a stack-based bytecode VM for
//!   user expressions (`eval`).
//! - **Integrals**: notation extraction and recursive fixed-bound
//!   quadrature over the unit interval (`integral`, `quadrature`).
//! - **Differential equations**: fixed-step forward Euler over the
//!   `VectorField`/`Steppable` seam (`traits`, `solvers`, `ode`).
//! - **Graphing**: notation-dispatched curve sampling with per-point
//!   failure gaps (`graph`).
//! - **Boundary**: input validation and the structured `Solution` type
//!   consumed by the presentation layer (`validate`, `solve`, `error`).
//!
//! The engine is pure and synchronous: every call parses and computes
//! from scratch, and all iteration counts are fixed.

pub mod error;
pub mod eval;
pub mod graph;
pub mod integral;
pub mod ode;
pub mod quadrature;
pub mod solve;
pub mod solvers;
pub mod traits;
pub mod validate;
