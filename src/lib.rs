//! # Cryostat Models
//!
//! Cooldown-time estimation for cryocooler-driven vacuum cryostats: given a
//! cooler, a sample load, a cold shield, and the insulation around them,
//! estimate how long the system takes to cool from ambient to its operating
//! temperature.
//!
//! ## Crate layout
//!
//! - [`engine`]: The estimation engine — materials, heat leaks, and the
//!   stage-wise scheduler.
//! - [`support`]: Supporting numerics and unit helpers used by the engine.
//!
//! The engine is synchronous and stateless. Hosts that need a responsive
//! interface run [`engine::CooldownSolver::solve_with`] on a worker thread
//! and communicate through [`engine::ProgressObserver`] and
//! [`engine::CancelToken`].

pub mod engine;
pub mod support;
