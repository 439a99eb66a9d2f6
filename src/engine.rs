//! The cooldown-time estimation engine.
//!
//! Everything needed to answer "how long until this cryostat is cold" lives
//! here: material property models, the composite heat-leak model, the
//! stage-wise scheduler, and the progress/cancellation plumbing for hosts
//! that run a solve on a worker thread.
//!
//! The engine is a pure function of its [`SystemConfiguration`]: no global
//! state, no I/O, and identical inputs always produce identical schedules.

mod config;
mod error;
mod heat_leak;
mod material;
mod progress;
mod result;
mod scheduler;

#[cfg(test)]
mod test_support;

pub use config::{
    ColdShield, MliStack, PreCoolMode, SampleBatch, StructuralPlate, SystemConfiguration,
    TemperatureSpacing,
};
pub use error::{OutOfDomainError, SolveError};
pub use heat_leak::{HeatLeak, STEFAN_BOLTZMANN, incoming_power};
pub use material::{GAS_CONSTANT, Material, MaterialSpec, specific_heat, thermal_mass};
pub use progress::{CancelToken, NoProgress, ProgressObserver, StageProgress};
pub use result::{CoolingPhase, CoolingResult, Stage};
pub use scheduler::{CooldownSolver, LN2_BOILING_POINT};
