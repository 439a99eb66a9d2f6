//! Error taxonomy for the cooldown engine.

use thiserror::Error;
use uom::si::f64::{Length, Power, ThermodynamicTemperature};

use crate::support::constraint::ConstraintError;

/// An input value violates a model precondition.
///
/// Detected at configuration-validation time where possible, otherwise by
/// the first model evaluation that trips over it. The engine never
/// substitutes a default for an invalid input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutOfDomainError {
    /// The material identifier does not name a configured material.
    #[error("unknown material identifier: {name:?}")]
    UnknownMaterial { name: String },

    /// A model was evaluated at an absolute temperature at or below 0 K.
    #[error("temperature must be positive: {temperature:?}")]
    NonPositiveTemperature {
        temperature: ThermodynamicTemperature,
    },

    /// An interval was supplied with its bounds swapped.
    #[error("inverted temperature interval: t_low={t_low:?} exceeds t_high={t_high:?}")]
    InvertedInterval {
        t_low: ThermodynamicTemperature,
        t_high: ThermodynamicTemperature,
    },

    /// The target temperature exceeds the start temperature.
    ///
    /// Equal temperatures are valid and produce an empty schedule.
    #[error("target temperature {target:?} exceeds start temperature {start:?}")]
    InvertedSpan {
        start: ThermodynamicTemperature,
        target: ThermodynamicTemperature,
    },

    /// A heat-leak evaluation point lies outside the configured span.
    #[error("temperature {temperature:?} is outside the configured span [{target:?}, {start:?}]")]
    TemperatureOutsideSpan {
        temperature: ThermodynamicTemperature,
        start: ThermodynamicTemperature,
        target: ThermodynamicTemperature,
    },

    /// The cold shield wall is too thick for its diameter, leaving no bore.
    #[error("shield thickness {thickness:?} leaves no interior for diameter {diameter:?}")]
    ShieldGeometry {
        diameter: Length,
        thickness: Length,
    },

    /// A scalar configuration parameter failed its numeric constraint.
    #[error("configuration parameter `{name}` is out of domain ({value}): {source}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        #[source]
        source: ConstraintError,
    },
}

impl OutOfDomainError {
    /// Creates an [`OutOfDomainError::InvalidParameter`] for a named scalar.
    pub(crate) fn parameter(name: &'static str, value: f64, source: ConstraintError) -> Self {
        Self::InvalidParameter {
            name,
            value,
            source,
        }
    }
}

/// Errors and early outcomes of a cooldown solve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// An input violated a model precondition.
    #[error(transparent)]
    OutOfDomain(#[from] OutOfDomainError),

    /// The cooler cannot out-pace the heat leak over a stage.
    ///
    /// The configured cooler power minus the stage-averaged heat leak is
    /// non-positive, so the stage can never complete. The schedule halts at
    /// the offending stage; nothing is clamped or retried.
    #[error(
        "stage {stage} over [{t_low:?}, {t_high:?}] cannot converge: \
         heat leak {heat_leak:?} leaves net cooling power {net_power:?}"
    )]
    Divergent {
        /// Index of the stage that cannot complete.
        stage: usize,

        /// Warm boundary of the offending stage.
        t_high: ThermodynamicTemperature,

        /// Cold boundary of the offending stage.
        t_low: ThermodynamicTemperature,

        /// Stage-averaged incoming heat power.
        heat_leak: Power,

        /// Net cooling power, zero or negative.
        net_power: Power,
    },

    /// The caller requested early termination.
    ///
    /// A distinct outcome rather than a physics failure, so callers can tell
    /// "stopped" apart from "failed".
    #[error("calculation cancelled after {completed_stages} of {stage_count} stages")]
    Cancelled {
        completed_stages: usize,
        stage_count: usize,
    },
}
