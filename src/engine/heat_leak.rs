//! Composite heat-leak model.
//!
//! Instantaneous incoming heat power at a `(warm boundary, cold mass)`
//! temperature pair is the sum of three independent paths across the
//! insulation gap:
//!
//! - **Radiation**: Stefan–Boltzmann exchange attenuated by the multi-layer
//!   insulation blankets.
//! - **Residual-gas conduction**: free-molecular conduction by gas left at
//!   the operating pressure; vanishes with the pressure.
//! - **Support conduction**: solid conduction through the mechanical
//!   supports, set by the configured geometry factor.
//!
//! The model is pure and stateless: the same inputs always produce the same
//! breakdown.

use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::watt,
    pressure::pascal,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{constraint::ConstraintError, units::TemperatureDifference};

use super::{config::SystemConfiguration, error::OutOfDomainError};

/// Stefan–Boltzmann constant, W/(m²·K⁴).
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

/// Surface emissivity of the reflective insulation layers.
const MLI_SURFACE_EMISSIVITY: f64 = 0.05;

/// Free-molecular conduction coefficient, W/(m²·Pa·K^½), calibrated to the
/// reference system: ~20 mW at 10⁻³ Pa over the full 300 K span.
const GAS_CONDUCTION_COEFF: f64 = 0.16;

/// Sub-linear temperature-difference exponent of the residual-gas term.
const GAS_TEMPERATURE_EXPONENT: f64 = 0.5;

/// Per-path breakdown of the incoming heat power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatLeak {
    pub radiation: Power,
    pub gas_conduction: Power,
    pub support_conduction: Power,
}

impl HeatLeak {
    /// Total incoming power, the sum of the three paths.
    #[must_use]
    pub fn total(&self) -> Power {
        self.radiation + self.gas_conduction + self.support_conduction
    }
}

/// Computes the incoming heat power at a `(warm, cold)` temperature pair.
///
/// `warm` is the warm surface bounding the insulation gap (the vacuum shell
/// at ambient, or the shield once it leads the load) and `cold` is the cold
/// mass. Both must lie within the configured `[target, start]` span and
/// satisfy `cold ≤ warm`.
///
/// # Errors
///
/// Returns [`OutOfDomainError::TemperatureOutsideSpan`] for evaluation
/// points beyond the configured span, [`OutOfDomainError::InvertedInterval`]
/// when `cold > warm`, and [`OutOfDomainError::InvalidParameter`] for a
/// non-positive operating pressure.
pub fn incoming_power(
    warm: ThermodynamicTemperature,
    cold: ThermodynamicTemperature,
    config: &SystemConfiguration,
) -> Result<HeatLeak, OutOfDomainError> {
    let pressure = config.operating_pressure.get::<pascal>();
    if pressure <= 0.0 || pressure.is_nan() {
        return Err(OutOfDomainError::parameter(
            "operating_pressure",
            pressure,
            ConstraintError::BelowMinimum,
        ));
    }

    for temperature in [warm, cold] {
        if temperature < config.target_temperature || temperature > config.start_temperature {
            return Err(OutOfDomainError::TemperatureOutsideSpan {
                temperature,
                start: config.start_temperature,
                target: config.target_temperature,
            });
        }
    }
    if cold > warm {
        return Err(OutOfDomainError::InvertedInterval {
            t_low: cold,
            t_high: warm,
        });
    }

    let area = config.radiating_area_si();
    let t_warm = warm.get::<kelvin>();
    let t_cold = cold.get::<kelvin>();
    let delta_t = warm.minus(cold).get::<delta_kelvin>();

    let radiation = MLI_SURFACE_EMISSIVITY * STEFAN_BOLTZMANN * area
        * (t_warm.powi(4) - t_cold.powi(4))
        / config.mli.attenuation();

    let gas_conduction =
        GAS_CONDUCTION_COEFF * pressure * area * delta_t.powf(GAS_TEMPERATURE_EXPONENT);

    let support_conduction =
        config.support_geometry_factor * config.plate.material.spec().mean_conductivity
            * warm.minus(cold);

    Ok(HeatLeak {
        radiation: Power::new::<watt>(radiation),
        gas_conduction: Power::new::<watt>(gas_conduction),
        support_conduction,
    })
}
