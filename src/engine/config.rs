//! System configuration and its defense-in-depth validation.
//!
//! The configuration surface (GUI or CLI) is expected to bounds-check user
//! input before constructing a [`SystemConfiguration`]; the engine
//! re-validates the physical invariants itself and fails fast rather than
//! trusting the caller.

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Mass, Power, Pressure, ThermodynamicTemperature},
    length::meter,
    power::watt,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{
    AtLeastOne, Constraint, StrictlyPositive, UnitIntervalLowerOpen,
};

use super::{error::OutOfDomainError, material::Material};

/// A batch of identical rectangular samples mounted on the cold plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleBatch {
    pub material: Material,
    pub count: u32,
    pub length: Length,
    pub width: Length,
    pub height: Length,
}

impl SampleBatch {
    /// Total mass of the batch.
    #[must_use]
    pub fn total_mass(&self) -> Mass {
        let volume = self.length * self.width * self.height;
        f64::from(self.count) * volume * self.material.spec().density
    }
}

/// The structural plate the samples are clamped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralPlate {
    pub material: Material,
    pub length: Length,
    pub width: Length,
    pub thickness: Length,
}

impl StructuralPlate {
    #[must_use]
    pub fn mass(&self) -> Mass {
        self.length * self.width * self.thickness * self.material.spec().density
    }
}

/// The cylindrical cold shield with flat end caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColdShield {
    pub material: Material,
    pub diameter: Length,
    pub height: Length,
    pub thickness: Length,
}

impl ColdShield {
    /// Shield mass: hollow cylinder wall plus two solid end caps.
    #[must_use]
    pub fn mass(&self) -> Mass {
        let outer_radius = self.diameter / 2.0;
        let inner_radius = outer_radius - self.thickness;

        let wall = std::f64::consts::PI
            * (outer_radius * outer_radius - inner_radius * inner_radius)
            * self.height;
        let caps = 2.0 * std::f64::consts::PI * (outer_radius * outer_radius) * self.thickness;

        (wall + caps) * self.material.spec().density
    }

    /// Outer surface area: lateral cylinder plus both end caps.
    ///
    /// This is the radiating surface bounding the insulation gap.
    #[must_use]
    pub fn surface_area(&self) -> Area {
        let radius = self.diameter / 2.0;
        std::f64::consts::PI * self.diameter * self.height
            + 2.0 * std::f64::consts::PI * (radius * radius)
    }
}

/// Multi-layer insulation blanket layer counts.
///
/// Layer counts are unsigned, so the "layer counts ≥ 0" invariant holds at
/// the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MliStack {
    /// Layers between the vacuum shell and the cold shield.
    pub outer_layers: u32,

    /// Layers between the cold shield and the sample space.
    pub inner_layers: u32,
}

impl MliStack {
    /// Radiative attenuation factor of the two blankets in series.
    ///
    /// Each stack of `n` layers divides the radiative leak by `n + 1`, so
    /// the factor is strictly increasing in either layer count and never
    /// below one — a bare gap (zero layers) attenuates nothing.
    #[must_use]
    pub fn attenuation(&self) -> f64 {
        f64::from(self.outer_layers + 1) * f64::from(self.inner_layers + 1)
    }
}

/// How the schedule accounts for pre-cooling.
///
/// The modes are mutually exclusive in effect, so they're a variant rather
/// than independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreCoolMode {
    /// The shield is assumed already cold; only samples and plate load the
    /// cooler.
    #[default]
    None,

    /// The shield cools together with the load, adding its thermal mass to
    /// every stage.
    ColdShield,

    /// Liquid nitrogen brings everything down to its boiling point before
    /// the cooler takes over; that phase costs no cooler time and is
    /// flagged distinctly in the result.
    LiquidNitrogen,
}

/// Spacing strategy for the temperature partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureSpacing {
    /// Equal temperature width per stage.
    Uniform,

    /// Equal temperature ratio per stage. Concentrates stages at the cold
    /// end, where heat capacity and cooling rate vary fastest.
    #[default]
    Geometric,
}

/// Immutable input for one cooldown calculation.
///
/// All physical dimensions, counts, and powers must be strictly positive;
/// the target temperature must not exceed the start temperature (equality
/// yields an empty schedule). See [`SystemConfiguration::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfiguration {
    /// Nominal cooler power at the cold head.
    pub cooler_power: Power,

    /// Operating pressure inside the vacuum vessel.
    pub operating_pressure: Pressure,

    /// Ambient temperature the cooldown starts from.
    pub start_temperature: ThermodynamicTemperature,

    /// Temperature the cold mass must reach.
    pub target_temperature: ThermodynamicTemperature,

    pub samples: SampleBatch,
    pub plate: StructuralPlate,
    pub shield: ColdShield,
    pub mli: MliStack,

    /// Support cross-section divided by support length, in metres.
    ///
    /// Scales the mechanical-support conduction leak.
    pub support_geometry_factor: Length,

    pub pre_cool: PreCoolMode,

    /// Number of discretization stages for the cooler-driven span.
    pub stage_count: usize,

    pub spacing: TemperatureSpacing,

    /// Multiplicative safety margin on the engineering estimate, ≥ 1.
    pub safety_factor: f64,

    /// System efficiency dividing the engineering estimate, in `(0, 1]`.
    pub efficiency: f64,
}

impl SystemConfiguration {
    /// Validates the physical invariants of this configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`OutOfDomainError`] encountered. Validation never
    /// repairs a value; the caller decides whether to adjust and retry.
    pub fn validate(&self) -> Result<(), OutOfDomainError> {
        let positives: [(&'static str, f64); 12] = [
            ("cooler_power", self.cooler_power.get::<watt>()),
            ("operating_pressure", self.operating_pressure.get::<pascal>()),
            ("start_temperature", self.start_temperature.get::<kelvin>()),
            ("target_temperature", self.target_temperature.get::<kelvin>()),
            ("samples.length", self.samples.length.get::<meter>()),
            ("samples.width", self.samples.width.get::<meter>()),
            ("samples.height", self.samples.height.get::<meter>()),
            ("plate.length", self.plate.length.get::<meter>()),
            ("plate.width", self.plate.width.get::<meter>()),
            ("plate.thickness", self.plate.thickness.get::<meter>()),
            ("shield.height", self.shield.height.get::<meter>()),
            (
                "support_geometry_factor",
                self.support_geometry_factor.get::<meter>(),
            ),
        ];
        for (name, value) in positives {
            StrictlyPositive::check(&value)
                .map_err(|source| OutOfDomainError::parameter(name, value, source))?;
        }

        let sample_count = f64::from(self.samples.count);
        StrictlyPositive::check(&sample_count)
            .map_err(|source| OutOfDomainError::parameter("samples.count", sample_count, source))?;

        let stage_count = self.stage_count as f64;
        StrictlyPositive::check(&stage_count)
            .map_err(|source| OutOfDomainError::parameter("stage_count", stage_count, source))?;

        StrictlyPositive::check(&self.shield.diameter.get::<meter>()).map_err(|source| {
            OutOfDomainError::parameter(
                "shield.diameter",
                self.shield.diameter.get::<meter>(),
                source,
            )
        })?;
        StrictlyPositive::check(&self.shield.thickness.get::<meter>()).map_err(|source| {
            OutOfDomainError::parameter(
                "shield.thickness",
                self.shield.thickness.get::<meter>(),
                source,
            )
        })?;
        if 2.0 * self.shield.thickness >= self.shield.diameter {
            return Err(OutOfDomainError::ShieldGeometry {
                diameter: self.shield.diameter,
                thickness: self.shield.thickness,
            });
        }

        AtLeastOne::check(&self.safety_factor).map_err(|source| {
            OutOfDomainError::parameter("safety_factor", self.safety_factor, source)
        })?;
        UnitIntervalLowerOpen::check(&self.efficiency)
            .map_err(|source| OutOfDomainError::parameter("efficiency", self.efficiency, source))?;

        if self.target_temperature > self.start_temperature {
            return Err(OutOfDomainError::InvertedSpan {
                start: self.start_temperature,
                target: self.target_temperature,
            });
        }

        Ok(())
    }

    /// Effective radiating area used by the heat-leak model, in m².
    pub(crate) fn radiating_area_si(&self) -> f64 {
        self.shield.surface_area().get::<square_meter>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass::{gram, kilogram};

    use crate::engine::test_support::baseline_config;

    #[test]
    fn baseline_is_valid() {
        baseline_config().validate().unwrap();
    }

    #[test]
    fn derived_masses_match_hand_calculation() {
        let config = baseline_config();

        // 7 bars of 10 cm × 2 mm × 2 mm niobium.
        assert_relative_eq!(
            config.samples.total_mass().get::<gram>(),
            24.0,
            max_relative = 0.01
        );

        // 30 cm × 20 cm × 3 mm copper plate.
        assert_relative_eq!(
            config.plate.mass().get::<kilogram>(),
            1.613,
            max_relative = 0.01
        );

        // A 1.2 m × 1.3 m × 5 mm copper shield weighs hundreds of kilograms.
        let shield_mass = config.shield.mass().get::<kilogram>();
        assert!((200.0..500.0).contains(&shield_mass), "mass = {shield_mass}");
    }

    #[test]
    fn shield_surface_area_includes_end_caps() {
        let config = baseline_config();
        let lateral = std::f64::consts::PI * 1.2 * 1.3;
        let caps = 2.0 * std::f64::consts::PI * 0.6 * 0.6;
        assert_relative_eq!(
            config.shield.surface_area().get::<square_meter>(),
            lateral + caps,
            max_relative = 1e-12
        );
    }

    #[test]
    fn mli_attenuation_is_strictly_increasing_with_floor_one() {
        assert_eq!(
            MliStack {
                outer_layers: 0,
                inner_layers: 0
            }
            .attenuation(),
            1.0
        );

        let mut previous = 0.0;
        for layers in 0..5 {
            let factor = MliStack {
                outer_layers: layers,
                inner_layers: 10,
            }
            .attenuation();
            assert!(factor > previous);
            previous = factor;
        }
    }

    #[test]
    fn rejects_non_positive_parameters() {
        let mut config = baseline_config();
        config.cooler_power = Power::new::<watt>(0.0);
        assert!(matches!(
            config.validate(),
            Err(OutOfDomainError::InvalidParameter {
                name: "cooler_power",
                ..
            })
        ));

        let mut config = baseline_config();
        config.operating_pressure = Pressure::new::<pascal>(-1e-3);
        assert!(matches!(
            config.validate(),
            Err(OutOfDomainError::InvalidParameter {
                name: "operating_pressure",
                ..
            })
        ));

        let mut config = baseline_config();
        config.stage_count = 0;
        assert!(matches!(
            config.validate(),
            Err(OutOfDomainError::InvalidParameter {
                name: "stage_count",
                ..
            })
        ));

        let mut config = baseline_config();
        config.samples.count = 0;
        assert!(matches!(
            config.validate(),
            Err(OutOfDomainError::InvalidParameter {
                name: "samples.count",
                ..
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_correction_factors() {
        let mut config = baseline_config();
        config.safety_factor = 0.8;
        assert!(matches!(
            config.validate(),
            Err(OutOfDomainError::InvalidParameter {
                name: "safety_factor",
                ..
            })
        ));

        let mut config = baseline_config();
        config.efficiency = 0.0;
        assert!(matches!(
            config.validate(),
            Err(OutOfDomainError::InvalidParameter {
                name: "efficiency",
                ..
            })
        ));

        let mut config = baseline_config();
        config.efficiency = 1.2;
        assert!(matches!(
            config.validate(),
            Err(OutOfDomainError::InvalidParameter {
                name: "efficiency",
                ..
            })
        ));
    }

    #[test]
    fn rejects_inverted_span_but_allows_equal_temperatures() {
        let mut config = baseline_config();
        config.target_temperature = ThermodynamicTemperature::new::<kelvin>(350.0);
        assert!(matches!(
            config.validate(),
            Err(OutOfDomainError::InvertedSpan { .. })
        ));

        let mut config = baseline_config();
        config.target_temperature = config.start_temperature;
        config.validate().unwrap();
    }

    #[test]
    fn rejects_degenerate_shield_geometry() {
        let mut config = baseline_config();
        config.shield.thickness = Length::new::<meter>(0.7);
        assert!(matches!(
            config.validate(),
            Err(OutOfDomainError::ShieldGeometry { .. })
        ));
    }
}
