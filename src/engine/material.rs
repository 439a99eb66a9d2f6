//! Temperature-dependent material properties.
//!
//! Specific heat follows the Debye model: quantized lattice vibrations give
//! a cubic temperature law well below the material's Debye temperature and
//! approach the Dulong–Petit limit `3R/M` near room temperature. A single
//! expression spans both regimes, so the heat-capacity curve has no internal
//! breakpoint.

use std::{fmt, str::FromStr};

use uom::si::{
    f64::{
        Energy, Mass, MassDensity, MolarMass, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    molar_mass::kilogram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    quadrature::simpson,
    units::{TemperatureDifference, midpoint},
};

use super::error::OutOfDomainError;

/// Molar gas constant, J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// Beyond `x = θ_D/T = 50` the Debye integral has saturated to `4π⁴/15`
/// within double precision, so the exact evaluation and the cubic-law
/// asymptote coincide.
const DEBYE_SATURATION: f64 = 50.0;

/// Panels for the Simpson evaluation of the Debye integral. The integrand
/// peaks near `t ≈ 3.8`; this resolution keeps the saturated integral
/// accurate to roughly one part in 10¹¹, so interval quadrature over the
/// heat-capacity curve refines cleanly instead of bottoming out on
/// property noise.
const DEBYE_PANELS: usize = 16384;

/// A material the engine knows thermal constants for.
///
/// The typed API makes unknown materials unrepresentable; string
/// identifiers from a configuration surface go through [`Material::from_str`],
/// which rejects anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Sample material for superconducting cavity coupons.
    Niobium,
    /// Structural and shielding material.
    Copper,
}

/// Thermal constants for a [`Material`]. Never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialSpec {
    /// Debye temperature θ_D.
    pub debye_temperature: ThermodynamicTemperature,

    /// Molar mass.
    pub molar_mass: MolarMass,

    /// Density.
    pub density: MassDensity,

    /// Mean thermal conductivity over the cryogenic span, used by the
    /// support-conduction leak term.
    pub mean_conductivity: ThermalConductivity,
}

impl Material {
    /// Returns the thermal constants for this material.
    #[must_use]
    pub fn spec(self) -> MaterialSpec {
        match self {
            Material::Niobium => MaterialSpec {
                debye_temperature: ThermodynamicTemperature::new::<kelvin>(275.0),
                molar_mass: MolarMass::new::<kilogram_per_mole>(92.906e-3),
                density: MassDensity::new::<kilogram_per_cubic_meter>(8570.0),
                mean_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(54.0),
            },
            Material::Copper => MaterialSpec {
                debye_temperature: ThermodynamicTemperature::new::<kelvin>(343.0),
                molar_mass: MolarMass::new::<kilogram_per_mole>(63.546e-3),
                density: MassDensity::new::<kilogram_per_cubic_meter>(8960.0),
                mean_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(400.0),
            },
        }
    }
}

impl FromStr for Material {
    type Err = OutOfDomainError;

    /// Parses a material identifier.
    ///
    /// Accepts the element name or symbol, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfDomainError::UnknownMaterial`] for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use cryostat_models::engine::Material;
    ///
    /// assert_eq!("niobium".parse::<Material>().unwrap(), Material::Niobium);
    /// assert_eq!("Cu".parse::<Material>().unwrap(), Material::Copper);
    /// assert!("unobtainium".parse::<Material>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "niobium" | "nb" => Ok(Material::Niobium),
            "copper" | "cu" => Ok(Material::Copper),
            _ => Err(OutOfDomainError::UnknownMaterial {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Niobium => write!(f, "niobium"),
            Material::Copper => write!(f, "copper"),
        }
    }
}

/// Debye integrand `t⁴·eᵗ/(eᵗ−1)²`, evaluated in the overflow-safe form
/// `t⁴·e⁻ᵗ/(1−e⁻ᵗ)²`. Approaches `t²` as `t → 0`.
fn debye_integrand(t: f64) -> f64 {
    if t < 1e-8 {
        return t * t;
    }
    let e = (-t).exp();
    t.powi(4) * e / ((1.0 - e) * (1.0 - e))
}

/// Debye integral `∫₀ˣ t⁴eᵗ/(eᵗ−1)² dt`.
fn debye_integral(x: f64) -> f64 {
    simpson(debye_integrand, 0.0, x.min(DEBYE_SATURATION), DEBYE_PANELS)
}

/// Computes the specific heat of `material` at `temperature`.
///
/// `c(T) = 9·(R/M)·(T/θ_D)³·∫₀^{θ_D/T} t⁴eᵗ/(eᵗ−1)² dt`, in J/(kg·K).
///
/// # Errors
///
/// Returns [`OutOfDomainError::NonPositiveTemperature`] for `T ≤ 0 K`.
pub fn specific_heat(
    material: Material,
    temperature: ThermodynamicTemperature,
) -> Result<SpecificHeatCapacity, OutOfDomainError> {
    let t = temperature.get::<kelvin>();
    if t <= 0.0 || t.is_nan() {
        return Err(OutOfDomainError::NonPositiveTemperature { temperature });
    }

    let spec = material.spec();
    let theta = spec.debye_temperature.get::<kelvin>();
    let r_specific = GAS_CONSTANT / spec.molar_mass.get::<kilogram_per_mole>();

    let reduced = t / theta;
    let c = 9.0 * r_specific * reduced.powi(3) * debye_integral(1.0 / reduced);

    Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(c))
}

/// Computes the energy removed when cooling `mass` of `material` from
/// `t_high` to `t_low`: the integral of `m·c(T)` over the interval,
/// evaluated by Simpson's rule on the interval endpoints and midpoint.
///
/// # Errors
///
/// Fails on a non-positive temperature or an inverted interval.
pub fn thermal_mass(
    material: Material,
    mass: Mass,
    t_low: ThermodynamicTemperature,
    t_high: ThermodynamicTemperature,
) -> Result<Energy, OutOfDomainError> {
    if t_low > t_high {
        return Err(OutOfDomainError::InvertedInterval { t_low, t_high });
    }

    let c_low = specific_heat(material, t_low)?;
    let c_mid = specific_heat(material, midpoint(t_low, t_high))?;
    let c_high = specific_heat(material, t_high)?;

    let c_avg = (c_low + 4.0 * c_mid + c_high) / 6.0;
    Ok(mass * (c_avg * t_high.minus(t_low)))
}
