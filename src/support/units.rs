//! Unit helpers for working with absolute temperatures.
//!
//! `uom` deliberately refuses to subtract two [`ThermodynamicTemperature`]
//! values, because the difference of two absolute temperatures is a
//! [`TemperatureInterval`], not another absolute temperature. The helpers
//! here bridge that gap for the engine's span and midpoint arithmetic.
//!
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

/// Returns the arithmetic midpoint of two absolute temperatures.
#[must_use]
pub fn midpoint(
    a: ThermodynamicTemperature,
    b: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<abs_kelvin>(
        0.5 * (a.get::<abs_kelvin>() + b.get::<abs_kelvin>()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn subtraction_yields_an_interval() {
        let warm = ThermodynamicTemperature::new::<abs_kelvin>(300.0);
        let cold = ThermodynamicTemperature::new::<abs_kelvin>(4.2);

        assert_relative_eq!(warm.minus(cold).get::<delta_kelvin>(), 295.8);
        assert_relative_eq!(cold.minus(warm).get::<delta_kelvin>(), -295.8);
    }

    #[test]
    fn midpoint_of_span() {
        let warm = ThermodynamicTemperature::new::<abs_kelvin>(300.0);
        let cold = ThermodynamicTemperature::new::<abs_kelvin>(100.0);

        assert_relative_eq!(midpoint(warm, cold).get::<abs_kelvin>(), 200.0);
    }
}
