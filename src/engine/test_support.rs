//! Shared fixtures for the engine's unit tests.

use uom::si::{
    f64::{Length, Power, Pressure, ThermodynamicTemperature},
    length::{meter, millimeter},
    power::watt,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use super::config::{
    ColdShield, MliStack, PreCoolMode, SampleBatch, StructuralPlate, SystemConfiguration,
    TemperatureSpacing,
};
use super::material::Material;

/// A representative 1 W pulse-tube system: seven niobium bars on a copper
/// plate inside a copper shield, cooling from room temperature to 4.2 K.
pub fn baseline_config() -> SystemConfiguration {
    SystemConfiguration {
        cooler_power: Power::new::<watt>(1.0),
        operating_pressure: Pressure::new::<pascal>(1e-3),
        start_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
        target_temperature: ThermodynamicTemperature::new::<kelvin>(4.2),
        samples: SampleBatch {
            material: Material::Niobium,
            count: 7,
            length: Length::new::<millimeter>(100.0),
            width: Length::new::<millimeter>(2.0),
            height: Length::new::<millimeter>(2.0),
        },
        plate: StructuralPlate {
            material: Material::Copper,
            length: Length::new::<millimeter>(300.0),
            width: Length::new::<millimeter>(200.0),
            thickness: Length::new::<millimeter>(3.0),
        },
        shield: ColdShield {
            material: Material::Copper,
            diameter: Length::new::<meter>(1.2),
            height: Length::new::<meter>(1.3),
            thickness: Length::new::<millimeter>(5.0),
        },
        mli: MliStack {
            outer_layers: 50,
            inner_layers: 10,
        },
        support_geometry_factor: Length::new::<meter>(3e-7),
        pre_cool: PreCoolMode::None,
        stage_count: 10,
        spacing: TemperatureSpacing::Uniform,
        safety_factor: 1.2,
        efficiency: 0.9,
    }
}
