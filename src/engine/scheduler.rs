//! Stage-wise cooldown scheduler.
//!
//! Partitions the temperature span into ordered stages, drives the material
//! and heat-leak models per stage, and aggregates the schedule. Processing
//! is strictly sequential from the warm end to the cold end; a stage whose
//! net cooling power is non-positive terminates the solve — the schedule is
//! never clamped or retried.

use uom::{
    ConstZero,
    si::{
        f64::{Energy, Mass, Power, ThermodynamicTemperature, Time},
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::units::midpoint;

use super::{
    config::{PreCoolMode, SystemConfiguration, TemperatureSpacing},
    error::SolveError,
    heat_leak::incoming_power,
    material::{Material, thermal_mass},
    progress::{CancelToken, NoProgress, ProgressObserver, StageProgress},
    result::{CoolingPhase, CoolingResult, Stage},
};

/// Boiling point of liquid nitrogen at atmospheric pressure, K.
pub const LN2_BOILING_POINT: f64 = 77.0;

/// Entry point for solving a cooldown schedule.
pub struct CooldownSolver;

impl CooldownSolver {
    /// Solves the cooldown schedule for a configuration.
    ///
    /// Equivalent to [`CooldownSolver::solve_with`] with no observer and a
    /// token that is never cancelled.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] on invalid input or a divergent stage.
    pub fn solve(config: &SystemConfiguration) -> Result<CoolingResult, SolveError> {
        Self::solve_with(config, &NoProgress, &CancelToken::new())
    }

    /// Solves the cooldown schedule, reporting progress and honoring
    /// cooperative cancellation.
    ///
    /// The observer is invoked after each completed stage with a
    /// monotonically increasing completed-stage count and the stages
    /// computed so far. The token is checked between stage computations.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] on invalid input, a divergent stage, or a
    /// cancellation request.
    pub fn solve_with(
        config: &SystemConfiguration,
        observer: &impl ProgressObserver,
        cancel: &CancelToken,
    ) -> Result<CoolingResult, SolveError> {
        config.validate()?;

        let start = config.start_temperature;
        let target = config.target_temperature;
        let ln2_point = ThermodynamicTemperature::new::<kelvin>(LN2_BOILING_POINT);

        // Liquid nitrogen short-circuits everything above its boiling point.
        let external_span = match config.pre_cool {
            PreCoolMode::LiquidNitrogen if start > ln2_point => {
                let low = if target > ln2_point { target } else { ln2_point };
                Some((start, low))
            }
            _ => None,
        };
        let cooler_high = external_span.map_or(start, |(_, low)| low);

        let boundaries = partition(
            cooler_high.get::<kelvin>(),
            target.get::<kelvin>(),
            config.stage_count,
            config.spacing,
        );
        let total_stages = boundaries.len().saturating_sub(1) + usize::from(external_span.is_some());

        let mut stages: Vec<Stage> = Vec::with_capacity(total_stages);

        if let Some((t_high, t_low)) = external_span {
            let stage = external_stage(stages.len(), t_high, t_low, config)?;
            stages.push(stage);
            observer.stage_completed(StageProgress {
                completed: stages.len(),
                total: total_stages,
                stages: &stages,
            });
        }

        for pair in boundaries.windows(2) {
            if cancel.is_cancelled() {
                return Err(SolveError::Cancelled {
                    completed_stages: stages.len(),
                    stage_count: total_stages,
                });
            }

            let t_high = ThermodynamicTemperature::new::<kelvin>(pair[0]);
            let t_low = ThermodynamicTemperature::new::<kelvin>(pair[1]);
            let stage = cooler_stage(stages.len(), t_high, t_low, config)?;
            stages.push(stage);

            observer.stage_completed(StageProgress {
                completed: stages.len(),
                total: total_stages,
                stages: &stages,
            });
        }

        Ok(CoolingResult::assemble(
            stages,
            config.safety_factor,
            config.efficiency,
        ))
    }
}

/// Splits `[low, high]` into `count` stage boundaries, warmest first.
///
/// Returns an empty partition for a zero-width span. The endpoints are
/// reproduced exactly.
fn partition(high: f64, low: f64, count: usize, spacing: TemperatureSpacing) -> Vec<f64> {
    if high <= low {
        return Vec::new();
    }

    let n = count as f64;
    let mut boundaries: Vec<f64> = (0..=count)
        .map(|i| {
            let fraction = i as f64 / n;
            match spacing {
                TemperatureSpacing::Uniform => high + (low - high) * fraction,
                TemperatureSpacing::Geometric => {
                    (high.ln() + (low.ln() - high.ln()) * fraction).exp()
                }
            }
        })
        .collect();

    boundaries[0] = high;
    boundaries[count] = low;
    boundaries
}

/// Bodies thermally coupled to the cooler, with their masses.
fn coupled_bodies(config: &SystemConfiguration) -> Vec<(Material, Mass)> {
    let mut bodies = vec![
        (config.samples.material, config.samples.total_mass()),
        (config.plate.material, config.plate.mass()),
    ];
    if config.pre_cool == PreCoolMode::ColdShield {
        bodies.push((config.shield.material, config.shield.mass()));
    }
    bodies
}

/// Thermal mass to remove over a stage, summed over all coupled bodies.
fn removed_energy(
    config: &SystemConfiguration,
    t_low: ThermodynamicTemperature,
    t_high: ThermodynamicTemperature,
) -> Result<Energy, SolveError> {
    let mut total = Energy::ZERO;
    for (material, mass) in coupled_bodies(config) {
        total += thermal_mass(material, mass, t_low, t_high)?;
    }
    Ok(total)
}

/// Stage-averaged incoming heat power, by Simpson's rule over the stage.
///
/// The warm boundary of the insulation gap stays at the ambient start
/// temperature for the whole cooldown.
fn average_heat_leak(
    config: &SystemConfiguration,
    t_low: ThermodynamicTemperature,
    t_high: ThermodynamicTemperature,
) -> Result<Power, SolveError> {
    let warm = config.start_temperature;
    let at_low = incoming_power(warm, t_low, config)?.total();
    let at_mid = incoming_power(warm, midpoint(t_low, t_high), config)?.total();
    let at_high = incoming_power(warm, t_high, config)?.total();
    Ok((at_low + 4.0 * at_mid + at_high) / 6.0)
}

fn cooler_stage(
    index: usize,
    t_high: ThermodynamicTemperature,
    t_low: ThermodynamicTemperature,
    config: &SystemConfiguration,
) -> Result<Stage, SolveError> {
    let energy = removed_energy(config, t_low, t_high)?;
    let heat_leak = average_heat_leak(config, t_low, t_high)?;
    let net_power = config.cooler_power - heat_leak;

    if net_power <= Power::ZERO {
        return Err(SolveError::Divergent {
            stage: index,
            t_high,
            t_low,
            heat_leak,
            net_power,
        });
    }

    Ok(Stage {
        index,
        t_high,
        t_low,
        removed_energy: energy,
        heat_leak,
        net_power,
        duration: energy / net_power,
        phase: CoolingPhase::Cooler,
    })
}

/// Builds the externally driven pre-cool stage: the heat is removed by the
/// liquid-nitrogen bath, so the stage costs no cooler time.
fn external_stage(
    index: usize,
    t_high: ThermodynamicTemperature,
    t_low: ThermodynamicTemperature,
    config: &SystemConfiguration,
) -> Result<Stage, SolveError> {
    let energy = removed_energy(config, t_low, t_high)?;
    let heat_leak = average_heat_leak(config, t_low, t_high)?;

    Ok(Stage {
        index,
        t_high,
        t_low,
        removed_energy: energy,
        heat_leak,
        net_power: Power::ZERO,
        duration: Time::ZERO,
        phase: CoolingPhase::External,
    })
}
