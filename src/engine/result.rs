//! Result types and aggregation of stage schedules.

use uom::{
    ConstZero,
    si::f64::{Energy, Power, ThermodynamicTemperature, Time},
};

/// Who removes the heat over a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolingPhase {
    /// The mechanical cooler drives this stage.
    Cooler,

    /// An external agent (liquid-nitrogen pre-cooling) drives this stage;
    /// it contributes no cooler time.
    External,
}

/// One discretized temperature sub-interval of the schedule.
///
/// Created by the scheduler, consumed read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// Position in the schedule, counting the pre-cool phase if present.
    pub index: usize,

    /// Warm boundary; always above `t_low`.
    pub t_high: ThermodynamicTemperature,

    /// Cold boundary.
    pub t_low: ThermodynamicTemperature,

    /// Thermal mass removed over the stage, summed over all coupled bodies.
    pub removed_energy: Energy,

    /// Stage-averaged incoming heat power.
    pub heat_leak: Power,

    /// Cooler power minus average heat leak. Zero for external stages.
    pub net_power: Power,

    /// Stage duration. Zero for external stages.
    pub duration: Time,

    pub phase: CoolingPhase,
}

/// The complete cooldown schedule returned to the caller.
///
/// Owned exclusively by the caller after return; the engine keeps no
/// reference and no cross-request state.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingResult {
    /// Stages in processing order, warmest first.
    pub stages: Vec<Stage>,

    /// Sum of cooler-driven stage durations, uncorrected.
    pub theoretical_total: Time,

    /// Engineering estimate: theoretical × safety factor ÷ efficiency.
    pub corrected_total: Time,

    /// Total energy removed from the cold mass, external phases included.
    pub removed_energy: Energy,
}

impl CoolingResult {
    /// Sums stage durations and applies the engineering corrections.
    ///
    /// Both totals are retained: the theoretical schedule for model
    /// comparisons, the corrected one for planning.
    pub(crate) fn assemble(stages: Vec<Stage>, safety_factor: f64, efficiency: f64) -> Self {
        let theoretical_total = stages
            .iter()
            .map(|stage| stage.duration)
            .fold(Time::ZERO, |sum, duration| sum + duration);
        let removed_energy = stages
            .iter()
            .map(|stage| stage.removed_energy)
            .fold(Energy::ZERO, |sum, energy| sum + energy);

        Self {
            stages,
            theoretical_total,
            corrected_total: theoretical_total * safety_factor / efficiency,
            removed_energy,
        }
    }

    /// Extracts the cumulative time / boundary temperature polyline for
    /// charting the cooldown curve.
    ///
    /// The first point is `(0, start temperature)`; each stage appends its
    /// cold boundary at the cumulative elapsed time. External stages are
    /// vertical drops (zero elapsed time).
    #[must_use]
    pub fn temperature_profile(&self) -> Vec<(Time, ThermodynamicTemperature)> {
        let Some(first) = self.stages.first() else {
            return Vec::new();
        };

        let mut profile = Vec::with_capacity(self.stages.len() + 1);
        let mut elapsed = Time::ZERO;
        profile.push((elapsed, first.t_high));

        for stage in &self.stages {
            elapsed += stage.duration;
            profile.push((elapsed, stage.t_low));
        }

        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        energy::joule, power::watt, thermodynamic_temperature::kelvin, time::second,
    };

    fn stage(index: usize, t_high: f64, t_low: f64, seconds: f64, phase: CoolingPhase) -> Stage {
        Stage {
            index,
            t_high: ThermodynamicTemperature::new::<kelvin>(t_high),
            t_low: ThermodynamicTemperature::new::<kelvin>(t_low),
            removed_energy: Energy::new::<joule>(1000.0),
            heat_leak: Power::new::<watt>(0.1),
            net_power: Power::new::<watt>(0.9),
            duration: Time::new::<second>(seconds),
            phase,
        }
    }

    #[test]
    fn corrections_are_applied_multiplicatively() {
        let stages = vec![
            stage(0, 300.0, 200.0, 3600.0, CoolingPhase::Cooler),
            stage(1, 200.0, 100.0, 1800.0, CoolingPhase::Cooler),
        ];

        let result = CoolingResult::assemble(stages, 1.2, 0.9);

        assert_relative_eq!(result.theoretical_total.get::<second>(), 5400.0);
        assert_relative_eq!(
            result.corrected_total.get::<second>(),
            5400.0 * 1.2 / 0.9
        );
        assert_relative_eq!(result.removed_energy.get::<joule>(), 2000.0);
    }

    #[test]
    fn empty_schedule_has_zero_totals() {
        let result = CoolingResult::assemble(Vec::new(), 1.5, 0.8);
        assert_eq!(result.theoretical_total, Time::ZERO);
        assert_eq!(result.corrected_total, Time::ZERO);
        assert!(result.temperature_profile().is_empty());
    }

    #[test]
    fn profile_tracks_cumulative_time_and_boundaries() {
        let stages = vec![
            stage(0, 300.0, 77.0, 0.0, CoolingPhase::External),
            stage(1, 77.0, 40.0, 600.0, CoolingPhase::Cooler),
            stage(2, 40.0, 4.2, 900.0, CoolingPhase::Cooler),
        ];
        let result = CoolingResult::assemble(stages, 1.0, 1.0);

        let profile = result.temperature_profile();
        assert_eq!(profile.len(), 4);

        assert_eq!(profile[0].0, Time::ZERO);
        assert_relative_eq!(profile[0].1.get::<kelvin>(), 300.0);

        // External phase drops temperature without elapsing time.
        assert_eq!(profile[1].0, Time::ZERO);
        assert_relative_eq!(profile[1].1.get::<kelvin>(), 77.0);

        assert_relative_eq!(profile[3].0.get::<second>(), 1500.0);
        assert_relative_eq!(profile[3].1.get::<kelvin>(), 4.2);

        for pair in profile.windows(2) {
            assert!(pair[1].0 >= pair[0].0);
            assert!(pair[1].1 <= pair[0].1);
        }
    }
}
