use uom::si::f64::{ThermodynamicTemperature, Time};

/// One point of a transient temperature trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientSample {
    /// Time since the load step.
    pub time: Time,
    /// Conductor temperature at `time`.
    pub temperature: ThermodynamicTemperature,
}

/// Fraction of the way to steady state after `elapsed`, `1 − e^(−t/τ)`.
pub(super) fn progress(elapsed: Time, time_constant: Time) -> f64 {
    -(-(elapsed / time_constant).value).exp_m1()
}

/// `n` evenly spaced times from zero to `duration`, inclusive.
pub(super) fn sample_times(duration: Time, n: usize) -> impl Iterator<Item = Time> {
    let last = n.saturating_sub(1).max(1);
    (0..n).map(move |i| duration * (i as f64 / last as f64))
}
