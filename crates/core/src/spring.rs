//! Damped spring integrator.
//!
//! Closed-form damped harmonic oscillator step (Ryan Juckett's formulation).
//! The four step coefficients only depend on the timestep, angular frequency
//! and damping ratio, so they are computed once in [`Spring::new`] and each
//! [`Spring::update`] is four multiply-adds. Being analytic, the step is
//! unconditionally stable: a held target is approached without ever
//! diverging, whatever the tick rate.

const EPSILON: f64 = 1e-4;

/// Timestep for a given frame rate.
pub fn fps(n: u32) -> f64 {
    1.0 / n.max(1) as f64
}

/// Precomputed step coefficients for one (dt, ω, ζ) triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pos_pos: f64,
    pos_vel: f64,
    vel_pos: f64,
    vel_vel: f64,
}

impl Spring {
    /// Build a spring for timestep `dt` (seconds), angular frequency `ω`
    /// (rad/s) and damping ratio `ζ`. Negative parameters are clamped to zero.
    pub fn new(dt: f64, angular_frequency: f64, damping_ratio: f64) -> Self {
        let omega = angular_frequency.max(0.0);
        let zeta = damping_ratio.max(0.0);

        if omega < EPSILON {
            return Self::identity();
        }

        if zeta > 1.0 + EPSILON {
            // Over-damped.
            let za = -omega * zeta;
            let zb = omega * (zeta * zeta - 1.0).sqrt();
            let z1 = za - zb;
            let z2 = za + zb;

            let e1 = (z1 * dt).exp();
            let e2 = (z2 * dt).exp();

            let inv_two_zb = 1.0 / (2.0 * zb);
            let e1_over_two_zb = e1 * inv_two_zb;
            let e2_over_two_zb = e2 * inv_two_zb;
            let z1e1_over_two_zb = z1 * e1_over_two_zb;
            let z2e2_over_two_zb = z2 * e2_over_two_zb;

            Self {
                pos_pos: e1_over_two_zb * z2 - z2e2_over_two_zb + e2,
                pos_vel: -e1_over_two_zb + e2_over_two_zb,
                vel_pos: (z1e1_over_two_zb - z2e2_over_two_zb + e2) * z2,
                vel_vel: -z1e1_over_two_zb + z2e2_over_two_zb,
            }
        } else if zeta < 1.0 - EPSILON {
            // Under-damped.
            let omega_zeta = omega * zeta;
            let alpha = omega * (1.0 - zeta * zeta).sqrt();

            let exp_term = (-omega_zeta * dt).exp();
            let (sin_term, cos_term) = (alpha * dt).sin_cos();
            let inv_alpha = 1.0 / alpha;

            let exp_sin = exp_term * sin_term;
            let exp_cos = exp_term * cos_term;
            let exp_omega_zeta_sin_over_alpha = exp_term * omega_zeta * sin_term * inv_alpha;

            Self {
                pos_pos: exp_cos + exp_omega_zeta_sin_over_alpha,
                pos_vel: exp_sin * inv_alpha,
                vel_pos: -exp_sin * alpha - omega_zeta * exp_omega_zeta_sin_over_alpha,
                vel_vel: exp_cos - exp_omega_zeta_sin_over_alpha,
            }
        } else {
            // Critically damped.
            let exp_term = (-omega * dt).exp();
            let time_exp = dt * exp_term;
            let time_exp_freq = time_exp * omega;

            Self {
                pos_pos: time_exp_freq + exp_term,
                pos_vel: time_exp,
                vel_pos: -omega * time_exp_freq,
                vel_vel: -time_exp_freq + exp_term,
            }
        }
    }

    fn identity() -> Self {
        Self {
            pos_pos: 1.0,
            pos_vel: 0.0,
            vel_pos: 0.0,
            vel_vel: 1.0,
        }
    }

    /// Advance one timestep toward `target`, returning the new position and velocity.
    #[inline]
    pub fn update(&self, position: f64, velocity: f64, target: f64) -> (f64, f64) {
        let offset = position - target;
        let new_position = offset * self.pos_pos + velocity * self.pos_vel + target;
        let new_velocity = offset * self.vel_pos + velocity * self.vel_vel;
        (new_position, new_velocity)
    }
}

/// One animated axis: a spring plus the state it drives.
///
/// The owner rewrites `target` each tick and then calls [`SpringAxis::step`];
/// stepping before retargeting would lag the follower by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringAxis {
    pub position: f64,
    pub velocity: f64,
    pub target: f64,
    spring: Spring,
}

impl SpringAxis {
    pub fn new(spring: Spring, position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            spring,
        }
    }

    pub fn retarget(&mut self, target: f64) {
        self.target = target;
    }

    pub fn step(&mut self) {
        let (p, v) = self.spring.update(self.position, self.velocity, self.target);
        self.position = p;
        self.velocity = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 30.0;

    /// Run `ticks` updates toward `target` from rest at `start`.
    fn trajectory(spring: Spring, start: f64, target: f64, ticks: usize) -> Vec<f64> {
        let (mut p, mut v) = (start, 0.0);
        (0..ticks)
            .map(|_| {
                (p, v) = spring.update(p, v, target);
                p
            })
            .collect()
    }

    #[test]
    fn fps_helper() {
        assert_eq!(fps(30), 1.0 / 30.0);
        assert_eq!(fps(0), 1.0);
    }

    #[test]
    fn at_rest_on_target_stays_put() {
        for zeta in [0.3, 1.0, 1.8] {
            let s = Spring::new(DT, 6.0, zeta);
            assert_eq!(s.update(4.0, 0.0, 4.0), (4.0, 0.0));
        }
    }

    #[test]
    fn zero_frequency_is_identity() {
        let s = Spring::new(DT, 0.0, 0.5);
        assert_eq!(s.update(1.0, 2.0, 10.0), (1.0, 2.0));
        let s = Spring::new(DT, -3.0, 0.5);
        assert_eq!(s.update(1.0, 2.0, 10.0), (1.0, 2.0));
    }

    #[test]
    fn critical_and_over_damped_never_overshoot() {
        for zeta in [1.0, 1.2, 2.5] {
            let s = Spring::new(DT, 6.0, zeta);
            let path = trajectory(s, 0.0, 10.0, 300);
            let mut prev = 0.0;
            for p in path.iter().copied() {
                assert!(p <= 10.0, "zeta {zeta} overshot: {p}");
                assert!(p >= prev, "zeta {zeta} went backwards");
                prev = p;
            }
            assert!((10.0 - prev).abs() < 1e-3, "zeta {zeta} did not settle: {prev}");
        }
    }

    #[test]
    fn under_damped_overshoots_shrink() {
        for (omega, zeta) in [(4.0, 0.3), (6.0, 0.45), (8.0, 0.65)] {
            let s = Spring::new(DT, omega, zeta);
            let path = trajectory(s, 0.0, 10.0, 900);

            // Peak |offset| of every excursion past the target.
            let mut peaks = Vec::new();
            let mut current: Option<f64> = None;
            let mut above = false;
            for p in path {
                let off = p - 10.0;
                let now_above = off > 0.0;
                if now_above != above {
                    if let Some(peak) = current.take() {
                        peaks.push(peak);
                    }
                    above = now_above;
                }
                if above || !peaks.is_empty() || current.is_some() {
                    let m = current.unwrap_or(0.0).max(off.abs());
                    current = Some(m);
                }
            }

            assert!(peaks.len() >= 3, "omega {omega} zeta {zeta}: {peaks:?}");
            for w in peaks.windows(2).take(6) {
                assert!(w[1] < w[0], "omega {omega} zeta {zeta}: {peaks:?}");
            }
        }
    }

    #[test]
    fn stable_across_parameter_range() {
        for omega in [4.0, 5.0, 6.0, 7.0, 8.0] {
            for zeta in [0.3, 0.4, 0.5, 0.65] {
                let s = Spring::new(DT, omega, zeta);
                let path = trajectory(s, -20.0, 20.0, 2000);
                assert!(path.iter().all(|p| p.is_finite() && p.abs() < 60.0));
                assert!((path[path.len() - 1] - 20.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn axis_follows_moving_target() {
        let mut axis = SpringAxis::new(Spring::new(DT, 6.0, 0.5), 0.0);
        for t in 0..600 {
            axis.retarget(5.0 + (t as f64 / 100.0).min(3.0));
            axis.step();
        }
        assert!((axis.position - 8.0).abs() < 1e-2);
    }
}
