//! Easing curves
//!
//! Names follow the GSAP conventions used when the motion was designed:
//! `powerN.out` is `1 - (1 - t)^(N + 1)` and so on.

/// An easing curve mapping linear progress in [0, 1] to eased progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    Power1In,
    Power1Out,
    Power1InOut,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3In,
    Power3Out,
    Power3InOut,
    ExpoOut,
    /// Overshoots past 1 before settling; the value is the overshoot amount
    BackOut(f32),
    /// Exponential curve used for smooth scrolling
    SmoothScroll,
}

impl Default for Ease {
    /// GSAP's default curve
    fn default() -> Self {
        Ease::Power1Out
    }
}

fn power_in(t: f32, exponent: i32) -> f32 {
    t.powi(exponent)
}

fn power_out(t: f32, exponent: i32) -> f32 {
    1.0 - (1.0 - t).powi(exponent)
}

fn power_in_out(t: f32, exponent: i32) -> f32 {
    if t < 0.5 {
        (2.0 * t).powi(exponent) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(exponent) / 2.0
    }
}

impl Ease {
    /// Eased value for `t`; input is clamped to [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1In => power_in(t, 2),
            Ease::Power1Out => power_out(t, 2),
            Ease::Power1InOut => power_in_out(t, 2),
            Ease::Power2In => power_in(t, 3),
            Ease::Power2Out => power_out(t, 3),
            Ease::Power2InOut => power_in_out(t, 3),
            Ease::Power3In => power_in(t, 4),
            Ease::Power3Out => power_out(t, 4),
            Ease::Power3InOut => power_in_out(t, 4),
            Ease::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
            Ease::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
            Ease::SmoothScroll => (1.001 - 2f32.powf(-10.0 * t)).min(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 13] = [
        Ease::Linear,
        Ease::Power1In,
        Ease::Power1Out,
        Ease::Power1InOut,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3In,
        Ease::Power3Out,
        Ease::Power3InOut,
        Ease::ExpoOut,
        Ease::BackOut(1.4),
        Ease::SmoothScroll,
    ];

    #[test]
    fn curves_start_at_zero_and_end_at_one() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 2e-3, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", ease);
        }
    }

    #[test]
    fn power2_out_is_cubic() {
        assert!((Ease::Power2Out.apply(0.5) - 0.875).abs() < 1e-6);
        assert!((Ease::Power2In.apply(0.5) - 0.125).abs() < 1e-6);
    }

    #[test]
    fn in_out_curves_are_symmetric() {
        for ease in [Ease::Power1InOut, Ease::Power2InOut, Ease::Power3InOut] {
            assert!((ease.apply(0.5) - 0.5).abs() < 1e-6);
            assert!((ease.apply(0.2) + ease.apply(0.8) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.4).apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Ease::Power3Out.apply(-1.0), 0.0);
        assert_eq!(Ease::Power3Out.apply(4.0), 1.0);
    }
}
