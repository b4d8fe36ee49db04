//! Formula bodies.
//!
//! Every body is a literal transcription of its expression. Operand order and
//! grouping are kept as written, since `f64` arithmetic is not associative; do
//! not simplify. Bodies index `x` directly and rely on [`Formula`] to check the
//! length first.
//!
//! [`Formula`]: crate::Formula

pub(crate) fn f0(x: &[f64]) -> f64 {
    x[0] + x[1].sin() / 5.0
}

pub(crate) fn f1(x: &[f64]) -> f64 {
    x[0].sin()
}

pub(crate) fn f2(x: &[f64]) -> f64 {
    ((x[0] + (x[1] + x[1])) * (x[0] + x[2]).abs().sqrt().cos()
        + ((x[2] + x[1]) * (x[0].sin() / (x[0] + 1e-20)) + (x[0].sin() + x[0]) * 2.0))
        * 700_000.0
}

pub(crate) fn f3(x: &[f64]) -> f64 {
    ((4.0 - x[2] * (7.0 / 2.0)) + x[0] * (x[0] + x[0])) + (x[1] * x[1]) * (0.0 - x[1])
}

pub(crate) fn f4(x: &[f64]) -> f64 {
    (7.0 * x[1].cos() + 27.0_f64.ln()) + (7.0 * x[0]) / -75.0
}

pub(crate) fn f5(x: &[f64]) -> f64 {
    (((x[1] / 100.0) * (x[0] / 50.0)).sin() - (x[1] / 100.0) * (x[0] / 50.0))
        * (x[1].cos().cos() * x[1].cos().cos())
}

pub(crate) fn f6(x: &[f64]) -> f64 {
    (7.0 / 10.0) * (x[1] - x[0]) + x[1]
}

pub(crate) fn f7(x: &[f64]) -> f64 {
    (((-71.0 * x[0]) * ((x[0] / 24.0) * x[1])) / ((x[0] - x[1]).abs() + (-66.0_f64).sin())).abs()
}

pub(crate) fn f8(x: &[f64]) -> f64 {
    (((x[5] * x[5]) * x[5]) * ((x[5] * x[5]) * x[5]).abs() + (x[5] * x[5].abs().sqrt()) * 90.0)
        + x[4] * (x[4] * -75.0)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn f0_adds_scaled_sine() {
        assert_relative_eq!(f0(&[1.0, 0.0]), 1.0);
        assert_relative_eq!(f0(&[0.0, FRAC_PI_2]), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn f1_is_sine_of_first_feature() {
        assert_eq!(f1(&[0.0]), 0.0);
        assert_relative_eq!(f1(&[FRAC_PI_2]), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn f2_offset_denominator_only_vanishes_at_negative_offset() {
        // The 1e-20 offset keeps x[0] = 0 finite; x[0] = -1e-20 divides by zero.
        assert_eq!(f2(&[0.0, 0.0, 0.0]), 0.0);
        assert!(f2(&[-1e-20, 0.0, 0.0]).is_nan());
    }

    #[test]
    fn f2_matches_hand_computation() {
        let x = [1.0_f64, 2.0, 3.0];
        let expected = (5.0 * 2.0_f64.cos() + (5.0 * 1.0_f64.sin() + (1.0_f64.sin() + 1.0) * 2.0))
            * 700_000.0;
        assert_relative_eq!(f2(&x), expected, max_relative = 1e-12);
    }

    #[test]
    fn f3_is_cubic_in_second_feature() {
        // 4 - 3.5 + 2 - 1
        assert_relative_eq!(f3(&[1.0, 1.0, 1.0]), 1.5);
        // 4 - 0 + 0 - (-8)
        assert_relative_eq!(f3(&[0.0, -2.0, 0.0]), 12.0);
    }

    #[test]
    fn f4_at_origin() {
        assert_relative_eq!(f4(&[0.0, 0.0]), 10.295_836_866_004_329, epsilon = 1e-12);
    }

    #[test]
    fn f5_vanishes_when_either_product_factor_is_zero() {
        assert_eq!(f5(&[0.0, 3.0]), 0.0);
        assert_eq!(f5(&[3.0, 0.0]), 0.0);
    }

    #[test]
    fn f6_weights_difference() {
        assert_relative_eq!(f6(&[1.0, 2.0]), 2.7, epsilon = 1e-12);
        assert_relative_eq!(f6(&[2.0, 2.0]), 2.0);
    }

    #[test]
    fn f7_is_non_negative() {
        assert_eq!(f7(&[0.0, 5.0]), 0.0);
        assert!(f7(&[3.0, -4.0]) > 0.0);
        assert!(f7(&[-3.0, -4.0]) > 0.0);
    }

    #[test]
    fn f8_reads_only_last_two_features() {
        let x = [9.0, 9.0, 9.0, 9.0, 1.0, 1.0];
        // 1 * 1 + 1 * 1 * 90 - 75
        assert_relative_eq!(f8(&x), 16.0);

        let y = [-5.0, 7.0, 0.1, 2.0, 1.0, 1.0];
        assert_eq!(f8(&x).to_bits(), f8(&y).to_bits());
    }
}
