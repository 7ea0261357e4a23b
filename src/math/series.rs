// --- Taylor series polynomium evaluation ----

pub mod taylor {
    /// Evaluate Σ cᵢ · xⁱ using Horner's scheme
    #[must_use]
    pub fn horner(arg: f64, coefficients: &[f64]) -> f64 {
        let mut coefficients = coefficients.iter().rev();
        let Some(&last) = coefficients.next() else {
            return 0.;
        };
        coefficients.fold(last, |value, &c| value.mul_add(arg, c))
    }
}

// --- Fourier series summation using Clenshaw's recurrence ---

pub mod fourier {
    /// Evaluate Σ cᵢ cos( (2i + 1) · arg ), for i ∈ {0, ... , order - 1}, using
    /// Clenshaw summation. Takes the sine and cosine of the argument, which
    /// the callers have at hand.
    #[must_use]
    pub fn odd_cos(trig: [f64; 2], coefficients: &[f64]) -> f64 {
        let (sin_arg, cos_arg) = (trig[0], trig[1]);
        // 2 cos(2 · arg)
        let x = 2. * (cos_arg - sin_arg) * (cos_arg + sin_arg);
        let mut c0 = 0.0;
        let mut c1 = 0.0;

        for c in coefficients.iter().rev() {
            (c1, c0) = (c0, x.mul_add(c0, c - c1));
        }
        cos_arg * (c0 - c1)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::fourier::*;
    use super::taylor::*;
    use float_eq::assert_float_eq;

    #[test]
    fn horner_polynomials() {
        assert_eq!(horner(2., &[]), 0.);
        assert_eq!(horner(2., &[3.]), 3.);
        // 1 + 2x + 3x² at x = 2
        assert_eq!(horner(2., &[1., 2., 3.]), 17.);
    }

    #[test]
    fn clenshaw_odd_cosines() {
        let coefficients = [0.7, -0.2, 0.05, 0.01];
        for arg in [0., 0.3, 1.2, -2.5, 3.] {
            let (s, c) = f64::sin_cos(arg);
            let direct: f64 = coefficients
                .iter()
                .enumerate()
                .map(|(i, k)| k * ((2 * i + 1) as f64 * arg).cos())
                .sum();
            assert_float_eq!(odd_cos([s, c], &coefficients), direct, abs <= 1e-14);
        }
        assert_eq!(odd_cos([0., 1.], &[]), 0.);
    }
}
