use sinew_core::{ContinuousMap, DifferentiableMap};

use super::{
    Config, Roots,
    solve::{horner, horner_derivative, solve_cubic_with, solve_quadratic_with, solve_quartic_with},
};

macro_rules! define_polynomials {
    (
        $(
            $(#[$meta:meta])*
            $name:ident, $degree:literal, $solve:ident, [$($coef:ident),+];
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq)]
            pub struct $name {
                coefficients: [f64; $degree + 1],
            }

            impl $name {
                /// Creates the polynomial from coefficients ordered highest degree first.
                #[must_use]
                pub const fn new($($coef: f64),+) -> Self {
                    Self {
                        coefficients: [$($coef),+],
                    }
                }

                /// Returns the coefficients ordered highest degree first.
                #[must_use]
                pub const fn coefficients(&self) -> [f64; $degree + 1] {
                    self.coefficients
                }

                /// Returns the real roots, ascending, with the default [`Config`].
                #[must_use]
                pub fn roots(&self) -> Roots {
                    self.roots_with(&Config::default())
                }

                /// Returns the real roots, ascending.
                #[must_use]
                pub fn roots_with(&self, config: &Config) -> Roots {
                    let [$($coef),+] = self.coefficients;
                    $solve($($coef,)+ config)
                }
            }

            impl ContinuousMap for $name {
                type Domain = f64;
                type Codomain = f64;

                fn evaluate(&self, x: f64) -> f64 {
                    horner(&self.coefficients, x)
                }
            }

            impl DifferentiableMap for $name {
                fn derivative(&self, x: f64) -> f64 {
                    horner_derivative(&self.coefficients, x)
                }
            }
        )+
    };
}

define_polynomials!(
    /// `a*x² + b*x + c`, e.g. a radius profile for a joint surface.
    QuadraticFunction, 2, solve_quadratic_with, [a, b, c];
    /// `a*x³ + b*x² + c*x + d`.
    CubicFunction, 3, solve_cubic_with, [a, b, c, d];
    /// `a*x⁴ + b*x³ + c*x² + d*x + e`.
    QuarticFunction, 4, solve_quartic_with, [a, b, c, d, e];
);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn evaluates_with_horner() {
        let f = QuadraticFunction::new(1.0, 1.0, 1.0);
        assert_relative_eq!(f.evaluate(2.0), 7.0);
        assert_relative_eq!(f.derivative(2.0), 5.0);

        let g = QuarticFunction::new(5.0, 8.0, 2.0, -2.0, -7.0);
        assert_relative_eq!(g.evaluate(1.0), 6.0);
        assert_relative_eq!(g.derivative(-1.0), -20.0 + 24.0 - 4.0 - 2.0);
    }

    #[test]
    fn roots_are_zeros_of_the_map() {
        let f = CubicFunction::new(2.0, -3.0, -11.0, 6.0);
        let roots = f.roots();

        assert_eq!(roots.len(), 3);
        for root in roots {
            assert_relative_eq!(f.evaluate(root), 0.0, epsilon = 1e-9);
        }
    }
}
