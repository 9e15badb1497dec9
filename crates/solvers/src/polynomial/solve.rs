use std::f64::consts::TAU;

use super::{Config, Roots};

/// Largest Newton step, relative to `max(1, |x|)`, accepted while polishing.
///
/// Near a repeated root the derivative vanishes and a full step can land on a
/// different root.
const MAX_POLISH_STEP: f64 = 1e-4;

/// Solves `a*x + b = 0`.
///
/// Returns an empty set when `a` is zero, including the degenerate `0 = 0`.
#[must_use]
pub fn solve_linear(a: f64, b: f64) -> Roots {
    let mut roots = Roots::new();
    if a != 0.0 {
        roots.push(-b / a);
    }
    roots
}

/// Solves `a*x² + b*x + c = 0` with the default [`Config`].
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots {
    solve_quadratic_with(a, b, c, &Config::default())
}

/// Solves `a*x³ + b*x² + c*x + d = 0` with the default [`Config`].
#[must_use]
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Roots {
    solve_cubic_with(a, b, c, d, &Config::default())
}

/// Solves `a*x⁴ + b*x³ + c*x² + d*x + e = 0` with the default [`Config`].
///
/// # Example
///
/// ```
/// use sinew_solvers::polynomial::solve_quartic;
///
/// // Two real roots; the complex pair -0.1315 ± 0.9066i is excluded.
/// let roots = solve_quartic(7.0, 2.0, -6.0, -3.0, -10.0);
/// assert_eq!(roots.len(), 2);
/// assert!((roots[0] + 1.3162).abs() < 1e-4);
/// assert!((roots[1] - 1.2934).abs() < 1e-4);
/// ```
#[must_use]
pub fn solve_quartic(a: f64, b: f64, c: f64, d: f64, e: f64) -> Roots {
    solve_quartic_with(a, b, c, d, e, &Config::default())
}

/// Solves `a*x² + b*x + c = 0`.
#[must_use]
pub fn solve_quadratic_with(a: f64, b: f64, c: f64, config: &Config) -> Roots {
    if is_negligible(a, &[b, c]) {
        log::trace!("quadratic leading coefficient {a} is negligible, solving linear");
        return solve_linear(b, c);
    }

    let mut roots = monic_quadratic(b / a, c / a, config.rel_tol());
    polish(&mut roots, &[a, b, c], config);
    roots
}

/// Solves `a*x³ + b*x² + c*x + d = 0`.
#[must_use]
pub fn solve_cubic_with(a: f64, b: f64, c: f64, d: f64, config: &Config) -> Roots {
    if is_negligible(a, &[b, c, d]) {
        log::trace!("cubic leading coefficient {a} is negligible, solving quadratic");
        return solve_quadratic_with(b, c, d, config);
    }

    let mut roots = monic_cubic(b / a, c / a, d / a, config.rel_tol());
    polish(&mut roots, &[a, b, c, d], config);
    roots
}

/// Solves `a*x⁴ + b*x³ + c*x² + d*x + e = 0`.
#[must_use]
pub fn solve_quartic_with(a: f64, b: f64, c: f64, d: f64, e: f64, config: &Config) -> Roots {
    if is_negligible(a, &[b, c, d, e]) {
        log::trace!("quartic leading coefficient {a} is negligible, solving cubic");
        return solve_cubic_with(b, c, d, e, config);
    }

    let mut roots = monic_quartic(b / a, c / a, d / a, e / a, config.rel_tol());
    polish(&mut roots, &[a, b, c, d, e], config);
    roots
}

/// Returns true if `lead` is zero or lost in rounding next to `rest`.
fn is_negligible(lead: f64, rest: &[f64]) -> bool {
    let scale = rest.iter().fold(0.0_f64, |max, c| max.max(c.abs()));
    lead == 0.0 || lead.abs() <= f64::EPSILON * scale
}

/// Real roots of `x² + b*x + c`, unsorted.
///
/// A negative discriminant within `rel_tol` of the coefficient scale is a
/// double root whose imaginary part is rounding noise. The discriminant is
/// `-4y²` for roots `x ± iy`, so the cutoff on `y` is near `sqrt(rel_tol)`.
fn monic_quadratic(b: f64, c: f64, rel_tol: f64) -> Roots {
    let mut roots = Roots::new();

    let discriminant = b * b - 4.0 * c;
    let scale = b * b + (4.0 * c).abs();

    if discriminant < 0.0 {
        if discriminant >= -rel_tol * scale {
            roots.push(-0.5 * b);
        } else {
            log::trace!("quadratic discriminant {discriminant} is negative, no real roots");
        }
        return roots;
    }

    // Add same-signed terms to avoid cancellation, then recover the other
    // root from the product c = x1 * x2.
    let q = -0.5 * (b + b.signum() * discriminant.sqrt());
    if q == 0.0 {
        roots.push(0.0);
    } else {
        roots.push(q);
        roots.push(c / q);
    }
    roots
}

/// Real roots of `x³ + b*x² + c*x + d`, unsorted.
fn monic_cubic(b: f64, c: f64, d: f64, rel_tol: f64) -> Roots {
    if d == 0.0 {
        let mut roots = monic_quadratic(b, c, rel_tol);
        roots.push(0.0);
        return roots;
    }

    // Depress with x = t - b/3: t³ + p*t + q = 0.
    let shift = b / 3.0;
    let p = c - b * shift;
    let q = 2.0 * shift * shift * shift - shift * c + d;

    let half_q = 0.5 * q;
    let third_p = p / 3.0;
    let discriminant = half_q * half_q + third_p * third_p * third_p;
    let scale = half_q * half_q + (third_p * third_p * third_p).abs();

    let mut roots = Roots::new();

    if p == 0.0 {
        roots.push((-q).cbrt());
    } else if discriminant > rel_tol * scale {
        // One real root. Pick the larger-magnitude cube root so the other
        // follows from u*v = -p/3 without cancellation.
        let u = (-half_q - half_q.signum() * discriminant.sqrt()).cbrt();
        roots.push(if u == 0.0 { 0.0 } else { u - third_p / u });
    } else if discriminant < -rel_tol * scale {
        // Three distinct real roots; trigonometric form.
        let m = -third_p;
        let radius = 2.0 * m.sqrt();
        let cos_3theta = (-half_q / (m * m.sqrt())).clamp(-1.0, 1.0);
        let theta = cos_3theta.acos() / 3.0;
        for k in 0..3 {
            roots.push(radius * (theta - TAU * f64::from(k) / 3.0).cos());
        }
    } else {
        // Repeated root: a simple root and a double root.
        roots.push(3.0 * q / p);
        roots.push(-1.5 * q / p);
    }

    roots.for_each_mut(|t| t - shift);
    roots
}

/// Real roots of `x⁴ + b*x³ + c*x² + d*x + e`, unsorted.
fn monic_quartic(b: f64, c: f64, d: f64, e: f64, rel_tol: f64) -> Roots {
    if e == 0.0 {
        let mut roots = monic_cubic(b, c, d, rel_tol);
        roots.push(0.0);
        return roots;
    }

    // Depress with x = y - b/4: y⁴ + p*y² + q*y + r = 0.
    let shift = 0.25 * b;
    let b2 = b * b;
    let p = c - 0.375 * b2;
    let q = d - 0.5 * b * c + 0.125 * b2 * b;
    let r = e - 0.25 * b * d + b2 * c / 16.0 - 3.0 * b2 * b2 / 256.0;

    let q_scale = d.abs() + (0.5 * b * c).abs() + (0.125 * b2 * b).abs();

    let mut roots = if q.abs() <= rel_tol * q_scale {
        biquadratic(p, r, rel_tol)
    } else {
        ferrari(p, q, r, rel_tol)
    };

    roots.for_each_mut(|y| y - shift);
    roots
}

/// Real roots of `y⁴ + p*y² + r`.
fn biquadratic(p: f64, r: f64, rel_tol: f64) -> Roots {
    let z_scale = p.abs().max(r.abs().sqrt());
    let mut roots = Roots::new();

    for z in monic_quadratic(p, r, rel_tol) {
        if z >= -rel_tol * z_scale {
            let y = z.max(0.0).sqrt();
            roots.push(-y);
            if y > 0.0 {
                roots.push(y);
            }
        }
    }
    roots
}

/// Real roots of `y⁴ + p*y² + q*y + r` with `q` non-negligible.
///
/// With `m` a positive root of the resolvent cubic
/// `m³ + p*m² + (p²/4 - r)*m - q²/8`, the quartic factors as
/// `(y² - s*y + p/2 + m + q/(2s)) * (y² + s*y + p/2 + m - q/(2s))`
/// where `s = sqrt(2m)`.
fn ferrari(p: f64, q: f64, r: f64, rel_tol: f64) -> Roots {
    let resolvent = monic_cubic(p, 0.25 * p * p - r, -0.125 * q * q, rel_tol);
    let m = resolvent
        .as_slice()
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    if !(m > 0.0) {
        log::trace!("resolvent cubic has no positive root ({m}), treating quartic as biquadratic");
        return biquadratic(p, r, rel_tol);
    }

    let s = (2.0 * m).sqrt();
    let base = 0.5 * p + m;
    let offset = q / (2.0 * s);

    let mut roots = monic_quadratic(-s, base + offset, rel_tol);
    roots.extend(monic_quadratic(s, base - offset, rel_tol));
    roots
}

/// Refines each root with guarded Newton steps on the original polynomial,
/// then sorts and deduplicates.
///
/// `coefficients` are ordered highest degree first. A step is kept only when
/// it is small and reduces the residual, so polishing never makes a root worse.
fn polish(roots: &mut Roots, coefficients: &[f64], config: &Config) {
    roots.for_each_mut(|mut x| {
        let mut residual = horner(coefficients, x);
        for _ in 0..config.polish_iters() {
            if residual == 0.0 {
                break;
            }
            let slope = horner_derivative(coefficients, x);
            if slope == 0.0 {
                break;
            }
            let candidate = x - residual / slope;
            if (candidate - x).abs() > MAX_POLISH_STEP * x.abs().max(1.0) {
                break;
            }
            let candidate_residual = horner(coefficients, candidate);
            if !(candidate_residual.abs() < residual.abs()) {
                break;
            }
            x = candidate;
            residual = candidate_residual;
        }
        x
    });
    roots.sort_and_dedup(config.dedup_tol());
}

/// Evaluates a polynomial with coefficients ordered highest degree first.
pub(super) fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluates the first derivative of a polynomial with coefficients ordered
/// highest degree first.
pub(super) fn horner_derivative(coefficients: &[f64], x: f64) -> f64 {
    let degree = coefficients.len().saturating_sub(1);
    coefficients
        .iter()
        .take(degree)
        .enumerate()
        .fold(0.0, |acc, (i, &c)| {
            #[allow(clippy::cast_precision_loss)]
            let power = (degree - i) as f64;
            acc * x + power * c
        })
}
