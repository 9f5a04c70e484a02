//! Bounded scalar minimization
//!
//! Golden-section search safeguarded by parabolic interpolation over a closed
//! interval. Swept-path volumes rely on this routine for both membership
//! queries and bounds inference, so it favors robustness on awkward
//! one-dimensional landscapes over raw convergence speed. Trial points are
//! kept strictly inside the interval; the returned argument can approach an
//! endpoint but never equals it exactly.

/// Absolute tolerance on the returned argument.
pub const X_TOLERANCE: f64 = 1e-5;

/// Hard cap on objective evaluations per search.
pub const MAX_EVALS: usize = 500;

/// Find the argument minimizing `f` over the closed interval `[lo, hi]`.
///
/// # Arguments
/// * `f` - Objective function, evaluated only at interior points
/// * `lo` - Lower end of the search interval
/// * `hi` - Upper end of the search interval, must be >= `lo`
///
/// # Returns
/// * The argument of the minimum, within [`X_TOLERANCE`]
///
/// # Example
/// ```rust
/// use voxcast_volumes::minimize_scalar;
///
/// let x = minimize_scalar(|t| (t - 2.0) * (t - 2.0), 0.0, 5.0);
/// assert!((x - 2.0).abs() < 1e-4);
/// ```
pub fn minimize_scalar<F>(f: F, lo: f64, hi: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    debug_assert!(lo <= hi, "search interval must satisfy lo <= hi");

    let golden_mean = 0.5 * (3.0 - 5.0_f64.sqrt());
    let sqrt_eps = 2.2e-16_f64.sqrt();

    let (mut a, mut b) = (lo, hi);
    let mut xf = a + golden_mean * (b - a);
    let mut nfc = xf;
    let mut fulc = xf;
    let mut rat = 0.0_f64;
    let mut e = 0.0_f64;

    let mut fx = f(xf);
    let mut evals = 1;
    let mut fnfc = fx;
    let mut ffulc = fx;

    let mut xm = 0.5 * (a + b);
    let mut tol1 = sqrt_eps * xf.abs() + X_TOLERANCE / 3.0;
    let mut tol2 = 2.0 * tol1;

    while (xf - xm).abs() > tol2 - 0.5 * (b - a) {
        let mut golden = true;

        // Try a parabola through the three best points so far.
        if e.abs() > tol1 {
            golden = false;
            let mut r = (xf - nfc) * (fx - ffulc);
            let mut q = (xf - fulc) * (fx - fnfc);
            let mut p = (xf - fulc) * q - (xf - nfc) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            r = e;
            e = rat;

            // The fit must land inside the interval and beat the previous
            // step; otherwise fall back to a golden-section step.
            if p.abs() < (0.5 * q * r).abs() && p > q * (a - xf) && p < q * (b - xf) {
                rat = p / q;
                let trial = xf + rat;
                if (trial - a) < tol2 || (b - trial) < tol2 {
                    rat = tol1 * sign_or_one(xm - xf);
                }
            } else {
                golden = true;
            }
        }

        if golden {
            e = if xf >= xm { a - xf } else { b - xf };
            rat = golden_mean * e;
        }

        // Never evaluate closer than tol1 to the current best point.
        let x = xf + sign_or_one(rat) * rat.abs().max(tol1);
        let fu = f(x);
        evals += 1;

        if fu <= fx {
            if x >= xf {
                a = xf;
            } else {
                b = xf;
            }
            fulc = nfc;
            ffulc = fnfc;
            nfc = xf;
            fnfc = fx;
            xf = x;
            fx = fu;
        } else {
            if x < xf {
                a = x;
            } else {
                b = x;
            }
            if fu <= fnfc || nfc == xf {
                fulc = nfc;
                ffulc = fnfc;
                nfc = x;
                fnfc = fu;
            } else if fu <= ffulc || fulc == xf || fulc == nfc {
                fulc = x;
                ffulc = fu;
            }
        }

        xm = 0.5 * (a + b);
        tol1 = sqrt_eps * xf.abs() + X_TOLERANCE / 3.0;
        tol2 = 2.0 * tol1;

        if evals >= MAX_EVALS {
            break;
        }
    }

    xf
}

/// Find the argument maximizing `f` over the closed interval `[lo, hi]`.
pub fn maximize_scalar<F>(f: F, lo: f64, hi: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    minimize_scalar(|t| -f(t), lo, hi)
}

fn sign_or_one(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}
