//! Bracketed search primitives.
//!
//! Generic, stateless minimizer building blocks: dichotomy search over
//! reals and integers, and a single-sweep coordinate descent over integer
//! vectors. Objectives are caller-supplied closures; unimodality on the
//! bracket is the caller's contract and is not detected here.
//!
//! Integer objectives are generic over any totally-orderable return value,
//! so a `Time`-valued objective composes without conversion.
//!
//! # Reference
//! Kiefer (1953), "Sequential minimax search for a maximum"

/// Approximate minimizer of a unimodal scalar objective on `[lo, hi]`.
///
/// Compares the objective at two interior points straddling the midpoint
/// by `eps / 5` and discards the losing half-interval until the bracket
/// width drops to `eps`. Returns the lower bound of the final bracket.
///
/// # Panics
/// When `lo > hi` (malformed bracket, a caller configuration error).
pub fn dichotomy_float(lo: f64, hi: f64, eps: f64, mut objective: impl FnMut(f64) -> f64) -> f64 {
    assert!(lo <= hi, "malformed bracket: lo ({lo}) > hi ({hi})");
    let delta = eps / 5.0;
    let (mut lo, mut hi) = (lo, hi);
    while hi - lo > eps {
        let x1 = (lo + hi - delta) / 2.0;
        let x2 = (lo + hi + delta) / 2.0;
        if objective(x1) < objective(x2) {
            hi = x2;
        } else {
            lo = x1;
        }
    }
    lo
}

/// Approximate minimizer of a unimodal integer objective on `[lo, hi]`.
///
/// Compares the objective at the two integers straddling the midpoint and
/// keeps the winning side; the bracket shrinks every iteration, so the
/// search takes O(log(hi − lo)) objective evaluations. A midpoint tie
/// (`x1 == x2`) terminates directly; otherwise the floor midpoint of the
/// final width-≤2 bracket is returned. The result is within the bracket
/// but may sit one step off the true minimizer; callers needing exactness
/// refine locally.
///
/// # Panics
/// When `lo > hi` (malformed bracket, a caller configuration error).
pub fn dichotomy_int<O: PartialOrd>(
    lo: i64,
    hi: i64,
    mut objective: impl FnMut(i64) -> O,
) -> i64 {
    assert!(lo <= hi, "malformed bracket: lo ({lo}) > hi ({hi})");
    let (mut lo, mut hi) = (lo, hi);
    while hi - lo > 2 {
        let x1 = (lo + hi - 1) >> 1;
        let x2 = (lo + hi + 1) >> 1;
        if x1 == x2 {
            return x1;
        }
        if objective(x1) < objective(x2) {
            hi = x2;
        } else {
            lo = x1;
        }
    }
    (hi + lo) >> 1
}

/// Single left-to-right coordinate-descent sweep over an integer vector.
///
/// Starts from `lo` and optimizes one coordinate at a time with `method`
/// (a scalar bracket search such as [`dichotomy_int`]), holding every
/// other coordinate at its current value. Later coordinates see the
/// already-updated values of earlier ones. Each coordinate is visited
/// exactly once; callers wanting convergence to a fixed point use
/// [`coordinate_descent_sweeps`].
///
/// # Panics
/// When the bound slices differ in length or any `lo[i] > hi[i]`.
pub fn coordinate_descent<O: PartialOrd>(
    lo: &[i64],
    hi: &[i64],
    mut method: impl FnMut(i64, i64, &mut dyn FnMut(i64) -> O) -> i64,
    mut objective: impl FnMut(&[i64]) -> O,
) -> Vec<i64> {
    assert_eq!(lo.len(), hi.len(), "bound vectors must have equal length");
    let mut cur = lo.to_vec();
    sweep(&mut cur, lo, hi, &mut method, &mut objective);
    cur
}

/// Repeated coordinate-descent sweeps.
///
/// Runs the single sweep of [`coordinate_descent`] up to `sweeps` times,
/// each sweep starting from the previous result but searching the original
/// per-coordinate brackets, and stops early once a sweep leaves the vector
/// unchanged.
pub fn coordinate_descent_sweeps<O: PartialOrd>(
    lo: &[i64],
    hi: &[i64],
    sweeps: usize,
    mut method: impl FnMut(i64, i64, &mut dyn FnMut(i64) -> O) -> i64,
    mut objective: impl FnMut(&[i64]) -> O,
) -> Vec<i64> {
    assert_eq!(lo.len(), hi.len(), "bound vectors must have equal length");
    let mut cur = lo.to_vec();
    for _ in 0..sweeps {
        let prev = cur.clone();
        sweep(&mut cur, lo, hi, &mut method, &mut objective);
        if cur == prev {
            break;
        }
    }
    cur
}

fn sweep<O: PartialOrd>(
    cur: &mut [i64],
    lo: &[i64],
    hi: &[i64],
    method: &mut impl FnMut(i64, i64, &mut dyn FnMut(i64) -> O) -> i64,
    objective: &mut impl FnMut(&[i64]) -> O,
) {
    for i in 0..cur.len() {
        let best = method(lo[i], hi[i], &mut |x| {
            cur[i] = x;
            objective(cur)
        });
        cur[i] = best;
    }
}
