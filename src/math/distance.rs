//! Distance helpers shared by the IPE formulas.
//!
//! The regressions all work on an effective point-source distance:
//!
//! - `R(r, h) = sqrt(r^2 + h^2)` with a model-specific pseudo-depth `h`
//! - `B(R, Rt) = log10(R / Rt)` for `R > Rt`, else exactly 0
//!
//! Numerical notes:
//! - `h > 0` for every model here, so `R > 0` and `log10(R)` is always
//!   defined; the domain checks in `models` make that assumption safe.
//! - `B` is a per-element threshold. Callers evaluating a distance sequence
//!   get exactly-zero below the transition and the log excess above it,
//!   element by element, regardless of where the sequence straddles `Rt`.

/// Effective point-source distance `sqrt(r^2 + h^2)`.
pub fn effective_distance(r: f64, pseudo_depth: f64) -> f64 {
    (r * r + pseudo_depth * pseudo_depth).sqrt()
}

/// Far-field bilinear excess: `log10(r / rt)` where positive, else 0.
///
/// This is the geometric-spreading correction that kicks in beyond the
/// transition distance `rt`. The clamp at zero is part of the model
/// definition, not a numerical guard.
pub fn bilinear_excess(r: f64, rt: f64) -> f64 {
    let b = (r / rt).log10();
    if b > 0.0 { b } else { 0.0 }
}

/// Linearly spaced grid over `[min, max]` with `steps` points (`steps >= 2`).
pub fn linear_grid(min: f64, max: f64, steps: usize) -> Vec<f64> {
    let steps = steps.max(2);
    let dx = (max - min) / (steps - 1) as f64;
    (0..steps).map(|i| min + dx * i as f64).collect()
}

/// Log-spaced grid over `[min, max]` with `steps` points (`steps >= 2`).
///
/// Requires `min > 0`; callers validate before building a log axis.
pub fn log_grid(min: f64, max: f64, steps: usize) -> Vec<f64> {
    let steps = steps.max(2);
    let (lo, hi) = (min.log10(), max.log10());
    let dx = (hi - lo) / (steps - 1) as f64;
    (0..steps).map(|i| 10f64.powf(lo + dx * i as f64)).collect()
}
