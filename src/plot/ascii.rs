//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - one curve per model, drawn with that model's glyph
//! - optional log-spaced x axis (the published comparisons are semilog-x)
//! - a legend line mapping glyphs to model names

use crate::domain::{IntensityEstimate, IpeKind};

/// Glyphs assigned to models, in `IpeKind::ALL` order (mirrors the marker
/// cycle of the published comparison plot).
const GLYPHS: [char; 5] = ['o', '^', 's', 'd', 'x'];

/// Glyph used when drawing a model's curve.
pub fn glyph_for(kind: IpeKind) -> char {
    let idx = IpeKind::ALL
        .iter()
        .position(|&k| k == kind)
        .unwrap_or_default();
    GLYPHS[idx]
}

/// Render intensity-vs-distance curves for several models on one grid.
///
/// `series` pairs each model with its curve over `rjb` (same length, same
/// order). Later series draw over earlier ones where cells collide.
pub fn render_atten_plot(
    rjb: &[f64],
    series: &[(IpeKind, Vec<IntensityEstimate>)],
    width: usize,
    height: usize,
    log_x: bool,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let Some((x_min, x_max)) = x_range(rjb, log_x) else {
        return String::from("(nothing to plot)\n");
    };
    let (y_min, y_max) = y_range(series).unwrap_or((1.0, 10.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    for (kind, curve) in series {
        let ch = glyph_for(*kind);
        let mut prev = None;
        for (&r, est) in rjb.iter().zip(curve.iter()) {
            let x = map_x(axis_value(r, log_x), x_min, x_max, width);
            let y = map_y(est.mmi, y_min, y_max, height);
            if let Some((x0, y0)) = prev {
                draw_line(&mut grid, x0, y0, x, y, ch);
            } else {
                grid[y][x] = ch;
            }
            prev = Some((x, y));
        }
    }

    let mut out = String::new();
    let axis = if log_x { "log" } else { "linear" };
    out.push_str(&format!(
        "Plot: rjb=[{:.1}, {:.1}] km ({axis}) | MMI=[{y_min:.2}, {y_max:.2}]\n",
        rjb.first().copied().unwrap_or(0.0),
        rjb.last().copied().unwrap_or(0.0),
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    let legend: Vec<String> = series
        .iter()
        .map(|(kind, _)| format!("{} {}", glyph_for(*kind), kind.display_name()))
        .collect();
    out.push_str(&format!("Legend: {}\n", legend.join(" | ")));

    out
}

fn axis_value(r: f64, log_x: bool) -> f64 {
    if log_x { r.log10() } else { r }
}

fn x_range(rjb: &[f64], log_x: bool) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &r in rjb {
        let v = axis_value(r, log_x);
        min_x = min_x.min(v);
        max_x = max_x.max(v);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(series: &[(IpeKind, Vec<IntensityEstimate>)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (_, curve) in series {
        for est in curve {
            min_y = min_y.min(est.mmi);
            max_y = max_y.max(est.mmi);
        }
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish). Only fills empty cells so earlier
/// strokes of the same curve are not overdrawn mid-segment.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
