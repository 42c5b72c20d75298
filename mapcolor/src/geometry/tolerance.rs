// Centralized tolerances and helpers for view and hit-test math

pub const EPS_EXTENT: f64 = 1e-12;        // content width/height treated as zero
pub const EPS_ZOOM: f64 = 1e-12;          // smallest zoom factor accepted

#[inline] pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 { x.max(lo).min(hi) }
#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

#[inline]
pub fn safe_div(num: f64, den: f64, fallback: f64) -> f64 {
    if den.abs() <= EPS_EXTENT { fallback } else { num/den }
}
