//! Linear interpolation over animatable value types.

/// Capability for values a tween can drive.
///
/// `lerp(from, to, 0.0)` must equal `from` and `lerp(from, to, 1.0)` must
/// equal `to`; eased factors outside `[0, 1]` (overshooting curves) must
/// extrapolate linearly.
pub trait Lerp: Clone + Send + Sync + 'static {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for f64 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * f64::from(t)
    }
}

impl<const N: usize> Lerp for [f32; N] {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mut out = *from;
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = from[i] + (to[i] - from[i]) * t;
        }
        out
    }
}
