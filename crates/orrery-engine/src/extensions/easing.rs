// extensions/easing.rs
//
// Easing curve and interpolation helper for tweens. Pure math.

use glam::Vec3;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Slow end. Matches the common "power1.out" default of web tween libraries.
    #[default]
    QuadOut,
}

impl Easing {
    /// Map normalized time `t` in [0, 1] to eased progress in [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Interpolate a Vec3 with easing.
#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: Easing) -> Vec3 {
    lerp_vec3(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert!(Easing::QuadOut.apply(0.0).abs() < 1e-6);
        assert!((Easing::QuadOut.apply(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn quad_out_front_loads_motion() {
        let mid = Easing::QuadOut.apply(0.5);
        assert!((mid - 0.75).abs() < 1e-6, "QuadOut at 0.5 = {}", mid);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::QuadOut.apply(-1.0), 0.0);
        assert_eq!(Easing::QuadOut.apply(2.0), 1.0);
    }

    #[test]
    fn ease_vec3_interpolates() {
        let v = ease_vec3(Vec3::ZERO, Vec3::new(0.0, 300.0, 0.0), 0.5, Easing::QuadOut);
        assert!((v.y - 225.0).abs() < 1e-3);
        assert_eq!(lerp_vec3(Vec3::ZERO, Vec3::X * 4.0, 0.25), Vec3::X);
    }
}
