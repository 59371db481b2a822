use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }
    pub fn add(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x + o.x, y: self.y + o.y }
    }
    pub fn sub(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x - o.x, y: self.y - o.y }
    }
    pub fn scale(self, k: f32) -> Vec2 {
        Vec2 { x: self.x * k, y: self.y * k }
    }
    pub fn len(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
    /// Point at `radius` from the origin along `angle` (radians).
    pub fn polar(radius: f32, angle: f32) -> Vec2 {
        let (s, c) = angle.sin_cos();
        Vec2 { x: radius * c, y: radius * s }
    }
    pub fn within(self, half_extent: f32) -> bool {
        (-half_extent..=half_extent).contains(&self.x)
            && (-half_extent..=half_extent).contains(&self.y)
    }
}

pub fn deg(x: f32) -> f32 {
    x * PI / 180.0
}

pub fn clamp01(x: f32) -> f32 {
    x.max(0.0).min(1.0)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Bearing from `from` to `to` in degrees, in `(-180, 180]`.
pub fn bearing_deg(from: Vec2, to: Vec2) -> f32 {
    let d = to.sub(from);
    d.y.atan2(d.x).to_degrees()
}

/// Smallest absolute difference between two angles in degrees.
pub fn angle_between_deg(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_quarter_turn() {
        let p = Vec2::polar(2.0, PI / 2.0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn bearing_points_toward_target() {
        assert!((bearing_deg(Vec2::ZERO, Vec2::new(0.0, 1.0)) - 90.0).abs() < 1e-4);
        assert!((bearing_deg(Vec2::new(1.0, 0.0), Vec2::ZERO).abs() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn angle_between_wraps() {
        assert!((angle_between_deg(350.0, 10.0) - 20.0).abs() < 1e-4);
        assert!((angle_between_deg(-90.0, 270.0)).abs() < 1e-4);
    }

    #[test]
    fn within_is_inclusive() {
        assert!(Vec2::new(1.2, -1.2).within(1.2));
        assert!(!Vec2::new(1.2001, 0.0).within(1.2));
    }
}
