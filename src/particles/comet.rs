use crate::math::Vec2;

const COMET_SPEED: f32 = 0.004;
const COMET_WRAP: f32 = 1.5;

/// The comet crossing the overview sky from left to right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comet {
    x: f32,
}

impl Default for Comet {
    fn default() -> Self {
        Self { x: -COMET_WRAP }
    }
}

impl Comet {
    pub fn advance(&mut self, scale: f32) {
        self.x += COMET_SPEED * scale;
        if self.x > COMET_WRAP {
            self.x = -COMET_WRAP;
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, 0.75 + 0.05 * (self.x * 3.0).sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_back_to_left_edge() {
        let mut c = Comet::default();
        // 3.0 of travel at 0.004 per tick is 750 ticks
        for _ in 0..751 {
            c.advance(1.0);
        }
        assert!(c.position().x < -1.49);
    }

    #[test]
    fn bobs_around_upper_band() {
        let mut c = Comet::default();
        for _ in 0..400 {
            c.advance(1.0);
            let y = c.position().y;
            assert!((0.7..=0.8).contains(&y));
        }
    }
}
