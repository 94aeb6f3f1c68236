//! Frame-counter movement throttle.

/// Decouples steering responsiveness from movement cadence.
///
/// Direction intents apply every frame; the body advances only on frames
/// where [`MoveThrottle::tick`] fires, once every `period` frames.
#[derive(Clone, Copy, Debug)]
pub struct MoveThrottle {
    period: u32,
    elapsed: u32,
}

impl MoveThrottle {
    /// Creates a throttle firing every `period` frames.
    ///
    /// A zero period clamps to one, advancing the snake every frame.
    #[must_use]
    pub const fn new(period: u32) -> Self {
        Self {
            period: if period == 0 { 1 } else { period },
            elapsed: 0,
        }
    }

    /// Counts one frame; true when the snake should advance on it.
    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.period {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    /// Restarts the cadence for a new session.
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::MoveThrottle;

    #[test]
    fn fires_once_per_period() {
        let mut throttle = MoveThrottle::new(3);
        let fired: Vec<bool> = (0..9).map(|_| throttle.tick()).collect();
        assert_eq!(
            fired,
            [false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn period_one_fires_every_frame() {
        let mut throttle = MoveThrottle::new(1);
        assert!(throttle.tick());
        assert!(throttle.tick());
    }

    #[test]
    fn zero_period_clamps_to_one() {
        let mut throttle = MoveThrottle::new(0);
        assert!(throttle.tick());
    }

    #[test]
    fn reset_restarts_the_cadence() {
        let mut throttle = MoveThrottle::new(3);
        assert!(!throttle.tick());
        assert!(!throttle.tick());
        throttle.reset();
        assert!(!throttle.tick());
        assert!(!throttle.tick());
        assert!(throttle.tick());
    }
}
