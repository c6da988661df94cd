//! Fixed-rate tick scheduling for hosts with variable frame times.

use crate::error::RopeError;
use crate::float::Float;

/// Accumulates frame time and hands out whole fixed ticks.
///
/// ```
/// use verlet_rope::timestep::FixedTimestep;
///
/// let mut clock = FixedTimestep::new(1.0f32 / 50.0).unwrap();
/// for _ in 0..clock.advance(1.0 / 60.0) {
///     // rope.tick(clock.step(), &world, &mut observer)?;
/// }
/// let _alpha = clock.alpha(); // blend previous/current positions when drawing
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FixedTimestep<F: Float> {
    step: F,
    accumulator: F,
    max_steps_per_frame: usize,
}

impl<F: Float> FixedTimestep<F> {
    pub fn new(step: F) -> Result<Self, RopeError> {
        if !step.is_finite() || step <= F::zero() {
            return Err(RopeError::InvalidTimestep);
        }
        Ok(FixedTimestep {
            step,
            accumulator: F::zero(),
            max_steps_per_frame: 8,
        })
    }

    /// Cap on ticks returned by one [`advance`](Self::advance). Time beyond
    /// the cap is discarded so a slow frame cannot snowball. Default: 8.
    pub fn with_max_steps_per_frame(mut self, max_steps: usize) -> Self {
        self.max_steps_per_frame = max_steps.max(1);
        self
    }

    /// Add `frame_dt` and return how many fixed ticks to run now.
    /// Negative or non-finite frame times are ignored.
    pub fn advance(&mut self, frame_dt: F) -> usize {
        if frame_dt.is_finite() && frame_dt > F::zero() {
            self.accumulator = self.accumulator + frame_dt;
        }

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps_per_frame {
            self.accumulator = self.accumulator - self.step;
            steps += 1;
        }
        if self.accumulator >= self.step {
            log::debug!("fixed timestep fell behind; dropping accumulated time");
            self.accumulator = F::zero();
        }
        steps
    }

    /// Fraction of a tick left in the accumulator, in `[0, 1)`.
    pub fn alpha(&self) -> F {
        self.accumulator / self.step
    }

    pub fn step(&self) -> F {
        self.step
    }

    pub fn reset(&mut self) {
        self.accumulator = F::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_step() {
        assert_eq!(FixedTimestep::new(0.0f32), Err(RopeError::InvalidTimestep));
        assert_eq!(FixedTimestep::new(-1.0f32), Err(RopeError::InvalidTimestep));
        assert_eq!(FixedTimestep::new(f32::NAN), Err(RopeError::InvalidTimestep));
    }

    #[test]
    fn yields_whole_steps_and_keeps_remainder() {
        let mut clock = FixedTimestep::new(0.25f64).unwrap();
        assert_eq!(clock.advance(0.625), 2);
        assert_eq!(clock.alpha(), 0.5);
        assert_eq!(clock.advance(0.125), 1);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn clamps_runaway_frames() {
        let mut clock = FixedTimestep::new(0.25f64).unwrap().with_max_steps_per_frame(3);
        assert_eq!(clock.advance(100.0), 3);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn ignores_negative_frames() {
        let mut clock = FixedTimestep::new(0.5f32).unwrap();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}
