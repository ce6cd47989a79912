use std::time::{Duration, Instant};

/// Ease-in-out quadratic curve. Accelerates until the halfway point, then
/// decelerates symmetrically: `f(0)=0`, `f(0.5)=0.5`, `f(1)=1`.
#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// A time-based interpolation from one scroll offset to another. The
/// animation is plain state owned by `AppState`; replacing or dropping it
/// cancels any further frames, so nothing keeps running after the view that
/// started it is gone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    start: f64,
    distance: f64,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(start: f64, target: f64, duration: Duration, now: Instant) -> Self {
        Self {
            start,
            distance: target - start,
            started_at: now,
            duration,
        }
    }

    fn progress(&self, now: Instant) -> f64 {
        // A degenerate duration degrades to an immediate jump to the target.
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Offset to display at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> f64 {
        self.start + self.distance * ease_in_out_quad(self.progress(now))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.start + self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_the_fixed_points() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic_non_decreasing() {
        let mut last = 0.0;
        for i in 0..=1000 {
            let value = ease_in_out_quad(f64::from(i) / 1000.0);
            assert!(value >= last, "dipped at t={}", f64::from(i) / 1000.0);
            last = value;
        }
    }

    #[test]
    fn easing_clamps_out_of_range_input() {
        assert_eq!(ease_in_out_quad(-1.0), 0.0);
        assert_eq!(ease_in_out_quad(2.0), 1.0);
    }

    #[test]
    fn animation_interpolates_between_start_and_target() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(0.0, 100.0, Duration::from_millis(400), start);

        assert_eq!(anim.sample(start), 0.0);
        assert_eq!(anim.sample(start + Duration::from_millis(200)), 50.0);
        assert_eq!(anim.sample(start + Duration::from_millis(400)), 100.0);
        assert!(anim.is_finished(start + Duration::from_millis(400)));
        assert!(!anim.is_finished(start + Duration::from_millis(399)));
    }

    #[test]
    fn animation_holds_target_after_the_deadline() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(10.0, 20.0, Duration::from_millis(100), start);
        assert_eq!(anim.sample(start + Duration::from_secs(5)), 20.0);
    }

    #[test]
    fn zero_duration_jumps_straight_to_target() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(0.0, 42.0, Duration::ZERO, start);
        assert_eq!(anim.sample(start), 42.0);
        assert!(anim.is_finished(start));
    }

    #[test]
    fn animation_can_scroll_upward() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(80.0, 20.0, Duration::from_millis(200), start);
        assert_eq!(anim.sample(start + Duration::from_millis(100)), 50.0);
        assert_eq!(anim.target(), 20.0);
    }
}
