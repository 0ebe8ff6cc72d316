//! Timing math for scroll reveals and the animated counters.

pub const FRAME_MS: f64 = 1000.0 / 60.0;

pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t)
}

/// Delay before the `index`-th element of a staggered group starts.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
    Stagger { step_ms: u32 },
    Immediate,
}

impl RevealStyle {
    pub fn delay(self, index: usize) -> u32 {
        match self {
            RevealStyle::Stagger { step_ms } => stagger_delay(index, step_ms),
            RevealStyle::Immediate => 0,
        }
    }
}

/// Fire-once latch for visibility watchers: reports the first intersection
/// and nothing after it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealTracker {
    fired: bool,
}

impl RevealTracker {
    /// Returns true only for the call that reveals the element.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.fired || !is_intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u32,
    pub done: bool,
}

/// Counts from 0 to `target` over a fixed number of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    total_frames: u32,
    frame: u32,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        // small numbers finish sooner so they don't crawl
        let duration_ms = if target < 20 { 1000.0 } else { 2000.0 };
        let total_frames = (duration_ms / FRAME_MS).round().max(1.0) as u32;
        Self {
            target,
            total_frames,
            frame: 0,
        }
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.frame = (self.frame + 1).min(self.total_frames);
        if self.frame >= self.total_frames {
            return CounterFrame {
                value: self.target,
                done: true,
            };
        }
        let progress = ease_out_quad(f64::from(self.frame) / f64::from(self.total_frames));
        CounterFrame {
            value: (f64::from(self.target) * progress).round() as u32,
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
        assert_eq!(ease_out_quad(3.0), 1.0);
    }

    #[test]
    fn reveal_fires_once() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.observe(false));
        assert!(tracker.observe(true));
        for visible in [false, true, false, true] {
            assert!(!tracker.observe(visible));
        }
        assert!(tracker.fired());
    }

    #[test]
    fn counter_duration_depends_on_target() {
        assert_eq!(CounterAnimation::new(12).total_frames(), 60);
        assert_eq!(CounterAnimation::new(250).total_frames(), 120);
    }

    #[test]
    fn counter_climbs_and_lands_on_target() {
        let mut counter = CounterAnimation::new(150);
        let mut last = 0;
        let mut frames = 0;
        loop {
            let frame = counter.tick();
            frames += 1;
            assert!(frame.value >= last);
            last = frame.value;
            if frame.done {
                break;
            }
        }
        assert_eq!(last, 150);
        assert_eq!(frames, counter.total_frames());
        // stays finished
        assert_eq!(counter.tick(), CounterFrame { value: 150, done: true });
    }

    #[test]
    fn stagger_styles() {
        assert_eq!(RevealStyle::Stagger { step_ms: 150 }.delay(3), 450);
        assert_eq!(RevealStyle::Immediate.delay(3), 0);
    }
}
