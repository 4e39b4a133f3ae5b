use std::collections::HashSet;
use std::time::Duration;

use super::ObserverOptions;

pub const COUNTER_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.5,
    bottom_margin_px: 100,
};

/// Count-up animation from 0 to a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    duration: Duration,
    frame: Duration,
}

impl CounterAnimation {
    /// Two seconds at roughly 60 frames per second.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            duration: Duration::from_millis(2000),
            frame: Duration::from_millis(16),
        }
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame
    }

    /// Displayed strings, one per frame; the last one is exactly the target.
    #[must_use]
    pub fn frames(&self) -> CounterFrames {
        let steps = self.duration.as_secs_f64() / self.frame.as_secs_f64();
        CounterFrames {
            target: self.target,
            increment: self.target / steps,
            current: 0.0,
            done: false,
        }
    }
}

pub struct CounterFrames {
    target: f64,
    increment: f64,
    current: f64,
    done: bool,
}

impl Iterator for CounterFrames {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            self.done = true;
        }
        Some(format_counter(self.current, self.target))
    }
}

/// Small targets keep one decimal, everything else is floored to an integer.
#[must_use]
pub fn format_counter(value: f64, target: f64) -> String {
    if target < 10.0 {
        format!("{value:.1}")
    } else {
        format!("{}", value.floor())
    }
}

/// Remembers which counters already ran; each element animates at most once.
#[derive(Debug, Default, Clone)]
pub struct CounterTracker {
    fired: HashSet<String>,
}

impl CounterTracker {
    /// Returns `true` the first time an element id becomes visible.
    pub fn trigger(&mut self, element_id: &str) -> bool {
        self.fired.insert(element_id.to_string())
    }

    #[must_use]
    pub fn has_fired(&self, element_id: &str) -> bool {
        self.fired.contains(element_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_end_exactly_on_target() {
        let frames: Vec<String> = CounterAnimation::new(250.0).frames().collect();
        assert_eq!(frames.last().map(String::as_str), Some("250"));
        assert!((124..=126).contains(&frames.len()), "{}", frames.len());
        assert_eq!(frames[0], "2");
    }

    #[test]
    fn small_targets_keep_one_decimal() {
        let frames: Vec<String> = CounterAnimation::new(8.5).frames().collect();
        assert_eq!(frames.last().map(String::as_str), Some("8.5"));
        assert_eq!(frames[0], "0.1");
    }

    #[test]
    fn zero_target_is_a_single_frame() {
        let frames: Vec<String> = CounterAnimation::new(0.0).frames().collect();
        assert_eq!(frames, vec!["0.0".to_string()]);
    }

    #[test]
    fn tracker_fires_once_per_element() {
        let mut tracker = CounterTracker::default();
        assert!(tracker.trigger("trees"));
        assert!(!tracker.trigger("trees"));
        assert!(tracker.trigger("waste"));
        assert!(tracker.has_fired("trees"));
        assert!(!tracker.has_fired("co2"));
    }

    #[test]
    fn observer_margin() {
        assert_eq!(COUNTER_OBSERVER.root_margin(), "0px 0px -100px 0px");
    }
}
