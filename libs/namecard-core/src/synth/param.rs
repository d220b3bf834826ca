//! Automated parameter timeline.
//!
//! Mirrors the subset of browser `AudioParam` automation the cues need:
//! instantaneous sets and exponential ramps. Between a ramp's previous event
//! `(v0, t0)` and its target `(v1, t1)` the value is
//! `v0 * (v1 / v0) ^ ((t - t0) / (t1 - t0))`; after the last event the final
//! value holds.

#[derive(Debug, Clone, Copy, PartialEq)]
enum Event {
    Set { value: f32, time: f64 },
    ExponentialRamp { value: f32, time: f64 },
}

impl Event {
    fn time(&self) -> f64 {
        match self {
            Self::Set { time, .. } | Self::ExponentialRamp { time, .. } => *time,
        }
    }
}

/// A value that changes over time following scheduled events.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioParam {
    default: f32,
    events: Vec<Event>,
}

impl AudioParam {
    pub fn new(default: f32) -> Self {
        Self {
            default,
            events: Vec::new(),
        }
    }

    /// Jump to `value` at `time`.
    pub fn set_value_at_time(&mut self, value: f32, time: f64) -> &mut Self {
        self.insert(Event::Set { value, time });
        self
    }

    /// Ramp exponentially from the previous event to `value`, arriving at `end_time`.
    pub fn exponential_ramp_to_value_at_time(&mut self, value: f32, end_time: f64) -> &mut Self {
        self.insert(Event::ExponentialRamp {
            value,
            time: end_time,
        });
        self
    }

    /// Value at `time` seconds.
    pub fn value_at(&self, time: f64) -> f32 {
        let mut prev_value = self.default;
        let mut prev_time = 0.0;

        for event in &self.events {
            match *event {
                Event::Set { value, time: at } => {
                    if time < at {
                        return prev_value;
                    }
                    prev_value = value;
                    prev_time = at;
                }
                Event::ExponentialRamp { value, time: end } => {
                    if time < end {
                        return exponential(prev_value, value, prev_time, end, time);
                    }
                    prev_value = value;
                    prev_time = end;
                }
            }
        }

        prev_value
    }

    // Equal timestamps keep insertion order.
    fn insert(&mut self, event: Event) {
        let at = self
            .events
            .iter()
            .position(|e| e.time() > event.time())
            .unwrap_or(self.events.len());
        self.events.insert(at, event);
    }
}

fn exponential(v0: f32, v1: f32, t0: f64, t1: f64, t: f64) -> f32 {
    if t1 <= t0 {
        return v1;
    }
    // Undefined across zero or a sign change; hold the start value.
    if v0 == 0.0 || v1 == 0.0 || (v0 < 0.0) != (v1 < 0.0) {
        return v0;
    }
    let ratio = ((t - t0) / (t1 - t0)).clamp(0.0, 1.0);
    v0 * (v1 / v0).powf(ratio as f32)
}
