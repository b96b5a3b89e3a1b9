//! Flight telemetry history for the graph overlay
//!
//! Flap velocity, flap amount and craft speed are sampled at a fixed cadence
//! of simulated time into ring buffers. Nothing here feeds back into the
//! simulation.

use crate::consts::{TELEMETRY_PERIOD, TELEMETRY_SAMPLES};

/// One telemetry channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    FlapVelocity,
    FlapAmount,
    CraftSpeed,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::FlapVelocity => "Flap Velocity",
            Channel::FlapAmount => "Flap Amount",
            Channel::CraftSpeed => "Player Speed",
        }
    }
}

/// Fixed-length sample history
#[derive(Debug, Clone)]
pub struct Telemetry {
    flap_velocity: [f32; TELEMETRY_SAMPLES],
    flap_amount: [f32; TELEMETRY_SAMPLES],
    craft_speed: [f32; TELEMETRY_SAMPLES],
    /// Slot the next sample is written to
    next: usize,
    timer: f32,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            flap_velocity: [0.0; TELEMETRY_SAMPLES],
            flap_amount: [0.0; TELEMETRY_SAMPLES],
            craft_speed: [0.0; TELEMETRY_SAMPLES],
            next: 0,
            timer: 0.0,
        }
    }
}

impl Telemetry {
    /// Advance the sampling timer, recording one sample each period
    pub fn update(&mut self, dt: f32, flap_velocity: f32, flap_amount: f32, craft_speed: f32) {
        self.timer += dt;
        if self.timer >= TELEMETRY_PERIOD {
            self.timer = 0.0;
            self.flap_velocity[self.next] = flap_velocity;
            self.flap_amount[self.next] = flap_amount;
            self.craft_speed[self.next] = craft_speed;
            self.next = (self.next + 1) % TELEMETRY_SAMPLES;
        }
    }

    fn buffer(&self, channel: Channel) -> &[f32; TELEMETRY_SAMPLES] {
        match channel {
            Channel::FlapVelocity => &self.flap_velocity,
            Channel::FlapAmount => &self.flap_amount,
            Channel::CraftSpeed => &self.craft_speed,
        }
    }

    /// The last `count` samples of a channel, oldest first
    pub fn recent(&self, channel: Channel, count: usize) -> impl Iterator<Item = f32> + '_ {
        let count = count.min(TELEMETRY_SAMPLES);
        let buffer = self.buffer(channel);
        let start = (self.next + TELEMETRY_SAMPLES - count) % TELEMETRY_SAMPLES;
        (0..count).map(move |i| buffer[(start + i) % TELEMETRY_SAMPLES])
    }

    /// Vertical range for graphing the last `count` samples
    ///
    /// The span is floored at 0.1 and padded by 10% on both sides.
    pub fn display_range(&self, channel: Channel, count: usize) -> (f32, f32) {
        let (min, max) = self
            .recent(channel, count)
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if min > max {
            return (0.0, 0.0);
        }
        let range = (max - min).max(0.1);
        (min - range * 0.1, max + range * 0.1)
    }
}
