//! Virtual game clock
//!
//! The loop never measures wall-clock time: each iteration represents
//! exactly `time_step_size` seconds of simulated time, and `dt` is derived
//! once at the start of every tick before any movement uses it. The first
//! tick sees `dt = 0`.

/// Monotonic simulated time with a fixed virtual timestep.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    t: f32,
    t_prev: f32,
    step: f32,
}

impl GameClock {
    pub fn new(time_step_size: f32) -> Self {
        Self {
            t: 0.0,
            t_prev: 0.0,
            step: time_step_size,
        }
    }

    /// Recompute and return `dt` for the tick that is starting.
    pub fn begin_tick(&mut self) -> f32 {
        let dt = self.t - self.t_prev;
        self.t_prev = self.t;
        dt
    }

    /// Advance simulated time at the end of a tick.
    pub fn advance(&mut self) {
        self.t += self.step;
    }

    /// Current simulated time.
    pub fn now(&self) -> f32 {
        self.t
    }

    pub fn time_step_size(&self) -> f32 {
        self.step
    }
}

/// Cooldown gate for pooled spawns: at most one spawn per `delay` seconds.
///
/// Starts ready, so the first spawn request after startup is never blocked.
#[derive(Debug, Clone, Copy)]
pub struct SpawnTimer {
    delay: f32,
    last: f32,
}

impl SpawnTimer {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            last: -(delay + 1.0),
        }
    }

    pub fn ready(&self, now: f32) -> bool {
        self.delay < now - self.last
    }

    /// Record a spawn at the given time.
    pub fn fire(&mut self, now: f32) {
        self.last = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_has_zero_dt() {
        let mut clock = GameClock::new(0.01);
        assert_eq!(clock.begin_tick(), 0.0);
        clock.advance();
        assert!((clock.begin_tick() - 0.01).abs() < 1e-7);
    }

    #[test]
    fn dt_is_never_negative_and_tracks_the_step() {
        let mut clock = GameClock::new(0.02);
        for _ in 0..100 {
            let dt = clock.begin_tick();
            assert!(dt >= 0.0);
            clock.advance();
        }
        assert!((clock.now() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn spawn_timer_gates_by_delay() {
        let mut timer = SpawnTimer::new(0.1);
        assert!(timer.ready(0.0));
        timer.fire(0.0);
        assert!(!timer.ready(0.05));
        assert!(!timer.ready(0.1)); // strict inequality
        assert!(timer.ready(0.11));
    }
}
