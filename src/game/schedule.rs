//! Turns elapsed wall time into frame and spawn-timer messages.

use super::logic::GameMessage;
use crate::config::GameConfig;
use crate::constants::MAX_FRAME_DT_MS;

/// Two independent fixed-rate timers: the frame clock and the spawn clock.
///
/// The spawn clock keeps running while the game is paused or over; the
/// spawner itself decides whether a tick produces a bird.
#[derive(Debug, Clone)]
pub struct Scheduler {
    frame_interval_ms: u64,
    spawn_interval_ms: u64,
    frame_accumulated_ms: u64,
    spawn_accumulated_ms: u64,
}

impl Scheduler {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            frame_interval_ms: config.frame_interval_ms.max(1),
            spawn_interval_ms: config.spawn_interval_ms.max(1),
            frame_accumulated_ms: 0,
            spawn_accumulated_ms: 0,
        }
    }

    /// Feed `dt_ms` of wall time and collect the messages that came due.
    ///
    /// `dt_ms` is clamped to [`MAX_FRAME_DT_MS`] so a stalled terminal
    /// does not release a burst of frames or birds.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<GameMessage> {
        let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);
        self.frame_accumulated_ms += dt_ms;
        self.spawn_accumulated_ms += dt_ms;

        let mut messages = Vec::new();
        while self.spawn_accumulated_ms >= self.spawn_interval_ms {
            self.spawn_accumulated_ms -= self.spawn_interval_ms;
            messages.push(GameMessage::SpawnTick);
        }
        while self.frame_accumulated_ms >= self.frame_interval_ms {
            self.frame_accumulated_ms -= self.frame_interval_ms;
            messages.push(GameMessage::Frame);
        }
        messages
    }

    /// Milliseconds until the next frame is due.
    pub fn until_next_frame_ms(&self) -> u64 {
        self.frame_interval_ms - self.frame_accumulated_ms.min(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(messages: &[GameMessage], wanted: GameMessage) -> usize {
        messages.iter().filter(|m| **m == wanted).count()
    }

    #[test]
    fn test_one_frame_per_interval() {
        let mut scheduler = Scheduler::new(&GameConfig::default());
        assert!(scheduler.advance(10).is_empty());
        assert_eq!(scheduler.advance(6), vec![GameMessage::Frame]);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut scheduler = Scheduler::new(&GameConfig::default());
        let messages = scheduler.advance(10_000);
        // 100ms at 16ms per frame
        assert_eq!(count(&messages, GameMessage::Frame), 6);
        assert_eq!(count(&messages, GameMessage::SpawnTick), 0);
    }

    #[test]
    fn test_spawn_tick_every_interval() {
        let mut scheduler = Scheduler::new(&GameConfig::default());
        let mut spawns = 0;
        for _ in 0..60 {
            spawns += count(&scheduler.advance(100), GameMessage::SpawnTick);
        }
        // 6 seconds at one bird per 2 seconds
        assert_eq!(spawns, 3);
    }

    #[test]
    fn test_spawn_precedes_frames_in_same_step() {
        let config = GameConfig {
            spawn_interval_ms: 50,
            ..GameConfig::default()
        };
        let mut scheduler = Scheduler::new(&config);
        let messages = scheduler.advance(50);
        assert_eq!(messages.first(), Some(&GameMessage::SpawnTick));
    }

    #[test]
    fn test_until_next_frame() {
        let mut scheduler = Scheduler::new(&GameConfig::default());
        assert_eq!(scheduler.until_next_frame_ms(), 16);
        scheduler.advance(10);
        assert_eq!(scheduler.until_next_frame_ms(), 6);
    }
}
