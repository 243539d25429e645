//! Wirebug data structures.
//!
//! All positions are logical field units; the bug's horizontal position is
//! stored as a wire index so it can never leave a wire.

use crate::config::GameConfig;
use rand::Rng;

/// Where the round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start screen, nothing moves until the player starts.
    Ready,
    Running,
    /// Frozen: no bird movement or spawning.
    Paused,
    GameOver,
}

/// A falling obstacle.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Wire this bird is centered on.
    pub wire: usize,
    /// Left edge.
    pub x: f64,
    /// Top edge, grows every frame.
    pub y: f64,
    /// Whether the near-miss cue has already fired for this bird.
    pub alerted: bool,
}

/// The whole mutable state of one game.
#[derive(Debug, Clone)]
pub struct WorldState {
    pub config: GameConfig,
    pub phase: Phase,

    // Bug state
    /// Index into `config.wires`.
    pub bug_wire: usize,
    /// Top edge of the bug.
    pub bug_y: f64,

    /// Live birds in spawn order.
    pub birds: Vec<Bird>,

    // Scoring
    pub score: u32,
    /// Units per frame every bird falls.
    pub speed: f64,
}

impl WorldState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            phase: Phase::Ready,
            bug_wire: config.middle_wire(),
            bug_y: config.bug_y(),
            birds: Vec::new(),
            score: 0,
            speed: config.initial_speed,
            config,
        }
    }

    /// Left edge of the bug, centered on its wire.
    pub fn bug_x(&self) -> f64 {
        self.config.wire_x(self.bug_wire) - self.config.bug_width / 2.0
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Put every round field back to its starting value and enter `Running`.
    pub fn reset(&mut self) {
        self.phase = Phase::Running;
        self.bug_wire = self.config.middle_wire();
        self.bug_y = self.config.bug_y();
        self.birds.clear();
        self.score = 0;
        self.speed = self.config.initial_speed;
    }

    /// Append a bird at the top of `wire`.
    pub fn push_bird(&mut self, wire: usize) {
        let wire = wire.min(self.config.wire_count().saturating_sub(1));
        self.birds.push(Bird {
            wire,
            x: self.config.wire_x(wire) - self.config.bird_width / 2.0,
            y: 0.0,
            alerted: false,
        });
    }

    /// Pick a wire uniformly at random.
    pub fn random_wire<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.config.wire_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_defaults() {
        let world = WorldState::new(GameConfig::default());
        assert_eq!(world.phase, Phase::Ready);
        assert_eq!(world.bug_wire, 2);
        assert!((world.bug_x() - 285.0).abs() < f64::EPSILON);
        assert!((world.bug_y - 530.0).abs() < f64::EPSILON);
        assert!(world.birds.is_empty());
        assert_eq!(world.score, 0);
        assert!((world.speed - 3.0).abs() < f64::EPSILON);
        assert!(!world.paused());
        assert!(!world.game_over());
    }

    #[test]
    fn test_push_bird_centers_on_wire() {
        let mut world = WorldState::new(GameConfig::default());
        world.push_bird(0);
        let bird = &world.birds[0];
        assert_eq!(bird.wire, 0);
        assert!((bird.x - 70.0).abs() < f64::EPSILON);
        assert!(bird.y.abs() < f64::EPSILON);
        assert!(!bird.alerted);
    }

    #[test]
    fn test_push_bird_clamps_wire() {
        let mut world = WorldState::new(GameConfig::default());
        world.push_bird(42);
        assert_eq!(world.birds[0].wire, 3);
    }

    #[test]
    fn test_random_wire_in_range() {
        let world = WorldState::new(GameConfig::default());
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            assert!(world.random_wire(&mut rng) < 4);
        }
    }

    #[test]
    fn test_reset_restores_round() {
        let mut world = WorldState::new(GameConfig::default());
        world.phase = Phase::GameOver;
        world.bug_wire = 0;
        world.score = 37;
        world.speed = 4.5;
        world.push_bird(1);

        world.reset();

        assert_eq!(world.phase, Phase::Running);
        assert_eq!(world.bug_wire, 2);
        assert_eq!(world.score, 0);
        assert!((world.speed - 3.0).abs() < f64::EPSILON);
        assert!(world.birds.is_empty());
    }
}
