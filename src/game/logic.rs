//! Game logic for Wirebug: input, spawning, bird movement, scoring and collision.
//!
//! Every entry point takes the [`WorldState`] explicitly and reports side
//! effects as [`GameEvent`]s; nothing here touches the terminal or audio.

use super::types::{Phase, WorldState};
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Left,
    Right,
    Pause,
    Start,
    Restart,
    Quit,
    Other,
}

/// Everything that can drive the world forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMessage {
    /// One display frame elapsed.
    Frame,
    /// The spawn timer fired.
    SpawnTick,
    Input(GameInput),
}

/// Side effects produced by the logic, consumed by audio and logging.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started,
    BugMoved { wire: usize },
    BirdSpawned { wire: usize },
    /// A bird came within alert range of the bug.
    NearMiss { wire: usize },
    Scored { score: u32 },
    SpeedUp { speed: f64 },
    Paused,
    Resumed,
    GameOver { score: u32 },
    Restarted,
}

/// Route a message to its handler.
pub fn dispatch<R: Rng>(
    world: &mut WorldState,
    message: GameMessage,
    rng: &mut R,
) -> Vec<GameEvent> {
    match message {
        GameMessage::Frame => advance_frame(world),
        GameMessage::SpawnTick => spawn_bird(world, rng).into_iter().collect(),
        GameMessage::Input(input) => process_input(world, input),
    }
}

/// Process player input. Quit is handled by the caller.
pub fn process_input(world: &mut WorldState, input: GameInput) -> Vec<GameEvent> {
    match world.phase {
        Phase::Ready => {
            if input == GameInput::Start {
                world.reset();
                return vec![GameEvent::Started];
            }
        }
        Phase::GameOver => {
            if matches!(input, GameInput::Restart | GameInput::Start) {
                world.reset();
                return vec![GameEvent::Restarted];
            }
        }
        Phase::Paused => {
            if input == GameInput::Pause {
                world.phase = Phase::Running;
                return vec![GameEvent::Resumed];
            }
        }
        Phase::Running => match input {
            GameInput::Left => return move_bug(world, -1),
            GameInput::Right => return move_bug(world, 1),
            GameInput::Pause => {
                world.phase = Phase::Paused;
                return vec![GameEvent::Paused];
            }
            GameInput::Start | GameInput::Restart | GameInput::Quit | GameInput::Other => {}
        },
    }
    Vec::new()
}

/// Shift the bug one wire left (`-1`) or right (`1`), clamped to the outer wires.
fn move_bug(world: &mut WorldState, step: isize) -> Vec<GameEvent> {
    let last = world.config.wire_count().saturating_sub(1);
    let target = world.bug_wire.saturating_add_signed(step).min(last);
    if target == world.bug_wire {
        return Vec::new();
    }
    world.bug_wire = target;
    vec![GameEvent::BugMoved { wire: target }]
}

/// Spawn timer callback: add one bird on a random wire while the round runs.
pub fn spawn_bird<R: Rng>(world: &mut WorldState, rng: &mut R) -> Option<GameEvent> {
    if !world.is_running() {
        return None;
    }
    let wire = world.random_wire(rng);
    world.push_bird(wire);
    Some(GameEvent::BirdSpawned { wire })
}

/// One frame of the running game: move birds, then test for a hit.
pub fn advance_frame(world: &mut WorldState) -> Vec<GameEvent> {
    if !world.is_running() {
        return Vec::new();
    }

    let mut events = update_birds(world);

    if let Some(index) = check_collision(world) {
        world.birds.remove(index);
        world.phase = Phase::GameOver;
        events.push(GameEvent::GameOver { score: world.score });
    }

    events
}

/// Move every bird down, fire near-miss cues, and retire birds that left the field.
pub fn update_birds(world: &mut WorldState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let bug_x = world.bug_x();
    let bug_y = world.bug_y;
    let speed = world.speed;

    for bird in &mut world.birds {
        bird.y += speed;

        // One cue per bird; lingering in range does not retrigger
        if !bird.alerted
            && (bird.x - bug_x).abs() < world.config.bug_width
            && (bird.y - bug_y).abs() < world.config.near_miss_distance
        {
            bird.alerted = true;
            events.push(GameEvent::NearMiss { wire: bird.wire });
        }
    }

    let field_height = world.config.field_height;
    let before = world.birds.len();
    world.birds.retain(|bird| bird.y <= field_height);
    let exited = before - world.birds.len();

    for _ in 0..exited {
        award_point(world, &mut events);
    }

    events
}

/// Score one dodged bird, bumping the speed on each milestone.
fn award_point(world: &mut WorldState, events: &mut Vec<GameEvent>) {
    world.score += 1;
    events.push(GameEvent::Scored { score: world.score });

    if world.score % world.config.speed_milestone == 0 {
        world.speed += world.config.speed_increment;
        events.push(GameEvent::SpeedUp { speed: world.speed });
    }
}

/// Index of the first bird overlapping the bug, if any.
///
/// The bird's bottom edge is pulled up by the collision tolerance so a bird
/// that only grazes the top of the bug does not count.
pub fn check_collision(world: &WorldState) -> Option<usize> {
    let config = &world.config;
    let bug_left = world.bug_x();
    let bug_right = bug_left + config.bug_width;
    let bug_top = world.bug_y;
    let bug_bottom = bug_top + config.bug_height;

    world.birds.iter().position(|bird| {
        bug_left <= bird.x + config.bird_width
            && bug_right >= bird.x
            && bug_top <= bird.y + config.bird_height - config.collision_tolerance
            && bug_bottom > bird.y
    })
}
