// Play field (logical units, scaled to terminal cells when drawn)
pub const FIELD_WIDTH: f64 = 500.0;
pub const FIELD_HEIGHT: f64 = 600.0;
pub const WIRE_POSITIONS: [f64; 4] = [100.0, 200.0, 300.0, 400.0];

// Entity sizes
pub const BIRD_WIDTH: f64 = 60.0;
pub const BIRD_HEIGHT: f64 = 60.0;
pub const BUG_WIDTH: f64 = 30.0;
pub const BUG_HEIGHT: f64 = 30.0;
/// Gap between the bug's bottom edge and the bottom of the field.
pub const BUG_BOTTOM_MARGIN: f64 = 40.0;

// Difficulty
pub const INITIAL_BIRD_SPEED: f64 = 3.0;
pub const SPEED_INCREMENT: f64 = 0.5;
/// Speed goes up each time the score reaches a multiple of this.
pub const SPEED_MILESTONE: u32 = 10;

// Proximity and collision
pub const NEAR_MISS_DISTANCE: f64 = 50.0;
/// Pulled off the bird's bottom edge before the overlap test.
pub const COLLISION_TOLERANCE: f64 = 15.0;

// Timing
pub const SPAWN_INTERVAL_MS: u64 = 2000;
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 FPS
/// Longest stretch of wall time fed to the scheduler in one step.
pub const MAX_FRAME_DT_MS: u64 = 100;

// Audio
pub const MUSIC_VOLUME: f32 = 0.5;
pub const SAMPLE_RATE: u32 = 44_100;

// UI
pub const INFO_PANEL_WIDTH: u16 = 22;
pub const PLAY_AREA_MIN_HEIGHT: u16 = 12;
