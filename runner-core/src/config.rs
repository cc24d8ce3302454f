//! Gameplay tuning.

/// A buzzer request: square wave at `frequency_hz` for `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl Tone {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}

/// Tunable game parameters.
///
/// The defaults give the classic cabinet feel: a 30 ms tick,
/// a 30-tick jump that hangs 35 px above the ground for its first half,
/// and obstacles crossing the screen at 6 px per tick.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Delay after each tick, in milliseconds.
    pub tick_ms: u32,
    /// Jump length in ticks.
    pub jump_duration: u8,
    /// Apex height above the ground, in pixels.
    pub jump_height: i32,
    /// Obstacle scroll speed, in pixels per tick.
    pub obstacle_speed: i32,
    /// Minimum time between run-animation frames.
    pub frame_interval_ms: u32,
    /// Ground scroll step per tick, in pixels.
    pub ground_step: i32,
    pub jump_tone: Tone,
    pub block_tone: Tone,
    /// How long the game-over screen stays up before the start prompt.
    pub game_over_pause_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            jump_duration: 30,
            jump_height: 35,
            obstacle_speed: 6,
            frame_interval_ms: 70,
            ground_step: 2,
            jump_tone: Tone::new(1000, 200),
            block_tone: Tone::new(500, 300),
            game_over_pause_ms: 3000,
        }
    }
}

impl GameConfig {
    /// Player y while hanging at the top of a jump.
    pub const fn apex_y(&self) -> i32 {
        crate::GROUND_Y - self.jump_height
    }
}
