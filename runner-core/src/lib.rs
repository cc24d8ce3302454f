//! # runner-core
//!
//! Platform-independent core of Knight Runner, a two-button endless runner.
//!
//! - **Game**: phase machine, per-tick update, session bookkeeping
//! - **Player**: two-level jump machine and run animation
//! - **Obstacle**: logs and arrows scrolling in from the right
//! - **Collision**: overlap test and log/arrow resolution
//! - **Render**: dirty-rectangle drawing onto any `embedded-graphics` target
//!
//! The crate knows nothing about the board. Feed [`Game::advance`] the
//! sampled buttons and a millisecond timestamp once per tick, play the
//! tones it reports, and hand the display to [`render`].
//!
//! ```rust,ignore
//! let mut game = Game::new(GameConfig::default());
//! game.start(seed);
//! render::clear(&mut display)?;
//! let mut frame = Frame::new(&game);
//! loop {
//!     let report = game.advance(Input { jump, block }, now_ms);
//!     frame.draw(&mut display, &game)?;
//!     for tone in &report.tones { buzzer.play(*tone).await; }
//!     if report.game_over { break; }
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod collision;
mod config;
mod game;
pub mod obstacle;
mod player;
pub mod render;
mod rng;
pub mod sprites;

pub use collision::Collision;
pub use config::{
    GameConfig,
    Tone,
};
pub use game::{
    Game,
    Input,
    Phase,
    Session,
    TickReport,
};
pub use obstacle::{
    Obstacle,
    ObstacleKind,
};
pub use player::Player;
pub use render::Frame;
pub use rng::Rng;

// ── Screen geometry ─────────────────────────────────────────────────────────

/// Display width in pixels (portrait).
pub const SCREEN_WIDTH: i32 = 240;
/// Display height in pixels (portrait).
pub const SCREEN_HEIGHT: i32 = 320;

/// Resting y of the player sprite's top edge.
pub const GROUND_Y: i32 = SCREEN_HEIGHT - 50;
/// Fixed x of the player sprite.
pub const PLAYER_X: i32 = 40;
pub const PLAYER_W: i32 = 38;
pub const PLAYER_H: i32 = 32;

/// Top of the scrolling ground strip.
pub const GROUND_STRIP_Y: i32 = 305;
pub const GROUND_TILE: i32 = 10;
