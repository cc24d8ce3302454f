//! Phase machine and per-tick update.

use heapless::Vec;

use crate::{
    Collision,
    GROUND_TILE,
    GameConfig,
    Obstacle,
    Player,
    Rng,
    Tone,
    collision,
};

/// Where the game is in its start → play → game over cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Start prompt shown, waiting for JUMP.
    AwaitingStart,
    Playing,
    /// "GAME OVER" shown for a fixed pause.
    GameOver,
}

/// Button levels sampled at the top of a tick. `true` means held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Input {
    pub jump: bool,
    pub block: bool,
}

/// Per-run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    pub elapsed_ticks: u32,
    pub score: u32,
    /// Latched by a fatal collision until the next start.
    pub over: bool,
}

/// What happened during one [`Game::advance`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Tones to play, in order.
    pub tones: Vec<Tone, 2>,
    pub collision: Option<Collision>,
    /// The obstacle scrolled off the left edge and a new one was sent in.
    pub respawned: bool,
    pub game_over: bool,
}

/// Complete game state. One writer: whoever drives the loop.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Game {
    config: GameConfig,
    phase: Phase,
    player: Player,
    obstacle: Obstacle,
    session: Session,
    ground_offset: i32,
    jump_was_down: bool,
    rng: Rng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            player: Player::new(),
            obstacle: Obstacle::new(config.obstacle_speed),
            config,
            phase: Phase::AwaitingStart,
            session: Session::default(),
            ground_offset: 0,
            jump_was_down: false,
            rng: Rng::new(0),
        }
    }

    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn player(&self) -> &Player {
        &self.player
    }

    pub const fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Horizontal shift of the ground tiles, in `(-GROUND_TILE, 0]`.
    pub const fn ground_offset(&self) -> i32 {
        self.ground_offset
    }

    /// Reset everything for a new run and enter [`Phase::Playing`].
    ///
    /// The JUMP press that started the run is treated as already held, so it
    /// does not also trigger a jump on the first tick.
    pub fn start(&mut self, seed: u32) {
        self.player = Player::new();
        self.obstacle = Obstacle::new(self.config.obstacle_speed);
        self.session = Session::default();
        self.ground_offset = 0;
        self.jump_was_down = true;
        self.rng = Rng::new(seed);
        self.phase = Phase::Playing;
    }

    /// Leave the game-over screen and go back to the start prompt.
    pub fn finish(&mut self) {
        if self.phase == Phase::GameOver {
            self.phase = Phase::AwaitingStart;
        }
    }

    /// Run one tick. Does nothing outside [`Phase::Playing`].
    pub fn advance(&mut self, input: Input, now_ms: u64) -> TickReport {
        let mut report = TickReport::default();
        if self.phase != Phase::Playing {
            return report;
        }

        // Input
        let jump_pressed = input.jump && !self.jump_was_down;
        self.jump_was_down = input.jump;
        if jump_pressed && self.player.try_jump(&self.config) {
            let _ = report.tones.push(self.config.jump_tone);
        }
        self.player.blocking = input.block;
        if input.block {
            let _ = report.tones.push(self.config.block_tone);
        }

        // Jump
        self.player.prev_y = self.player.y;
        self.player.step_jump(&self.config);

        // Ground
        self.ground_offset -= self.config.ground_step;
        if self.ground_offset <= -GROUND_TILE {
            self.ground_offset = 0;
        }

        // Obstacle
        report.respawned = self.obstacle.advance(&mut self.rng);
        self.player.animate(now_ms, self.config.frame_interval_ms);

        // Collision
        report.collision = collision::resolve(&self.player, &self.obstacle);
        match report.collision {
            Some(Collision::Fatal(_)) => self.session.over = true,
            Some(Collision::Deflected) => self.obstacle.respawn(&mut self.rng),
            None => {}
        }

        self.session.score += 1;
        self.session.elapsed_ticks += 1;

        if self.session.over {
            self.phase = Phase::GameOver;
            report.game_over = true;
        }
        report
    }

    /// Direct access for scripted setups (attract mode, tests).
    pub fn obstacle_mut(&mut self) -> &mut Obstacle {
        &mut self.obstacle
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}
