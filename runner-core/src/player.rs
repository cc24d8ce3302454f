use embedded_graphics::{
    prelude::*,
    primitives::Rectangle,
};

use crate::{
    GROUND_Y,
    GameConfig,
    PLAYER_H,
    PLAYER_W,
    PLAYER_X,
    sprites::PLAYER_FRAMES,
};

/// The knight. Runs in place at [`PLAYER_X`]; only `y` ever changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Player {
    pub y: i32,
    /// Where the sprite was last tick, for erasing.
    pub prev_y: i32,
    pub jumping: bool,
    pub blocking: bool,
    /// Ticks left in the current jump. Zero when not jumping.
    pub jump_counter: u8,
    /// Index into the run animation.
    pub frame: u8,
    pub last_frame_ms: u64,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Standing on the ground, not jumping or blocking.
    pub const fn new() -> Self {
        Self {
            y: GROUND_Y,
            prev_y: GROUND_Y,
            jumping: false,
            blocking: false,
            jump_counter: 0,
            frame: 0,
            last_frame_ms: 0,
        }
    }

    pub const fn is_grounded(&self) -> bool {
        self.y == GROUND_Y
    }

    pub const fn left(&self) -> i32 {
        PLAYER_X
    }

    pub const fn right(&self) -> i32 {
        PLAYER_X + PLAYER_W
    }

    pub fn bounds(&self) -> Rectangle {
        Self::bounds_at(self.y)
    }

    pub fn bounds_at(y: i32) -> Rectangle {
        Rectangle::new(
            Point::new(PLAYER_X, y),
            Size::new(PLAYER_W as u32, PLAYER_H as u32),
        )
    }

    /// Start a jump unless one is already running. Returns `true` if it did.
    pub fn try_jump(&mut self, config: &GameConfig) -> bool {
        if self.jump_counter != 0 {
            return false;
        }
        self.jumping = true;
        self.jump_counter = config.jump_duration;
        true
    }

    /// Advance the jump by one tick.
    ///
    /// The profile has exactly two levels: the first half of the jump holds
    /// the apex, the second half holds the ground. No easing in between.
    pub fn step_jump(&mut self, config: &GameConfig) {
        if self.jump_counter == 0 {
            return;
        }
        self.jump_counter -= 1;
        self.y = if self.jump_counter > config.jump_duration / 2 {
            config.apex_y()
        } else {
            GROUND_Y
        };
        if self.jump_counter == 0 {
            self.jumping = false;
        }
    }

    /// Move to the next run frame once more than `interval_ms` has passed.
    pub fn animate(&mut self, now_ms: u64, interval_ms: u32) {
        if now_ms.saturating_sub(self.last_frame_ms) > u64::from(interval_ms) {
            self.frame = (self.frame + 1) % PLAYER_FRAMES.len() as u8;
            self.last_frame_ms = now_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_jump_is_ignored_mid_air() {
        let config = GameConfig::default();
        let mut player = Player::new();
        assert!(player.try_jump(&config));
        player.step_jump(&config);
        assert!(!player.try_jump(&config));
        assert_eq!(player.jump_counter, config.jump_duration - 1);
    }

    #[test]
    fn jump_holds_apex_then_ground() {
        let config = GameConfig::default();
        let mut player = Player::new();
        player.try_jump(&config);

        let mut heights = Vec::new();
        while player.jumping {
            player.step_jump(&config);
            heights.push(player.y);
            assert_eq!(player.jumping, player.jump_counter > 0);
        }

        assert_eq!(heights.len(), 30);
        assert!(heights[..14].iter().all(|&y| y == config.apex_y()));
        assert!(heights[14..].iter().all(|&y| y == GROUND_Y));
        assert!(player.is_grounded());
    }

    #[test]
    fn step_without_jump_is_a_no_op() {
        let config = GameConfig::default();
        let mut player = Player::new();
        player.step_jump(&config);
        assert_eq!(player, Player::new());
    }

    #[test]
    fn animation_waits_for_the_interval() {
        let mut player = Player::new();
        player.animate(70, 70);
        assert_eq!(player.frame, 0);
        player.animate(71, 70);
        assert_eq!(player.frame, 1);
        assert_eq!(player.last_frame_ms, 71);
    }

    #[test]
    fn animation_wraps_after_six_frames() {
        let mut player = Player::new();
        for i in 1..=6 {
            player.animate(i * 100, 70);
        }
        assert_eq!(player.frame, 0);
    }
}
