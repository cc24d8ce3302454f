//! Obstacles scrolling in from the right edge.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};

use crate::{
    GROUND_Y,
    PLAYER_H,
    Rng,
    SCREEN_WIDTH,
};

/// What is coming at the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ObstacleKind {
    /// Rolls along the ground. Jump over it.
    Log,
    /// Flies at chest height. Block it while standing.
    Arrow,
}

impl ObstacleKind {
    pub const fn width(self) -> i32 {
        match self {
            Self::Log => 40,
            Self::Arrow => 32,
        }
    }

    pub const fn height(self) -> i32 {
        match self {
            Self::Log => 25,
            Self::Arrow => 32,
        }
    }

    /// Top edge of the sprite.
    pub const fn y(self) -> i32 {
        match self {
            // rests on the same line as the player's feet
            Self::Log => GROUND_Y + PLAYER_H - 25,
            Self::Arrow => GROUND_Y - 12,
        }
    }

    pub const fn tint(self) -> Rgb565 {
        match self {
            Self::Log => Rgb565::GREEN,
            Self::Arrow => Rgb565::RED,
        }
    }

    pub const fn size(self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }

    /// Pick a kind with equal odds.
    pub fn random(rng: &mut Rng) -> Self {
        if rng.coin() { Self::Arrow } else { Self::Log }
    }
}

/// The single live obstacle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Obstacle {
    pub x: i32,
    pub kind: ObstacleKind,
    pub speed: i32,
}

impl Obstacle {
    /// A log waiting just past the right edge.
    pub const fn new(speed: i32) -> Self {
        Self {
            x: SCREEN_WIDTH,
            kind: ObstacleKind::Log,
            speed,
        }
    }

    pub const fn y(&self) -> i32 {
        self.kind.y()
    }

    pub const fn right(&self) -> i32 {
        self.x + self.kind.width()
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::new(self.x, self.y()), self.kind.size())
    }

    /// Scroll one tick to the left. Returns `true` if the obstacle left the
    /// screen and was replaced.
    pub fn advance(&mut self, rng: &mut Rng) -> bool {
        self.x -= self.speed;
        if self.right() < 0 {
            self.respawn(rng);
            true
        } else {
            false
        }
    }

    /// Send a fresh obstacle of random kind in from the right edge.
    pub fn respawn(&mut self, rng: &mut Rng) {
        self.x = SCREEN_WIDTH;
        self.kind = ObstacleKind::random(rng);
    }
}
