//! 1-bit sprite sheets.
//!
//! Rows are packed MSB first and padded to a whole byte, which is the layout
//! `ImageRaw<BinaryColor>` expects. Set bits are drawn in the sprite's tint,
//! clear bits are left untouched.

use embedded_graphics::{
    image::ImageRaw,
    pixelcolor::BinaryColor,
};

use crate::{
    ObstacleKind,
    PLAYER_W,
};

const PLAYER_FRAME_BYTES: usize = 5 * 32;

/// Run cycle, six frames of 38×32.
pub const PLAYER_FRAMES: [[u8; PLAYER_FRAME_BYTES]; 6] = [
    [
        0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00, 0x0F, 0x01, 0x00, 0x00,
        0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x20, 0x0F, 0xFF, 0x00, 0x00, 0x20, 0x03, 0xFF, 0x00, 0x00,
        0x10, 0x07, 0xFF, 0xBE, 0x00, 0x10, 0x07, 0xFF, 0xBE, 0x00, 0x08, 0x07, 0xFF, 0xBE, 0x00, 0x08, 0x1F, 0xFF, 0xBE, 0x00,
        0x04, 0x3F, 0xFF, 0xBE, 0x00, 0x04, 0x77, 0xFF, 0xBE, 0x00, 0x03, 0xE7, 0xFF, 0xBE, 0x00, 0x03, 0xC7, 0xFF, 0xBE, 0x00,
        0x03, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0x9C, 0x00, 0x00, 0x00, 0xE7, 0x1C, 0x00,
        0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x01, 0xE7, 0x80, 0x00, 0x00, 0x01, 0xE7, 0x80, 0x00, 0x00, 0x03, 0xC3, 0xC0, 0x00,
        0x00, 0x03, 0xC3, 0xC0, 0x00, 0x00, 0x07, 0x81, 0xE0, 0x00, 0x00, 0x07, 0x81, 0xE0, 0x00, 0x00, 0x0F, 0x00, 0xF0, 0x00,
        0x00, 0x0F, 0x00, 0xF0, 0x00, 0x00, 0x1E, 0x00, 0x78, 0x00, 0x00, 0x7E, 0x00, 0xF8, 0x00, 0x00, 0x7C, 0x00, 0xF8, 0x00,
    ],
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00,
        0x00, 0x0F, 0x01, 0x00, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x20, 0x0F, 0xFF, 0x00, 0x00,
        0x20, 0x03, 0xFF, 0x00, 0x00, 0x10, 0x07, 0xFF, 0xBE, 0x00, 0x10, 0x07, 0xFF, 0xBE, 0x00, 0x08, 0x07, 0xFF, 0xBE, 0x00,
        0x08, 0x1F, 0xFF, 0xBE, 0x00, 0x04, 0x3F, 0xFF, 0xBE, 0x00, 0x04, 0x77, 0xFF, 0xBE, 0x00, 0x03, 0xE7, 0xFF, 0xBE, 0x00,
        0x03, 0xC7, 0xFF, 0xBE, 0x00, 0x03, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0x9C, 0x00,
        0x00, 0x00, 0xE7, 0x1C, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x01, 0xE7, 0x80, 0x00,
        0x00, 0x01, 0xE7, 0x80, 0x00, 0x00, 0x01, 0xC3, 0x80, 0x00, 0x00, 0x01, 0xC3, 0x80, 0x00, 0x00, 0x01, 0xC3, 0x80, 0x00,
        0x00, 0x03, 0xC3, 0xC0, 0x00, 0x00, 0x03, 0xC3, 0xC0, 0x00, 0x00, 0x0F, 0x87, 0xC0, 0x00, 0x00, 0x0F, 0x87, 0xC0, 0x00,
    ],
    [
        0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00, 0x0F, 0x01, 0x00, 0x00,
        0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x20, 0x0F, 0xFF, 0x00, 0x00, 0x20, 0x03, 0xFF, 0x00, 0x00,
        0x10, 0x07, 0xFF, 0xBE, 0x00, 0x10, 0x07, 0xFF, 0xBE, 0x00, 0x08, 0x07, 0xFF, 0xBE, 0x00, 0x08, 0x1F, 0xFF, 0xBE, 0x00,
        0x04, 0x3F, 0xFF, 0xBE, 0x00, 0x04, 0x77, 0xFF, 0xBE, 0x00, 0x03, 0xE7, 0xFF, 0xBE, 0x00, 0x03, 0xC7, 0xFF, 0xBE, 0x00,
        0x03, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0x9C, 0x00, 0x00, 0x00, 0xE7, 0x1C, 0x00,
        0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00,
        0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00,
        0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x01, 0xFE, 0x00, 0x00, 0x00, 0x01, 0xFE, 0x00, 0x00,
    ],
    [
        0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00, 0x0F, 0x01, 0x00, 0x00,
        0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x20, 0x0F, 0xFF, 0x00, 0x00, 0x20, 0x03, 0xFF, 0x00, 0x00,
        0x10, 0x07, 0xFF, 0xBE, 0x00, 0x10, 0x07, 0xFF, 0xBE, 0x00, 0x08, 0x07, 0xFF, 0xBE, 0x00, 0x08, 0x1F, 0xFF, 0xBE, 0x00,
        0x04, 0x3F, 0xFF, 0xBE, 0x00, 0x04, 0x77, 0xFF, 0xBE, 0x00, 0x03, 0xE7, 0xFF, 0xBE, 0x00, 0x03, 0xC7, 0xFF, 0xBE, 0x00,
        0x03, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0x9C, 0x00, 0x00, 0x00, 0xE7, 0x1C, 0x00,
        0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00,
        0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00,
        0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x03, 0xFF, 0x00, 0x00, 0x00, 0x03, 0xFF, 0x00, 0x00,
    ],
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00,
        0x00, 0x0F, 0x01, 0x00, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x20, 0x0F, 0xFF, 0x00, 0x00,
        0x20, 0x03, 0xFF, 0x00, 0x00, 0x10, 0x07, 0xFF, 0xBE, 0x00, 0x10, 0x07, 0xFF, 0xBE, 0x00, 0x08, 0x07, 0xFF, 0xBE, 0x00,
        0x08, 0x1F, 0xFF, 0xBE, 0x00, 0x04, 0x3F, 0xFF, 0xBE, 0x00, 0x04, 0x77, 0xFF, 0xBE, 0x00, 0x03, 0xE7, 0xFF, 0xBE, 0x00,
        0x03, 0xC7, 0xFF, 0xBE, 0x00, 0x03, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0x9C, 0x00,
        0x00, 0x00, 0xE7, 0x1C, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00,
        0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00,
        0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00,
    ],
    [
        0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00, 0x0F, 0x01, 0x00, 0x00,
        0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x20, 0x0F, 0xFF, 0x00, 0x00, 0x20, 0x03, 0xFF, 0x00, 0x00,
        0x10, 0x07, 0xFF, 0xBE, 0x00, 0x10, 0x07, 0xFF, 0xBE, 0x00, 0x08, 0x07, 0xFF, 0xBE, 0x00, 0x08, 0x1F, 0xFF, 0xBE, 0x00,
        0x04, 0x3F, 0xFF, 0xBE, 0x00, 0x04, 0x77, 0xFF, 0xBE, 0x00, 0x03, 0xE7, 0xFF, 0xBE, 0x00, 0x03, 0xC7, 0xFF, 0xBE, 0x00,
        0x03, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0xBE, 0x00, 0x00, 0x07, 0xFF, 0x9C, 0x00, 0x00, 0x00, 0xE7, 0x1C, 0x00,
        0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00,
        0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, 0x01, 0xE7, 0x80, 0x00, 0x00, 0x01, 0xE7, 0x80, 0x00, 0x00, 0x01, 0xC3, 0x80, 0x00,
        0x00, 0x01, 0xC3, 0x80, 0x00, 0x00, 0x01, 0xC3, 0x80, 0x00, 0x00, 0x07, 0xCF, 0x80, 0x00, 0x00, 0x07, 0xCF, 0x80, 0x00,
    ],
];

/// 40×25.
pub const LOG: [u8; 5 * 25] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xFF, 0xFF, 0xFF, 0xFC,
    0x3F, 0xFF, 0xFF, 0xFF, 0xFC, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xDF, 0xFF, 0xFF, 0xFF, 0xFF, 0xDF,
    0xF8, 0xFF, 0x0F, 0xF0, 0xDF, 0xFF, 0xFF, 0xFF, 0xFF, 0xDF, 0xFF, 0xFF, 0xFF, 0xFF, 0xDF, 0xFF, 0xFF, 0xFF, 0xFF, 0xDF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xDF, 0xFF, 0x0F, 0xF0, 0xFF, 0x5F, 0xFF, 0xFF, 0xFF, 0xFF, 0xDF, 0xFF, 0xFF, 0xFF, 0xFF, 0xDF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xDF, 0xF8, 0xFF, 0x0F, 0xF0, 0xDF, 0xFF, 0xFF, 0xFF, 0xFF, 0xDF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x3F, 0xFF, 0xFF, 0xFF, 0xFC, 0x3F, 0xFF, 0xFF, 0xFF, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00,
];

/// 32×32, head pointing left.
pub const ARROW: [u8; 4 * 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x40, 0x00, 0x00, 0x04, 0x60, 0x00, 0x00, 0x09,
    0x70, 0x00, 0x00, 0x12, 0x78, 0x00, 0x00, 0x24, 0x7C, 0x00, 0x00, 0x48, 0x7F, 0xFF, 0xFF, 0xF0,
    0x7F, 0xFF, 0xFF, 0xF0, 0x7C, 0x00, 0x00, 0x48, 0x78, 0x00, 0x00, 0x24, 0x70, 0x00, 0x00, 0x12,
    0x60, 0x00, 0x00, 0x09, 0x40, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Player run frame `index`, wrapping past the end of the cycle.
pub fn player(index: u8) -> ImageRaw<'static, BinaryColor> {
    let frame = &PLAYER_FRAMES[usize::from(index) % PLAYER_FRAMES.len()];
    ImageRaw::new(frame, PLAYER_W as u32)
}

pub fn obstacle(kind: ObstacleKind) -> ImageRaw<'static, BinaryColor> {
    match kind {
        ObstacleKind::Log => ImageRaw::new(&LOG, kind.width() as u32),
        ObstacleKind::Arrow => ImageRaw::new(&ARROW, kind.width() as u32),
    }
}
