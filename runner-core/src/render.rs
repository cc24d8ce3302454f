//! Drawing onto any `embedded-graphics` target.
//!
//! During play the screen is never cleared. [`Frame`] remembers where the
//! sprites were last drawn and only blacks out those rectangles before
//! drawing the new positions.

use core::fmt::Write as _;

use embedded_graphics::{
    image::{
        Image,
        ImageRaw,
    },
    mono_font::{
        MonoTextStyle,
        MonoTextStyleBuilder,
        ascii::{
            FONT_9X15,
            FONT_10X20,
        },
    },
    pixelcolor::{
        BinaryColor,
        Rgb565,
    },
    prelude::*,
    primitives::{
        PrimitiveStyle,
        Rectangle,
    },
    text::{
        Baseline,
        Text,
    },
};
use heapless::String;

use crate::{
    GROUND_STRIP_Y,
    GROUND_TILE,
    Game,
    Player,
    SCREEN_WIDTH,
    sprites,
};

const BLACK: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(Rgb565::BLACK);
const WHITE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(Rgb565::WHITE);

// lit part of each ground tile, the rest stays black
const GROUND_DASH: u32 = 6;

/// Draws only the set bits of a 1-bit image, in one colour.
struct Tint<'a, D> {
    target: &'a mut D,
    color: Rgb565,
}

impl<D> OriginDimensions for Tint<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn size(&self) -> Size {
        self.target.bounding_box().size
    }
}

impl<D> DrawTarget for Tint<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let color = self.color;
        self.target.draw_iter(
            pixels
                .into_iter()
                .filter(|Pixel(_, c)| c.is_on())
                .map(|Pixel(p, _)| Pixel(p, color)),
        )
    }
}

/// Blit a 1-bit sprite at `top_left` in `color`, leaving clear bits alone.
pub fn draw_bitmap<D>(
    display: &mut D,
    bitmap: &ImageRaw<'_, BinaryColor>,
    top_left: Point,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Image::new(bitmap, top_left).draw(&mut Tint {
        target: display,
        color,
    })
}

/// Fill `area` clipped to the screen.
fn fill<D>(display: &mut D, area: Rectangle, style: PrimitiveStyle<Rgb565>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let area = area.intersection(&display.bounding_box());
    if area.is_zero_sized() {
        return Ok(());
    }
    area.into_styled(style).draw(display)
}

pub fn clear<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(Rgb565::BLACK)
}

/// Title screen shown while waiting for the first JUMP press.
pub fn draw_start_prompt<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    clear(display)?;
    let style = MonoTextStyle::new(&FONT_9X15, Rgb565::WHITE);
    Text::with_baseline("Press JUMP to start", Point::new(20, 150), style, Baseline::Top)
        .draw(display)?;
    Ok(())
}

pub fn draw_game_over<D>(display: &mut D, score: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    clear(display)?;
    let big = MonoTextStyle::new(&FONT_10X20, Rgb565::RED);
    Text::with_baseline("GAME OVER", Point::new(75, 150), big, Baseline::Top).draw(display)?;

    let small = MonoTextStyle::new(&FONT_9X15, Rgb565::WHITE);
    Text::with_baseline(
        score_text(score).as_str(),
        Point::new(75, 180),
        small,
        Baseline::Top,
    )
    .draw(display)?;
    Ok(())
}

/// Score overlay in the top-left corner. Paints its own background so the
/// previous value is overwritten in place.
pub fn draw_score<D>(display: &mut D, score: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyleBuilder::new()
        .font(&FONT_9X15)
        .text_color(Rgb565::WHITE)
        .background_color(Rgb565::BLACK)
        .build();
    Text::with_baseline(
        score_text(score).as_str(),
        Point::new(10, 10),
        style,
        Baseline::Top,
    )
    .draw(display)?;
    Ok(())
}

/// Dashed ground strip shifted left by `offset` pixels.
pub fn draw_ground<D>(display: &mut D, offset: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let strip = Rectangle::new(
        Point::new(0, GROUND_STRIP_Y),
        Size::new(SCREEN_WIDTH as u32, GROUND_TILE as u32),
    );
    fill(display, strip, BLACK)?;

    let mut x = offset;
    while x < SCREEN_WIDTH {
        let dash = Rectangle::new(
            Point::new(x, GROUND_STRIP_Y),
            Size::new(GROUND_DASH, GROUND_TILE as u32),
        );
        fill(display, dash, WHITE)?;
        x += GROUND_TILE;
    }
    Ok(())
}

fn score_text(score: u32) -> String<24> {
    let mut text = String::new();
    // "Score: " plus at most ten digits always fits
    let _ = write!(text, "Score: {score}");
    text
}

/// Dirty-rectangle state carried from one tick to the next.
///
/// The obstacle can jump back to the right edge mid-tick (respawn or
/// deflection), so its last drawn rectangle is kept here. The player's is
/// rebuilt from [`Player::prev_y`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    obstacle: Rectangle,
}

impl Frame {
    /// Start tracking from the game's current positions. Call after the
    /// screen has been cleared for a new run.
    pub fn new(game: &Game) -> Self {
        Self {
            obstacle: game.obstacle().bounds(),
        }
    }

    /// Erase last tick's sprites and draw this tick's frame.
    ///
    /// Call once after every [`Game::advance`]; the score shown already
    /// includes the tick just played.
    pub fn draw<D>(&mut self, display: &mut D, game: &Game) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let player = game.player();
        let obstacle = game.obstacle();

        // the player only ever moves vertically, `prev_y` is all it needs
        fill(display, Player::bounds_at(player.prev_y), BLACK)?;
        fill(display, self.obstacle, BLACK)?;

        draw_bitmap(
            display,
            &sprites::obstacle(obstacle.kind),
            obstacle.bounds().top_left,
            obstacle.kind.tint(),
        )?;

        let tint = if player.blocking {
            Rgb565::CYAN
        } else {
            Rgb565::WHITE
        };
        draw_bitmap(
            display,
            &sprites::player(player.frame),
            player.bounds().top_left,
            tint,
        )?;

        draw_ground(display, game.ground_offset())?;
        draw_score(display, game.session().score)?;

        self.obstacle = obstacle.bounds();
        Ok(())
    }
}
