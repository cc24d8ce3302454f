//! Knight Runner firmware.
//!
//! - JUMP starts a run and hops over logs
//! - BLOCK raises the shield against arrows (only while standing)
//! - Each tick survived scores a point
//!
//! Tones stall the game loop while they play, which paces the game.
//! Build with `--features detached-sound` to play them from their own task.

#![no_std]
#![no_main]

use defmt::{
    Debug2Format,
    debug,
    error,
    info,
};
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Instant,
    Timer,
};
use esp_backtrace as _;
use esp_hal::{
    rng::Rng,
    timer::timg::TimerGroup,
};
use esp_println as _;
use knight_runner::{
    Buttons,
    Buzzer,
    Display,
    mk_static,
    split_resources,
};
use runner_core::{
    Collision,
    Frame,
    Game,
    GameConfig,
    Phase,
    Tone,
    render,
};

esp_bootloader_esp_idf::esp_app_desc!();

/// The display has no recovery path. A failed write halts the board.
fn must<E: core::fmt::Debug>(result: Result<(), E>) {
    if let Err(err) = result {
        error!("Display write failed: {}", Debug2Format(&err));
        panic!("display write failed");
    }
}

// ── Sound ───────────────────────────────────────────────────────────────────

#[cfg(not(feature = "detached-sound"))]
struct Sound(&'static mut Buzzer);

#[cfg(not(feature = "detached-sound"))]
impl Sound {
    async fn play(&mut self, tone: Tone) {
        self.0.play(tone).await;
    }
}

#[cfg(feature = "detached-sound")]
static SOUND_QUEUE: embassy_sync::channel::Channel<
    embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex,
    Tone,
    4,
> = embassy_sync::channel::Channel::new();

#[cfg(feature = "detached-sound")]
struct Sound;

#[cfg(feature = "detached-sound")]
impl Sound {
    async fn play(&mut self, tone: Tone) {
        if SOUND_QUEUE.try_send(tone).is_err() {
            defmt::warn!("Sound queue full, dropping {}", tone);
        }
    }
}

#[cfg(feature = "detached-sound")]
#[embassy_executor::task]
async fn sound_task(buzzer: &'static mut Buzzer) {
    info!("Sound task started");
    loop {
        let tone = SOUND_QUEUE.receive().await;
        buzzer.play(tone).await;
    }
}

// ── Game ────────────────────────────────────────────────────────────────────

#[embassy_executor::task]
async fn game_task(
    display: &'static mut Display<'static>,
    buttons: &'static mut Buttons,
    mut sound: Sound,
    mut rng: Rng,
) {
    let mut game = Game::new(GameConfig::default());
    info!("Game task started with {}", game.config());

    let tick = Duration::from_millis(u64::from(game.config().tick_ms));
    let pause = Duration::from_millis(u64::from(game.config().game_over_pause_ms));

    loop {
        // Start prompt
        must(render::draw_start_prompt(display));
        Buttons::debounce_press(&mut buttons.jump).await;
        must(render::clear(display));

        let seed = rng.random();
        game.start(seed);
        info!("Run started, seed {=u32:#x}", seed);
        let mut frame = Frame::new(&game);

        while game.phase() == Phase::Playing {
            let report = game.advance(buttons.sample(), Instant::now().as_millis());

            for tone in &report.tones {
                sound.play(*tone).await;
            }
            if report.respawned {
                debug!("Next obstacle: {}", game.obstacle().kind);
            }
            if report.collision == Some(Collision::Deflected) {
                debug!("Arrow deflected, next obstacle: {}", game.obstacle().kind);
            }

            must(frame.draw(display, &game));
            Timer::after(tick).await;
        }

        let session = game.session();
        info!(
            "Game over after {} ticks, score {}",
            session.elapsed_ticks, session.score
        );
        must(render::draw_game_over(display, session.score));
        Timer::after(pause).await;
        game.finish();
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = knight_runner::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 32 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let display = mk_static!(Display<'static>, resources.display.into());
    let buttons = mk_static!(Buttons, resources.buttons.into());
    let buzzer = mk_static!(Buzzer, resources.buzzer.into());
    let rng = Rng::new();

    #[cfg(not(feature = "detached-sound"))]
    spawner.must_spawn(game_task(display, buttons, Sound(buzzer), rng));

    #[cfg(feature = "detached-sound")]
    {
        spawner.must_spawn(sound_task(buzzer));
        spawner.must_spawn(game_task(display, buttons, Sound, rng));
    }

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
