//! # knight-runner
//!
//! Board support for the Knight Runner cabinet: an ESP32-S3 wired to a
//! 240×320 ILI9341 TFT, a piezo buzzer and two arcade buttons.
//!
//! - **Display**: ILI9341 over SPI with DMA
//! - **Buttons**: JUMP and BLOCK, active low with pull-ups
//! - **Buzzer**: square-wave tones on a GPIO
//!
//! The game itself lives in [`runner_core`]; the firmware binary wires the
//! two together.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = knight_runner::init();
//! let resources = knight_runner::split_resources!(peripherals);
//!
//! let display: knight_runner::Display = resources.display.into();
//! let buttons: knight_runner::Buttons = resources.buttons.into();
//! let buzzer: knight_runner::Buzzer = resources.buzzer.into();
//! ```

#![no_std]

mod buttons;
mod buzzer;
mod display;

pub use buttons::Buttons;
pub use buzzer::Buzzer;
pub use display::Display;
use esp_hal::{
    assign_resources,
    clock::CpuClock,
};
pub use runner_core;

/// StaticCell helper — allocates a value into a `static` exactly once.
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        display: DisplayResources<'d> {
            dc: GPIO7,
            cs: GPIO6,
            mosi: GPIO11,
            sck: GPIO13,
            rst: GPIO10,
            miso: GPIO12,
            spi: SPI2,
            dma: DMA_CH0,
        },
        buzzer: BuzzerResources<'d> {
            pin: GPIO9,
        },
        buttons: ButtonResources<'d> {
            jump: GPIO18,
            block: GPIO19,
        }
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Initialise the chip and return the raw peripheral set.
///
/// Call this once at the top of `main`, then use [`split_resources!`] to
/// break the peripherals into typed resource groups.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}
