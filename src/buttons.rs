//! JUMP and BLOCK buttons.
//!
//! Both are wired to ground with the internal pull-up enabled, so a held
//! button reads low.

use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};
use runner_core::Input as Controls;

use crate::ButtonResources;

pub struct Buttons {
    pub jump: Input<'static>,
    pub block: Input<'static>,
}

const DEBOUNCE_MS: u64 = 20;

impl From<ButtonResources<'static>> for Buttons {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            jump: Input::new(res.jump, pull_up),
            block: Input::new(res.block, pull_up),
        }
    }
}

impl Buttons {
    /// Current levels of both buttons. Not debounced; the game samples once
    /// per tick, which is slower than the contacts bounce.
    pub fn sample(&self) -> Controls {
        Controls {
            jump: self.jump.is_low(),
            block: self.block.is_low(),
        }
    }

    /// Wait for a debounced button press (falling edge, active low).
    pub async fn debounce_press(button: &mut Input<'_>) {
        loop {
            button.wait_for_falling_edge().await;
            Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
            if button.is_low() {
                return;
            }
        }
    }
}
