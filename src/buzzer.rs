//! Piezo buzzer driven with a square wave on a plain GPIO.

use embassy_time::{
    Duration,
    Instant,
    Ticker,
};
use esp_hal::gpio::{
    Level,
    Output,
    OutputConfig,
};
use runner_core::Tone;

use crate::BuzzerResources;

pub struct Buzzer {
    pin: Output<'static>,
}

impl From<BuzzerResources<'static>> for Buzzer {
    fn from(res: BuzzerResources<'static>) -> Self {
        Self {
            pin: Output::new(res.pin, Level::Low, OutputConfig::default()),
        }
    }
}

impl Buzzer {
    /// Sound `tone` and return once it has finished.
    pub async fn play(&mut self, tone: Tone) {
        let duration = Duration::from_millis(u64::from(tone.duration_ms));
        let half_period = Duration::from_micros(500_000 / u64::from(tone.frequency_hz));
        let end = Instant::now() + duration;
        let mut ticker = Ticker::every(half_period);
        while Instant::now() < end {
            self.pin.toggle();
            ticker.next().await;
        }
        self.pin.set_low();
    }
}
