use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
    Square,
    Triangle,
}

/// Phase-accumulator oscillator.
///
/// Phase is kept normalized in `[0, 1)` and advances by
/// `frequency / sample_rate` each tick. Frequency changes never reset the
/// phase, so a pitch change mid-note stays click-free.
pub struct Oscillator {
    waveform: Waveform,
    phase: f32,
    frequency: f32,
    sample_rate: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform, sample_rate: f32) -> Self {
        Self {
            waveform,
            phase: 0.0,
            frequency: 440.0,
            sample_rate,
        }
    }

    pub fn sine(sample_rate: f32) -> Self {
        Self::new(Waveform::Sine, sample_rate)
    }

    /// Set the frequency in Hz. Negative values clamp to 0, values above
    /// Nyquist clamp to Nyquist. Phase is left untouched.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency.clamp(0.0, self.sample_rate * 0.5);
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        // Re-clamp in case the new Nyquist limit is lower.
        self.frequency = self.frequency.min(sample_rate * 0.5);
    }

    /// Produce the next sample and advance phase by one tick.
    pub fn tick(&mut self) -> f32 {
        let sample = match self.waveform {
            Waveform::Sine => (TAU * self.phase).sin(),
            Waveform::Saw => 2.0 * self.phase - 1.0,
            Waveform::Square => {
                if self.phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => 1.0 - 4.0 * (self.phase - 0.5).abs(),
        };

        self.phase += self.frequency / self.sample_rate;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
