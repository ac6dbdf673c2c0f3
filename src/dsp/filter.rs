use std::f32::consts::TAU;

/*
One-pole low-pass filter:

    y[n] = y[n-1] + alpha * (x[n] - y[n-1])

with the impulse-invariant coefficient

    alpha = 1 - exp(-TAU * cutoff / sample_rate)

Cutoff is clamped into (0, Nyquist), which pins alpha inside (0, 1): the
recursion is then a convex blend of the input and the previous output, so
any finite input sequence stays finite. 6 dB/octave, no resonance.
*/
pub struct OnePole {
    z1: f32, // previous output, the single pole's memory
    cutoff_hz: f32,
    alpha: f32,
    sample_rate: f32,
}

impl OnePole {
    pub fn lowpass(cutoff_hz: f32, sample_rate: f32) -> Self {
        let mut filter = Self {
            z1: 0.0,
            cutoff_hz,
            alpha: 0.0,
            sample_rate,
        };
        filter.set_cutoff(cutoff_hz);
        filter
    }

    /// Set the cutoff frequency in Hz and recompute the coefficient.
    /// Out-of-range cutoffs clamp into (0, Nyquist).
    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        let nyquist = self.sample_rate * 0.5;
        self.cutoff_hz = cutoff_hz.clamp(1.0, nyquist - 1.0);
        self.alpha = 1.0 - (-TAU * self.cutoff_hz / self.sample_rate).exp();
    }

    pub fn cutoff(&self) -> f32 {
        self.cutoff_hz
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        // Same cutoff in Hz, new coefficient. The pole's memory carries over.
        self.set_cutoff(self.cutoff_hz);
    }

    /// Filter one sample.
    #[inline]
    pub fn tick(&mut self, input: f32) -> f32 {
        self.z1 += self.alpha * (input - self.z1);
        self.z1
    }

    pub fn reset(&mut self) {
        self.z1 = 0.0;
    }

    #[cfg(test)]
    pub(crate) fn alpha(&self) -> f32 {
        self.alpha
    }
}
