use rtrb::Consumer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parameter addressable by [`Event::SetParameter`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// Envelope attack time, seconds.
    Attack,
    /// Envelope decay time, seconds.
    Decay,
    /// Envelope sustain level, 0.0 to 1.0.
    Sustain,
    /// Envelope release time, seconds.
    Release,
    /// Filter cutoff, Hz.
    Cutoff,
    /// Oscillator frequency, Hz.
    Frequency,
    /// Voice output amplitude, 0.0 to 1.0.
    Amplitude,
}

/// A control change, copied by value into the queue. Out-of-range payloads
/// are clamped by the consumer, never rejected.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    NoteOn { frequency: f32, amplitude: f32 },
    NoteOff,
    SetParameter { param: Param, value: f32 },
}

/// Consumer-side seam for the audio thread: anything events can be drained
/// from, exactly one event per call, never blocking.
pub trait EventReceiver {
    fn pop(&mut self) -> Option<Event>;
}

impl EventReceiver for Consumer<Event> {
    fn pop(&mut self) -> Option<Event> {
        Consumer::pop(self).ok()
    }
}
