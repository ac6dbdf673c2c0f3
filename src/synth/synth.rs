//! The single-voice engine.
//!
//! `process` runs on the audio thread. Everything it touches is owned by
//! the synthesizer and preallocated: draining the queue, applying events,
//! and rendering are all lock-free and allocation-free, so the callback can
//! never miss its deadline waiting on the control thread.

use rtrb::Consumer;
use thiserror::Error;

use crate::dsp::envelope::Envelope;
use crate::dsp::filter::OnePole;
use crate::dsp::oscillator::{Oscillator, Waveform};
use crate::synth::event::{Event, EventReceiver, Param};
use crate::synth::queue::{EventQueue, EventSender, DEFAULT_EVENT_CAPACITY};
use crate::MAX_BLOCK_SIZE;

/// Caller contract violations in [`Synthesizer::process`]. These fail fast
/// before any sample is written; they are not runtime conditions to recover
/// from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessError {
    #[error("output block is empty")]
    EmptyBlock,
    #[error("output block of {0} samples exceeds MAX_BLOCK_SIZE ({MAX_BLOCK_SIZE})")]
    BlockTooLarge(usize),
}

/// One voice: oscillator → envelope → filter, fed by an event queue.
///
/// The producer half of the queue is split off at construction as an
/// [`EventSender`] and handed to the control thread; the synthesizer keeps
/// the consumer half. `EventSender::push` and [`Synthesizer::process`] may
/// run truly concurrently; the queue is the only thing they share.
pub struct Synthesizer<R: EventReceiver = Consumer<Event>> {
    sample_rate: f32,
    oscillator: Oscillator,
    envelope: Envelope,
    filter: OnePole,
    amplitude: f32,
    events: R,
}

impl Synthesizer {
    /// Build a sine voice with the default event queue capacity. Returns
    /// the synthesizer and the control-thread sender for its queue.
    pub fn new(sample_rate: u32) -> (Self, EventSender) {
        Self::with_capacity(sample_rate, Waveform::Sine, DEFAULT_EVENT_CAPACITY)
    }

    /// Build a voice with an explicit waveform and queue capacity.
    ///
    /// `capacity` should cover the most events a producer can emit within
    /// one audio callback period; pushes beyond it are dropped.
    pub fn with_capacity(
        sample_rate: u32,
        waveform: Waveform,
        capacity: usize,
    ) -> (Self, EventSender) {
        let (sender, receiver) = EventQueue::with_capacity(capacity);
        (
            Self::with_receiver(sample_rate, waveform, receiver),
            sender,
        )
    }
}

impl<R: EventReceiver> Synthesizer<R> {
    /// Build a voice draining events from an arbitrary receiver.
    pub fn with_receiver(sample_rate: u32, waveform: Waveform, events: R) -> Self {
        let sample_rate = sample_rate as f32;
        Self {
            sample_rate,
            oscillator: Oscillator::new(waveform, sample_rate),
            envelope: Envelope::adsr(0.01, 0.1, 0.7, 0.3, sample_rate),
            filter: OnePole::lowpass(2_000.0, sample_rate),
            amplitude: 1.0,
            events,
        }
    }

    /// Store a new sample rate and recompute every rate-derived coefficient
    /// in the voice chain (filter coefficient, envelope stage steps).
    ///
    /// Takes `&mut self`: the borrow checker guarantees this never runs
    /// while `process` is mid-callback.
    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        let sample_rate = sample_rate as f32;
        self.sample_rate = sample_rate;
        self.oscillator.set_sample_rate(sample_rate);
        self.envelope.set_sample_rate(sample_rate);
        self.filter.set_sample_rate(sample_rate);
    }

    /// Render one block. Called once per audio callback period, on the
    /// audio thread.
    ///
    /// All events pending at entry are drained and applied before the first
    /// sample is rendered, which bounds control-to-audio latency to one
    /// callback period. Then each of the `out.len()` samples is the
    /// oscillator output, scaled by amplitude and the envelope level,
    /// passed through the filter. Exactly `out.len()` samples are written
    /// on success.
    ///
    /// `input` is accepted for symmetry with bidirectional audio callbacks;
    /// this voice is source-only and ignores it.
    pub fn process(&mut self, out: &mut [f32], _input: &[f32]) -> Result<(), ProcessError> {
        if out.is_empty() {
            return Err(ProcessError::EmptyBlock);
        }
        if out.len() > MAX_BLOCK_SIZE {
            return Err(ProcessError::BlockTooLarge(out.len()));
        }

        while let Some(event) = self.events.pop() {
            self.apply_event(event);
        }

        for sample in out.iter_mut() {
            let dry = self.oscillator.tick() * self.amplitude * self.envelope.next_sample();
            *sample = self.filter.tick(dry);
        }

        Ok(())
    }

    /// Apply one control event to the voice chain. Out-of-range payloads
    /// clamp to the nearest valid value; a bad event must never halt the
    /// audio thread.
    fn apply_event(&mut self, event: Event) {
        match event {
            Event::NoteOn {
                frequency,
                amplitude,
            } => {
                self.oscillator.set_frequency(frequency);
                self.amplitude = amplitude.clamp(0.0, 1.0);
                self.envelope.note_on();
            }
            Event::NoteOff => self.envelope.note_off(),
            Event::SetParameter { param, value } => match param {
                Param::Attack => self.envelope.set_attack_time(value),
                Param::Decay => self.envelope.set_decay_time(value),
                Param::Sustain => self.envelope.set_sustain_level(value),
                Param::Release => self.envelope.set_release_time(value),
                Param::Cutoff => self.filter.set_cutoff(value),
                Param::Frequency => self.oscillator.set_frequency(value),
                Param::Amplitude => self.amplitude = value.clamp(0.0, 1.0),
            },
        }
    }

    /// Returns true while the voice is producing sound.
    pub fn is_active(&self) -> bool {
        self.envelope.is_active()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn filter(&self) -> &OnePole {
        &self.filter
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    /// Silence the voice and clear all internal signal state. Pending
    /// events stay queued.
    pub fn reset(&mut self) {
        self.envelope.reset();
        self.filter.reset();
        self.oscillator.reset();
    }
}
