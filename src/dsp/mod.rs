//! Low-level DSP primitives that make up the voice chain.
//!
//! These components are allocation-free and realtime-safe, so they can live
//! directly inside the audio-thread synthesizer. Each one caches the sample
//! rate it was configured with; `Synthesizer::set_sample_rate` fans a rate
//! change out to all of them and every rate-derived coefficient is
//! recomputed at that point, never lazily on the audio thread.

/// Attack/decay/sustain/release envelope generator.
pub mod envelope;
/// One-pole low-pass filter.
pub mod filter;
/// Oscillator waveforms.
pub mod oscillator;

pub use envelope::EnvelopeStage;
