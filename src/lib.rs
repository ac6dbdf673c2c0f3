pub mod dsp;
pub mod synth; // Single voice, event queue, orchestration

/// Largest block `Synthesizer::process` will accept in one call.
pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
