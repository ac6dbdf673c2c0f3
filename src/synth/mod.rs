// Purpose: the voice layer. Control events, the lock-free queue that
// carries them across the thread boundary, and the single-voice engine.

pub mod event;
pub mod queue;
pub mod synth;

pub use event::{Event, EventReceiver, Param};
pub use queue::{EventQueue, EventSender, DEFAULT_EVENT_CAPACITY};
pub use synth::{ProcessError, Synthesizer};
