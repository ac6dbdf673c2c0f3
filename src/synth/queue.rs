//! Lock-free event transport between the control thread and the audio
//! thread. A single-producer/single-consumer ring buffer: the producer half
//! lives with whoever generates control input, the consumer half is owned
//! by the [`Synthesizer`](crate::synth::Synthesizer). Ownership of the two
//! halves is what enforces "single producer, single consumer": each half
//! is a move-only value, so a second producer cannot exist.

use rtrb::{Consumer, Producer, RingBuffer};

use crate::synth::event::Event;

/// Default queue capacity, sized generously above the number of control
/// events a producer can plausibly emit within one audio callback period.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Constructor for the event queue; splits into the two thread-side halves.
pub struct EventQueue;

impl EventQueue {
    /// Create a queue holding at most `capacity` pending events.
    ///
    /// All memory is allocated here, up front. Neither half allocates,
    /// locks, or blocks afterwards.
    pub fn with_capacity(capacity: usize) -> (EventSender, Consumer<Event>) {
        let (producer, consumer) = RingBuffer::new(capacity);
        (
            EventSender {
                producer,
                dropped: 0,
            },
            consumer,
        )
    }
}

/// Control-thread handle for pushing events toward the audio thread.
pub struct EventSender {
    producer: Producer<Event>,
    dropped: u64,
}

impl EventSender {
    /// Push an event. Returns `false` (and counts the drop) if the queue is
    /// full; a full queue means the consumer is overloaded and losing a
    /// control event is preferable to stalling it.
    ///
    /// Non-blocking, allocation-free.
    pub fn push(&mut self, event: Event) -> bool {
        match self.producer.push(event) {
            Ok(()) => true,
            Err(rtrb::PushError::Full(_)) => {
                self.dropped += 1;
                false
            }
        }
    }

    /// Number of events dropped to overflow since construction.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Free slots remaining in the queue.
    pub fn slots(&self) -> usize {
        self.producer.slots()
    }
}
