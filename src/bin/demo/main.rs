//! demo - plays a short note sequence through the default output device.
//!
//! Run with: cargo run --bin demo
//!
//! The cpal callback is the audio thread; the main thread is the control
//! thread. The only thing they share is the synthesizer's event queue.

use std::thread;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleRate, StreamConfig};

use monovox::synth::{Event, Param, Synthesizer};

fn main() -> Result<()> {
    color_eyre::install()?;

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no audio output device found"))?;
    let supported = device.default_output_config()?;

    let sample_rate = supported.sample_rate().0;
    let channels = supported.channels() as usize;
    let config = StreamConfig {
        channels: supported.channels(),
        sample_rate: SampleRate(sample_rate),
        buffer_size: cpal::BufferSize::Default,
    };

    let (mut synth, mut events) = Synthesizer::new(sample_rate);
    synth.set_sample_rate(sample_rate);

    // Mono render buffer, allocated once, outside the callback.
    let mut mono = vec![0.0f32; monovox::MAX_BLOCK_SIZE];

    let stream = device.build_output_stream(
        &config,
        move |out: &mut [f32], _: &cpal::OutputCallbackInfo| {
            out.fill(0.0);
            let frames = (out.len() / channels).min(mono.len());
            let block = &mut mono[..frames];
            if synth.process(block, &[]).is_ok() {
                for (frame, &sample) in out.chunks_mut(channels).zip(block.iter()) {
                    frame.fill(sample);
                }
            }
        },
        |err| eprintln!("stream error: {err}"),
        None,
    )?;
    stream.play()?;

    println!("playing at {sample_rate} Hz...");

    events.push(Event::SetParameter {
        param: Param::Cutoff,
        value: 1_500.0,
    });

    // A little arpeggio: A minor, one note every 300 ms.
    for frequency in [220.0, 261.63, 329.63, 440.0] {
        events.push(Event::NoteOn {
            frequency,
            amplitude: 0.6,
        });
        thread::sleep(Duration::from_millis(220));
        events.push(Event::NoteOff);
        thread::sleep(Duration::from_millis(80));
    }

    // Let the last release ring out.
    thread::sleep(Duration::from_millis(400));

    if events.dropped() > 0 {
        eprintln!("dropped {} events", events.dropped());
    }

    Ok(())
}
