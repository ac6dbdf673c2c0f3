use crate::MIN_TIME;

/*
Linear ADSR envelope
====================

The envelope multiplies the voice output, shaping amplitude over time:

  Level
    1.0 ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
        │  ╱                 ╲
    0.0 └─╱───────────────────╲──→ Time
         Attack Decay Sustain Release

Ramps are LINEAR. The per-sample step for a stage is computed once, when the
stage is entered (or when the sample rate changes), from the stage duration:

    step = level_change / (stage_time_seconds * sample_rate)

so stage timing expressed in seconds is invariant across sample rates, and
the audio thread pays no division per sample.

State machine:

    Idle --note_on--> Attack --level=1--> Decay --level=S--> Sustain
                        |                   |                   |
                        +------- note_off (from any stage) -----+
                                            |
                                            v
                     Idle <--level=0-- Release

Two transition rules matter for continuity:

  * note_on restarts Attack from the CURRENT level, not from zero. A
    retrigger mid-envelope ramps up from wherever it is (reaching 1.0
    early), instead of snapping to silence and clicking.
  * note_off enters Release from the CURRENT level, from any active stage.
    An early release during Attack or Decay ramps down from there.
*/

/// The current stage of the envelope state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
}

pub struct Envelope {
    // ADSR parameters (seconds / level), floored so no stage divides by zero
    attack_time: f32,
    decay_time: f32,
    sustain_level: f32,
    release_time: f32,

    sample_rate: f32,

    stage: EnvelopeStage,
    level: f32,
    // Per-sample step for the current stage, recomputed at stage entry and
    // by set_sample_rate. Always the magnitude; the stage decides the sign.
    step: f32,
    // Level at the moment the current ramp began, kept so set_sample_rate
    // can rebuild the step without changing the ramp's slope-in-seconds.
    ramp_start_level: f32,
}

impl Envelope {
    pub fn adsr(attack: f32, decay: f32, sustain: f32, release: f32, sample_rate: f32) -> Self {
        Self {
            attack_time: attack.max(MIN_TIME),
            decay_time: decay.max(MIN_TIME),
            sustain_level: sustain.clamp(0.0, 1.0),
            release_time: release.max(MIN_TIME),
            sample_rate,
            stage: EnvelopeStage::Idle,
            level: 0.0,
            step: 0.0,
            ramp_start_level: 0.0,
        }
    }

    /// Gate high: restart the attack ramp from the current level.
    pub fn note_on(&mut self) {
        self.stage = EnvelopeStage::Attack;
        self.ramp_start_level = self.level;
        self.recompute_step();
    }

    /// Gate low: ramp to silence from the current level, whatever stage we
    /// are in. A note_off while already Idle is a no-op.
    pub fn note_off(&mut self) {
        if self.stage == EnvelopeStage::Idle {
            return;
        }
        if self.level <= 0.0 {
            // Nothing to ramp down from.
            self.enter_idle();
            return;
        }
        self.stage = EnvelopeStage::Release;
        self.ramp_start_level = self.level;
        self.recompute_step();
    }

    /// Advance one sample and return the new level.
    pub fn next_sample(&mut self) -> f32 {
        match self.stage {
            EnvelopeStage::Idle => {
                self.level = 0.0;
            }

            EnvelopeStage::Attack => {
                self.level += self.step;
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.enter_decay();
                }
            }

            EnvelopeStage::Decay => {
                self.level -= self.step;
                if self.level <= self.sustain_level {
                    self.level = self.sustain_level;
                    self.stage = EnvelopeStage::Sustain;
                    self.step = 0.0;
                }
            }

            EnvelopeStage::Sustain => {
                self.level = self.sustain_level;
            }

            EnvelopeStage::Release => {
                self.level -= self.step;
                if self.level <= 0.0 {
                    self.enter_idle();
                }
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.level));
        self.level
    }

    fn enter_decay(&mut self) {
        self.stage = EnvelopeStage::Decay;
        self.ramp_start_level = self.level;
        self.recompute_step();
    }

    fn enter_idle(&mut self) {
        self.stage = EnvelopeStage::Idle;
        self.level = 0.0;
        self.step = 0.0;
    }

    /// Rebuild the current stage's per-sample step. Called at stage entry
    /// and whenever the sample rate changes mid-stage.
    fn recompute_step(&mut self) {
        self.step = match self.stage {
            EnvelopeStage::Idle | EnvelopeStage::Sustain => 0.0,
            // Full-stage slope: a retrigger from a non-zero level keeps the
            // 0→1 slope and simply arrives early.
            EnvelopeStage::Attack => 1.0 / (self.attack_time * self.sample_rate),
            EnvelopeStage::Decay => {
                (self.ramp_start_level - self.sustain_level).max(0.0)
                    / (self.decay_time * self.sample_rate)
            }
            EnvelopeStage::Release => {
                self.ramp_start_level / (self.release_time * self.sample_rate)
            }
        };
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recompute_step();
    }

    /// Parameter setters clamp rather than reject (a control event must
    /// never halt the audio thread). A changed time takes effect the next
    /// time its stage is entered.
    pub fn set_attack_time(&mut self, seconds: f32) {
        self.attack_time = seconds.max(MIN_TIME);
    }

    pub fn set_decay_time(&mut self, seconds: f32) {
        self.decay_time = seconds.max(MIN_TIME);
    }

    pub fn set_sustain_level(&mut self, level: f32) {
        self.sustain_level = level.clamp(0.0, 1.0);
    }

    pub fn set_release_time(&mut self, seconds: f32) {
        self.release_time = seconds.max(MIN_TIME);
    }

    pub fn attack_time(&self) -> f32 {
        self.attack_time
    }

    pub fn decay_time(&self) -> f32 {
        self.decay_time
    }

    pub fn sustain_level(&self) -> f32 {
        self.sustain_level
    }

    pub fn release_time(&self) -> f32 {
        self.release_time
    }

    /// Current output level (0.0 to 1.0).
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    /// Returns true if the envelope is producing output (not idle).
    pub fn is_active(&self) -> bool {
        self.stage != EnvelopeStage::Idle
    }

    pub fn reset(&mut self) {
        self.enter_idle();
        self.ramp_start_level = 0.0;
    }
}
