//! Frame pacing for the live preview.
//!
//! Portable, without async/await or platform timers: the caller passes the
//! current time in and sleeps for the returned duration.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::animation::AnimationState;
use crate::model::EffectModel;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether a frame was written on this tick.
    pub rendered: bool,
}

/// Drives the preview of one effect at the effect's own tick period.
///
/// This scheduler:
/// - Renders the model with the current [`AnimationState`]
/// - Writes each frame to the output driver
/// - Advances the animation while running
/// - Tracks frame timing with drift correction
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = PreviewScheduler::new(model, 70, surface);
/// scheduler.start();
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct PreviewScheduler<O: OutputDriver> {
    output: O,
    model: EffectModel,
    strip_length: usize,
    state: AnimationState,
    running: bool,
    next_frame: Instant,
}

impl<O: OutputDriver> PreviewScheduler<O> {
    /// Create a stopped scheduler. The first tick renders immediately.
    pub fn new(model: EffectModel, strip_length: usize, driver: O) -> Self {
        Self {
            output: driver,
            model,
            strip_length,
            state: AnimationState::new(),
            running: false,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Replace the previewed model.
    ///
    /// Animation restarts from phase zero and the next tick renders at once.
    pub fn set_model(&mut self, model: EffectModel) {
        self.model = model;
        self.state.reset();
        self.next_frame = Instant::from_millis(0);
    }

    /// Start animating from the first frame
    pub fn start(&mut self) {
        self.state.reset();
        self.running = true;
        self.next_frame = Instant::from_millis(0);
    }

    /// Freeze the preview on its first frame
    pub fn stop(&mut self) {
        self.state.reset();
        self.running = false;
        self.next_frame = Instant::from_millis(0);
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    pub const fn model(&self) -> &EffectModel {
        &self.model
    }

    pub fn frame_duration(&self) -> Duration {
        self.model.speed().period()
    }

    /// Render one frame if its deadline has been reached.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again; early calls render nothing.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let frame_duration = self.frame_duration();

        if now < self.next_frame {
            return FrameResult {
                next_deadline: self.next_frame,
                sleep_duration: self.next_frame - now,
                rendered: false,
            };
        }

        // More than two periods behind: resync to now instead of bursting
        let max_drift = Duration::from_millis(frame_duration.as_millis() * 2);
        if now.as_millis() > self.next_frame.as_millis() + max_drift.as_millis() {
            self.next_frame = now;
        }

        let frame = self.state.frame(&self.model, self.strip_length);
        self.output.write(&frame);

        if self.running {
            self.state.advance(&self.model, self.strip_length);
        }

        self.next_frame += frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            rendered: true,
        }
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
