//! Fixed-rate animation driver.
//!
//! Owns the animation state, the projector and the frame buffers, and runs
//! the per-frame sequence: input edges, metrics, buffer reset, render, present.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info, trace};

use spincube_core::{
    Compositor, DisplayMetrics, FrameBuffers, FrameParams, Projector, RenderConfig, RenderStats,
};

use crate::animation::{AnimationState, KeyLatch};
use crate::ports::{DisplaySink, InputSource, MetricsSource};

/// Frames between trace-level statistics lines.
const STATS_EVERY_FRAMES: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    /// The display is below the minimum usable size; nothing is rendered.
    PausedForResize,
    /// An exit was requested. Terminal state.
    Terminating,
}

/// Result of one [`Driver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Rendered(RenderStats),
    WaitingForResize,
    Exit,
}

pub struct Driver<M, I, S> {
    config: RenderConfig,
    compositor: Compositor,
    animation: AnimationState,
    latch: KeyLatch,
    metrics: Option<DisplayMetrics>,
    projector: Option<Projector>,
    buffers: FrameBuffers,
    state: DriverState,
    frames: u64,
    metrics_source: M,
    input: I,
    sink: S,
}

impl<M, I, S> Driver<M, I, S>
where
    M: MetricsSource,
    I: InputSource,
    S: DisplaySink,
{
    pub fn new(config: RenderConfig, metrics_source: M, input: I, sink: S) -> Self {
        Self {
            compositor: Compositor::new(&config),
            config,
            animation: AnimationState::default(),
            latch: KeyLatch::new(),
            metrics: None,
            projector: None,
            buffers: FrameBuffers::new(0, 0),
            state: DriverState::Running,
            frames: 0,
            metrics_source,
            input,
            sink,
        }
    }

    pub fn with_animation(mut self, animation: AnimationState) -> Self {
        self.animation = animation;
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn buffers(&self) -> &FrameBuffers {
        &self.buffers
    }

    pub fn projector(&self) -> Option<&Projector> {
        self.projector.as_ref()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn metrics_source_mut(&mut self) -> &mut M {
        &mut self.metrics_source
    }

    /// Release the ports, e.g. to restore the terminal.
    pub fn into_parts(self) -> (M, I, S) {
        (self.metrics_source, self.input, self.sink)
    }

    /// Run one frame at `elapsed` time since the animation started.
    pub fn step(&mut self, elapsed: Duration) -> Result<FrameOutcome> {
        if self.state == DriverState::Terminating {
            return Ok(FrameOutcome::Exit);
        }

        self.input.poll()?;
        for key in self.latch.update(&self.input) {
            if self.animation.apply(key) {
                info!("exit requested");
                self.state = DriverState::Terminating;
                return Ok(FrameOutcome::Exit);
            }
            debug!(
                "{}: scale={:.2} speed={:.2}",
                key.as_str(),
                self.animation.cube_scale(),
                self.animation.speed()
            );
        }

        let metrics = self.metrics_source.query();
        if !metrics.is_usable() {
            if self.state != DriverState::PausedForResize {
                info!(
                    "display {}x{} below minimum, pausing",
                    metrics.visible_width, metrics.visible_height
                );
                self.state = DriverState::PausedForResize;
            }
            return Ok(FrameOutcome::WaitingForResize);
        }
        if self.state == DriverState::PausedForResize {
            info!(
                "display {}x{} usable again, resuming",
                metrics.visible_width, metrics.visible_height
            );
        }
        self.state = DriverState::Running;

        let projector = self.prepare(metrics);

        self.animation.set_elapsed(elapsed);
        let params = FrameParams {
            rotation: self.animation.rotation(),
            cube_scale: self.animation.cube_scale(),
        };
        let stats = self.compositor.render(&params, &projector, &mut self.buffers);

        self.sink.present(metrics.region(), &self.buffers)?;

        self.frames += 1;
        if self.frames % STATS_EVERY_FRAMES == 0 {
            trace!(
                "frame {}: faces={} samples={} t={:.2}s",
                self.frames,
                stats.faces_drawn,
                stats.samples_written,
                elapsed.as_secs_f32()
            );
        }
        Ok(FrameOutcome::Rendered(stats))
    }

    /// Reallocate on geometry change, otherwise just clear.
    fn prepare(&mut self, metrics: DisplayMetrics) -> Projector {
        match (self.metrics, self.projector) {
            (Some(prev), Some(projector)) if !metrics.differs_from(&prev) => {
                self.buffers.clear();
                projector
            }
            _ => {
                debug!(
                    "display metrics {}x{} aspect {:.3}",
                    metrics.visible_width, metrics.visible_height, metrics.cell_aspect
                );
                let projector = Projector::with_focal_scale(&metrics, self.config.focal_scale);
                self.buffers
                    .resize(metrics.visible_width, metrics.visible_height);
                self.metrics = Some(metrics);
                self.projector = Some(projector);
                projector
            }
        }
    }

    /// Loop at the configured frame rate until an exit is requested.
    pub fn run(&mut self) -> Result<()> {
        let start = Instant::now();
        loop {
            match self.step(start.elapsed())? {
                FrameOutcome::Rendered(_) => thread::sleep(self.config.frame_interval),
                FrameOutcome::WaitingForResize => thread::sleep(self.config.resize_wait),
                FrameOutcome::Exit => break,
            }
        }
        info!("stopped after {} frames", self.frames);
        Ok(())
    }
}
