//! Collaborator interfaces the driver consumes.
//!
//! The driver never talks to a terminal directly; the host supplies one
//! implementation of each trait.

use anyhow::Result;

use spincube_core::{DisplayMetrics, FrameBuffers};
use spincube_types::{LogicalKey, Region};

/// Live display geometry. Called every frame, so it must be cheap.
pub trait MetricsSource {
    fn query(&mut self) -> DisplayMetrics;
}

/// Non-blocking key state.
pub trait InputSource {
    /// Drain pending events without blocking.
    fn poll(&mut self) -> Result<()>;

    /// Whether `key` is currently held down.
    fn is_pressed(&self, key: LogicalKey) -> bool;
}

/// Receives each finished frame.
pub trait DisplaySink {
    /// Write `frame` into `region` in one call.
    fn present(&mut self, region: Region, frame: &FrameBuffers) -> Result<()>;
}

impl<T: MetricsSource + ?Sized> MetricsSource for &mut T {
    fn query(&mut self) -> DisplayMetrics {
        (**self).query()
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self) -> Result<()> {
        (**self).poll()
    }

    fn is_pressed(&self, key: LogicalKey) -> bool {
        (**self).is_pressed(key)
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn present(&mut self, region: Region, frame: &FrameBuffers) -> Result<()> {
        (**self).present(region, frame)
    }
}
