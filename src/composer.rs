//! Frame composition
//!
//! The composer holds the three pieces of input state (latest tick, viewport,
//! fullscreen flag) and turns them into a `FrameDescriptor`. Inputs arrive as
//! `ClockEvent`s through `ingest`; each one overwrites its piece of state and
//! the whole frame is recomputed. The composer never talks to the host.

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutGeometry, ViewportSize};
use crate::time::{AngleSet, DigitalLabels, TickSample};

/// Input pushed into the composer by the host glue
#[derive(Debug, Clone, PartialEq)]
pub enum ClockEvent {
    /// Timer fired
    Tick(TickSample),
    /// Viewport was resized
    ViewportChanged(ViewportSize),
    /// Host entered or left fullscreen
    FullscreenChanged(bool),
}

/// Everything the rendering surface needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDescriptor {
    pub angles: AngleSet,
    pub layout: LayoutGeometry,
    pub fullscreen: bool,
    /// The fullscreen button is hidden while fullscreen
    pub show_fullscreen_button: bool,
    pub labels: DigitalLabels,
}

/// Folds clock events into frame descriptors
#[derive(Debug, Clone)]
pub struct Composer {
    sample: TickSample,
    viewport: ViewportSize,
    fullscreen: bool,
    shut_down: bool,
}

impl Composer {
    pub fn new(sample: TickSample, viewport: ViewportSize, fullscreen: bool) -> Self {
        Self {
            sample,
            viewport,
            fullscreen,
            shut_down: false,
        }
    }

    /// Apply an event and return the recomputed frame.
    /// Returns `None` once the composer has been shut down.
    pub fn ingest(&mut self, event: ClockEvent) -> Option<FrameDescriptor> {
        if self.shut_down {
            log::trace!("Ignoring {:?} after shutdown", event);
            return None;
        }

        match event {
            ClockEvent::Tick(sample) => self.sample = sample,
            ClockEvent::ViewportChanged(viewport) => self.viewport = viewport,
            ClockEvent::FullscreenChanged(active) => {
                if active != self.fullscreen {
                    log::debug!("Fullscreen {}", if active { "entered" } else { "exited" });
                }
                self.fullscreen = active;
            }
        }

        Some(self.frame())
    }

    /// Compose a frame from the current state
    pub fn frame(&self) -> FrameDescriptor {
        FrameDescriptor {
            angles: AngleSet::from_timestamp(&self.sample.time),
            layout: LayoutGeometry::compute(self.viewport),
            fullscreen: self.fullscreen,
            show_fullscreen_button: !self.fullscreen,
            labels: self.sample.labels.clone(),
        }
    }

    /// Stop accepting events; later `ingest` calls are no-ops
    pub fn shut_down(&mut self) {
        self.shut_down = true;
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}
