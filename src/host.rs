//! Host environment interface
//!
//! Everything the widget needs from the outside world: a clock, a repeating
//! timer, viewport size and resize notifications, and fullscreen control.
//! Implementations live in `platform`.

use crate::error::ClockResult;
use crate::layout::ViewportSize;
use crate::time::TickSample;

/// Callback fired on every timer interval
pub type TickCallback = Box<dyn FnMut()>;
/// Callback fired with the new viewport size
pub type ResizeCallback = Box<dyn FnMut(ViewportSize)>;
/// Callback fired with the host's new fullscreen state
pub type FullscreenCallback = Box<dyn FnMut(bool)>;

/// Handle to a repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u32);

/// Handle to an event subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u32);

/// Host environment consumed by `ClockWidget`.
///
/// Single-threaded: callbacks run on the host's event loop, one at a time.
pub trait Host {
    /// Sample the local wall clock, with display text formatted by the host
    fn now(&self) -> TickSample;

    /// Start a repeating timer
    fn schedule_repeating(&self, interval_ms: u32, callback: TickCallback) -> TimerHandle;

    /// Stop a timer. Unknown handles are ignored.
    fn cancel(&self, handle: TimerHandle);

    fn viewport_size(&self) -> ViewportSize;

    fn on_viewport_resize(&self, callback: ResizeCallback) -> ListenerHandle;

    fn is_fullscreen_active(&self) -> bool;

    /// Ask the host to enter fullscreen. The change itself is reported
    /// through `on_fullscreen_change`.
    fn request_fullscreen(&self) -> ClockResult<()>;

    fn exit_fullscreen(&self);

    fn on_fullscreen_change(&self, callback: FullscreenCallback) -> ListenerHandle;

    /// Drop a subscription. Unknown handles are ignored.
    fn unsubscribe(&self, handle: ListenerHandle);
}
