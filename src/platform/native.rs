//! Headless host for native builds
//!
//! Nothing fires on its own: the owner calls `fire_timers`, `resize` and
//! `set_fullscreen` to deliver events. Time comes from the local clock unless
//! pinned with `set_time`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{Local, Timelike};

use crate::error::{ClockError, ClockResult};
use crate::host::{
    FullscreenCallback, Host, ListenerHandle, ResizeCallback, TickCallback, TimerHandle,
};
use crate::layout::ViewportSize;
use crate::time::{DigitalLabels, TickSample, Timestamp};

struct Timer {
    id: u32,
    interval_ms: u32,
    callback: Rc<RefCell<TickCallback>>,
}

pub struct HeadlessHost {
    viewport: Cell<ViewportSize>,
    fullscreen: Cell<bool>,
    /// When set, fullscreen requests fail with this reason
    refusal: RefCell<Option<String>>,
    pinned_time: RefCell<Option<TickSample>>,
    next_id: Cell<u32>,
    timers: RefCell<Vec<Timer>>,
    resize_listeners: RefCell<Vec<(u32, Rc<RefCell<ResizeCallback>>)>>,
    fullscreen_listeners: RefCell<Vec<(u32, Rc<RefCell<FullscreenCallback>>)>>,
}

/// Read the local wall clock and format it the way en-US browsers do
pub fn local_sample() -> TickSample {
    let now = Local::now();
    let time = Timestamp::from_hms(now.hour(), now.minute(), now.second())
        .unwrap_or(Timestamp::MIDNIGHT);
    TickSample::new(
        time,
        DigitalLabels {
            time: now.format("%-I:%M:%S %p").to_string(),
            date: now.format("%a, %b %-d, %Y").to_string(),
        },
    )
}

impl HeadlessHost {
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport: Cell::new(viewport),
            fullscreen: Cell::new(false),
            refusal: RefCell::new(None),
            pinned_time: RefCell::new(None),
            next_id: Cell::new(0),
            timers: RefCell::new(Vec::new()),
            resize_listeners: RefCell::new(Vec::new()),
            fullscreen_listeners: RefCell::new(Vec::new()),
        }
    }

    fn issue_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    /// Pin the clock to a sample (None returns to local time)
    pub fn set_time(&self, sample: Option<TickSample>) {
        *self.pinned_time.borrow_mut() = sample;
    }

    /// Make later fullscreen requests fail with `reason`
    pub fn refuse_fullscreen(&self, reason: Option<&str>) {
        *self.refusal.borrow_mut() = reason.map(str::to_string);
    }

    /// Fire every live timer once
    pub fn fire_timers(&self) {
        // Callbacks may cancel timers, so run them outside the borrow
        let callbacks: Vec<_> = self
            .timers
            .borrow()
            .iter()
            .map(|t| t.callback.clone())
            .collect();
        for cb in callbacks {
            (cb.borrow_mut())();
        }
    }

    /// Shortest live timer interval, if any
    pub fn next_interval_ms(&self) -> Option<u32> {
        self.timers.borrow().iter().map(|t| t.interval_ms).min()
    }

    /// Change the viewport and notify listeners
    pub fn resize(&self, size: ViewportSize) {
        self.viewport.set(size);
        let callbacks: Vec<_> = self
            .resize_listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in callbacks {
            (cb.borrow_mut())(size);
        }
    }

    /// Change fullscreen state from the host side (e.g. the user pressed Esc)
    pub fn set_fullscreen(&self, active: bool) {
        self.fullscreen.set(active);
        let callbacks: Vec<_> = self
            .fullscreen_listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in callbacks {
            (cb.borrow_mut())(active);
        }
    }

    pub fn timer_count(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.resize_listeners.borrow().len() + self.fullscreen_listeners.borrow().len()
    }
}

impl Host for HeadlessHost {
    fn now(&self) -> TickSample {
        self.pinned_time.borrow().clone().unwrap_or_else(local_sample)
    }

    fn schedule_repeating(&self, interval_ms: u32, callback: TickCallback) -> TimerHandle {
        let id = self.issue_id();
        self.timers.borrow_mut().push(Timer {
            id,
            interval_ms,
            callback: Rc::new(RefCell::new(callback)),
        });
        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.timers.borrow_mut().retain(|t| t.id != handle.0);
    }

    fn viewport_size(&self) -> ViewportSize {
        self.viewport.get()
    }

    fn on_viewport_resize(&self, callback: ResizeCallback) -> ListenerHandle {
        let id = self.issue_id();
        self.resize_listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(callback))));
        ListenerHandle(id)
    }

    fn is_fullscreen_active(&self) -> bool {
        self.fullscreen.get()
    }

    fn request_fullscreen(&self) -> ClockResult<()> {
        if let Some(reason) = self.refusal.borrow().clone() {
            return Err(ClockError::FullscreenRequest(reason));
        }
        self.set_fullscreen(true);
        Ok(())
    }

    fn exit_fullscreen(&self) {
        self.set_fullscreen(false);
    }

    fn on_fullscreen_change(&self, callback: FullscreenCallback) -> ListenerHandle {
        let id = self.issue_id();
        self.fullscreen_listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(callback))));
        ListenerHandle(id)
    }

    fn unsubscribe(&self, handle: ListenerHandle) {
        self.resize_listeners
            .borrow_mut()
            .retain(|(id, _)| *id != handle.0);
        self.fullscreen_listeners
            .borrow_mut()
            .retain(|(id, _)| *id != handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::FrameDescriptor;
    use crate::config::ClockConfig;
    use crate::widget::ClockWidget;

    fn pinned(h: u32, m: u32, s: u32) -> Option<TickSample> {
        Some(TickSample::unlabeled(Timestamp::from_hms(h, m, s).unwrap()))
    }

    fn mounted() -> (
        Rc<HeadlessHost>,
        ClockWidget<HeadlessHost>,
        Rc<RefCell<Vec<FrameDescriptor>>>,
    ) {
        let host = Rc::new(HeadlessHost::new(ViewportSize::new(1000.0, 800.0)));
        host.set_time(pinned(0, 0, 0));
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();
        let widget = ClockWidget::mount(host.clone(), &ClockConfig::default(), move |f| {
            sink.borrow_mut().push(f.clone());
        });
        (host, widget, frames)
    }

    #[test]
    fn test_local_sample_is_labeled() {
        let sample = local_sample();
        assert!(sample.time.hour() < 24);
        assert!(sample.labels.time.ends_with("AM") || sample.labels.time.ends_with("PM"));
        assert!(!sample.labels.date.is_empty());
    }

    #[test]
    fn test_timer_drives_ticks() {
        let (host, _widget, frames) = mounted();
        assert_eq!(host.timer_count(), 1);
        assert_eq!(host.next_interval_ms(), Some(1000));

        host.set_time(pinned(3, 15, 30));
        host.fire_timers();
        let last = frames.borrow().last().cloned().unwrap();
        assert_eq!(last.angles.hour, 97.5);
    }

    #[test]
    fn test_toggle_round_trip() {
        let (host, widget, frames) = mounted();
        widget.toggle_fullscreen();
        assert!(host.is_fullscreen_active());
        assert!(widget.is_fullscreen());
        assert!(!frames.borrow().last().unwrap().show_fullscreen_button);

        widget.toggle_fullscreen();
        assert!(!widget.is_fullscreen());
        assert!(frames.borrow().last().unwrap().show_fullscreen_button);
    }

    #[test]
    fn test_refused_request() {
        let (host, widget, frames) = mounted();
        host.refuse_fullscreen(Some("not allowed"));
        widget.toggle_fullscreen();
        assert!(!widget.is_fullscreen());
        assert_eq!(frames.borrow().len(), 1);
    }

    #[test]
    fn test_close_releases_everything() {
        let (host, mut widget, frames) = mounted();
        assert_eq!(host.listener_count(), 2);
        widget.close();
        assert_eq!(host.timer_count(), 0);
        assert_eq!(host.listener_count(), 0);
        // Nothing left to wait for, so the run loop stops
        assert_eq!(host.next_interval_ms(), None);

        host.fire_timers();
        host.resize(ViewportSize::new(200.0, 200.0));
        host.set_fullscreen(true);
        assert_eq!(frames.borrow().len(), 1);
    }
}
