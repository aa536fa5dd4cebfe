//! Clock widget: a composer mounted on a host
//!
//! `ClockWidget::mount` acquires the tick timer and both host subscriptions;
//! `close` (or dropping the widget) releases all three before returning. Host
//! callbacks only hold weak references, and the composer is shut down on
//! close, so a callback the host still delivers afterwards changes nothing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::composer::{ClockEvent, Composer, FrameDescriptor};
use crate::config::ClockConfig;
use crate::host::{Host, ListenerHandle, TimerHandle};

type FrameSink = Rc<RefCell<Box<dyn FnMut(&FrameDescriptor)>>>;

/// Host resources owned by a mounted widget
struct Subscriptions {
    timer: TimerHandle,
    resize: ListenerHandle,
    fullscreen: ListenerHandle,
}

/// A mounted clock
pub struct ClockWidget<H: Host + 'static> {
    host: Rc<H>,
    composer: Rc<RefCell<Composer>>,
    subscriptions: Option<Subscriptions>,
}

/// Push one event through the composer and hand the frame to the sink
fn dispatch(composer: &Weak<RefCell<Composer>>, sink: &FrameSink, event: ClockEvent) {
    let Some(composer) = composer.upgrade() else {
        return;
    };
    // Release the composer before running the sink
    let frame = composer.borrow_mut().ingest(event);
    if let Some(frame) = frame {
        (sink.borrow_mut())(&frame);
    }
}

impl<H: Host + 'static> ClockWidget<H> {
    /// Mount a clock on `host`. The first frame is emitted before this returns.
    pub fn mount<F>(host: Rc<H>, config: &ClockConfig, on_frame: F) -> Self
    where
        F: FnMut(&FrameDescriptor) + 'static,
    {
        let composer = Rc::new(RefCell::new(Composer::new(
            host.now(),
            host.viewport_size(),
            host.is_fullscreen_active(),
        )));
        let sink: FrameSink = Rc::new(RefCell::new(Box::new(on_frame)));

        let timer = {
            let composer = Rc::downgrade(&composer);
            let sink = sink.clone();
            let host_ref = Rc::downgrade(&host);
            host.schedule_repeating(
                config.tick_interval_ms,
                Box::new(move || {
                    if let Some(host) = host_ref.upgrade() {
                        dispatch(&composer, &sink, ClockEvent::Tick(host.now()));
                    }
                }),
            )
        };

        let resize = {
            let composer = Rc::downgrade(&composer);
            let sink = sink.clone();
            host.on_viewport_resize(Box::new(move |size| {
                dispatch(&composer, &sink, ClockEvent::ViewportChanged(size));
            }))
        };

        let fullscreen = {
            let composer = Rc::downgrade(&composer);
            let sink = sink.clone();
            host.on_fullscreen_change(Box::new(move |active| {
                dispatch(&composer, &sink, ClockEvent::FullscreenChanged(active));
            }))
        };

        log::debug!(
            "Clock mounted (tick every {} ms, timer {:?})",
            config.tick_interval_ms,
            timer
        );

        let first = composer.borrow().frame();
        (sink.borrow_mut())(&first);

        Self {
            host,
            composer,
            subscriptions: Some(Subscriptions {
                timer,
                resize,
                fullscreen,
            }),
        }
    }

    /// Enter fullscreen, or leave it if the host says it is active.
    ///
    /// A failed request is logged and nothing changes; the host's change
    /// notification is what updates the widget.
    pub fn toggle_fullscreen(&self) {
        if !self.is_mounted() {
            return;
        }
        if self.host.is_fullscreen_active() {
            self.host.exit_fullscreen();
        } else if let Err(err) = self.host.request_fullscreen() {
            log::warn!("{}", err);
        }
    }

    /// Current frame, or `None` after close
    pub fn frame(&self) -> Option<FrameDescriptor> {
        let composer = self.composer.borrow();
        (!composer.is_shut_down()).then(|| composer.frame())
    }

    pub fn is_fullscreen(&self) -> bool {
        self.composer.borrow().is_fullscreen()
    }

    pub fn is_mounted(&self) -> bool {
        self.subscriptions.is_some()
    }

    /// Cancel the timer and drop both subscriptions. Idempotent.
    pub fn close(&mut self) {
        let Some(subs) = self.subscriptions.take() else {
            return;
        };
        self.host.cancel(subs.timer);
        self.host.unsubscribe(subs.resize);
        self.host.unsubscribe(subs.fullscreen);
        self.composer.borrow_mut().shut_down();
        log::debug!("Clock torn down");
    }
}

impl<H: Host + 'static> Drop for ClockWidget<H> {
    fn drop(&mut self) {
        self.close();
    }
}
