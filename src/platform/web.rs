//! Browser host over `web-sys`
//!
//! Timers and listeners keep their `Closure`s in tables keyed by handle, so
//! cancelling or unsubscribing drops the closure instead of leaking it with
//! `forget`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, Window};

use crate::error::{ClockError, ClockResult};
use crate::host::{
    FullscreenCallback, Host, ListenerHandle, ResizeCallback, TickCallback, TimerHandle,
};
use crate::layout::ViewportSize;
use crate::time::{DigitalLabels, TickSample, Timestamp};

struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

pub struct WebHost {
    window: Window,
    document: Document,
    next_id: Cell<u32>,
    intervals: RefCell<HashMap<u32, Interval>>,
    listeners: RefCell<HashMap<u32, Listener>>,
}

/// Best-effort message out of a thrown JS value
fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

fn viewport_of(window: &Window) -> ViewportSize {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    ViewportSize::new(dim(window.inner_width()), dim(window.inner_height()))
}

impl WebHost {
    pub fn new() -> ClockResult<Self> {
        let window = web_sys::window().ok_or(ClockError::HostUnavailable("no window"))?;
        let document = window
            .document()
            .ok_or(ClockError::HostUnavailable("no document"))?;
        Ok(Self {
            window,
            document,
            next_id: Cell::new(0),
            intervals: RefCell::new(HashMap::new()),
            listeners: RefCell::new(HashMap::new()),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn issue_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn listen(
        &self,
        target: EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> ListenerHandle {
        let id = self.issue_id();
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("Failed to listen for {}: {}", event, js_error_message(&e));
        }
        self.listeners.borrow_mut().insert(
            id,
            Listener {
                target,
                event,
                closure,
            },
        );
        ListenerHandle(id)
    }
}

impl Host for WebHost {
    fn now(&self) -> TickSample {
        let date = js_sys::Date::new_0();
        let time = Timestamp::from_hms(date.get_hours(), date.get_minutes(), date.get_seconds())
            .unwrap_or(Timestamp::MIDNIGHT);

        let options = js_sys::Object::new();
        for (key, value) in [
            ("weekday", "short"),
            ("month", "short"),
            ("day", "numeric"),
            ("year", "numeric"),
        ] {
            let _ = js_sys::Reflect::set(&options, &key.into(), &value.into());
        }

        TickSample::new(
            time,
            DigitalLabels {
                time: date.to_locale_time_string("default").into(),
                date: date.to_locale_date_string("en-US", &options).into(),
            },
        )
    }

    fn schedule_repeating(&self, interval_ms: u32, callback: TickCallback) -> TimerHandle {
        let mut callback = callback;
        let closure = Closure::<dyn FnMut()>::new(move || callback());
        let id = self.issue_id();
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms.min(i32::MAX as u32) as i32,
            ) {
            Ok(interval_id) => {
                self.intervals.borrow_mut().insert(
                    id,
                    Interval {
                        id: interval_id,
                        _closure: closure,
                    },
                );
            }
            Err(e) => log::error!("setInterval failed: {}", js_error_message(&e)),
        }
        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        if let Some(interval) = self.intervals.borrow_mut().remove(&handle.0) {
            self.window.clear_interval_with_handle(interval.id);
        }
    }

    fn viewport_size(&self) -> ViewportSize {
        viewport_of(&self.window)
    }

    fn on_viewport_resize(&self, callback: ResizeCallback) -> ListenerHandle {
        let mut callback = callback;
        let window = self.window.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            callback(viewport_of(&window));
        });
        self.listen(self.window.clone().into(), "resize", closure)
    }

    fn is_fullscreen_active(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn request_fullscreen(&self) -> ClockResult<()> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| ClockError::FullscreenRequest("no document element".into()))?;
        root.request_fullscreen()
            .map_err(|e| ClockError::FullscreenRequest(js_error_message(&e)))
    }

    fn exit_fullscreen(&self) {
        self.document.exit_fullscreen();
    }

    fn on_fullscreen_change(&self, callback: FullscreenCallback) -> ListenerHandle {
        let mut callback = callback;
        let document = self.document.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            callback(document.fullscreen_element().is_some());
        });
        self.listen(self.document.clone().into(), "fullscreenchange", closure)
    }

    fn unsubscribe(&self, handle: ListenerHandle) {
        if let Some(listener) = self.listeners.borrow_mut().remove(&handle.0) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        for (_, interval) in self.intervals.borrow_mut().drain() {
            self.window.clear_interval_with_handle(interval.id);
        }
        for (_, listener) in self.listeners.borrow_mut().drain() {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
