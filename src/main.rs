//! Sunburst Clock entry point
//!
//! Web: mounts the clock on the page and renders each frame into the container.
//! Native: runs a headless clock for a few ticks and prints each frame as JSON.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_clock {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use sunburst_clock::platform::WebHost;
    use sunburst_clock::renderer::svg::FULLSCREEN_BUTTON_ID;
    use sunburst_clock::renderer::{Theme, render_html};
    use sunburst_clock::{ClockConfig, ClockError, ClockResult, ClockWidget};

    thread_local! {
        static CLOCK: RefCell<Option<ClockWidget<WebHost>>> = const { RefCell::new(None) };
    }

    pub fn run() -> ClockResult<()> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Sunburst Clock starting...");

        let config = ClockConfig::load();
        let host = Rc::new(WebHost::new()?);
        let container = host
            .document()
            .get_element_by_id(&config.container_id)
            .ok_or(ClockError::HostUnavailable("clock container"))?;

        let theme = Theme::default();
        let brand = config.brand.clone();
        let target = container.clone();
        let widget = ClockWidget::mount(host, &config, move |frame| {
            target.set_inner_html(&render_html(frame, &theme, &brand));
        });
        CLOCK.with(|c| *c.borrow_mut() = Some(widget));

        setup_fullscreen_button(&container);

        log::info!("Sunburst Clock running!");
        Ok(())
    }

    /// The button is re-rendered with every frame, so listen on the container
    fn setup_fullscreen_button(container: &web_sys::Element) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            let on_button = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|el| el.id() == FULLSCREEN_BUTTON_ID);
            if on_button {
                CLOCK.with(|c| {
                    if let Some(widget) = c.borrow().as_ref() {
                        widget.toggle_fullscreen();
                    }
                });
            }
        });
        let _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        // Lives as long as the page
        closure.forget();
    }

    /// Tear the clock down (timer and listeners released)
    #[wasm_bindgen]
    pub fn unmount_clock() {
        if let Some(mut widget) = CLOCK.with(|c| c.borrow_mut().take()) {
            widget.close();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_clock::run() {
        log::error!("Sunburst Clock failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::rc::Rc;
    use std::time::Duration;

    use sunburst_clock::platform::HeadlessHost;
    use sunburst_clock::renderer::{Theme, render_svg};
    use sunburst_clock::{ClockConfig, ClockWidget};

    env_logger::init();
    log::info!("Sunburst Clock (native) starting...");

    let svg_mode = std::env::args().any(|a| a == "--svg");
    let config = ClockConfig::load();
    let host = Rc::new(HeadlessHost::new(config.native_viewport));

    let theme = Theme::default();
    let brand = config.brand.clone();
    let mut widget = ClockWidget::mount(host.clone(), &config, move |frame| {
        if svg_mode {
            println!("{}", render_svg(frame, &theme, &brand));
            return;
        }
        match serde_json::to_string(frame) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to encode frame: {}", e),
        }
    });

    for _ in 0..config.native_ticks {
        let Some(interval_ms) = host.next_interval_ms() else {
            break;
        };
        std::thread::sleep(Duration::from_millis(u64::from(interval_ms)));
        host.fire_timers();
    }

    widget.close();
    log::info!("Sunburst Clock stopped after {} ticks", config.native_ticks);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
