//! Platform hosts
//!
//! - `web`: browser host over `web-sys` (wasm32 only)
//! - `native`: headless host driven by the caller, local time from `chrono`

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::HeadlessHost;
#[cfg(target_arch = "wasm32")]
pub use web::WebHost;
