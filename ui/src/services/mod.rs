//! Infrastructure Services
//!
//! - **clipboard**: injectable clipboard write capability, with a
//!   `navigator.clipboard` implementation for the web target
//!
//! Services are WASM-first, using browser APIs and async traits without
//! Send/Sync bounds for compatibility.

pub mod clipboard;
