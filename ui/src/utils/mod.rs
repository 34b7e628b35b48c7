//! Cross-cutting helpers.
//!
//! - **console_macros**: WASM-compatible logging macros for browser console
//!   output

pub mod console_macros;
