//! Copy-to-clipboard field behavior: status transitions, reset-timer
//! supersession, and the copy attempt itself. The rendered control lives in
//! `components::copy_field`.

pub mod logic;
pub mod state;

pub use logic::*;
pub use state::*;
