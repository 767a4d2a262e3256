//! Types shared between the portfolio frontend and backend.
//!
//! The navigation core lives here so it can be tested natively, without a
//! browser or the wasm toolchain.

pub mod enums;
pub mod shared;
