//! Shared types and pure logic of the material return FMS.
//!
//! Everything here is free of browser dependencies so it can be unit-tested
//! natively and reused by the WASM frontend.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
