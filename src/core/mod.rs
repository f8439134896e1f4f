//! Core sequence logic — value types, transforms, widening, rendering.

pub mod render;
pub mod transform;
pub mod types;
pub mod widen;
