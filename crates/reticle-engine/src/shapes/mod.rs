//! Higher-order shapes built on the primitive API.
//!
//! Every helper here only calls `begin`/`vertex`/`end`, so the current draw
//! state (color, size, alpha, transform, sorting) applies as usual.
//!
//! Extending:
//! - add a file under `shapes::*`
//! - implement the helper as an `impl Context` block there

mod axes;
mod circle;
mod cylinder;
mod quad;
mod sphere;
