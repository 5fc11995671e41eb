//! Color representation shared by vertices, draw state and gizmos.

mod color;

pub use color::Color;
