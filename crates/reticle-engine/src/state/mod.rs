//! Scoped draw state.
//!
//! Every piece of draw state lives on its own [`StateStack`]; vertices and ids
//! read whatever is on top at the time of the call.

mod draw_state;
mod stack;

pub use draw_state::DrawState;
pub use stack::StateStack;
