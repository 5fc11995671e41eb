//! Primitive batching and the per-frame sort & emit pipeline.
//!
//! Responsibilities:
//! - turn Begin/Vertex/End streams into flat per-type vertex storage
//! - keep sortable primitives apart from unsorted ones
//! - order sortable primitives back-to-front and hand out [`DrawList`]s

mod buffer;
mod key;
mod list;
mod primitive;
mod sort;
mod vertex;

pub use buffer::{Bucket, PrimitiveBuffer};
pub use key::SortKey;
pub use list::DrawList;
pub use primitive::{PrimitiveMode, PrimitiveType};
pub use vertex::Vertex;
