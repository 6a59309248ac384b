//! Control structures built on the capability traits.

mod reader;
mod thunk;

pub use reader::Reader;
pub use thunk::Thunk;
