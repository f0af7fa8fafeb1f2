pub mod error;
pub mod heap;
pub mod index;
pub mod ops;

pub use error::HeapError;
pub use heap::Heap;
pub use ops::HeapOps;
