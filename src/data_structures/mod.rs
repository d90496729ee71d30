mod pool;
mod signature;

pub use pool::*;
pub use signature::*;
