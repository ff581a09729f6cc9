mod error;
mod handle;

pub use error::ParseHandleError;
pub use handle::ContextHandle;
