//! Conditional logging macros.
//!
//! With the `tracing` feature enabled these are the `tracing` macros; without
//! it they expand to nothing, so host applications that do not care about
//! fixer diagnostics pay no cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

// The no-op arms expand to an empty block, not an empty token stream, so the
// macros stay valid in expression position (match arms and the like).
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
