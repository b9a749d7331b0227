//! ModemManager D-Bus API types.

pub mod flags;
pub mod registration;
pub mod signal;
pub mod states;

pub use flags::*;
pub use registration::*;
pub use signal::*;
pub use states::*;
