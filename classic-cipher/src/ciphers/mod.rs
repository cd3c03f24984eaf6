//! Classical cipher implementations

pub mod running_key;
pub mod shift;
pub mod substitution;

pub use running_key::*;
pub use shift::*;
pub use substitution::*;
