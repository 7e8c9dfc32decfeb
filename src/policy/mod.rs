pub mod model;
pub mod set;

pub use model::{NatKind, Policy, WEB_AUTH_MARKER};
pub use set::PolicySet;
