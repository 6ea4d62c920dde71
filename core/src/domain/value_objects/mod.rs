//! Value objects shared between services and the presentation layer.

pub mod session;

pub use session::IssuedToken;
