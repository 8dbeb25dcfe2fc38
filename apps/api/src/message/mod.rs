// Reconstruction of a message from three partially redacted copies.

pub mod merger;

pub use merger::{merge, NoMessageFound};
