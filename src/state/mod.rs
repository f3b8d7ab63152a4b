pub mod pointer;

pub use pointer::{PointerState, to_surface};
