//! `ep-spatial` — proximity queries over agent positions.
//!
//! # Crate layout
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`grid`]  | `SpatialIndex` (uniform grid, CSR cell storage)       |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                    |

pub mod error;
pub mod grid;


pub use error::{SpatialError, SpatialResult};
pub use grid::SpatialIndex;
