pub mod distance;
pub mod error;
pub mod grid_state;
pub mod move_gen;
pub mod types;

pub use distance::manhattan;
pub use error::{GridError, Result};
pub use grid_state::*;
pub use move_gen::*;
pub use types::*;
