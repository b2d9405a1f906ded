mod group;
mod lane;

pub use group::*;
pub use lane::*;
