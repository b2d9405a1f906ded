use crate::layouts::{Backend, Group};

pub trait GroupNew<B: Backend> {
    /// Creates a lane group of `width` lock-step lanes.
    ///
    /// # Panics
    ///
    /// Panics if `width` is 0 or exceeds the native vote width
    /// [`crate::layouts::LANE_MASK_BITS`].
    fn new(width: usize) -> Group<B>;
}
