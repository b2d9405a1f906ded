use crate::layouts::{Backend, Group, LaneMask};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::LaneBroadcast] for the corresponding public API.
pub unsafe trait LaneBroadcastImpl<B: Backend> {
    fn lane_broadcast_impl(group: &Group<B>, reg: &[B::Word], src: usize) -> B::Word;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::LaneRotateUp] for the corresponding public API.
pub unsafe trait LaneRotateUpImpl<B: Backend> {
    fn lane_rotate_up_impl(group: &Group<B>, reg: &mut [B::Word], distance: usize);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::LaneRotateUpZero] for the corresponding public API.
pub unsafe trait LaneRotateUpZeroImpl<B: Backend> {
    fn lane_rotate_up_zero_impl(group: &Group<B>, reg: &mut [B::Word], distance: usize);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::LaneVote] for the corresponding public API.
pub unsafe trait LaneVoteImpl<B: Backend> {
    fn lane_vote_impl<F>(group: &Group<B>, reg: &[B::Word], pred: F) -> LaneMask
    where
        F: Fn(usize, B::Word) -> bool;
}
