use std::marker::PhantomData;

use crate::layouts::{Backend, Group, LaneMask, LaneWord};
use crate::oep::{GroupNewImpl, LaneBroadcastImpl, LaneRotateUpImpl, LaneRotateUpZeroImpl, LaneVoteImpl};

/// Software lock-step executor.
///
/// Emulates a lane group on the host: a register is a word slice and each
/// cross-lane primitive is applied to the whole slice before returning, which
/// is exactly the consistent-snapshot guarantee lock-step hardware gives.
/// Word width is the backend's type parameter: `Soft<u32>` emulates 32-bit
/// lanes, `Soft<u64>` 64-bit lanes.
pub struct Soft<T: LaneWord> {
    _marker: PhantomData<T>,
}

impl<T: LaneWord> Backend for Soft<T> {
    type Word = T;
}

fn check_reg<B: Backend>(group: &Group<B>, len: usize) {
    debug_assert_eq!(len, group.width(), "register length does not match the group width");
}

unsafe impl<T: LaneWord> GroupNewImpl<Soft<T>> for Soft<T> {
    fn group_new_impl(width: usize) -> Group<Soft<T>> {
        Group::from_width(width)
    }
}

unsafe impl<T: LaneWord> LaneBroadcastImpl<Soft<T>> for Soft<T> {
    fn lane_broadcast_impl(group: &Group<Soft<T>>, reg: &[T], src: usize) -> T {
        check_reg(group, reg.len());
        reg[src]
    }
}

unsafe impl<T: LaneWord> LaneRotateUpImpl<Soft<T>> for Soft<T> {
    fn lane_rotate_up_impl(group: &Group<Soft<T>>, reg: &mut [T], distance: usize) {
        check_reg(group, reg.len());
        reg.rotate_right(distance % reg.len());
    }
}

unsafe impl<T: LaneWord> LaneRotateUpZeroImpl<Soft<T>> for Soft<T> {
    fn lane_rotate_up_zero_impl(group: &Group<Soft<T>>, reg: &mut [T], distance: usize) {
        check_reg(group, reg.len());
        if distance >= reg.len() {
            reg.fill(T::ZERO);
        } else {
            reg.rotate_right(distance);
            reg[..distance].fill(T::ZERO);
        }
    }
}

unsafe impl<T: LaneWord> LaneVoteImpl<Soft<T>> for Soft<T> {
    fn lane_vote_impl<F>(group: &Group<Soft<T>>, reg: &[T], pred: F) -> LaneMask
    where
        F: Fn(usize, T) -> bool,
    {
        check_reg(group, reg.len());
        reg.iter()
            .enumerate()
            .fold(0, |mask, (lane, &w)| mask | ((pred(lane, w) as LaneMask) << lane))
    }
}
