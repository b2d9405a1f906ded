use std::cmp::Ordering;

use lanes::api::LaneVote;
use lanes::layouts::{Backend, Group, LaneMask, LaneWord, Scratch, take_slice_bytes};

use crate::arith::{check_shape, sub_borrow};

/// Ballot of nonzero digits: bit `i` is set iff lane `i`'s word is nonzero.
/// The whole value is zero iff the mask is zero.
pub fn nonzero_mask<B>(grp: &Group<B>, r: &[B::Word]) -> LaneMask
where
    B: Backend,
    Group<B>: LaneVote<B>,
{
    check_shape(grp, &[r.len()]);
    grp.lane_vote(r, |_, w| w != B::Word::ZERO)
}

/// Three-way comparison in a single subtract-and-inspect pass: the borrow
/// flag of `x - y` decides less-than, the nonzero ballot of the difference
/// decides equality, so no second subtraction is needed.
pub fn compare<B>(grp: &Group<B>, x: &[B::Word], y: &[B::Word], scratch: &mut Scratch) -> Ordering
where
    B: Backend,
    Group<B>: LaneVote<B>,
{
    check_shape(grp, &[x.len(), y.len()]);
    let (d, _) = scratch.take_slice::<B::Word>(grp.width());
    let borrow: bool = sub_borrow(grp, d, x, y);
    if nonzero_mask(grp, d) == 0 {
        Ordering::Equal
    } else if borrow {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

pub fn compare_scratch_space<B: Backend>(grp: &Group<B>) -> usize {
    take_slice_bytes::<B::Word>(grp.width())
}
