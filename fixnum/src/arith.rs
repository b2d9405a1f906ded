use itertools::izip;
use lanes::api::LaneVote;
use lanes::layouts::{Backend, Group, LaneWord, Scratch, take_slice_bytes};

use crate::carry::{borrow_lookahead, carry_lookahead};

pub(crate) fn check_shape<B: Backend>(grp: &Group<B>, lens: &[usize]) {
    #[cfg(debug_assertions)]
    {
        lens.iter().for_each(|&len| {
            assert_eq!(len, grp.width(), "operand length does not match the group width");
        });
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (grp, lens);
    }
}

/// Group-wide carry resolution once per-lane sums sit in `r`.
///
/// A lane generates when its local sum wrapped (`r < b` detects this without
/// the original left operand) and propagates when its sum is the word
/// maximum. The lookahead turns both vote masks into per-lane incoming
/// carries and the group's carry-out in one step.
fn resolve_add<B>(grp: &Group<B>, r: &mut [B::Word], b: &[B::Word]) -> bool
where
    B: Backend,
    Group<B>: LaneVote<B>,
{
    let g = grp.lane_vote(r, |lane, w| w < b[lane]);
    let p = grp.lane_vote(r, |_, w| w == B::Word::MAX);
    let (incoming, carry_out) = carry_lookahead(g, p, grp.width());
    r.iter_mut().enumerate().for_each(|(lane, w)| {
        if incoming >> lane & 1 == 1 {
            *w = w.wrapping_add(B::Word::ONE);
        }
    });
    carry_out
}

/// Borrow dual of [`resolve_add`]: a lane generates when its local
/// difference wrapped (`d + b` overflows exactly when the subtraction
/// borrowed) and propagates when its difference is zero.
fn resolve_sub<B>(grp: &Group<B>, r: &mut [B::Word], b: &[B::Word]) -> bool
where
    B: Backend,
    Group<B>: LaneVote<B>,
{
    let g = grp.lane_vote(r, |lane, w| w.wrapping_add(b[lane]) < b[lane]);
    let p = grp.lane_vote(r, |_, w| w == B::Word::ZERO);
    let (incoming, borrow_out) = borrow_lookahead(g, p, grp.width());
    r.iter_mut().enumerate().for_each(|(lane, w)| {
        if incoming >> lane & 1 == 1 {
            *w = w.wrapping_sub(B::Word::ONE);
        }
    });
    borrow_out
}

/// `r = a + b` over the whole group; returns the carry out of the
/// most-significant lane (the same flag at every lane).
pub fn add_carry<B>(grp: &Group<B>, r: &mut [B::Word], a: &[B::Word], b: &[B::Word]) -> bool
where
    B: Backend,
    Group<B>: LaneVote<B>,
{
    check_shape(grp, &[r.len(), a.len(), b.len()]);
    izip!(r.iter_mut(), a.iter(), b.iter()).for_each(|(ri, &ai, &bi)| {
        *ri = ai.wrapping_add(bi);
    });
    resolve_add(grp, r, b)
}

/// `r += b`; returns the group carry-out.
pub fn add_carry_inplace<B>(grp: &Group<B>, r: &mut [B::Word], b: &[B::Word]) -> bool
where
    B: Backend,
    Group<B>: LaneVote<B>,
{
    check_shape(grp, &[r.len(), b.len()]);
    izip!(r.iter_mut(), b.iter()).for_each(|(ri, &bi)| {
        *ri = ri.wrapping_add(bi);
    });
    resolve_add(grp, r, b)
}

/// `r = a - b` over the whole group; returns the borrow out of the
/// most-significant lane.
pub fn sub_borrow<B>(grp: &Group<B>, r: &mut [B::Word], a: &[B::Word], b: &[B::Word]) -> bool
where
    B: Backend,
    Group<B>: LaneVote<B>,
{
    check_shape(grp, &[r.len(), a.len(), b.len()]);
    izip!(r.iter_mut(), a.iter(), b.iter()).for_each(|(ri, &ai, &bi)| {
        *ri = ai.wrapping_sub(bi);
    });
    resolve_sub(grp, r, b)
}

/// `r -= b`; returns the group borrow-out.
pub fn sub_borrow_inplace<B>(grp: &Group<B>, r: &mut [B::Word], b: &[B::Word]) -> bool
where
    B: Backend,
    Group<B>: LaneVote<B>,
{
    check_shape(grp, &[r.len(), b.len()]);
    izip!(r.iter_mut(), b.iter()).for_each(|(ri, &bi)| {
        *ri = ri.wrapping_sub(bi);
    });
    resolve_sub(grp, r, b)
}

/// `r += 1`: builds a one-hot register (1 in lane 0) in scratch and
/// delegates to the addition protocol. Returns the group carry-out.
pub fn incr_carry<B>(grp: &Group<B>, r: &mut [B::Word], scratch: &mut Scratch) -> bool
where
    B: Backend,
    Group<B>: LaneVote<B>,
{
    let (one, _) = scratch.take_slice::<B::Word>(grp.width());
    one[0] = B::Word::ONE;
    add_carry_inplace(grp, r, one)
}

pub fn incr_carry_scratch_space<B: Backend>(grp: &Group<B>) -> usize {
    take_slice_bytes::<B::Word>(grp.width())
}

/// `r -= 1`: one-hot register through the subtraction protocol. Returns the
/// group borrow-out.
pub fn decr_borrow<B>(grp: &Group<B>, r: &mut [B::Word], scratch: &mut Scratch) -> bool
where
    B: Backend,
    Group<B>: LaneVote<B>,
{
    let (one, _) = scratch.take_slice::<B::Word>(grp.width());
    one[0] = B::Word::ONE;
    sub_borrow_inplace(grp, r, one)
}

pub fn decr_borrow_scratch_space<B: Backend>(grp: &Group<B>) -> usize {
    take_slice_bytes::<B::Word>(grp.width())
}
