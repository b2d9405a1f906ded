use itertools::izip;
use lanes::api::{LaneBroadcast, LaneRotateUp, LaneRotateUpZero, LaneVote};
use lanes::layouts::{Backend, Group, LaneWord, Scratch, take_slice_bytes};

use crate::arith::{add_carry_inplace, check_shape};

/// `r = (a * b) mod 2^(width * word bits)`: the truncated low half of the
/// product.
///
/// Schoolbook over the digits of `a`, most-significant lane first. Each step
/// is the Horner update `acc = acc * base + a_i * b`, split into a high-half
/// multiply-add pass (whose terms belong one digit up, so they are added
/// before the shift), the one-lane shift itself, and a low-half pass. Word
/// carries accumulate per lane in a register that shifts in lock-step with
/// the accumulator, staying aligned to the digit that produced them; one
/// final shift moves every pending carry a digit up, where a single run of
/// the addition protocol folds them in.
pub fn mul_lo<B>(grp: &Group<B>, r: &mut [B::Word], a: &[B::Word], b: &[B::Word], scratch: &mut Scratch)
where
    B: Backend,
    Group<B>: LaneBroadcast<B> + LaneRotateUpZero<B> + LaneVote<B>,
{
    check_shape(grp, &[r.len(), a.len(), b.len()]);
    let (cy, _) = scratch.take_slice::<B::Word>(grp.width());
    r.fill(B::Word::ZERO);

    for i in (0..grp.width()).rev() {
        let ai: B::Word = grp.lane_broadcast(a, i);
        izip!(r.iter_mut(), cy.iter_mut(), b.iter()).for_each(|(ri, ci, &bi)| {
            *ri = B::Word::mul_hi_add_cc(ci, ai, bi, *ri);
        });
        grp.lane_rotate_up_zero(r, 1);
        grp.lane_rotate_up_zero(cy, 1);
        izip!(r.iter_mut(), cy.iter_mut(), b.iter()).for_each(|(ri, ci, &bi)| {
            *ri = B::Word::mul_lo_add_cc(ci, ai, bi, *ri);
        });
    }

    grp.lane_rotate_up_zero(cy, 1);
    add_carry_inplace(grp, r, cy);
}

pub fn mul_lo_scratch_space<B: Backend>(grp: &Group<B>) -> usize {
    take_slice_bytes::<B::Word>(grp.width())
}

/// Full double-width product `hi:lo = a * b`.
///
/// Same Horner loop as [`mul_lo`], except nothing is discarded: at each
/// one-lane shift the high accumulator wraps upward and its boundary lane
/// (lane 0) receives the low accumulator's outgoing top digit, while a
/// second carry register tracks the pending carries that cross the same
/// boundary. The final fix-up folds the low half's pending carries through
/// the addition protocol, hands the resulting carry-out to the high half and
/// folds there too.
///
/// # Panics
///
/// Panics if the high half still produces a carry after the fix-up: a
/// double-width product cannot overflow a double-width accumulator, so a
/// residual carry is a kernel defect, never an input condition.
pub fn mul_wide<B>(
    grp: &Group<B>,
    hi: &mut [B::Word],
    lo: &mut [B::Word],
    a: &[B::Word],
    b: &[B::Word],
    scratch: &mut Scratch,
) where
    B: Backend,
    Group<B>: LaneBroadcast<B> + LaneRotateUp<B> + LaneRotateUpZero<B> + LaneVote<B>,
{
    check_shape(grp, &[hi.len(), lo.len(), a.len(), b.len()]);
    let top: usize = grp.top_lane();
    let (cy, scratch) = scratch.take_slice::<B::Word>(grp.width());
    let (cys, _) = scratch.take_slice::<B::Word>(grp.width());
    lo.fill(B::Word::ZERO);
    hi.fill(B::Word::ZERO);

    for i in (0..grp.width()).rev() {
        let ai: B::Word = grp.lane_broadcast(a, i);
        izip!(lo.iter_mut(), cy.iter_mut(), b.iter()).for_each(|(li, ci, &bi)| {
            *li = B::Word::mul_hi_add_cc(ci, ai, bi, *li);
        });

        // Shift the 2W-digit accumulator one lane up. The top digits of the
        // high half must be empty or the product would already have
        // overflowed 2W digits.
        let lo_top: B::Word = grp.lane_broadcast(lo, top);
        let cy_top: B::Word = grp.lane_broadcast(cy, top);
        debug_assert!(grp.lane_broadcast(hi, top) == B::Word::ZERO);
        debug_assert!(grp.lane_broadcast(cys, top) == B::Word::ZERO);
        grp.lane_rotate_up(hi, 1);
        grp.lane_rotate_up(cys, 1);
        hi[0] = lo_top;
        cys[0] = cy_top;
        grp.lane_rotate_up_zero(lo, 1);
        grp.lane_rotate_up_zero(cy, 1);

        izip!(lo.iter_mut(), cy.iter_mut(), b.iter()).for_each(|(li, ci, &bi)| {
            *li = B::Word::mul_lo_add_cc(ci, ai, bi, *li);
        });
    }

    // Pending carries apply one digit up, crossing the half boundary the
    // same way the accumulator digits did.
    let cy_top: B::Word = grp.lane_broadcast(cy, top);
    debug_assert!(grp.lane_broadcast(cys, top) == B::Word::ZERO);
    grp.lane_rotate_up(cys, 1);
    cys[0] = cy_top;
    grp.lane_rotate_up_zero(cy, 1);

    if add_carry_inplace(grp, lo, cy) {
        cys[0] = cys[0].wrapping_add(B::Word::ONE);
    }
    let residual: bool = add_carry_inplace(grp, hi, cys);
    assert!(!residual, "mul_wide: residual carry out of the high half");
}

pub fn mul_wide_scratch_space<B: Backend>(grp: &Group<B>) -> usize {
    2 * take_slice_bytes::<B::Word>(grp.width())
}
