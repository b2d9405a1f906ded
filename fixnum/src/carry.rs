use lanes::layouts::{LANE_MASK_BITS, LaneMask};

/// Mask selecting the low `width` lanes of a vote bitmask.
///
/// The vote primitive is natively [`LANE_MASK_BITS`] wide; a narrower group
/// must mask explicitly or the final carry-out detection reads garbage lanes.
#[inline]
pub fn width_mask(width: usize) -> LaneMask {
    debug_assert!((1..=LANE_MASK_BITS).contains(&width));
    if width == LANE_MASK_BITS {
        LaneMask::MAX
    } else {
        (1 << width) - 1
    }
}

/// Resolves a group-wide carry chain in one step.
///
/// `g` ("generate") has a bit set for every lane whose local addition
/// overflowed; `p` ("propagate") for every lane whose local sum is the word
/// maximum, so an incoming carry would pass straight through. The two are
/// disjoint for sums of in-range words.
///
/// Adding `g` into `p | g` lets the machine's own binary carry propagation
/// walk the whole propagate chain at once: bit `i` of the result tells
/// whether lane `i` absorbs a carry. Returns the per-lane incoming-carry
/// bits and the group's carry-out, read from bit `width` of the widened sum.
pub fn carry_lookahead(g: LaneMask, p: LaneMask, width: usize) -> (LaneMask, bool) {
    let m: LaneMask = width_mask(width);
    let g: LaneMask = g & m;
    let p: LaneMask = p & m;
    debug_assert_eq!(g & p, 0, "a lane cannot both generate and propagate");

    let sum: u128 = ((p | g) as u128) + (g as u128);
    let carry_out: bool = (sum >> width) & 1 == 1;
    let all: LaneMask = (sum as LaneMask) & m;
    let incoming: LaneMask = ((all ^ p) | (g << 1)) & m;
    (incoming, carry_out)
}

/// Borrow dual of [`carry_lookahead`].
///
/// Here `g` marks lanes whose local subtraction underflowed and `p` marks
/// lanes whose local difference is zero (an incoming borrow passes through).
/// The chain is resolved with complemented masks and a subtraction; the
/// group's borrow-out is the underflow of that subtraction.
pub fn borrow_lookahead(g: LaneMask, p: LaneMask, width: usize) -> (LaneMask, bool) {
    let m: LaneMask = width_mask(width);
    let g: LaneMask = g & m;
    let p: LaneMask = p & m;
    debug_assert_eq!(g & p, 0, "a lane cannot both generate and propagate");

    let nq: LaneMask = !(p | g) & m;
    let borrow_out: bool = nq < g;
    let all: LaneMask = !(nq.wrapping_sub(g)) & m;
    let incoming: LaneMask = ((all ^ p) | (g << 1)) & m;
    (incoming, borrow_out)
}
