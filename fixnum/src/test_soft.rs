use lanes::Soft;
use lanes::api::GroupNew;
use lanes::layouts::{FixnumVec, FixnumVecOwned, Group, ScratchOwned};

use crate::bytes::{from_bytes, to_bytes};
use crate::mul::{mul_wide, mul_wide_scratch_space};
use crate::tests::{arith::*, mul::*, predicate::*, to_integer};

const WIDTHS: [usize; 7] = [1, 2, 3, 4, 8, 32, 64];

#[test]
fn add_matches_reference_soft() {
    for w in WIDTHS {
        test_add_matches_reference(&Group::<Soft<u8>>::new(w));
        test_add_matches_reference(&Group::<Soft<u16>>::new(w));
        test_add_matches_reference(&Group::<Soft<u32>>::new(w));
        test_add_matches_reference(&Group::<Soft<u64>>::new(w));
    }
}

#[test]
fn sub_matches_reference_soft() {
    for w in WIDTHS {
        test_sub_matches_reference(&Group::<Soft<u8>>::new(w));
        test_sub_matches_reference(&Group::<Soft<u64>>::new(w));
    }
}

#[test]
fn add_sub_roundtrip_soft() {
    for w in WIDTHS {
        test_add_sub_roundtrip(&Group::<Soft<u8>>::new(w));
        test_add_sub_roundtrip(&Group::<Soft<u32>>::new(w));
        test_add_sub_roundtrip(&Group::<Soft<u64>>::new(w));
    }
}

#[test]
fn add_commutes_soft() {
    for w in WIDTHS {
        test_add_commutes(&Group::<Soft<u32>>::new(w));
    }
}

#[test]
fn carry_boundaries_soft() {
    for w in WIDTHS {
        test_carry_boundaries(&Group::<Soft<u8>>::new(w));
        test_carry_boundaries(&Group::<Soft<u32>>::new(w));
        test_carry_boundaries(&Group::<Soft<u64>>::new(w));
    }
}

#[test]
fn incr_decr_roundtrip_soft() {
    for w in WIDTHS {
        test_incr_decr_roundtrip(&Group::<Soft<u8>>::new(w));
        test_incr_decr_roundtrip(&Group::<Soft<u64>>::new(w));
    }
}

#[test]
fn mul_identity_and_annihilator_soft() {
    for w in WIDTHS {
        test_mul_identity_and_annihilator(&Group::<Soft<u8>>::new(w));
        test_mul_identity_and_annihilator(&Group::<Soft<u32>>::new(w));
        test_mul_identity_and_annihilator(&Group::<Soft<u64>>::new(w));
    }
}

#[test]
fn mul_wide_matches_reference_soft() {
    for w in WIDTHS {
        test_mul_wide_matches_reference(&Group::<Soft<u8>>::new(w));
        test_mul_wide_matches_reference(&Group::<Soft<u16>>::new(w));
        test_mul_wide_matches_reference(&Group::<Soft<u32>>::new(w));
        test_mul_wide_matches_reference(&Group::<Soft<u64>>::new(w));
    }
}

#[test]
fn mul_lo_matches_mul_wide_soft() {
    for w in WIDTHS {
        test_mul_lo_matches_mul_wide(&Group::<Soft<u8>>::new(w));
        test_mul_lo_matches_mul_wide(&Group::<Soft<u64>>::new(w));
    }
}

#[test]
fn nonzero_mask_soft() {
    for w in WIDTHS {
        test_nonzero_mask(&Group::<Soft<u8>>::new(w));
        test_nonzero_mask(&Group::<Soft<u64>>::new(w));
    }
}

#[test]
fn compare_soft() {
    for w in WIDTHS {
        test_compare_reflexive_and_antisymmetric(&Group::<Soft<u32>>::new(w));
        test_compare_transitive(&Group::<Soft<u32>>::new(w));
    }
}

/// 250 * 250 = 62500 = 0xF424: with 8-bit words the double-width product of
/// two single-word values splits into hi 244, lo 36.
#[test]
fn mul_wide_hand_checked_u8() {
    let grp: Group<Soft<u8>> = Group::new(1);
    let mut scratch = ScratchOwned::alloc(mul_wide_scratch_space(&grp));
    let (mut hi, mut lo) = ([0u8; 1], [0u8; 1]);
    mul_wide(&grp, &mut hi, &mut lo, &[250], &[250], scratch.borrow());
    assert_eq!((hi[0], lo[0]), (244, 36));

    // Same numbers as one two-word value: the product fits the low half.
    let grp: Group<Soft<u8>> = Group::new(2);
    let mut scratch = ScratchOwned::alloc(mul_wide_scratch_space(&grp));
    let mut a = [0u8; 2];
    from_bytes(&mut a, &250u16.to_le_bytes());
    let (mut hi, mut lo) = ([0u8; 2], [0u8; 2]);
    mul_wide(&grp, &mut hi, &mut lo, &a, &a, scratch.borrow());
    assert_eq!(lo, [36, 244]);
    assert_eq!(hi, [0, 0]);
}

#[test]
fn bytes_roundtrip_all_lengths() {
    let grp: Group<Soft<u32>> = Group::new(4);
    let input: Vec<u8> = (0..24).map(|i| 0xa0 ^ i as u8).collect();
    for nbytes in [0, 1, 7, 16, 24] {
        let mut words = [u32::MAX; 4];
        let copied = from_bytes(&mut words, &input[..nbytes]);
        assert_eq!(copied, nbytes.min(grp.fixnum_bytes()));
        let mut out = vec![0xffu8; nbytes];
        let written = to_bytes(&mut out, &words);
        assert_eq!(written, nbytes.min(grp.fixnum_bytes()));
        assert_eq!(&out[..written], &input[..written]);
        assert!(out[written..].iter().all(|&x| x == 0xff));
    }
}

/// Caller-side array-of-fixnums layout: each value is `width` consecutive
/// words addressed through `at`/`at_mut`.
#[test]
fn fixnum_vec_layout_roundtrip() {
    let grp: Group<Soft<u64>> = Group::new(4);
    let mut vec: FixnumVecOwned<u64> = FixnumVec::alloc(grp.width(), 3);
    let payload: Vec<u8> = (1..=32u8).collect();
    from_bytes(vec.at_mut(2), &payload);
    assert_eq!(to_integer(vec.at(0)), 0);
    assert_eq!(to_integer(vec.at(1)), 0);

    let mut out = [0u8; 32];
    to_bytes(&mut out, vec.at(2));
    assert_eq!(out.as_slice(), payload.as_slice());
}
