use rand_xoshiro::rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;
use testcrate::*;
use wideint::BigInt;

const N: usize = 10000;

type U128x32 = BigInt<128, false, u32, 4>;
type I128x32 = BigInt<128, true, u32, 4>;

fn next_u128(rng: &mut Xoshiro128StarStar) -> u128 {
    // bias towards some structure so that carries and saturations get hit
    let x = ((rng.next_u64() as u128) << 64) | (rng.next_u64() as u128);
    match rng.next_u32() % 4 {
        0 => x,
        1 => x & (u128::MAX >> (rng.next_u32() % 128)),
        2 => x | (u128::MAX << (rng.next_u32() % 128)),
        _ => 1u128 << (rng.next_u32() % 128),
    }
}

#[test]
fn unsigned_ops_match_u128() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    for _ in 0..N {
        let x = next_u128(&mut rng);
        let y = next_u128(&mut rng);
        let bx = U128x32::from_u128(x);
        let by = U128x32::from_u128(y);

        assert_eq!(bx + by, U128x32::from_u128(x.wrapping_add(y)));
        assert_eq!(bx - by, U128x32::from_u128(x.wrapping_sub(y)));
        assert_eq!(bx * by, U128x32::from_u128(x.wrapping_mul(y)));
        assert_eq!(-bx, U128x32::from_u128(x.wrapping_neg()));
        assert_eq!(bx.overflowing_add(by).1, x.overflowing_add(y).1);
        assert_eq!(bx.overflowing_sub(by).1, x.overflowing_sub(y).1);

        if y != 0 {
            assert_eq!(bx / by, U128x32::from_u128(x / y));
            assert_eq!(bx % by, U128x32::from_u128(x % y));
        } else {
            assert_eq!(bx.div_rem(by), None);
        }

        assert_eq!(bx & by, U128x32::from_u128(x & y));
        assert_eq!(bx | by, U128x32::from_u128(x | y));
        assert_eq!(bx ^ by, U128x32::from_u128(x ^ y));
        assert_eq!(!bx, U128x32::from_u128(!x));

        let s = (rng.next_u32() % 128) as usize;
        assert_eq!(bx << s, U128x32::from_u128(x << s));
        assert_eq!(bx >> s, U128x32::from_u128(x >> s));

        assert_eq!(bx < by, x < y);
        assert_eq!(bx == by, x == y);
        assert_eq!(bx.cmp(&by), x.cmp(&y));

        assert_eq!(bx.leading_zeros(), x.leading_zeros() as usize);
        assert_eq!(bx.trailing_zeros(), x.trailing_zeros() as usize);
        assert_eq!(bx.leading_ones(), x.leading_ones() as usize);
        assert_eq!(bx.trailing_ones(), x.trailing_ones() as usize);
        assert_eq!(bx.count_ones(), x.count_ones() as usize);

        assert_eq!(bx.to_u128(), x);
    }
}

#[test]
fn signed_ops_match_i128() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(1);
    for _ in 0..N {
        let x = next_u128(&mut rng) as i128;
        let y = next_u128(&mut rng) as i128;
        let bx = I128x32::from_i128(x);
        let by = I128x32::from_i128(y);

        assert_eq!(bx + by, I128x32::from_i128(x.wrapping_add(y)));
        assert_eq!(bx - by, I128x32::from_i128(x.wrapping_sub(y)));
        assert_eq!(bx * by, I128x32::from_i128(x.wrapping_mul(y)));
        assert_eq!(-bx, I128x32::from_i128(x.wrapping_neg()));
        assert_eq!(bx.wrapping_abs(), I128x32::from_i128(x.wrapping_abs()));
        assert_eq!(bx.overflowing_add(by).1, x.overflowing_add(y).1);
        assert_eq!(bx.overflowing_sub(by).1, x.overflowing_sub(y).1);

        if y != 0 {
            // MIN / -1 wraps, matching the native wrapping forms
            assert_eq!(bx / by, I128x32::from_i128(x.wrapping_div(y)));
            assert_eq!(bx % by, I128x32::from_i128(x.wrapping_rem(y)));
        } else {
            assert_eq!(bx.checked_div(by), None);
            assert_eq!(bx.checked_rem(by), None);
        }

        let s = (rng.next_u32() % 128) as usize;
        assert_eq!(bx >> s, I128x32::from_i128(x >> s));
        assert_eq!(bx << s, I128x32::from_i128(x << s));

        assert_eq!(bx < by, x < y);
        assert_eq!(bx.cmp(&by), x.cmp(&y));
        assert_eq!(bx.is_neg(), x < 0);

        assert_eq!(bx.to_i128(), x);
    }
}

/// The words beyond bit 100 must read as zero after any sequence of
/// operations, otherwise comparisons and the hi words of products go wrong in
/// ways the 128 bit reference tests cannot see.
#[test]
fn unused_bits_stay_cleared() {
    fn check(x: U100) -> U100 {
        assert_eq!(x.as_words()[1] >> 36, 0);
        x
    }
    let mut rng = Xoshiro128StarStar::seed_from_u64(2);
    for _ in 0..N {
        let x = check(U100::from_u128(next_u128(&mut rng)));
        let y = check(U100::from_u128(next_u128(&mut rng)));
        check(x + y);
        check(x - y);
        check(x * y);
        check(-x);
        check(!x);
        check(x ^ y);
        let s = (rng.next_u32() % 100) as usize;
        check(x << s);
        check(x >> s);
        if y != U100::zero() {
            let (quo, rem) = x.div_rem(y).unwrap();
            check(quo);
            check(rem);
        }
        let modulus = x.to_u128() % (1u128 << 100);
        let sum = (modulus + (y.to_u128() % (1u128 << 100))) % (1u128 << 100);
        assert_eq!((x + y).to_u128(), sum);
    }
}

#[test]
fn division_identity() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(3);
    for _ in 0..N {
        let duo = U256::from_words([
            rng.next_u64(),
            rng.next_u64(),
            rng.next_u64(),
            rng.next_u64(),
        ]);
        // vary the divisor width to hit the short, u128, and full paths
        let mut div = U256::from_words([
            rng.next_u64(),
            rng.next_u64(),
            rng.next_u64(),
            rng.next_u64(),
        ]) >> ((rng.next_u32() % 256) as usize);
        if div == U256::zero() {
            div = U256::one();
        }
        let (quo, rem) = duo.div_rem(div).unwrap();
        assert!(rem < div);
        assert_eq!(quo * div + rem, duo);
    }
}

#[test]
fn ful_mul_matches_native() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(4);
    for _ in 0..N {
        let x = rng.next_u64();
        let y = rng.next_u64();
        let bx = U64::from_u64(x);
        let r: U128 = bx.ful_mul(U64::from_u64(y));
        assert_eq!(r.to_u128(), (x as u128) * (y as u128));
    }
}
