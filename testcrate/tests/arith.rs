use testcrate::*;
use wideint::BigInt;

/// The same grid of edge values the word level operations have to get right
/// for every storage configuration: single whole word, single partial word,
/// and multiple words, in both signednesses.
macro_rules! edge_value_grid {
    ($($ty:ty),*,) => {
        $({
            type T = $ty;
            let zero = T::zero();
            let one = T::one();
            let two = one + one;

            assert_eq!(zero + zero, zero);
            assert_eq!(one + zero, one);
            assert_eq!(zero + one, one);
            assert_eq!(one + one, two);
            // 2's complement wraparound works for signed and unsigned types
            assert_eq!(T::max() + one, T::min());
            assert_eq!(T::min() - one, T::max());

            assert_eq!(zero - zero, zero);
            assert_eq!(one - one, zero);
            assert_eq!(one - zero, one);

            assert_eq!(zero * zero, zero);
            assert_eq!(zero * one, zero);
            assert_eq!(one * one, one);
            assert_eq!(one * two, two);
            assert_eq!(two * one, two);
            assert_eq!(T::max() * T::max(), one);

            assert_eq!(-one + one, zero);
            assert_eq!(-(-two), two);

            assert!(!zero.is_neg());
            assert!(!one.is_neg());
            assert!(!T::max().is_neg());
            assert_eq!(T::min().is_neg(), T::signed());
        })*
    };
}

#[test]
fn edge_values() {
    edge_value_grid!(
        BigInt<64, false, u64, 1>,
        BigInt<64, true, u64, 1>,
        BigInt<16, false, u16, 1>,
        BigInt<16, true, u16, 1>,
        BigInt<64, false, u16, 4>,
        BigInt<64, true, u16, 4>,
        BigInt<100, false, u64, 2>,
        BigInt<100, true, u64, 2>,
    );
}

#[test]
fn addition() {
    let val1 = U128::from_u64(12345);
    let val2 = U128::from_u64(54321);
    assert_eq!(val1 + val2, U128::from_u64(66666));
    assert_eq!(val1 + val2, val2 + val1);

    // carry across the word boundary
    let val3 = U128::from_words([0xf000000000000001, 0]);
    let val4 = U128::from_words([0x100000000000000f, 0]);
    let result2 = U128::from_words([0x10, 0x1]);
    assert_eq!(val3 + val4, result2);
    assert_eq!(val3 + val4, val4 + val3);

    let val5 = U128::from_words([0x0123456789abcdef, 0xfedcba9876543210]);
    let val6 = U128::from_words([0x1111222233334444, 0xaaaabbbbccccdddd]);
    let result3 = U128::from_words([0x12346789bcdf1233, 0xa987765443210fed]);
    assert_eq!(val5 + val6, result3);

    let val7 = U192::from_words([0x0123456789abcdef, 0xfedcba9876543210, 0xfedcba9889abcdef]);
    let val8 = U192::from_words([0x1111222233334444, 0xaaaabbbbccccdddd, 0xeeeeffffeeeeffff]);
    let result4 = U192::from_words([0x12346789bcdf1233, 0xa987765443210fed, 0xedcbba98789acdef]);
    assert_eq!(val7 + val8, result4);

    let val9 = U256::from_words([
        0x1f1e1d1c1b1a1918,
        0xf1f2f3f4f5f6f7f8,
        0x0123456789abcdef,
        0xfedcba9876543210,
    ]);
    let val10 = U256::from_words([
        0x1111222233334444,
        0xaaaabbbbccccdddd,
        0x1111222233334444,
        0xaaaabbbbccccdddd,
    ]);
    let result5 = U256::from_words([
        0x302f3f3e4e4d5d5c,
        0x9c9dafb0c2c3d5d5,
        0x12346789bcdf1234,
        0xa987765443210fed,
    ]);
    assert_eq!(val9 + val10, result5);
}

#[test]
fn subtraction() {
    let val1 = U128::from_u64(12345);
    let val2 = U128::from_u64(54321);
    let result1 = U128::from_words([0xffffffffffff5c08, 0xffffffffffffffff]);
    let result2 = U128::from_u64(0xa3f8);
    assert_eq!(val1 - val2, result1);
    assert_eq!(val1, val2 + result1);
    assert_eq!(val2 - val1, result2);
    assert_eq!(val2, val1 + result2);

    let val3 = U128::from_words([0xf000000000000001, 0]);
    let val4 = U128::from_words([0x100000000000000f, 0]);
    let result3 = U128::from_u64(0xdffffffffffffff2);
    let result4 = U128::from_words([0x200000000000000e, 0xffffffffffffffff]);
    assert_eq!(val3 - val4, result3);
    assert_eq!(val4 - val3, result4);

    let val5 = U128::from_words([0x0123456789abcdef, 0xfedcba9876543210]);
    let val6 = U128::from_words([0x1111222233334444, 0xaaaabbbbccccdddd]);
    let result5 = U128::from_words([0xf0122345567889ab, 0x5431fedca9875432]);
    let result6 = U128::from_words([0x0feddcbaa9877655, 0xabce01235678abcd]);
    assert_eq!(val5 - val6, result5);
    assert_eq!(val6 - val5, result6);
}

#[test]
fn multiplication() {
    assert_eq!(U128::from_u64(5) * U128::from_u64(10), U128::from_u64(50));

    // the multiplication works across the whole number
    let val3 = U128::from_u64(0xf);
    let val4 = U128::from_words([0x1111111111111111, 0x1111111111111111]);
    assert_eq!(val3 * val4, U128::max());
    assert_eq!(val3 * val4, val4 * val3);

    // multiplication does not reorder the bits
    let val5 = U128::from_u64(2);
    let val6 = U128::from_words([0x1357024675316420, 0x0123456776543210]);
    let result3 = U128::from_words([0x26ae048cea62c840, 0x02468aceeca86420]);
    assert_eq!(val5 * val6, result3);

    let val7 = U128::from_u64(2);
    let val8 = U128::from_words([0x8000800080008000, 0x8000800080008000]);
    let result4 = U128::from_words([0x0001000100010000, 0x0001000100010001]);
    assert_eq!(val7 * val8, result4);

    let val9 = U128::from_words([0x01d762422c946590, 0x9f4f2726179a2245]);
    let val10 = U128::from_words([0x3792f412cb06794d, 0xcdb02555653131b6]);
    let result5 = U128::from_words([0x917cf11d1e039c50, 0x3a4f32d17f40d08f]);
    assert_eq!(val9 * val10, result5);
    assert_eq!(val9 * val10, val10 * val9);
}

#[test]
fn signed_add_sub() {
    type T = BigInt<128, true, u32, 4>;
    let a = T::from_i64(1927508279017230597);
    let b = T::from_i64(278789278723478925);
    let s = T::from_i64(2206297557740709522);
    assert_eq!(a + b, s);
    assert_eq!(b + a, s);
    assert_eq!(a - s, -b);
    assert_eq!(s - a, b);
}

#[test]
fn signed_mul() {
    type T = BigInt<128, true, u16, 8>;
    let cases: &[(i128, i128, u128)] = &[
        (-4, 3, 12),
        (-3, -3, 9),
        (
            1927508279017230597,
            278789278723478925,
            537368642840747885329125014794668225,
        ),
    ];
    for &(a, b, mag) in cases {
        let a = T::from_i128(a);
        let b = T::from_i128(b);
        let mul = if a.is_neg() != b.is_neg() {
            -T::from_u128(mag)
        } else {
            T::from_u128(mag)
        };
        assert_eq!(a * b, mul);
        assert_eq!(b * a, mul);
        assert_eq!(a * -b, -mul);
        assert_eq!(-a * b, -mul);
        assert_eq!(-a * -b, mul);
    }
}

#[test]
fn overflow_flags() {
    assert_eq!(U64::max().overflowing_add(U64::one()), (U64::min(), true));
    assert_eq!(U64::zero().overflowing_sub(U64::one()), (U64::max(), true));
    assert_eq!(U64::max().checked_add(U64::one()), None);
    assert_eq!(
        U64::max().checked_sub(U64::one()),
        Some(U64::max() - U64::one())
    );

    type I64 = wideint::Int<64, 1>;
    assert_eq!(I64::max().overflowing_add(I64::one()), (I64::min(), true));
    assert_eq!(I64::min().overflowing_sub(I64::one()), (I64::max(), true));
    assert_eq!(I64::max().checked_add(I64::one()), None);
    assert_eq!(I64::min().checked_sub(I64::one()), None);
    assert_eq!(
        I64::from_i64(-1).overflowing_add(I64::one()),
        (I64::zero(), false)
    );

    // the unused bits do not hide the carry out
    assert_eq!(U100::max().overflowing_add(U100::one()), (U100::zero(), true));
    assert_eq!(U100::max().checked_add(U100::one()), None);
}

#[test]
fn abs_and_neg() {
    type T = I128;
    assert_eq!(T::from_i64(-5).wrapping_abs(), T::from_i64(5));
    assert_eq!(T::from_i64(5).wrapping_abs(), T::from_i64(5));
    assert_eq!(T::zero().wrapping_neg(), T::zero());
    // the signed minimum magnitude is only representable unsigned
    assert_eq!(T::min().wrapping_abs(), T::min());
    assert_eq!(T::min().wrapping_neg(), T::min());
}
