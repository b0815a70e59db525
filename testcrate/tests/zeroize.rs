use testcrate::*;
use zeroize::Zeroize;

#[test]
fn zeroize_support() {
    let mut x = U512::max();
    x.zeroize();
    assert_eq!(x, U512::zero());

    let mut y = I128::from_i64(-12345);
    y.zeroize();
    assert_eq!(y, I128::zero());

    let mut z = U96x8::from_u64(0x0123456789abcdef);
    z.zeroize();
    assert_eq!(z, U96x8::zero());
}
