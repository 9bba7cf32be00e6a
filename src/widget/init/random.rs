/// xorshift32 - small, fast, deterministic under a fixed seed.
/// Quality is plenty for picking hover colors.
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}
