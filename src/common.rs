pub type Float = f64;

/// Splits `n` rows into `k` contiguous chunks and returns `(start, len)` of
/// chunk `i`. The first `n % k` chunks get one extra row, so chunk sizes
/// never differ by more than one and together the chunks cover `[0, n)`
/// exactly.
pub fn uneven_divide(i: usize, n: usize, k: usize) -> (usize, usize) {
    debug_assert!(i < k);

    let base = n / k;
    let extra = n % k;

    let start = i * base + i.min(extra);
    let len = base + usize::from(i < extra);
    (start, len)
}
