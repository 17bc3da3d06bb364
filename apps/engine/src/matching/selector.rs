/// Returns the first `min(n, len)` entries of an already-sorted list, order preserved.
///
/// `n <= 0` yields an empty list; an `n` past the end returns everything without padding.
/// Shared by career ranking and knowledge-area ranking.
pub fn select_top<T: Clone>(ranked: &[T], n: i64) -> Vec<T> {
    if n <= 0 {
        return Vec::new();
    }
    let take = usize::try_from(n).unwrap_or(usize::MAX).min(ranked.len());
    ranked[..take].to_vec()
}
