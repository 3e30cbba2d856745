//! Single and distinct-pair picks.
//!
//! # Invariants
//! - Every index in `[0, len)` is equally likely.
//! - `pick_two_distinct` guarantees distinct positions, not distinct values:
//!   a name listed twice can be picked twice.
//! - A one-element pool yields that element for both picks.

use rand::Rng;

/// Picks one element uniformly at random; `None` for an empty slice.
pub fn pick_one<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}

/// Picks two elements at different positions.
pub fn pick_two_distinct<'a, T, R>(items: &'a [T], rng: &mut R) -> (Option<&'a T>, Option<&'a T>)
where
    R: Rng + ?Sized,
{
    match pick_two_distinct_indices(items.len(), rng) {
        Some((first, second)) => (items.get(first), items.get(second)),
        None => (None, None),
    }
}

/// Index pair behind [`pick_two_distinct`].
///
/// Returns `None` for `len == 0` and `(0, 0)` for `len == 1`. Otherwise the
/// second index is redrawn until it differs from the first.
pub fn pick_two_distinct_indices<R>(len: usize, rng: &mut R) -> Option<(usize, usize)>
where
    R: Rng + ?Sized,
{
    match len {
        0 => None,
        1 => Some((0, 0)),
        _ => {
            let first = rng.gen_range(0..len);
            let mut second = rng.gen_range(0..len);
            while second == first {
                second = rng.gen_range(0..len);
            }
            Some((first, second))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{pick_one, pick_two_distinct, pick_two_distinct_indices};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_pool_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [&str; 0] = [];
        assert_eq!(pick_one(&empty, &mut rng), None);
        assert_eq!(pick_two_distinct(&empty, &mut rng), (None, None));
        assert_eq!(pick_two_distinct_indices(0, &mut rng), None);
    }

    #[test]
    fn single_name_repeats_for_pair() {
        let mut rng = StdRng::seed_from_u64(2);
        let pool = ["A"];
        for _ in 0..20 {
            assert_eq!(pick_one(&pool, &mut rng), Some(&"A"));
            assert_eq!(pick_two_distinct(&pool, &mut rng), (Some(&"A"), Some(&"A")));
        }
    }

    #[test]
    fn two_name_pool_always_returns_both() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let (first, second) = pick_two_distinct_indices(2, &mut rng).unwrap();
            assert_eq!(first + second, 1);
        }
    }

    #[test]
    fn same_seed_gives_same_picks() {
        let pool = ["Ann", "Bo", "Cy", "Di"];
        let mut left = StdRng::seed_from_u64(99);
        let mut right = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(pick_one(&pool, &mut left), pick_one(&pool, &mut right));
            assert_eq!(
                pick_two_distinct(&pool, &mut left),
                pick_two_distinct(&pool, &mut right)
            );
        }
    }
}
