use jobchart_core::{pick_one, pick_two_distinct, pick_two_distinct_indices};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

const TRIALS: usize = 2_000;

#[test]
fn pick_two_distinct_never_reuses_a_position() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..TRIALS {
        let (first, second) = pick_two_distinct_indices(3, &mut rng).unwrap();
        assert_ne!(first, second);
        assert!(first < 3 && second < 3);
    }
}

#[test]
fn pick_two_distinct_reaches_every_name() {
    let mut rng = StdRng::seed_from_u64(12);
    let pool = ["A", "B", "C"];
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let (first, second) = pick_two_distinct(&pool, &mut rng);
        let first = first.copied().unwrap();
        let second = second.copied().unwrap();
        assert_ne!(first, second);
        *seen.entry(first).or_default() += 1;
        *seen.entry(second).or_default() += 1;
    }

    for name in pool {
        assert!(seen.get(name).copied().unwrap_or(0) > 0, "{name} never picked");
    }
}

#[test]
fn duplicate_names_can_fill_both_positions() {
    let mut rng = StdRng::seed_from_u64(13);
    let pool = ["Ann", "Ann"];
    let (first, second) = pick_two_distinct(&pool, &mut rng);
    assert_eq!((first, second), (Some(&"Ann"), Some(&"Ann")));
}

#[test]
fn pick_one_reaches_every_name() {
    let mut rng = StdRng::seed_from_u64(14);
    let pool = ["A", "B", "C", "D"];
    let mut counts = [0usize; 4];

    for _ in 0..TRIALS {
        let picked = pick_one(&pool, &mut rng).unwrap();
        let index = pool.iter().position(|name| name == picked).unwrap();
        counts[index] += 1;
    }

    assert!(counts.iter().all(|count| *count > 0), "{counts:?}");
}
