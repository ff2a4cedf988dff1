use rand::Rng;

/// Uniformly picks one candidate from the quiz pool. An empty pool means
/// the quiz is over.
pub fn pick_random<T, R>(mut pool: Vec<T>, rng: &mut R) -> Option<T>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..=pool.len() - 1);
    Some(pool.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::pick_random;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_pool_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(pick_random(Vec::<u32>::new(), &mut rng), None);
    }

    #[test]
    fn single_candidate_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(pick_random(vec![11], &mut rng), Some(11));
    }

    #[test]
    fn every_candidate_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];

        for _ in 0..200 {
            let picked = pick_random(vec![0usize, 1, 2, 3], &mut rng).expect("pool is not empty");
            seen[picked] = true;
        }

        assert!(seen.iter().all(|hit| *hit));
    }
}
