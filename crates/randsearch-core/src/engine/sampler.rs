use crate::core::models::candidate::Candidate;
use crate::core::sampling::SampleSpace;
use rand::Rng;

/// Draws candidates uniformly from a [`SampleSpace`].
///
/// Every component is sampled independently from the inclusive interval
/// `[lower, upper]`. The random source is injected so callers can substitute
/// a seeded generator for reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct UniformSampler {
    space: SampleSpace,
}

impl UniformSampler {
    pub fn new(space: SampleSpace) -> Self {
        Self { space }
    }

    pub fn space(&self) -> &SampleSpace {
        &self.space
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Candidate {
        let values = (0..self.space.length())
            .map(|_| rng.gen_range(self.space.lower()..=self.space.upper()))
            .collect();
        Candidate::new(values)
    }
}

#[cfg(test)]
mod sampler_tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sample_respects_length_and_bounds() {
        let space = SampleSpace::new(5, -10, 10).unwrap();
        let sampler = UniformSampler::new(space);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let candidate = sampler.sample(&mut rng);
            assert_eq!(candidate.len(), 5);
            for &v in candidate.values() {
                assert!(space.contains(v), "sampled value {} out of bounds", v);
            }
        }
    }

    #[test]
    fn zero_length_space_yields_empty_candidates() {
        let space = SampleSpace::new(0, -10, 10).unwrap();
        let sampler = UniformSampler::new(space);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sampler.sample(&mut rng).is_empty());
    }

    #[test]
    fn degenerate_interval_always_yields_the_single_value() {
        let space = SampleSpace::new(4, 3, 3).unwrap();
        let sampler = UniformSampler::new(space);
        let mut rng = StdRng::seed_from_u64(7);
        let candidate = sampler.sample(&mut rng);
        assert_eq!(candidate.values(), &[3, 3, 3, 3]);
    }

    #[test]
    fn identical_seeds_produce_identical_candidates() {
        let space = SampleSpace::default();
        let sampler = UniformSampler::new(space);
        let first = sampler.sample(&mut StdRng::seed_from_u64(99));
        let second = sampler.sample(&mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn wide_interval_eventually_covers_both_endpoints() {
        let space = SampleSpace::new(1, 0, 1).unwrap();
        let sampler = UniformSampler::new(space);
        let mut rng = StdRng::seed_from_u64(5);

        let mut seen_zero = false;
        let mut seen_one = false;
        for _ in 0..200 {
            match sampler.sample(&mut rng).values()[0] {
                0 => seen_zero = true,
                1 => seen_one = true,
                other => panic!("value {} outside [0, 1]", other),
            }
        }
        assert!(seen_zero && seen_one);
    }
}
