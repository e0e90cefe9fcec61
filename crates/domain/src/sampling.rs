use std::collections::{BTreeMap, HashSet};

use log::{debug, warn};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::{ExerciseTemplate, GenerationError, MuscleFocus};

/// Reports that fewer distinct templates were available than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub requested: usize,
    pub available: usize,
}

impl Shortfall {
    #[must_use]
    pub fn missing(&self) -> usize {
        self.requested.saturating_sub(self.available)
    }
}

#[derive(Debug, PartialEq)]
pub struct Sample<'a> {
    pub templates: Vec<&'a ExerciseTemplate>,
    pub shortfall: Option<Shortfall>,
}

/// Draw up to `count` distinct templates in random order.
///
/// Without a focus (or with the full body focus) the templates are grouped by
/// their primary focus and picked round-robin, one per group and round, as
/// long as every group still has templates left. The leftovers of all groups
/// are then sampled uniformly. With a focus the pool is sampled uniformly.
///
/// If the pool holds fewer distinct templates than requested, all of them are
/// returned together with a [`Shortfall`].
pub fn sample<'a, R: Rng + ?Sized>(
    catalog: &[&'a ExerciseTemplate],
    count: usize,
    focus: Option<MuscleFocus>,
    rng: &mut R,
) -> Result<Sample<'a>, GenerationError> {
    let mut seen = HashSet::new();
    let pool = catalog
        .iter()
        .copied()
        .filter(|t| seen.insert(t.id))
        .collect::<Vec<_>>();

    if pool.is_empty() {
        return Err(GenerationError::EmptyCatalog);
    }

    let shortfall = if pool.len() < count {
        warn!(
            "only {} of {count} requested exercises available",
            pool.len()
        );
        Some(Shortfall {
            requested: count,
            available: pool.len(),
        })
    } else {
        None
    };

    let templates = match focus {
        None | Some(MuscleFocus::FullBody) => round_robin(pool, count, rng),
        Some(_) => uniform(pool, count, rng),
    };

    debug!("sampled {} of {} templates", templates.len(), catalog.len());

    Ok(Sample {
        templates,
        shortfall,
    })
}

fn uniform<'a, R: Rng + ?Sized>(
    mut pool: Vec<&'a ExerciseTemplate>,
    count: usize,
    rng: &mut R,
) -> Vec<&'a ExerciseTemplate> {
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

fn round_robin<'a, R: Rng + ?Sized>(
    pool: Vec<&'a ExerciseTemplate>,
    count: usize,
    rng: &mut R,
) -> Vec<&'a ExerciseTemplate> {
    let mut partitions: BTreeMap<MuscleFocus, Vec<&ExerciseTemplate>> = BTreeMap::new();

    for template in pool {
        partitions
            .entry(template.primary_focus())
            .or_default()
            .push(template);
    }

    let mut groups = partitions.into_values().collect::<Vec<_>>();

    for group in &mut groups {
        group.shuffle(rng);
    }

    groups.shuffle(rng);

    let mut selected = Vec::with_capacity(count);

    while selected.len() < count && groups.iter().all(|g| !g.is_empty()) {
        for group in &mut groups {
            if selected.len() == count {
                break;
            }
            if let Some(template) = group.pop() {
                selected.push(template);
            }
        }
    }

    let remaining = count - selected.len();
    selected.extend(uniform(groups.into_iter().flatten().collect(), remaining, rng));
    selected
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;
    use crate::{Catalog, Equipment};

    pub(crate) fn template(id: &'static str, focus: &'static [MuscleFocus]) -> ExerciseTemplate {
        ExerciseTemplate {
            id,
            name: id,
            equipment: Equipment::None,
            focus,
            instructions: None,
            sets: 3,
            reps: "10",
            rest_seconds: 60,
            kid_friendly: false,
            cues: &[],
        }
    }

    static TEMPLATES: std::sync::LazyLock<Vec<ExerciseTemplate>> =
        std::sync::LazyLock::new(|| {
            vec![
                template("a1", &[MuscleFocus::LowerBody]),
                template("a2", &[MuscleFocus::LowerBody]),
                template("a3", &[MuscleFocus::LowerBody]),
                template("a4", &[MuscleFocus::LowerBody]),
                template("a5", &[MuscleFocus::LowerBody]),
                template("a6", &[MuscleFocus::LowerBody]),
                template("b1", &[MuscleFocus::UpperBody, MuscleFocus::Core]),
                template("b2", &[MuscleFocus::UpperBody]),
                template("c1", &[MuscleFocus::Core]),
                template("c2", &[MuscleFocus::Core]),
            ]
        });

    fn ids(sample: &Sample) -> Vec<&'static str> {
        sample.templates.iter().map(|t| t.id).collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(42)]
    #[case(1337)]
    fn test_sample_no_repeats(#[case] seed: u64) {
        let pool = TEMPLATES.iter().collect::<Vec<_>>();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for count in 1..=pool.len() {
            for focus in [None, Some(MuscleFocus::LowerBody)] {
                let sample = sample(&pool, count, focus, &mut rng).unwrap();
                let unique = ids(&sample).into_iter().collect::<HashSet<_>>();
                assert_eq!(sample.templates.len(), count);
                assert_eq!(unique.len(), count);
                assert_eq!(sample.shortfall, None);
            }
        }
    }

    #[test]
    fn test_sample_duplicate_entries_in_pool() {
        let pool = TEMPLATES.iter().chain(TEMPLATES.iter()).collect::<Vec<_>>();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let sample = sample(&pool, 12, None, &mut rng).unwrap();
        assert_eq!(sample.templates.len(), TEMPLATES.len());
        assert_eq!(
            sample.shortfall,
            Some(Shortfall {
                requested: 12,
                available: 10
            })
        );
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(99)]
    fn test_sample_round_robin_covers_all_groups(#[case] seed: u64) {
        let pool = TEMPLATES.iter().collect::<Vec<_>>();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sample = sample(&pool, 6, None, &mut rng).unwrap();
        let first_round = sample.templates[..3]
            .iter()
            .map(|t| t.primary_focus())
            .collect::<HashSet<_>>();
        assert_eq!(first_round.len(), 3);
        let lower_body = sample
            .templates
            .iter()
            .filter(|t| t.primary_focus() == MuscleFocus::LowerBody)
            .count();
        assert_eq!(lower_body, 2);
    }

    #[test]
    fn test_sample_round_robin_falls_back_to_remainder() {
        let pool = TEMPLATES.iter().collect::<Vec<_>>();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let sample = sample(&pool, 9, None, &mut rng).unwrap();
        assert_eq!(sample.templates.len(), 9);
        let upper_body = sample
            .templates
            .iter()
            .filter(|t| t.primary_focus() == MuscleFocus::UpperBody)
            .count();
        let core = sample
            .templates
            .iter()
            .filter(|t| t.primary_focus() == MuscleFocus::Core)
            .count();
        assert_eq!(upper_body, 2);
        assert_eq!(core, 2);
    }

    #[test]
    fn test_sample_diversity_with_catalog() {
        let catalog = Catalog::default();
        let pool = catalog.templates_matching(&std::collections::BTreeSet::new(), None, false);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let sample = sample(&pool, 4, None, &mut rng).unwrap();
            let focus = sample
                .templates
                .iter()
                .map(|t| t.primary_focus())
                .collect::<HashSet<_>>();
            assert!(focus.len() >= 2, "seed {seed}: {focus:?}");
        }
    }

    #[test]
    fn test_sample_deterministic() {
        let pool = TEMPLATES.iter().collect::<Vec<_>>();
        let first = sample(&pool, 5, None, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        let second = sample(&pool, 5, None, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_sample_shortfall() {
        let pool = TEMPLATES.iter().take(4).collect::<Vec<_>>();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let sample = sample(&pool, 10, None, &mut rng).unwrap();
        assert_eq!(sample.templates.len(), 4);
        assert_eq!(
            ids(&sample).into_iter().collect::<HashSet<_>>().len(),
            4
        );
        assert_eq!(
            sample.shortfall,
            Some(Shortfall {
                requested: 10,
                available: 4
            })
        );
        assert_eq!(sample.shortfall.map(|s| s.missing()), Some(6));
    }

    #[test]
    fn test_sample_empty_catalog() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            sample(&[], 5, None, &mut rng),
            Err(GenerationError::EmptyCatalog)
        );
    }
}
