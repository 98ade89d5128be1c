use std::collections::HashMap;

use habitability::{
    presets::{standard_catalogue, Preset},
    scoring::{evaluate, round_total, score},
    Axis, AxisCatalogue, AxisUnit, SpeciesProfile, Tolerance,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn raw_catalogue(len: usize) -> AxisCatalogue {
    AxisCatalogue::new(
        (0..len)
            .map(|i| Axis::new(format!("axis{i}"), AxisUnit::Raw))
            .collect(),
    )
}

fn profile(tolerances: Vec<Tolerance>, total_terraforming: bool) -> SpeciesProfile {
    SpeciesProfile::new(raw_catalogue(tolerances.len()), tolerances, total_terraforming).unwrap()
}

fn range(minimum: i32, maximum: i32) -> Tolerance {
    Tolerance::range(minimum, maximum).unwrap()
}

fn random_tolerance(rng: &mut ChaCha8Rng) -> Tolerance {
    if rng.gen_bool(0.25) {
        Tolerance::Immune
    } else {
        let minimum = rng.gen_range(0..=90);
        let maximum = rng.gen_range(minimum + 2..=100);
        range(minimum, maximum)
    }
}

const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

#[test]
fn single_immune_axis() {
    let report = evaluate(&profile(vec![Tolerance::Immune], false));
    assert_eq!(report.total, 666_072);
    assert_eq!(report.score, 66_607);
}

#[test]
fn single_open_range_axis() {
    assert_eq!(score(&profile(vec![range(0, 100)], false)), 26_239);
}

#[test]
fn rounding_is_half_up() {
    assert_eq!(round_total(15), 2);
    assert_eq!(round_total(262_385), 26_239);
    assert_eq!(round_total(262_384), 26_238);
}

#[test]
fn preset_scores() {
    let humanoid = Preset::Humanoid.profile().unwrap();
    assert_eq!(score(&humanoid), 3_293_786);
    assert_eq!(score(&humanoid.with_total_terraforming(true)), 3_997_767);

    let immune_temp = Preset::HumanoidImmuneTemp.profile().unwrap();
    assert_eq!(score(&immune_temp), 3_774_982);
    assert_eq!(score(&immune_temp.with_total_terraforming(true)), 4_427_908);
}

#[test]
fn scoring_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..20 {
        let len = rng.gen_range(1..=3);
        let tolerances = (0..len).map(|_| random_tolerance(&mut rng)).collect();
        let profile = profile(tolerances, rng.gen_bool(0.5));
        let first = evaluate(&profile);
        assert_eq!(evaluate(&profile), first);
        assert_eq!(score(&profile.clone()), first.score);
    }
}

#[test]
fn full_immunity_ignores_terraforming() {
    for len in 1..=3 {
        let without = profile(vec![Tolerance::Immune; len], false);
        let with = profile(vec![Tolerance::Immune; len], true);
        assert_eq!(evaluate(&without), evaluate(&with));
    }
    assert_eq!(
        score(&profile(vec![Tolerance::Immune; 3], true)),
        23_958_000
    );
}

#[test]
fn axis_order_does_not_matter_for_open_axes() {
    let cases = [
        (vec![range(0, 100), Tolerance::Immune, range(0, 100)], false, 10_107_189),
        (vec![range(0, 100), Tolerance::Immune, range(0, 100)], true, 10_886_154),
        (vec![range(0, 100), Tolerance::Immune, Tolerance::Immune], false, 15_654_544),
        (vec![range(0, 100), Tolerance::Immune, Tolerance::Immune], true, 16_226_366),
    ];
    for (tolerances, total_terraforming, expected) in cases {
        let base = profile(tolerances, total_terraforming);
        for order in PERMUTATIONS {
            let permuted = base.permuted(&order).unwrap();
            assert_eq!(score(&permuted), expected, "order {order:?}");
        }
    }
}

#[test]
fn axis_order_moves_catalogue_with_tolerances() {
    let base = SpeciesProfile::new(
        standard_catalogue(),
        vec![range(15, 85), Tolerance::Immune, range(35, 65)],
        false,
    )
    .unwrap();
    let permuted = base.permuted(&[2, 1, 0]).unwrap();
    assert_eq!(permuted.catalogue().axes()[0].name, "Radiation");
    assert_eq!(permuted.tolerances()[0], range(35, 65));
}

#[test]
fn symmetric_widening_beside_a_moderate_axis_never_lowers_the_score() {
    let moderate = range(15, 85);
    for total_terraforming in [false, true] {
        let mut scores = HashMap::new();
        for minimum in 0..=98 {
            for maximum in minimum + 2..=100 {
                let candidate =
                    profile(vec![range(minimum, maximum), moderate], total_terraforming);
                scores.insert((minimum, maximum), score(&candidate));
            }
        }
        for (&(minimum, maximum), &narrow) in &scores {
            if let Some(&wide) = scores.get(&(minimum - 1, maximum + 1)) {
                assert!(
                    wide >= narrow,
                    "[{minimum}, {maximum}] scored {narrow}, widened scored {wide} \
                     (total_terraforming {total_terraforming})"
                );
            }
        }
    }
}

#[test]
fn widening_a_lone_axis_can_lower_the_score() {
    // [0, 5] keeps the radius of [0, 4], so its new edge reading lands past
    // the radius and scores nothing.
    let one_sided = score(&profile(vec![range(0, 4)], false));
    let symmetric = score(&profile(vec![range(1, 4)], false));
    let widened = score(&profile(vec![range(0, 5)], false));
    assert_eq!((one_sided, symmetric, widened), (5_612, 5_561, 5_475));
}

#[test]
fn radiation_band_widths() {
    let radiation = [range(40, 60), range(30, 70), range(20, 80), range(15, 85)];
    let scores: Vec<i64> = radiation
        .iter()
        .map(|band| score(&profile(vec![range(15, 85), range(15, 85), *band], false)))
        .collect();
    assert_eq!(scores, vec![1_763_027, 2_381_702, 2_990_898, 3_293_786]);
}
