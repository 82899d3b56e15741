use super::{
    StatsError, compute_ratios, compute_variances, group_variances, sample_variance,
    variance_ratios,
};
use crate::model::{Dataset, Element, ElementValues, Group, Sample};

fn sample(group: Group, code: &str, ppm: [f64; 4]) -> Sample {
    Sample {
        group,
        code: code.to_string(),
        x_utm: code.to_string(),
        y_utm: code.to_string(),
        ppm: ElementValues::from(ppm),
    }
}

fn scenario_dataset() -> Dataset {
    let mut dataset = Dataset::default();
    dataset.push(sample(Group::Mine, "S1", [10.0, 2.0, 3.0, 4.0]));
    dataset.push(sample(Group::Mine, "S2", [12.0, 2.0, 3.0, 4.0]));
    dataset.push(sample(Group::Background, "S3", [1.0, 1.0, 1.0, 1.0]));
    dataset.push(sample(Group::Background, "S4", [3.0, 1.0, 1.0, 1.0]));
    dataset
}

#[test]
fn test_sample_variance_requires_two_observations() {
    assert_eq!(sample_variance(&[]), None);
    assert_eq!(sample_variance(&[5.0]), None);
}

#[test]
fn test_sample_variance_uses_n_minus_one() {
    // values 10, 12: mean 11, squared devs 1 + 1 = 2, / (2 - 1) = 2.0
    assert_eq!(sample_variance(&[10.0, 12.0]), Some(2.0));
    assert_eq!(sample_variance(&[2.0, 4.0, 6.0]), Some(4.0));
}

#[test]
fn test_sample_variance_of_identical_values_is_zero() {
    assert_eq!(sample_variance(&[3.5, 3.5, 3.5, 3.5]), Some(0.0));
}

#[test]
fn test_sample_variance_invariant_under_reordering() {
    let forward = sample_variance(&[1.0, 4.0, 9.0, 16.0]);
    let reversed = sample_variance(&[16.0, 9.0, 4.0, 1.0]);
    let shuffled = sample_variance(&[9.0, 1.0, 16.0, 4.0]);
    assert_eq!(forward, reversed);
    assert_eq!(forward, shuffled);
}

#[test]
fn test_group_variances_per_element() {
    let samples = vec![
        sample(Group::Mine, "S1", [10.0, 2.0, 3.0, 4.0]),
        sample(Group::Mine, "S2", [12.0, 2.0, 3.0, 4.0]),
    ];
    let variances = group_variances(Group::Mine, &samples).unwrap();
    assert_eq!(variances[Element::Pb], 2.0);
    assert_eq!(variances[Element::As], 0.0);
    assert_eq!(variances[Element::Sb], 0.0);
    assert_eq!(variances[Element::V], 0.0);
}

#[test]
fn test_group_variances_insufficient_data() {
    let samples = vec![sample(Group::Background, "S1", [1.0; 4])];
    let err = group_variances(Group::Background, &samples).unwrap_err();
    assert_eq!(err, StatsError::InsufficientData(Group::Background));

    let err = group_variances(Group::Background, &[]).unwrap_err();
    assert_eq!(err, StatsError::InsufficientData(Group::Background));
}

#[test]
fn test_compute_variances_fills_both_groups() {
    let mut dataset = scenario_dataset();
    compute_variances(&mut dataset).unwrap();

    let mine = dataset.variances.mine.unwrap();
    let background = dataset.variances.background.unwrap();
    assert_eq!(mine[Element::Pb], 2.0);
    assert_eq!(background[Element::Pb], 2.0);
}

#[test]
fn test_compute_variances_fails_on_missing_group() {
    let mut dataset = Dataset::default();
    dataset.push(sample(Group::Mine, "S1", [1.0; 4]));
    dataset.push(sample(Group::Mine, "S2", [2.0; 4]));

    let err = compute_variances(&mut dataset).unwrap_err();
    assert_eq!(err, StatsError::InsufficientData(Group::Background));
}

#[test]
fn test_variance_ratio_scenario() {
    let mut dataset = scenario_dataset();
    compute_variances(&mut dataset).unwrap();
    compute_ratios(&mut dataset).unwrap();

    let ratios = dataset.ratios.unwrap();
    assert_eq!(ratios[Element::Pb], 1.0);
    // the other elements have zero variance in both groups
    assert!(ratios[Element::As].is_nan());
}

#[test]
fn test_variance_ratios_is_deterministic() {
    let mine = ElementValues::from([2.0, 4.0, 8.0, 0.5]);
    let background = ElementValues::from([1.0, 2.0, 2.0, 2.0]);

    let first = variance_ratios(mine, background);
    let second = variance_ratios(mine, background);
    assert_eq!(first, second);
    assert_eq!(first, ElementValues::from([2.0, 2.0, 4.0, 0.25]));
}

#[test]
fn test_zero_background_variance_yields_infinity() {
    let mine = ElementValues::from([2.0, 1.0, 1.0, 1.0]);
    let background = ElementValues::from([0.0, 1.0, 1.0, 1.0]);

    let ratios = variance_ratios(mine, background);
    assert_eq!(ratios[Element::Pb], f64::INFINITY);
    assert_eq!(ratios[Element::As], 1.0);
}

#[test]
fn test_zero_over_zero_variance_yields_nan() {
    let mine = ElementValues::from([0.0, 1.0, 1.0, 1.0]);
    let background = ElementValues::from([0.0, 1.0, 1.0, 1.0]);

    let ratios = variance_ratios(mine, background);
    assert!(ratios[Element::Pb].is_nan());
}

#[test]
fn test_compute_ratios_requires_variances() {
    let mut dataset = scenario_dataset();
    let err = compute_ratios(&mut dataset).unwrap_err();
    assert_eq!(err, StatsError::MissingVariances(Group::Mine));

    dataset.variances.mine = Some(ElementValues::from([1.0; 4]));
    let err = compute_ratios(&mut dataset).unwrap_err();
    assert_eq!(err, StatsError::MissingVariances(Group::Background));
}
