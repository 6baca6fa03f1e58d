use freelance_match::scoring::{clamp_metric, compute_match_score, compute_skills_overlap_score};
use freelance_match::{FreelancerMetrics, Preset};
use proptest::prelude::*;

fn any_metric() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1000.0f64..1000.0,
        0.0f64..=100.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        any::<f64>(),
    ]
}

fn any_metrics() -> impl Strategy<Value = FreelancerMetrics> {
    (any_metric(), any_metric(), any_metric(), any_metric())
        .prop_map(|(jp, se, r, f)| FreelancerMetrics::new(jp, se, r, f))
}

fn any_preset() -> impl Strategy<Value = Preset> {
    prop_oneof![Just(Preset::Display), Just(Preset::Matching)]
}

proptest! {
    #[test]
    fn score_is_always_bounded(metrics in any_metrics(), preset in any_preset()) {
        let score = compute_match_score(&metrics, preset);
        prop_assert!(score.value().is_finite());
        prop_assert!((0.0..=100.0).contains(&score.value()));
        prop_assert!(score.rounded() <= 100);
    }

    #[test]
    fn clamping_first_changes_nothing(metrics in any_metrics(), preset in any_preset()) {
        let raw = compute_match_score(&metrics, preset);
        let clamped = compute_match_score(&metrics.clamped(), preset);
        prop_assert_eq!(raw.value(), clamped.value());
    }

    #[test]
    fn score_is_monotone_in_each_metric(
        metrics in any_metrics(),
        preset in any_preset(),
        index in 0usize..4,
        bump in 0.0f64..200.0,
    ) {
        let before = compute_match_score(&metrics, preset).value();
        let mut values = metrics.clamped().as_array();
        values[index] += bump;
        let raised = FreelancerMetrics::new(values[0], values[1], values[2], values[3]);
        let after = compute_match_score(&raised, preset).value();
        prop_assert!(after >= before, "{} -> {}", before, after);
    }

    #[test]
    fn clamp_metric_stays_in_domain(value in any_metric()) {
        let clamped = clamp_metric(value);
        prop_assert!((0.0..=100.0).contains(&clamped));
    }

    #[test]
    fn overlap_is_bounded(
        freelancer in proptest::collection::vec("[a-zA-Z .#+]{0,12}", 0..8),
        requested in proptest::collection::vec("[a-zA-Z .#+]{0,12}", 0..8),
    ) {
        let score = compute_skills_overlap_score(&freelancer, &requested);
        prop_assert!((0.0..=30.0).contains(&score));
    }

    #[test]
    fn overlap_with_empty_request_is_zero(
        freelancer in proptest::collection::vec("[a-zA-Z]{0,12}", 0..8),
    ) {
        let requested: Vec<String> = Vec::new();
        prop_assert_eq!(compute_skills_overlap_score(&freelancer, &requested), 0.0);
    }

    #[test]
    fn overlap_ignores_case(
        freelancer in proptest::collection::vec("[a-zA-Z]{1,12}", 0..8),
        requested in proptest::collection::vec("[a-zA-Z]{1,12}", 0..8),
    ) {
        let upper = freelancer.iter().map(|s| s.to_uppercase()).collect::<Vec<_>>();
        prop_assert_eq!(
            compute_skills_overlap_score(&freelancer, &requested),
            compute_skills_overlap_score(&upper, &requested)
        );
    }
}

#[test]
fn documented_scenarios_hold() {
    let display =
        compute_match_score(&FreelancerMetrics::new(95.0, 90.0, 88.0, 92.0), Preset::Display);
    assert!((display.value() - 91.8).abs() < 1e-9);
    assert_eq!(display.rounded(), 92);

    let matching =
        compute_match_score(&FreelancerMetrics::new(90.0, 80.0, 70.0, 75.0), Preset::Matching);
    assert!((matching.value() - 82.75).abs() < 1e-9);

    for preset in Preset::ALL {
        for (input, expected) in [(100.0, 100.0), (0.0, 0.0), (150.0, 100.0), (-10.0, 0.0)] {
            let score = compute_match_score(&FreelancerMetrics::uniform(input), preset);
            assert_eq!(score.value(), expected, "{preset} with all metrics = {input}");
        }
    }
}
