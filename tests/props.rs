use ae_pulse::data::openfda::EventRecord;
use ae_pulse::summary::{aggregate, trend::by_year};
use proptest::prelude::*;

fn arb_flag() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("1".to_string())),
        Just(Some("2".to_string())),
        Just(Some(String::new())),
    ]
}

fn arb_sex_code() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("1".to_string())),
        Just(Some("2".to_string())),
        Just(Some("9".to_string())),
    ]
}

fn arb_event() -> impl Strategy<Value = EventRecord> {
    (
        arb_flag(),
        arb_flag(),
        arb_flag(),
        arb_flag(),
        arb_sex_code(),
        proptest::option::of("[0-9]{8}"),
    )
        .prop_map(|(serious, death, hosp, life, sex, date)| {
            serde_json::from_value(serde_json::json!({
                "receivedate": date,
                "serious": serious,
                "seriousnessdeath": death,
                "seriousnesshospitalization": hosp,
                "seriousnesslifethreatening": life,
                "patient": { "patientsex": sex },
            }))
            .expect("valid synthetic record")
        })
}

proptest! {
    #[test]
    fn sex_breakdown_sums_to_total(events in proptest::collection::vec(arb_event(), 0..40)) {
        let metrics = aggregate(&events);
        prop_assert_eq!(
            metrics.by_sex.male + metrics.by_sex.female + metrics.by_sex.unknown,
            metrics.total
        );
    }

    #[test]
    fn flag_counts_bounded_by_total(events in proptest::collection::vec(arb_event(), 0..40)) {
        let metrics = aggregate(&events);
        prop_assert!(metrics.deaths <= metrics.total);
        prop_assert!(metrics.hospitalizations <= metrics.total);
        prop_assert!(metrics.life_threatening <= metrics.total);
        prop_assert!(metrics.serious_non_dh <= metrics.total);
    }

    #[test]
    fn aggregation_is_pure_and_order_insensitive(
        events in proptest::collection::vec(arb_event(), 0..20)
    ) {
        let forward = aggregate(&events);
        prop_assert_eq!(forward.clone(), aggregate(&events));

        let mut reversed = events.clone();
        reversed.reverse();
        prop_assert_eq!(forward, aggregate(&reversed));
    }

    #[test]
    fn trend_years_strictly_ascending(events in proptest::collection::vec(arb_event(), 0..40)) {
        let series = by_year(&events);
        for pair in series.windows(2) {
            prop_assert!(pair[0].year < pair[1].year);
        }
    }
}
