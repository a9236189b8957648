//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, InputConfig, LimitsConfig, OutputFormat, SelectionKind};
use proptest::prelude::*;

fn selection_strategy() -> impl Strategy<Value = SelectionKind> {
    prop_oneof![Just(SelectionKind::Lookahead), Just(SelectionKind::TightestFit)]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Json),
        Just(OutputFormat::Table),
        Just(OutputFormat::Csv)
    ]
}

fn limits_strategy() -> impl Strategy<Value = LimitsConfig> {
    (prop::option::of(1usize..1000), prop::option::of(1usize..1000)).prop_map(
        |(max_flights, max_reservations)| LimitsConfig {
            max_flights,
            max_reservations,
        },
    )
}

fn input_strategy() -> impl Strategy<Value = InputConfig> {
    (
        prop::option::of(prop::sample::select(vec![',', ';', '\t', '|'])),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(delimiter, has_headers)| InputConfig {
            delimiter,
            has_headers,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(selection_strategy()),
        prop::option::of(limits_strategy()),
        prop::option::of(input_strategy()),
        prop::option::of(format_strategy()),
    )
        .prop_map(|(selection, limits, input, output_format)| Config {
            selection,
            limits,
            input,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every set value in the higher source survives the merge, and every
    // unset one falls through to the lower source
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.selection, high.selection.or(low.selection));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));

        let limit = |c: &Config, f: fn(&LimitsConfig) -> Option<usize>| c.limits.as_ref().and_then(f);
        prop_assert_eq!(
            limit(&result, |l| l.max_flights),
            limit(&high, |l| l.max_flights).or(limit(&low, |l| l.max_flights))
        );
        prop_assert_eq!(
            limit(&result, |l| l.max_reservations),
            limit(&high, |l| l.max_reservations).or(limit(&low, |l| l.max_reservations))
        );

        let delimiter = |c: &Config| c.input.as_ref().and_then(|i| i.delimiter);
        prop_assert_eq!(delimiter(&result), delimiter(&high).or(delimiter(&low)));
    }

    // Merging the empty config is the identity
    #[test]
    fn merge_empty_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config.clone());

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(from_empty, config);
    }

    // Merging twice changes nothing further
    #[test]
    fn merge_is_idempotent(low in config_strategy(), high in config_strategy()) {
        let mut once = low;
        ConfigMerger::merge_into(&mut once, &high);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &high);
        prop_assert_eq!(once, twice);
    }

    // Configs survive a YAML round trip through the file format
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
