use crate::models::{Meter, VerseLine};

/// Guesses the meter of a poem from its indentation layout.
///
/// This is a layout heuristic, not a scansion. Rules, first match wins:
///
/// 1. at least two lines and 40-60% of them indented: elegiac couplets
///    (indented pentameters);
/// 2. a multiple of four lines with every fourth indented: sapphic stanzas
///    (indented adonics);
/// 3. at most six lines, none indented: hendecasyllables;
/// 4. otherwise elegiac.
///
/// An empty poem has no meter.
pub fn detect_meter(lines: &[VerseLine]) -> Meter {
    let pattern: Vec<bool> = lines.iter().map(|l| l.indent).collect();
    detect_meter_from_pattern(&pattern)
}

/// Same as [`detect_meter`], taking the indentation flags directly.
pub fn detect_meter_from_pattern(indents: &[bool]) -> Meter {
    let total = indents.len();
    if total == 0 {
        return Meter::Unknown;
    }
    let indented = indents.iter().filter(|i| **i).count();

    if total >= 2 {
        let ratio = indented as f64 / total as f64;
        if (0.4..=0.6).contains(&ratio) {
            return Meter::Elegiac;
        }
    }

    if total >= 4 && total % 4 == 0 && indents.iter().skip(3).step_by(4).all(|i| *i) {
        return Meter::Sapphic;
    }

    if total <= 6 && indented == 0 {
        return Meter::Hendecasyllabic;
    }

    Meter::Elegiac
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn layout(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '>').collect()
    }

    #[rstest]
    #[case("", Meter::Unknown)]
    #[case("-", Meter::Hendecasyllabic)]
    #[case("--", Meter::Hendecasyllabic)]
    #[case("->", Meter::Elegiac)]
    #[case("->->->", Meter::Elegiac)]
    #[case("------", Meter::Hendecasyllabic)]
    #[case("-------", Meter::Elegiac)]
    #[case("--->--->", Meter::Sapphic)]
    #[case("--->", Meter::Sapphic)]
    #[case("--->--->--->", Meter::Sapphic)]
    #[case(">>->>->", Meter::Elegiac)]
    #[case(">>>>", Meter::Sapphic)]
    #[case("-->-", Meter::Elegiac)]
    fn detects_meter_from_layout(#[case] pattern: &str, #[case] expected: Meter) {
        assert_eq!(detect_meter_from_pattern(&layout(pattern)), expected);
    }

    #[test]
    fn ratio_bounds_are_inclusive() {
        // 2 of 5 indented = 0.4
        assert_eq!(detect_meter_from_pattern(&layout("->->-")), Meter::Elegiac);
        // 3 of 5 indented = 0.6
        assert_eq!(detect_meter_from_pattern(&layout(">->->")), Meter::Elegiac);
    }

    #[test]
    fn elegiac_ratio_beats_sapphic_layout() {
        // every 4th indented but also 50% indented overall
        assert_eq!(detect_meter_from_pattern(&layout("->->->->")), Meter::Elegiac);
    }

    #[test]
    fn reads_flags_from_verse_lines() {
        let lines: Vec<VerseLine> = ["a", "b"]
            .iter()
            .enumerate()
            .map(|(i, t)| VerseLine {
                text: t.to_string(),
                indent: i == 1,
                line_number: i as u32 + 1,
            })
            .collect();
        assert_eq!(detect_meter(&lines), Meter::Elegiac);
    }

    proptest! {
        #[test]
        fn detection_is_deterministic(indents in proptest::collection::vec(any::<bool>(), 0..40)) {
            prop_assert_eq!(
                detect_meter_from_pattern(&indents),
                detect_meter_from_pattern(&indents.clone())
            );
        }

        #[test]
        fn non_empty_input_never_yields_unknown(indents in proptest::collection::vec(any::<bool>(), 1..40)) {
            prop_assert_ne!(detect_meter_from_pattern(&indents), Meter::Unknown);
        }
    }
}
