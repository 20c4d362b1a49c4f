//! Property-based tests for the outcome algebra's laws

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::outcome::Outcome;

    fn arb_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
        prop_oneof![
            any::<i32>().prop_map(Outcome::success),
            "[a-z]{1,12}".prop_map(Outcome::failure),
        ]
    }

    proptest! {
        #[test]
        fn prop_constructors_fix_the_variant(value in any::<i32>(), error in "[a-z]{1,12}") {
            let ok: Outcome<i32, String> = Outcome::success(value);
            let bad: Outcome<i32, String> = Outcome::failure(error);

            prop_assert!(ok.is_success() && !ok.is_failure());
            prop_assert!(bad.is_failure() && !bad.is_success());
        }

        #[test]
        fn prop_map_identity(outcome in arb_outcome()) {
            prop_assert_eq!(outcome.clone().map(|v| v), outcome);
        }

        #[test]
        fn prop_map_composes(outcome in arb_outcome(), a in -1000i32..1000, b in -1000i32..1000) {
            let f = move |v: i32| v.wrapping_add(a);
            let g = move |v: i32| v.wrapping_mul(b);

            let fused = outcome.clone().map(move |v| g(f(v)));
            let staged = outcome.map(f).map(g);
            prop_assert_eq!(fused, staged);
        }

        #[test]
        fn prop_map_failure_preserves_success(value in any::<i32>(), suffix in "[a-z]{1,8}") {
            let ok: Outcome<i32, String> = Outcome::success(value);
            prop_assert_eq!(ok.map_failure(|e| format!("{e}-{suffix}")), Outcome::success(value));
        }

        #[test]
        fn prop_and_then_is_associative(outcome in arb_outcome(), a in -1000i32..1000, limit in 0i32..1000) {
            let f = move |v: i32| -> Outcome<i32, String> { Outcome::success(v.wrapping_add(a)) };
            let g = move |v: i32| -> Outcome<i32, String> {
                if v.abs() <= limit {
                    Outcome::success(v)
                } else {
                    Outcome::failure("too large".to_string())
                }
            };

            let left = outcome.clone().and_then(f).and_then(g);
            let right = outcome.and_then(move |v| f(v).and_then(g));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_and_then_short_circuits(error in "[a-z]{1,12}") {
            let bad: Outcome<i32, String> = Outcome::failure(error.clone());
            let chained = bad.and_then(|v| Outcome::success(v + 1));
            prop_assert_eq!(chained, Outcome::failure(error));
        }

        #[test]
        fn prop_or_else_leaves_success_alone(value in any::<i32>()) {
            let ok: Outcome<i32, String> = Outcome::success(value);
            let recovered = ok.or_else(|_| Outcome::<i32, String>::success(0));
            prop_assert_eq!(recovered, Outcome::success(value));
        }

        #[test]
        fn prop_fold_agrees_with_predicates(outcome in arb_outcome()) {
            let is_success = outcome.is_success();
            let folded = outcome.fold(|_| true, |_| false);
            prop_assert_eq!(folded, is_success);
        }

        #[test]
        fn prop_unwrap_or_picks_the_right_channel(outcome in arb_outcome(), default in any::<i32>()) {
            let expected = match outcome.clone() {
                Outcome::Success(v) => v,
                Outcome::Failure(_) => default,
            };
            prop_assert_eq!(outcome.unwrap_or(default), expected);
        }

        #[test]
        fn prop_result_round_trip(outcome in arb_outcome()) {
            let back = Outcome::from_result(outcome.clone().into_result());
            prop_assert_eq!(back, outcome);
        }
    }
}
