//! Property-based tests for rule invariants

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::RuleConfig;
    use crate::declarations::{FunctionDecl, FunctionKind};
    use crate::rule::{normalize_type, ResultReturnRule};

    fn decl(name: &str, return_type: Option<String>) -> FunctionDecl {
        FunctionDecl {
            name: name.to_string(),
            kind: FunctionKind::Declaration,
            return_type,
            line: 1,
            column: 1,
        }
    }

    fn arb_type_text() -> impl Strategy<Value = String> {
        // Identifier-ish fragments glued with the punctuation the
        // normalizer cares about, padded with random whitespace.
        proptest::collection::vec("[A-Za-z0-9]{1,8}| |\t|<|>|,|\\|", 1..24)
            .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in arb_type_text()) {
            let once = normalize_type(&raw);
            prop_assert_eq!(normalize_type(&once), once);
        }

        #[test]
        fn prop_normalize_never_touches_identifier_chars(raw in "[A-Za-z0-9]{1,16}") {
            prop_assert_eq!(normalize_type(&raw), raw);
        }

        #[test]
        fn prop_pascal_case_names_quiet_by_default(
            name in "[A-Z][A-Za-z0-9]{0,12}",
            annotated in proptest::option::of("[A-Za-z]{1,8}"),
        ) {
            let rule = ResultReturnRule::new(RuleConfig::default()).unwrap();
            prop_assert!(rule.check_decl(&decl(&name, annotated)).is_none());
        }

        #[test]
        fn prop_exempt_names_quiet_whatever_the_annotation(
            index in 0usize..20,
            annotated in proptest::option::of("[A-Za-z]{1,8}"),
        ) {
            let config = RuleConfig::default();
            let name = config.exempt_functions[index % config.exempt_functions.len()].clone();
            let rule = ResultReturnRule::new(config).unwrap();
            prop_assert!(rule.check_decl(&decl(&name, annotated)).is_none());
        }

        #[test]
        fn prop_two_arg_result_always_accepted(
            ok in "[A-Za-z][A-Za-z0-9]{0,8}",
            err in "[A-Za-z][A-Za-z0-9]{0,8}",
        ) {
            let rule = ResultReturnRule::new(RuleConfig::default()).unwrap();
            let annotation = format!("Result<{ok}, {err}>");
            prop_assert!(rule
                .check_decl(&decl("loadRow", Some(annotation)))
                .is_none());
        }

        #[test]
        fn prop_verdict_is_deterministic(
            name in "[a-z][A-Za-z0-9]{0,12}",
            annotated in proptest::option::of("[A-Za-z<>,]{1,16}"),
        ) {
            let rule = ResultReturnRule::new(RuleConfig::default()).unwrap();
            let declaration = decl(&name, annotated);
            prop_assert_eq!(rule.check_decl(&declaration), rule.check_decl(&declaration));
        }
    }
}
