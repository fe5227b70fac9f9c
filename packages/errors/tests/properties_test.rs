//! Property tests for codes, wrapping and chain depth

#![allow(clippy::unwrap_used, clippy::expect_used)]

use cryypt_errors::{code, has_code, unwrap, Code, Error, Fault, Options};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn any_code() -> impl Strategy<Value = Code> {
    (0i32..10_000, "[A-Za-z ]{0,12}").prop_map(|(value, message)| Code::with_message(value, message))
}

proptest! {
    #![proptest_config(ProptestConfig {
        // Do not write `.proptest-regressions` files into the repo.
        failure_persistence: None,
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_coded_node_reports_code_and_text(c in any_code(), text in "[a-z0-9 ]{1,24}") {
        let err = Error::new_code(c.clone(), text.clone());
        prop_assert_eq!(code(&err), c);
        prop_assert!(err.to_string().contains(&text));
    }

    #[test]
    fn prop_wrapping_nothing_is_nothing(c in any_code(), text in "[a-z ]{0,16}") {
        prop_assert!(Error::wrap_code(c.clone(), None::<Error>, text.clone()).is_none());
        prop_assert!(Error::wrap_code_skip(c.clone(), 2, None::<Error>, text.clone()).is_none());
        prop_assert!(Error::wrap(None::<Error>, text.clone()).is_none());

        let built = Error::with_options(Options::new().code(c.clone()).text(text));
        prop_assert!(built.next().is_none());
        prop_assert_eq!(code(&built), c);
    }

    #[test]
    fn prop_unwrap_reaches_end_after_depth(depth in 1usize..12) {
        let mut chain = Error::new("root");
        for level in 1..depth {
            chain = Error::wrap(Some(chain), format!("level {level}")).unwrap();
        }

        let mut node: Option<&dyn Fault> = Some(&chain);
        for _ in 0..depth {
            prop_assert!(node.is_some());
            node = unwrap(node);
        }
        prop_assert!(node.is_none());
    }

    #[test]
    fn prop_every_explicit_code_is_found(codes in prop::collection::vec(any_code(), 1..6)) {
        let mut chain = Error::new_code(codes[0].clone(), "root");
        for c in &codes[1..] {
            chain = Error::wrap_code(c.clone(), Some(chain), "wrap").unwrap();
        }
        for c in &codes {
            prop_assert!(has_code(&chain, c));
        }
        prop_assert_eq!(code(&chain), codes[codes.len() - 1].clone());
    }
}
