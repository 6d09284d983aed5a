//SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for the assertion chain.

use super::*;
use std::collections::{BTreeMap, HashMap};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;
#[cfg(target_arch = "wasm32")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn named_site() -> StackFrame {
    StackFrame::new("src/net/server.rs", 88, Some("app::net::Server::listen"))
}

fn anonymous_site() -> StackFrame {
    StackFrame::new("src/net/server.rs", 88, None)
}

fn message(result: Result<&impl Sized, AssertionError>) -> String {
    match result {
        Ok(_) => panic!("expected the verb to fail"),
        Err(e) => e.to_string(),
    }
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn equals_passes_for_the_subject_itself() {
    for value in [i64::MIN, -1, 0, 1, i64::MAX] {
        assert!(Assertion::at(&value, named_site()).equals(&value).is_ok());
    }
    let text = String::from("same");
    assert!(Assertion::at(&text, named_site()).equals("same").is_ok());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn equals_fails_for_anything_else() {
    let value = 5;
    let err = Assertion::at(&value, named_site()).equals(&6).unwrap_err();
    assert_eq!(err.kind(), AssertionErrorKind::EqualityMismatch);
    assert_eq!(
        err.to_string(),
        "Argument passed to Server::listen() does not equal: 5 !== 6"
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn prefix_falls_back_to_the_location() {
    let value = true;
    let chain = Assertion::at(&value, anonymous_site());
    assert_eq!(chain.prefix(), "Assertion failed (at src/net/server.rs:88)");
    assert_eq!(
        message(chain.equals(&false)),
        "Assertion failed (at src/net/server.rs:88) does not equal: true !== false"
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn ignore_makes_every_later_verb_pass() {
    let value = String::new();
    let chain = Assertion::at(&value, named_site());
    chain.ignore("");
    assert!(chain.is_ignored());
    let regex = Regex::new("^a+$").unwrap();
    assert!(chain.equals("other").is_ok());
    assert!(chain.instance_of::<u8>().is_ok());
    assert!(chain.type_of("bool").is_ok());
    assert!(chain.range(String::from("x")..).is_ok());
    assert!(chain.length(10).is_ok());
    assert!(chain.min_length(10).is_ok());
    assert!(chain.max_length(0).is_ok());
    assert!(chain.is("anything").is_ok());
    assert!(chain.not("anything").is_ok());
    assert!(chain.pattern(&regex).is_ok());
    assert!(chain.pattern(&42).is_ok());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn ignore_with_a_different_value_changes_nothing() {
    let value = 3;
    let chain = Assertion::at(&value, named_site());
    chain.ignore(&4);
    assert!(!chain.is_ignored());
    assert!(chain.equals(&4).is_err());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn ignore_is_irrevocable_but_not_retroactive() {
    let value = 0;
    let chain = Assertion::at(&value, named_site());
    let before = chain.equals(&1);
    assert!(before.is_err());
    chain.ignore(&0);
    //a later non-matching ignore doesn't clear the flag
    chain.ignore(&9);
    assert!(chain.is_ignored());
    assert!(chain.equals(&1).is_ok());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn range_bounds() {
    for value in [4, 11] {
        let err = Assertion::at(&value, named_site())
            .range(5..=10)
            .unwrap_err();
        assert_eq!(err.kind(), AssertionErrorKind::RangeMismatch);
    }
    for value in [5, 7, 10] {
        assert!(Assertion::at(&value, named_site()).range(5..=10).is_ok());
    }
    for value in [i32::MIN, 0, i32::MAX] {
        assert!(Assertion::at(&value, named_site()).range(..).is_ok());
    }
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn range_messages_use_interval_notation() {
    let value = 4;
    let chain = Assertion::at(&value, named_site());
    assert_eq!(
        message(chain.range(5..=10)),
        "Argument passed to Server::listen() value 4 not in range [5, 10]"
    );
    assert_eq!(
        message(chain.range(..4)),
        "Argument passed to Server::listen() value 4 not in range (-inf, 4)"
    );
    let float = 0.5;
    assert_eq!(
        message(Assertion::at(&float, named_site()).range(1.0..)),
        "Argument passed to Server::listen() value 0.5 not in range [1.0, +inf)"
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn length_verbs_agree() {
    let value = vec![1, 2, 3];
    let chain = Assertion::at(&value, named_site());
    let len = 3;
    assert!(chain.length(len).is_ok());
    assert!(chain.min_length(len).is_ok());
    assert!(chain.max_length(len).is_ok());
    assert_eq!(
        message(chain.length(len + 1)),
        "Argument passed to Server::listen() length does not equal: 3 !== 4"
    );
    assert_eq!(
        message(chain.min_length(len + 1)),
        "Argument passed to Server::listen() length less than: 3 < 4"
    );
    assert_eq!(
        message(chain.max_length(len - 1)),
        "Argument passed to Server::listen() length greater than: 3 > 2"
    );
    assert_eq!(
        chain.length(0).unwrap_err().kind(),
        AssertionErrorKind::LengthMismatch
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn text_length_counts_characters() {
    let chain = Assertion::at("naïve", named_site());
    assert!(chain.length(5).is_ok());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn instance_of_compares_types() {
    let value = String::from("text");
    let chain = Assertion::at(&value, named_site());
    assert!(chain.instance_of::<String>().is_ok());
    let err = chain.instance_of::<u64>().unwrap_err();
    assert_eq!(err.kind(), AssertionErrorKind::TypeMismatch);
    assert_eq!(
        err.to_string(),
        "Argument passed to Server::listen() is not instance of u64: \"text\""
    );
    //generic types are reported in full
    assert_eq!(
        message(chain.instance_of::<Vec<u8>>()),
        "Argument passed to Server::listen() is not instance of alloc::vec::Vec<u8>: \"text\""
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn type_of_uses_the_type_tag() {
    let value: Vec<String> = Vec::new();
    let chain = Assertion::at(&value, named_site());
    assert!(chain.type_of("Vec<String>").is_ok());
    assert_eq!(
        message(chain.type_of("HashMap")),
        "Argument passed to Server::listen() is not type of HashMap: []"
    );
    let number = 1u8;
    assert!(Assertion::at(&number, named_site()).type_of("u8").is_ok());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn unknown_predicates_are_unsupported() {
    let registry = PredicateRegistry::<str>::text();
    for subject in ["", "text", "   "] {
        let chain = Assertion::at(subject, named_site()).using(&registry);
        let err = chain.is("undefinedPredicateName").unwrap_err();
        assert_eq!(err.kind(), AssertionErrorKind::PredicateUnsupported);
        assert_eq!(
            err.to_string(),
            "Argument passed to Server::listen() has no support for checking undefinedPredicateName"
        );
        let err = chain.not("undefinedPredicateName").unwrap_err();
        assert_eq!(err.kind(), AssertionErrorKind::PredicateUnsupported);
    }
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn without_a_registry_every_predicate_is_unsupported() {
    let value = 1;
    let err = Assertion::at(&value, named_site())
        .is("positive")
        .unwrap_err();
    assert_eq!(err.kind(), AssertionErrorKind::PredicateUnsupported);
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn predicates_that_answer_wrong_fail() {
    let registry = PredicateRegistry::<i32>::ordered();
    let value = -3;
    let chain = Assertion::at(&value, named_site()).using(&registry);
    assert!(chain.is("negative").is_ok());
    assert!(chain.not("positive").is_ok());
    let err = chain.is("positive").unwrap_err();
    assert_eq!(err.kind(), AssertionErrorKind::PredicateFailed);
    assert_eq!(
        err.to_string(),
        "Argument passed to Server::listen() is not positive: -3"
    );
    assert_eq!(
        message(chain.not("negative")),
        "Argument passed to Server::listen() is negative: -3"
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn pattern_matches_regular_expressions() {
    let regex = Regex::new("^a+$").unwrap();
    assert!(Assertion::at("aaa", named_site()).pattern(&regex).is_ok());
    let err = Assertion::at("b", named_site()).pattern(&regex).unwrap_err();
    assert_eq!(err.kind(), AssertionErrorKind::PatternMismatch);
    assert_eq!(
        err.to_string(),
        "Argument passed to Server::listen() does not match /^a+$/: \"b\""
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn pattern_rejects_other_arguments() {
    for subject in ["aaa", "b", ""] {
        let err = Assertion::at(subject, named_site())
            .pattern(&"not-a-regex")
            .unwrap_err();
        assert_eq!(err.kind(), AssertionErrorKind::PatternType);
        assert_eq!(
            err.to_string(),
            "Argument passed to Server::listen() has no support for other than regular expressions: \"not-a-regex\""
        );
    }
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn prop_returns_a_chain_over_the_property() {
    let object: HashMap<&str, i32> = HashMap::from([("x", 5)]);
    let chain = Assertion::at(&object, named_site());
    let x = chain.prop("x").unwrap();
    assert_eq!(x.subject(), Some(&5));
    assert!(x.equals(&5).is_ok());
    assert_eq!(x.site(), chain.site());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn prop_on_a_non_object_fails() {
    let nothing: Option<BTreeMap<String, i32>> = None;
    let err = Assertion::at(&nothing, named_site())
        .prop("x")
        .unwrap_err();
    assert_eq!(err.kind(), AssertionErrorKind::PropertyAccess);
    assert_eq!(
        err.to_string(),
        "Argument passed to Server::listen() cannot read property \"x\" from non-object None"
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn missing_properties_are_absent() {
    let object = BTreeMap::from([("name".to_string(), "db".to_string())]);
    let chain = Assertion::at(&object, named_site());
    let port = chain.prop("port").unwrap();
    assert_eq!(port.subject(), None);
    assert_eq!(
        message(port.equals("5432")),
        "Argument passed to Server::listen() does not equal: <absent> !== \"5432\""
    );
    assert_eq!(
        message(port.min_length(1)),
        "Argument passed to Server::listen() length less than: <absent> < 1"
    );
    port.ignore_missing();
    assert!(port.equals("5432").is_ok());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn properties_of_an_absent_subject_cannot_be_read() {
    let config: HashMap<&str, HashMap<&str, u16>> = HashMap::new();
    let database = Assertion::at(&config, named_site()).prop("database").unwrap();
    let err = database.prop("port").unwrap_err();
    assert_eq!(err.kind(), AssertionErrorKind::PropertyAccess);
    assert_eq!(
        err.to_string(),
        "Argument passed to Server::listen() cannot read property \"port\" from non-object <absent>"
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn absent_subjects_satisfy_no_predicate() {
    let object: HashMap<String, String> = HashMap::new();
    let registry = PredicateRegistry::<String>::text();
    let name = Assertion::at(&object, named_site()).prop("name").unwrap();
    let name = name.using(&registry);
    assert_eq!(
        name.is("empty").unwrap_err().kind(),
        AssertionErrorKind::PredicateFailed
    );
    assert!(name.not("empty").is_ok());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn prop_on_an_ignored_chain_is_ignored() {
    let value: Option<Vec<i32>> = None;
    let chain = Assertion::at(&value, named_site());
    chain.ignore(&None);
    let child = chain.prop(&3usize).unwrap();
    assert!(child.is_ignored());
    assert!(child.equals(&1).is_ok());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn nested_properties() {
    let rows = vec![vec!["a", "b"], vec!["c"]];
    let chain = Assertion::at(&rows, named_site());
    chain
        .prop(&1usize)
        .unwrap()
        .length(1)
        .unwrap()
        .prop(&0usize)
        .unwrap()
        .equals(&"c")
        .unwrap();
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn macro_attributes_to_the_enclosing_function() {
    let value = 12;
    let err = crate::assert_that!(value).range(..=10).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Argument passed to macro_attributes_to_the_enclosing_function() value 12 not in range (-inf, 10]"
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn chains_compose_with_the_question_mark() {
    fn validate(name: &str) -> Result<(), AssertionError> {
        crate::assert_that!(*name)
            .min_length(1)?
            .max_length(8)?
            .pattern(&Regex::new("^[a-z]+$").unwrap())?;
        Ok(())
    }
    assert!(validate("worker").is_ok());
    assert_eq!(
        validate("Worker").unwrap_err().kind(),
        AssertionErrorKind::PatternMismatch
    );
    assert_eq!(
        validate("").unwrap_err().to_string(),
        "Argument passed to validate() length less than: 0 < 1"
    );
}
