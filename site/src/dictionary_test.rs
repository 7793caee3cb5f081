use serde_json::json;

use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn resolves_nested_leaf() {
    let tree = json!({"nav": {"home": "Home"}});
    assert_eq!(resolve(&tree, "nav.home"), Some("Home"));
}

#[test]
fn missing_leaf_is_none() {
    let tree = json!({"nav": {"home": "Home"}});
    assert_eq!(resolve(&tree, "nav.about"), None);
}

#[test]
fn missing_intermediate_is_none() {
    let tree = json!({"nav": {"home": "Home"}});
    assert_eq!(resolve(&tree, "footer.made.by"), None);
}

#[test]
fn path_through_a_string_is_none() {
    let tree = json!({"nav": {"home": "Home"}});
    assert_eq!(resolve(&tree, "nav.home.extra"), None);
}

#[test]
fn object_leaf_is_none() {
    let tree = json!({"nav": {"home": "Home"}});
    assert_eq!(resolve(&tree, "nav"), None);
}

#[test]
fn empty_string_is_none() {
    let tree = json!({"hero": {"badge": ""}});
    assert_eq!(resolve(&tree, "hero.badge"), None);
}

#[test]
fn empty_path_is_none() {
    let tree = json!({"": "odd"});
    assert_eq!(resolve(&json!({"a": "b"}), ""), None);
    assert_eq!(resolve(&tree, ""), Some("odd"));
}

// =============================================================
// leaf_paths
// =============================================================

#[test]
fn leaf_paths_lists_string_leaves_only() {
    let tree = json!({"a": {"b": "x", "c": {"d": "y"}}, "n": 3, "e": "z"});
    assert_eq!(leaf_paths(&tree), vec!["a.b", "a.c.d", "e"]);
}

// =============================================================
// Dictionary
// =============================================================

#[test]
fn embedded_dictionaries_load() {
    let dict = Dictionary::embedded().unwrap();
    assert_eq!(dict.resolve(Language::En, "nav.home"), Some("Home"));
    assert_eq!(dict.resolve(Language::My, "nav.home"), Some("ပင်မ"));
}

#[test]
fn embedded_titles_contain_markup() {
    let dict = Dictionary::embedded().unwrap();
    for lang in [Language::En, Language::My] {
        let title = dict.resolve(lang, "hero.title").unwrap();
        assert!(title.contains("<span class=\"gradient-text\">"), "{lang:?}: {title}");
    }
}

#[test]
fn every_english_key_exists_in_burmese() {
    let dict = Dictionary::embedded().unwrap();
    assert_eq!(dict.missing_in_other(Language::En), Vec::<String>::new());
}

#[test]
fn every_burmese_key_exists_in_english() {
    let dict = Dictionary::embedded().unwrap();
    assert_eq!(dict.missing_in_other(Language::My), Vec::<String>::new());
}

#[test]
fn missing_in_other_reports_gaps() {
    let dict = Dictionary::from_json(r#"{"a": "x", "b": "y"}"#, r#"{"a": "x"}"#).unwrap();
    assert_eq!(dict.missing_in_other(Language::En), vec!["b"]);
    assert!(dict.missing_in_other(Language::My).is_empty());
}

#[test]
fn invalid_json_names_language() {
    let err = Dictionary::from_json("{}", "{").unwrap_err();
    assert!(matches!(err, DictionaryError::Parse { lang: "my", .. }));
}

#[test]
fn non_object_root_is_rejected() {
    let err = Dictionary::from_json("[]", "{}").unwrap_err();
    assert!(matches!(err, DictionaryError::NotAnObject { lang: "en" }));
}

#[test]
fn default_dictionary_resolves_nothing() {
    let dict = Dictionary::default();
    assert_eq!(dict.resolve(Language::En, "nav.home"), None);
}
