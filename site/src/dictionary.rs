//! Translation dictionaries.
//!
//! Each language is a JSON tree of named strings embedded at compile time
//! from `locales/<code>.json`. Lookups use dotted paths (`hero.title`) and
//! never fail: a missing segment, or a leaf that isn't a non-empty string,
//! resolves to `None` and the caller leaves the element as it was.

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod dictionary_test;

use serde_json::Value;

use crate::error::DictionaryError;
use crate::i18n::Language;

const EN_JSON: &str = include_str!("../locales/en.json");
const MY_JSON: &str = include_str!("../locales/my.json");

/// Walk `path` through `tree`, one `.`-separated segment at a time.
#[must_use]
pub fn resolve<'a>(tree: &'a Value, path: &str) -> Option<&'a str> {
    path.split('.')
        .try_fold(tree, |node, segment| node.get(segment))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Every dotted path to a string leaf in `tree`, sorted.
#[must_use]
pub fn leaf_paths(tree: &Value) -> Vec<String> {
    fn walk(node: &Value, prefix: &str, out: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
                    walk(child, &path, out);
                }
            }
            Value::String(_) => out.push(prefix.to_owned()),
            _ => {}
        }
    }
    let mut out = Vec::new();
    walk(tree, "", &mut out);
    out.sort();
    out
}

/// Static, read-only translations for both supported languages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    en: Value,
    my: Value,
}

impl Dictionary {
    /// The dictionaries shipped with the page.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] if an embedded locale file is invalid.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_json(EN_JSON, MY_JSON)
    }

    /// Build from raw JSON documents.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] if either document is not a JSON object.
    pub fn from_json(en: &str, my: &str) -> Result<Self, DictionaryError> {
        Ok(Self { en: parse_tree(Language::En, en)?, my: parse_tree(Language::My, my)? })
    }

    #[must_use]
    pub fn tree(&self, lang: Language) -> &Value {
        match lang {
            Language::En => &self.en,
            Language::My => &self.my,
        }
    }

    #[must_use]
    pub fn resolve(&self, lang: Language, path: &str) -> Option<&str> {
        resolve(self.tree(lang), path)
    }

    /// Paths present in `lang` but missing from the other language.
    #[must_use]
    pub fn missing_in_other(&self, lang: Language) -> Vec<String> {
        let other = lang.toggled();
        leaf_paths(self.tree(lang))
            .into_iter()
            .filter(|path| self.resolve(other, path).is_none())
            .collect()
    }
}

fn parse_tree(lang: Language, raw: &str) -> Result<Value, DictionaryError> {
    let tree: Value =
        serde_json::from_str(raw).map_err(|source| DictionaryError::Parse { lang: lang.code(), source })?;
    if !tree.is_object() {
        return Err(DictionaryError::NotAnObject { lang: lang.code() });
    }
    Ok(tree)
}
