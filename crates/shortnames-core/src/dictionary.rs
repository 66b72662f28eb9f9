//! Abbreviation and given-name dictionaries.
//!
//! A [`Dictionary`] is an immutable pair of ordered rule lists. List order is
//! the only tie-breaker: the shortener always takes the first rule whose
//! phrase matches, never the longest one. To avoid scanning every rule for
//! every word, rules are indexed by their case-folded first word; each index
//! bucket keeps rule positions in ascending order so lookups still see rules
//! in list order.
//!
//! Dictionaries can be extended from TOML, YAML, or JSON files:
//!
//! ```toml
//! given_names = ["Jana", "Pawła"]
//!
//! [[abbreviations]]
//! phrase = "ulica"
//! abbreviation = "ul."
//!
//! [[abbreviations]]
//! phrase = "rodziny"
//! abbreviation = ""
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Format, Json, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::classifier::{TextClassifier, UnicodeClassifier};
use crate::dictionaries::abbreviations::ABBREVIATIONS;
use crate::dictionaries::given_names::GIVEN_NAMES;
use crate::error::{DictionaryError, DictionaryResult};

/// A phrase and the abbreviation that replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AbbreviationRule {
    /// One or more words, matched case-insensitively as a whole phrase.
    pub phrase: String,
    /// Replacement text. Empty means the phrase is omitted.
    #[serde(default)]
    pub abbreviation: String,
    /// Whether the phrase may be dropped from the shortest form.
    ///
    /// Every rule is currently droppable and the shortener does not consult
    /// this flag yet. It is carried so dictionaries can already mark phrases
    /// such as institution names that should survive in the shortest form.
    #[serde(default = "default_droppable")]
    pub droppable: bool,
}

const fn default_droppable() -> bool {
    true
}

impl AbbreviationRule {
    /// Create a droppable rule.
    pub fn new(phrase: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            abbreviation: abbreviation.into(),
            droppable: true,
        }
    }

    /// Whether this rule removes its phrase instead of abbreviating it.
    pub fn is_omission(&self) -> bool {
        self.abbreviation.is_empty()
    }

    /// Whether the phrase spans more than one word.
    pub fn is_multi_word(&self) -> bool {
        self.phrase.split_whitespace().nth(1).is_some()
    }
}

/// A given name recognized in "named after a person" constructs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct GivenNameRule {
    /// The name as it appears in street names (usually genitive).
    pub name: String,
}

impl GivenNameRule {
    /// Create a given-name rule.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// First character of the name, used for the abbreviated form.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

/// On-disk dictionary format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DictionaryFile {
    /// Abbreviation rules in priority order.
    pub abbreviations: Vec<AbbreviationRule>,
    /// Given names in priority order.
    pub given_names: Vec<GivenNameRule>,
}

impl DictionaryFile {
    /// Load a dictionary file, detecting the format from its extension.
    ///
    /// `.yaml`/`.yml` and `.json` are parsed accordingly; anything else is
    /// read as TOML.
    #[tracing::instrument]
    pub fn load(path: &Utf8Path) -> DictionaryResult<Self> {
        if !path.is_file() {
            return Err(DictionaryError::NotFound(path.to_path_buf()));
        }
        let figment = match path.extension() {
            Some("yaml" | "yml") => Figment::new().merge(Yaml::file_exact(path.as_str())),
            Some("json") => Figment::new().merge(Json::file_exact(path.as_str())),
            _ => Figment::new().merge(Toml::file_exact(path.as_str())),
        };
        let file: Self = figment
            .extract()
            .map_err(|e| DictionaryError::Load(Box::new(e)))?;
        tracing::debug!(
            abbreviations = file.abbreviations.len(),
            given_names = file.given_names.len(),
            "dictionary file loaded"
        );
        Ok(file)
    }
}

/// Rule positions keyed by the case-folded first word of each entry.
#[derive(Debug, Clone, Default)]
struct FirstWordIndex {
    buckets: HashMap<String, Vec<usize>>,
}

impl FirstWordIndex {
    fn build<'a, C, I>(entries: I, classifier: &C) -> Self
    where
        C: TextClassifier + ?Sized,
        I: IntoIterator<Item = &'a str>,
    {
        let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, entry) in entries.into_iter().enumerate() {
            let first_word: String = entry
                .chars()
                .take_while(|&c| classifier.is_alphanumeric(c))
                .collect();
            if first_word.is_empty() {
                // The shortener only tries rules at the start of a word.
                tracing::debug!(entry, "entry does not start with a word and can never match");
                continue;
            }
            buckets
                .entry(classifier.fold(&first_word))
                .or_default()
                .push(position);
        }
        Self { buckets }
    }

    fn get(&self, key: &str) -> &[usize] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Counts describing a [`Dictionary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DictionaryStats {
    /// Number of abbreviation rules.
    pub abbreviations: usize,
    /// Rules whose abbreviation is empty.
    pub omissions: usize,
    /// Rules whose phrase spans several words.
    pub multi_word: usize,
    /// Number of given names.
    pub given_names: usize,
}

/// Immutable, indexed abbreviation and given-name rules.
#[derive(Debug, Clone)]
pub struct Dictionary {
    abbreviations: Vec<AbbreviationRule>,
    given_names: Vec<GivenNameRule>,
    phrase_index: FirstWordIndex,
    name_index: FirstWordIndex,
}

impl Dictionary {
    /// Start assembling a dictionary. Built-in rules are included by default.
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::new()
    }

    /// Build a dictionary from rule lists, indexing with [`UnicodeClassifier`].
    pub fn from_rules(
        abbreviations: Vec<AbbreviationRule>,
        given_names: Vec<GivenNameRule>,
    ) -> DictionaryResult<Self> {
        Self::from_rules_with(abbreviations, given_names, &UnicodeClassifier)
    }

    /// Build a dictionary from rule lists, indexing with `classifier`.
    ///
    /// The shortener using this dictionary must classify characters the same
    /// way, otherwise index lookups can miss rules.
    pub fn from_rules_with<C: TextClassifier + ?Sized>(
        abbreviations: Vec<AbbreviationRule>,
        given_names: Vec<GivenNameRule>,
        classifier: &C,
    ) -> DictionaryResult<Self> {
        if let Some(index) = abbreviations.iter().position(|r| r.phrase.is_empty()) {
            return Err(DictionaryError::EmptyPhrase { index });
        }
        if let Some(index) = given_names.iter().position(|n| n.name.is_empty()) {
            return Err(DictionaryError::EmptyGivenName { index });
        }

        let phrase_index =
            FirstWordIndex::build(abbreviations.iter().map(|r| r.phrase.as_str()), classifier);
        let name_index =
            FirstWordIndex::build(given_names.iter().map(|n| n.name.as_str()), classifier);

        Ok(Self {
            abbreviations,
            given_names,
            phrase_index,
            name_index,
        })
    }

    /// All abbreviation rules in priority order.
    pub fn abbreviations(&self) -> &[AbbreviationRule] {
        &self.abbreviations
    }

    /// All given names in priority order.
    pub fn given_names(&self) -> &[GivenNameRule] {
        &self.given_names
    }

    /// Abbreviation rules whose first word folds to `key`, in priority order.
    pub fn phrase_candidates<'a>(
        &'a self,
        key: &str,
    ) -> impl Iterator<Item = &'a AbbreviationRule> + use<'a> {
        self.phrase_index
            .get(key)
            .iter()
            .map(move |&i| &self.abbreviations[i])
    }

    /// Given names that fold to `key`, in priority order.
    pub fn given_name_candidates<'a>(
        &'a self,
        key: &str,
    ) -> impl Iterator<Item = &'a GivenNameRule> + use<'a> {
        self.name_index
            .get(key)
            .iter()
            .map(move |&i| &self.given_names[i])
    }

    /// Abbreviation rules that could apply at `word`, in priority order.
    pub fn rules_for_word(&self, word: &str) -> Vec<&AbbreviationRule> {
        self.phrase_candidates(&UnicodeClassifier.fold(word)).collect()
    }

    /// Whether `word` is a known given name.
    pub fn is_given_name(&self, word: &str) -> bool {
        let key = UnicodeClassifier.fold(word);
        self.given_name_candidates(&key)
            .any(|n| UnicodeClassifier.fold(&n.name) == key)
    }

    /// Summary counts.
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            abbreviations: self.abbreviations.len(),
            omissions: self.abbreviations.iter().filter(|r| r.is_omission()).count(),
            multi_word: self
                .abbreviations
                .iter()
                .filter(|r| r.is_multi_word())
                .count(),
            given_names: self.given_names.len(),
        }
    }
}

/// Assembles a [`Dictionary`] from custom sources and the built-in data.
///
/// Custom entries are placed before the built-in ones, so a custom phrase
/// overrides a built-in rule with the same phrase.
#[derive(Debug)]
pub struct DictionaryBuilder {
    abbreviations: Vec<AbbreviationRule>,
    given_names: Vec<GivenNameRule>,
    include_builtin: bool,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryBuilder {
    /// Create a builder that includes the built-in rules.
    pub const fn new() -> Self {
        Self {
            abbreviations: Vec::new(),
            given_names: Vec::new(),
            include_builtin: true,
        }
    }

    /// Set whether the built-in rules are appended.
    pub const fn with_builtin(mut self, include: bool) -> Self {
        self.include_builtin = include;
        self
    }

    /// Append a single abbreviation rule.
    pub fn with_abbreviation(mut self, rule: AbbreviationRule) -> Self {
        self.abbreviations.push(rule);
        self
    }

    /// Append a single given name.
    pub fn with_given_name(mut self, name: impl Into<String>) -> Self {
        self.given_names.push(GivenNameRule::new(name));
        self
    }

    /// Append every entry of a dictionary file.
    pub fn with_file(mut self, file: DictionaryFile) -> Self {
        self.abbreviations.extend(file.abbreviations);
        self.given_names.extend(file.given_names);
        self
    }

    /// Build the dictionary, indexing with [`UnicodeClassifier`].
    pub fn build(self) -> DictionaryResult<Dictionary> {
        self.build_with(&UnicodeClassifier)
    }

    /// Build the dictionary, indexing with `classifier`.
    pub fn build_with<C: TextClassifier + ?Sized>(
        mut self,
        classifier: &C,
    ) -> DictionaryResult<Dictionary> {
        if self.include_builtin {
            self.abbreviations.extend(builtin_abbreviations());
            self.given_names.extend(builtin_given_names());
        }
        Dictionary::from_rules_with(self.abbreviations, self.given_names, classifier)
    }
}

fn builtin_abbreviations() -> impl Iterator<Item = AbbreviationRule> {
    ABBREVIATIONS
        .iter()
        .map(|&(phrase, abbreviation)| AbbreviationRule::new(phrase, abbreviation))
}

fn builtin_given_names() -> impl Iterator<Item = GivenNameRule> {
    GIVEN_NAMES.iter().map(|&name| GivenNameRule::new(name))
}

static BUILTIN: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::from_rules(
        builtin_abbreviations().collect(),
        builtin_given_names().collect(),
    )
    .expect("built-in dictionary is valid")
});

/// The built-in dictionary, compiled once per process.
pub fn builtin() -> &'static Dictionary {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn phrases<'a>(rules: impl Iterator<Item = &'a AbbreviationRule>) -> Vec<&'a str> {
        rules.map(|r| r.phrase.as_str()).collect()
    }

    #[test]
    fn builtin_counts_match_data() {
        let stats = builtin().stats();
        assert_eq!(stats.abbreviations, ABBREVIATIONS.len());
        assert_eq!(stats.given_names, GIVEN_NAMES.len());
        assert!(stats.omissions > 0);
        assert!(stats.multi_word > 0);
    }

    #[test]
    fn candidates_keep_list_order() {
        let dict = Dictionary::from_rules(
            vec![
                AbbreviationRule::new("zespół szkół", "ZS"),
                AbbreviationRule::new("ulica", "ul."),
                AbbreviationRule::new("zespół szkół zawodowych", "ZSZ"),
            ],
            Vec::new(),
        )
        .unwrap();

        assert_eq!(
            phrases(dict.phrase_candidates("zespół")),
            vec!["zespół szkół", "zespół szkół zawodowych"]
        );
        assert_eq!(phrases(dict.phrase_candidates("ulica")), vec!["ulica"]);
        assert_eq!(dict.phrase_candidates("aleja").count(), 0);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let rules = builtin().rules_for_word("ŚWIĘTEGO");
        assert_eq!(phrases(rules.into_iter()), vec!["świętego"]);
        assert!(builtin().is_given_name("JANA"));
        assert!(!builtin().is_given_name("Kowalskiego"));
    }

    #[test]
    fn phrases_not_starting_with_a_word_are_not_indexed() {
        let dict =
            Dictionary::from_rules(vec![AbbreviationRule::new("'s", "")], Vec::new()).unwrap();
        assert_eq!(dict.abbreviations().len(), 1);
        assert_eq!(dict.phrase_candidates("").count(), 0);
        assert_eq!(dict.phrase_candidates("s").count(), 0);
    }

    #[test]
    fn empty_phrase_is_rejected() {
        let err = Dictionary::from_rules(
            vec![AbbreviationRule::new("ulica", "ul."), AbbreviationRule::new("", "x")],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyPhrase { index: 1 }));
    }

    #[test]
    fn empty_given_name_is_rejected() {
        let err = Dictionary::from_rules(Vec::new(), vec![GivenNameRule::new("")]).unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyGivenName { index: 0 }));
    }

    #[test]
    fn builder_puts_custom_rules_first() {
        let dict = Dictionary::builder()
            .with_abbreviation(AbbreviationRule::new("ulica", "u."))
            .build()
            .unwrap();
        let rules = dict.rules_for_word("ulica");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].abbreviation, "u.");
        assert_eq!(rules[1].abbreviation, "ul.");
    }

    #[test]
    fn builder_without_builtin_is_empty() {
        let dict = Dictionary::builder().with_builtin(false).build().unwrap();
        assert_eq!(dict.stats(), DictionaryStats::default());
    }

    #[test]
    fn droppable_defaults_to_true() {
        let rule: AbbreviationRule =
            serde_json::from_str(r#"{"phrase": "plac", "abbreviation": "pl."}"#).unwrap();
        assert!(rule.droppable);

        let rule: AbbreviationRule =
            serde_json::from_str(r#"{"phrase": "rodziny"}"#).unwrap();
        assert!(rule.is_omission());
    }

    #[test]
    fn load_toml_dictionary_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("extra.toml");
        fs::write(
            &path,
            r#"given_names = ["Adama"]

[[abbreviations]]
phrase = "rynek"
abbreviation = "ryn."

[[abbreviations]]
phrase = "imienia"
abbreviation = ""
droppable = false
"#,
        )
        .unwrap();

        let path = camino::Utf8PathBuf::try_from(path).unwrap();
        let file = DictionaryFile::load(&path).unwrap();
        assert_eq!(file.abbreviations.len(), 2);
        assert_eq!(file.abbreviations[0], AbbreviationRule::new("rynek", "ryn."));
        assert!(!file.abbreviations[1].droppable);
        assert_eq!(file.given_names, vec![GivenNameRule::new("Adama")]);
    }

    #[test]
    fn load_yaml_and_json_dictionary_files() {
        let tmp = TempDir::new().unwrap();
        let yaml = tmp.path().join("extra.yaml");
        fs::write(
            &yaml,
            "abbreviations:\n  - phrase: rynek\n    abbreviation: ryn.\ngiven_names: [Adama]\n",
        )
        .unwrap();
        let json = tmp.path().join("extra.json");
        fs::write(
            &json,
            r#"{"abbreviations": [{"phrase": "rynek", "abbreviation": "ryn."}], "given_names": ["Adama"]}"#,
        )
        .unwrap();

        for path in [yaml, json] {
            let path = camino::Utf8PathBuf::try_from(path).unwrap();
            let file = DictionaryFile::load(&path).unwrap();
            assert_eq!(file.abbreviations, vec![AbbreviationRule::new("rynek", "ryn.")]);
            assert_eq!(file.given_names, vec![GivenNameRule::new("Adama")]);
        }
    }

    #[test]
    fn missing_dictionary_file_errors() {
        let result = DictionaryFile::load(Utf8Path::new("/nonexistent/shortnames/dict.toml"));
        assert!(matches!(result, Err(DictionaryError::NotFound(_))));
    }
}
