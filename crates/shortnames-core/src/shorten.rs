//! The name shortener.
//!
//! Produces two derived forms of a street or place name:
//!
//! - **short**: recognized words and phrases replaced by their abbreviations,
//!   given names reduced to an initial.
//! - **shortest**: additionally drops every abbreviated phrase and given
//!   name, keeping only the words no rule recognized. When that would leave
//!   no letter or digit, the last substitution is kept instead.
//!
//! # Algorithm
//!
//! A single left-to-right scan. Runs of non-alphanumeric characters are
//! copied to both outputs. At the start of each word the shortener tries, in
//! order:
//!
//! 1. the abbreviation rules, first match in dictionary order;
//! 2. the given names, skipping a name that is the last word of the input
//!    (a trailing given name is usually a surname);
//! 3. otherwise the word is copied verbatim to both outputs.
//!
//! A match must end on a word boundary: `"Streetwise"` never matches
//! `street`. When the input word starts with an uppercase letter the
//! abbreviation's first letter is uppercased too.
//!
//! A phrase that disappears from an output takes one adjacent whitespace
//! character with it: the one right after it in the input, or the one
//! before it when the phrase ends the name. Punctuation directly after a
//! dropped phrase stays where it is, keeping any whitespace before it.
//!
//! # Example
//!
//! ```
//! use shortnames_core::shorten_name;
//!
//! let name = shorten_name("Ulica Świętego Marcina Kowalskiego").unwrap();
//! assert_eq!(name.short, "Ul. Św. M. Kowalskiego");
//! assert_eq!(name.shortest, "Kowalskiego");
//! ```

use serde::{Deserialize, Serialize};

use crate::classifier::{TextClassifier, UnicodeClassifier};
use crate::dictionary::{self, AbbreviationRule, Dictionary, GivenNameRule};
use crate::error::{Field, ShortenError, ShortenResult};

/// Default length limit, in characters, for the input and both outputs.
pub const DEFAULT_MAX_CHARS: usize = 512;

/// Length limit applied to the input and both outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// At most this many characters; longer values fail with
    /// [`ShortenError::CapacityExceeded`].
    Limited(usize),
    /// No limit; outputs grow as needed.
    Unbounded,
}

impl Default for Capacity {
    fn default() -> Self {
        Self::Limited(DEFAULT_MAX_CHARS)
    }
}

impl Capacity {
    /// Build a capacity from optional config values.
    ///
    /// `unbounded` wins over `max_chars`; neither set gives the default.
    pub fn from_settings(max_chars: Option<usize>, unbounded: bool) -> Self {
        if unbounded {
            Self::Unbounded
        } else {
            Self::Limited(max_chars.unwrap_or(DEFAULT_MAX_CHARS))
        }
    }

    fn check(self, field: Field, len: usize) -> ShortenResult<()> {
        match self {
            Self::Limited(max) if len > max => {
                Err(ShortenError::CapacityExceeded { field, len, max })
            }
            _ => Ok(()),
        }
    }
}

/// The two shortened forms of a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenedName {
    /// Name with common words abbreviated.
    pub short: String,
    /// Name with common words dropped where possible.
    pub shortest: String,
}

/// One output under construction.
struct Output {
    text: String,
    len: usize,
    field: Field,
    capacity: Capacity,
    swallow_whitespace: bool,
}

impl Output {
    const fn new(field: Field, capacity: Capacity) -> Self {
        Self {
            text: String::new(),
            len: 0,
            field,
            capacity,
            swallow_whitespace: false,
        }
    }

    fn push_separator(&mut self, c: char, whitespace: bool) -> ShortenResult<()> {
        if std::mem::take(&mut self.swallow_whitespace) && whitespace {
            return Ok(());
        }
        self.text.push(c);
        self.len += 1;
        self.capacity.check(self.field, self.len)
    }

    fn push_str(&mut self, s: &str) -> ShortenResult<()> {
        if s.is_empty() {
            return Ok(());
        }
        self.swallow_whitespace = false;
        self.text.push_str(s);
        self.len += s.chars().count();
        self.capacity.check(self.field, self.len)
    }

    /// Record that a phrase was left out of this output.
    ///
    /// `next` is the input character right after the phrase.
    fn drop_phrase<C: TextClassifier>(&mut self, classifier: &C, next: Option<char>) {
        match next {
            Some(c) if classifier.is_whitespace(c) => self.swallow_whitespace = true,
            Some(_) => {}
            None => {
                if let Some(last) = self.text.chars().next_back()
                    && classifier.is_whitespace(last)
                {
                    self.text.pop();
                    self.len -= 1;
                }
            }
        }
    }

    fn has_content<C: TextClassifier>(&self, classifier: &C) -> bool {
        self.text.chars().any(|c| classifier.is_alphanumeric(c))
    }
}

/// Shortens names using a [`Dictionary`] and a [`TextClassifier`].
///
/// A shortener holds no mutable state; share one across threads freely.
#[derive(Debug, Clone)]
pub struct Shortener<'d, C = UnicodeClassifier> {
    dictionary: &'d Dictionary,
    classifier: C,
    capacity: Capacity,
}

impl Shortener<'static> {
    /// A shortener over the built-in dictionary with default settings.
    pub fn builtin() -> Self {
        Shortener::new(dictionary::builtin())
    }
}

impl<'d> Shortener<'d> {
    /// Create a shortener with the Unicode classifier and default capacity.
    pub const fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            classifier: UnicodeClassifier,
            capacity: Capacity::Limited(DEFAULT_MAX_CHARS),
        }
    }
}

impl<'d, C: TextClassifier> Shortener<'d, C> {
    /// Replace the character classifier.
    ///
    /// The dictionary should have been indexed with an equivalent classifier
    /// (see [`Dictionary::from_rules_with`]).
    pub fn with_classifier<C2: TextClassifier>(self, classifier: C2) -> Shortener<'d, C2> {
        Shortener {
            dictionary: self.dictionary,
            classifier,
            capacity: self.capacity,
        }
    }

    /// Set the length limit.
    pub fn with_capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// The dictionary in use.
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// The configured length limit.
    pub const fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Shorten a name.
    ///
    /// An empty name yields two empty forms.
    ///
    /// # Errors
    ///
    /// [`ShortenError::CapacityExceeded`] when the name or either form is
    /// longer than the configured [`Capacity`].
    #[tracing::instrument(skip(self), fields(name_len = name.len()))]
    pub fn shorten(&self, name: &str) -> ShortenResult<ShortenedName> {
        let mut out = ShortenedName::default();
        self.shorten_into(Some(name), &mut out)?;
        Ok(out)
    }

    /// Decode UTF-8 bytes and shorten the result.
    ///
    /// # Errors
    ///
    /// [`ShortenError::Encoding`] when `bytes` are not valid UTF-8, plus
    /// everything [`Shortener::shorten`] can return.
    pub fn shorten_bytes(&self, bytes: &[u8]) -> ShortenResult<ShortenedName> {
        let name = std::str::from_utf8(bytes)?;
        self.shorten(name)
    }

    /// Shorten a name into an existing [`ShortenedName`].
    ///
    /// With `None`, or when an error is returned, `out` is left untouched.
    pub fn shorten_into(&self, name: Option<&str>, out: &mut ShortenedName) -> ShortenResult<()> {
        let Some(name) = name else {
            tracing::trace!("no input, outputs left untouched");
            return Ok(());
        };

        let chars: Vec<char> = name.chars().collect();
        self.capacity.check(Field::Input, chars.len())?;

        let classifier = &self.classifier;
        let mut short = Output::new(Field::Short, self.capacity);
        let mut shortest = Output::new(Field::Shortest, self.capacity);
        let mut unabbreviated = 0usize;
        let mut last_kept: Option<String> = None;
        let mut pos = 0;

        while pos < chars.len() {
            let c = chars[pos];
            if !classifier.is_alphanumeric(c) {
                let whitespace = classifier.is_whitespace(c);
                short.push_separator(c, whitespace)?;
                shortest.push_separator(c, whitespace)?;
                pos += 1;
                continue;
            }

            let word_end = self.word_end(&chars, pos);
            let key = classifier.fold(&chars[pos..word_end].iter().collect::<String>());

            if let Some((rule, end)) = self.match_phrase(&chars, pos, &key) {
                let abbreviation = self.capitalize(&rule.abbreviation, classifier.is_uppercase(c));
                tracing::trace!(phrase = %rule.phrase, %abbreviation, "phrase abbreviated");
                pos = end;

                let next = chars.get(pos).copied();
                if abbreviation.is_empty() {
                    short.drop_phrase(classifier, next);
                } else {
                    short.push_str(&abbreviation)?;
                }

                // The whole name was one phrase: keep it in the shortest form.
                if pos == chars.len() && unabbreviated == 0 && !abbreviation.is_empty() {
                    shortest.push_str(&abbreviation)?;
                } else {
                    shortest.drop_phrase(classifier, next);
                }

                if !abbreviation.is_empty() {
                    last_kept = Some(abbreviation);
                }
                continue;
            }

            if let Some((given, initial, end)) = self.match_given_name(&chars, pos, &key) {
                tracing::trace!(name = %given.name, "given name abbreviated");
                pos = end;

                let mut abbreviation = String::with_capacity(initial.len_utf8() + 1);
                abbreviation.push(initial);
                abbreviation.push('.');
                short.push_str(&abbreviation)?;
                shortest.drop_phrase(classifier, chars.get(pos).copied());
                last_kept = Some(abbreviation);
                continue;
            }

            let word: String = chars[pos..word_end].iter().collect();
            short.push_str(&word)?;
            shortest.push_str(&word)?;
            unabbreviated += 1;
            pos = word_end;
        }

        if short.has_content(classifier)
            && !shortest.has_content(classifier)
            && let Some(kept) = last_kept
        {
            tracing::trace!(%kept, "keeping last substitution in shortest form");
            shortest.text = kept;
        }

        out.short = short.text;
        out.shortest = shortest.text;
        Ok(())
    }

    fn word_end(&self, chars: &[char], start: usize) -> usize {
        chars[start..]
            .iter()
            .position(|&c| !self.classifier.is_alphanumeric(c))
            .map_or(chars.len(), |offset| start + offset)
    }

    /// Match `pattern` case-insensitively at `pos`, ending on a word boundary.
    ///
    /// Returns the input position just past the match.
    fn match_at(&self, pattern: &str, chars: &[char], pos: usize) -> Option<usize> {
        let mut end = pos;
        for p in pattern.chars() {
            let &c = chars.get(end)?;
            if !self.classifier.chars_eq_ignore_case(p, c) {
                return None;
            }
            end += 1;
        }
        match chars.get(end) {
            Some(&next) if self.classifier.is_alphanumeric(next) => None,
            _ => Some(end),
        }
    }

    fn match_phrase(
        &self,
        chars: &[char],
        pos: usize,
        key: &str,
    ) -> Option<(&'d AbbreviationRule, usize)> {
        self.dictionary
            .phrase_candidates(key)
            .find_map(|rule| Some((rule, self.match_at(&rule.phrase, chars, pos)?)))
    }

    fn match_given_name(
        &self,
        chars: &[char],
        pos: usize,
        key: &str,
    ) -> Option<(&'d GivenNameRule, char, usize)> {
        self.dictionary.given_name_candidates(key).find_map(|name| {
            let end = self.match_at(&name.name, chars, pos)?;
            if self.is_last_word(&chars[end..]) {
                return None;
            }
            Some((name, name.initial()?, end))
        })
    }

    fn is_last_word(&self, rest: &[char]) -> bool {
        !rest.iter().any(|&c| self.classifier.is_alphanumeric(c))
    }

    fn capitalize(&self, abbreviation: &str, capital: bool) -> String {
        let mut chars = abbreviation.chars();
        match chars.next() {
            Some(first) if capital && !self.classifier.is_uppercase(first) => {
                let mut out = self.classifier.to_uppercase(first);
                out.extend(chars);
                out
            }
            _ => abbreviation.to_string(),
        }
    }
}

/// Shorten a name with the built-in dictionary and default settings.
///
/// # Errors
///
/// [`ShortenError::CapacityExceeded`] for names longer than
/// [`DEFAULT_MAX_CHARS`].
pub fn shorten_name(name: &str) -> ShortenResult<ShortenedName> {
    Shortener::builtin().shorten(name)
}
