//! Rules and rule tables
//!
//! A rule literal is written either as a plain word (`"thou"`) or as a
//! slash-delimited pattern with an optional `i` flag (`"/(x|ch)$/i"`), with
//! code points spelled `\uXXXX`. [`normalize_pattern`] turns both forms into
//! `regex` crate syntax once, at build time. Replacement templates are parsed
//! into a [`Template`] at the same point so nothing is re-parsed per call.

use super::error::RuleError;
use regex::{Captures, Regex, Replacer};
use std::fmt;
use std::sync::OnceLock;

/// Translate a rule literal into `regex` crate syntax
///
/// - Plain literals become `(?i)^<escaped literal>$`
/// - `/body/` and `/body/i` literals keep their body, with `\uXXXX` rewritten
///   to `\x{XXXX}` and `i` mapped to a leading `(?i)`
///
/// # Examples
///
/// ```
/// use inflect::core::rule::normalize_pattern;
///
/// assert_eq!(normalize_pattern("thou").unwrap(), "(?i)^thou$");
/// assert_eq!(normalize_pattern("/s?$/i").unwrap(), "(?i)s?$");
/// assert_eq!(
///     normalize_pattern(r"/[^\u0000-\u007F]$/i").unwrap(),
///     r"(?i)[^\x{0000}-\x{007F}]$"
/// );
/// ```
pub fn normalize_pattern(literal: &str) -> Result<String, RuleError> {
    if literal.is_empty() {
        return Err(RuleError::EmptyPattern);
    }

    let Some(rest) = literal.strip_prefix('/') else {
        return Ok(format!("(?i)^{}$", regex::escape(literal)));
    };

    let Some(close) = rest.rfind('/') else {
        return Err(RuleError::MissingDelimiter {
            pattern: literal.to_string(),
        });
    };

    let (body, flags) = (&rest[..close], &rest[close + 1..]);
    let mut case_insensitive = false;
    for flag in flags.chars() {
        match flag {
            'i' => case_insensitive = true,
            other => {
                return Err(RuleError::UnsupportedFlag {
                    pattern: literal.to_string(),
                    flag: other,
                });
            }
        }
    }

    static UNICODE_ESCAPE: OnceLock<Regex> = OnceLock::new();
    let escapes = UNICODE_ESCAPE.get_or_init(|| {
        Regex::new(r"\\u([[:xdigit:]]{4})").expect("unicode escape pattern is valid")
    });
    let body = escapes.replace_all(body, r"\x{${1}}");

    if case_insensitive {
        Ok(format!("(?i){}", body))
    } else {
        Ok(body.into_owned())
    }
}

/// One piece of a parsed replacement template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied as-is
    Literal(String),
    /// Text of capture group `n` (`0` is the whole match)
    Group(usize),
}

/// A parsed replacement template
///
/// `$` followed by a single digit is a group reference; any other `$` is
/// literal text. `"$1es"` is group 1 followed by `"es"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a replacement template
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            let group = match (c, chars.peek().and_then(|next| next.to_digit(10))) {
                ('$', Some(digit)) => digit as usize,
                _ => {
                    literal.push(c);
                    continue;
                }
            };
            chars.next();
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Group(group));
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// The parsed segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Highest group index referenced, if any
    pub fn max_group(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Group(n) => Some(*n),
                Segment::Literal(_) => None,
            })
            .max()
    }

    /// True for the `$0` template used by uncountable patterns
    pub fn is_identity(&self) -> bool {
        self.segments == [Segment::Group(0)]
    }
}

impl Replacer for &Template {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut String) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => dst.push_str(text),
                // Groups that did not participate expand to nothing
                Segment::Group(n) => {
                    if let Some(m) = caps.get(*n) {
                        dst.push_str(m.as_str());
                    }
                }
            }
        }
    }
}

/// A compiled (pattern, replacement) rule
#[derive(Clone)]
pub struct Rule {
    source: String,
    replacement: String,
    regex: Regex,
    template: Template,
}

impl Rule {
    /// Normalize and compile a rule literal with its replacement template
    ///
    /// # Examples
    ///
    /// ```
    /// use inflect::core::rule::Rule;
    ///
    /// let rule = Rule::new("/(x|ch|ss|sh|zz)$/i", "$1es").unwrap();
    /// assert!(rule.is_match("box"));
    /// assert_eq!(rule.apply("box"), "boxes");
    /// ```
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, RuleError> {
        let normalized = normalize_pattern(pattern)?;
        let regex = Regex::new(&normalized).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let template = Template::parse(replacement);
        if let Some(group) = template.max_group() {
            let available = regex.captures_len() - 1;
            if group > available {
                return Err(RuleError::UnknownGroup {
                    template: replacement.to_string(),
                    group,
                    available,
                });
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            replacement: replacement.to_string(),
            regex,
            template,
        })
    }

    /// The literal as written in the rule data
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The replacement template as written in the rule data
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// The normalized pattern handed to the regex engine
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// The parsed replacement template
    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    /// Substitute the leftmost match in `word`
    pub fn apply(&self, word: &str) -> String {
        self.regex.replace(word, &self.template).into_owned()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("source", &self.source)
            .field("pattern", &self.pattern())
            .field("replacement", &self.replacement)
            .finish()
    }
}

/// Ordered, append-only rule list with last-wins priority
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; it takes priority over every rule already present
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Find the rule that applies to `word`
    ///
    /// Scans from the most recently pushed rule backward and stops at the
    /// first match.
    pub fn find(&self, word: &str) -> Option<&Rule> {
        self.rules.iter().rev().find(|rule| rule.is_match(word))
    }

    /// Rules in registration order (lowest priority first)
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
