//! Rule declarations and their parser.
//!
//! Grammar of the piped string form:
//!
//! ```text
//! RuleSet    := RuleDecl ('|' RuleDecl)*
//! RuleDecl   := RuleName (':' ParamList)?
//! ParamList  := Param (',' Param)*
//! RuleName   := [^|:]+   (surrounding whitespace trimmed)
//! Param      := [^,]*    (whitespace kept)
//! ```
//!
//! Names are trimmed but parameters are not, so `"in:a, b"` yields the
//! parameters `"a"` and `" b"`.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One parsed rule: a name plus positional string parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RuleSpecRepr")]
pub struct RuleSpec {
    name: String,
    parameters: SmallVec<[String; 2]>,
}

impl RuleSpec {
    /// Builds a rule from parts. Nothing is trimmed or split.
    pub fn new<I, S>(name: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// A rule without parameters.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: SmallVec::new(),
        }
    }

    /// Parses a single declaration such as `"min:3"`.
    ///
    /// Pipes are not special here; use [`RuleSet::parse`] for `a|b`.
    pub fn parse(decl: &str) -> Self {
        match decl.split_once(':') {
            Some((name, parameters)) => Self {
                name: name.trim().to_owned(),
                parameters: parameters.split(',').map(str::to_owned).collect(),
            },
            None => Self::named(decl.trim()),
        }
    }

    /// The rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All parameters in declaration order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// The parameter at `index`, if declared.
    pub fn parameter(&self, index: usize) -> Option<&str> {
        self.parameters.get(index).map(String::as_str)
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.parameters.is_empty() {
            write!(f, ":{}", self.parameters.join(","))?;
        }
        Ok(())
    }
}

impl FromStr for RuleSpec {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Accepts either `"min:3"` or `{"name": "min", "parameters": ["3"]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RuleSpecRepr {
    Decl(String),
    Parts {
        name: String,
        #[serde(default)]
        parameters: Vec<String>,
    },
}

impl From<RuleSpecRepr> for RuleSpec {
    fn from(repr: RuleSpecRepr) -> Self {
        match repr {
            RuleSpecRepr::Decl(decl) => Self::parse(&decl),
            RuleSpecRepr::Parts { name, parameters } => Self::new(name, parameters),
        }
    }
}

// ==================== RuleSet ====================

/// An ordered list of rules for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RuleSet(Vec<RuleSpec>);

impl RuleSet {
    /// Parses a piped declaration string.
    ///
    /// Empty pieces (`"required|"`) become rules with an empty name, which
    /// no check is registered for.
    pub fn parse(rules: &str) -> Self {
        Self(rules.split('|').map(RuleSpec::parse).collect())
    }

    /// Whether a rule with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|spec| spec.name() == name)
    }

    /// Iterates rules in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, RuleSpec> {
        self.0.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spec) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{spec}")?;
        }
        Ok(())
    }
}

impl FromStr for RuleSet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl FromIterator<RuleSpec> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleSpec>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RuleSet {
    type Item = RuleSpec;
    type IntoIter = std::vec::IntoIter<RuleSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a RuleSpec;
    type IntoIter = std::slice::Iter<'a, RuleSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ==================== Rules ====================

/// The rules declared for one field, in either accepted shape.
///
/// In the list form every string element is a single declaration: a bare
/// name has no parameters and pipes are not split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rules {
    /// `"required|email"`
    Piped(String),
    /// `["required", "min:3"]` or ready-made specs.
    List(Vec<RuleSpec>),
}

impl Rules {
    /// Normalizes either shape into a [`RuleSet`].
    pub fn to_rule_set(&self) -> RuleSet {
        match self {
            Self::Piped(rules) => RuleSet::parse(rules),
            Self::List(specs) => RuleSet(specs.clone()),
        }
    }
}

impl From<&str> for Rules {
    fn from(rules: &str) -> Self {
        Self::Piped(rules.to_owned())
    }
}

impl From<String> for Rules {
    fn from(rules: String) -> Self {
        Self::Piped(rules)
    }
}

impl From<Vec<RuleSpec>> for Rules {
    fn from(specs: Vec<RuleSpec>) -> Self {
        Self::List(specs)
    }
}

impl From<RuleSet> for Rules {
    fn from(set: RuleSet) -> Self {
        Self::List(set.0)
    }
}

impl From<Vec<&str>> for Rules {
    fn from(decls: Vec<&str>) -> Self {
        Self::List(decls.into_iter().map(RuleSpec::parse).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Rules {
    fn from(decls: [&str; N]) -> Self {
        Self::List(decls.into_iter().map(RuleSpec::parse).collect())
    }
}

// ==================== FieldRules ====================

/// Field paths mapped to their rules, evaluated in insertion order.
///
/// ```rust
/// use rulebook_validator::FieldRules;
///
/// let rules = FieldRules::new()
///     .field("email", "required|email")
///     .field("age", ["nullable", "min:18"]);
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRules(IndexMap<String, Rules>);

impl FieldRules {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, path: impl Into<String>, rules: impl Into<Rules>) -> Self {
        self.insert(path, rules);
        self
    }

    /// Adds or replaces the rules for `path`. A replaced field keeps its
    /// original position.
    pub fn insert(&mut self, path: impl Into<String>, rules: impl Into<Rules>) -> &mut Self {
        self.0.insert(path.into(), rules.into());
        self
    }

    /// Rules declared for `path`.
    pub fn get(&self, path: &str) -> Option<&Rules> {
        self.0.get(path)
    }

    /// Iterates `(path, rules)` in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Rules> {
        self.0.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, R: Into<Rules>> FromIterator<(K, R)> for FieldRules {
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(path, rules)| (path.into(), rules.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a FieldRules {
    type Item = (&'a String, &'a Rules);
    type IntoIter = indexmap::map::Iter<'a, String, Rules>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
