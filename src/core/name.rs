//! core::name
//!
//! Hierarchical configuration property names.
//!
//! # Overview
//!
//! A [`PropertyName`] is an ordered list of elements such as `server.port` or
//! `servers[0].host`. Named elements are separated by `.` and indexed elements
//! are wrapped in brackets.
//!
//! Every element can be rendered in several [`Form`]s:
//! - **Original**: the text as it was supplied
//! - **Dashed**: lower-case, keeping alphanumerics and `-`
//! - **Uniform**: lower-case, alphanumerics only
//!
//! Two names are equal when their elements are equal in uniform form, so
//! `server.command-line-args` and `server.commandlineargs` refer to the same
//! property.
//!
//! # Parsing
//!
//! - [`PropertyName::of`] is strict and only accepts canonical names.
//! - [`PropertyName::adapt`] is lenient and converts names from foreign
//!   conventions (for example environment variables) using a separator and an
//!   optional per-element rewrite.
//!
//! # Example
//!
//! ```
//! use propmap::core::name::{Form, PropertyName};
//!
//! let name = PropertyName::of("servers[0].host-name").unwrap();
//! assert_eq!(name.number_of_elements(), 3);
//! assert_eq!(name.element(1, Form::Original), "0");
//! assert_eq!(name.element(2, Form::Uniform), "hostname");
//! assert_eq!(name.to_string(), "servers[0].host-name");
//!
//! assert!(PropertyName::of("Server.Port").is_err());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from property name parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("invalid property name '{name}': {reason}")]
    Invalid { name: String, reason: String },

    #[error("element value '{value}' must not contain multiple elements")]
    MultipleElements { value: String },
}

impl NameError {
    fn invalid(name: &str, reason: impl Into<String>) -> Self {
        NameError::Invalid {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Rendering form of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// The element exactly as supplied (invalid characters dropped for
    /// non-uniform elements, case preserved).
    Original,
    /// Lower-case with alphanumerics and dashes.
    Dashed,
    /// Lower-case alphanumerics only.
    Uniform,
}

/// Classification of a parsed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Only `a-z` and `0-9`.
    Uniform,
    /// Uniform characters plus at least one `-`.
    Dashed,
    /// Contains characters outside the canonical set. Only produced by `adapt`.
    NonUniform,
    /// Bracketed with non-numeric content, e.g. `[key]`.
    Indexed,
    /// Bracketed with all-digit content, e.g. `[0]`.
    NumericIndex,
}

impl ElementKind {
    /// Whether the element was written in brackets.
    pub fn is_indexed(self) -> bool {
        matches!(self, ElementKind::Indexed | ElementKind::NumericIndex)
    }

    fn of_named(value: &str) -> Self {
        let mut kind = ElementKind::Uniform;
        for (i, ch) in value.chars().enumerate() {
            if !is_valid_char(ch, i) {
                return ElementKind::NonUniform;
            }
            if ch == '-' {
                kind = ElementKind::Dashed;
            }
        }
        kind
    }

    fn of_index(content: &str) -> Self {
        if is_number(content) {
            ElementKind::NumericIndex
        } else {
            ElementKind::Indexed
        }
    }
}

/// Whether `ch` may appear at position `index` of a canonical named element.
fn is_valid_char(ch: char, index: usize) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || (index != 0 && ch == '-')
}

/// Keep the characters of a non-uniform value that are valid at their output
/// position, optionally lower-casing them and keeping `_`.
fn retain_valid(value: &str, lowercase: bool, keep_underscore: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        let lower = ch.to_ascii_lowercase();
        if (keep_underscore && ch == '_') || is_valid_char(lower, out.len()) {
            out.push(if lowercase { lower } else { ch });
        }
    }
    out
}

/// Whether `value` is a non-empty run of ASCII digits.
pub fn is_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone)]
struct Element {
    value: String,
    kind: ElementKind,
}

impl Element {
    fn named(value: impl Into<String>) -> Self {
        let value = value.into();
        let kind = ElementKind::of_named(&value);
        Self { value, kind }
    }

    fn indexed(content: impl Into<String>) -> Self {
        let value = content.into();
        let kind = ElementKind::of_index(&value);
        Self { value, kind }
    }

    fn render(&self, form: Form) -> Cow<'_, str> {
        if self.kind.is_indexed() {
            return Cow::Borrowed(&self.value);
        }
        match form {
            Form::Original if self.kind != ElementKind::NonUniform => Cow::Borrowed(&self.value),
            Form::Original => Cow::Owned(retain_valid(&self.value, false, true)),
            Form::Dashed if self.kind != ElementKind::NonUniform => Cow::Borrowed(&self.value),
            Form::Dashed => Cow::Owned(retain_valid(&self.value, true, false)),
            Form::Uniform if self.kind == ElementKind::Uniform => Cow::Borrowed(&self.value),
            Form::Uniform => Cow::Owned(
                self.value
                    .chars()
                    .filter(|ch| ch.is_ascii_alphanumeric())
                    .map(|ch| ch.to_ascii_lowercase())
                    .collect(),
            ),
        }
    }

    fn matches(&self, other: &Element) -> bool {
        match (self.kind.is_indexed(), other.kind.is_indexed()) {
            (true, true) => self.value == other.value,
            (false, false) => self.render(Form::Uniform) == other.render(Form::Uniform),
            _ => false,
        }
    }
}

/// A validated hierarchical configuration property name.
///
/// Names are immutable; operations such as [`append`](Self::append) and
/// [`chop`](Self::chop) return new names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PropertyName {
    elements: Vec<Element>,
}

impl PropertyName {
    /// The name with no elements.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a canonical property name.
    ///
    /// # Errors
    ///
    /// Returns `NameError::Invalid` if the name contains upper-case or other
    /// non-canonical characters, empty elements, or unbalanced brackets.
    pub fn of(name: &str) -> Result<Self, NameError> {
        if name.is_empty() {
            return Ok(Self::empty());
        }
        if name.starts_with('.') || name.ends_with('.') {
            return Err(NameError::invalid(name, "must not start or end with '.'"));
        }

        let mut elements = Vec::new();
        let mut current = String::new();
        let mut after_index = false;
        let mut after_dot = false;
        let mut chars = name.chars();

        while let Some(ch) = chars.next() {
            match ch {
                '[' => {
                    if after_dot {
                        return Err(NameError::invalid(name, "index must not follow '.'"));
                    }
                    if !current.is_empty() {
                        elements.push(Element::named(std::mem::take(&mut current)));
                    }
                    let mut content = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        match c {
                            ']' => {
                                closed = true;
                                break;
                            }
                            '[' => return Err(NameError::invalid(name, "nested '['")),
                            _ => content.push(c),
                        }
                    }
                    if !closed {
                        return Err(NameError::invalid(name, "unclosed '['"));
                    }
                    if content.is_empty() {
                        return Err(NameError::invalid(name, "empty index"));
                    }
                    elements.push(Element::indexed(content));
                    after_index = true;
                    after_dot = false;
                }
                ']' => return Err(NameError::invalid(name, "unbalanced ']'")),
                '.' => {
                    if !current.is_empty() {
                        elements.push(Element::named(std::mem::take(&mut current)));
                    } else if !after_index {
                        return Err(NameError::invalid(name, "empty element"));
                    }
                    after_index = false;
                    after_dot = true;
                }
                _ => {
                    if after_index {
                        return Err(NameError::invalid(name, "expected '.' or '[' after ']'"));
                    }
                    if !is_valid_char(ch, current.chars().count()) {
                        return Err(NameError::invalid(
                            name,
                            format!("invalid character '{ch}'"),
                        ));
                    }
                    current.push(ch);
                    after_dot = false;
                }
            }
        }
        if !current.is_empty() {
            elements.push(Element::named(current));
        }

        Ok(Self { elements })
    }

    /// Parse a canonical property name, returning `None` if it is invalid.
    pub fn of_if_valid(name: &str) -> Option<Self> {
        Self::of(name).ok()
    }

    /// Check whether `name` is a valid canonical property name.
    pub fn is_valid(name: &str) -> bool {
        Self::of(name).is_ok()
    }

    /// Adapt a name from a foreign convention, splitting on `separator`.
    ///
    /// Bracketed sections are kept as indexed elements. Empty segments are
    /// skipped, as are segments with no valid character at all. Other
    /// characters outside the canonical set are tolerated and produce
    /// non-uniform elements.
    ///
    /// # Errors
    ///
    /// Returns an error on unbalanced brackets or when a segment contains
    /// `.` (which would describe more than one element).
    pub fn adapt(source: &str, separator: char) -> Result<Self, NameError> {
        Self::adapt_elements(source, separator, identity, false)
    }

    /// Adapt a name, rewriting every named segment with `processor` first.
    ///
    /// The rewritten value must describe exactly one element. A processor may
    /// turn a segment into an index by returning it wrapped in brackets. A
    /// rewritten value with no valid character is an error.
    ///
    /// # Example
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use propmap::core::name::PropertyName;
    ///
    /// fn lower(value: &str) -> Cow<'_, str> {
    ///     Cow::Owned(value.to_ascii_lowercase())
    /// }
    ///
    /// let name = PropertyName::adapt_with("SERVER_PORT", '_', lower).unwrap();
    /// assert_eq!(name.to_string(), "server.port");
    /// ```
    pub fn adapt_with<F>(source: &str, separator: char, processor: F) -> Result<Self, NameError>
    where
        F: Fn(&str) -> Cow<'_, str>,
    {
        Self::adapt_elements(source, separator, processor, true)
    }

    fn adapt_elements<F>(
        source: &str,
        separator: char,
        processor: F,
        strict: bool,
    ) -> Result<Self, NameError>
    where
        F: Fn(&str) -> Cow<'_, str>,
    {
        let mut elements = Vec::new();
        let mut current = String::new();
        let mut chars = source.chars();

        while let Some(ch) = chars.next() {
            if ch == '[' {
                push_adapted(&mut elements, &mut current, &processor, strict)?;
                let mut content = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    match c {
                        ']' => {
                            closed = true;
                            break;
                        }
                        '[' => return Err(NameError::invalid(source, "nested '['")),
                        _ => content.push(c),
                    }
                }
                if !closed {
                    return Err(NameError::invalid(source, "unclosed '['"));
                }
                if !content.is_empty() {
                    elements.push(Element::indexed(content));
                }
            } else if ch == ']' {
                return Err(NameError::invalid(source, "unbalanced ']'"));
            } else if ch == separator {
                push_adapted(&mut elements, &mut current, &processor, strict)?;
            } else {
                current.push(ch);
            }
        }
        push_adapted(&mut elements, &mut current, &processor, strict)?;

        Ok(Self { elements })
    }

    /// Number of elements in the name.
    pub fn number_of_elements(&self) -> usize {
        self.elements.len()
    }

    /// Whether the name has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Render the element at `index` in the given form.
    ///
    /// Indexed elements render as their content without brackets in every
    /// form.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn element(&self, index: usize, form: Form) -> Cow<'_, str> {
        self.elements[index].render(form)
    }

    /// Render the last element, or an empty string for the empty name.
    pub fn last_element(&self, form: Form) -> Cow<'_, str> {
        self.elements
            .last()
            .map(|e| e.render(form))
            .unwrap_or(Cow::Borrowed(""))
    }

    /// Kind of the element at `index`, if present.
    pub fn element_kind(&self, index: usize) -> Option<ElementKind> {
        self.elements.get(index).map(|e| e.kind)
    }

    /// Whether the element at `index` is indexed.
    pub fn is_indexed(&self, index: usize) -> bool {
        self.element_kind(index).is_some_and(ElementKind::is_indexed)
    }

    /// Whether the element at `index` is an all-digit index.
    pub fn is_numeric_index(&self, index: usize) -> bool {
        self.element_kind(index) == Some(ElementKind::NumericIndex)
    }

    /// Whether the last element is indexed.
    pub fn is_last_element_indexed(&self) -> bool {
        self.elements
            .last()
            .is_some_and(|e| e.kind.is_indexed())
    }

    /// Whether this name is a strict prefix of `other`.
    ///
    /// A name is never its own ancestor. The empty name is an ancestor of
    /// every non-empty name.
    pub fn is_ancestor_of(&self, other: &PropertyName) -> bool {
        self.elements.len() < other.elements.len() && self.is_prefix_of(other)
    }

    /// Whether this name is the immediate parent of `other`.
    pub fn is_parent_of(&self, other: &PropertyName) -> bool {
        self.elements.len() + 1 == other.elements.len() && self.is_prefix_of(other)
    }

    fn is_prefix_of(&self, other: &PropertyName) -> bool {
        self.elements
            .iter()
            .zip(&other.elements)
            .all(|(a, b)| a.matches(b))
    }

    /// The name without its last element. The parent of the empty name is
    /// the empty name.
    pub fn parent(&self) -> PropertyName {
        self.chop(self.elements.len().saturating_sub(1))
    }

    /// The first `size` elements of this name.
    pub fn chop(&self, size: usize) -> PropertyName {
        Self {
            elements: self.elements.iter().take(size).cloned().collect(),
        }
    }

    /// The elements from `offset` onwards.
    pub fn sub_name(&self, offset: usize) -> PropertyName {
        Self {
            elements: self.elements.iter().skip(offset).cloned().collect(),
        }
    }

    /// Append a canonical suffix such as `port` or `[0].host`.
    ///
    /// # Errors
    ///
    /// Returns an error if `suffix` is not a valid canonical name.
    pub fn append(&self, suffix: &str) -> Result<PropertyName, NameError> {
        let suffix = Self::of(suffix)?;
        let mut elements = self.elements.clone();
        elements.extend(suffix.elements);
        Ok(Self { elements })
    }
}

/// Identity rewrite for [`PropertyName::adapt`].
fn identity(value: &str) -> Cow<'_, str> {
    Cow::Borrowed(value)
}

fn push_adapted<F>(
    elements: &mut Vec<Element>,
    current: &mut String,
    processor: &F,
    strict: bool,
) -> Result<(), NameError>
where
    F: Fn(&str) -> Cow<'_, str>,
{
    if current.is_empty() {
        return Ok(());
    }
    let raw = std::mem::take(current);
    let value = processor(&raw);
    if value.is_empty() {
        return Ok(());
    }
    elements.extend(single_element(&value, strict)?);
    Ok(())
}

/// Parse a rewritten segment that must form exactly one element.
///
/// A named value without any valid character is dropped, or rejected when
/// `strict`.
fn single_element(value: &str, strict: bool) -> Result<Option<Element>, NameError> {
    if let Some(content) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        if content.is_empty() || content.contains(['[', ']']) {
            return Err(NameError::invalid(value, "malformed index"));
        }
        return Ok(Some(Element::indexed(content)));
    }
    if value.contains('.') {
        return Err(NameError::MultipleElements {
            value: value.to_string(),
        });
    }
    if value.contains(['[', ']']) {
        return Err(NameError::invalid(value, "unbalanced brackets"));
    }
    let element = Element::named(value);
    if element.render(Form::Dashed).is_empty() {
        if strict {
            return Err(NameError::invalid(value, "no valid characters"));
        }
        return Ok(None);
    }
    Ok(Some(element))
}

impl PartialEq for PropertyName {
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len() && self.is_prefix_of(other)
    }
}

impl Eq for PropertyName {}

impl Hash for PropertyName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.len().hash(state);
        for element in &self.elements {
            element.kind.is_indexed().hash(state);
            element.render(Form::Uniform).hash(state);
        }
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if element.kind.is_indexed() {
                write!(f, "[{}]", element.value)?;
            } else {
                if i > 0 {
                    f.write_str(".")?;
                }
                f.write_str(&element.render(Form::Dashed))?;
            }
        }
        Ok(())
    }
}

impl FromStr for PropertyName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl TryFrom<String> for PropertyName {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::of(&s)
    }
}

impl From<PropertyName> for String {
    fn from(name: PropertyName) -> Self {
        name.to_string()
    }
}
