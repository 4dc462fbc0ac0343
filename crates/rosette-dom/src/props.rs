//! Prop values and the ordered prop map carried by descriptors.

use crate::element::Node;
use crate::event::EventHandler;
use indexmap::IndexMap;

/// Reserved prop holding the ordered child sequence.
pub const CHILDREN: &str = "children";

/// Reserved config entry extracted onto the descriptor instead of the props.
pub const KEY: &str = "key";

/// A single prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Handler(EventHandler),
    Children(Vec<Node>),
}

impl PropValue {
    /// Truthiness as the host scripting language sees it: null, `false`,
    /// `0`, `NaN` and `""` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Handler(_) | PropValue::Children(_) => true,
        }
    }

    /// String form used for a markup attribute. `None` for values that have
    /// no attribute form (handlers, children).
    pub fn to_attribute_value(&self) -> Option<String> {
        match self {
            PropValue::Null => Some("null".to_string()),
            PropValue::Bool(b) => Some(b.to_string()),
            PropValue::Number(n) => Some(format_number(*n)),
            PropValue::Str(s) => Some(s.clone()),
            PropValue::Handler(_) | PropValue::Children(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            PropValue::Handler(handler) => Some(handler),
            _ => None,
        }
    }

    pub fn as_children(&self) -> Option<&[Node]> {
        match self {
            PropValue::Children(children) => Some(children),
            _ => None,
        }
    }
}

/// Stringify a number the way the host would: the shortest digits that
/// round-trip, positional between `1e-7` and `1e21`, exponent form outside.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        return format!("{sign}Infinity");
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e300`.
    let scientific = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{n}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{n}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exp_sign = if point - 1 < 0 { '-' } else { '+' };
        let exp = (point - 1).abs();
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{exp}")
        } else {
            format!("{first}.{rest}e{exp_sign}{exp}")
        }
    };
    format!("{sign}{body}")
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(f64::from(value))
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Number(f64::from(value))
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<EventHandler> for PropValue {
    fn from(handler: EventHandler) -> Self {
        PropValue::Handler(handler)
    }
}

impl From<Vec<Node>> for PropValue {
    fn from(children: Vec<Node>) -> Self {
        PropValue::Children(children)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropValue::Null, Into::into)
    }
}

/// Insertion-ordered prop map.
///
/// The `children` entry is kept as a sequence: inserting a scalar under
/// `children` wraps it into a one-element sequence, and inserting null
/// removes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: IndexMap<String, PropValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a prop, keeping its original position on replace.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        let name = name.into();
        let value = value.into();
        if name == CHILDREN {
            match normalize_children(value) {
                Some(children) => {
                    self.entries.insert(name, PropValue::Children(children));
                }
                None => {
                    self.entries.shift_remove(CHILDREN);
                }
            }
            return;
        }
        self.entries.insert(name, value);
    }

    /// Builder form of [`Props::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropValue::as_str)
    }

    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(PropValue::as_number)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(PropValue::as_bool)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        self.entries.shift_remove(name)
    }

    /// The child sequence; empty when no children were given.
    pub fn children(&self) -> &[Node] {
        self.get(CHILDREN)
            .and_then(PropValue::as_children)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = indexmap::map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (name, value) in iter {
            props.insert(name, value);
        }
        props
    }
}

fn normalize_children(value: PropValue) -> Option<Vec<Node>> {
    match value {
        PropValue::Children(children) => Some(children),
        PropValue::Null => None,
        PropValue::Str(s) => Some(vec![Node::Text(s)]),
        PropValue::Number(n) => Some(vec![Node::Number(n)]),
        PropValue::Bool(b) => Some(vec![Node::Text(b.to_string())]),
        PropValue::Handler(_) => {
            tracing::warn!("a handler cannot be used as children, ignored");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!PropValue::Null.is_truthy());
        assert!(!PropValue::Bool(false).is_truthy());
        assert!(!PropValue::Number(0.0).is_truthy());
        assert!(!PropValue::Number(f64::NAN).is_truthy());
        assert!(!PropValue::Str(String::new()).is_truthy());

        assert!(PropValue::Bool(true).is_truthy());
        assert!(PropValue::Number(-1.0).is_truthy());
        assert!(PropValue::Str("0".into()).is_truthy());
        assert!(PropValue::Children(Vec::new()).is_truthy());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(123.456), "123.456");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_number_large_and_small() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(9.3e18), "9300000000000000000");
        assert_eq!(format_number(-1e20), "-100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e300), "1.5e+300");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-1.25e-9), "-1.25e-9");
    }

    #[test]
    fn test_insert_keeps_order_on_replace() {
        let mut props = Props::new().with("id", "a").with("class", "b");
        props.insert("id", "c");

        let names: Vec<_> = props.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["id", "class"]);
        assert_eq!(props.get_str("id"), Some("c"));
    }

    #[test]
    fn test_children_always_sequence() {
        let props = Props::new().with(CHILDREN, "only");
        assert_eq!(props.children(), &[Node::Text("only".into())]);

        let props = Props::new().with(CHILDREN, 3);
        assert_eq!(props.children(), &[Node::Number(3.0)]);

        let mut props = Props::new().with(CHILDREN, vec![Node::from("a"), Node::from("b")]);
        assert_eq!(props.children().len(), 2);
        props.insert(CHILDREN, PropValue::Null);
        assert!(props.children().is_empty());
        assert!(!props.contains(CHILDREN));
    }

    #[test]
    fn test_option_converts_to_null() {
        let props = Props::new().with("title", None::<&str>);
        assert_eq!(props.get("title"), Some(&PropValue::Null));
    }

    #[test]
    fn test_from_iterator() {
        let props: Props = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(props.get_number("b"), Some(2.0));
        assert_eq!(props.len(), 2);
    }
}
