//! Class expressions accepted by the combiner.

/// A value describing zero or more class names.
///
/// Mirrors the shapes a view typically passes around: a plain string
/// (possibly holding several space-separated names), a set of names switched
/// on or off by flags, or a nested list of either. Falsy inputs (`None`,
/// `false`, empty strings) become [`ClassValue::Empty`] and contribute nothing.
///
/// # Example
///
/// ```rust
/// use portal_fmt::ClassValue;
///
/// let active = true;
/// let value = ClassValue::from(vec![
///     ClassValue::from("px-2 py-1"),
///     ClassValue::conditional([("bg-blue-500", active), ("opacity-50", !active)]),
///     ClassValue::from(None::<&str>),
/// ]);
/// assert_eq!(value.names(), vec!["px-2", "py-1", "bg-blue-500"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassValue {
    #[default]
    Empty,
    Text(String),
    Conditional(Vec<(String, bool)>),
    List(Vec<ClassValue>),
}

impl ClassValue {
    /// Builds a conditional value from `(name, enabled)` pairs.
    pub fn conditional<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        ClassValue::Conditional(
            entries
                .into_iter()
                .map(|(name, on)| (name.into(), on))
                .collect(),
        )
    }

    /// Returns true if the value contributes no class names.
    pub fn is_empty(&self) -> bool {
        match self {
            ClassValue::Empty => true,
            ClassValue::Text(text) => text.trim().is_empty(),
            ClassValue::Conditional(entries) => entries
                .iter()
                .all(|(name, on)| !on || name.trim().is_empty()),
            ClassValue::List(items) => items.iter().all(ClassValue::is_empty),
        }
    }

    /// Flattens the value into individual class names, in order.
    pub fn names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_names(&mut out);
        out
    }

    pub(crate) fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ClassValue::Empty => {}
            ClassValue::Text(text) => out.extend(text.split_ascii_whitespace()),
            ClassValue::Conditional(entries) => {
                for (name, _) in entries.iter().filter(|(_, on)| *on) {
                    out.extend(name.split_ascii_whitespace());
                }
            }
            ClassValue::List(items) => {
                for item in items {
                    item.collect_names(out);
                }
            }
        }
    }
}

impl From<&str> for ClassValue {
    fn from(text: &str) -> Self {
        ClassValue::Text(text.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(text: String) -> Self {
        ClassValue::Text(text)
    }
}

impl From<&String> for ClassValue {
    fn from(text: &String) -> Self {
        ClassValue::Text(text.clone())
    }
}

/// `true` carries no class name, so both flags map to [`ClassValue::Empty`].
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        ClassValue::Empty
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(items: [T; N]) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<(&str, bool)> for ClassValue {
    fn from((name, on): (&str, bool)) -> Self {
        ClassValue::Conditional(vec![(name.to_string(), on)])
    }
}

impl From<(String, bool)> for ClassValue {
    fn from((name, on): (String, bool)) -> Self {
        ClassValue::Conditional(vec![(name, on)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_splits_whitespace() {
        let value = ClassValue::from("  a\tb \n c ");
        assert_eq!(value.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_falsy_values_are_empty() {
        assert!(ClassValue::from(false).is_empty());
        assert!(ClassValue::from(true).is_empty());
        assert!(ClassValue::from(None::<String>).is_empty());
        assert!(ClassValue::from("").is_empty());
        assert!(ClassValue::from("   ").is_empty());
        assert!(ClassValue::conditional([("a", false)]).is_empty());
        let nested = ClassValue::from(vec![ClassValue::Empty, ClassValue::from("")]);
        assert!(nested.is_empty());
    }

    #[test]
    fn test_conditional_keeps_enabled_names() {
        let value = ClassValue::conditional([("a", true), ("b", false), ("c d", true)]);
        assert_eq!(value.names(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_nested_lists_flatten_in_order() {
        let value = ClassValue::from(vec![
            ClassValue::from("a"),
            ClassValue::from(vec![
                ClassValue::from(("b", true)),
                ClassValue::from(vec![ClassValue::from("c")]),
            ]),
            ClassValue::from(Some("d")),
        ]);
        assert_eq!(value.names(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_array_conversion() {
        let value = ClassValue::from(["a", "b"]);
        assert_eq!(value.names(), vec!["a", "b"]);
    }
}
