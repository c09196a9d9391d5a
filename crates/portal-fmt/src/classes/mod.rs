//! Combining utility class names.
//!
//! This module provides:
//!
//! - [`ClassValue`]: a class expression (text, conditional set, or nested list)
//! - [`cn`] and the [`cn!`](crate::cn!) macro: flatten expressions and merge them
//! - [`merge_classes`]: the conflict-resolving merge on plain names
//!
//! Merging understands Tailwind-style utilities. When two names set the same
//! property, such as `p-2` and `p-4`, the later one wins. Names the merger does
//! not recognise are kept, so component classes pass through untouched.

mod groups;
mod merge;
mod token;
mod value;

pub use merge::merge_classes;
pub use value::ClassValue;

/// Flattens class expressions and merges them into one class string.
///
/// Falsy entries are skipped; with nothing left the result is empty.
///
/// # Example
///
/// ```rust
/// use portal_fmt::{cn, ClassValue};
///
/// let selected = false;
/// let classes = cn(&[
///     ClassValue::from("px-2 py-1 bg-gray-100"),
///     ClassValue::conditional([("bg-blue-500", selected)]),
///     ClassValue::from("p-4"),
/// ]);
/// assert_eq!(classes, "bg-gray-100 p-4");
/// ```
pub fn cn(values: &[ClassValue]) -> String {
    let mut names = Vec::new();
    for value in values {
        value.collect_names(&mut names);
    }
    merge_classes(names)
}

/// Builds a merged class string from any values convertible into [`ClassValue`].
///
/// ```rust
/// use portal_fmt::cn;
///
/// let disabled = true;
/// let extra: Option<&str> = None;
/// assert_eq!(
///     cn!("rounded px-4", ("opacity-50", disabled), extra, "px-6"),
///     "rounded opacity-50 px-6"
/// );
/// assert_eq!(cn!(), "");
/// ```
#[macro_export]
macro_rules! cn {
    ($($value:expr),* $(,)?) => {
        $crate::cn(&[$($crate::ClassValue::from($value)),*])
    };
}
