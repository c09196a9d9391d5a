//! Utility groups: which class names set the same style property.
//!
//! Two names in the same group conflict, so only the later one survives a
//! merge. Some groups also override narrower ones: `p-4` replaces an earlier
//! `px-2`, but a later `px-2` refines an earlier `p-4` and both stay.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;

/// How the part of a name after its prefix is validated.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Value {
    /// Spacing scale: `4`, `0.5`, `px`, arbitrary.
    Spacing,
    /// Widths and heights: spacing, fractions, sizing keywords.
    Size,
    /// Offsets: spacing, fractions, `auto`, `full`.
    Inset,
    Color,
    FontSize,
    FontWeight,
    FontFamily,
    /// Bare, a number, or an arbitrary length.
    BorderWidth,
    Radius,
    Shadow,
    /// Bare or a number, as in `grow` / `grow-0`.
    OptionalNumber,
    Number,
    ZIndex,
    Leading,
    Tracking,
    GridTrack,
    Keywords(&'static [&'static str]),
    Any,
}

const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];
const SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];
const COLOR_KEYWORDS: &[&str] = &["inherit", "current", "transparent", "black", "white"];
const TSHIRT_SIZES: &[&str] = &[
    "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const SIZE_KEYWORDS: &[&str] = &[
    "auto", "full", "screen", "min", "max", "fit", "svw", "lvw", "dvw", "svh", "lvh", "dvh",
    "prose", "none",
];
const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "dvh", "dvw", "svh", "svw", "lvh", "lvw", "vmin", "vmax",
    "ch", "ex", "pt", "pc", "in", "cm", "mm", "fr",
];

fn is_number(value: &str) -> bool {
    let mut dots = 0;
    !value.is_empty()
        && value.chars().all(|c| match c {
            '0'..='9' => true,
            '.' => {
                dots += 1;
                dots == 1
            }
            _ => false,
        })
        && value != "."
}

fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_fraction(value: &str) -> bool {
    match value.split_once('/') {
        Some((numerator, denominator)) => is_number(numerator) && is_number(denominator),
        None => false,
    }
}

fn arbitrary(value: &str) -> Option<&str> {
    value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .filter(|inner| !inner.is_empty())
}

fn is_length(inner: &str) -> bool {
    if inner.starts_with("length:") {
        return true;
    }
    if ["calc(", "min(", "max(", "clamp("]
        .iter()
        .any(|f| inner.starts_with(f))
    {
        return true;
    }
    let digits = inner.trim_start_matches('-');
    let split = digits
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(digits.len());
    let (number, unit) = digits.split_at(split);
    is_number(number) && (LENGTH_UNITS.contains(&unit) || (unit.is_empty() && number == "0"))
}

fn is_arbitrary_length(value: &str) -> bool {
    arbitrary(value).is_some_and(is_length)
}

fn is_arbitrary_number(value: &str) -> bool {
    arbitrary(value).is_some_and(is_number)
}

/// Splits a `/` modifier off a value. A `/` inside an arbitrary value does
/// not count.
fn split_modifier(value: &str) -> (&str, Option<&str>) {
    match value.split_once('/') {
        Some((head, modifier)) if !head.starts_with('[') || head.ends_with(']') => {
            (head, Some(modifier))
        }
        _ => (value, None),
    }
}

fn is_color(value: &str) -> bool {
    let (color, opacity) = split_modifier(value);
    if let Some(opacity) = opacity {
        if !(is_number(opacity) || arbitrary(opacity).is_some()) {
            return false;
        }
    }
    if COLOR_KEYWORDS.contains(&color) {
        return true;
    }
    if let Some(inner) = arbitrary(color) {
        return !is_length(inner);
    }
    match color.rsplit_once('-') {
        Some((hue, shade)) => PALETTE.contains(&hue) && SHADES.contains(&shade),
        None => false,
    }
}

fn is_font_size(value: &str) -> bool {
    value == "base" || TSHIRT_SIZES.contains(&value) || is_arbitrary_length(value)
}

impl Value {
    fn accepts_bare(self) -> bool {
        matches!(
            self,
            Value::BorderWidth | Value::Radius | Value::Shadow | Value::OptionalNumber
        )
    }

    fn accepts(self, value: &str) -> bool {
        match self {
            Value::Spacing => is_number(value) || value == "px" || arbitrary(value).is_some(),
            Value::Size => {
                Value::Spacing.accepts(value)
                    || is_fraction(value)
                    || SIZE_KEYWORDS.contains(&value)
                    || TSHIRT_SIZES.contains(&value)
                    || value.starts_with("screen-")
            }
            Value::Inset => {
                Value::Spacing.accepts(value)
                    || is_fraction(value)
                    || matches!(value, "auto" | "full")
            }
            Value::Color => is_color(value),
            // `text-lg/7` also sets the line height
            Value::FontSize => match split_modifier(value) {
                (size, Some(leading)) => is_font_size(size) && Value::Leading.accepts(leading),
                (size, None) => is_font_size(size),
            },
            Value::FontWeight => FONT_WEIGHTS.contains(&value) || is_arbitrary_number(value),
            Value::FontFamily => FONT_FAMILIES.contains(&value) || arbitrary(value).is_some(),
            Value::BorderWidth => is_integer(value) || is_arbitrary_length(value),
            Value::Radius => {
                value == "none"
                    || value == "full"
                    || TSHIRT_SIZES.contains(&value)
                    || arbitrary(value).is_some()
            }
            Value::Shadow => {
                value == "inner"
                    || value == "none"
                    || TSHIRT_SIZES.contains(&value)
                    || is_arbitrary_length(value)
            }
            Value::OptionalNumber | Value::Number => is_number(value) || is_arbitrary_number(value),
            Value::ZIndex => value == "auto" || is_integer(value) || arbitrary(value).is_some(),
            Value::Leading => {
                LEADING_KEYWORDS.contains(&value) || is_number(value) || arbitrary(value).is_some()
            }
            Value::Tracking => TRACKING_KEYWORDS.contains(&value) || arbitrary(value).is_some(),
            Value::GridTrack => {
                value == "none"
                    || value == "subgrid"
                    || is_integer(value)
                    || arbitrary(value).is_some()
            }
            Value::Keywords(words) => words.contains(&value),
            Value::Any => !value.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Matcher {
    Exact(&'static [&'static str]),
    Prefixed(&'static str, Value),
}

/// A set of utilities that set the same property.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Group {
    pub id: &'static str,
    matcher: Matcher,
    /// Groups a name from this group replaces when it comes later.
    pub overrides: &'static [&'static str],
}

impl Group {
    const fn exact(id: &'static str, names: &'static [&'static str]) -> Self {
        Self {
            id,
            matcher: Matcher::Exact(names),
            overrides: &[],
        }
    }

    const fn prefixed(id: &'static str, prefix: &'static str, value: Value) -> Self {
        Self::shorthand(id, prefix, value, &[])
    }

    const fn keywords(
        id: &'static str,
        prefix: &'static str,
        words: &'static [&'static str],
    ) -> Self {
        Self::prefixed(id, prefix, Value::Keywords(words))
    }

    /// A utility that also sets the properties of narrower groups, as `p`
    /// does for `px` and `pt`.
    const fn shorthand(
        id: &'static str,
        prefix: &'static str,
        value: Value,
        overrides: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            matcher: Matcher::Prefixed(prefix, value),
            overrides,
        }
    }

    fn matches(&self, base: &str) -> bool {
        match self.matcher {
            Matcher::Exact(names) => names.contains(&base),
            Matcher::Prefixed(prefix, value) => match base.strip_prefix(prefix) {
                Some("") => value.accepts_bare(),
                Some(rest) => rest.strip_prefix('-').is_some_and(|v| value.accepts(v)),
                None => false,
            },
        }
    }

    /// Index key: the first dash-separated segment of what this group matches.
    fn index_keys(&self) -> Vec<&'static str> {
        match self.matcher {
            Matcher::Exact(names) => names.iter().map(|&n| first_segment(n)).collect(),
            Matcher::Prefixed(prefix, _) => vec![first_segment(prefix)],
        }
    }
}

fn first_segment(name: &str) -> &str {
    name.split('-').next().unwrap_or(name)
}

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const FONT_FAMILIES: &[&str] = &["sans", "serif", "mono"];
const LEADING_KEYWORDS: &[&str] = &["none", "tight", "snug", "normal", "relaxed", "loose"];
const TRACKING_KEYWORDS: &[&str] = &["tighter", "tight", "normal", "wide", "wider", "widest"];

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "hidden",
    "contents",
    "table",
    "flow-root",
    "list-item",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const OVERFLOW: Value = Value::Keywords(&["auto", "hidden", "clip", "visible", "scroll"]);
const OVERFLOW_AXES: &[&str] = &["overflow-x", "overflow-y"];
const INSET_SIDES: &[&str] = &[
    "inset-x", "inset-y", "top", "right", "bottom", "left", "start", "end",
];
const FLEX_DIRECTION: &[&str] = &[
    "flex-row",
    "flex-row-reverse",
    "flex-col",
    "flex-col-reverse",
];
const FLEX_WRAP: &[&str] = &["flex-wrap", "flex-wrap-reverse", "flex-nowrap"];
const JUSTIFY: &[&str] = &[
    "normal", "start", "end", "center", "between", "around", "evenly", "stretch",
];
const ALIGN_ITEMS: &[&str] = &["start", "end", "center", "baseline", "stretch"];
const ALIGN_SELF: &[&str] = &[
    "self-auto",
    "self-start",
    "self-end",
    "self-center",
    "self-stretch",
    "self-baseline",
];
const P_SIDES: &[&str] = &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"];
const M_SIDES: &[&str] = &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"];
const TEXT_ALIGN: &[&str] = &[
    "text-left",
    "text-center",
    "text-right",
    "text-justify",
    "text-start",
    "text-end",
];
const TEXT_DECORATION: &[&str] = &["underline", "overline", "line-through", "no-underline"];
const TEXT_TRANSFORM: &[&str] = &["uppercase", "lowercase", "capitalize", "normal-case"];
const TEXT_OVERFLOW: &[&str] = &["truncate", "text-ellipsis", "text-clip"];
const WHITESPACE: &[&str] = &[
    "normal",
    "nowrap",
    "pre",
    "pre-line",
    "pre-wrap",
    "break-spaces",
];
const BG_REPEAT: &[&str] = &[
    "bg-repeat",
    "bg-no-repeat",
    "bg-repeat-x",
    "bg-repeat-y",
    "bg-repeat-round",
    "bg-repeat-space",
];
const GRADIENT_SIDES: &[&str] = &["t", "tr", "r", "br", "b", "bl", "l", "tl"];
const ROUNDED_CORNERS: &[&str] = &[
    "rounded-t",
    "rounded-r",
    "rounded-b",
    "rounded-l",
    "rounded-s",
    "rounded-e",
    "rounded-tl",
    "rounded-tr",
    "rounded-br",
    "rounded-bl",
];
const ROUNDED_T: &[&str] = &["rounded-tl", "rounded-tr"];
const ROUNDED_R: &[&str] = &["rounded-tr", "rounded-br"];
const ROUNDED_B: &[&str] = &["rounded-br", "rounded-bl"];
const ROUNDED_L: &[&str] = &["rounded-tl", "rounded-bl"];
const BORDER_SIDES: &[&str] = &[
    "border-w-x",
    "border-w-y",
    "border-w-t",
    "border-w-r",
    "border-w-b",
    "border-w-l",
];
const BORDER_X: &[&str] = &["border-w-r", "border-w-l"];
const BORDER_Y: &[&str] = &["border-w-t", "border-w-b"];
const BORDER_STYLE: &[&str] = &[
    "border-solid",
    "border-dashed",
    "border-dotted",
    "border-double",
    "border-hidden",
    "border-none",
];

// Order matters where prefixes are shared: the first matching group wins.
static GROUPS: &[Group] = &[
    // Layout
    Group::exact("display", DISPLAY),
    Group::exact("position", POSITION),
    Group::exact("visibility", &["visible", "invisible", "collapse"]),
    Group::shorthand("overflow", "overflow", OVERFLOW, OVERFLOW_AXES),
    Group::prefixed("overflow-x", "overflow-x", OVERFLOW),
    Group::prefixed("overflow-y", "overflow-y", OVERFLOW),
    Group::shorthand("inset", "inset", Value::Inset, INSET_SIDES),
    Group::shorthand("inset-x", "inset-x", Value::Inset, &["right", "left"]),
    Group::shorthand("inset-y", "inset-y", Value::Inset, &["top", "bottom"]),
    Group::prefixed("top", "top", Value::Inset),
    Group::prefixed("right", "right", Value::Inset),
    Group::prefixed("bottom", "bottom", Value::Inset),
    Group::prefixed("left", "left", Value::Inset),
    Group::prefixed("start", "start", Value::Inset),
    Group::prefixed("end", "end", Value::Inset),
    Group::prefixed("z", "z", Value::ZIndex),
    // Flexbox and grid
    Group::exact("flex-direction", FLEX_DIRECTION),
    Group::exact("flex-wrap", FLEX_WRAP),
    Group::keywords("flex", "flex", &["1", "auto", "initial", "none"]),
    Group::prefixed("grow", "grow", Value::OptionalNumber),
    Group::prefixed("shrink", "shrink", Value::OptionalNumber),
    Group::prefixed("grid-cols", "grid-cols", Value::GridTrack),
    Group::prefixed("grid-rows", "grid-rows", Value::GridTrack),
    Group::prefixed("col-span", "col-span", Value::GridTrack),
    Group::shorthand("gap", "gap", Value::Spacing, &["gap-x", "gap-y"]),
    Group::prefixed("gap-x", "gap-x", Value::Spacing),
    Group::prefixed("gap-y", "gap-y", Value::Spacing),
    Group::keywords("justify-content", "justify", JUSTIFY),
    Group::keywords("align-items", "items", ALIGN_ITEMS),
    Group::exact("align-self", ALIGN_SELF),
    // Spacing
    Group::shorthand("p", "p", Value::Spacing, P_SIDES),
    Group::shorthand("px", "px", Value::Spacing, &["pr", "pl"]),
    Group::shorthand("py", "py", Value::Spacing, &["pt", "pb"]),
    Group::prefixed("ps", "ps", Value::Spacing),
    Group::prefixed("pe", "pe", Value::Spacing),
    Group::prefixed("pt", "pt", Value::Spacing),
    Group::prefixed("pr", "pr", Value::Spacing),
    Group::prefixed("pb", "pb", Value::Spacing),
    Group::prefixed("pl", "pl", Value::Spacing),
    Group::shorthand("m", "m", Value::Inset, M_SIDES),
    Group::shorthand("mx", "mx", Value::Inset, &["mr", "ml"]),
    Group::shorthand("my", "my", Value::Inset, &["mt", "mb"]),
    Group::prefixed("ms", "ms", Value::Inset),
    Group::prefixed("me", "me", Value::Inset),
    Group::prefixed("mt", "mt", Value::Inset),
    Group::prefixed("mr", "mr", Value::Inset),
    Group::prefixed("mb", "mb", Value::Inset),
    Group::prefixed("ml", "ml", Value::Inset),
    Group::prefixed("space-x", "space-x", Value::Spacing),
    Group::prefixed("space-y", "space-y", Value::Spacing),
    // Sizing
    Group::shorthand("size", "size", Value::Size, &["w", "h"]),
    Group::prefixed("w", "w", Value::Size),
    Group::prefixed("min-w", "min-w", Value::Size),
    Group::prefixed("max-w", "max-w", Value::Size),
    Group::prefixed("h", "h", Value::Size),
    Group::prefixed("min-h", "min-h", Value::Size),
    Group::prefixed("max-h", "max-h", Value::Size),
    // Typography
    Group::shorthand("font-size", "text", Value::FontSize, &["leading"]),
    Group::exact("text-align", TEXT_ALIGN),
    Group::prefixed("text-color", "text", Value::Color),
    Group::prefixed("font-weight", "font", Value::FontWeight),
    Group::prefixed("font-family", "font", Value::FontFamily),
    Group::exact("font-style", &["italic", "not-italic"]),
    Group::exact("text-decoration", TEXT_DECORATION),
    Group::exact("text-transform", TEXT_TRANSFORM),
    Group::exact("text-overflow", TEXT_OVERFLOW),
    Group::prefixed("leading", "leading", Value::Leading),
    Group::prefixed("tracking", "tracking", Value::Tracking),
    Group::keywords("whitespace", "whitespace", WHITESPACE),
    // Backgrounds
    Group::exact("bg-size", &["bg-auto", "bg-cover", "bg-contain"]),
    Group::exact("bg-repeat", BG_REPEAT),
    Group::keywords("bg-image", "bg-gradient-to", GRADIENT_SIDES),
    Group::prefixed("bg-color", "bg", Value::Color),
    // Borders
    Group::shorthand("rounded", "rounded", Value::Radius, ROUNDED_CORNERS),
    Group::shorthand("rounded-t", "rounded-t", Value::Radius, ROUNDED_T),
    Group::shorthand("rounded-r", "rounded-r", Value::Radius, ROUNDED_R),
    Group::shorthand("rounded-b", "rounded-b", Value::Radius, ROUNDED_B),
    Group::shorthand("rounded-l", "rounded-l", Value::Radius, ROUNDED_L),
    Group::prefixed("rounded-s", "rounded-s", Value::Radius),
    Group::prefixed("rounded-e", "rounded-e", Value::Radius),
    Group::prefixed("rounded-tl", "rounded-tl", Value::Radius),
    Group::prefixed("rounded-tr", "rounded-tr", Value::Radius),
    Group::prefixed("rounded-br", "rounded-br", Value::Radius),
    Group::prefixed("rounded-bl", "rounded-bl", Value::Radius),
    Group::shorthand("border-w", "border", Value::BorderWidth, BORDER_SIDES),
    Group::shorthand("border-w-x", "border-x", Value::BorderWidth, BORDER_X),
    Group::shorthand("border-w-y", "border-y", Value::BorderWidth, BORDER_Y),
    Group::prefixed("border-w-t", "border-t", Value::BorderWidth),
    Group::prefixed("border-w-r", "border-r", Value::BorderWidth),
    Group::prefixed("border-w-b", "border-b", Value::BorderWidth),
    Group::prefixed("border-w-l", "border-l", Value::BorderWidth),
    Group::exact("border-style", BORDER_STYLE),
    Group::prefixed("border-color", "border", Value::Color),
    Group::prefixed("ring-w", "ring", Value::BorderWidth),
    Group::prefixed("ring-color", "ring", Value::Color),
    // Effects
    Group::prefixed("shadow", "shadow", Value::Shadow),
    Group::prefixed("opacity", "opacity", Value::Number),
    Group::prefixed("cursor", "cursor", Value::Any),
    Group::keywords("select", "select", &["none", "text", "all", "auto"]),
    Group::keywords("pointer-events", "pointer-events", &["none", "auto"]),
];

static INDEX: Lazy<HashMap<&'static str, Vec<&'static Group>>> = Lazy::new(|| {
    let mut index: HashMap<&'static str, Vec<&'static Group>> = HashMap::new();
    for group in GROUPS {
        for key in group.index_keys() {
            let entry = index.entry(key).or_default();
            if !entry.iter().any(|g| std::ptr::eq(*g, group)) {
                entry.push(group);
            }
        }
    }
    index
});

/// The group a base utility belongs to.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Classified<'a> {
    pub id: Cow<'a, str>,
    pub overrides: &'static [&'static str],
}

/// Finds the group of a base utility name (without modifiers or `!`).
///
/// Arbitrary properties such as `[mask-type:luminance]` form a group per
/// property name. Unknown names return `None`.
pub(crate) fn classify(base: &str) -> Option<Classified<'_>> {
    if let Some(inner) = arbitrary(base) {
        let (property, value) = inner.split_once(':')?;
        if property.is_empty() || value.is_empty() {
            return None;
        }
        return Some(Classified {
            id: Cow::Owned(format!("[{}]", property)),
            overrides: &[],
        });
    }

    INDEX
        .get(first_segment(base))?
        .iter()
        .find(|group| group.matches(base))
        .map(|group| Classified {
            id: Cow::Borrowed(group.id),
            overrides: group.overrides,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(base: &str) -> Option<String> {
        classify(base).map(|c| c.id.into_owned())
    }

    #[test]
    fn test_spacing_groups() {
        assert_eq!(id("p-4").as_deref(), Some("p"));
        assert_eq!(id("px-2").as_deref(), Some("px"));
        assert_eq!(id("p-0.5").as_deref(), Some("p"));
        assert_eq!(id("p-px").as_deref(), Some("p"));
        assert_eq!(id("p-[3px]").as_deref(), Some("p"));
        assert_eq!(id("mt-auto").as_deref(), Some("mt"));
    }

    #[test]
    fn test_text_is_split_by_value() {
        assert_eq!(id("text-sm").as_deref(), Some("font-size"));
        assert_eq!(id("text-[14px]").as_deref(), Some("font-size"));
        assert_eq!(id("text-center").as_deref(), Some("text-align"));
        assert_eq!(id("text-red-500").as_deref(), Some("text-color"));
        assert_eq!(id("text-white").as_deref(), Some("text-color"));
        assert_eq!(id("text-[#333]").as_deref(), Some("text-color"));
        assert_eq!(id("text-blue-500/50").as_deref(), Some("text-color"));
    }

    #[test]
    fn test_font_size_with_line_height() {
        assert_eq!(id("text-lg/7").as_deref(), Some("font-size"));
        assert_eq!(id("text-sm/[20px]").as_deref(), Some("font-size"));
        assert_eq!(id("text-base/loose").as_deref(), Some("font-size"));
        assert_eq!(id("text-[14px]/6").as_deref(), Some("font-size"));
        assert_eq!(id("text-lg/bogus"), None);
        let classified = classify("text-lg/7").unwrap();
        assert!(classified.overrides.contains(&"leading"));
    }

    #[test]
    fn test_font_is_split_by_value() {
        assert_eq!(id("font-bold").as_deref(), Some("font-weight"));
        assert_eq!(id("font-[550]").as_deref(), Some("font-weight"));
        assert_eq!(id("font-mono").as_deref(), Some("font-family"));
        assert_eq!(id("font-['Inter']").as_deref(), Some("font-family"));
    }

    #[test]
    fn test_border_groups() {
        assert_eq!(id("border").as_deref(), Some("border-w"));
        assert_eq!(id("border-2").as_deref(), Some("border-w"));
        assert_eq!(id("border-t").as_deref(), Some("border-w-t"));
        assert_eq!(id("border-x-4").as_deref(), Some("border-w-x"));
        assert_eq!(id("border-gray-200").as_deref(), Some("border-color"));
        assert_eq!(id("border-dashed").as_deref(), Some("border-style"));
    }

    #[test]
    fn test_display_and_flex() {
        assert_eq!(id("flex").as_deref(), Some("display"));
        assert_eq!(id("hidden").as_deref(), Some("display"));
        assert_eq!(id("flex-col").as_deref(), Some("flex-direction"));
        assert_eq!(id("flex-1").as_deref(), Some("flex"));
        assert_eq!(id("grow").as_deref(), Some("grow"));
    }

    #[test]
    fn test_arbitrary_property() {
        assert_eq!(id("[mask-type:luminance]").as_deref(), Some("[mask-type]"));
        assert_eq!(id("[nonsense]"), None);
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(id("card"), None);
        assert_eq!(id("text-brand"), None);
        assert_eq!(id("p-"), None);
        assert_eq!(id("border-t-foo"), None);
    }

    #[test]
    fn test_value_helpers() {
        assert!(is_number("12"));
        assert!(is_number("2.5"));
        assert!(!is_number("1.2.3"));
        assert!(!is_number("."));
        assert!(is_fraction("1/2"));
        assert!(is_length("3px"));
        assert!(is_length("0"));
        assert!(is_length("-1.5rem"));
        assert!(!is_length("#fff"));
        assert!(is_color("[rgb(0,0,0)]"));
        assert!(!is_color("red"));
    }
}
