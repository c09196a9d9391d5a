//! Splitting a class name into variant modifiers and its base utility.

/// A class name split into its parts.
///
/// `hover:md:!-mt-2` has modifiers `hover` and `md`, is important, and has
/// base `mt-2` (the negative sign is dropped because `-mt-2` and `mt-2`
/// target the same property).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassToken<'a> {
    modifiers: Vec<&'a str>,
    pub important: bool,
    pub base: &'a str,
}

impl<'a> ClassToken<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let mut depth = 0usize;
        let mut start = 0;
        let mut modifiers = Vec::new();

        // Colons inside [..] or (..) belong to arbitrary values.
        for (i, c) in raw.char_indices() {
            match c {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&raw[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }

        let mut base = &raw[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }
        if let Some(rest) = base.strip_prefix('-') {
            if !rest.is_empty() {
                base = rest;
            }
        }

        Self {
            modifiers: canonical_order(modifiers),
            important,
            base,
        }
    }

    /// Key identifying `group` under this token's variants.
    pub fn key(&self, group: &str) -> String {
        let mut key = self.modifiers.join(":");
        key.push('|');
        if self.important {
            key.push('!');
        }
        key.push_str(group);
        key
    }
}

/// Sorts plain modifiers so `hover:focus` and `focus:hover` compare equal.
///
/// Arbitrary variants (`[&>*]`) depend on position, so they stay put and
/// only the runs between them are sorted.
fn canonical_order(modifiers: Vec<&str>) -> Vec<&str> {
    let mut out = Vec::with_capacity(modifiers.len());
    let mut run = Vec::new();
    for modifier in modifiers {
        if modifier.starts_with('[') {
            run.sort_unstable();
            out.append(&mut run);
            out.push(modifier);
        } else {
            run.push(modifier);
        }
    }
    run.sort_unstable();
    out.append(&mut run);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_token() {
        let token = ClassToken::parse("p-4");
        assert_eq!(token.base, "p-4");
        assert!(!token.important);
        assert_eq!(token.key("p"), "|p");
    }

    #[test]
    fn test_modifiers_are_order_insensitive() {
        let a = ClassToken::parse("hover:focus:p-4");
        let b = ClassToken::parse("focus:hover:p-2");
        assert_eq!(a.key("p"), b.key("p"));
        assert_eq!(a.base, "p-4");
    }

    #[test]
    fn test_arbitrary_modifier_keeps_position() {
        let a = ClassToken::parse("[&>*]:hover:p-4");
        let b = ClassToken::parse("hover:[&>*]:p-4");
        assert_ne!(a.key("p"), b.key("p"));
    }

    #[test]
    fn test_colon_inside_brackets() {
        let token = ClassToken::parse("md:[mask-type:luminance]");
        assert_eq!(token.base, "[mask-type:luminance]");
        assert_eq!(token.key("x"), "md|x");
    }

    #[test]
    fn test_important_markers() {
        let leading = ClassToken::parse("!p-4");
        let trailing = ClassToken::parse("p-4!");
        assert!(leading.important);
        assert!(trailing.important);
        assert_eq!(leading.base, "p-4");
        assert_eq!(leading.key("p"), trailing.key("p"));
        assert_ne!(leading.key("p"), ClassToken::parse("p-4").key("p"));
    }

    #[test]
    fn test_negative_value() {
        let token = ClassToken::parse("md:-mt-2");
        assert_eq!(token.base, "mt-2");
        assert_eq!(ClassToken::parse("-").base, "-");
    }
}
