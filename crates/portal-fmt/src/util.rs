//! Text truncation and short identifier generation.

use rand::Rng;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// One-column marker used when the width budget cannot hold [`ELLIPSIS`].
const NARROW_ELLIPSIS: &str = "…";

/// Maximum number of characters in a generated id.
pub const ID_LEN: usize = 9;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const FRACTION_BITS: u32 = 53;
const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;

/// Truncates text to `max_len` characters, appending `...` when anything was cut.
///
/// Length is counted in `char`s. Truncation ignores word boundaries, so the
/// result can split a word. A truncated result is always `max_len + 3`
/// characters long.
///
/// # Example
///
/// ```rust
/// use portal_fmt::truncate_text;
///
/// assert_eq!(truncate_text("Hello World", 5), "Hello...");
/// assert_eq!(truncate_text("Hello", 5), "Hello");
/// assert_eq!(truncate_text("Hello", 0), "...");
/// ```
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&text[..cut]);
            out.push_str(ELLIPSIS);
            out
        }
    }
}

/// Truncates a string to fit within a maximum display width, adding `...` if needed.
///
/// Uses Unicode width calculations, so CJK and other wide characters count
/// as two columns. The marker counts against the budget, so the result never
/// exceeds `max_width` columns. Budgets below three columns use the one-column
/// `…` instead of `...`, and a zero budget gives an empty string.
///
/// ```rust
/// use portal_fmt::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
/// assert_eq!(truncate_to_width("Hello World", 2), "H…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let marker = if max_width < ELLIPSIS.len() {
        NARROW_ELLIPSIS
    } else {
        ELLIPSIS
    };
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width - marker.width();

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push_str(marker);
    result
}

/// Generates a short base-36 id from the given random source.
///
/// A 53-bit fraction in `[0, 1)` is drawn and the leading digits of its exact
/// base-36 expansion are kept, up to [`ID_LEN`]. Expansions that terminate
/// early give shorter ids; a zero draw gives `"0"`.
///
/// Ids are neither unique nor unpredictable. Use them only for throwaway
/// local labels.
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use portal_fmt::generate_id;
///
/// let a = generate_id(&mut StdRng::seed_from_u64(7));
/// let b = generate_id(&mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// assert!(a.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let fraction = rng.random::<u64>() >> (64 - FRACTION_BITS);
    base36_fraction(fraction)
}

/// Generates an id from the thread-local random source.
pub fn generate_id_default() -> String {
    generate_id(&mut rand::rng())
}

fn base36_fraction(mut fraction: u64) -> String {
    let mut id = String::with_capacity(ID_LEN);
    while fraction != 0 && id.len() < ID_LEN {
        // fraction < 2^53, so the product stays below 2^59
        let scaled = fraction * 36;
        id.push(BASE36_DIGITS[(scaled >> FRACTION_BITS) as usize] as char);
        fraction = scaled & FRACTION_MASK;
    }
    if id.is_empty() {
        id.push('0');
    }
    id
}
