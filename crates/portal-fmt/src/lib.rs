//! # Portal formatting helpers
//!
//! Small, pure helpers used by research-portal views:
//!
//! - **Class merging**: [`cn`] / [`cn!`] flatten class expressions and resolve
//!   conflicting utilities so the later one wins
//! - **Dates**: [`format_date`] renders `"March 15, 2024"` from dates, timestamps or text
//! - **Currency**: [`format_currency`] renders Indian rupees with lakh/crore grouping
//! - **Truncation**: [`truncate_text`] cuts text to a character budget with `...`
//! - **Ids**: [`generate_id`] produces short base-36 labels from an injected RNG
//!
//! Locale tables live in [`Locale`] and can be loaded from YAML. The free
//! functions use a process-wide default; the `*_with` variants take a locale
//! explicitly. Every operation is also available to minijinja templates via
//! [`register_filters`] and [`Renderer`].
//!
//! ## Quick start
//!
//! ```rust
//! use portal_fmt::{cn, format_currency, format_date, truncate_text};
//!
//! assert_eq!(format_date("2024-03-15"), "March 15, 2024");
//! assert_eq!(format_currency(1234567.0), "₹12,34,567.00");
//! assert_eq!(truncate_text("Hello World", 5), "Hello...");
//! assert_eq!(cn!("p-2 text-sm", "p-4"), "text-sm p-4");
//! ```
//!
//! ## Failure handling
//!
//! The lenient functions never fail. Unparseable dates render as
//! [`INVALID_DATE`], and non-finite amounts are out of contract. Use
//! [`try_format_date`] and [`try_format_currency`] for typed errors.
//!
//! All functions are reentrant and hold no state apart from the default
//! locale, which is read-mostly.

pub mod classes;
mod currency;
mod date;
mod error;
mod locale;
mod render;
mod util;

pub use classes::{cn, merge_classes, ClassValue};
pub use currency::{
    format_currency, format_currency_with, try_format_currency, try_format_currency_with,
};
pub use date::{
    format_date, format_date_with, is_valid_rendering, parse_date, render_date, try_format_date,
    try_format_date_with, DateInput, INVALID_DATE,
};
pub use error::{FormatError, LocaleError};
pub use locale::{default_locale, set_default_locale, CurrencyFormat, Grouping, Locale};
pub use render::{register_filters, render_template, Renderer};
pub use util::{
    generate_id, generate_id_default, truncate_text, truncate_to_width, ELLIPSIS, ID_LEN,
};

// Re-export for convenience
pub use chrono::NaiveDate;
