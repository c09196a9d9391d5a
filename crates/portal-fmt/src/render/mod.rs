//! Template integration.
//!
//! Every formatting operation is available to minijinja templates:
//!
//! | Name | Kind | Example |
//! |---|---|---|
//! | `format_date` | filter | `{{ submitted_on \| format_date }}` |
//! | `currency` | filter | `{{ amount \| currency }}` |
//! | `truncate_text` | filter | `{{ title \| truncate_text(40) }}` |
//! | `truncate_width` | filter | `{{ title \| truncate_width(20) }}` |
//! | `cn` | function | `class="{{ cn('px-2', {'bg-blue-500': active}) }}"` |
//! | `generate_id` | function | `id="field-{{ generate_id() }}"` |

mod filters;
mod renderer;

pub use filters::register_filters;
pub use renderer::{render_template, Renderer};
