//! Pre-compiled template renderer.

use minijinja::{Environment, Error};
use serde::Serialize;

use super::filters::register_filters;
use crate::locale::{default_locale, Locale};

/// A renderer with pre-registered templates and the formatting filters.
///
/// Use this when a view renders the same templates repeatedly. Templates are
/// compiled once and reused.
///
/// # Example
///
/// ```rust
/// use portal_fmt::{Locale, Renderer};
/// use serde::Serialize;
///
/// let mut renderer = Renderer::new(Locale::default());
/// renderer
///     .add_template("claim", "{{ title | truncate_text(12) }}: {{ amount | currency }}")
///     .unwrap();
///
/// #[derive(Serialize)]
/// struct Claim { title: String, amount: f64 }
///
/// let out = renderer
///     .render("claim", &Claim { title: "Conference travel grant".into(), amount: 125000.0 })
///     .unwrap();
/// assert_eq!(out, "Conference t...: ₹1,25,000.00");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer whose filters use the given locale.
    pub fn new(locale: Locale) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, locale);
        Self { env }
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

/// Uses a snapshot of the process-wide default locale.
impl Default for Renderer {
    fn default() -> Self {
        Self::new(Locale::clone(&default_locale()))
    }
}

/// Renders a one-off template string with the default locale.
///
/// ```rust
/// use portal_fmt::render_template;
///
/// let data = serde_json::json!({ "d": "2024-03-15" });
/// let out = render_template("{{ d | format_date }}", &data).unwrap();
/// assert_eq!(out, "March 15, 2024");
/// ```
pub fn render_template<T: Serialize>(source: &str, data: &T) -> Result<String, Error> {
    let mut env = Environment::new();
    register_filters(&mut env, Locale::clone(&default_locale()));
    env.render_str(source, data)
}
