//! MiniJinja filter registration.

use std::sync::Arc;

use minijinja::value::{Rest, ValueKind};
use minijinja::{Environment, Value};

use crate::classes::{cn, ClassValue};
use crate::currency::format_currency_with;
use crate::date::{format_date_with, DateInput};
use crate::locale::Locale;
use crate::util::{generate_id_default, truncate_text, truncate_to_width};

/// Registers all formatting filters and functions on a minijinja environment.
pub fn register_filters(env: &mut Environment<'static>, locale: Locale) {
    let locale = Arc::new(locale);

    let date_locale = Arc::clone(&locale);
    env.add_filter("format_date", move |value: Value| -> String {
        format_date_with(date_input(&value), &date_locale)
    });

    let currency_locale = Arc::clone(&locale);
    env.add_filter("currency", move |amount: f64| -> String {
        format_currency_with(amount, &currency_locale)
    });

    env.add_filter("truncate_text", |text: String, max_len: usize| -> String {
        truncate_text(&text, max_len)
    });
    env.add_filter("truncate_width", |text: String, max_width: usize| -> String {
        truncate_to_width(&text, max_width)
    });

    env.add_function("cn", |args: Rest<Value>| -> String {
        let values: Vec<ClassValue> = args.iter().map(class_value).collect();
        cn(&values)
    });
    env.add_function("generate_id", || -> String { generate_id_default() });
}

/// Strings are parsed as date text; integers are epoch milliseconds.
fn date_input(value: &Value) -> DateInput {
    if let Some(text) = value.as_str() {
        return DateInput::Text(text.to_string());
    }
    match i64::try_from(value.clone()) {
        Ok(millis) => DateInput::Timestamp(millis),
        Err(_) => DateInput::Text(value.to_string()),
    }
}

/// Converts a template value into a class expression.
///
/// Maps become conditional sets keyed by class name; other values follow
/// template truthiness.
fn class_value(value: &Value) -> ClassValue {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None | ValueKind::Bool => ClassValue::Empty,
        ValueKind::String => ClassValue::Text(value.as_str().unwrap_or_default().to_string()),
        ValueKind::Seq => match value.try_iter() {
            Ok(items) => ClassValue::List(items.map(|item| class_value(&item)).collect()),
            Err(_) => ClassValue::Empty,
        },
        ValueKind::Map => match value.try_iter() {
            Ok(keys) => ClassValue::Conditional(
                keys.map(|key| {
                    let on = value.get_item(&key).is_ok_and(|v| v.is_true());
                    let name = key.as_str().map_or_else(|| key.to_string(), str::to_string);
                    (name, on)
                })
                .collect(),
            ),
            Err(_) => ClassValue::Empty,
        },
        _ if value.is_true() => ClassValue::Text(value.to_string()),
        _ => ClassValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Environment<'static> {
        let mut env = Environment::new();
        register_filters(&mut env, Locale::default());
        env
    }

    fn render(source: &str, ctx: Value) -> String {
        env().render_str(source, ctx).unwrap()
    }

    fn render_plain(source: &str) -> String {
        render(source, minijinja::context! {})
    }

    #[test]
    fn test_format_date_filter() {
        let out = render(
            "{{ d | format_date }}",
            minijinja::context! { d => "2024-03-15" },
        );
        assert_eq!(out, "March 15, 2024");
    }

    #[test]
    fn test_format_date_filter_timestamp() {
        let out = render_plain("{{ 0 | format_date }}");
        assert_eq!(out, "January 1, 1970");
    }

    #[test]
    fn test_format_date_filter_invalid() {
        let out = render_plain("{{ 'soon' | format_date }}");
        assert_eq!(out, "Invalid Date");
    }

    #[test]
    fn test_currency_filter() {
        let out = render_plain("{{ 1234567 | currency }}");
        assert_eq!(out, "₹12,34,567.00");
        let out = render(
            "{{ amount | currency }}",
            minijinja::context! { amount => -500.5 },
        );
        assert_eq!(out, "-₹500.50");
    }

    #[test]
    fn test_truncate_filters() {
        let out = render_plain("{{ 'Hello World' | truncate_text(5) }}");
        assert_eq!(out, "Hello...");
        let out = render_plain("{{ 'Hello World' | truncate_width(8) }}");
        assert_eq!(out, "Hello...");
    }

    #[test]
    fn test_cn_function() {
        let out = render(
            "{{ cn('px-2 py-1', {'bg-blue-500': on, 'opacity-50': not on}, none, ['p-4']) }}",
            minijinja::context! { on => true },
        );
        assert_eq!(out, "bg-blue-500 p-4");
    }

    #[test]
    fn test_cn_function_falsy_only() {
        let out = render_plain("[{{ cn(none, false, '', missing) }}]");
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_generate_id_function() {
        let out = render_plain("{{ generate_id() }}");
        assert!(!out.is_empty());
        let base36 = |c: char| c.is_ascii_digit() || c.is_ascii_lowercase();
        assert!(out.chars().all(base36));
    }

    #[test]
    fn test_class_value_conversion() {
        assert_eq!(
            class_value(&Value::from(3)),
            ClassValue::Text("3".to_string())
        );
        assert_eq!(class_value(&Value::from(0)), ClassValue::Empty);
    }
}
