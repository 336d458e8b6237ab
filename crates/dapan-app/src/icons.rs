use rocket_dyn_templates::tera::{self, Tera, Value};
use std::collections::HashMap;

/// Inline icon set, registered once at bootstrap and available to every
/// template as `{{ icon(name="...") | safe }}`.
pub const ICONS: &[(&str, &str)] = &[
    (
        "board",
        r#"<svg class="icon" viewBox="0 0 16 16" width="14" height="14" fill="currentColor" aria-hidden="true"><path d="M2 2h12v1.5H2zM2 6h12v1.5H2zM2 10h8v1.5H2zM2 13h12v1.5H2z"/></svg>"#,
    ),
    (
        "stats",
        r#"<svg class="icon" viewBox="0 0 16 16" width="14" height="14" fill="currentColor" aria-hidden="true"><path d="M2 9h2.5v5H2zM6.5 5H9v9H6.5zM11 2h2.5v12H11z"/></svg>"#,
    ),
    (
        "rise",
        r#"<svg class="icon" viewBox="0 0 16 16" width="14" height="14" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><path d="M1 12l4.5-4.5 3 3L14 5"/><path d="M10 5h4v4"/></svg>"#,
    ),
    (
        "check",
        r#"<svg class="icon" viewBox="0 0 16 16" width="14" height="14" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M2.5 8.5l3.5 3.5 7.5-8"/></svg>"#,
    ),
    (
        "refresh",
        r#"<svg class="icon" viewBox="0 0 16 16" width="14" height="14" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><path d="M13.5 8a5.5 5.5 0 1 1-1.6-3.9"/><path d="M13.5 1.5v3h-3" fill="currentColor" stroke="none"/></svg>"#,
    ),
    (
        "search",
        r#"<svg class="icon" viewBox="0 0 16 16" width="14" height="14" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><circle cx="7" cy="7" r="4.5"/><path d="M10.5 10.5L14 14"/></svg>"#,
    ),
];

pub fn register(tera: &mut Tera) {
    tera.register_function("icon", icon);
}

fn icon(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let name = args
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg("icon() requires a `name` string argument"))?;
    ICONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, svg)| Value::String((*svg).to_string()))
        .ok_or_else(|| tera::Error::msg(format!("unknown icon: {name}")))
}
