//! Class-list composition for Tailwind utility strings.
//!
//! Components build their `class` attribute from a base list plus optional
//! caller-supplied classes. Empty parts are dropped and whitespace is
//! collapsed so the rendered attribute stays stable.

#[cfg(test)]
#[path = "class_names_test.rs"]
mod class_names_test;

/// Join class fragments, skipping empty ones.
pub fn join<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for token in parts.into_iter().flat_map(str::split_whitespace) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Join `(class, enabled)` pairs, keeping only enabled fragments.
pub fn join_when<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    join(parts.into_iter().filter_map(|(class, on)| on.then_some(class)))
}

/// Base classes followed by an optional caller class.
pub fn with_extra(base: &str, extra: &str) -> String {
    join([base, extra])
}
