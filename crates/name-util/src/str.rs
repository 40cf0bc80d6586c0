//! Identifier string transforms.
//!
//! All functions operate on ASCII semantics. Characters outside the ASCII
//! letter and digit ranges never match a letter class: they are left as-is by
//! [`underscore`] and replaced by [`normalize`].

/// Converts a camelCase identifier to underscore_case.
///
/// An `_` is inserted wherever a lowercase letter or digit is directly
/// followed by an uppercase letter, then the whole string is lowercased.
/// Runs of uppercase letters are not split.
///
/// ```
/// use name_util::str::underscore;
///
/// assert_eq!(underscore("fooBar"), "foo_bar");
/// assert_eq!(underscore("myHTTPServer"), "my_httpserver");
/// ```
pub fn underscore(name: &str) -> String {
    let mut ret = String::with_capacity(name.len() + name.len() / 4);
    let mut chars = name.chars().peekable();

    while let Some(ch) = chars.next() {
        ret.push(ch.to_ascii_lowercase());

        if !(ch.is_ascii_lowercase() || ch.is_ascii_digit()) {
            continue;
        }

        if chars.peek().is_some_and(char::is_ascii_uppercase) {
            ret.push('_');
        }
    }

    ret
}

/// Reduces `name` to lowercase ASCII letters, digits and single underscores.
///
/// Every other character becomes `_`, runs of `_` collapse to one, and
/// leading and trailing `_` or spaces are trimmed. The result may be empty.
///
/// ```
/// use name_util::str::normalize;
///
/// assert_eq!(normalize("Hello, World!"), "hello_world");
/// assert_eq!(normalize("!!!"), "");
/// ```
pub fn normalize(name: &str) -> String {
    let mut ret = String::with_capacity(name.len());

    for ch in name.chars() {
        let ch = if ch.is_ascii_alphanumeric() {
            ch.to_ascii_lowercase()
        } else {
            '_'
        };

        // Collapse
        if ch == '_' && ret.ends_with('_') {
            continue;
        }

        ret.push(ch);
    }

    ret.trim_matches(|ch| ch == '_' || ch == ' ').to_string()
}

/// Naive English pluralization.
///
/// A single trailing `y` becomes `ies`; anything else gets an `s` appended.
/// Irregular nouns are not handled.
///
/// ```
/// use name_util::str::pluralize;
///
/// assert_eq!(pluralize("city"), "cities");
/// assert_eq!(pluralize("dog"), "dogs");
/// ```
pub fn pluralize(name: &str) -> String {
    match name.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{name}s"),
    }
}

pub trait StrUtil: AsRef<str> {
    /// See [`underscore`]
    fn underscore(&self) -> String {
        underscore(self.as_ref())
    }

    /// See [`normalize`]
    fn normalize(&self) -> String {
        normalize(self.as_ref())
    }

    /// See [`pluralize`]
    fn pluralize(&self) -> String {
        pluralize(self.as_ref())
    }
}

impl StrUtil for str {}

impl StrUtil for String {}
