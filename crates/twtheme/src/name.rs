//! Canonical naming for exported theme tokens.
//!
//! Design tools let authors organise styles into folders and free-form
//! labels (`"Primary/Primary Dark"`, `"shadow.nested.accent (dark)"`).
//! Tailwind wants flat kebab-case identifiers. [`normalize_name`] bridges
//! the two:
//!
//! 1. The raw name is split into hierarchy segments on `/`, `\` and `.`.
//! 2. Each segment is split into words on whitespace and hyphens.
//! 3. A segment's first word is dropped when it repeats an earlier segment,
//!    matches the type hint, or is a [stop word](STOP_WORDS).
//! 4. Remaining words lose every non-alphanumeric character and are
//!    lower-cased.
//! 5. Non-empty segments are joined with `-`.
//!
//! The repeat check in step 3 is a prefix collapse: only the first word of
//! the current segment is compared, and it is compared against whole
//! segment tokens already emitted. `"Primary/Primary Dark"` collapses to
//! `primary-dark`, while `"Primary/Dark Primary"` keeps both words.
//!
//! Hyphens count as word breaks and blank words are ignored before the
//! repeat check, so `"Primary/Primary-Dark"` and `"Primary/ Primary Dark"`
//! also give `primary-dark` rather than keeping the repeated word
//! (`primary-primarydark`, `primary-primary-dark`). This is what keeps
//! normalizing an already-normalized token a no-op and keeps `--` out of
//! the output.

/// Characters that open a new hierarchy level in a style name.
pub const HIERARCHY_SEPARATORS: [char; 3] = ['/', '\\', '.'];

/// Leading words that never carry meaning in a theme token.
pub const STOP_WORDS: &[&str] = &["background"];

/// Converts a hierarchical style name into a canonical kebab-case token.
///
/// `type_hint` names the kind of value the token will be exported as; a
/// segment starting with that word drops it, since the kind is prefixed
/// again on export.
///
/// The result only contains `[a-z0-9-]`, never starts or ends with `-`,
/// and may be empty when nothing meaningful survives.
///
/// # Example
///
/// ```rust
/// use twtheme::normalize_name;
///
/// assert_eq!(normalize_name("Primary/Primary Dark", None), "primary-dark");
/// assert_eq!(normalize_name("background.neutral.dark", None), "neutral-dark");
/// assert_eq!(
///     normalize_name("shadow.nested.accent (dark)", Some("shadow")),
///     "nested-accent-dark"
/// );
/// ```
pub fn normalize_name(raw: &str, type_hint: Option<&str>) -> String {
    let hint = type_hint.map(str::to_lowercase);
    let mut emitted: Vec<String> = Vec::new();

    for segment in raw.split(HIERARCHY_SEPARATORS) {
        let mut words = segment
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|word| !word.is_empty())
            .peekable();

        if let Some(first) = words.peek() {
            let first = first.to_lowercase();
            if emitted.contains(&first)
                || hint.as_deref() == Some(first.as_str())
                || STOP_WORDS.contains(&first.as_str())
            {
                words.next();
            }
        }

        let token = words
            .map(clean_word)
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        emitted.push(token);
    }

    emitted.retain(|token| !token.is_empty());
    emitted.join("-")
}

/// Derives the token for a font family: lower-cased, each space turned into `-`.
///
/// ```rust
/// assert_eq!(twtheme::font_family_name("Open Sans"), "open-sans");
/// ```
pub fn font_family_name(family: &str) -> String {
    family.to_lowercase().replace(' ', "-")
}

fn clean_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
