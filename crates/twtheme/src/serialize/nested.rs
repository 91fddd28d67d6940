//! Grouped object output for Tailwind config files.

use serde_json::{Map, Value};

use crate::row::{ExportRow, RowKind};
use crate::serialize::merge::merge_into;

/// Group names that differ from the camel-cased row kind.
const GROUP_RENAMES: &[(&str, &str)] = &[("shadow", "boxShadow"), ("color", "colors")];

const COLORS_GROUP: &str = "colors";

/// The config key a row kind is grouped under.
///
/// The hyphenated tag is camel-cased, then renamed where Tailwind expects a
/// different key: `font-family` → `fontFamily`, `shadow` → `boxShadow`,
/// `color` → `colors`.
pub fn group_key(kind: RowKind) -> String {
    let camel = camel_case(kind.as_str());
    GROUP_RENAMES
        .iter()
        .find(|(from, _)| *from == camel)
        .map_or(camel, |(_, to)| (*to).to_string())
}

fn camel_case(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    let mut upper_next = false;
    for c in tag.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Groups rows into a `{ group: { name: value } }` object.
///
/// Groups appear in the order their first row does. Within a group the last
/// row for a name wins. At every level, keys that are canonical unsigned
/// integers (`"50"`, `"100"`) come first in ascending order, then the other
/// keys in insertion order, matching how JavaScript orders object keys.
///
/// With `merge_nested_colors`, color names are read as `-`-separated paths
/// and merged into a tree, so `primary-dark` and `primary-light` end up as
/// `{"primary": {"dark": .., "light": ..}}`.
///
/// ```rust
/// use serde_json::json;
/// use twtheme::{to_nested, ExportRow, RowKind};
///
/// let rows = [
///     ExportRow::new("primary-dark", "#000", RowKind::Color),
///     ExportRow::new("primary-light", "#fff", RowKind::Color),
/// ];
///
/// let theme = to_nested(&rows, true);
/// assert_eq!(theme["colors"], json!({"primary": {"dark": "#000", "light": "#fff"}}));
/// ```
pub fn to_nested(rows: &[ExportRow], merge_nested_colors: bool) -> Map<String, Value> {
    let mut groups: Vec<(String, Map<String, Value>)> = Vec::new();

    for row in rows {
        let key = group_key(row.kind);
        let index = match groups.iter().position(|(name, _)| *name == key) {
            Some(index) => index,
            None => {
                groups.push((key.clone(), Map::new()));
                groups.len() - 1
            }
        };
        let group = &mut groups[index].1;

        if merge_nested_colors && key == COLORS_GROUP {
            merge_into(group, nested_from_path(&row.name, row.value.to_json()));
        } else {
            group.insert(row.name.clone(), row.value.to_json());
        }
    }

    groups
        .into_iter()
        .map(|(name, group)| (name, Value::Object(index_keys_first(group))))
        .collect()
}

/// Parses `key` as a JavaScript array index: digits only, no leading zero,
/// below `u32::MAX`.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

fn index_keys_first(map: Map<String, Value>) -> Map<String, Value> {
    let (mut indexed, named): (Vec<_>, Vec<_>) = map
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Object(inner) => Value::Object(index_keys_first(inner)),
                other => other,
            };
            (key, value)
        })
        .partition(|(key, _)| array_index(key).is_some());
    indexed.sort_by_key(|(key, _)| array_index(key));
    indexed.into_iter().chain(named).collect()
}

/// Renders [`to_nested`] as JSON indented by two spaces.
pub fn to_nested_json(
    rows: &[ExportRow],
    merge_nested_colors: bool,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Value::Object(to_nested(rows, merge_nested_colors)))
}

/// Builds `{"a": {"b": value}}` from `"a-b"`.
fn nested_from_path(path: &str, value: Value) -> Map<String, Value> {
    let mut current = value;
    for segment in path.rsplit('-') {
        let mut level = Map::new();
        level.insert(segment.to_string(), current);
        current = Value::Object(level);
    }
    match current {
        Value::Object(root) => root,
        _ => Map::new(),
    }
}
