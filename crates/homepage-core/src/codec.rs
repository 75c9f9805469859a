//! Plain-text form of the shortcut lists used by the settings text area.
//!
//! One record per shortcut, three lines each (name, URL, icon URL), records
//! separated by a blank line. The visible and folded lists are joined by a
//! line holding [`FOLD_SEPARATOR`].

use crate::config::Shortcut;

pub const FOLD_SEPARATOR: &str = "-----";

const RECORD_SEPARATOR: &str = "\n\n";
const DEFAULT_NAME: &str = "Link";
const DEFAULT_HREF: &str = "#";

pub fn encode(shortcuts: &[Shortcut]) -> String {
  shortcuts
    .iter()
    .map(|shortcut| {
      format!(
        "{}\n{}\n{}",
        shortcut.name,
        shortcut.href,
        shortcut.icon
      )
      .trim()
      .to_string()
    })
    .collect::<Vec<_>>()
    .join(RECORD_SEPARATOR)
    .trim()
    .to_string()
}

pub fn decode(text: &str) -> Vec<Shortcut> {
  let text = normalize_newlines(text);
  text
    .split(RECORD_SEPARATOR)
    .map(str::trim)
    .filter(|record| !record.is_empty())
    .map(decode_record)
    .collect()
}

fn decode_record(record: &str) -> Shortcut {
  let mut fields =
    record.split('\n').map(str::trim);
  Shortcut {
    name: field_or(
      fields.next(),
      DEFAULT_NAME
    ),
    href: field_or(
      fields.next(),
      DEFAULT_HREF
    ),
    icon: field_or(fields.next(), "")
  }
}

fn field_or(
  field: Option<&str>,
  fallback: &str
) -> String {
  field
    .filter(|field| !field.is_empty())
    .unwrap_or(fallback)
    .to_string()
}

/// Both lists as one editable block.
pub fn encode_lists(
  shortcuts: &[Shortcut],
  folded: &[Shortcut]
) -> String {
  format!(
    "{}\n\n{FOLD_SEPARATOR}\n\n{}",
    encode(shortcuts),
    encode(folded)
  )
}

/// Inverse of [`encode_lists`]. Without a separator every record is
/// visible; anything after a second separator is dropped.
pub fn decode_lists(
  text: &str
) -> (Vec<Shortcut>, Vec<Shortcut>) {
  let text = normalize_newlines(text);
  let mut parts =
    text.split(FOLD_SEPARATOR);
  let shortcuts = parts
    .next()
    .map(decode)
    .unwrap_or_default();
  let folded = parts
    .next()
    .map(decode)
    .unwrap_or_default();

  tracing::debug!(
    shortcuts = shortcuts.len(),
    folded = folded.len(),
    "decoded shortcut lists"
  );
  (shortcuts, folded)
}

fn normalize_newlines(text: &str) -> String {
  text.replace("\r\n", "\n")
}
