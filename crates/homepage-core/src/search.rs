use std::sync::OnceLock;

use regex::Regex;

pub const SEARCH_ENGINE: &str =
  "https://duckduckgo.com/?q=";

/// Where the search box sends the current tab for `input`.
///
/// Address-like input opens directly, upgraded to `https`; anything else
/// becomes a search engine query. `None` for blank input.
pub fn resolve_search(
  input: &str
) -> Option<String> {
  let value = input.trim();
  if value.is_empty() {
    return None;
  }

  let captures = address_re()
    .and_then(|re| re.captures(value));

  let target = match captures {
    | Some(caps) => {
      match caps
        .name("scheme")
        .map(|m| m.as_str())
      {
        | None => {
          format!("https://{value}")
        }
        | Some("http:") => {
          format!("https:{}", &value[5..])
        }
        | Some(_) => value.to_string()
      }
    }
    | None => format!(
      "{SEARCH_ENGINE}{}",
      encode_query(value)
    )
  };

  tracing::debug!(
    input = value,
    destination = %target,
    "resolved search input"
  );
  Some(target)
}

// optional scheme, a dotted label, optional path
fn address_re() -> Option<&'static Regex> {
  static ADDRESS_RE: OnceLock<
    Option<Regex>
  > = OnceLock::new();
  ADDRESS_RE
    .get_or_init(|| {
      Regex::new(
        r"^(?P<scheme>[-A-Za-z]+:)?\S+\.[A-Za-z0-9]+(/\S*)?$"
      )
      .ok()
    })
    .as_ref()
}

/// Percent-encodes a query value, leaving `!'()*` as browsers'
/// `encodeURIComponent` does.
fn encode_query(value: &str) -> String {
  urlencoding::encode(value)
    .replace("%21", "!")
    .replace("%27", "'")
    .replace("%28", "(")
    .replace("%29", ")")
    .replace("%2A", "*")
}
