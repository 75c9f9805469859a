//! Redirect trampoline: a page loaded with `?n=<count>` reopens itself in a
//! new tab and steps the original tab back, leaving no history entry.

use url::Url;

pub const COUNT_PARAM: &str = "n";
pub const DEFAULT_MIN_HISTORY: i64 = 2;

/// Decides whether the page at `page_url` should pop out into a new tab.
///
/// Returns the URL to open (the page without its query or fragment) when
/// the `n` parameter is present and `history_length` has reached it. A
/// missing or unparseable page URL never redirects.
pub fn plan_redirect(
  page_url: &str,
  history_length: u32
) -> Option<String> {
  let mut url = Url::parse(page_url).ok()?;

  let raw_count = url
    .query_pairs()
    .find(|(key, _)| key == COUNT_PARAM)
    .map(|(_, value)| value.into_owned())?;

  let min_history =
    crate::numeric::parse_leading_int(
      &raw_count
    )
    .unwrap_or(DEFAULT_MIN_HISTORY);

  if i64::from(history_length) < min_history
  {
    tracing::debug!(
      history_length,
      min_history,
      "redirect parameter present but history too short"
    );
    return None;
  }

  url.set_query(None);
  url.set_fragment(None);
  tracing::info!(
    destination = %url,
    history_length,
    min_history,
    "redirecting into a new tab"
  );
  Some(url.into())
}
