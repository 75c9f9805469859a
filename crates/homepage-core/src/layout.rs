use chrono::Timelike;
use url::Url;

use crate::config::Shortcut;

pub const FAVICON_SERVICE: &str =
  "https://www.google.com/s2/favicons?sz=64&sz=32&sz=16&domain=";

/// `HH:MM` on a 24-hour clock.
pub fn clock_text<T: Timelike>(
  time: &T
) -> String {
  format!(
    "{:02}:{:02}",
    time.hour(),
    time.minute()
  )
}

/// Milliseconds until one second past the next minute boundary.
///
/// Waking slightly after the boundary keeps a late timer from redrawing
/// the minute that is just ending.
pub fn millis_until_next_minute<
  T: Timelike
>(
  time: &T
) -> u32 {
  let elapsed_ms = time.second().min(59)
    * 1_000
    + (time.nanosecond() / 1_000_000)
      .min(999);
  61_000 - elapsed_ms
}

/// Share of the row width one tile takes, in percent.
pub fn tile_width_percent(
  rows: u32
) -> f64 {
  100.0 / f64::from(rows.max(1))
}

/// The image a tile shows: the explicit icon, else the favicon service for
/// the link's host. `None` when neither is available (e.g. `href = "#"`).
pub fn icon_src(
  shortcut: &Shortcut
) -> Option<String> {
  if !shortcut.icon.is_empty() {
    return Some(shortcut.icon.clone());
  }

  let host = Url::parse(&shortcut.href)
    .ok()?
    .host_str()?
    .to_string();
  Some(format!(
    "{FAVICON_SERVICE}{host}"
  ))
}

/// Single-letter stand-in shown when a tile has no image.
pub fn tile_initial(
  shortcut: &Shortcut
) -> String {
  shortcut
    .name
    .chars()
    .next()
    .map(|c| c.to_uppercase().collect())
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use chrono::NaiveTime;

  use super::*;

  fn at(
    h: u32,
    m: u32,
    s: u32,
    ms: u32
  ) -> NaiveTime {
    NaiveTime::from_hms_milli_opt(
      h, m, s, ms
    )
    .expect("valid time")
  }

  #[test]
  fn clock_is_zero_padded_24_hour() {
    assert_eq!(clock_text(&at(7, 5, 0, 0)), "07:05");
    assert_eq!(clock_text(&at(23, 59, 59, 0)), "23:59");
    assert_eq!(clock_text(&at(0, 0, 0, 0)), "00:00");
  }

  #[test]
  fn next_tick_lands_just_after_the_minute() {
    assert_eq!(
      millis_until_next_minute(&at(10, 0, 0, 0)),
      61_000
    );
    assert_eq!(
      millis_until_next_minute(&at(10, 0, 30, 500)),
      30_500
    );
    assert_eq!(
      millis_until_next_minute(&at(10, 0, 59, 999)),
      1_001
    );
  }

  #[test]
  fn tile_width_divides_the_row() {
    assert!((tile_width_percent(3) - 100.0 / 3.0).abs() < f64::EPSILON);
    assert!((tile_width_percent(4) - 25.0).abs() < f64::EPSILON);
    assert!((tile_width_percent(0) - 100.0).abs() < f64::EPSILON);
  }

  #[test]
  fn explicit_icon_wins() {
    let shortcut = Shortcut::new(
      "Site",
      "https://example.com/",
      "https://cdn.example.com/i.png"
    );
    assert_eq!(
      icon_src(&shortcut).as_deref(),
      Some("https://cdn.example.com/i.png")
    );
  }

  #[test]
  fn favicon_uses_href_host() {
    let shortcut = Shortcut::new(
      "Google",
      "https://www.google.com/search?q=1",
      ""
    );
    assert_eq!(
      icon_src(&shortcut),
      Some(format!(
        "{FAVICON_SERVICE}www.google.com"
      ))
    );
  }

  #[test]
  fn unparseable_href_has_no_icon() {
    let shortcut =
      Shortcut::new("Link", "#", "");
    assert_eq!(icon_src(&shortcut), None);
    assert_eq!(tile_initial(&shortcut), "L");
    assert_eq!(
      tile_initial(&Shortcut::default()),
      ""
    );
  }
}
