use std::fmt;
use std::str::FromStr;

use serde::{
  Deserialize,
  Serialize
};

pub const STORAGE_KEY: &str =
  "__home_shortcuts_data";

/// Horizontal placement of the clock text.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeAlign {
  Left,
  #[default]
  Center,
  Right
}

impl TimeAlign {
  pub const ALL: [TimeAlign; 3] = [
    TimeAlign::Left,
    TimeAlign::Center,
    TimeAlign::Right
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Left => "left",
      | Self::Center => "center",
      | Self::Right => "right"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Left => "Left",
      | Self::Center => "Center",
      | Self::Right => "Right"
    }
  }
}

impl fmt::Display for TimeAlign {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for TimeAlign {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s.trim() {
      | "left" => Ok(Self::Left),
      | "center" => Ok(Self::Center),
      | "right" => Ok(Self::Right),
      | other => Err(anyhow::anyhow!(
        "unknown time alignment: {other}"
      ))
    }
  }
}

/// A named link tile. An empty `icon` means the favicon is derived from
/// `href`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct Shortcut {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub href: String,
  #[serde(default)]
  pub icon: String
}

impl Shortcut {
  pub fn new(
    name: impl Into<String>,
    href: impl Into<String>,
    icon: impl Into<String>
  ) -> Self {
    Self {
      name: name.into(),
      href: href.into(),
      icon: icon.into()
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
  pub time_align:       TimeAlign,
  pub shortcuts:        Vec<Shortcut>,
  pub folded_shortcuts: Vec<Shortcut>,
  /// Space above the search box, in `svh` units.
  pub shortcut_margin:  u32,
  /// Tiles per grid row.
  pub shortcut_rows:    u32
}

impl Default for Configuration {
  fn default() -> Self {
    Self {
      time_align:       TimeAlign::Center,
      shortcuts:        vec![Shortcut::new(
        "Google",
        "https://www.google.com/",
        ""
      )],
      folded_shortcuts: vec![],
      shortcut_margin:  30,
      shortcut_rows:    3
    }
  }
}

/// Every edit the settings form can make to a [`Configuration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
  SetTimeAlign(TimeAlign),
  SetShortcutMargin(u32),
  SetShortcutRows(u32),
  ReplaceShortcuts {
    shortcuts: Vec<Shortcut>,
    folded:    Vec<Shortcut>
  }
}

impl Configuration {
  pub fn apply(
    mut self,
    action: ConfigAction
  ) -> Self {
    match action {
      | ConfigAction::SetTimeAlign(
        align
      ) => self.time_align = align,
      | ConfigAction::SetShortcutMargin(
        margin
      ) => self.shortcut_margin = margin,
      // zero rows would divide by zero when sizing tiles
      | ConfigAction::SetShortcutRows(
        rows
      ) => self.shortcut_rows = rows.max(1),
      | ConfigAction::ReplaceShortcuts {
        shortcuts,
        folded
      } => {
        self.shortcuts = shortcuts;
        self.folded_shortcuts = folded;
      }
    }
    self
  }

  pub fn has_folded(&self) -> bool {
    !self.folded_shortcuts.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_first_run_layout() {
    let config = Configuration::default();
    assert_eq!(
      config.time_align,
      TimeAlign::Center
    );
    assert_eq!(config.shortcuts.len(), 1);
    assert_eq!(
      config.shortcuts[0].name,
      "Google"
    );
    assert_eq!(config.shortcuts[0].icon, "");
    assert!(
      config.folded_shortcuts.is_empty()
    );
    assert_eq!(config.shortcut_margin, 30);
    assert_eq!(config.shortcut_rows, 3);
  }

  #[test]
  fn serializes_with_camel_case_keys() {
    let json = serde_json::to_value(
      Configuration::default()
    )
    .expect("serialize");
    assert_eq!(json["timeAlign"], "center");
    assert_eq!(json["shortcutMargin"], 30);
    assert_eq!(json["shortcutRows"], 3);
    assert!(
      json["foldedShortcuts"]
        .as_array()
        .is_some()
    );
  }

  #[test]
  fn time_align_parses_only_known_values(
  ) {
    assert_eq!(
      "left".parse::<TimeAlign>().ok(),
      Some(TimeAlign::Left)
    );
    assert_eq!(
      " right ".parse::<TimeAlign>().ok(),
      Some(TimeAlign::Right)
    );
    assert!(
      "justify"
        .parse::<TimeAlign>()
        .is_err()
    );
    assert!(
      "Left".parse::<TimeAlign>().is_err()
    );
  }

  #[test]
  fn set_rows_never_stores_zero() {
    let config = Configuration::default()
      .apply(
        ConfigAction::SetShortcutRows(0)
      );
    assert_eq!(config.shortcut_rows, 1);

    let config = config.apply(
      ConfigAction::SetShortcutRows(5)
    );
    assert_eq!(config.shortcut_rows, 5);
  }

  #[test]
  fn replace_shortcuts_swaps_both_lists()
  {
    let config = Configuration::default()
      .apply(
        ConfigAction::ReplaceShortcuts {
          shortcuts: vec![],
          folded:    vec![Shortcut::new(
            "Rust",
            "https://www.rust-lang.org/",
            ""
          )]
        }
      );
    assert!(config.shortcuts.is_empty());
    assert!(config.has_folded());
  }
}
