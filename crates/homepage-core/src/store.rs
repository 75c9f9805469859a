use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Context;
use serde_json::{
  Map,
  Value
};
use tracing::{
  debug,
  info,
  warn
};

use crate::config::{
  Configuration,
  STORAGE_KEY
};

/// Durable string key-value storage (browser local storage in the page).
pub trait KeyValueStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

/// Process-local store for tests and for pages without local storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: RefCell<HashMap<String, String>>
}

impl MemoryStore {
  pub fn with_entry(
    key: &str,
    value: &str
  ) -> Self {
    let store = Self::default();
    store.entries.borrow_mut().insert(
      key.to_string(),
      value.to_string()
    );
    store
  }

  pub fn raw(
    &self,
    key: &str
  ) -> Option<String> {
    self.entries.borrow().get(key).cloned()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.raw(key))
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self.entries.borrow_mut().insert(
      key.to_string(),
      value.to_string()
    );
    Ok(())
  }
}

/// Loads and saves the [`Configuration`] under a single storage key.
#[derive(Debug, Clone)]
pub struct ConfigStore<S> {
  backend: S,
  key:     String
}

impl<S: KeyValueStore> ConfigStore<S> {
  pub fn new(backend: S) -> Self {
    Self::with_key(backend, STORAGE_KEY)
  }

  pub fn with_key(
    backend: S,
    key: &str
  ) -> Self {
    Self {
      backend,
      key: key.to_string()
    }
  }

  pub fn backend(&self) -> &S {
    &self.backend
  }

  /// Stored fields shallow-merged over the defaults.
  ///
  /// An unreadable backend counts as an empty store. A field that does not
  /// fit keeps its default; a value that is not JSON at all is replaced
  /// with the defaults.
  #[tracing::instrument(
    skip(self),
    fields(key = %self.key)
  )]
  pub fn load(&self) -> Configuration {
    let raw = match self
      .backend
      .get(&self.key)
    {
      | Ok(raw) => raw,
      | Err(error) => {
        warn!(
          error = %format!("{error:#}"),
          "storage read failed; using defaults"
        );
        None
      }
    };

    let Some(raw) = raw else {
      debug!("no stored configuration");
      return Configuration::default();
    };

    match merge_over_defaults(&raw) {
      | Ok(config) => {
        debug!(
          shortcuts = config.shortcuts.len(),
          folded = config
            .folded_shortcuts
            .len(),
          "loaded configuration"
        );
        config
      }
      | Err(error) => {
        warn!(
          error = %format!("{error:#}"),
          "stored configuration is corrupt; resetting"
        );
        let defaults =
          Configuration::default();
        self.save(&defaults);
        defaults
      }
    }
  }

  /// Overwrites the stored value. Write failures are logged and dropped.
  #[tracing::instrument(
    skip(self, config),
    fields(key = %self.key)
  )]
  pub fn save(
    &self,
    config: &Configuration
  ) {
    let result =
      serde_json::to_string(config)
        .context(
          "failed to serialize \
           configuration"
        )
        .and_then(|json| {
          self
            .backend
            .set(&self.key, &json)
        });

    match result {
      | Ok(()) => {
        debug!("saved configuration")
      }
      | Err(error) => warn!(
        error = %format!("{error:#}"),
        "failed to save configuration"
      )
    }
  }
}

/// Fails only when `raw` is not JSON. Each top-level field is taken on its
/// own; one that does not decode is logged and left at its default.
fn merge_over_defaults(
  raw: &str
) -> anyhow::Result<Configuration> {
  let stored: Value =
    serde_json::from_str(raw).context(
      "stored value is not JSON"
    )?;

  let Value::Object(stored) = stored
  else {
    info!(
      "stored value is not an object; \
       using defaults"
    );
    return Ok(Configuration::default());
  };

  let mut merged = default_fields()?;
  let mut config =
    Configuration::default();

  for (field, value) in stored {
    let mut candidate = merged.clone();
    candidate.insert(field.clone(), value);

    match serde_json::from_value::<
      Configuration
    >(Value::Object(
      candidate.clone()
    )) {
      | Ok(next) => {
        merged = candidate;
        config = next;
      }
      | Err(error) => {
        warn!(
          field = %field,
          %error,
          "stored field does not fit; keeping default"
        );
      }
    }
  }

  Ok(config)
}

fn default_fields()
-> anyhow::Result<Map<String, Value>> {
  match serde_json::to_value(
    Configuration::default()
  )? {
    | Value::Object(map) => Ok(map),
    | _ => anyhow::bail!(
      "default configuration did not \
       serialize to an object"
    )
  }
}
