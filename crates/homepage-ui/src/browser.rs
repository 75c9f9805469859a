use anyhow::anyhow;
use homepage_core::layout::{
  clock_text,
  millis_until_next_minute
};
use homepage_core::redirect::plan_redirect;
use homepage_core::store::{
  ConfigStore,
  KeyValueStore
};
use wasm_bindgen::JsValue;
use web_sys::{
  Storage,
  Window
};

/// `window.localStorage` as a [`KeyValueStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
  fn storage() -> anyhow::Result<Storage> {
    window()?
      .local_storage()
      .map_err(js_error)?
      .ok_or_else(|| {
        anyhow!(
          "local storage unavailable"
        )
      })
  }
}

impl KeyValueStore for LocalStorage {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Self::storage()?
      .get_item(key)
      .map_err(js_error)
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    Self::storage()?
      .set_item(key, value)
      .map_err(js_error)
  }
}

pub fn config_store()
-> ConfigStore<LocalStorage> {
  ConfigStore::new(LocalStorage)
}

pub fn now_clock_text() -> String {
  clock_text(&chrono::Local::now())
}

pub fn millis_until_clock_tick() -> u32 {
  millis_until_next_minute(
    &chrono::Local::now()
  )
}

/// Replaces the current page.
pub fn navigate(
  url: &str
) -> anyhow::Result<()> {
  window()?
    .location()
    .set_href(url)
    .map_err(js_error)
}

/// Runs before mounting: when the page URL asks for it, reopen the page in
/// a new tab and step this tab back. Returns true when the new tab opened,
/// in which case nothing should be rendered.
pub fn redirect_back_if_requested()
-> bool {
  match try_redirect_back() {
    | Ok(opened) => opened,
    | Err(error) => {
      tracing::warn!(
        error = %format!("{error:#}"),
        "redirect check failed; rendering normally"
      );
      false
    }
  }
}

fn try_redirect_back()
-> anyhow::Result<bool> {
  let window = window()?;
  let page_url = window
    .location()
    .href()
    .map_err(js_error)?;
  let history_length = window
    .history()
    .map_err(js_error)?
    .length()
    .map_err(js_error)?;

  let Some(target) = plan_redirect(
    &page_url,
    history_length
  ) else {
    return Ok(false);
  };

  open_in_new_tab_and_back(
    &window, &target
  )
}

fn open_in_new_tab_and_back(
  window: &Window,
  url: &str
) -> anyhow::Result<bool> {
  let opened = window
    .open_with_url_and_target(
      url, "_blank"
    )
    .map_err(js_error)?;

  let Some(tab) = opened else {
    tracing::info!(
      url,
      "new tab was blocked"
    );
    return Ok(false);
  };

  if let Err(error) = tab.focus() {
    tracing::debug!(
      error = ?error,
      "could not focus new tab"
    );
  }
  window
    .history()
    .map_err(js_error)?
    .back()
    .map_err(js_error)?;
  Ok(true)
}

fn window() -> anyhow::Result<Window> {
  web_sys::window().ok_or_else(|| {
    anyhow!("no global window")
  })
}

fn js_error(
  value: JsValue
) -> anyhow::Error {
  anyhow!("browser error: {value:?}")
}
