mod app;
mod browser;
mod components;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting homepage frontend"
  );

  if browser::redirect_back_if_requested()
  {
    tracing::info!(
      "opened redirect target in a new \
       tab; skipping render"
    );
    return;
  }

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("root")
    })
    .expect(
      "missing #root mount element"
    );

  yew::Renderer::<app::App>::with_root(
    mount
  )
  .render();
}
