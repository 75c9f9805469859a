use gloo::console::log;
use gloo::timers::future::TimeoutFuture;
use homepage_core::config::ConfigAction;
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::browser::{
  config_store,
  millis_until_clock_tick,
  now_clock_text
};
use crate::components::{
  Clock,
  SearchBox,
  SettingsForm,
  ShortcutGrid,
  margin_style
};

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(|| config_store().load());
  let editing = use_state(|| false);
  let folding = use_state(|| true);
  let clock_text =
    use_state(now_clock_text);

  {
    let clock_text = clock_text.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "starting minute clock"
      );
      wasm_bindgen_futures::spawn_local(
        async move {
          loop {
            TimeoutFuture::new(
              millis_until_clock_tick()
            )
            .await;
            clock_text
              .set(now_clock_text());
          }
        }
      );
      || ()
    });
  }

  let on_action = {
    let config = config.clone();
    Callback::from(
      move |action: ConfigAction| {
        tracing::debug!(
          ?action,
          "applying settings edit"
        );
        let next =
          (*config).clone().apply(action);
        config_store().save(&next);
        config.set(next);
      }
    )
  };

  let toggle_editing = {
    let editing = editing.clone();
    Callback::from(move |_: MouseEvent| {
      editing.set(!*editing)
    })
  };

  let toggle_folding = {
    let folding = folding.clone();
    Callback::from(move |_: MouseEvent| {
      folding.set(!*folding)
    })
  };

  let body = if *editing {
    html! {
        <SettingsForm config={(*config).clone()} {on_action} />
    }
  } else {
    let rows = config.shortcut_rows;
    html! {
        <>
            <Clock text={(*clock_text).clone()} align={config.time_align} />
            {
                match margin_style(config.shortcut_margin) {
                    Some(style) => html! { <div class="m" {style}></div> },
                    None => html! {},
                }
            }
            <SearchBox />
            <ShortcutGrid shortcuts={config.shortcuts.clone()} {rows} />
            {
                if *folding {
                    html! {}
                } else {
                    html! { <ShortcutGrid shortcuts={config.folded_shortcuts.clone()} {rows} /> }
                }
            }
            {
                if config.has_folded() {
                    html! {
                        <button class="btn-fold" onclick={toggle_folding}>
                            { if *folding { "∨" } else { "∧" } }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
  };

  html! {
      <>
          { body }
          <button class="btn-edit" onclick={toggle_editing}>
              { if *editing { "Done" } else { "Edit" } }
          </button>
      </>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
