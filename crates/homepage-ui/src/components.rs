use homepage_core::codec::{
  decode_lists,
  encode_lists
};
use homepage_core::config::{
  ConfigAction,
  Configuration,
  Shortcut,
  TimeAlign
};
use homepage_core::layout::{
  icon_src,
  tile_initial,
  tile_width_percent
};
use homepage_core::numeric::parse_form_u32;
use homepage_core::search::resolve_search;
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement
};
use yew::{
  Callback,
  Event,
  Html,
  KeyboardEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

use crate::browser::navigate;

#[derive(Properties, PartialEq)]
pub struct ClockProps {
  pub text:  String,
  pub align: TimeAlign
}

#[function_component(Clock)]
pub fn clock(
  props: &ClockProps
) -> Html {
  html! {
      <div class="clock" style={clock_style(props.align)}>
          <span class="clock-text">{ &props.text }</span>
      </div>
  }
}

#[function_component(SearchBox)]
pub fn search_box() -> Html {
  let onkeydown =
    Callback::from(|e: KeyboardEvent| {
      if e.key() != "Enter" {
        return;
      }
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let Some(target) =
        resolve_search(&input.value())
      else {
        return;
      };
      tracing::info!(
        destination = %target,
        "search navigation"
      );
      if let Err(error) = navigate(&target)
      {
        tracing::error!(
          error = %format!("{error:#}"),
          "failed to navigate"
        );
      }
    });

  html! {
      <div class="f-cen search-box">
          <input type="search" class="search-form" placeholder="https://" {onkeydown} />
      </div>
  }
}

#[derive(Properties, PartialEq)]
pub struct ShortcutGridProps {
  pub shortcuts: Vec<Shortcut>,
  pub rows:      u32
}

#[function_component(ShortcutGrid)]
pub fn shortcut_grid(
  props: &ShortcutGridProps
) -> Html {
  let style = tile_style(props.rows);
  html! {
      <div class="shortcuts">
          {
              for props.shortcuts.iter().map(|shortcut| {
                  let image = match icon_src(shortcut) {
                      | Some(src) => html! { <img src={src} alt={shortcut.name.clone()} /> },
                      | None => html! { <span class="initial">{ tile_initial(shortcut) }</span> }
                  };
                  html! {
                      <div class="s-w" style={style.clone()}>
                          <a class="f-cen shortcut" href={shortcut.href.clone()}>
                              { image }
                              <div class="label">{ &shortcut.name }</div>
                          </a>
                      </div>
                  }
              })
          }
      </div>
  }
}

#[derive(Properties, PartialEq)]
pub struct SettingsFormProps {
  pub config:    Configuration,
  pub on_action: Callback<ConfigAction>
}

#[function_component(SettingsForm)]
pub fn settings_form(
  props: &SettingsFormProps
) -> Html {
  let config = &props.config;

  let on_align = {
    let on_action = props.on_action.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      match select
        .value()
        .parse::<TimeAlign>()
      {
        | Ok(align) => on_action.emit(
          ConfigAction::SetTimeAlign(align)
        ),
        | Err(error) => tracing::warn!(
          %error,
          "ignoring time alignment"
        )
      }
    })
  };

  let numeric_input =
    |make: fn(u32) -> ConfigAction| {
      let on_action =
        props.on_action.clone();
      Callback::from(move |e: Event| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        match parse_form_u32(&input.value())
        {
          | Some(value) => {
            on_action.emit(make(value))
          }
          | None => tracing::warn!(
            value = %input.value(),
            "ignoring non-numeric setting"
          )
        }
      })
    };
  let on_margin = numeric_input(
    ConfigAction::SetShortcutMargin
  );
  let on_rows = numeric_input(
    ConfigAction::SetShortcutRows
  );

  let on_list = {
    let on_action = props.on_action.clone();
    Callback::from(move |e: Event| {
      let area: HtmlTextAreaElement =
        e.target_unchecked_into();
      let (shortcuts, folded) =
        decode_lists(&area.value());
      on_action.emit(
        ConfigAction::ReplaceShortcuts {
          shortcuts,
          folded
        }
      );
    })
  };

  html! {
      <div class="settings">
          <h1>{ "Time" }</h1>
          <div>
              <label>
                  { "Time alignment: " }
                  <select onchange={on_align}>
                      {
                          for TimeAlign::ALL.iter().map(|align| html! {
                              <option value={align.as_str()} selected={*align == config.time_align}>
                                  { align.label() }
                              </option>
                          })
                      }
                  </select>
              </label>
          </div>
          <h1>{ "Shortcuts Config" }</h1>
          <div>
              <label>
                  { "Shortcut margin: " }
                  <input type="number" value={config.shortcut_margin.to_string()} onchange={on_margin.clone()} />
                  { "svh" }
              </label>
          </div>
          <input type="range" min="0" max="100" value={config.shortcut_margin.to_string()} onchange={on_margin} />
          <div>
              <label>
                  { "Shortcut rows: " }
                  <input type="number" min="1" value={config.shortcut_rows.to_string()} onchange={on_rows} />
              </label>
          </div>
          <h1>{ "Shortcut List" }</h1>
          <ul>
              <li>{ "Each item should be separated by a double newline" }</li>
              <li>{ "Each item should have 3 lines: Name, URL, Icon URL" }</li>
              <li>{ "Items below the ----- line are folded" }</li>
          </ul>
          <textarea
              rows="15"
              value={encode_lists(&config.shortcuts, &config.folded_shortcuts)}
              onchange={on_list}
          />
      </div>
  }
}

pub fn clock_style(
  align: TimeAlign
) -> String {
  format!("text-align: {align};")
}

/// Spacer above the search box; none when the margin is zero.
pub fn margin_style(
  margin: u32
) -> Option<String> {
  (margin > 0).then(|| {
    format!("height: {margin}svh;")
  })
}

pub fn tile_style(rows: u32) -> String {
  format!(
    "flex: 0 0 {}%;",
    tile_width_percent(rows)
  )
}
