//! Speed Dial Component
//!
//! Floating action button that fans out a short list of page actions.

use leptos::prelude::*;

#[derive(Clone)]
pub struct DialAction {
    pub icon: &'static str,
    pub label: &'static str,
    pub on_click: Callback<()>,
}

impl DialAction {
    pub fn new(icon: &'static str, label: &'static str, on_click: impl Fn() + Send + Sync + 'static) -> Self {
        Self { icon, label, on_click: Callback::new(move |_| on_click()) }
    }
}

#[component]
pub fn SpeedDial(#[prop(into)] label: String, actions: Vec<DialAction>) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class=move || if open.get() { "speed-dial open" } else { "speed-dial" }>
            <Show when=move || open.get()>
                <ul class="speed-dial-actions">
                    {actions.iter().cloned().map(|action| view! {
                        <li>
                            <button
                                class="speed-dial-action"
                                title=action.label
                                on:click=move |_| {
                                    set_open.set(false);
                                    action.on_click.run(());
                                }
                            >
                                <span class="speed-dial-icon">{action.icon}</span>
                                <span class="speed-dial-label">{action.label}</span>
                            </button>
                        </li>
                    }).collect_view()}
                </ul>
            </Show>
            <button
                class="speed-dial-toggle"
                aria-label=label
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || if open.get() { "×" } else { "+" }}
            </button>
        </div>
    }
}

/// Stand-in for page actions while the user's e-mail is unverified
#[component]
pub fn UnverifiedUserSpeedDial() -> impl IntoView {
    let actions = vec![DialAction::new("✉", "Verify your e-mail address to view user actions!", || {})];
    view! { <SpeedDial label="Unverified user actions" actions=actions/> }
}
