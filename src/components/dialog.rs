//! Dialog Component
//!
//! Modal shell shared by every dialog: backdrop, title, body and actions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::FORM_CLEAR_DELAY_MS;

/// Run `reset` after the dialog has finished closing
pub fn reset_after_close(reset: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(FORM_CLEAR_DELAY_MS).await;
        reset();
    });
}

/// Modal rendered while `open` is true. Clicking the backdrop closes it.
#[component]
pub fn Dialog(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] on_close: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let close = move || {
        open.set(false);
        if let Some(on_close) = on_close {
            on_close.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div
                    class="dialog"
                    role="dialog"
                    aria-label=title.clone()
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 class="dialog-title">{title.clone()}</h2>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
