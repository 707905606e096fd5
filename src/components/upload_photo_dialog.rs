//! Upload Photo Dialog
//!
//! Pick an image, preview it locally, add a caption and optionally make it
//! the recipe's cover.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, HtmlInputElement, Url};

use crate::models::{PhotoUpload, RecipePhoto};
use crate::notify::{Notifier, Notify};
use crate::session::Session;

use super::{reset_after_close, Dialog};

#[component]
pub fn UploadPhotoDialog(
    open: RwSignal<bool>,
    session: Session,
    notifier: Notifier,
    recipe_id: u32,
    on_uploaded: Callback<RecipePhoto>,
) -> impl IntoView {
    let file = RwSignal::new_local(None::<File>);
    let preview = RwSignal::new(None::<String>);
    let caption = RwSignal::new(String::new());
    let make_cover = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    // Object URLs hold the file in memory until revoked
    let set_preview = move |url: Option<String>| {
        if let Some(old) = preview.get_untracked() {
            if let Err(e) = Url::revoke_object_url(&old) {
                tracing::warn!(error = ?e, "failed to revoke preview url");
            }
        }
        preview.set(url);
    };

    let reset = move || {
        set_preview(None);
        file.set(None);
        caption.set(String::new());
        make_cover.set(false);
    };

    let on_file = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let picked = input.files().and_then(|files| files.get(0));
        let url = picked.as_ref().and_then(|f| Url::create_object_url_with_blob(f).ok());
        set_preview(url);
        file.set(picked);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(photo) = file.get_untracked() else {
            notifier.warning("Choose a photo to upload.");
            return;
        };
        let upload = PhotoUpload {
            caption: caption.get_untracked().trim().to_string(),
            is_cover_image: make_cover.get_untracked(),
            username: session.username().unwrap_or_default(),
        };

        submitting.set(true);
        spawn_local(async move {
            match session.api().upload_photo(recipe_id, &upload, &photo).await {
                Ok(uploaded) => {
                    notifier.success("Photo uploaded!");
                    on_uploaded.run(uploaded);
                    open.set(false);
                    reset_after_close(reset);
                }
                Err(e) => notifier.errors(&e.messages()),
            }
            submitting.set(false);
        });
    };

    view! {
        <Dialog open=open title="Upload a Photo" on_close=Callback::new(move |_| reset_after_close(reset))>
            <form class="dialog-form" on:submit=on_submit>
                <input type="file" name="photo" accept="image/*" on:change=on_file/>
                {move || preview.get().map(|url| view! {
                    <img class="photo-preview" src=url alt="Selected photo preview"/>
                })}
                <label>
                    "Caption (optional)"
                    <input
                        type="text"
                        name="caption"
                        prop:value=move || caption.get()
                        on:input=move |ev| caption.set(event_target_value(&ev))
                    />
                </label>
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        name="makeCover"
                        prop:checked=move || make_cover.get()
                        on:change=move |ev| make_cover.set(event_target_checked(&ev))
                    />
                    "Upload as new cover photo?"
                </label>
                <div class="dialog-actions">
                    <button type="button" on:click=move |_| { open.set(false); reset_after_close(reset); }>"Cancel"</button>
                    <button type="submit" class="primary" disabled=move || submitting.get()>"Upload"</button>
                </div>
            </form>
        </Dialog>
    }
}
