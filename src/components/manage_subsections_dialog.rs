//! Manage Subsections Dialog
//!
//! Add, rename and remove the subsection headings of the recipe being
//! edited. Changes apply to the draft only when saved.

use leptos::prelude::*;

use crate::subsections::SubsectionEditor;

use super::{DeleteConfirmButton, Dialog};

#[component]
pub fn ManageSubsectionsDialog(
    open: RwSignal<bool>,
    #[prop(into)] labels: Signal<Vec<String>>,
    on_save: Callback<Vec<String>>,
) -> impl IntoView {
    let editor = RwSignal::new(SubsectionEditor::default());

    // Fresh working copy each time the dialog opens
    Effect::new(move |_| {
        if open.get() {
            editor.set(SubsectionEditor::new(&labels.get_untracked()));
        }
    });

    let save = move |_| {
        on_save.run(editor.with_untracked(|e| e.labels()));
        open.set(false);
    };

    view! {
        <Dialog open=open title="Manage Subsections">
            <p class="dialog-text">
                "Group ingredients under headings like \"Filling\" or \"Frosting\". "
                "Removing a subsection clears it from its ingredients."
            </p>
            <ul class="subsection-list">
                <For
                    each=move || editor.with(|e| e.entries().iter().map(|entry| entry.key).collect::<Vec<_>>())
                    key=|key| *key
                    children=move |key| view! {
                        <li class="subsection-row">
                            <input
                                type="text"
                                placeholder="Subsection name"
                                prop:value=move || editor.with(|e| e.label(key).unwrap_or_default())
                                on:input=move |ev| {
                                    let label = event_target_value(&ev);
                                    editor.update(|e| {
                                        if let Err(err) = e.rename(key, label) {
                                            tracing::warn!(error = %err, "rename failed");
                                        }
                                    });
                                }
                            />
                            <DeleteConfirmButton
                                label="subsection"
                                on_confirm=Callback::new(move |_| editor.update(|e| {
                                    if let Err(err) = e.remove(key) {
                                        tracing::warn!(error = %err, "remove failed");
                                    }
                                }))
                            />
                        </li>
                    }
                />
            </ul>
            <button type="button" class="add-entry-btn" on:click=move |_| editor.update(|e| { e.add(); })>
                "Add subsection"
            </button>
            <div class="dialog-actions">
                <button type="button" on:click=move |_| open.set(false)>"Cancel"</button>
                <button type="button" class="primary" on:click=save>"Save"</button>
            </div>
        </Dialog>
    }
}
