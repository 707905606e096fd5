//! Draft List Rows
//!
//! One editable row per ingredient line, step and note of a recipe draft.
//! Rows address their entry by key and report changes as [`DraftUpdate`]s.

use leptos::prelude::*;

use crate::draft::{DraftList, DraftUpdate, EntryField, EntryKey, RecipeDraft};
use crate::store::{CatalogStateStoreFields, CatalogStore};

use super::DeleteConfirmButton;

/// 1-based position of `entry` in `list`, for row labels
fn position(draft: RwSignal<RecipeDraft>, list: DraftList, entry: EntryKey) -> usize {
    draft.with(|d| d.entry_keys(list).iter().position(|k| *k == entry).map_or(0, |i| i + 1))
}

#[component]
pub fn ItemLineRow(
    draft: RwSignal<RecipeDraft>,
    entry: EntryKey,
    catalog: CatalogStore,
    on_update: Callback<DraftUpdate>,
) -> impl IntoView {
    let value = move |field: EntryField| {
        draft.with(|d| d.field_value(DraftList::Items, entry, field).unwrap_or_default())
    };
    let edit = move |field: EntryField, value: String| {
        on_update.run(DraftUpdate::Edit { list: DraftList::Items, key: entry, field, value });
    };
    let subsections = Memo::new(move |_| draft.with(|d| d.subsections.clone()));

    view! {
        <div class="draft-row item-row">
            <input
                class="amount-input"
                type="text"
                inputmode="decimal"
                placeholder="Amount"
                aria-label=move || format!("Amount of ingredient {}", position(draft, DraftList::Items, entry))
                prop:value=move || value(EntryField::Amount)
                on:input=move |ev| edit(EntryField::Amount, event_target_value(&ev))
            />
            <select class="unit-select" aria-label="Unit" on:change=move |ev| edit(EntryField::Unit, event_target_value(&ev))>
                <option value="" selected=move || value(EntryField::Unit).is_empty()>"No unit"</option>
                {move || catalog.units().get().into_iter().map(|unit| {
                    let short = unit.short.clone();
                    view! {
                        <option value=unit.short.clone() selected=move || value(EntryField::Unit) == short>
                            {unit.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <input
                class="ingredient-input"
                type="text"
                list="ingredient-options"
                placeholder="Ingredient"
                prop:value=move || value(EntryField::Ingredient)
                on:change=move |ev| edit(EntryField::Ingredient, event_target_value(&ev))
            />
            <input
                class="description-input"
                type="text"
                placeholder="Description (e.g. finely chopped)"
                prop:value=move || value(EntryField::Description)
                on:input=move |ev| edit(EntryField::Description, event_target_value(&ev))
            />
            <Show when=move || !subsections.get().is_empty()>
                <select
                    class="subsection-select"
                    aria-label="Subsection"
                    on:change=move |ev| edit(EntryField::Subsection, event_target_value(&ev))
                >
                    <option value="" selected=move || value(EntryField::Subsection).is_empty()>"No subsection"</option>
                    {move || subsections.get().into_iter().map(|label| {
                        let current = label.clone();
                        view! {
                            <option value=label.clone() selected=move || value(EntryField::Subsection) == current>
                                {label.clone()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </Show>
            <DeleteConfirmButton
                label="ingredient"
                on_confirm=Callback::new(move |_| on_update.run(DraftUpdate::Remove { list: DraftList::Items, key: entry }))
            />
        </div>
    }
}

#[component]
pub fn StepLineRow(
    draft: RwSignal<RecipeDraft>,
    entry: EntryKey,
    on_update: Callback<DraftUpdate>,
) -> impl IntoView {
    view! {
        <div class="draft-row step-row">
            <span class="step-number">{move || position(draft, DraftList::Steps, entry)}"."</span>
            <textarea
                placeholder="Describe this step"
                prop:value=move || draft.with(|d| {
                    d.field_value(DraftList::Steps, entry, EntryField::Description).unwrap_or_default()
                })
                on:input=move |ev| on_update.run(DraftUpdate::Edit {
                    list: DraftList::Steps,
                    key: entry,
                    field: EntryField::Description,
                    value: event_target_value(&ev),
                })
            ></textarea>
            <DeleteConfirmButton
                label="step"
                on_confirm=Callback::new(move |_| on_update.run(DraftUpdate::Remove { list: DraftList::Steps, key: entry }))
            />
        </div>
    }
}

#[component]
pub fn NoteLineRow(
    draft: RwSignal<RecipeDraft>,
    entry: EntryKey,
    on_update: Callback<DraftUpdate>,
) -> impl IntoView {
    view! {
        <div class="draft-row note-row">
            <textarea
                placeholder="Note"
                prop:value=move || draft.with(|d| {
                    d.field_value(DraftList::Notes, entry, EntryField::Note).unwrap_or_default()
                })
                on:input=move |ev| on_update.run(DraftUpdate::Edit {
                    list: DraftList::Notes,
                    key: entry,
                    field: EntryField::Note,
                    value: event_target_value(&ev),
                })
            ></textarea>
            <DeleteConfirmButton
                label="note"
                on_confirm=Callback::new(move |_| on_update.run(DraftUpdate::Remove { list: DraftList::Notes, key: entry }))
            />
        </div>
    }
}
