//! One sticky note: content, completion checkbox, deadline, delete.
//!
//! DESIGN
//! ======
//! The card is keyed by task id and reads its note through a memo, so a
//! render that only reorders notes leaves the card alone. The deadline
//! editor has its own memo so urgency sweeps don't rebuild the input while
//! the user is typing in it.

#[cfg(test)]
#[path = "note_card_test.rs"]
mod note_card_test;

use board::board::Note;
use board::localtime::{Clock, SystemClock, to_local_label};
use board::task::TaskId;
use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::app::Controller;
use crate::state::board::BoardState;

/// CSS classes for a note: `note` plus completion, urgency, and drag modifiers.
pub fn note_class(note: &Note) -> String {
    let mut class = String::from("note");
    if note.task.is_completed {
        class.push_str(" completed");
    }
    if let Some(urgency) = note.urgency.class_name() {
        class.push(' ');
        class.push_str(urgency);
    }
    if note.dragging {
        class.push_str(" dragging");
    }
    class
}

/// Checkbox state once a toggle to `requested` has settled.
pub fn checkbox_after_toggle(requested: bool, saved: bool) -> bool {
    if saved { requested } else { !requested }
}

/// Deadline line under the content.
pub fn deadline_text(deadline: Option<DateTime<Utc>>, clock: &impl Clock) -> String {
    match deadline {
        Some(deadline) => format!("Due {}", to_local_label(deadline, clock)),
        None => "No deadline".to_owned(),
    }
}

#[component]
pub fn NoteCard(id: TaskId) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let controller = expect_context::<Controller>();
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    let note = Memo::new(move |_| board.with(|s| s.note(id).cloned()));
    let editor = Memo::new(move |_| note.with(|n| n.as_ref().and_then(|n| n.editor.clone())));
    let draggable = Memo::new(move |_| board.with(|s| s.sort_mode.allows_drag()));

    let class = move || note.with(|n| n.as_ref().map_or_else(|| "note".to_owned(), note_class));
    let content = move || note.with(|n| n.as_ref().map(|n| n.task.content.clone()).unwrap_or_default());
    let completed = move || note.with(|n| n.as_ref().is_some_and(|n| n.task.is_completed));
    let deadline = move || note.with(|n| deadline_text(n.as_ref().and_then(|n| n.task.deadline), &SystemClock));

    let on_dragstart = move |ev: leptos::ev::DragEvent| {
        if !controller.get().on_drag_start(id) {
            ev.prevent_default();
            return;
        }
        set_drag_data(&ev, id);
    };
    let on_dragend = move |_: leptos::ev::DragEvent| {
        controller.spawn(|c| async move {
            if c.on_drag_end().await.is_err() {
                log::debug!("order after dragging {id} not saved");
            }
        });
    };
    let on_toggle = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        controller.spawn(move |c| async move {
            let saved = c.on_toggle(id, checked).await.is_ok();
            if !saved {
                log::debug!("toggle of {id} not saved");
            }
            // An unchanged note does not re-run the memo; reset the input directly.
            set_checked(checkbox_ref, checkbox_after_toggle(checked, saved));
        });
    };
    let on_edit = move |_: leptos::ev::MouseEvent| {
        controller.get().on_begin_deadline_edit(id);
    };
    let on_delete = move |_: leptos::ev::MouseEvent| {
        controller.spawn(move |c| async move {
            if c.on_delete(id).await.is_err() {
                log::debug!("delete of {id} not confirmed");
            }
        });
    };

    view! {
        <div
            class=class
            data-task-id=id.to_string()
            draggable=move || if draggable.get() { "true" } else { "false" }
            on:dragstart=on_dragstart
            on:dragend=on_dragend
        >
            <div class="note__content">{content}</div>
            {move || match editor.get() {
                Some(initial) => view! { <DeadlineEditor id=id initial=initial/> }.into_any(),
                None => view! {
                    <button class="note__deadline" on:click=on_edit title="Edit deadline">
                        {deadline}
                    </button>
                }
                .into_any(),
            }}
            <div class="note__actions">
                <label class="note__complete">
                    <input type="checkbox" node_ref=checkbox_ref prop:checked=completed on:change=on_toggle/>
                    "Done"
                </label>
                <button class="note__delete" on:click=on_delete title="Delete task" aria-label="Delete task">
                    "✕"
                </button>
            </div>
        </div>
    }
}

/// Inline `datetime-local` editor; commits on blur. Enter blurs.
#[component]
fn DeadlineEditor(id: TaskId, initial: String) -> impl IntoView {
    let controller = expect_context::<Controller>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || focus_input(input_ref));

    let on_blur = move |ev: leptos::ev::FocusEvent| {
        let raw = event_target_value(&ev);
        controller.spawn(move |c| async move {
            if c.on_commit_deadline(id, &raw).await.is_err() {
                log::debug!("deadline of {id} not saved");
            }
        });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            blur_input(input_ref);
        }
    };

    view! {
        <input
            class="note__deadline-input"
            type="datetime-local"
            node_ref=input_ref
            prop:value=initial
            on:blur=on_blur
            on:keydown=on_keydown
        />
    }
}

fn set_drag_data(ev: &leptos::ev::DragEvent, id: TaskId) {
    #[cfg(feature = "csr")]
    {
        let Some(transfer) = ev.data_transfer() else {
            return;
        };
        transfer.set_effect_allowed("move");
        // Firefox won't start a drag without data.
        let _ = transfer.set_data("text/plain", &id.to_string());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ev, id);
    }
}

fn focus_input(input_ref: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "csr")]
    {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input_ref;
    }
}

fn blur_input(input_ref: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "csr")]
    {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.blur();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input_ref;
    }
}

fn set_checked(input_ref: NodeRef<leptos::html::Input>, checked: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(input) = input_ref.get_untracked() {
            input.set_checked(checked);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (input_ref, checked);
    }
}
