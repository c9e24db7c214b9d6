//! Create form: content plus an optional local deadline.

use leptos::prelude::*;

use crate::app::Controller;
use crate::state::ui::UiState;

#[component]
pub fn TaskForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let controller = expect_context::<Controller>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if ui.with_untracked(|u| u.submitting) {
            return;
        }
        let (content, deadline) = ui.with_untracked(|u| (u.draft_content.clone(), u.draft_deadline.clone()));
        ui.update(|u| u.submitting = true);
        controller.spawn(move |c| async move {
            let created = matches!(c.on_create(&content, &deadline).await, Ok(true));
            let reset_to = created.then(|| c.default_deadline_input());
            ui.update(|u| {
                u.submitting = false;
                if let Some(default_deadline) = reset_to {
                    u.reset_form(default_deadline);
                }
            });
        });
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <input
                class="task-form__content"
                type="text"
                placeholder="What needs doing?"
                prop:value=move || ui.with(|u| u.draft_content.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ui.update(|u| u.draft_content = value);
                }
            />
            <input
                class="task-form__deadline"
                type="datetime-local"
                prop:value=move || ui.with(|u| u.draft_deadline.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ui.update(|u| u.draft_deadline = value);
                }
            />
            <button class="task-form__submit" type="submit" disabled=move || ui.with(|u| u.submitting)>
                "Add"
            </button>
        </form>
    }
}
