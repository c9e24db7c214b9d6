//! Settings modal: the warning threshold in hours.
//!
//! A committed value (blur, Enter, or the spinner) is applied immediately;
//! invalid text stays in the field and raises a validation notice.

use leptos::prelude::*;

use crate::app::Controller;
use crate::state::ui::UiState;

#[component]
pub fn SettingsModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let controller = expect_context::<Controller>();

    let close = move || ui.update(UiState::close_settings);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };
    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        ui.update(|u| u.warning_hours_input.clone_from(&value));
        controller.get().on_warning_hours_change(&value);
    };

    view! {
        <div class="settings-modal__backdrop" on:click=move |_| close()>
            <div class="settings-modal" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                <div class="settings-modal__header">
                    <h2>"Settings"</h2>
                    <button class="settings-modal__close" on:click=move |_| close() title="Close settings">
                        "✕"
                    </button>
                </div>
                <label class="settings-modal__field">
                    <span>"Warn this many hours before a deadline"</span>
                    <input
                        type="number"
                        min="0"
                        step="0.5"
                        prop:value=move || ui.with(|u| u.warning_hours_input.clone())
                        on:change=on_change
                    />
                </label>
            </div>
        </div>
    }
}
