//! Header bar: title, sort toggle, settings button, clock.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use board::settings::format_hours;
use board::sort::SortMode;
use leptos::prelude::*;

use crate::app::Controller;
use crate::state::board::BoardState;
use crate::state::ui::UiState;

/// Text of the sort toggle for the mode currently shown.
pub fn sort_toggle_label(mode: SortMode) -> &'static str {
    match mode {
        SortMode::Manual => "Sort: Manual",
        SortMode::Deadline => "Sort: Deadline",
    }
}

/// Tooltip describing what clicking the toggle does.
pub fn sort_toggle_title(mode: SortMode) -> &'static str {
    match mode {
        SortMode::Manual => "Order by deadline",
        SortMode::Deadline => "Back to manual order",
    }
}

#[component]
pub fn Toolbar() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let controller = expect_context::<Controller>();

    let mode = Memo::new(move |_| board.with(|s| s.sort_mode));

    let on_sort = move |_| {
        controller.spawn(|c| async move {
            let next = c.sort_mode().toggled();
            if c.on_sort_mode_change(next).await.is_err() {
                log::debug!("board not refreshed after switching to {}", next.query_value());
            }
        });
    };
    let on_settings = move |_| {
        let hours = format_hours(controller.get().warning_hours());
        ui.update(|u| u.open_settings(hours));
    };

    view! {
        <header class="toolbar">
            <h1 class="toolbar__title">"Clarity Board"</h1>
            <button
                class="toolbar__sort"
                class:toolbar__sort--deadline=move || mode.get() == SortMode::Deadline
                on:click=on_sort
                title=move || sort_toggle_title(mode.get())
            >
                {move || sort_toggle_label(mode.get())}
            </button>
            <button class="toolbar__settings" on:click=on_settings title="Settings" aria-label="Settings">
                "⚙"
            </button>
            <span class="toolbar__clock">{move || ui.with(|u| u.clock_label.clone())}</span>
        </header>
    }
}
