//! The board page: toolbar, create form, notes, and the periodic timers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Notes are keyed by task id so a drag reorder moves DOM nodes instead of
//! rebuilding them. The page owns the `dragover` handler because the drop
//! target is found by measuring every rendered note.
//!
//! TIMERS
//! ======
//! Two loops run while the page is mounted: the header clock and the urgency
//! sweep. Both stop through a shared alive flag on cleanup.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use board::board::Note;
use board::config::BoardConfig;
use board::drag::NoteBox;
use board::task::TaskId;
use leptos::prelude::*;

use crate::app::Controller;
use crate::components::note_card::NoteCard;
use crate::components::notice_tray::NoticeTray;
use crate::components::settings_modal::SettingsModal;
use crate::components::task_form::TaskForm;
use crate::components::toolbar::Toolbar;
use crate::state::board::BoardState;
use crate::state::ui::UiState;
use crate::util::clock::local_clock_label;

/// Attribute carrying the task id on each rendered note.
pub const TASK_ID_ATTR: &str = "data-task-id";

/// Parse a note's `data-task-id` attribute.
pub fn parse_note_id(raw: &str) -> Option<TaskId> {
    raw.parse().ok()
}

/// Build a [`NoteBox`] from a note's attribute and measured rect.
pub fn note_box(raw_id: &str, top: f64, height: f64) -> Option<NoteBox> {
    Some(NoteBox { id: parse_note_id(raw_id)?, top, height })
}

/// Measure every rendered note inside `container`, in document order.
fn measure_notes(container: NodeRef<leptos::html::Div>) -> Vec<NoteBox> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(container) = container.get_untracked() else {
            return Vec::new();
        };
        let Ok(nodes) = container.query_selector_all(".note") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .filter_map(|el| {
                let raw = el.get_attribute(TASK_ID_ATTR)?;
                let rect = el.get_bounding_client_rect();
                note_box(&raw, rect.top(), rect.height())
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = container;
        Vec::new()
    }
}

#[cfg(feature = "csr")]
fn spawn_ticker(every_secs: u64, alive: std::sync::Arc<std::sync::atomic::AtomicBool>, tick: impl Fn() + 'static) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(every_secs)).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            tick();
        }
    });
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let controller = expect_context::<Controller>();
    let config = expect_context::<BoardConfig>();
    let notes_ref = NodeRef::<leptos::html::Div>::new();

    ui.update(|u| u.clock_label = local_clock_label());

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        spawn_ticker(config.clock_interval_secs, alive.clone(), move || {
            ui.update(|u| u.clock_label = local_clock_label());
        });
        spawn_ticker(config.sweep_interval_secs, alive.clone(), move || {
            if controller.get().sweep() {
                log::debug!("urgency sweep changed marks");
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        // Marks the list as a drop zone.
        ev.prevent_default();
        let boxes = measure_notes(notes_ref);
        controller.get().on_drag_over(f64::from(ev.client_y()), &boxes);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| ev.prevent_default();

    let draggable = Memo::new(move |_| board.with(|s| s.sort_mode.allows_drag()));

    view! {
        <div class="board-page">
            <Toolbar/>
            <TaskForm/>
            <NoticeTray/>
            <div class="notes" class:notes--locked=move || !draggable.get() node_ref=notes_ref on:dragover=on_dragover on:drop=on_drop>
                <For
                    each=move || board.get().notes
                    key=|note: &Note| note.id()
                    children=move |note: Note| view! { <NoteCard id=note.id()/> }
                />
                <Show when=move || board.with(BoardState::is_empty_board)>
                    <p class="notes__empty">"No tasks yet. Add one above."</p>
                </Show>
            </div>
            <Show when=move || ui.with(|u| u.settings_open)>
                <SettingsModal/>
            </Show>
        </div>
    }
}
