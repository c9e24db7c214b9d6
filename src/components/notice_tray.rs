//! Dismissable notices for failed requests and rejected input.

use board::view::NoticeKind;
use leptos::prelude::*;

use crate::state::board::{BoardState, ShownNotice};

fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::NetworkFailure => "notice notice--network",
        NoticeKind::ValidationFailure => "notice notice--validation",
        NoticeKind::NotFound => "notice notice--not-found",
    }
}

#[component]
pub fn NoticeTray() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            <For
                each=move || board.with(|s| s.notices.clone())
                key=|shown: &ShownNotice| shown.id
                children=move |shown: ShownNotice| {
                    let id = shown.id;
                    view! {
                        <div class=kind_class(shown.notice.kind)>
                            <strong class="notice__label">{shown.notice.kind.label()}</strong>
                            <span class="notice__message">{shown.notice.message}</span>
                            <button
                                class="notice__dismiss"
                                on:click=move |_| {
                                    board.update(|s| {
                                        s.dismiss_notice(id);
                                    });
                                }
                                title="Dismiss"
                                aria-label="Dismiss"
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
