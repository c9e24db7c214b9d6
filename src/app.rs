//! Root application component and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one [`AppController`] for the page and provides it, the
//! board/UI signals, and the config through Leptos context. Components call
//! controller hooks through the [`Controller`] handle.

use std::future::Future;
use std::rc::Rc;

use board::config::BoardConfig;
use board::controller::BoardController;
use board::localtime::SystemClock;
use board::settings::format_hours;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::net::api::HttpTaskApi;
use crate::pages::board::BoardPage;
use crate::state::board::{BoardState, SignalBoardView};
use crate::state::ui::UiState;
use crate::util::storage::BrowserSettings;

/// The controller as wired in the browser.
pub type AppController = BoardController<HttpTaskApi, SignalBoardView, BrowserSettings, SystemClock>;

/// Copyable context handle to the page's controller.
///
/// The controller is single-threaded (`RefCell` state, `?Send` futures), so
/// it lives in local arena storage.
#[derive(Clone, Copy)]
pub struct Controller(StoredValue<Rc<AppController>, LocalStorage>);

impl Controller {
    pub fn new(controller: AppController) -> Self {
        Self(StoredValue::new_local(Rc::new(controller)))
    }

    pub fn get(&self) -> Rc<AppController> {
        self.0.get_value()
    }

    /// Run an async controller hook on the local executor.
    pub fn spawn<F, Fut>(&self, hook: F)
    where
        F: FnOnce(Rc<AppController>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        leptos::task::spawn_local(hook(self.get()));
    }
}

/// Root application component.
#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(BoardState::default());
    let ui = RwSignal::new(UiState::default());

    let view = SignalBoardView::new(board, config.max_notices);
    let controller = BoardController::new(HttpTaskApi::new(config.api_base.clone()), view, BrowserSettings, SystemClock);
    ui.update(|u| {
        u.draft_deadline = controller.default_deadline_input();
        u.warning_hours_input = format_hours(controller.warning_hours());
    });
    let controller = Controller::new(controller);

    provide_context(board);
    provide_context(ui);
    provide_context(controller);
    provide_context(config);

    controller.spawn(|c| async move {
        if c.load().await.is_err() {
            log::debug!("initial load failed; board stays empty");
        }
    });

    view! {
        <Title text="Clarity Board"/>
        <BoardPage/>
    }
}
