use std::ops::Deref;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo::timers::callback::Timeout;
use shared::workflow;
use shared::{
    BoardEvent, CategoryFilter, DraftField, FilterMode, Notice, NoticeKind, RatingFilter,
    StoryBoard, SubmitRejection,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::{ApiClient, Logger};

const COMPONENT: &str = "story-board";

/// Reducer wrapper so the board can live in `use_reducer`
#[derive(Clone, PartialEq, Default)]
pub struct BoardState(StoryBoard);

impl Deref for BoardState {
    type Target = StoryBoard;

    fn deref(&self) -> &StoryBoard {
        &self.0
    }
}

impl Reducible for BoardState {
    type Action = BoardEvent;

    fn reduce(self: Rc<Self>, action: BoardEvent) -> Rc<Self> {
        let mut board = Rc::unwrap_or_clone(self).0;
        board.apply(action);
        Rc::new(BoardState(board))
    }
}

pub struct UseStoryBoardResult {
    pub board: UseReducerHandle<BoardState>,
    pub actions: UseStoryBoardActions,
}

#[derive(Clone, PartialEq)]
pub struct UseStoryBoardActions {
    pub select_category: Callback<CategoryFilter>,
    pub select_rating: Callback<RatingFilter>,
    pub set_filter_mode: Callback<FilterMode>,
    pub edit_draft: Callback<(DraftField, String)>,
    pub toggle_form: Callback<()>,
    pub close_form: Callback<()>,
    pub submit: Callback<()>,
    pub dismiss_notice: Callback<()>,
}

/// Owns the page state: loads stories once on mount and drives submissions.
///
/// In-flight requests are aborted on unmount, and any completion that still
/// arrives afterwards is dropped instead of being applied.
#[hook]
pub fn use_story_board(config: &AppConfig) -> UseStoryBoardResult {
    let board = use_reducer(BoardState::default);
    let api_client = use_memo(config.clone(), ApiClient::new);
    let mounted = use_mut_ref(|| true);
    let abort = use_mut_ref(|| Option::<AbortController>::None);
    // Guards against a second click landing before the board re-renders
    let submit_pending = use_mut_ref(|| false);

    // Initial load, with teardown
    {
        let dispatcher = board.dispatcher();
        let api_client = (*api_client).clone();
        let mounted = mounted.clone();
        let abort = abort.clone();

        use_effect_with((), move |_| {
            *mounted.borrow_mut() = true;
            let controller = AbortController::new().ok();
            let client = match &controller {
                Some(controller) => api_client.with_abort_signal(controller.signal()),
                None => api_client,
            };
            *abort.borrow_mut() = controller;

            Logger::info_with_component(
                COMPONENT,
                &format!("Loading date stories from {}", client.base_url()),
            );

            let task_mounted = mounted.clone();
            spawn_local(async move {
                let event = workflow::load(&client).await;
                if !*task_mounted.borrow() {
                    return;
                }
                match &event {
                    BoardEvent::LoadSucceeded(stories) => Logger::info_with_component(
                        COMPONENT,
                        &format!("Loaded {} date stories", stories.len()),
                    ),
                    BoardEvent::LoadFailed(reason) => Logger::error_with_component(
                        COMPONENT,
                        &format!("Failed to load data: {}", reason),
                    ),
                    _ => {}
                }
                dispatcher.dispatch(event);
            });

            move || {
                *mounted.borrow_mut() = false;
                if let Some(controller) = abort.borrow_mut().take() {
                    controller.abort();
                }
            }
        });
    }

    // Success notices expire on their own. The timer is tied to the notice it was
    // started for: a newer notice cancels it, and ExpireNotice checks the seq again.
    {
        let dispatcher = board.dispatcher();
        let timeout_ms = config.notice_timeout_ms;

        use_effect_with(board.notice().cloned(), move |notice| {
            let timer = expiry_seq(notice.as_ref()).map(|seq| {
                Timeout::new(timeout_ms, move || {
                    dispatcher.dispatch(BoardEvent::ExpireNotice(seq));
                })
            });
            move || drop(timer)
        });
    }

    let select_category = {
        let dispatcher = board.dispatcher();
        Callback::from(move |category: CategoryFilter| {
            dispatcher.dispatch(BoardEvent::SelectCategory(category));
        })
    };

    let select_rating = {
        let dispatcher = board.dispatcher();
        Callback::from(move |rating: RatingFilter| {
            dispatcher.dispatch(BoardEvent::SelectRating(rating));
        })
    };

    let set_filter_mode = {
        let dispatcher = board.dispatcher();
        Callback::from(move |mode: FilterMode| {
            dispatcher.dispatch(BoardEvent::SetFilterMode(mode));
        })
    };

    let edit_draft = {
        let dispatcher = board.dispatcher();
        Callback::from(move |(field, value): (DraftField, String)| {
            dispatcher.dispatch(BoardEvent::EditDraft(field, value));
        })
    };

    let toggle_form = {
        let dispatcher = board.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(BoardEvent::ToggleForm))
    };

    let close_form = {
        let dispatcher = board.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(BoardEvent::CloseForm))
    };

    let dismiss_notice = {
        let dispatcher = board.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(BoardEvent::DismissNotice))
    };

    let submit = {
        let board = board.clone();
        let api_client = (*api_client).clone();
        let abort = abort.clone();
        let mounted = mounted.clone();
        let submit_pending = submit_pending.clone();

        Callback::from(move |_| {
            if *submit_pending.borrow() {
                board.dispatch(BoardEvent::SubmitRejected(SubmitRejection::AlreadySubmitting));
                return;
            }

            let story = match workflow::prepare_submission(&board, now(), js_sys::Math::random) {
                Ok(story) => story,
                Err(rejection) => {
                    Logger::warn_with_component(
                        COMPONENT,
                        &format!("Submission rejected: {}", rejection),
                    );
                    board.dispatch(BoardEvent::SubmitRejected(rejection));
                    return;
                }
            };

            *submit_pending.borrow_mut() = true;
            board.dispatch(BoardEvent::SubmitStarted);

            let client = match abort.borrow().as_ref() {
                Some(controller) => api_client.with_abort_signal(controller.signal()),
                None => api_client.clone(),
            };
            let dispatcher = board.dispatcher();
            let mounted = mounted.clone();
            let submit_pending = submit_pending.clone();

            spawn_local(async move {
                let event = workflow::submit(&client, story).await;
                *submit_pending.borrow_mut() = false;
                if !*mounted.borrow() {
                    return;
                }

                match &event {
                    BoardEvent::SubmitSucceeded(story) => Logger::info_with_component(
                        COMPONENT,
                        &format!("Shared story {} at {}", story.id, story.location),
                    ),
                    BoardEvent::SubmitFailed(reason) => Logger::error_with_component(
                        COMPONENT,
                        &format!("Error submitting story: {}", reason),
                    ),
                    _ => {}
                }
                dispatcher.dispatch(event);
            });
        })
    };

    UseStoryBoardResult {
        board,
        actions: UseStoryBoardActions {
            select_category,
            select_rating,
            set_filter_mode,
            edit_draft,
            toggle_form,
            close_form,
            submit,
            dismiss_notice,
        },
    }
}

/// Only success notices expire; warnings and errors stay until dismissed
fn expiry_seq(notice: Option<&Notice>) -> Option<u64> {
    notice
        .filter(|notice| notice.kind == NoticeKind::Success)
        .map(|notice| notice.seq)
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}
