use shared::{DraftField, Notice, StoryDraft, DATE_CATEGORIES};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::notice_banner::NoticeBanner;

#[derive(Properties, PartialEq)]
pub struct StoryFormProps {
    pub is_open: bool,
    pub draft: StoryDraft,
    pub submitting: bool,
    /// Feedback for the open form; the page banner sits under the backdrop
    pub notice: Option<Notice>,
    pub on_dismiss_notice: Callback<()>,
    pub on_field_change: Callback<(DraftField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

/// Modal form for sharing a new date story
#[function_component(StoryForm)]
pub fn story_form(props: &StoryFormProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_location = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((DraftField::Location, input.value()));
        })
    };

    let on_story = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_field_change.emit((DraftField::Story, input.value()));
        })
    };

    let on_rating = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((DraftField::Rating, input.value()));
        })
    };

    let on_type = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field_change.emit((DraftField::TypeOfDate, select.value()));
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h2>{"Share your date story"}</h2>
                <NoticeBanner
                    notice={props.notice.clone()}
                    on_dismiss={props.on_dismiss_notice.clone()}
                />
                <form class="story-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="location">{"Location"}</label>
                        <input
                            type="text"
                            id="location"
                            placeholder="Cubbon Park, Church Street..."
                            value={props.draft.location.clone()}
                            oninput={on_location}
                            disabled={props.submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="story">{"Your story"}</label>
                        <textarea
                            id="story"
                            placeholder="Your story..."
                            value={props.draft.story.clone()}
                            oninput={on_story}
                            disabled={props.submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="rating">{"Rating (1-5)"}</label>
                        <input
                            type="number"
                            id="rating"
                            min="1"
                            max="5"
                            placeholder="Rating (1-5)"
                            value={props.draft.rating.clone()}
                            oninput={on_rating}
                            disabled={props.submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="type_of_date">{"Type of date"}</label>
                        <select id="type_of_date" onchange={on_type} disabled={props.submitting}>
                            <option value="" selected={props.draft.type_of_date.is_empty()} disabled=true>
                                {"Pick a type"}
                            </option>
                            {for DATE_CATEGORIES.iter().map(|category| html! {
                                <option
                                    value={*category}
                                    selected={props.draft.type_of_date == *category}
                                >
                                    {*category}
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="form-buttons">
                        <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                            {if props.submitting { "Sharing..." } else { "Share Date" }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
