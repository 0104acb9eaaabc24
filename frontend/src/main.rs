use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::filter_bar::FilterBar;
use components::header::Header;
use components::map_view::MapView;
use components::notice_banner::NoticeBanner;
use components::story_form::StoryForm;
use components::story_list::StoryList;
use config::AppConfig;
use hooks::use_story_board;
use services::Logger;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_build_env());
    let story_board = use_story_board(&config);
    let board = &story_board.board;
    let actions = story_board.actions.clone();

    html! {
        <div class="app">
            <Header
                story_count={board.records().len()}
                form_open={board.is_form_open()}
                on_toggle_form={actions.toggle_form.clone()}
            />

            <NoticeBanner
                notice={board.page_notice().cloned()}
                on_dismiss={actions.dismiss_notice.clone()}
            />

            <FilterBar
                filters={board.filters().clone()}
                mode={board.filter_mode()}
                on_select_category={actions.select_category.clone()}
                on_select_rating={actions.select_rating.clone()}
                on_mode_change={actions.set_filter_mode.clone()}
            />

            <MapView
                config={config.map.clone()}
                markers={board.markers(&config.map)}
            />

            <StoryForm
                is_open={board.is_form_open()}
                draft={board.draft().clone()}
                submitting={board.is_submitting()}
                notice={board.form_notice().cloned()}
                on_dismiss_notice={actions.dismiss_notice.clone()}
                on_field_change={actions.edit_draft.clone()}
                on_submit={actions.submit.clone()}
                on_close={actions.close_form.clone()}
            />

            <StoryList
                stories={board.list_view().to_vec()}
                total_visible={board.visible().len()}
            />
        </div>
    }
}

fn main() {
    Logger::info_with_component("main", "Starting Dates of Bangalore");
    yew::Renderer::<App>::new().render();
}
