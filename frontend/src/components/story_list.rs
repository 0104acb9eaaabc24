use shared::DateStory;
use yew::prelude::*;

use super::star_row::StarRow;

#[derive(Properties, PartialEq)]
pub struct StoryListProps {
    /// Already truncated to the list-view limit
    pub stories: Vec<DateStory>,
    pub total_visible: usize,
}

#[function_component(StoryList)]
pub fn story_list(props: &StoryListProps) -> Html {
    if props.stories.is_empty() {
        return html! {
            <section class="story-list empty">
                <p>{"No date stories match these filters yet."}</p>
            </section>
        };
    }

    html! {
        <section class="story-list">
            {for props.stories.iter().enumerate().map(|(index, story)| html! {
                <article key={format!("{}-{}", index, story.id)} class="story-card">
                    <h3 class="story-location">{&story.location}</h3>
                    <StarRow rating={story.rating_value()} />
                    <p class="story-text">{&story.story}</p>
                    <span class="badge">{&story.type_of_date}</span>
                </article>
            })}
            {if props.total_visible > props.stories.len() {
                html! {
                    <p class="story-list-more">
                        {format!("Showing {} of {} stories. Explore the map for the rest.", props.stories.len(), props.total_visible)}
                    </p>
                }
            } else { html! {} }}
        </section>
    }
}
