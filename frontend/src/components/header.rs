use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub story_count: usize,
    pub form_open: bool,
    pub on_toggle_form: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_click = {
        let on_toggle_form = props.on_toggle_form.clone();
        Callback::from(move |_: MouseEvent| on_toggle_form.emit(()))
    };

    html! {
        <header class="header">
            <h1 class="title">
                <span class="heart">{"♥"}</span>
                {"Dates of Bangalore"}
                <span class="heart">{"♥"}</span>
            </h1>
            <p class="subtitle">
                {match props.story_count {
                    0 => "No stories yet. Be the first!".to_string(),
                    1 => "1 date story and counting".to_string(),
                    n => format!("{} date stories and counting", n),
                }}
            </p>
            <button class="btn btn-primary share-btn" onclick={on_click}>
                {if props.form_open { "Close" } else { "Share your date" }}
            </button>
        </header>
    }
}
