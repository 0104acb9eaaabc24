use shared::star_row;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarRowProps {
    /// Parsed rating; `None` renders five empty stars
    pub rating: Option<i64>,
}

#[function_component(StarRow)]
pub fn star_row_view(props: &StarRowProps) -> Html {
    html! {
        <div class="star-row" aria-label={format!("{} out of 5", props.rating.unwrap_or(0).clamp(0, 5))}>
            {for star_row(props.rating).into_iter().map(|filled| {
                let class = if filled { "star filled" } else { "star" };
                html! { <span class={class}>{"★"}</span> }
            })}
        </div>
    }
}
