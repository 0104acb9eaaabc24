use shared::{CategoryFilter, FilterMode, RatingFilter, StoryFilter};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filters: StoryFilter,
    pub mode: FilterMode,
    pub on_select_category: Callback<CategoryFilter>,
    pub on_select_rating: Callback<RatingFilter>,
    pub on_mode_change: Callback<FilterMode>,
}

/// Category buttons or rating buttons, depending on the selected mode
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let mode_button = |mode: FilterMode, label: &'static str| {
        let on_mode_change = props.on_mode_change.clone();
        let class = if props.mode == mode {
            "mode-btn active"
        } else {
            "mode-btn"
        };
        let onclick = Callback::from(move |_: MouseEvent| on_mode_change.emit(mode));
        html! {
            <button class={class} {onclick}>
                {label}
            </button>
        }
    };

    let buttons = match props.mode {
        FilterMode::Type => CategoryFilter::options()
            .into_iter()
            .map(|option| {
                let selected = props.filters.category == option;
                let on_select = props.on_select_category.clone();
                let label = option.to_string();
                html! {
                    <button
                        class={classes!("filter-btn", selected.then_some("selected"))}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(option.clone()))}
                    >
                        {label}
                    </button>
                }
            })
            .collect::<Html>(),
        FilterMode::Rating => RatingFilter::options()
            .into_iter()
            .map(|option| {
                let selected = props.filters.rating == option;
                let on_select = props.on_select_rating.clone();
                let label = match option {
                    RatingFilter::All => option.to_string(),
                    RatingFilter::Only(rating) => "★".repeat(rating.clamp(0, 5) as usize),
                };
                html! {
                    <button
                        class={classes!("filter-btn", selected.then_some("selected"))}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(option))}
                    >
                        {label}
                    </button>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <section class="filters">
            <div class="filter-mode">
                {mode_button(FilterMode::Type, "Filter by type")}
                {mode_button(FilterMode::Rating, "Filter by rating")}
            </div>
            <div class="filter-buttons">
                {buttons}
            </div>
        </section>
    }
}
