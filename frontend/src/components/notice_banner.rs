use shared::{Notice, NoticeKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let class = match notice.kind {
        NoticeKind::Success => "form-message success",
        NoticeKind::Warning => "form-message warning",
        NoticeKind::Error => "form-message error",
    };
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={class} role="status">
            <span>{&notice.message}</span>
            <button type="button" class="notice-dismiss" aria-label="Dismiss" onclick={on_dismiss}>{"×"}</button>
        </div>
    }
}
