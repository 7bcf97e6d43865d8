use session_core::CommentCursor;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CommentCarouselProps {
    pub cursor: CommentCursor,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

/// One comment at a time with previous/next arrows
#[function_component(CommentCarousel)]
pub fn comment_carousel(props: &CommentCarouselProps) -> Html {
    let cursor = &props.cursor;
    let Some(current) = cursor.current() else {
        return html! { <p class="comments-empty">{ "No comments yet" }</p> };
    };

    let on_previous = props.on_previous.reform(|_: MouseEvent| ());
    let on_next = props.on_next.reform(|_: MouseEvent| ());

    html! {
        <div class="comment-carousel">
            <button class="carousel-arrow" disabled={!cursor.has_previous()} onclick={on_previous}>
                { "‹" }
            </button>
            <div class="comment">
                <span class="comment-author">{ &current.author }</span>
                <p class="comment-content">{ &current.content }</p>
                <span class="comment-position">
                    { format!("{} / {}", cursor.index() + 1, cursor.len()) }
                </span>
            </div>
            <button class="carousel-arrow" disabled={!cursor.has_next()} onclick={on_next}>
                { "›" }
            </button>
        </div>
    }
}
