use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent, Spinner};

use crate::shared::content::QueryState;

/// Renders a content query: spinner while loading, a static message on
/// failure, `render` with the data once it is there.
#[component]
pub fn QueryView<T, F, V>(#[prop(into)] state: Signal<QueryState<T>>, render: F) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || match state.get() {
        QueryState::Loading => view! {
            <div class="query-state query-state--loading">
                <Spinner />
            </div>
        }
        .into_any(),
        QueryState::Failed(err) => view! {
            <div class="query-state query-state--failed">
                <MessageBar intent=MessageBarIntent::Error>{err.user_message()}</MessageBar>
            </div>
        }
        .into_any(),
        QueryState::Ready(value) => render(value).into_any(),
    }
}
