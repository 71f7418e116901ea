use crate::components::basic_layout::BasicLayout;
use crate::routes::{can_visit, MODERATE_PATH};
use crate::session::use_session;
use leptos::*;
use leptos_router::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let user = session.user_signal();

    view! {
        <BasicLayout id="home-page">
            <h1>{ "UCSB Dining Reviews" }</h1>
            <p>{ "Students review dining commons menu items; moderators keep the reviews civil." }</p>
            <Show when=move || can_visit(Some(&user.get()), MODERATE_PATH)>
                <p>
                    { "Reviews and aliases are waiting on the " }
                    <A href=MODERATE_PATH>{ "moderation page" }</A>
                    { "." }
                </p>
            </Show>
        </BasicLayout>
    }
}
