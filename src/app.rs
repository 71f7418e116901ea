/// Application root: provides the backend, toasts and session, then routes.
use crate::api::FetchClient;
use crate::backend::Backend;
use crate::components::toast_container::ToastContainer;
use crate::config::ClientConfig;
use crate::pages::{home::HomePage, moderate::Moderate};
use crate::routes::{HOME_PATH, MODERATE_PATH};
use crate::session::{use_current_user, SessionContext};
use crate::toast::Toaster;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Tests and embedders may provide their own backend before mounting.
    let backend = use_context::<Backend>()
        .unwrap_or_else(|| Backend::new(FetchClient::new(ClientConfig::from_build_env())));
    provide_context(backend);
    if use_context::<Toaster>().is_none() {
        provide_context(Toaster::new());
    }
    let session: SessionContext = use_current_user();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/dining-moderation.css"/>
        <Title text="UCSB Dining Moderation"/>
        <Router>
            <Routes>
                <Route path=HOME_PATH view=HomePage/>
                <Route path=MODERATE_PATH view=Moderate/>
                <Route path="/*any" view=|| view! { <Redirect path=HOME_PATH/> }/>
            </Routes>
            <ToastContainer/>
        </Router>
    }
}
