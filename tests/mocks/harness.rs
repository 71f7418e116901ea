use super::dom::{container, visit};
use super::mock_client::MockClient;
use dining_moderation::backend::Backend;
use dining_moderation::components::toast_container::ToastContainer;
use dining_moderation::pages::moderate::Moderate;
use dining_moderation::routes::MODERATE_PATH;
use dining_moderation::session::use_current_user;
use dining_moderation::toast::Toaster;
use leptos::*;
use leptos_router::Router;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::Element;

/// Mounts the Moderate page against `client`, with toasts rendered alongside.
pub fn mount_moderate(client: MockClient) -> Element {
    mount_unmountable(client).0
}

/// Same as `mount_moderate`; setting the returned signal to `false` unmounts
/// the page while the toasts stay mounted.
pub fn mount_unmountable(client: MockClient) -> (Element, RwSignal<bool>) {
    visit(MODERATE_PATH);
    let root = container();
    let shown = Rc::new(Cell::new(None));
    let handle = Rc::clone(&shown);
    mount_to(root.clone(), move || {
        provide_context(Backend::new(client));
        provide_context(Toaster::new());
        provide_context(use_current_user());
        let mounted = create_rw_signal(true);
        handle.set(Some(mounted));
        view! {
            <Router>
                <Show when=move || mounted.get()>
                    <Moderate/>
                </Show>
                <ToastContainer/>
            </Router>
        }
    });
    let mounted = shown.get().expect("page mounted");
    (root.into(), mounted)
}
