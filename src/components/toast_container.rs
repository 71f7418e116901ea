use crate::toast::{use_toaster, Toast};
use leptos::*;

/// Renders the app's toasts; click one to dismiss it.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-container" data-testid="ToastContainer">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.class()
                            role="alert"
                            data-testid="toast"
                            on:click=move |_| toaster.dismiss(id)
                        >
                            { toast.message }
                        </div>
                    }
                }
            />
        </div>
    }
}
