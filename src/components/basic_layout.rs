use crate::backend::{use_backend, QueryResult};
use crate::cache::QueryKey;
use crate::api::RequestDescriptor;
use crate::models::system_info::SystemInfo;
use crate::routes::nav_routes;
use crate::session::{use_logout, use_session};
use leptos::*;
use leptos_router::A;

pub const SYSTEM_INFO_PATH: &str = "/api/systemInfo";
pub const LOGIN_PATH: &str = "/oauth2/authorization/google";

/// Reads `/api/systemInfo`; both links stay hidden until it answers.
pub fn use_system_info() -> QueryResult<SystemInfo> {
    use_backend(
        QueryKey::from("systemInfo"),
        RequestDescriptor::get(SYSTEM_INFO_PATH),
        SystemInfo::default(),
    )
}

#[component]
pub fn BasicLayout(#[prop(optional, into)] id: Option<String>, children: Children) -> impl IntoView {
    let session = use_session();
    let logout = use_logout();
    let user = session.user_signal();

    view! {
        <div id=id>
            <nav class="navbar navbar-expand navbar-dark bg-dark" data-testid="AppNavbar">
                <div class="container">
                    <A href="/" class="navbar-brand">{ "UCSB Dining Reviews" }</A>
                    <ul class="navbar-nav me-auto">
                        {move || nav_routes(Some(&user.get())).into_iter().map(|rule| view! {
                            <li class="nav-item">
                                <A href=rule.path class="nav-link">{ rule.title }</A>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                    {move || match user.get().display_name() {
                        Some(name) => view! {
                            <span class="navbar-text me-2">{ format!("Welcome, {}", name) }</span>
                            <button
                                type="button"
                                class="btn btn-outline-light"
                                data-testid="AppNavbar-logout"
                                on:click=move |_| logout.call(())
                            >{ "Log Out" }</button>
                        }.into_view(),
                        None => view! {
                            <a href=LOGIN_PATH class="btn btn-primary" rel="external">{ "Log In" }</a>
                        }.into_view(),
                    }}
                </div>
            </nav>
            <main class="container pt-4">{children()}</main>
            <Footer/>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let info = use_system_info().data;

    view! {
        <footer class="bg-light p-3 text-center" data-testid="Footer">
            <p>{ "Campus dining review moderation." }</p>
            <Show when=move || info.with(|info| info.show_swagger_ui_link)>
                <a href="/swagger-ui/index.html" data-testid="Footer-swagger">{ "Swagger UI" }</a>
            </Show>
            <Show when=move || info.with(|info| info.spring_h2_console_enabled)>
                " "
                <a href="/h2-console" data-testid="Footer-h2">{ "H2 Console" }</a>
            </Show>
            {move || info.with(|info| info.source_repo.clone()).map(|repo| view! {
                <p><a href=repo.clone()>{ repo }</a></p>
            })}
        </footer>
    }
}
