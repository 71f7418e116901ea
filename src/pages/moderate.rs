use crate::backend::use_backend;
use crate::backend::use_backend_mutation;
use crate::components::alias_table::AliasTable;
use crate::components::basic_layout::BasicLayout;
use crate::components::review_moderation_modal::ReviewModerationModal;
use crate::components::review_table::ReviewTable;
use crate::models::alias::AliasProposal;
use crate::models::review::{ModerationDecision, Review};
use crate::moderation::{
    alias_error_message, alias_moderation_request, alias_success_message, pending_aliases_key,
    pending_aliases_request, pending_reviews_key, pending_reviews_request, ModerationDialog,
};
use crate::routes::{can_visit, HOME_PATH, MODERATE_PATH};
use crate::session::use_session;
use crate::toast::use_toaster;
use crate::utils::leptos_owner::OwnerScope;
use leptos::logging::log;
use leptos::*;
use leptos_router::Redirect;

/// Pending aliases and reviews for admins and moderators. Anyone else is sent
/// home once the session has loaded.
#[component]
pub fn Moderate() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let scope = OwnerScope::capture();

    let aliases = use_backend(pending_aliases_key(), pending_aliases_request(), Vec::<AliasProposal>::new());
    let reviews = use_backend(pending_reviews_key(), pending_reviews_request(), Vec::<Review>::new());

    let alias_mutation = store_value(use_backend_mutation(
        |(alias, approved): &(AliasProposal, bool)| alias_moderation_request(alias, *approved),
        vec![pending_aliases_key()],
    ));
    let dialog = create_rw_signal(ModerationDialog::Closed);

    // Aliases go straight to the backend, no confirmation.
    let moderate_alias = move |alias: AliasProposal, approved: bool| {
        let mutation = alias_mutation.get_value();
        spawn_local(async move {
            let result = mutation.mutate((alias.clone(), approved)).await;
            scope.run("alias moderation result", || match result {
                Ok(_) => toaster.success(alias_success_message(&alias, approved)),
                Err(err) => toaster.error(alias_error_message(approved, &err)),
            });
        });
    };
    let approve_alias = Callback::new(move |alias| moderate_alias(alias, true));
    let reject_alias = Callback::new(move |alias| moderate_alias(alias, false));

    // Reviews open the dialog first.
    let approve_review = Callback::new(move |review| dialog.set(ModerationDialog::open(review, ModerationDecision::Approve)));
    let reject_review = Callback::new(move |review| dialog.set(ModerationDialog::open(review, ModerationDecision::Reject)));

    let allowed = move || can_visit(Some(&session.user()), MODERATE_PATH);

    move || {
        if !session.is_resolved() {
            return view! { <p class="text-muted">{ "Loading..." }</p> }.into_view();
        }
        if !allowed() {
            log!("[MODERATE] Session lacks a moderation role, redirecting home");
            return view! { <Redirect path=HOME_PATH/> }.into_view();
        }
        view! {
            <BasicLayout id="moderate-page">
                <h1>{ "Moderation Page" }</h1>
                <p>{ "This page is accessible only to admins and moderators." }</p>
                <div class="row">
                    <div class="col">
                        <h2>{ "Alias Proposals" }</h2>
                        <AliasTable
                            aliases=aliases.data
                            moderator_options=true
                            on_approve=approve_alias
                            on_reject=reject_alias
                        />
                    </div>
                    <div class="col">
                        <h2>{ "Reviews Awaiting Moderation" }</h2>
                        <ReviewTable
                            reviews=reviews.data
                            moderator_options=true
                            on_approve=approve_review
                            on_reject=reject_review
                        />
                    </div>
                </div>
                <ReviewModerationModal dialog=dialog/>
            </BasicLayout>
        }
        .into_view()
    }
}
