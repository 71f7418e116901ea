use crate::backend::{use_backend_mutation, Mutation};
use crate::models::review::{ModerationDecision, Review};
use crate::moderation::{
    pending_reviews_key, review_error_message, review_moderation_request, review_success_message, DialogError,
    ModerationDialog,
};
use crate::toast::use_toaster;
use crate::utils::leptos_owner::OwnerScope;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;

/// Mutation arguments: the review and the moderator's comments.
pub type ReviewModeration = (Review, String);

fn review_mutation(decision: ModerationDecision) -> Mutation<ReviewModeration> {
    use_backend_mutation(
        move |(review, comments): &ReviewModeration| review_moderation_request(review, decision, comments),
        vec![pending_reviews_key()],
    )
}

/// Approve/reject dialog for one review. The parent owns `dialog`: setting it
/// to `Open` shows the modal, setting it to `Closed` hides it.
#[component]
pub fn ReviewModerationModal(dialog: RwSignal<ModerationDialog>) -> impl IntoView {
    let toaster = use_toaster();
    let scope = OwnerScope::capture();
    let approve = store_value(review_mutation(ModerationDecision::Approve));
    let reject = store_value(review_mutation(ModerationDecision::Reject));
    let (missing_comments, set_missing_comments) = create_signal(false);

    let approving = approve.with_value(Mutation::is_loading);
    let rejecting = reject.with_value(Mutation::is_loading);
    let busy = Signal::derive(move || approving.get() || rejecting.get());

    let decision = move || dialog.with(ModerationDialog::decision).unwrap_or(ModerationDecision::Approve);

    let close = move || {
        set_missing_comments.set(false);
        dialog.update(ModerationDialog::close);
    };

    let submit = move || {
        let Some(decision) = dialog.with_untracked(ModerationDialog::decision) else {
            return;
        };
        let args = match dialog.with_untracked(ModerationDialog::submission) {
            Ok(args) => args,
            Err(DialogError::MissingComments) => {
                set_missing_comments.set(true);
                return;
            }
            Err(DialogError::NotOpen) => return,
        };
        set_missing_comments.set(false);

        let mutation = match decision {
            ModerationDecision::Approve => approve.get_value(),
            ModerationDecision::Reject => reject.get_value(),
        };
        log!("[MODERATE] Submitting review {} as {}", args.0.id, decision.status());
        spawn_local(async move {
            let result = mutation.mutate(args).await;
            scope.run("review moderation result", || match result {
                Ok(_) => {
                    toaster.success(review_success_message(decision));
                    dialog.update(ModerationDialog::close);
                }
                // stays open with the comments intact
                Err(err) => {
                    toaster.error(review_error_message(&err));
                }
            });
        });
    };

    view! {
        <Show when=move || dialog.with(ModerationDialog::is_open)>
            <div class="modal d-block" role="dialog" data-testid="ReviewModerationModal">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">
                                {move || match decision() {
                                    ModerationDecision::Approve => "Approve Review",
                                    ModerationDecision::Reject => "Reject Review",
                                }}
                            </h5>
                            <button type="button" class="btn-close" aria-label="Close" on:click=move |_| close()></button>
                        </div>
                        <div class="modal-body">
                            <p>
                                <strong>{ "Score:" }</strong>
                                " "
                                {move || dialog.with(|d| d.review().map(|r| r.items_stars).unwrap_or_default())}
                            </p>
                            <p>
                                <strong>{ "Comments:" }</strong>
                                " "
                                {move || dialog.with(|d| d.review().and_then(|r| r.reviewer_comments.clone()).unwrap_or_default())}
                            </p>
                            <form on:submit=move |ev: SubmitEvent| {
                                ev.prevent_default();
                                submit();
                            }>
                                <label for="moderatorComments">{ "Moderator Comments" }</label>
                                <textarea
                                    id="moderatorComments"
                                    class="form-control"
                                    rows="3"
                                    required=true
                                    data-testid="ReviewModerationModal-comments"
                                    prop:value=move || dialog.with(|d| d.comments().to_string())
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        dialog.update(|d| d.set_comments(text));
                                    }
                                ></textarea>
                                <Show when=move || missing_comments.get()>
                                    <div class="invalid-feedback d-block" data-testid="ReviewModerationModal-error">
                                        { "Moderator comments are required." }
                                    </div>
                                </Show>
                            </form>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=move |_| close()>
                                { "Cancel" }
                            </button>
                            <button
                                type="button"
                                class=move || match decision() {
                                    ModerationDecision::Approve => "btn btn-success",
                                    ModerationDecision::Reject => "btn btn-danger",
                                }
                                data-testid="ReviewModerationModal-submit"
                                disabled=move || busy.get()
                                on:click=move |_| submit()
                            >
                                {move || decision().label()}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
