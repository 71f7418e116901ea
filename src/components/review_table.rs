use crate::components::table::{button_id, cell_id, header_id, row_id};
use crate::models::review::{format_timestamp, Review};
use leptos::*;

pub const TABLE: &str = "ReviewTable";
pub const APPROVE: &str = "Approve";
pub const REJECT: &str = "Reject";

pub const COLUMNS: &[(&str, &str)] = &[
    ("id", "id"),
    ("itemId", "Item Id"),
    ("itemName", "Item Name"),
    ("dateItemServed", "Date Served"),
    ("itemsStars", "Stars"),
    ("reviewerComments", "Comments"),
    ("status", "Status"),
    ("moderatorComments", "Moderator Comments"),
];

/// Cell text per column, in `COLUMNS` order.
pub fn cells(review: &Review) -> Vec<(&'static str, String)> {
    vec![
        ("id", review.id.to_string()),
        ("itemId", review.item_id.to_string()),
        ("itemName", review.item_name.clone()),
        ("dateItemServed", format_timestamp(review.date_item_served.as_ref())),
        ("itemsStars", review.items_stars.to_string()),
        ("reviewerComments", review.reviewer_comments.clone().unwrap_or_default()),
        ("status", review.status.to_string()),
        ("moderatorComments", review.moderator_comments.clone().unwrap_or_default()),
    ]
}

#[component]
pub fn ReviewTable(
    #[prop(into)] reviews: MaybeSignal<Vec<Review>>,
    #[prop(optional)] moderator_options: bool,
    #[prop(optional, into)] on_approve: Option<Callback<Review>>,
    #[prop(optional, into)] on_reject: Option<Callback<Review>>,
) -> impl IntoView {
    let action_button = move |i: usize, action: &'static str, review: Review, callback: Option<Callback<Review>>| {
        let class = if action == APPROVE { "btn btn-success" } else { "btn btn-danger" };
        view! {
            <td data-testid=cell_id(TABLE, i, action)>
                <button
                    type="button"
                    class=class
                    data-testid=button_id(TABLE, i, action)
                    on:click=move |_| {
                        if let Some(callback) = callback {
                            callback.call(review.clone());
                        }
                    }
                >{ action }</button>
            </td>
        }
    };

    view! {
        <table class="table table-striped" data-testid=TABLE>
            <thead>
                <tr>
                    {COLUMNS.iter().map(|(column, title)| view! {
                        <th data-testid=header_id(TABLE, column)>{ *title }</th>
                    }).collect::<Vec<_>>()}
                    {moderator_options.then(|| view! {
                        <th data-testid=header_id(TABLE, APPROVE)>{ APPROVE }</th>
                        <th data-testid=header_id(TABLE, REJECT)>{ REJECT }</th>
                    })}
                </tr>
            </thead>
            <tbody>
                {move || reviews.get().into_iter().enumerate().map(|(i, review)| {
                    let row_cells = cells(&review);
                    view! {
                        <tr data-testid=row_id(TABLE, i)>
                            {row_cells.into_iter().map(|(column, text)| view! {
                                <td data-testid=cell_id(TABLE, i, column)>{ text }</td>
                            }).collect::<Vec<_>>()}
                            {moderator_options.then(|| vec![
                                action_button(i, APPROVE, review.clone(), on_approve),
                                action_button(i, REJECT, review.clone(), on_reject),
                            ])}
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
