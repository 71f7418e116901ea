use crate::components::table::{button_id, cell_id, header_id, row_id};
use crate::models::alias::AliasProposal;
use leptos::*;

pub const TABLE: &str = "AliasTable";
pub const APPROVE: &str = "approve";
pub const REJECT: &str = "reject";

pub const COLUMNS: &[(&str, &str)] = &[("id", "id"), ("proposedAlias", "Proposed Alias")];

/// Cell text per column, in `COLUMNS` order.
pub fn cells(alias: &AliasProposal) -> Vec<(&'static str, String)> {
    vec![
        ("id", alias.id.to_string()),
        ("proposedAlias", alias.proposed_alias.clone()),
    ]
}

/// Pending alias proposals, optionally with Approve/Reject buttons.
#[component]
pub fn AliasTable(
    #[prop(into)] aliases: MaybeSignal<Vec<AliasProposal>>,
    #[prop(optional)] moderator_options: bool,
    #[prop(optional, into)] on_approve: Option<Callback<AliasProposal>>,
    #[prop(optional, into)] on_reject: Option<Callback<AliasProposal>>,
) -> impl IntoView {
    view! {
        <table class="table table-striped" data-testid=TABLE>
            <thead>
                <tr>
                    {COLUMNS.iter().map(|(column, title)| view! {
                        <th data-testid=header_id(TABLE, column)>{ *title }</th>
                    }).collect::<Vec<_>>()}
                    {moderator_options.then(|| view! {
                        <th data-testid=header_id(TABLE, APPROVE)>{ "Approve" }</th>
                        <th data-testid=header_id(TABLE, REJECT)>{ "Reject" }</th>
                    })}
                </tr>
            </thead>
            <tbody>
                {move || aliases.get().into_iter().enumerate().map(|(i, alias)| {
                    let row_cells = cells(&alias);
                    view! {
                        <tr data-testid=row_id(TABLE, i)>
                            {row_cells.into_iter().map(|(column, text)| view! {
                                <td data-testid=cell_id(TABLE, i, column)>{ text }</td>
                            }).collect::<Vec<_>>()}
                            {moderator_options.then(|| {
                                let approved = alias.clone();
                                let rejected = alias.clone();
                                view! {
                                    <td data-testid=cell_id(TABLE, i, APPROVE)>
                                        <button
                                            type="button"
                                            class="btn btn-success"
                                            data-testid=button_id(TABLE, i, APPROVE)
                                            on:click=move |_| {
                                                if let Some(on_approve) = on_approve {
                                                    on_approve.call(approved.clone());
                                                }
                                            }
                                        >{ "Approve" }</button>
                                    </td>
                                    <td data-testid=cell_id(TABLE, i, REJECT)>
                                        <button
                                            type="button"
                                            class="btn btn-danger"
                                            data-testid=button_id(TABLE, i, REJECT)
                                            on:click=move |_| {
                                                if let Some(on_reject) = on_reject {
                                                    on_reject.call(rejected.clone());
                                                }
                                            }
                                        >{ "Reject" }</button>
                                    </td>
                                }
                            })}
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_carry_fields_verbatim() {
        let alias = AliasProposal::new(1, "Ali1");
        assert_eq!(
            cells(&alias),
            vec![("id", "1".to_string()), ("proposedAlias", "Ali1".to_string())]
        );
        assert_eq!(cells(&alias).len(), COLUMNS.len());
    }
}
