use serde::{Deserialize, Serialize};

/// A user whose proposed display name is waiting for a moderator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AliasProposal {
    pub id: i64,
    #[serde(default)]
    pub proposed_alias: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AliasProposal {
    pub fn new(id: i64, proposed_alias: impl Into<String>) -> Self {
        Self {
            id,
            proposed_alias: proposed_alias.into(),
            alias: None,
            email: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_user_record_from_alias_endpoint() {
        let alias: AliasProposal = serde_json::from_value(json!({
            "id": 1,
            "email": "ali@ucsb.edu",
            "alias": "Anonymous User",
            "proposedAlias": "Ali1",
            "admin": false
        }))
        .unwrap();

        assert_eq!(alias.id, 1);
        assert_eq!(alias.proposed_alias, "Ali1");
        assert_eq!(alias.alias.as_deref(), Some("Anonymous User"));
    }
}
