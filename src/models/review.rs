use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    #[default]
    AwaitingReview,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::AwaitingReview => "AWAITING_REVIEW",
            ReviewStatus::Approved => "APPROVED",
            ReviewStatus::Rejected => "REJECTED",
        }
    }

    /// Reviews leave AWAITING_REVIEW exactly once.
    pub fn can_transition_to(self, next: ReviewStatus) -> bool {
        matches!(
            (self, next),
            (ReviewStatus::AwaitingReview, ReviewStatus::Approved)
                | (ReviewStatus::AwaitingReview, ReviewStatus::Rejected)
        )
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a moderator can do to a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationDecision {
    Approve,
    Reject,
}

impl ModerationDecision {
    pub fn status(self) -> ReviewStatus {
        match self {
            ModerationDecision::Approve => ReviewStatus::Approved,
            ModerationDecision::Reject => ReviewStatus::Rejected,
        }
    }

    /// "Approve" / "Reject"
    pub fn label(self) -> &'static str {
        match self {
            ModerationDecision::Approve => "Approve",
            ModerationDecision::Reject => "Reject",
        }
    }

    /// "approved" / "rejected"
    pub fn past_tense(self) -> &'static str {
        match self {
            ModerationDecision::Approve => "approved",
            ModerationDecision::Reject => "rejected",
        }
    }
}

/// A student's review of one menu item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub student_id: i64,
    pub item_id: i64,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub date_item_served: Option<NaiveDateTime>,
    #[serde(default)]
    pub reviewer_comments: Option<String>,
    pub items_stars: u8,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub user_id_moderator: Option<i64>,
    #[serde(default)]
    pub moderator_comments: Option<String>,
    #[serde(default)]
    pub date_reviewed: Option<NaiveDateTime>,
    #[serde(default)]
    pub date_created: Option<NaiveDateTime>,
    #[serde(default)]
    pub date_edited: Option<NaiveDateTime>,
}

/// Wire format for timestamps, `2022-01-02T12:00:00`.
pub fn format_timestamp(value: Option<&NaiveDateTime>) -> String {
    value
        .map(|value| value.format("%Y-%m-%dT%H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_review() {
        let review: Review = serde_json::from_value(json!({
            "id": 1,
            "studentId": 1,
            "itemId": 7,
            "itemName": "Grilled Cheese Sandwich",
            "dateItemServed": "2022-01-02T12:00:00",
            "reviewerComments": "Tasty and fresh!",
            "itemsStars": 5,
            "status": "AWAITING_REVIEW",
            "userIdModerator": null,
            "moderatorComments": null,
            "dateReviewed": "2022-01-01T12:00:00",
            "dateCreated": "2022-01-01T12:00:00",
            "dateEdited": "2022-01-01T12:00:00"
        }))
        .unwrap();

        assert_eq!(review.item_name, "Grilled Cheese Sandwich");
        assert_eq!(review.status, ReviewStatus::AwaitingReview);
        assert_eq!(format_timestamp(review.date_item_served.as_ref()), "2022-01-02T12:00:00");
    }

    #[test]
    fn status_leaves_awaiting_review_only() {
        use ReviewStatus::*;
        assert!(AwaitingReview.can_transition_to(Approved));
        assert!(AwaitingReview.can_transition_to(Rejected));
        assert!(!Approved.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Approved));
        assert!(!AwaitingReview.can_transition_to(AwaitingReview));
    }

    #[test]
    fn decisions_never_target_awaiting_review() {
        assert_eq!(ModerationDecision::Approve.status().to_string(), "APPROVED");
        assert_eq!(ModerationDecision::Reject.status().to_string(), "REJECTED");
        assert_eq!(
            serde_json::to_value(ReviewStatus::AwaitingReview).unwrap(),
            json!("AWAITING_REVIEW")
        );
    }
}
