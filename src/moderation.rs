//! Moderation requests, their toast texts, and the review dialog state.

use crate::api::RequestDescriptor;
use crate::cache::QueryKey;
use crate::error::ApiError;
use crate::models::alias::AliasProposal;
use crate::models::review::{ModerationDecision, Review};

pub const PENDING_ALIASES_PATH: &str = "/api/admin/usersWithProposedAlias";
pub const PENDING_REVIEWS_PATH: &str = "/api/reviews/needsmoderation";
pub const ALIAS_MODERATION_PATH: &str = "/api/currentUser/updateAliasModeration";
pub const REVIEW_MODERATION_PATH: &str = "/api/reviews/moderate";

pub fn pending_aliases_key() -> QueryKey {
    QueryKey::from(PENDING_ALIASES_PATH)
}

pub fn pending_reviews_key() -> QueryKey {
    QueryKey::from(PENDING_REVIEWS_PATH)
}

pub fn pending_aliases_request() -> RequestDescriptor {
    RequestDescriptor::get(PENDING_ALIASES_PATH)
}

pub fn pending_reviews_request() -> RequestDescriptor {
    RequestDescriptor::get(PENDING_REVIEWS_PATH)
}

/// `PUT /api/currentUser/updateAliasModeration?id=..&approved=..`
pub fn alias_moderation_request(alias: &AliasProposal, approved: bool) -> RequestDescriptor {
    RequestDescriptor::put(ALIAS_MODERATION_PATH)
        .param("id", alias.id)
        .param("approved", approved)
}

/// `PUT /api/reviews/moderate?id=..&status=..&moderatorComments=..`
pub fn review_moderation_request(
    review: &Review,
    decision: ModerationDecision,
    moderator_comments: &str,
) -> RequestDescriptor {
    RequestDescriptor::put(REVIEW_MODERATION_PATH)
        .param("id", review.id)
        .param("status", decision.status())
        .param("moderatorComments", moderator_comments)
}

pub fn alias_success_message(alias: &AliasProposal, approved: bool) -> String {
    let verb = if approved { "approved" } else { "rejected" };
    format!("Alias \"{}\" for ID {} {}!", alias.proposed_alias, alias.id, verb)
}

pub fn alias_error_message(approved: bool, err: &ApiError) -> String {
    let verb = if approved { "approving" } else { "rejecting" };
    format!("Error {} alias: {}", verb, err.user_message())
}

pub fn review_success_message(decision: ModerationDecision) -> String {
    format!("Review {}!", decision.past_tense())
}

pub fn review_error_message(err: &ApiError) -> String {
    format!("Error: {}", err.user_message())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogError {
    /// Submit pressed on a closed dialog.
    NotOpen,
    /// Moderator comments are required.
    MissingComments,
}

/// The review moderation dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModerationDialog {
    #[default]
    Closed,
    Open {
        review: Review,
        decision: ModerationDecision,
        comments: String,
    },
}

impl ModerationDialog {
    /// Opening always starts from an empty comment box.
    pub fn open(review: Review, decision: ModerationDecision) -> Self {
        ModerationDialog::Open {
            review,
            decision,
            comments: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModerationDialog::Open { .. })
    }

    pub fn decision(&self) -> Option<ModerationDecision> {
        match self {
            ModerationDialog::Open { decision, .. } => Some(*decision),
            ModerationDialog::Closed => None,
        }
    }

    pub fn review(&self) -> Option<&Review> {
        match self {
            ModerationDialog::Open { review, .. } => Some(review),
            ModerationDialog::Closed => None,
        }
    }

    pub fn comments(&self) -> &str {
        match self {
            ModerationDialog::Open { comments, .. } => comments,
            ModerationDialog::Closed => "",
        }
    }

    pub fn set_comments(&mut self, text: impl Into<String>) {
        if let ModerationDialog::Open { comments, .. } = self {
            *comments = text.into();
        }
    }

    /// The `(review, comments)` pair to send, if the form is valid.
    /// Leaves the dialog untouched either way.
    pub fn submission(&self) -> Result<(Review, String), DialogError> {
        match self {
            ModerationDialog::Closed => Err(DialogError::NotOpen),
            ModerationDialog::Open { comments, .. } if comments.trim().is_empty() => {
                Err(DialogError::MissingComments)
            }
            ModerationDialog::Open { review, comments, .. } => Ok((review.clone(), comments.clone())),
        }
    }

    /// Cancel, successful submit, or the parent closing it.
    pub fn close(&mut self) {
        *self = ModerationDialog::Closed;
    }
}
