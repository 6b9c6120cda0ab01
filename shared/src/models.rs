use serde::{Serialize, Deserialize};
use serde_json::Value;
use std::collections::BTreeSet;
use time::OffsetDateTime;

pub const DEFAULT_ADMIN_PASSWORD: &str = "slay2024admin";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BallotRecord {
    pub voter_id: String,
    pub selections: Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub origin_address: String,
}

/// The whole persisted state. Rewritten wholesale on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreDocument {
    pub votes: Vec<BallotRecord>,
    // Absent in documents written before origin tracking existed.
    #[serde(default)]
    pub voted_origins: BTreeSet<String>,
    pub admin_password: String,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            votes: Vec::new(),
            voted_origins: BTreeSet::new(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl StoreDocument {
    pub fn find_vote(&self, voter_id: &str) -> Option<&BallotRecord> {
        self.votes.iter().find(|v| v.voter_id == voter_id)
    }

    pub fn vote_position(&self, voter_id: &str) -> Option<usize> {
        self.votes.iter().position(|v| v.voter_id == voter_id)
    }

    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.votes.iter().any(|v| v.voter_id == voter_id)
    }

    pub fn origin_has_voted(&self, origin: &str) -> bool {
        self.voted_origins.contains(origin)
    }

    /// Empties votes and the origin set. The admin password survives.
    pub fn clear_ballots(&mut self) -> usize {
        let cleared = self.votes.len();
        self.votes.clear();
        self.voted_origins.clear();
        cleared
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    Created,
    Updated,
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Created => "Vote recorded successfully",
            SubmitOutcome::Updated => "Vote updated successfully",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVoteRequest {
    // Absent fields deserialize to their empty value so validation can
    // report which field is missing instead of failing body parsing.
    #[serde(default)]
    pub voter_id: String,
    #[serde(default)]
    pub selections: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVotedRequest {
    #[serde(default)]
    pub voter_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPasswordRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVoteResponse {
    pub success: bool,
    pub status: SubmitOutcome,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub success: bool,
    pub vote: BallotRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteListResponse {
    pub success: bool,
    pub votes: Vec<BallotRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVotedResponse {
    pub success: bool,
    pub has_voted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPasswordResponse {
    pub success: bool,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearVotesResponse {
    pub success: bool,
    pub message: String,
    pub cleared: usize,
}
