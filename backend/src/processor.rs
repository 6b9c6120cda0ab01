use time::OffsetDateTime;
use tracing::{debug, info};
use serde_json::Value;
use shared::models::*;
use shared::validation::{validate_submission, validate_voter_id, validate_password};
use crate::error::ApiError;
use crate::store::FileStore;

pub struct VoteProcessor;

impl VoteProcessor {
    /// Records or updates a ballot. An existing voterId is always
    /// overwritten in place, whatever its origin history; a new voterId is
    /// rejected when the origin already created a first-time vote.
    pub fn submit_vote(
        store: &FileStore,
        voter_id: &str,
        selections: Value,
        origin: &str,
    ) -> Result<SubmitOutcome, ApiError> {
        validate_submission(voter_id, &selections)?;

        let _guard = store.guard()?;
        let mut doc = store.load()?;

        let record = BallotRecord {
            voter_id: voter_id.to_string(),
            selections,
            created_at: OffsetDateTime::now_utc(),
            origin_address: origin.to_string(),
        };

        let outcome = match doc.vote_position(voter_id) {
            Some(index) => {
                doc.votes[index] = record;
                SubmitOutcome::Updated
            }
            None => {
                if doc.origin_has_voted(origin) {
                    debug!("Origin {} already holds a first-time vote", origin);
                    return Err(ApiError::DuplicateOrigin);
                }
                doc.votes.push(record);
                doc.voted_origins.insert(origin.to_string());
                SubmitOutcome::Created
            }
        };

        store.save(&doc)?;
        info!("Ballot for voter {} {:?} from {}", voter_id, outcome, origin);
        Ok(outcome)
    }

    pub fn get_vote(store: &FileStore, voter_id: &str) -> Result<BallotRecord, ApiError> {
        let _guard = store.guard()?;
        let doc = store.load()?;
        doc.find_vote(voter_id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    /// All records in insertion order.
    pub fn list_votes(store: &FileStore) -> Result<Vec<BallotRecord>, ApiError> {
        let _guard = store.guard()?;
        Ok(store.load()?.votes)
    }

    /// Existence of a record for this voterId only. Deliberately
    /// independent of the origin-based duplicate check: an unknown voterId
    /// reports false even when its address is already blocked from
    /// creating a record.
    pub fn has_voted(store: &FileStore, voter_id: &str) -> Result<bool, ApiError> {
        validate_voter_id(voter_id)?;
        let _guard = store.guard()?;
        Ok(store.load()?.has_voted(voter_id))
    }

    /// Exact byte equality, case-sensitive, no trimming.
    pub fn check_admin_password(store: &FileStore, candidate: &str) -> Result<bool, ApiError> {
        validate_password(candidate)?;
        let _guard = store.guard()?;
        Ok(store.load()?.admin_password == candidate)
    }

    /// Empties votes and voted origins; the admin password survives.
    /// Returns the number of records removed.
    pub fn clear_votes(store: &FileStore, candidate: &str) -> Result<usize, ApiError> {
        validate_password(candidate)?;

        let _guard = store.guard()?;
        let mut doc = store.load()?;

        if doc.admin_password != candidate {
            return Err(ApiError::Unauthorized);
        }

        let cleared = doc.clear_ballots();
        store.save(&doc)?;
        info!("Cleared {} ballot(s) on admin request", cleared);
        Ok(cleared)
    }
}
