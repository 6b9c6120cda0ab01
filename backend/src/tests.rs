#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use shared::models::{StoreDocument, SubmitOutcome, DEFAULT_ADMIN_PASSWORD};
    use shared::validation::ValidationError;
    use crate::error::ApiError;
    use crate::processor::VoteProcessor;
    use crate::store::{FileStore, StoreError};

    fn store() -> (FileStore, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("votes.json")).unwrap();
        (store, dir)
    }

    fn submit(store: &FileStore, voter_id: &str, selections: Value, origin: &str) -> Result<SubmitOutcome, ApiError> {
        VoteProcessor::submit_vote(store, voter_id, selections, origin)
    }

    #[test]
    fn test_open_creates_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("votes.json");
        assert!(!path.exists());

        let store = FileStore::open(&path).unwrap();
        assert!(path.exists());

        let doc = store.load().unwrap();
        assert!(doc.votes.is_empty());
        assert!(doc.voted_origins.is_empty());
        assert_eq!(doc.admin_password, DEFAULT_ADMIN_PASSWORD);
    }

    #[test]
    fn test_load_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("votes.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Parse(_))));

        // The processor surfaces it as a storage failure.
        assert!(matches!(
            VoteProcessor::list_votes(&store),
            Err(ApiError::Storage(_))
        ));
    }

    #[test]
    fn test_submit_then_get() {
        let (store, _dir) = store();

        let outcome = submit(&store, "u1", json!([1, 2]), "10.0.0.1").unwrap();
        assert_eq!(outcome, SubmitOutcome::Created);

        let vote = VoteProcessor::get_vote(&store, "u1").unwrap();
        assert_eq!(vote.voter_id, "u1");
        assert_eq!(vote.selections, json!([1, 2]));
        assert_eq!(vote.origin_address, "10.0.0.1");
    }

    #[test]
    fn test_get_unknown_voter_is_not_found() {
        let (store, _dir) = store();
        assert!(matches!(
            VoteProcessor::get_vote(&store, "nobody"),
            Err(ApiError::NotFound)
        ));
    }

    #[test]
    fn test_resubmit_overwrites_in_place() {
        let (store, _dir) = store();

        submit(&store, "u1", json!([1]), "10.0.0.1").unwrap();
        submit(&store, "u2", json!([2]), "10.0.0.2").unwrap();

        let outcome = submit(&store, "u1", json!([9]), "10.0.0.3").unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated);

        let votes = VoteProcessor::list_votes(&store).unwrap();
        assert_eq!(votes.len(), 2);
        // Same position, fresh content.
        assert_eq!(votes[0].voter_id, "u1");
        assert_eq!(votes[0].selections, json!([9]));
        assert_eq!(votes[0].origin_address, "10.0.0.3");
        assert_eq!(votes[1].voter_id, "u2");
    }

    #[test]
    fn test_duplicate_origin_rejected_for_new_voter() {
        let (store, _dir) = store();

        assert_eq!(submit(&store, "u1", json!([1, 2]), "A").unwrap(), SubmitOutcome::Created);
        assert_eq!(VoteProcessor::list_votes(&store).unwrap().len(), 1);

        assert!(matches!(
            submit(&store, "u2", json!([3]), "A"),
            Err(ApiError::DuplicateOrigin)
        ));
        assert_eq!(VoteProcessor::list_votes(&store).unwrap().len(), 1);

        // Updates by an existing voterId are never origin-blocked.
        assert_eq!(submit(&store, "u1", json!([4]), "A").unwrap(), SubmitOutcome::Updated);
        assert_eq!(VoteProcessor::get_vote(&store, "u1").unwrap().selections, json!([4]));
    }

    #[test]
    fn test_distinct_origins_create_distinct_votes() {
        let (store, _dir) = store();

        submit(&store, "u1", json!([1]), "A").unwrap();
        submit(&store, "u2", json!([2]), "B").unwrap();

        let votes = VoteProcessor::list_votes(&store).unwrap();
        assert_eq!(votes.len(), 2);
        assert_eq!(votes[0].voter_id, "u1");
        assert_eq!(votes[1].voter_id, "u2");
    }

    #[test]
    fn test_has_voted_ignores_origin_block() {
        let (store, _dir) = store();

        submit(&store, "u1", json!([1]), "A").unwrap();

        assert!(VoteProcessor::has_voted(&store, "u1").unwrap());
        // u2's address is blocked from creating a record, yet it still
        // reports as not having voted.
        assert!(!VoteProcessor::has_voted(&store, "u2").unwrap());
        assert!(matches!(
            submit(&store, "u2", json!([2]), "A"),
            Err(ApiError::DuplicateOrigin)
        ));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let (store, _dir) = store();

        assert!(matches!(
            submit(&store, "", json!([1]), "A"),
            Err(ApiError::Validation(ValidationError::MissingVoterId))
        ));
        assert!(matches!(
            submit(&store, "u1", Value::Null, "A"),
            Err(ApiError::Validation(ValidationError::MissingSelections))
        ));
        assert!(VoteProcessor::list_votes(&store).unwrap().is_empty());
    }

    #[test]
    fn test_check_admin_password_is_exact() {
        let (store, _dir) = store();

        assert!(VoteProcessor::check_admin_password(&store, DEFAULT_ADMIN_PASSWORD).unwrap());
        assert!(!VoteProcessor::check_admin_password(&store, "SLAY2024ADMIN").unwrap());
        assert!(!VoteProcessor::check_admin_password(&store, " slay2024admin").unwrap());
        assert!(!VoteProcessor::check_admin_password(&store, "slay2024admin ").unwrap());
        assert!(matches!(
            VoteProcessor::check_admin_password(&store, ""),
            Err(ApiError::Validation(ValidationError::MissingPassword))
        ));
    }

    #[test]
    fn test_clear_votes_wrong_password() {
        let (store, _dir) = store();
        submit(&store, "u1", json!([1]), "A").unwrap();

        assert!(matches!(
            VoteProcessor::clear_votes(&store, "wrong"),
            Err(ApiError::Unauthorized)
        ));

        let doc = store.load().unwrap();
        assert_eq!(doc.votes.len(), 1);
        assert!(doc.voted_origins.contains("A"));
    }

    #[test]
    fn test_clear_votes_correct_password() {
        let (store, _dir) = store();
        submit(&store, "u1", json!([1]), "A").unwrap();
        submit(&store, "u2", json!([2]), "B").unwrap();

        let cleared = VoteProcessor::clear_votes(&store, DEFAULT_ADMIN_PASSWORD).unwrap();
        assert_eq!(cleared, 2);

        let doc = store.load().unwrap();
        assert!(doc.votes.is_empty());
        assert!(doc.voted_origins.is_empty());
        assert_eq!(doc.admin_password, DEFAULT_ADMIN_PASSWORD);

        // The cleared origin may create a first-time vote again.
        assert_eq!(submit(&store, "u3", json!([3]), "A").unwrap(), SubmitOutcome::Created);
    }

    #[test]
    fn test_serialize_failure_reported_as_such() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let msg = StoreError::Serialize(json_err).to_string();
        assert!(msg.starts_with("Failed to serialize store document"));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let msg = StoreError::Parse(json_err).to_string();
        assert!(msg.starts_with("Data file is not valid JSON"));
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        use std::sync::Arc;

        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStore::open(dir.path().join("votes.json")).unwrap());

        let writers: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    submit(&store, &format!("u{i}"), json!([i]), &format!("10.0.0.{i}")).unwrap();
                })
            })
            .collect();

        // Readers interleave with the non-atomic rewrites; the store guard
        // must keep them from ever parsing a half-written document.
        let readers: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..20 {
                        VoteProcessor::list_votes(&store).unwrap();
                        VoteProcessor::has_voted(&store, "u0").unwrap();
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }

        assert_eq!(VoteProcessor::list_votes(&store).unwrap().len(), 8);
    }

    #[test]
    fn test_document_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("votes.json");

        {
            let store = FileStore::open(&path).unwrap();
            submit(&store, "u1", json!([1, 2]), "10.0.0.1").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        let vote = VoteProcessor::get_vote(&store, "u1").unwrap();
        assert_eq!(vote.selections, json!([1, 2]));
        assert!(store.load().unwrap().voted_origins.contains("10.0.0.1"));
    }

    #[test]
    fn test_persisted_document_is_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("votes.json");
        let store = FileStore::open(&path).unwrap();
        submit(&store, "u1", json!({"round1": "option-a"}), "10.0.0.1").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let doc: StoreDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc.votes[0].voter_id, "u1");
        // Pretty-printed on disk.
        assert!(raw.contains('\n'));
        assert!(raw.contains("\"voterId\""));
    }
}
