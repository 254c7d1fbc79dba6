//! Property tests for status/priority rules and task creation.

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::json;

use chore_core::{ChoreServices, MemoryTableClient, Priority, Session, TaskDraft, TaskStatus, UserId};

fn any_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::Low), Just(Priority::Medium), Just(Priority::High)]
}

fn any_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Pending),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Completed)
    ]
}

proptest! {
    #[test]
    fn priority_cycle_closes_after_three_steps(start in any_priority()) {
        prop_assert_eq!(start.next().next().next(), start);
        prop_assert_ne!(start.next(), start);
    }

    #[test]
    fn status_column_value_parses_back(status in any_status()) {
        prop_assert_eq!(TaskStatus::parse(status.as_str()).unwrap(), status);
        prop_assert_eq!(TaskStatus::from_slug(status.slug()).unwrap(), status);
    }

    #[test]
    fn unknown_status_strings_are_rejected(raw in "[a-zA-Z ]{0,16}") {
        let known = TaskStatus::ALL.iter().any(|s| s.as_str() == raw);
        prop_assert_eq!(TaskStatus::parse(&raw).is_ok(), known);
    }

    #[test]
    fn create_makes_exactly_one_pending_task(
        name in "[A-Za-z][A-Za-z ]{0,20}",
        description in "[A-Za-z][A-Za-z ]{0,40}",
        priority in any_priority(),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(async {
            let client = Arc::new(MemoryTableClient::new());
            client
                .seed("users", vec![json!({"id": 1, "family_id": 9}).as_object().cloned().unwrap()])
                .await;
            let services = ChoreServices::new(client.clone(), true);
            let session = Session::new(UserId(1));

            let draft = TaskDraft::new(name.clone(), description.clone()).with_priority(priority);
            let created = services.tasks.create(&session, draft).await.unwrap();

            assert_eq!(client.rows("tasks").await.len(), 1);
            assert_eq!(created.status, TaskStatus::Pending);
            assert_eq!(created.priority, priority);
            assert_eq!(created.name, name);
        });
    }
}
