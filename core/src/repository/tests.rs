//! Repository Integration Tests
//!
//! Tests for the entity repositories over the in-memory table client.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::domain::{
        DomainError, FamilyId, NewTask, Priority, SuggestedTaskId, TaskDraft, TaskId, TaskStatus, UserId,
    };
    use crate::repository::{
        Filter, MemoryTableClient, Repository, Row, SuggestedTaskRepository, TableClient, TaskRepository,
        UserRepository,
    };

    fn row(value: serde_json::Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    async fn setup_test_client() -> Arc<MemoryTableClient> {
        let client = Arc::new(MemoryTableClient::new());
        client
            .seed(
                "users",
                vec![
                    row(json!({"id": 1, "family_id": 10, "name": "Ana"})),
                    row(json!({"id": 2, "family_id": 20, "name": "Ben"})),
                    row(json!({"id": 3, "family_id": null})),
                ],
            )
            .await;
        client
            .seed(
                "suggested_tasks",
                vec![
                    row(json!({"id": 5, "name": "Mow lawn", "description": "Front yard", "estimated_cost": 20})),
                    row(json!({"id": 6, "name": "Clean gutters", "description": null})),
                ],
            )
            .await;
        client
    }

    fn new_task(family: i64, name: &str) -> NewTask {
        NewTask::from_draft(FamilyId(family), TaskDraft::new(name, "details"))
    }

    #[tokio::test]
    async fn test_insert_task() {
        let client = setup_test_client().await;
        let repo = TaskRepository::new(client.clone());

        let created = repo.insert(&new_task(10, "Grocery Run")).await.expect("Failed to insert");

        assert!(created.id.0 > 0);
        assert_eq!(created.name, "Grocery Run");
        assert_eq!(created.status, TaskStatus::Pending);
        assert_eq!(created.family_id, Some(FamilyId(10)));
        assert!(created.date_created.is_some());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let client = setup_test_client().await;
        let repo = TaskRepository::new(client.clone());

        let created = repo.insert(&new_task(10, "Find me")).await.unwrap();

        let found = repo.find_by_id(created.id).await.expect("Find failed");
        assert_eq!(found.map(|t| t.name), Some("Find me".to_string()));

        let missing = repo.find_by_id(TaskId(999)).await.expect("Find failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_ambiguous() {
        let client = setup_test_client().await;
        client
            .seed(
                "tasks",
                vec![
                    row(json!({"id": 7, "name": "a", "status": "Pending"})),
                    row(json!({"id": 7, "name": "b", "status": "Pending"})),
                ],
            )
            .await;
        let repo = TaskRepository::new(client.clone());

        let result = repo.find_by_id(TaskId(7)).await;
        assert!(matches!(result, Err(DomainError::AmbiguousResult(_))));
    }

    #[tokio::test]
    async fn test_list_filters_family_and_status() {
        let client = setup_test_client().await;
        let repo = TaskRepository::new(client.clone());

        let mine = repo.insert(&new_task(10, "Mine")).await.unwrap();
        repo.insert(&new_task(20, "Theirs")).await.unwrap();
        let started = repo.insert(&new_task(10, "Started")).await.unwrap();
        repo.update_status(started.id, TaskStatus::InProgress).await.unwrap();

        let pending = repo.list_by_family_status(FamilyId(10), TaskStatus::Pending).await.expect("List failed");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, mine.id);
        // family_id is not among the listed columns
        assert!(pending[0].family_id.is_none());

        let in_progress = repo
            .list_by_family_status(FamilyId(10), TaskStatus::InProgress)
            .await
            .unwrap();
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].name, "Started");
    }

    #[tokio::test]
    async fn test_update_fields() {
        let client = setup_test_client().await;
        let repo = TaskRepository::new(client.clone());
        let created = repo.insert(&new_task(10, "Original")).await.unwrap();

        assert_eq!(repo.update_priority(created.id, Priority::High).await.unwrap(), 1);
        assert_eq!(repo.update_status(created.id, TaskStatus::Completed).await.unwrap(), 1);

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.priority, Priority::High);
        assert_eq!(found.status, TaskStatus::Completed);
        assert_eq!(found.name, "Original");

        assert_eq!(repo.update_status(TaskId(999), TaskStatus::Completed).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_task() {
        let client = setup_test_client().await;
        let repo = TaskRepository::new(client.clone());
        let created = repo.insert(&new_task(10, "To delete")).await.unwrap();

        assert_eq!(repo.delete(created.id).await.expect("Delete failed"), 1);
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());

        // Second delete affects nothing and still succeeds
        assert_eq!(repo.delete(created.id).await.expect("Delete failed"), 0);
    }

    #[tokio::test]
    async fn test_user_family_lookup() {
        let client = setup_test_client().await;
        let repo = UserRepository::new(client.clone());

        assert_eq!(repo.find_family_id(UserId(1)).await.unwrap(), Some(FamilyId(10)));
        assert_eq!(repo.find_family_id(UserId(3)).await.unwrap(), None);
        assert_eq!(repo.find_family_id(UserId(42)).await.unwrap(), None);

        let user = repo.find_by_id(UserId(2)).await.unwrap().unwrap();
        assert_eq!(user.name.as_deref(), Some("Ben"));
    }

    #[tokio::test]
    async fn test_suggestion_catalog() {
        let client = setup_test_client().await;
        let repo = SuggestedTaskRepository::new(client.clone());

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);

        let gutters = repo.find_by_id(SuggestedTaskId(6)).await.unwrap().unwrap();
        assert_eq!(gutters.description, "");
        assert!(gutters.estimated_cost.is_none());
    }

    #[tokio::test]
    async fn test_memory_projection_and_filter() {
        let client = setup_test_client().await;

        let rows = client
            .select("users", "id, name", &Filter::eq("family_id", 20))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name"), Some(&json!("Ben")));
        assert!(rows[0].get("family_id").is_none());

        let none = client.select("no_such_table", "*", &Filter::all()).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_memory_ids_continue_after_seed() {
        let client = setup_test_client().await;
        client.seed("tasks", vec![row(json!({"id": 40, "name": "old", "status": "Pending"}))]).await;

        let inserted = client.insert("tasks", row(json!({"name": "new", "status": "Pending"}))).await.unwrap();
        assert_eq!(inserted[0].get("id"), Some(&json!(41)));
    }
}
