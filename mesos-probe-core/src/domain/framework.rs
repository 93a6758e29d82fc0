//! Framework and task domain types

use serde::{Deserialize, Serialize};

/// A task launched by a framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,

    /// Last known task state (e.g. `TASK_RUNNING`)
    #[serde(rename = "state", default)]
    pub status: Option<String>,
}

/// A framework registered with the master
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Framework {
    pub id: String,
    pub name: String,

    /// Running tasks
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Tasks on agents the master cannot reach
    #[serde(default)]
    pub unreachable_tasks: Vec<Task>,
}

impl Framework {
    /// Look up a running or unreachable task by ID
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks
            .iter()
            .chain(self.unreachable_tasks.iter())
            .find(|task| task.id == task_id)
    }

    /// IDs of running tasks, in the order reported
    pub fn task_ids(&self) -> Vec<String> {
        self.tasks.iter().map(|task| task.id.clone()).collect()
    }
}

/// Response of `GET /frameworks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frameworks {
    #[serde(default)]
    pub frameworks: Vec<Framework>,

    #[serde(default)]
    pub completed_frameworks: Vec<Framework>,

    #[serde(default)]
    pub unregistered_frameworks: Vec<Framework>,
}

impl Frameworks {
    /// IDs of active frameworks, in the order reported
    pub fn ids(&self) -> Vec<String> {
        self.frameworks.iter().map(|f| f.id.clone()).collect()
    }

    /// IDs of completed frameworks, in the order reported
    pub fn completed_ids(&self) -> Vec<String> {
        self.completed_frameworks
            .iter()
            .map(|f| f.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_state_maps_to_status() {
        let task: Task = serde_json::from_value(json!({"id": "t1", "state": "TASK_RUNNING"})).unwrap();
        assert_eq!(task.status.as_deref(), Some("TASK_RUNNING"));

        let task: Task = serde_json::from_value(json!({"id": "t2"})).unwrap();
        assert_eq!(task.status, None);
    }

    #[test]
    fn test_framework_task_lookup() {
        let framework: Framework = serde_json::from_value(json!({
            "id": "fw-1",
            "name": "marathon",
            "tasks": [{"id": "a"}, {"id": "b"}],
            "unreachable_tasks": [{"id": "c", "state": "TASK_UNREACHABLE"}]
        }))
        .unwrap();

        assert_eq!(framework.task_ids(), vec!["a", "b"]);
        assert_eq!(
            framework.task("c").and_then(|t| t.status.as_deref()),
            Some("TASK_UNREACHABLE")
        );
        assert!(framework.task("d").is_none());
    }

    #[test]
    fn test_framework_requires_name() {
        let result: Result<Framework, _> = serde_json::from_value(json!({"id": "fw-1"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_frameworks_ids_keep_order() {
        let frameworks: Frameworks = serde_json::from_value(json!({
            "frameworks": [{"id": "z", "name": "z"}, {"id": "a", "name": "a"}],
            "completed_frameworks": [{"id": "m", "name": "m"}]
        }))
        .unwrap();

        assert_eq!(frameworks.ids(), vec!["z", "a"]);
        assert_eq!(frameworks.completed_ids(), vec!["m"]);
        assert!(frameworks.unregistered_frameworks.is_empty());
    }
}
