//! Project data structure and the built-in sample data set.
//!
//! A project is a named, ordered list of tasks. Display order is
//! navigation order. Projects are not structurally mutated at runtime:
//! no tasks are added or removed during a run.

use crate::task::Task;

/// A named, ordered collection of tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Project {
    /// Create a project from a name and a list of task names.
    pub fn new(name: &str, task_names: &[&str]) -> Self {
        Project {
            name: name.to_string(),
            tasks: task_names.iter().map(|n| Task::new(n)).collect(),
        }
    }
}

/// The hardcoded data set shown by the viewer.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new("Project 1", &["Task 1", "Task 2"]),
        Project::new("Project 2", &["Task 4", "Task 5"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_projects_shape() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Project 1");
        assert_eq!(projects[1].name, "Project 2");
        assert!(projects.iter().all(|p| !p.tasks.is_empty()));
    }

    #[test]
    fn test_sample_tasks_start_unfinished() {
        let projects = sample_projects();
        for project in &projects {
            assert!(project.tasks.iter().all(|t| !t.done));
        }
    }

    #[test]
    fn test_task_order_is_preserved() {
        let project = Project::new("Ordered", &["first", "second", "third"]);
        let names: Vec<&str> = project.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
