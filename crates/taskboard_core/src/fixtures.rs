//! Demo board content.
//!
//! Seeds two projects and a handful of tasks spread over the week around a
//! reference date, so both the board and the timeline have something to show.

use crate::config::BoardConfig;
use crate::model::project::{Project, ProjectDraft};
use crate::model::task::{Priority, Task, TaskDraft};
use crate::store::{InMemoryStore, Record};
use chrono::{DateTime, Days, NaiveDate, Utc};

/// Assignees offered by the demo board.
pub const DEMO_ASSIGNEES: [&str; 4] = ["John Doe", "Jane Smith", "Mike Johnson", "Sarah Wilson"];

/// Demo projects with ids 1 and 2.
pub fn demo_projects(now: DateTime<Utc>) -> Vec<Project> {
    let website = ProjectDraft::new("Website Redesign")
        .with_description("Refresh the marketing site")
        .with_column("Todo", "#e5e7eb")
        .with_column("In Progress", "#bfdbfe")
        .with_column("Review", "#fde68a")
        .with_column("Done", "#bbf7d0");
    let mobile = ProjectDraft::new("Mobile App")
        .with_column("Backlog", "#e5e7eb")
        .with_column("Doing", "#bfdbfe")
        .with_column("Shipped", "#bbf7d0");

    vec![
        Project::from_draft(1, website, now),
        Project::from_draft(2, mobile, now),
    ]
}

/// Demo tasks for the demo projects; due dates are offsets from `reference`.
pub fn demo_tasks(now: DateTime<Utc>, reference: NaiveDate) -> Vec<Task> {
    let due = |offset: u64| reference.checked_add_days(Days::new(offset));
    let [john, jane, mike, sarah] = DEMO_ASSIGNEES;

    let drafts = vec![
        TaskDraft::new(1, "Audit current pages", john, "Done")
            .with_description("List pages, owners and traffic"),
        TaskDraft::new(1, "Design new homepage", jane, "In Progress").with_priority(Priority::High),
        TaskDraft::new(1, "Write copy for pricing page", sarah, "Todo"),
        TaskDraft::new(1, "Review navigation prototype", mike, "Review")
            .with_priority(Priority::Low),
        TaskDraft::new(1, "Set up analytics", john, "Todo").with_priority(Priority::High),
        TaskDraft::new(2, "Login screen", mike, "Doing"),
        TaskDraft::new(2, "Push notifications", jane, "Backlog").with_priority(Priority::Low),
    ];
    let offsets = [None, due(1), due(2), due(2), None, due(3), due(5)];

    drafts
        .into_iter()
        .zip(offsets)
        .enumerate()
        .map(|(index, (mut draft, due_date))| {
            draft.due_date = due_date;
            Task::from_draft(index as u64 + 1, draft, now)
        })
        .collect()
}

/// Stores pre-filled with the demo projects and tasks.
pub fn demo_stores(
    config: &BoardConfig,
    reference: NaiveDate,
) -> (InMemoryStore<Project>, InMemoryStore<Task>) {
    let now = Utc::now();
    (
        InMemoryStore::with_records(demo_projects(now), config.latency),
        InMemoryStore::with_records(demo_tasks(now, reference), config.latency),
    )
}
