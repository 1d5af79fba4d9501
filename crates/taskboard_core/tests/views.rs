use chrono::{Days, NaiveDate, Utc};
use std::collections::HashSet;
use taskboard_core::{
    filter_tasks, group_by_column, group_by_day, orphaned_tasks, start_of_week, Column, Priority,
    Record, Task, TaskDraft, TaskFilter, WeekStart,
};

const ASSIGNEES: [&str; 3] = ["Ada", "Grace", "Linus"];
const PRIORITIES: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];
const STATUSES: [&str; 4] = ["Todo", "Doing", "Done", "Archived"];
const TITLES: [&str; 5] = ["Fix login", "Write docs", "Plan sprint", "Review PR", "Deploy"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn sample_tasks() -> Vec<Task> {
    let now = Utc::now();
    (0..30u64)
        .map(|i| {
            let index = i as usize;
            let mut draft = TaskDraft::new(
                1,
                TITLES[index % TITLES.len()],
                ASSIGNEES[index % ASSIGNEES.len()],
                STATUSES[index % STATUSES.len()],
            )
            .with_priority(PRIORITIES[(index / 2) % PRIORITIES.len()]);
            if i % 3 == 0 {
                draft = draft.with_description(format!("Sprint note {i}"));
            }
            if i % 4 != 0 {
                draft.due_date = base_date().checked_add_days(Days::new(i));
            }
            Task::from_draft(i + 1, draft, now)
        })
        .collect()
}

fn columns() -> Vec<Column> {
    vec![
        Column::new(1, "Todo", "gray"),
        Column::new(2, "Doing", "blue"),
        Column::new(3, "Done", "green"),
    ]
}

fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|task| task.id).collect()
}

#[test]
fn empty_search_and_filter_is_identity() {
    let tasks = sample_tasks();
    assert_eq!(filter_tasks(&tasks, "", &TaskFilter::default()), tasks);
}

#[test]
fn combined_filter_equals_intersection_of_single_filters() {
    let tasks = sample_tasks();
    for term in ["", "o", "DOCS", "note", "grace", "zzz"] {
        for assignee in ASSIGNEES {
            for priority in PRIORITIES {
                let combined = TaskFilter {
                    assignee: Some(assignee.to_string()),
                    priority: Some(priority),
                };
                let actual = ids(&filter_tasks(&tasks, term, &combined));

                let by_term: HashSet<u64> =
                    ids(&filter_tasks(&tasks, term, &TaskFilter::default()))
                        .into_iter()
                        .collect();
                let by_assignee: HashSet<u64> =
                    ids(&filter_tasks(&tasks, "", &TaskFilter::assignee(assignee)))
                        .into_iter()
                        .collect();
                let by_priority: HashSet<u64> =
                    ids(&filter_tasks(&tasks, "", &TaskFilter::priority(priority)))
                        .into_iter()
                        .collect();
                let expected: Vec<u64> = ids(&tasks)
                    .into_iter()
                    .filter(|id| {
                        by_term.contains(id) && by_assignee.contains(id) && by_priority.contains(id)
                    })
                    .collect();

                assert_eq!(actual, expected, "term={term} assignee={assignee}");
            }
        }
    }
}

#[test]
fn board_places_each_matched_task_in_exactly_one_column() {
    let tasks = sample_tasks();
    let columns = columns();
    let board = group_by_column(&tasks, &columns);
    let column_names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();

    let matched: Vec<&Task> = tasks
        .iter()
        .filter(|task| column_names.contains(&task.status.as_str()))
        .collect();
    for task in &matched {
        let hits = board
            .columns
            .iter()
            .filter(|group| group.tasks.iter().any(|t| t.id == task.id))
            .count();
        assert_eq!(hits, 1, "task {}", task.id);
    }

    for group in &board.columns {
        let expected: Vec<u64> = matched
            .iter()
            .filter(|task| task.status == group.column.name)
            .map(|task| task.id)
            .collect();
        assert_eq!(ids(&group.tasks), expected);
    }
    assert_eq!(board.task_count(), matched.len());
}

#[test]
fn board_silently_drops_tasks_with_unknown_status() {
    let tasks = sample_tasks();
    let board = group_by_column(&tasks, &columns());
    let orphans = orphaned_tasks(&tasks, &columns());

    assert!(!orphans.is_empty());
    assert!(orphans.iter().all(|task| task.status == "Archived"));
    assert_eq!(board.task_count() + orphans.len(), tasks.len());
}

#[test]
fn dated_task_lands_in_exactly_one_bucket_of_its_week_and_none_elsewhere() {
    let tasks = sample_tasks();
    for week_start in [WeekStart::default(), WeekStart(chrono::Weekday::Mon)] {
        for task in tasks.iter().filter(|task| task.due_date.is_some()) {
            let due = task.due_date.unwrap();
            let own_week = start_of_week(due, week_start);
            let timeline = group_by_day(std::slice::from_ref(task), own_week);
            let hits: Vec<NaiveDate> = timeline
                .days
                .iter()
                .filter(|bucket| !bucket.tasks.is_empty())
                .map(|bucket| bucket.date)
                .collect();
            assert_eq!(hits, vec![due]);

            for other in [
                own_week.checked_sub_days(Days::new(7)).unwrap(),
                own_week.checked_add_days(Days::new(7)).unwrap(),
            ] {
                let elsewhere = group_by_day(std::slice::from_ref(task), other);
                assert_eq!(elsewhere.task_count(), 0);
            }
        }
    }
}

#[test]
fn undated_tasks_never_appear_on_the_timeline() {
    let tasks = sample_tasks();
    let undated: Vec<Task> = tasks
        .into_iter()
        .filter(|task| task.due_date.is_none())
        .collect();
    assert!(!undated.is_empty());

    let timeline = group_by_day(&undated, start_of_week(base_date(), WeekStart::default()));
    assert_eq!(timeline.days.len(), 7);
    assert_eq!(timeline.task_count(), 0);
}
