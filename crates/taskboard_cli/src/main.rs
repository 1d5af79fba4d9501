//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskboard_core` linkage.
//! - Print the demo board and the current timeline week.
//!
//! Pass a JSON config document as the first argument to override latency or
//! the week start, e.g. `taskboard_cli '{"weekStart":"Mon"}'`.
//!
//! Logs go to `$TASKBOARD_LOG_DIR` (absolute path) or `<tmp>/taskboard-logs`.

use std::path::PathBuf;
use std::process::ExitCode;
use taskboard_core::fixtures::demo_stores;
use taskboard_core::{
    default_log_level, init_logging, BoardConfig, BoardService, BoardSnapshot, Project,
    ProjectRepository, RecordStore, Task, TaskFilter, TaskRepository, TimelineCursor,
};

#[tokio::main]
async fn main() -> ExitCode {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    let log_dir = log_dir();
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let config = match std::env::args().nth(1) {
        Some(raw) => match BoardConfig::from_json_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => BoardConfig::instant(),
    };

    let cursor = TimelineCursor::today();
    let (project_store, task_store) = demo_stores(&config, cursor.reference());
    let service = BoardService::new(
        ProjectRepository::new(project_store),
        TaskRepository::new(task_store),
        config,
    );

    let snapshot = match service.load_board(None).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("failed to load board: {err}");
            return ExitCode::FAILURE;
        }
    };

    print_board(&service, &snapshot);
    print_timeline(&service, &snapshot, &cursor);
    ExitCode::SUCCESS
}

fn log_dir() -> PathBuf {
    std::env::var_os("TASKBOARD_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("taskboard-logs"))
}

fn print_board<P, T>(service: &BoardService<P, T>, snapshot: &BoardSnapshot)
where
    P: RecordStore<Project>,
    T: RecordStore<Task>,
{
    println!();
    println!("== {} ==", snapshot.project.name);
    let board = service.board_view(snapshot, "", &TaskFilter::default());
    for group in &board.columns {
        println!("[{}] ({})", group.column.name, group.tasks.len());
        for task in &group.tasks {
            println!(
                "  #{} {} ({}, {})",
                task.id, task.title, task.assignee, task.priority
            );
        }
    }
}

fn print_timeline<P, T>(
    service: &BoardService<P, T>,
    snapshot: &BoardSnapshot,
    cursor: &TimelineCursor,
) where
    P: RecordStore<Project>,
    T: RecordStore<Task>,
{
    println!();
    let timeline = service.timeline_view(snapshot, "", &TaskFilter::default(), cursor);
    println!("== week of {} ==", timeline.week_start);
    for bucket in &timeline.days {
        let titles: Vec<&str> = bucket.tasks.iter().map(|task| task.title.as_str()).collect();
        println!("{} {}: {}", bucket.date.format("%a"), bucket.date, titles.join(", "));
    }
}
