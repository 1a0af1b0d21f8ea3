//! Demo dataset seeded at startup.

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{NewProject, NewTask, NewWorker, ProjectId, TaskStatus};
use crate::services::ServiceResult;
use crate::web::AppState;

/// Populates the store with three projects, four tasks, and one worker.
///
/// Projects `P1` to `P3` are created in order so their identifiers are
/// predictable on a fresh store; `P1` owns tasks 1 to 3, `P2` owns task 4,
/// and `P3` stays empty. Task 2 is moved to in-progress and task 3 to done
/// after creation. The worker is left unassigned.
///
/// # Errors
///
/// Returns [`ServiceError`](crate::services::ServiceError) when any seed
/// write is rejected, for example when the dataset already exists.
pub async fn seed_demo_data(state: &AppState) -> ServiceResult<()> {
    let project_one = state.projects().create(demo_project(1)).await?;
    let project_two = state.projects().create(demo_project(2)).await?;
    state.projects().create(demo_project(3)).await?;

    state
        .tasks()
        .create(demo_task(1, project_one.id()))
        .await?;
    let task_two = state
        .tasks()
        .create(demo_task(2, project_one.id()))
        .await?;
    let task_three = state
        .tasks()
        .create(demo_task(3, project_one.id()))
        .await?;
    state
        .tasks()
        .create(demo_task(4, project_two.id()))
        .await?;

    state
        .tasks()
        .update_status(task_two.id(), TaskStatus::InProgress)
        .await?;
    state
        .tasks()
        .update_status(task_three.id(), TaskStatus::Done)
        .await?;

    state
        .workers()
        .create(NewWorker {
            email: "john@test.com".to_owned(),
            first_name: Some("John".to_owned()),
            last_name: Some("Doe".to_owned()),
        })
        .await?;

    info!("seeded demo dataset: 3 projects, 4 tasks, 1 worker");
    Ok(())
}

fn demo_project(number: u32) -> NewProject {
    NewProject {
        code: format!("P{number}"),
        name: format!("Project {number}"),
        description: Some(format!("About Project {number}")),
    }
}

fn demo_task(number: u32, project_id: ProjectId) -> NewTask {
    NewTask {
        uuid: None,
        name: format!("Task {number}"),
        description: Some(format!("Task {number} Description")),
        due_date: NaiveDate::from_ymd_opt(2030, number, 15),
        project_id,
        estimated_hours: None,
    }
}
