use crate::store::{Store, Task, TaskStatus};
use crate::validate::validate_task_name;
use anyhow::Result;
use log::{error, info};

/// Adds a new task with status `todo` and the next free id.
///
/// An invalid name is logged and the store is left untouched.
pub fn add(store: &Store, name: &str) -> Result<()> {
    if let Err(reason) = validate_task_name(name) {
        error!("Task input validation: {}", reason);
        return Ok(());
    }
    let mut tasks = store.load()?;
    let new_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
    tasks.push(Task {
        id: new_id,
        name: name.to_string(),
        status: TaskStatus::Todo,
    });
    store.save(&tasks)?;
    info!("New task '{}' added with ID {}.", name, new_id);
    Ok(())
}

/// Renames the task with the given id.
///
/// The id lookup runs before name validation, so a bad name on a missing id
/// reports not-found.
pub fn update(store: &Store, id: u64, new_name: &str) -> Result<()> {
    let mut tasks = store.load()?;
    let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
        error!("Task with ID {} not found.", id);
        return Ok(());
    };
    if let Err(reason) = validate_task_name(new_name) {
        error!("Task input validation: {}", reason);
        return Ok(());
    }
    task.name = new_name.to_string();
    store.save(&tasks)?;
    info!("Task ID {} updated successfully to '{}'.", id, new_name);
    Ok(())
}

/// Removes the task with the given id; every other task keeps its id and
/// relative position.
pub fn delete(store: &Store, id: u64) -> Result<()> {
    let mut tasks = store.load()?;
    if !tasks.iter().any(|t| t.id == id) {
        error!("Task with ID {} not found.", id);
        return Ok(());
    }
    tasks.retain(|t| t.id != id);
    store.save(&tasks)?;
    info!("Task ID {} deleted.", id);
    Ok(())
}

/// Sets the status of the task with the given id. The status argument is
/// matched case-insensitively and stored in its lowercase form.
pub fn update_status(store: &Store, id: u64, status: &str) -> Result<()> {
    let mut tasks = store.load()?;
    let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
        error!("Task with ID {} not found.", id);
        return Ok(());
    };
    let new_status: TaskStatus = match status.parse() {
        Ok(s) => s,
        Err(reason) => {
            error!("Task input validation: {}", reason);
            return Ok(());
        }
    };
    task.status = new_status;
    store.save(&tasks)?;
    info!("Task ID {} marked as '{}'.", id, new_status);
    Ok(())
}

/// Returns the tasks matching the filter in stored order.
///
/// `"all"` returns everything; a status name matches exactly (case matters
/// here, unlike `update_status`). An unknown filter logs an error and yields
/// no listing at all.
pub fn list(store: &Store, filter: &str) -> Result<Vec<Task>> {
    let tasks = store.load()?;
    let filtered: Vec<Task> = match filter {
        "all" => tasks,
        "todo" | "in-progress" | "done" => tasks
            .into_iter()
            .filter(|t| t.status.as_str() == filter)
            .collect(),
        other => {
            error!(
                "'{}' is not a valid filter (valid options: all, {}).",
                other,
                TaskStatus::VALID_OPTIONS
            );
            return Ok(Vec::new());
        }
    };
    if filtered.is_empty() {
        info!("No tasks found.");
    }
    Ok(filtered)
}
