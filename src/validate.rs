pub const MAX_TASK_NAME_LENGTH: usize = 100;

/// Checks a task name against the naming rules, first failure wins.
///
/// The emptiness check runs on a trimmed copy only; the caller stores the
/// name with its original whitespace.
pub fn validate_task_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Task name cannot be empty.".to_string());
    }
    if name.chars().count() > MAX_TASK_NAME_LENGTH {
        return Err(format!(
            "Task name cannot exceed {} characters.",
            MAX_TASK_NAME_LENGTH
        ));
    }
    if name.contains('/') || name.contains('\\') {
        return Err("Task name cannot contain slashes.".to_string());
    }
    Ok(())
}
