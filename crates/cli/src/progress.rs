use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Detect if we're running in a CI environment
fn is_ci() -> bool {
    CI_VARS.iter().any(|var| std::env::var_os(var).is_some())
}

/// Spinner on stderr while the schema is fetched.
///
/// Hidden when `visible` is false or when running in CI.
pub fn spinner(message: &str, visible: bool) -> ProgressBar {
    if !visible || is_ci() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Awaits `task` and clears `spinner`, whether the task succeeded or failed.
pub async fn clear_after<T>(spinner: &ProgressBar, task: impl Future<Output = T>) -> T {
    let result = task.await;
    spinner.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_when_not_visible() {
        let pb = spinner("Fetching schema...", false);
        assert!(pb.is_hidden());
        pb.finish_and_clear();
    }

    #[tokio::test]
    async fn test_spinner_cleared_when_task_fails() {
        let pb = ProgressBar::new_spinner();
        let result: Result<(), &str> = clear_after(&pb, async { Err("connection refused") }).await;
        assert_eq!(result, Err("connection refused"));
        assert!(pb.is_finished());
    }

    #[tokio::test]
    async fn test_spinner_cleared_when_task_succeeds() {
        let pb = ProgressBar::new_spinner();
        let value = clear_after(&pb, async { 42 }).await;
        assert_eq!(value, 42);
        assert!(pb.is_finished());
    }

    #[test]
    fn test_spinner_with_empty_message() {
        let pb = spinner("", true);
        pb.finish_and_clear();
    }
}
