//! Progress reporting: human-readable status lines around remote calls.
//!
//! Commands never print progress directly. The console implementation writes
//! "Creating route bar.example.com... OK" style lines to stdout; tests
//! substitute a recording implementation.

use crate::error::ApiError;
use owo_colors::OwoColorize;
use std::future::Future;
use std::io::Write;

/// Sink for progress lines around remote calls.
pub trait ProgressReporter: Send + Sync {
    /// Start a step; the console prints the label without a newline.
    fn step_started(&self, label: &str);

    /// Close the current step as successful.
    fn step_ok(&self);

    /// Close the current step as failed.
    fn step_failed(&self);

    /// A plain, user-facing message outside any step.
    fn report(&self, message: &str);
}

/// Highlight a resource name for progress output.
pub fn name(value: &str) -> String {
    value.cyan().to_string()
}

/// Run one remote call as a reported step.
pub async fn step<T, F>(
    reporter: &dyn ProgressReporter,
    label: &str,
    fut: F,
) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    reporter.step_started(label);
    match fut.await {
        Ok(value) => {
            reporter.step_ok();
            Ok(value)
        }
        Err(e) => {
            reporter.step_failed();
            Err(e)
        }
    }
}

/// Console reporter writing to stdout.
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn step_started(&self, label: &str) {
        print!("{}... ", label);
        let _ = std::io::stdout().flush();
    }

    fn step_ok(&self) {
        println!("{}", "OK".green());
    }

    fn step_failed(&self) {
        println!("{}", "FAILED".red());
    }

    fn report(&self, message: &str) {
        println!("{}", message);
    }
}
