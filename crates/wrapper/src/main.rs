use std::process::Command;

use anyhow::{Context as _, Result};
use slog::{debug, info};

use pathwrap_args::Invocation;
use pathwrap_paths::PATH_VAR;

struct DisplayCommand<'a>(&'a Invocation);
impl std::fmt::Display for DisplayCommand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0.resource)?;
        for arg in &self.0.trailing {
            write!(f, " {:?}", arg)?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let _logger_guard = slog_envlogger::init().context("Failed to install the global logger")?;
    let log = slog_scope::logger();

    let invocation = pathwrap_args::parse(std::env::args_os().skip(1))?;

    let dir = pathwrap_paths::containing_dir(&invocation.resource)?;
    debug!(log, "Prepending {dir:?} to {PATH_VAR}");

    // Read once; the override is staged on the child only, the launcher's
    // own environment is never touched.
    let path = pathwrap_paths::prepend_to_path(dir, std::env::var_os(PATH_VAR).as_deref())?;

    info!(log, "Launching {}", DisplayCommand(&invocation));

    let mut command = Command::new(&invocation.resource);
    command.args(&invocation.trailing);
    command.env(PATH_VAR, path);

    let mut child = match command.spawn() {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(anyhow::Error::new(e).context(format!(
                "Could not locate command {:?}",
                invocation.resource
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let status = child.wait()?;

    info!(log, "Child exited with {status}");

    std::process::exit(
        status
            .code()
            .with_context(|| format!("Child process exited without a status code: {status}"))?,
    )
}
