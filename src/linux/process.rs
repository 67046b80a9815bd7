use std::process;

use core::command::{
    Command,
    CommandError,
    Runner,
};

/// Runs commands as child processes of the current process, sharing its
/// standard streams.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> SystemRunner {
        SystemRunner
    }
}

impl Runner for SystemRunner {
    fn run(&mut self, command: &Command) -> Result<(), CommandError> {
        let status = process::Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|err| CommandError::Spawn {
                command: command.clone(),
                err,
            })?;

        debug!("'{}' exited with {}.", command, status);

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::Status {
                command: command.clone(),
                code: status.code(),
            })
        }
    }
}
