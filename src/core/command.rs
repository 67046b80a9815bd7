use std;
use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

/// An external program invocation with a fixed argument list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub program: String,
    pub args: Vec<String>,
}

impl Command {
    /// Creates a command from a program name and its arguments.
    pub fn new<S, I, A>(program: S, args: I) -> Command
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Command {
            program: program.into(),
            args: args.into_iter().map(|arg| arg.into()).collect(),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum CommandError {
    /// Indicates the program could not be started.
    Spawn {
        command: Command,
        err: std::io::Error,
    },
    /// Indicates the program exited unsuccessfully. The code is missing when
    /// the program was killed by a signal.
    Status { command: Command, code: Option<i32> },
}

impl CommandError {
    /// Returns the command which failed.
    pub fn command(&self) -> &Command {
        match *self {
            CommandError::Spawn { ref command, .. } => command,
            CommandError::Status { ref command, .. } => command,
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match *self {
            CommandError::Spawn {
                ref command,
                ref err,
            } => write!(f, "failed to run '{}': {}", command, err),
            CommandError::Status {
                ref command,
                code: Some(code),
            } => write!(f, "'{}' exited with status {}", command, code),
            CommandError::Status {
                ref command,
                code: None,
            } => write!(f, "'{}' terminated by signal", command),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            CommandError::Spawn { ref err, .. } => Some(err),
            _ => None,
        }
    }
}

/// Runs external commands to completion.
pub trait Runner {
    /// Runs a command and waits for it to exit.
    ///
    /// # Errors
    ///
    /// An error occurs if the command can not be started or exits with a
    /// non-zero status.
    fn run(&mut self, command: &Command) -> Result<(), CommandError>;
}
