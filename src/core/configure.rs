use core::command::{
    Command,
    Runner,
};
use core::config::Config;
use Result;

/// Returns the commands which switch a wireless interface to IBSS (ad-hoc)
/// mode and join the configured network, in the order they must run.
pub fn setup_commands(ifr_name: &str, config: &Config) -> Vec<Command> {
    vec![
        // Keep network-manager away from every WIFI interface.
        Command::new("nmcli", vec!["r", "wifi", "off"]),
        Command::new("rfkill", vec!["unblock", "wlan"]),
        Command::new("ip", vec!["link", "set", ifr_name, "down"]),
        Command::new("iw", vec![ifr_name, "set", "type", "ibss"]),
        Command::new("ip", vec!["link", "set", ifr_name, "up"]),
        Command::new(
            "iw",
            vec![
                ifr_name.to_string(),
                "ibss".to_string(),
                "join".to_string(),
                config.ssid.clone(),
                config.frequency.to_string(),
            ],
        ),
    ]
}

/// Configures a wireless interface for ad-hoc networking.
///
/// Each command from [setup_commands](fn.setup_commands.html) runs to
/// completion before the next one starts. Nothing is rolled back when a
/// command fails, and calling this again re-issues every command.
///
/// # Errors
///
/// The first command which fails aborts the sequence and its error is
/// returned.
pub fn configure<R: Runner>(runner: &mut R, ifr_name: &str, config: &Config) -> Result<()> {
    let commands = setup_commands(ifr_name, config);
    let steps = commands.len();

    for (i, command) in commands.iter().enumerate() {
        info!("[{}/{}] {}", i + 1, steps, command);
        if let Err(err) = runner.run(command) {
            warn!("Configuring {} failed with {}.", ifr_name, err);
            return Err(err.into());
        }
    }

    info!(
        "Joined IBSS network '{}' at {} MHz on {}.",
        config.ssid, config.frequency, ifr_name
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use core::command::CommandError;
    use Error;

    use super::*;

    /// Records commands and fails the nth one (1-based), if any.
    struct FakeRunner {
        ran: Vec<Command>,
        fail_at: Option<usize>,
    }

    impl FakeRunner {
        fn new(fail_at: Option<usize>) -> FakeRunner {
            FakeRunner {
                ran: Vec::new(),
                fail_at,
            }
        }
    }

    impl Runner for FakeRunner {
        fn run(&mut self, command: &Command) -> ::std::result::Result<(), CommandError> {
            self.ran.push(command.clone());
            if Some(self.ran.len()) == self.fail_at {
                Err(CommandError::Status {
                    command: command.clone(),
                    code: Some(2),
                })
            } else {
                Ok(())
            }
        }
    }

    fn lines(commands: &[Command]) -> Vec<String> {
        commands.iter().map(|command| command.to_string()).collect()
    }

    #[test]
    fn test_setup_commands() {
        let commands = setup_commands("wlan0", &Config::default());
        assert_eq!(
            lines(&commands),
            vec![
                "nmcli r wifi off",
                "rfkill unblock wlan",
                "ip link set wlan0 down",
                "iw wlan0 set type ibss",
                "ip link set wlan0 up",
                "iw wlan0 ibss join KnowledgeNet 2417",
            ]
        );
    }

    #[test]
    fn test_configure_runs_all_steps() {
        let mut runner = FakeRunner::new(None);
        let config = Config::default().with_ssid("Mesh").with_frequency(2462);
        configure(&mut runner, "wlp2s0", &config).unwrap();
        assert_eq!(runner.ran, setup_commands("wlp2s0", &config));
        assert_eq!(
            runner.ran[5].args,
            vec!["wlp2s0", "ibss", "join", "Mesh", "2462"]
        );
    }

    #[test]
    fn test_configure_stops_at_failure() {
        let mut runner = FakeRunner::new(Some(3));
        let err = configure(&mut runner, "wlan0", &Config::default()).unwrap_err();

        assert_eq!(runner.ran.len(), 3);
        assert_matches!(err, Error::Command(CommandError::Status { ref command, code: Some(2) }) => {
            assert_eq!(command.to_string(), "ip link set wlan0 down");
        });
    }

    #[test]
    fn test_configure_twice_reissues_steps() {
        let mut runner = FakeRunner::new(None);
        configure(&mut runner, "wlan0", &Config::default()).unwrap();
        configure(&mut runner, "wlan0", &Config::default()).unwrap();
        assert_eq!(runner.ran.len(), 12);
        assert_eq!(runner.ran[..6], runner.ran[6..]);
    }
}
