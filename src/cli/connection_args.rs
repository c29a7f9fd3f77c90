//! Command-line arguments generated from the option registry
//!
//! Every registered option becomes a `--<name>` argument, so the registry is
//! the single place where the option vocabulary is declared.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Args, Command, FromArgMatches};

use crate::error::Result;
use crate::options::{OptionKind, OptionSet, OptionSpec, REGISTRY};

const CONNECTION_HEADING: &str = "Connection options";
const CLIENT_HEADING: &str = "Client options";

/// Registered options given on the command line, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionArgs {
    supplied: Vec<(&'static str, String)>,
}

impl ConnectionArgs {
    /// Options given on the command line with their values
    pub fn supplied(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.supplied.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Build the option set holding the supplied values
    ///
    /// # Returns
    /// * `Result<OptionSet>` - Every registered option, supplied ones marked
    pub fn to_option_set(&self) -> Result<OptionSet> {
        let mut options = OptionSet::new();
        for (name, value) in self.supplied() {
            options.supply(name, value)?;
        }
        Ok(options)
    }

    fn arg(spec: &'static OptionSpec) -> Arg {
        let heading = match spec.kind {
            OptionKind::Connection => CONNECTION_HEADING,
            OptionKind::Client => CLIENT_HEADING,
        };

        let help = if spec.default.is_empty() {
            spec.help.to_string()
        } else {
            format!("{} [default: {}]", spec.help, spec.default)
        };

        let arg = Arg::new(spec.name)
            .long(spec.name)
            .value_name(spec.value_name)
            .help(help)
            .help_heading(heading)
            .action(ArgAction::Append);

        match spec.bare_value {
            Some(bare) => arg.num_args(0..=1).default_missing_value(bare),
            None => arg.num_args(1),
        }
    }
}

impl FromArgMatches for ConnectionArgs {
    fn from_arg_matches(matches: &ArgMatches) -> std::result::Result<Self, clap::Error> {
        let mut args = Self::default();
        args.update_from_arg_matches(matches)?;
        Ok(args)
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> std::result::Result<(), clap::Error> {
        for spec in REGISTRY {
            let values = matches
                .try_get_many::<String>(spec.name)
                .map_err(|e| clap::Error::raw(ErrorKind::InvalidValue, e.to_string()))?;

            // Repeated options: the last occurrence wins
            if let Some(value) = values.and_then(|v| v.last()) {
                self.supplied.retain(|(name, _)| *name != spec.name);
                self.supplied.push((spec.name, value.clone()));
            }
        }
        Ok(())
    }
}

impl Args for ConnectionArgs {
    fn augment_args(cmd: Command) -> Command {
        REGISTRY.iter().fold(cmd, |cmd, spec| cmd.arg(Self::arg(spec)))
    }

    fn augment_args_for_update(cmd: Command) -> Command {
        Self::augment_args(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        connection: ConnectionArgs,
    }

    fn parse(args: &[&str]) -> ConnectionArgs {
        let mut argv = vec!["harness"];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv).unwrap().connection
    }

    #[test]
    fn test_no_options_supplied() {
        let args = parse(&[]);
        assert_eq!(args.supplied().count(), 0);
        assert_eq!(args.to_option_set().unwrap().supplied().count(), 0);
    }

    #[test]
    fn test_value_options() {
        let args = parse(&["--conn-heartbeat", "30", "--conn-username", "admin"]);
        let options = args.to_option_set().unwrap();
        assert_eq!(options.value("conn-heartbeat"), Some("30"));
        assert_eq!(options.value("conn-username"), Some("admin"));
        assert!(options.is_supplied("conn-username"));
        assert!(!options.is_supplied("conn-password"));
    }

    #[test]
    fn test_bare_switch_means_true() {
        let args = parse(&["--conn-reconnect"]);
        let options = args.to_option_set().unwrap();
        assert!(options.flag("conn-reconnect"));

        let args = parse(&["--conn-reconnect", "false"]);
        assert!(!args.to_option_set().unwrap().flag("conn-reconnect"));
    }

    #[test]
    fn test_supplied_in_registration_order() {
        let args = parse(&["--conn-heartbeat", "5", "--conn-username", "u"]);
        let names: Vec<_> = args.supplied().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["conn-username", "conn-heartbeat"]);
    }

    #[test]
    fn test_repeated_option_last_wins() {
        let args = parse(&["--conn-prefetch", "1", "--conn-prefetch", "7"]);
        assert_eq!(args.supplied().collect::<Vec<_>>(), vec![("conn-prefetch", "7")]);
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert!(Harness::try_parse_from(["harness", "--conn-bogus", "1"]).is_err());
    }

    #[test]
    fn test_log_bytes_is_available() {
        let args = parse(&["--log-bytes"]);
        assert!(args.to_option_set().unwrap().flag("log-bytes"));
    }
}
