pub mod cli;

#[cfg(feature = "cli")]
pub use args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use crate::utils::error::{CheckError, Result};
    use crate::utils::validation::{validate_argument_count, Validate};
    use clap::error::ErrorKind;
    use clap::Parser;
    use std::ffi::OsString;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "fp-ops-check", version)]
    #[command(about = "Check that a file is valid floating-point operation trace output")]
    pub struct CliConfig {
        /// Trace file to check; exactly one is expected
        #[arg(value_name = "FILE", allow_hyphen_values = true)]
        pub files: Vec<PathBuf>,

        /// argv[0], used in the argument-count message
        #[arg(skip)]
        pub program: String,

        /// Number of command-line arguments after argv[0]
        #[arg(skip)]
        pub given: usize,
    }

    impl CliConfig {
        pub fn from_env() -> Result<Self> {
            Self::from_args(std::env::args_os())
        }

        /// Parses a full argv. `--help` and `--version` print and exit like
        /// clap's own `parse`; any other rejection is an argument-count error.
        pub fn from_args<I, T>(args: I) -> Result<Self>
        where
            I: IntoIterator<Item = T>,
            T: Into<OsString>,
        {
            let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
            let program = args
                .first()
                .map(|arg| arg.to_string_lossy().into_owned())
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
            let given = args.len().saturating_sub(1);

            let mut config = match Self::try_parse_from(&args) {
                Ok(config) => config,
                Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                    e.exit()
                }
                Err(e) => {
                    tracing::debug!("Command line rejected: {:?}", e.kind());
                    return Err(CheckError::ArgumentCount { program, given });
                }
            };
            config.program = program;
            config.given = given;
            Ok(config)
        }

        pub fn trace_path(&self) -> Result<&Path> {
            self.validate()?;
            Ok(self.files[0].as_path())
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_argument_count(&self.program, self.given, 1)?;
            // a lone `--` counts as an argument but names no file
            validate_argument_count(&self.program, self.files.len(), 1)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_single_file_is_valid() {
            let config = CliConfig::from_args(["fp-ops-check", "trace.txt"]).unwrap();
            assert!(config.validate().is_ok());
            assert_eq!(config.program, "fp-ops-check");
            assert_eq!(config.trace_path().unwrap(), Path::new("trace.txt"));
        }

        #[test]
        fn test_hyphenated_file_names_are_paths() {
            let config = CliConfig::from_args(["fp-ops-check", "-trace.txt"]).unwrap();
            assert_eq!(config.trace_path().unwrap(), Path::new("-trace.txt"));

            let config = CliConfig::from_args(["fp-ops-check", "-v"]).unwrap();
            assert_eq!(config.given, 1);
            assert_eq!(config.trace_path().unwrap(), Path::new("-v"));
        }

        #[test]
        fn test_wrong_argument_counts() {
            let config = CliConfig::from_args(["./check"]).unwrap();
            let err = config.trace_path().unwrap_err();
            assert_eq!(err.to_string(), "./check expected 1 argument, 0 given");

            let config = CliConfig::from_args(["./check", "a.txt", "b.txt"]).unwrap();
            assert!(matches!(
                config.trace_path(),
                Err(CheckError::ArgumentCount { given: 2, .. })
            ));
        }

        #[test]
        fn test_unknown_flags_become_argument_count_errors() {
            let err = match CliConfig::from_args(["./check", "a", "b", "--bogus"]) {
                Ok(config) => config.trace_path().map(|_| ()).unwrap_err(),
                Err(e) => e,
            };
            assert_eq!(err.to_string(), "./check expected 1 argument, 3 given");
            assert_eq!(err.exit_code(), 1);
        }

        #[test]
        fn test_lone_separator_names_no_file() {
            let config = CliConfig::from_args(["./check", "--"]).unwrap();
            assert!(matches!(
                config.trace_path(),
                Err(CheckError::ArgumentCount { given: 0, .. })
            ));
        }
    }
}
