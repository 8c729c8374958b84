use crate::core::payload::{EnumKind, PayloadKind};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pinpoint-model")]
#[command(about = "Inspect and validate campaign model enumerations and payloads")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[command(about = "List the wire values of an enumeration (all enumerations if omitted)")]
    Values {
        #[arg(value_enum)]
        kind: Option<EnumKind>,
    },
    #[command(about = "Strictly parse a wire value")]
    Parse {
        #[arg(value_enum)]
        kind: EnumKind,
        value: String,
    },
    #[command(about = "Check a JSON payload file against a model type")]
    Check {
        #[arg(value_enum)]
        kind: PayloadKind,
        file: PathBuf,
    },
    #[command(about = "Run every check listed in a TOML manifest")]
    Run { manifest: PathBuf },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Check { file, .. } => {
                validate_non_empty_string("file", &file.to_string_lossy())
            }
            Command::Run { manifest } => {
                validate_non_empty_string("manifest", &manifest.to_string_lossy())
            }
            Command::Values { .. } | Command::Parse { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommand() {
        let config =
            CliConfig::try_parse_from(["pinpoint-model", "parse", "frequency", "EVENT"]).unwrap();
        match config.command {
            Command::Parse { kind, value } => {
                assert_eq!(kind, EnumKind::Frequency);
                assert_eq!(value, "EVENT");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_subcommand_with_globals() {
        let config = CliConfig::try_parse_from([
            "pinpoint-model",
            "check",
            "segment-behaviors",
            "behaviors.json",
            "--verbose",
        ])
        .unwrap();
        assert!(config.verbose);
        assert!(!config.log_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_enum_kind_rejected() {
        assert!(CliConfig::try_parse_from(["pinpoint-model", "values", "channel"]).is_err());
    }

    #[test]
    fn test_empty_file_rejected() {
        let config = CliConfig {
            verbose: false,
            log_json: false,
            command: Command::Run {
                manifest: PathBuf::new(),
            },
        };
        assert!(config.validate().is_err());
    }
}
