use anyhow::Context;
use clap::Parser;
use pinpoint_model::config::Command;
use pinpoint_model::core::{check_payload, EnumKind, ManifestRunner};
use pinpoint_model::utils::error::exit_code_of;
use pinpoint_model::utils::{logger, validation::Validate};
use pinpoint_model::{CheckManifest, CliConfig};

fn run(command: &Command) -> anyhow::Result<bool> {
    match command {
        Command::Values { kind } => {
            let kinds = match kind {
                Some(kind) => vec![*kind],
                None => EnumKind::ALL.to_vec(),
            };
            for kind in kinds {
                println!("{}: {}", kind, kind.values().join(", "));
            }
            Ok(true)
        }
        Command::Parse { kind, value } => {
            let wire = kind.parse(value)?;
            tracing::debug!("Parsed {} value {}", kind, wire);
            println!("{}", wire);
            Ok(true)
        }
        Command::Check { kind, file } => {
            tracing::info!("Checking {} payload {}", kind, file.display());
            let json = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read payload {}", file.display()))?;
            let checked = check_payload(*kind, &json)?;
            println!("{}", checked.to_pretty_json()?);
            Ok(true)
        }
        Command::Run { manifest } => {
            let loaded = CheckManifest::from_file(manifest)
                .with_context(|| format!("Failed to load manifest {}", manifest.display()))?;

            let summary = ManifestRunner::for_manifest_file(manifest).run(&loaded)?;
            println!(
                "{}: {} passed, {} failed",
                loaded.manifest.name,
                summary.passed(),
                summary.failed()
            );
            Ok(summary.is_success())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.category().exit_code());
    }

    match run(&config.command) {
        Ok(true) => Ok(()),
        Ok(false) => {
            // 清單中有檢查未符合預期
            std::process::exit(1);
        }
        Err(e) => match exit_code_of(&e) {
            Some(code) => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(code);
            }
            None => Err(e),
        },
    }
}
