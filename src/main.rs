use fp_ops_check::utils::logger;
use fp_ops_check::{CheckEngine, CheckError, CliConfig, LocalFile};
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init_cli_logger();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Check failed (category: {:?})", e.category());
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), CheckError> {
    let config = CliConfig::from_env()?;
    tracing::debug!("CLI config: {:?}", config);

    let path = config.trace_path()?;
    let engine = CheckEngine::new(LocalFile::new())?;
    engine.run(path)?;
    Ok(())
}
