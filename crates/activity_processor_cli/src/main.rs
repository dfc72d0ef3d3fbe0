use std::process::ExitCode;

use activity_processor::ProcessorConfig;
use activity_processor_cli::{Inputs, USAGE, env_filter, log_filter, run};

fn main() -> anyhow::Result<ExitCode> {
    let log_env = log_filter(|k| std::env::var(k).ok());
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&log_env))
        .init();
    tracing::debug!(%log_env, "activity-processor: log filter");

    let Some(inputs) = Inputs::from_args(std::env::args().skip(1)) else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let config = ProcessorConfig::from_env()?;
    let output = run(&inputs, &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::SUCCESS)
}
