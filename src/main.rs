use clap::Parser;

mod action;

#[derive(Parser)]
#[command(about, version)]
struct Args {
    /// Log filter directive, using the tracing-subscriber env filter syntax.
    #[clap(
        long,
        env = "LOG",
        default_value = "template_registry=info,template_registry_store=info,tower_http=info"
    )]
    log: String,
    /// Enables colors in the logs.
    #[clap(long, env = "LOG_COLOR")]
    log_color: bool,
    #[command(subcommand)]
    action: action::Action,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let args = Args::parse();
    if let Err(err) = template_registry::init_logs(&args.log, args.log_color) {
        eprintln!("unable to initialize logs: {err}");
    }

    match args.action.execute().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            std::process::ExitCode::FAILURE
        }
    }
}
