mod conf;
mod display;
mod error;
mod market;
mod prelude;

use crate::prelude::*;

#[derive(Parser)]
#[command(version, about = "CoinMarketCap CLI")]
struct Cli {
    /// Print results as JSON instead of a human readable summary.
    #[arg(long = "json", global = true, help = "Print results as JSON")]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Market(market::MarketCommand),
    #[command(about = "Show or update the CLI configuration")]
    Conf(conf::ConfCommand),
}

#[tokio::main]
async fn main() {
    // Log verbosity is controlled through `RUST_LOG`.
    env_logger::init();

    // Customize parsing error handling.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // These 2 are "not real errors" that are used to stop the execution
            // to display the CLI help or version.
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    println!("{}", e);

                    std::process::exit(0);
                }
                _ => (),
            }

            eprintln!(
                "{ballot} {error}",
                ballot = "✘".red().bold(),
                error = CmcCliError::SyntaxError(e)
            );

            std::process::exit(1);
        }
    };

    JSON_MODE.store(cli.json, Ordering::Relaxed);

    // Send each sub-command to the respective handler.
    let result = match cli.command {
        Command::Market(market) => market::handle(market).await,
        Command::Conf(conf) => conf::handle(conf).await,
    };

    // Handle any errors that occurred during command execution.
    if let Err(e) = result {
        eprintln!("{ballot} {e}", ballot = "✘".red().bold());

        std::process::exit(1);
    }
}
