use crate::listing::{run_list, run_show, ShowArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use empleos::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Empleos",
    about = "Serve and inspect the job listings catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the seeded job postings without starting the server
    Vacantes {
        #[command(subcommand)]
        command: VacantesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum VacantesCommand {
    /// Print every posting with its salary tier
    List,
    /// Print a single posting by id
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Vacantes {
            command: VacantesCommand::List,
        } => run_list(),
        Command::Vacantes {
            command: VacantesCommand::Show(args),
        } => run_show(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["empleos"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_requires_numeric_id() {
        let cli = Cli::try_parse_from(["empleos", "vacantes", "show", "--id", "3"]).expect("parses");
        match cli.command {
            Some(Command::Vacantes {
                command: VacantesCommand::Show(args),
            }) => assert_eq!(args.id, 3),
            other => panic!("expected show command, got {other:?}"),
        }

        assert!(Cli::try_parse_from(["empleos", "vacantes", "show", "--id", "tres"]).is_err());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["empleos", "serve", "--port", "9090"]).expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(9090));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
