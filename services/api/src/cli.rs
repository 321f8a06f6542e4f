use crate::demo::{run_assessment, run_demo, run_report, AssessArgs, DemoArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use esg_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ESG Scoring Engine",
    about = "Score ESG disclosure checklists and browse dual-standard company reports",
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
    /// Print one page of the company report table
    Report(ReportArgs),
    /// Score a disclosure checklist and print per-item advice
    Assess(AssessArgs),
    /// Walk through an assessment and the first report page with sample data
    Demo(DemoArgs),
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
        Command::Report(args) => run_report(args),
        Command::Assess(args) => run_assessment(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::WindowBound;

    #[test]
    fn parses_report_flags() {
        let cli = Cli::try_parse_from([
            "esg",
            "report",
            "--start",
            "2025-01",
            "--end",
            "all",
            "--sort",
            "asc",
            "--standard",
            "esrs",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(
                    args.start,
                    Some(WindowBound::Month("2025-01".parse().expect("valid period")))
                );
                assert_eq!(args.end, Some(WindowBound::Open));
                assert!(args.standard.is_some());
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_disclosure_input() {
        assert!(Cli::try_parse_from(["esg", "assess", "E-01:70"]).is_err());
    }

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["esg"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
