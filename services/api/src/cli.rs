use crate::demo::{
    run_allocation_inspect, run_deal_quote, run_demo, run_plan_summary, AllocationInspectArgs,
    DealQuoteArgs, DemoArgs, PlanSummaryArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hirewise::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hirewise",
    about = "Quote recruitment deals and allocate vacancies from the command line or over HTTP",
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
    /// Deal value calculations for lead forms
    Deal {
        #[command(subcommand)]
        command: DealCommand,
    },
    /// Vacancy allocation helpers
    Allocation {
        #[command(subcommand)]
        command: AllocationCommand,
    },
    /// Staffing plan reports
    Plan {
        #[command(subcommand)]
        command: PlanCommand,
    },
    /// Walk through a sample lead quote and vacancy allocation
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DealCommand {
    /// Compute and render a deal value
    Quote(DealQuoteArgs),
}

#[derive(Subcommand, Debug)]
enum AllocationCommand {
    /// Parse a stored assign_to value and report its status
    Inspect(AllocationInspectArgs),
}

#[derive(Subcommand, Debug)]
enum PlanCommand {
    /// Summarise a staffing plan exported as CSV
    Summary(PlanSummaryArgs),
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
        Command::Deal {
            command: DealCommand::Quote(args),
        } => {
            run_deal_quote(args);
            Ok(())
        }
        Command::Allocation {
            command: AllocationCommand::Inspect(args),
        } => {
            run_allocation_inspect(args);
            Ok(())
        }
        Command::Plan {
            command: PlanCommand::Summary(args),
        } => run_plan_summary(args),
        Command::Demo(args) => {
            run_demo(args);
            Ok(())
        }
    }
}
