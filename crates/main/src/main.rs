use tracing::Level;
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt as _};

mod subcommand;

#[derive(clap::Parser)]
#[command(name = "helpdesk", version)]
struct Args {
    /// Log level of the helpdesk crates
    #[arg(long, env = "HELPDESK_LOG_LEVEL", default_value = "info", global = true)]
    log_level: Level,
    /// Length of the random salt prepended to password digests
    #[arg(
        long,
        env = "HELPDESK_PASSWORD_SALT_LEN",
        default_value_t = 16,
        value_parser = clap::value_parser!(u8).range(1..=32),
        global = true
    )]
    password_salt_len: u8,
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
enum Subcommand {
    /// Load the sample technicians, clients and tickets and print them
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = <Args as clap::Parser>::parse();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            Targets::new()
                .with_target("command_use_case", args.log_level)
                .with_target("query_use_case", args.log_level)
                .with_target("helpdesk", args.log_level),
        )
        .init();
    match args.subcommand {
        Subcommand::Seed => subcommand::seed::run(usize::from(args.password_salt_len)).await,
    }
}
