use anyhow::{Context, Result};
use clap::Parser;

use tagit::cli::orchestration::require_arguments;
use tagit::cli::TagWorkflow;
use tagit::git::GitRepository;
use tagit::{config, logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "tagit",
    version,
    about = "Create and push semantic version tags for staging slots and production"
)]
struct Args {
    #[arg(
        long,
        value_name = "ENV",
        help = "Environment: s0, s1, ..., sN for staging; p for production"
    )]
    env: Option<String>,

    #[arg(
        long = "type",
        value_name = "TYPE",
        help = "Version part to increment: x/major, y/minor, z/patch"
    )]
    bump: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Remote to fetch from and push to")]
    remote: Option<String>,

    #[arg(long, help = "Compute the next tag without creating or pushing it")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let env = args.env.unwrap_or_default();
    let bump = args.bump.unwrap_or_default();
    require_arguments(&env, &bump)?;

    let mut config = config::load_config(args.config.as_deref())
        .context("Error loading config")?;
    if let Some(remote) = args.remote {
        config.remote.name = remote;
    }

    let repo = GitRepository::open(".", config.remote.timeout())
        .context("Not in a git repository")?;

    let result = TagWorkflow::new(&repo, &config)
        .dry_run(args.dry_run)
        .run(&env, &bump)?;

    ui::display_workflow_result(&result, &config.remote.name);
    Ok(())
}
