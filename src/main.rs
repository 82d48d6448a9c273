use clap::Parser;
use owo_colors::OwoColorize;

use surebet::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use surebet::adapter::inbound::cli::output::{self, OutputConfig};
use surebet::adapter::inbound::cli::{config, evaluate, generate, run};
use surebet::error::Result;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(e) = dispatch(&cli.command) {
        output::error(&e.to_string());
        if !output::is_json() && output::verbosity() > 0 {
            eprintln!("  {}", format!("{e:?}").dimmed());
        }
        std::process::exit(1);
    }
}

fn dispatch(command: &Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run::execute(args),
        Commands::Evaluate(args) => evaluate::execute(args),
        Commands::Generate(args) => generate::execute(args),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(arg),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(arg),
    }
}
