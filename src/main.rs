use clap::Parser;
use rockin_forms::cli::commands::{cmd_name, cmd_populate, cmd_resolve};
use rockin_forms::cli::config::{Cli, Commands, load_config};
use rockin_forms::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace path: CLI > config > disabled
    let tracer = match cli.trace.as_deref().or(config.populate.trace.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Name { components } => {
            cmd_name(&components)?;
        }
        Commands::Resolve {
            snapshot,
            form,
            specs,
        } => {
            let specs_path = specs.as_deref().unwrap_or(&config.forms.specs);
            let all_present = cmd_resolve(&snapshot, &form, specs_path, cli.verbose, &tracer)?;
            if !all_present {
                std::process::exit(1);
            }
        }
        Commands::Populate {
            snapshot,
            record,
            form,
            specs,
            skip_missing,
            output,
        } => {
            let specs_path = specs.as_deref().unwrap_or(&config.forms.specs);
            cmd_populate(
                &snapshot,
                &record,
                &form,
                specs_path,
                skip_missing || config.populate.skip_missing,
                output.as_deref(),
                cli.verbose,
                &tracer,
            )?;
        }
    }

    Ok(())
}
