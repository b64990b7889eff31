use std::ops::ControlFlow;

use anyhow::Result;
use clap::ArgMatches;
use reedline::Signal;

mod command_parser;
mod logging;
mod prompt;
mod repl;
mod server;
mod session;

use folio::{config::Config, openlibrary};
use session::Session;

/// Run one browse command. Shared by the one-shot cli and the repl.
async fn run_browse(matches: &ArgMatches, session: &mut Session) -> Result<ControlFlow<()>> {
    match matches.subcommand() {
        Some(("list", _)) => session.home().await?,
        Some(("search", matches)) => {
            let query = matches
                .get_many::<String>("query")
                .map(|words| words.cloned().collect::<Vec<String>>().join(" "))
                .unwrap_or_default();
            session.search(&query).await?;
        }
        Some(("work", matches)) => {
            let id = matches
                .get_one::<String>("id")
                .ok_or_else(|| anyhow::anyhow!("A work id is required"))?;
            session.work(id).await?;
        }
        Some(("open", matches)) => {
            let target = matches
                .get_one::<String>("target")
                .ok_or_else(|| anyhow::anyhow!("Something to open is required"))?;
            session.open(target).await?;
        }
        Some(("pick", _)) => session.pick().await?,
        Some(("back", _)) => session.home().await?,
        Some(("exit", _)) => return Ok(ControlFlow::Break(())),
        Some((name, _)) => anyhow::bail!("Unknown command {name}"),
        None => unreachable!("subcommand required"),
    }
    Ok(ControlFlow::Continue(()))
}

async fn handle_command(command: String, session: &mut Session) -> Result<ControlFlow<()>> {
    let Some(command) = shlex::split(&command) else {
        anyhow::bail!("Invalid command");
    };
    if command.is_empty() {
        return Ok(ControlFlow::Continue(()));
    }
    let matches = command_parser::arg_parser_repl().try_get_matches_from(command)?;
    run_browse(&matches, session).await
}

async fn repl(mut session: Session) -> Result<()> {
    let mut repl = repl::Repl::new(
        command_parser::generate_completions(),
        session.config().history_file.clone(),
    )?;
    session.home().await?;
    loop {
        repl.set_location(session.location());
        match repl.read_line() {
            Ok(Signal::Success(buffer)) => match handle_command(buffer, &mut session).await {
                Ok(ControlFlow::Break(())) => break,
                Ok(ControlFlow::Continue(())) => (),
                Err(e) => println!("{}", session.config().output_error.format_str(e)),
            },
            Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => {
                println!("\nAborted!");
                break;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = command_parser::arg_parser_cli().get_matches();
    logging::init(args.get_flag("verbose"), args.get_flag("quiet"));

    if let Some(("config", _)) = args.subcommand() {
        print!("{}", Config::default_as_string()?);
        return Ok(());
    }

    let config = Config::read_config()?;
    let client = openlibrary::build_client(&config)?;

    match args.subcommand() {
        Some(("serve", _)) => server::start(config, client).await,
        Some(("repl", _)) => repl(Session::new(config, client)).await,
        _ => {
            let mut session = Session::new(config, client);
            run_browse(&args, &mut session).await.map(|_| ())
        }
    }
}
