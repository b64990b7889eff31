use clap::{Arg, ArgAction, Command};

fn browse_commands() -> Vec<Command> {
    vec![
        Command::new("list").about("Show the default listing"),
        Command::new("search").about("Search for books").arg(
            Arg::new("query")
                .required(true)
                .num_args(1..)
                .trailing_var_arg(true),
        ),
        Command::new("work")
            .about("Show a single work by its id (e.g. OL45804W)")
            .arg(Arg::new("id").required(true)),
        Command::new("open")
            .about("Open a card by its number or a route path like /book/works/OL45804W")
            .arg(Arg::new("target").required(true)),
    ]
}

pub fn arg_parser_repl() -> Command {
    Command::new("folio")
        .about("Browse Open Library")
        .multicall(true)
        .subcommand_required(true)
        .subcommands(browse_commands())
        .subcommand(Command::new("pick").about("Choose a card from the grid"))
        .subcommand(Command::new("back").about("Go back to the list"))
        .subcommand(Command::new("exit").about("Leave the repl"))
}

pub fn arg_parser_cli() -> Command {
    Command::new("folio")
        .about("Browse Open Library")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Only log errors"),
        )
        .subcommands(browse_commands())
        .subcommand(Command::new("repl").about("Launch a read eval print loop"))
        .subcommand(Command::new("serve").about("Serve both views over http"))
        .subcommand(Command::new("config").about("Print the default configuration"))
}

pub fn generate_completions() -> Vec<String> {
    let cmd = arg_parser_repl();
    let mut subcmds = cmd
        .get_subcommands()
        .map(|c| c.get_name().to_string())
        .collect::<Vec<String>>();
    subcmds.sort();
    subcmds
}
