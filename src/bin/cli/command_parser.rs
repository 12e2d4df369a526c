use clap::{Arg, Command};

pub fn arg_parser() -> Command {
    Command::new("biblio")
        .about("Genre bestseller proxy and rendering pipeline")
        .subcommand_required(true)
        .subcommand(Command::new("serve").about("Start the biblio-api proxy server"))
        .subcommand(
            Command::new("isbn")
                .about("Convert a 978-prefixed ISBN-13 to ISBN-10")
                .arg(Arg::new("isbn13").required(true)),
        )
        .subcommand(Command::new("config").about("Print the default configuration as TOML"))
}
