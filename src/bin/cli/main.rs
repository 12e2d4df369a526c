use anyhow::Result;
use dotenvy::dotenv;

mod command_parser;
mod server;

use biblio::config::Config;
use biblio::types::isbn::to_isbn10;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    tracing_subscriber::fmt::init();

    let matches = command_parser::arg_parser().get_matches();

    match matches.subcommand() {
        Some(("serve", _)) => {
            let config = Config::read_config()?;
            server::start(&config).await?;
        }
        Some(("isbn", matches)) => {
            let input: &String = matches.get_one("isbn13").expect("required argument");
            match to_isbn10(input) {
                Some(isbn10) => println!("{isbn10}"),
                None => anyhow::bail!("{input} is not a 978-prefixed ISBN-13"),
            }
        }
        Some(("config", _)) => print!("{}", Config::default_as_string()?),
        _ => unreachable!("subcommand required"),
    }

    Ok(())
}
