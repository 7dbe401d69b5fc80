use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "parseaddr-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// chaque ligne de stdin est une valeur JSON; une non-chaîne est fatale (feature `with-serde`)
    #[arg(long, requires = "stdin")]
    pub json_input: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format; refusé avec human)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// classe une adresse
    Validate { email: String },
    /// affiche la table des règles numérotées
    Rules,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_consistent() {
        Cli::clap_command().debug_assert();
    }

    #[test]
    fn validate_takes_one_email() {
        let cli = Cli::try_parse_from(["parseaddr-cli", "validate", "jsmith@example.com"])
            .expect("parse");
        assert!(matches!(
            cli.cmd,
            Some(Commands::Validate { ref email }) if email == "jsmith@example.com"
        ));
        assert_eq!(cli.format, "human");
    }

    #[test]
    fn json_input_requires_stdin() {
        assert!(Cli::try_parse_from(["parseaddr-cli", "--json-input"]).is_err());
        let cli = Cli::try_parse_from(["parseaddr-cli", "--stdin", "--json-input"]).expect("parse");
        assert!(cli.stdin && cli.json_input);
    }
}
