use crate::demo::{run_batch, run_demo, run_normalize, run_score, BatchArgs, NormalizeArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use crs_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "CRS Calculator",
    about = "Score Comprehensive Ranking System candidates from the command line or over HTTP",
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
    /// Score a single candidate described by flags
    Score(ScoreArgs),
    /// Convert raw language test scores into proficiency levels
    Normalize(NormalizeArgs),
    /// Score every candidate in a CSV export
    Batch(BatchArgs),
    /// Walk through the reference candidate with and without a provincial nomination
    Demo,
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
        Command::Score(args) => run_score(args),
        Command::Normalize(args) => run_normalize(args),
        Command::Batch(args) => run_batch(args),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crs_engine::scoring::{EducationLevel, ExperienceBucket, LanguageTest};

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["crs-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_flags() {
        let cli = Cli::try_parse_from([
            "crs-api",
            "score",
            "--age",
            "28",
            "--education",
            "bachelors",
            "--first-test",
            "ielts",
            "--first-scores",
            "7,7,7,7",
            "--canadian-experience",
            "5+",
            "--nomination",
        ])
        .expect("parses");

        let Some(Command::Score(args)) = cli.command else {
            panic!("expected score command");
        };
        assert_eq!(args.age, 28);
        assert_eq!(args.education, EducationLevel::Bachelors);
        assert_eq!(args.first_test, LanguageTest::Ielts);
        assert_eq!(args.canadian_experience, ExperienceBucket::AtLeast(5));
        assert!(args.nomination);
        assert!(!args.json);
    }

    #[test]
    fn rejects_malformed_score_list() {
        let result = Cli::try_parse_from([
            "crs-api",
            "normalize",
            "--test",
            "tef",
            "--scores",
            "300,200",
        ]);
        assert!(result.is_err());
    }
}
