//! CLI command definitions and handlers

mod export;
mod graph;
mod init;

use anyhow::{Context, Result};
use castgraph::config::{self, ProjectConfig};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// castgraph - movie/actor graph analysis
#[derive(Parser, Debug)]
#[command(name = "castgraph")]
#[command(
    version,
    about = "Movie/actor graph queries: degrees of separation through shared films and the FAME lead-role test",
    after_help = "\
Examples:
  castgraph summary cast.txt                         Vertices, edges and counts
  castgraph separation cast.txt \"Megan Fox\" \"Tyler Perry\"
  castgraph movies cast.txt \"Jennifer Lawrence\"      Movies an actor appears in
  castgraph actors cast.txt \"The Jungle Book\"        Actors credited on a movie
  castgraph export-tgf cast.txt -o cast              Write cast.tgf
  castgraph fame cast.txt -o BechdelTesting.txt      Run the FAME test"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: castgraph.toml next to the input file)
    #[arg(long, global = true, env = "CASTGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a castgraph.toml with the default settings
    Init {
        /// Directory to create the config in
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Print graph counts and the vertex/edge listing
    Summary {
        /// Cast/gender table
        input: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Number of movies separating two actors
    Separation {
        /// Cast/gender table
        input: PathBuf,

        /// First actor
        actor_a: String,

        /// Second actor
        actor_b: String,
    },

    /// Movies an actor appears in
    Movies {
        /// Cast/gender table
        input: PathBuf,

        /// Actor name
        actor: String,
    },

    /// Actors credited on a movie
    Actors {
        /// Cast/gender table
        input: PathBuf,

        /// Movie title
        movie: String,
    },

    /// Export the graph in Trivial Graph Format
    ExportTgf {
        /// Cast/gender table
        input: PathBuf,

        /// Output base name, `.tgf` is appended (default: input file stem)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Run the FAME test and write the results file
    Fame {
        /// Cast/gender table
        input: PathBuf,

        /// Results file (default: BechdelTesting.txt)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// Resolve configuration: explicit file first, then castgraph.toml beside the input
fn resolve_config(explicit: Option<&Path>, input: &Path) -> Result<ProjectConfig> {
    if let Some(path) = explicit {
        return config::load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }
    let dir = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok(config::load_project_config(dir))
}

pub fn run(cli: Cli) -> Result<()> {
    let explicit = cli.config.as_deref();

    match cli.command {
        Commands::Init { dir } => init::run(&dir),

        Commands::Summary { input, format } => {
            let config = resolve_config(explicit, &input)?;
            graph::summary(&input, &config, &format)
        }

        Commands::Separation {
            input,
            actor_a,
            actor_b,
        } => {
            let config = resolve_config(explicit, &input)?;
            graph::separation(&input, &config, &actor_a, &actor_b)
        }

        Commands::Movies { input, actor } => {
            let config = resolve_config(explicit, &input)?;
            graph::movies(&input, &config, &actor)
        }

        Commands::Actors { input, movie } => {
            let config = resolve_config(explicit, &input)?;
            graph::actors(&input, &config, &movie)
        }

        Commands::ExportTgf { input, output } => {
            let config = resolve_config(explicit, &input)?;
            export::tgf(&input, &config, output)
        }

        Commands::Fame { input, output } => {
            let config = resolve_config(explicit, &input)?;
            export::fame(&input, &config, output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_separation() {
        let cli = Cli::try_parse_from([
            "castgraph",
            "separation",
            "cast.txt",
            "Megan Fox",
            "Tyler Perry",
        ])
        .expect("parse args");
        match cli.command {
            Commands::Separation {
                actor_a, actor_b, ..
            } => {
                assert_eq!(actor_a, "Megan Fox");
                assert_eq!(actor_b, "Tyler Perry");
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["castgraph", "summary", "cast.txt", "-f", "html"]).is_err());
    }

    #[test]
    fn test_resolve_config_beside_input() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            dir.path().join(config::CONFIG_FILE_NAME),
            "[output]\nreport_file = \"out.txt\"\n",
        )
        .expect("write config");

        let config =
            resolve_config(None, &dir.path().join("cast.txt")).expect("resolve config");
        assert_eq!(config.output.report_file, "out.txt");
    }

    #[test]
    fn test_resolve_config_explicit_missing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("missing.toml");
        assert!(resolve_config(Some(&missing), Path::new("cast.txt")).is_err());
    }
}
