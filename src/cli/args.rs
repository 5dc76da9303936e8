//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SCHEMA_PATH, ENV_SERVER_HOST, ENV_SERVER_PORT};

/// Travel & Tour SaaS web application
#[derive(Parser, Debug)]
#[command(name = "travel-tour-web")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Generate project artifacts
    Generate(GenerateArgs),
}

/// Arguments for the serve command.
///
/// Flags take precedence over `SERVER_HOST` / `SERVER_PORT`; when neither is
/// given the configuration defaults apply.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, env = ENV_SERVER_HOST)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = ENV_SERVER_PORT)]
    pub port: Option<u16>,
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[command(subcommand)]
    pub component: GenerateComponent,
}

/// Artifacts that can be generated
#[derive(Subcommand, Debug)]
pub enum GenerateComponent {
    /// Write the placeholder database schema artifact
    Schema {
        /// Output path
        #[arg(short, long, default_value = DEFAULT_SCHEMA_PATH)]
        output: PathBuf,

        /// Overwrite an existing generated schema
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "travel-tour-web",
            "serve",
            "-H",
            "127.0.0.1",
            "-p",
            "8080",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.port, Some(8080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serve_args_read_env() {
        let cmd = Cli::command();
        let serve = cmd.find_subcommand("serve").unwrap();
        let env_of = |id: &str| {
            serve
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_string_lossy().into_owned())
        };
        assert_eq!(env_of("host").as_deref(), Some(ENV_SERVER_HOST));
        assert_eq!(env_of("port").as_deref(), Some(ENV_SERVER_PORT));
    }

    #[test]
    fn test_generate_schema_args() {
        let cli = Cli::try_parse_from([
            "travel-tour-web",
            "-v",
            "generate",
            "schema",
            "--output",
            "out/db.json",
            "--force",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate(GenerateArgs {
                component: GenerateComponent::Schema { output, force },
            }) => {
                assert_eq!(output, PathBuf::from("out/db.json"));
                assert!(force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
