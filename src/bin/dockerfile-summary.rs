// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

//! Reads a Dockerfile and prints a summary of its comments, base images and
//! users.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::info;
use snafu::{ErrorCompat, ResultExt, Snafu};

use dockerfile_summary::Dockerfile;

#[derive(Debug, Snafu)]
enum Error {
  #[snafu(display("could not open {}: {}", path.display(), source))]
  OpenError {
    path: PathBuf,
    source: io::Error
  },

  #[snafu(display("{}: {}", path.display(), source))]
  ParseError {
    path: PathBuf,
    source: dockerfile_summary::Error
  },

  #[snafu(display("could not render JSON: {}", source))]
  JsonError {
    source: serde_json::Error
  },

  #[snafu(display("could not render YAML: {}", source))]
  YamlError {
    source: serde_yaml::Error
  }
}

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
  Json,
  Yaml,
  Debug
}

/// Summarizes the FROM and USER instructions and comments of a Dockerfile.
#[derive(Debug, Parser)]
#[command(name = "dockerfile-summary", version)]
struct Args {
  /// Path to the Dockerfile, or `-` to read standard input
  #[arg(default_value = "Dockerfile")]
  path: PathBuf,

  /// Output format
  #[arg(long, short, value_enum, default_value = "json")]
  format: Format,

  /// Print JSON on a single line
  #[arg(long)]
  compact: bool
}

fn load(path: &Path) -> Result<Dockerfile> {
  info!("reading {}", path.display());

  let result = if path.as_os_str() == "-" {
    Dockerfile::from_reader(io::stdin().lock())
  } else {
    let f = File::open(path).context(OpenError { path })?;
    Dockerfile::from_reader(f)
  };

  result.context(ParseError { path })
}

fn render(dockerfile: &Dockerfile, format: Format, compact: bool) -> Result<String> {
  match format {
    Format::Json if compact => serde_json::to_string(dockerfile).context(JsonError),
    Format::Json => serde_json::to_string_pretty(dockerfile).context(JsonError),
    Format::Yaml => serde_yaml::to_string(dockerfile).context(YamlError),
    Format::Debug => Ok(format!("{:#?}", dockerfile))
  }
}

fn wrap(args: Args) -> Result<()> {
  let dockerfile = load(&args.path)?;
  let output = render(&dockerfile, args.format, args.compact)?;

  println!("{}", output.trim_end());

  Ok(())
}

fn main() {
  env_logger::init();

  match wrap(Args::parse()) {
    Ok(()) => std::process::exit(0),
    Err(e) => {
      eprintln!("An error occurred: {}", e);
      if let Some(backtrace) = ErrorCompat::backtrace(&e) {
        eprintln!("{}", backtrace);
      }

      std::process::exit(1);
    }
  }
}
