use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::debug;

use compdb_gen::{CompileDbGenerator, GeneratorConfig};

/// Generate compile_commands.json for every source file under a project root
#[derive(Debug, Parser)]
#[command(name = "compdb-gen", version, about)]
struct Cli {
    /// Project root (defaults to the directory holding this executable)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Configuration file (.toml, .yaml or .yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Compiler placed at the head of every command
    #[arg(long)]
    compiler: Option<String>,

    /// Output file name, relative to the root
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Follow symbolic links while walking
    #[arg(long)]
    follow_links: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(root) = self.root {
            config.root = Some(root);
        }
        if let Some(compiler) = self.compiler {
            config.compiler = compiler;
        }
        if let Some(output) = self.output {
            config.output_file_name = output;
        }
        if self.follow_links {
            config.follow_links = true;
        }

        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{:?}", cli);

    let generator = CompileDbGenerator::new(cli.into_config()?)?;
    let report = generator.generate()?;

    println!("Compilation database generated successfully!");
    println!("Output path: {}", report.output_path.display());
    println!("Entries written: {}", report.entry_count);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_defaults() -> Result<()> {
        let cli = Cli::try_parse_from([
            "compdb-gen", "--root", "/work", "--compiler", "clang++", "-o", "cc.json", "--follow-links",
        ])?;
        let config = cli.into_config()?;

        assert_eq!(config.root, Some(PathBuf::from("/work")));
        assert_eq!(config.compiler, "clang++");
        assert_eq!(config.output_file_name, PathBuf::from("cc.json"));
        assert!(config.follow_links);
        assert_eq!(config.source_suffix, ".cpp");
        Ok(())
    }

    #[test]
    fn no_arguments_keeps_defaults() -> Result<()> {
        let config = Cli::try_parse_from(["compdb-gen"])?.into_config()?;
        assert_eq!(config, GeneratorConfig::default());
        Ok(())
    }

    #[test]
    fn verbosity_counts() -> Result<()> {
        let cli = Cli::try_parse_from(["compdb-gen", "-vv"])?;
        assert_eq!(cli.verbose, 2);
        Ok(())
    }
}
