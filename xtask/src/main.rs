use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for spritemark")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: fmt, clippy, tests, doc
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            run("fmt", &["fmt", "--all", "--", "--check"])?;
            run("clippy", CLIPPY_ARGS)?;
            run("test", &["test", "--workspace"])?;
            run("doc", &["doc", "--workspace", "--no-deps"])?;
        }
        Commands::Fmt => run("fmt", &["fmt", "--all", "--", "--check"])?,
        Commands::Clippy => run("clippy", CLIPPY_ARGS)?,
        Commands::Test => run("test", &["test", "--workspace"])?,
        Commands::Doc => run("doc", &["doc", "--workspace", "--no-deps"])?,
        Commands::Build => run("build", &["build", "--workspace"])?,
    }

    Ok(())
}

const CLIPPY_ARGS: &[&str] = &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"];

fn run(label: &str, args: &[&str]) -> Result<()> {
    println!("==> Running cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {label} failed");
    }
    Ok(())
}
