mod errcodes;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Deny,
    Test {
        #[clap(short, long, default_value_t = false)]
        coverage: bool,
        #[clap(last = true)]
        args: Vec<String>,
    },
    Check,
    Fmt,
    Doc,
    UnusedDeps,
    /// Compare the SQLSTATE catalog with the server's `src/backend/utils/errcodes.txt`
    Errcodes { path: PathBuf },
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    if let Commands::Errcodes { path } = &args.command {
        return errcodes::run(path);
    }

    let sh = Shell::new()?;
    match args.command {
        Commands::Deny => {
            println!("cargo deny");
            cmd!(sh, "cargo install cargo-deny").run()?;
            cmd!(sh, "cargo deny check").run()?;
        }
        Commands::Test { args, coverage } => test(&sh, &args, coverage)?,
        Commands::Check => {
            println!("cargo check");
            cmd!(sh, "cargo clippy --workspace --locked -- -D warnings").run()?;
            cmd!(sh, "cargo fmt --all --check").run()?;
        }
        Commands::Fmt => {
            println!("cargo fix");
            cmd!(sh, "cargo fmt --all").run()?;
            cmd!(
                sh,
                "cargo clippy --fix --allow-dirty --allow-staged --workspace --all-features --tests"
            )
            .run()?;
        }
        Commands::Doc => {
            println!("cargo doc");
            cmd!(sh, "cargo doc --workspace --no-deps --all-features").run()?;

            if std::option_env!("CI").is_none() {
                #[cfg(target_os = "macos")]
                cmd!(sh, "open target/doc/rp_sqlstate/index.html").run()?;

                #[cfg(target_os = "linux")]
                cmd!(sh, "xdg-open target/doc/rp_sqlstate/index.html").run()?;
            }
        }
        Commands::UnusedDeps => {
            println!("unused deps");
            cmd!(sh, "cargo install cargo-machete").run()?;
            cmd!(sh, "cargo-machete").run()?;
        }
        Commands::Errcodes { .. } => {}
    }

    Ok(())
}

fn test(sh: &Shell, args: &[String], coverage: bool) -> eyre::Result<()> {
    println!("cargo test");
    cmd!(sh, "cargo install cargo-nextest").run()?;

    if coverage {
        cmd!(sh, "cargo install grcov").run()?;
        for (key, val) in [
            ("CARGO_INCREMENTAL", "0"),
            ("RUSTFLAGS", "-Cinstrument-coverage"),
            ("LLVM_PROFILE_FILE", "target/coverage/%p-%m.profraw"),
        ] {
            sh.set_var(key, val);
        }
    }
    cmd!(
        sh,
        "cargo nextest run --workspace --tests --all-targets --no-fail-fast {args...}"
    )
    .run()?;
    // nextest skips doctests
    cmd!(sh, "cargo test --workspace --doc").run()?;

    if coverage {
        cmd!(sh, "mkdir -p target/coverage").run()?;
        cmd!(sh, "grcov . --binary-path ./target/debug/deps/ -s . -t html,cobertura --branch --ignore-not-existing --ignore '../*' --ignore \"/*\" -o target/coverage/").run()?;
    }
    Ok(())
}
