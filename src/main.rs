// SPDX-License-Identifier: MIT

use anyhow::Context;
use clap::{Parser, Subcommand};
use depcheck_rs::adapters::{CommandProbeRunner, DottedVersionComparator, TokenPathResolver};
use depcheck_rs::model::KNOWN_KINDS;
use depcheck_rs::{
    DependencyEvaluator, HostEnvironment, HostServices, MachineProfile, RuleLoader, Verdict,
};
use dotenv::dotenv;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Environment variable holding `RUST_LOG`-style filter directives
const LOG_ENV: &str = "DEPCHECK_LOG";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a list of dependency nodes against a machine profile
    Eval {
        /// Path to the machine profile (YAML or JSON)
        #[arg(short, long)]
        profile: PathBuf,

        /// Path to the rule file (YAML list of nodes)
        #[arg(short, long)]
        rules: PathBuf,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Override the OS installation directory used for %WINDOWS%
        #[arg(long)]
        system_root: Option<PathBuf>,

        /// Override the temporary directory used for %TEMP% and probes
        #[arg(long)]
        temp_dir: Option<PathBuf>,
    },
    /// List the supported dependency kinds
    Kinds,
}

#[derive(Serialize)]
struct NodeResult<'a> {
    index: usize,
    kind: &'a str,
    verdict: Verdict,
    code: i32,
}

/// `-v` wins over `DEPCHECK_LOG`, which wins over the `info` default
fn log_directives(verbose: u8, from_env: Option<String>) -> String {
    match verbose {
        0 => from_env
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn init_tracing(verbose: u8) {
    let directives = log_directives(verbose, std::env::var(LOG_ENV).ok());
    let filter = match EnvFilter::try_new(&directives) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Ignoring invalid {} '{}': {}", LOG_ENV, directives, e);
            EnvFilter::new("info")
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Eval {
            profile,
            rules,
            json,
            system_root,
            temp_dir,
        } => {
            let mut env = HostEnvironment::from_env()?;
            if let Some(system_root) = system_root {
                env = env.with_system_root(system_root)?;
            }
            if let Some(temp_dir) = temp_dir {
                env = env.with_temp_dir(temp_dir)?;
            }

            let machine = Arc::new(
                MachineProfile::load(&profile)
                    .with_context(|| format!("loading profile {}", profile.display()))?,
            );
            let nodes = RuleLoader::new()
                .load_rules(&rules)
                .with_context(|| format!("loading rules {}", rules.display()))?;
            log::info!(
                "Evaluating {} dependency nodes from {}",
                nodes.len(),
                rules.display()
            );

            let services = HostServices::new(
                Arc::new(DottedVersionComparator::new()),
                Arc::new(TokenPathResolver::new()),
                Arc::new(CommandProbeRunner::new()),
                machine.clone(),
                machine.clone(),
                machine.clone(),
            );
            let evaluator = DependencyEvaluator::new(&machine.snapshot, &services, &env);

            let mut results = Vec::with_capacity(nodes.len());
            for (index, node) in nodes.iter().enumerate() {
                let verdict = evaluator
                    .evaluate(node)
                    .with_context(|| format!("evaluating node #{} ({})", index, node.kind()))?;
                results.push(NodeResult {
                    index,
                    kind: node.kind(),
                    verdict,
                    code: verdict.code(),
                });
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for r in &results {
                    println!("{}\t{}\t{}\t{}", r.index, r.kind, r.verdict, r.code);
                }
            }
        }
        Commands::Kinds => {
            for kind in KNOWN_KINDS {
                println!("{}", kind);
            }
        }
    }

    Ok(())
}
