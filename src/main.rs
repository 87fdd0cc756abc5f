//! Entry point: mirrors generated typechain artifacts from the contract
//! project into the frontend and transcodes `contracts.json` into the
//! frontend's `deployments.ts` module.
//!
//! Both operations are attempted even if the first fails; the process exits
//! non-zero if either did not complete.

mod layout;
mod mirror;
mod summary;

use crate::layout::ProjectLayout;
use clap::Parser;
use colored::Colorize;
use contract_sync_common::{DeploymentLoader, SyncError};
use contract_sync_generate::{flatten_token_addresses, ModuleBuilder};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Sync contract typechains and deployment configuration into the frontend"
)]
struct Args {
    /// Project root containing `lending-zeta/` and `frontend/`
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if run(&args.root) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Runs the full sync under the given project root. Returns `true` only if
/// every operation completed; the process exit status maps directly onto
/// this.
fn run(root: &Path) -> bool {
    let layout = ProjectLayout::new(root);

    println!("{}", "contract-sync".bold());

    if let Err(err) = layout.validate() {
        match &err {
            SyncError::MissingPaths(missing) => {
                println!("{} missing required paths:", "error:".red().bold());
                for path in missing {
                    println!("   - {}", path.display());
                }
            }
            other => println!("{} {}", "error:".red().bold(), other),
        }
        return false;
    }

    // Loaded once; the transcode and the summary share the same document.
    let document = match DeploymentLoader::load_from_file(&layout.contracts_json) {
        Ok(document) => document,
        Err(err) => {
            println!(
                "{} reading {}: {}",
                "error:".red().bold(),
                layout.contracts_json.display(),
                err
            );
            return false;
        }
    };

    let mut ok = sync_typechains(&layout);
    ok &= write_deployments_module(&layout, &document);

    if !ok {
        println!();
        println!("{} some sync operations failed", "✗".red());
        return false;
    }

    println!();
    println!("{} all sync operations completed", "✓".green());
    print_summary(document);

    true
}

/// Mirrors `typechain-types/` into the frontend source tree.
fn sync_typechains(layout: &ProjectLayout) -> bool {
    println!();
    println!("syncing typechain types...");

    match mirror::mirror_directory(&layout.typechain_source, &layout.typechain_target) {
        Ok(()) => {
            println!(
                "   {} copied to {}",
                "✓".green(),
                layout.typechain_target.display()
            );
            true
        }
        Err(err) => {
            println!("   {} {}", "✗".red(), err);
            false
        }
    }
}

/// Transcodes the deployment document into `deployments.ts`.
fn write_deployments_module(layout: &ProjectLayout, document: &Value) -> bool {
    println!();
    println!("generating deployments module...");

    let result = ModuleBuilder::new()
        .generate(document)
        .and_then(|module| module.write_to_file(&layout.deployments_ts));

    match result {
        Ok(()) => {
            println!(
                "   {} wrote {}",
                "✓".green(),
                layout.deployments_ts.display()
            );
            true
        }
        Err(err) => {
            println!("   {} {:#}", "✗".red(), err);
            false
        }
    }
}

/// Prints the per-network digest of the normalized document. The digest is
/// informational; a document that transcodes fine but does not fit the typed
/// model only costs us the summary, not the sync.
fn print_summary(mut document: Value) {
    flatten_token_addresses(&mut document);

    match DeploymentLoader::parse_config(document) {
        Ok(config) => {
            println!();
            print!("{}", summary::render_summary(&config));
        }
        Err(err) => println!("   {} summary unavailable: {}", "✗".red(), err),
    }
}
