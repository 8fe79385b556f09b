// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod host;
pub mod logging;
pub mod scan;
pub mod transpile;
pub mod watch;

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::CliArgs;
use crate::engine::{Runtime, RuntimeEvent};
use crate::host::WatchRegistrar;
use crate::scan::{scan_workspace, FileRegistry};
use crate::transpile::{ChangeTranspiler, EsbuildTranspiler, Transpiler};
use crate::watch::NotifyDevServer;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the one-time workspace scan into the file registry
/// - watch registration for every registry key
/// - the change runtime (single-flight transpiles + reload messages)
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let registry = scan_workspace(&args.workspace_root, &args.file_types)
        .await
        .context("scanning workspace packages")?;

    if args.dry_run {
        print_dry_run(&registry);
        return Ok(());
    }

    let registry = Arc::new(registry);

    // Runtime event channel.
    let (events_tx, events_rx) = mpsc::channel::<RuntimeEvent>(64);

    // Local stand-in for the host dev server, backed by notify.
    let mut server = NotifyDevServer::new(events_tx.clone())?;

    // Build-start hook: register every registry key as a watch file.
    let mut registrar = WatchRegistrar::new();
    registrar
        .register_all(&registry, &mut server)
        .context("registering watch files with the dev server")?;

    let transpiler: Arc<dyn Transpiler> = Arc::new(EsbuildTranspiler::new(&args.esbuild));
    let handler = Arc::new(ChangeTranspiler::new(
        Arc::clone(&registry),
        args.format,
        transpiler,
    ));

    // Ctrl-C → graceful shutdown.
    {
        let tx = events_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    info!(
        files = registry.len(),
        format = args.format.as_str(),
        "watching external workspace files"
    );

    let runtime = Runtime::new(handler, Box::new(server), events_rx, events_tx);
    runtime.run().await
}

/// Simple dry-run output: print registered files and resolved configs.
fn print_dry_run(registry: &FileRegistry) {
    println!("linkwatch dry-run");
    println!();

    println!("registered files ({}):", registry.len());
    for (file, config_path) in registry.iter() {
        println!("  - {}", file.display());
        println!("      config: {}", config_path.display());
    }
    println!();

    let configs: BTreeSet<&Path> = registry.iter().map(|(_, config)| config).collect();
    println!("compiler configs ({}):", configs.len());
    for config_path in configs {
        match config::resolve(config_path) {
            Ok(resolved) => println!(
                "  - {} (rootDir = {}, outDir = {})",
                config_path.display(),
                resolved.root_dir,
                resolved.out_dir
            ),
            Err(err) => println!("  - {}: {err}", config_path.display()),
        }
    }
}
