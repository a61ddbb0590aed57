//! Command-line wallet registry for Wellspring.
//!
//! Wraps the wallet engine in a handful of subcommands. All state lives in
//! one JSON snapshot, `~/.wellspring/wallets.json` by default; every command
//! accepts `--store` to point somewhere else.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wellspring_wallet::derivation;
use wellspring_wallet::{FileStore, Registry};

#[derive(Parser)]
#[command(name = "wellspring-cli")]
#[command(version, about = "Deterministic HD wallet registry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh mnemonic and make it the active phrase.
    Generate(GenerateArgs),
    /// Import an existing 12-word mnemonic phrase.
    Import(ImportArgs),
    /// Derive the next wallet from the active mnemonic.
    Add(AddArgs),
    /// List all derived wallets.
    List(ListArgs),
    /// Show one wallet by id.
    Show(ShowArgs),
    /// Delete a wallet by id.
    Delete(DeleteArgs),
    /// Clear the mnemonic, every wallet, and the stored snapshot.
    Reset(ResetArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Path to the snapshot file (default: ~/.wellspring/wallets.json).
    #[arg(short, long)]
    store: Option<PathBuf>,
}

#[derive(Args)]
struct ImportArgs {
    /// The 12-word mnemonic phrase, quoted.
    phrase: String,

    /// Path to the snapshot file (default: ~/.wellspring/wallets.json).
    #[arg(short, long)]
    store: Option<PathBuf>,
}

#[derive(Args)]
struct AddArgs {
    /// Path to the snapshot file (default: ~/.wellspring/wallets.json).
    #[arg(short, long)]
    store: Option<PathBuf>,
}

#[derive(Args)]
struct ListArgs {
    /// Path to the snapshot file (default: ~/.wellspring/wallets.json).
    #[arg(short, long)]
    store: Option<PathBuf>,
}

#[derive(Args)]
struct ShowArgs {
    /// Wallet id (the derivation index).
    #[arg(short, long)]
    id: u32,

    /// Also print the private key.
    #[arg(long)]
    reveal: bool,

    /// Path to the snapshot file (default: ~/.wellspring/wallets.json).
    #[arg(short, long)]
    store: Option<PathBuf>,
}

#[derive(Args)]
struct DeleteArgs {
    /// Wallet id (the derivation index).
    #[arg(short, long)]
    id: u32,

    /// Path to the snapshot file (default: ~/.wellspring/wallets.json).
    #[arg(short, long)]
    store: Option<PathBuf>,
}

#[derive(Args)]
struct ResetArgs {
    /// Confirm: reset is irreversible unless the mnemonic is backed up.
    #[arg(long)]
    yes: bool,

    /// Path to the snapshot file (default: ~/.wellspring/wallets.json).
    #[arg(short, long)]
    store: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Import(args) => import(args),
        Commands::Add(args) => add(args),
        Commands::List(args) => list(args),
        Commands::Show(args) => show(args),
        Commands::Delete(args) => delete(args),
        Commands::Reset(args) => reset(args),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let store = open_store(args.store)?;
    let mut registry = Registry::load(&store)?;
    let phrase = registry.generate_mnemonic();
    registry.persist(&store).context("Failed to save snapshot")?;

    println!("\n=== MNEMONIC GENERATED ===");
    println!("\nSEED PHRASE (BACK THIS UP - 12 WORDS):");
    println!("  {phrase}");
    println!("\nWARNING: Anyone with this phrase controls every wallet derived from it.");
    println!("Run 'add' to derive the first wallet.");
    Ok(())
}

fn import(args: ImportArgs) -> Result<()> {
    let store = open_store(args.store)?;
    let mut registry = Registry::load(&store)?;
    registry.set_mnemonic(&args.phrase)?;
    registry.persist(&store).context("Failed to save snapshot")?;

    println!("Mnemonic imported and set active.");
    if !registry.wallets().is_empty() {
        println!("Existing wallets keep their keys; new ones derive from this phrase.");
    }
    Ok(())
}

fn add(args: AddArgs) -> Result<()> {
    let store = open_store(args.store)?;
    let mut registry = Registry::load(&store)?;
    if registry.mnemonic().is_none() {
        bail!("No mnemonic set. Run 'generate' or 'import' first.");
    }
    let record = registry.add_wallet(&store)?;

    println!("\n=== WALLET ADDED ===");
    println!("id:         {}", record.id);
    println!("path:       {}", derivation::path_for(record.id));
    println!("public key: {}", record.public_key);
    println!("\nRun 'show --id {} --reveal' to see the private key.", record.id);
    Ok(())
}

fn list(args: ListArgs) -> Result<()> {
    let store = open_store(args.store)?;
    let registry = Registry::load(&store)?;

    if registry.wallets().is_empty() {
        println!("No wallets. Run 'add' to derive one.");
        return Ok(());
    }

    println!("\n=== WALLETS ({}) ===", registry.wallets().len());
    for wallet in registry.wallets() {
        println!(
            "  [{}] {}  ({})",
            wallet.id,
            wallet.public_key,
            derivation::path_for(wallet.id)
        );
    }
    println!("\nNext derivation index: {}", registry.next_index());
    Ok(())
}

fn show(args: ShowArgs) -> Result<()> {
    let store = open_store(args.store)?;
    let registry = Registry::load(&store)?;
    let wallet = registry
        .wallet(args.id)
        .with_context(|| format!("No wallet with id {}", args.id))?;

    println!("\n=== WALLET {} ===", wallet.id);
    println!("path:        {}", derivation::path_for(wallet.id));
    println!("public key:  {}", wallet.public_key);
    if args.reveal {
        println!("private key: {}", wallet.private_key);
        println!("\nWARNING: Never share the private key.");
    }
    Ok(())
}

fn delete(args: DeleteArgs) -> Result<()> {
    let store = open_store(args.store)?;
    let mut registry = Registry::load(&store)?;
    if registry.delete_wallet(&store, args.id)? {
        println!("Deleted wallet {}. Its index will not be reused.", args.id);
    } else {
        println!("No wallet with id {}.", args.id);
    }
    Ok(())
}

fn reset(args: ResetArgs) -> Result<()> {
    if !args.yes {
        bail!("Reset erases the mnemonic and all wallets. Re-run with --yes to confirm.");
    }
    let store = open_store(args.store)?;
    // A corrupt snapshot must not block a reset.
    let mut registry = Registry::load(&store).unwrap_or_default();
    registry.reset(&store)?;

    println!("Registry reset: mnemonic cleared, wallets removed, snapshot erased.");
    Ok(())
}

fn open_store(path: Option<PathBuf>) -> Result<FileStore> {
    let path = resolve_store_path(path)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(FileStore::new(path))
}

fn resolve_store_path(path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".wellspring").join("wallets.json"))
}
