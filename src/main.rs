//! Sports-betting demo entry point.

use std::str::FromStr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use betsim::auth::{AuthStore, MockAuthBackend};
use betsim::betting::{BettingStore, RandomSettlement};
use betsim::catalog::{mock_catalog, MarketKind, Sport};
use betsim::config::Config;
use betsim::storage::{FileStorage, MemoryStorage, Storage};
use betsim::wallet::WalletStore;

/// Sports-betting demo state stores.
#[derive(Parser, Debug)]
#[command(name = "betsim")]
#[command(about = "Demo driver for the betting state stores")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scripted register/bet/settle session (default).
    Demo,

    /// Check configuration validity.
    CheckConfig,

    /// List the event catalog with markets and odds.
    Catalog {
        /// Restrict to one sport (fútbol, baloncesto, tenis).
        #[arg(long)]
        sport: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("betsim=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Catalog { sport }) => cmd_catalog(sport),
        Some(Command::Demo) | None => cmd_demo().await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("BETSIM - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Starting balance: {}", config.starting_balance);
    println!("  Starting level: {}", config.starting_level);
    println!("  Wallet balance: {}", config.wallet_balance);
    println!(
        "  Storage: {}",
        config.storage_dir.as_deref().unwrap_or("(in-memory)")
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// List the event catalog.
fn cmd_catalog(sport: Option<String>) -> anyhow::Result<()> {
    let catalog = mock_catalog();

    let sports = match sport {
        Some(raw) => vec![Sport::from_str(&raw)
            .map_err(|_| anyhow::anyhow!("unknown sport: {raw}"))?],
        None => catalog.sports(),
    };

    for sport in sports {
        println!("== {sport} ==");
        for event in catalog.events_for(sport) {
            println!(
                "  [{}] {} ({}, {})",
                event.id,
                event.display_name(),
                event.league,
                event.start_time_str()
            );
            for market in &event.markets {
                println!("      {} ({})", market.name, market.kind);
                for entry in &market.odds {
                    println!("        {:<16} @ {}", entry.option, entry.odds);
                }
            }
        }
    }

    Ok(())
}

/// Run a scripted session through all three stores.
async fn cmd_demo() -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = Config::load()?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    let storage: Arc<dyn Storage> = match &config.storage_dir {
        Some(dir) => {
            info!("persisting to {dir}");
            Arc::new(FileStorage::new(dir)?)
        }
        None => Arc::new(MemoryStorage::new()),
    };

    let auth = Arc::new(AuthStore::new(Arc::new(MockAuthBackend::new()), &config));
    let betting = BettingStore::new(
        mock_catalog().clone(),
        Arc::clone(&storage),
        Arc::clone(&auth),
        Box::new(RandomSettlement),
    );
    let wallet = WalletStore::new(Arc::clone(&storage), &config);

    let _auth_sub = auth.subscribe(|snapshot| {
        info!(
            "auth changed: authenticated={} user={:?}",
            snapshot.is_authenticated,
            snapshot.user.as_ref().map(|u| u.email.as_str())
        );
    });
    let _bet_sub = betting.subscribe(|snapshot| {
        info!(
            "slip changed: {} pending, {} in history",
            snapshot.active_bets.len(),
            snapshot.bet_history.len()
        );
    });
    let _wallet_sub = wallet.subscribe(|state| {
        info!("wallet changed: balance={}", state.balance);
    });

    info!("========================================");
    info!("BETSIM DEMO SESSION");
    info!("========================================");

    // Restore a session if one survives, otherwise register.
    if auth.initialize().await?.is_none() {
        let user = auth.register("demo@betsim.test", "secreto", "Demo").await?;
        info!("registered {} with balance {}", user.email, user.balance);
    }

    // Fill the slip, including one upsert and one deliberate miss.
    betting.add_to_bet_slip("ftb-1", MarketKind::Ganador, "Barcelona", dec!(5_000));
    betting.add_to_bet_slip("ftb-1", MarketKind::Ganador, "Barcelona", dec!(7_500));
    betting.add_to_bet_slip("bkt-1", MarketKind::MasMenos, "Más de 220.5", dec!(2_000));
    if !betting.add_to_bet_slip("ftb-404", MarketKind::Ganador, "Nadie", dec!(100)) {
        info!("lookup miss rejected as expected");
    }

    let confirmed = betting.confirm_bets()?;
    info!("confirmed {} wagers", confirmed.len());

    // Mirror the stakes through the wallet ledger.
    wallet.deposit_money(dec!(1_000));
    for bet in &confirmed {
        wallet.place_bet(betsim::wallet::WalletBetData {
            event_name: bet.event_name.clone(),
            option: bet.option.clone(),
            odds: bet.odds,
            amount: bet.stake,
        });
    }

    betting.simulate_results();

    let stats = betting.user_stats();
    info!("========================================");
    info!("SESSION SUMMARY");
    info!("========================================");
    info!("Total bets: {}", stats.total_bets);
    info!("Won: {} / Lost: {}", stats.won_bets, stats.lost_bets);
    info!("Win rate: {}%", stats.win_rate);
    info!("Current streak: {}", stats.current_streak);
    info!("Wallet balance: {}", wallet.get().balance);
    info!("Wallet transactions: {}", wallet.transactions().len());
    info!("========================================");

    Ok(())
}
