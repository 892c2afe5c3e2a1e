use anyhow::Result;
use clap::Parser;
use horizon_client::{AccountRecord, HorizonClient, HorizonError};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

/// Horizon testnet endpoint queried when no override is given.
const DEFAULT_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";

/// Public key looked up when no account is given on the command line.
const DEFAULT_ACCOUNT_ID: &str = "GCNNJFP5YX67O3YYAQAK5CA3DZ63SAVHF5BPZCQKBOT5M4QFIKV3AEHQ";

#[derive(Parser, Debug)]
#[command(
    name = "horizon-cli",
    about = "Checks whether an account exists on a Horizon endpoint and prints its balances"
)]
struct Cli {
    /// Public key of the account to look up.
    #[arg(value_name = "ACCOUNT", default_value = DEFAULT_ACCOUNT_ID)]
    account: String,

    /// Horizon endpoint to query.
    #[arg(long, value_name = "URL", default_value = DEFAULT_HORIZON_URL)]
    horizon_url: Url,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    debug!(
        target: "horizon",
        endpoint = %cli.horizon_url,
        account = %cli.account,
        "starting account lookup"
    );

    // Every failure is reported on stdout and the process still exits
    // with code 0; the lookup is informational.
    let client = match HorizonClient::new(cli.horizon_url.clone()) {
        Ok(client) => client,
        Err(err) => {
            print!("{}", render_failure(&cli.account, &err));
            return Ok(());
        }
    };

    match client.get_account(&cli.account).await {
        Ok(record) => print!("{}", render_account(&record)),
        Err(err) => {
            warn!(target: "horizon", error = %err, account = %cli.account, "account lookup failed");
            print!("{}", render_failure(&cli.account, &err));
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(env_filter).try_init();
}

fn render_account(record: &AccountRecord) -> String {
    let mut out = String::new();
    out.push_str("Account found on Horizon:\n");
    out.push_str(&format!("  Account ID: {}\n", record.id));
    if let Some(first) = record.balances.first() {
        out.push_str(&format!("  First balance: {}\n", first.balance));
    }
    out.push_str(&format!("  Sequence number: {}\n", record.sequence));
    out.push_str("  Balances:\n");
    for balance in &record.balances {
        out.push_str(&format!("    - {}\n", balance));
    }
    out
}

fn render_failure(account_id: &str, err: &HorizonError) -> String {
    let mut out = String::new();
    out.push_str(&format!("Error fetching account from Horizon: {}\n", err));
    out.push_str(&format!(
        "Account {} was not found or an error occurred.\n",
        account_id
    ));
    out
}
