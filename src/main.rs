//! ninejapay - query the 9jaPay API from the terminal
//!
//! Credentials and environment come from `NINEJAPAY_*` variables (or `.env`).

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::error;

use ninejapay::logging::init_tracing;
use ninejapay::{
    NameEnquiryRequest, NineJaPayClient, PaginationQuery, SimulateDepositRequest,
    TransactionsQuery,
};

/// Command-line access to the 9jaPay API
#[derive(Parser)]
#[command(name = "ninejapay", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum AccountKind {
    All,
    Permanent,
    Transient,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported banks
    Banks,

    /// Show aggregate balances across virtual accounts
    BalanceSummary,

    /// Show the balance of one virtual account
    Balance {
        account_number: String,
    },

    /// Show one virtual account
    Account {
        account_number: String,
    },

    /// List virtual accounts
    Accounts {
        #[arg(long, value_enum, default_value = "all")]
        kind: AccountKind,
        #[arg(long, default_value_t = 20)]
        page_size: u32,
        #[arg(long, default_value_t = 1)]
        page_number: u32,
    },

    /// Transaction status query for a transfer reference
    Tsq {
        reference: String,
    },

    /// List transactions
    Transactions {
        #[arg(long, default_value_t = 20)]
        page_size: u32,
        #[arg(long, default_value_t = 1)]
        page_number: u32,
        /// Only this account
        #[arg(long)]
        account: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,
    },

    /// Show one transaction
    Transaction {
        transaction_id: String,
    },

    /// Resolve the account name for a bank account
    NameEnquiry {
        bank_code: String,
        account_number: String,
    },

    /// Credit a virtual account with test funds (sandbox only)
    SimulateDeposit {
        account_number: String,
        /// Decimal amount, e.g. 1500.00
        amount: String,
        #[arg(long, env = "NINEJAPAY_SIMULATION_AUTH_KEY")]
        auth_key: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = NineJaPayClient::from_env().context("failed to configure 9jaPay client")?;

    match cli.command {
        Commands::Banks => print_json(&client.get_bank_list().await?),
        Commands::BalanceSummary => print_json(&client.get_total_balance_summary().await?),
        Commands::Balance { account_number } => {
            print_json(&client.get_account_balance(&account_number).await?)
        }
        Commands::Account { account_number } => {
            print_json(&client.get_virtual_account(&account_number).await?)
        }
        Commands::Accounts {
            kind,
            page_size,
            page_number,
        } => {
            let query = PaginationQuery::new(page_size, page_number);
            match kind {
                AccountKind::All => print_json(&client.get_all_virtual_accounts(&query).await?),
                AccountKind::Permanent => {
                    print_json(&client.get_all_permanent_virtual_accounts(&query).await?)
                }
                AccountKind::Transient => {
                    print_json(&client.get_all_transient_virtual_accounts(&query).await?)
                }
            }
        }
        Commands::Tsq { reference } => {
            print_json(&client.get_transaction_status(&reference).await?)
        }
        Commands::Transactions {
            page_size,
            page_number,
            account,
            start_date,
            end_date,
        } => {
            let query = TransactionsQuery {
                page_size,
                page_number,
                account_number: account,
                start_date,
                end_date,
            };
            print_json(&client.get_transactions(&query).await?)
        }
        Commands::Transaction { transaction_id } => {
            print_json(&client.get_transaction_by_id(&transaction_id).await?)
        }
        Commands::NameEnquiry {
            bank_code,
            account_number,
        } => print_json(
            &client
                .name_enquiry(&NameEnquiryRequest {
                    bank_code,
                    account_number,
                })
                .await?,
        ),
        Commands::SimulateDeposit {
            account_number,
            amount,
            auth_key,
        } => print_json(
            &client
                .simulate_deposit(&SimulateDepositRequest {
                    recipient_account_number: account_number,
                    amount,
                    auth_key,
                })
                .await?,
        ),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
