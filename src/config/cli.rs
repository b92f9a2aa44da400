use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the settings of the authenticated shop
    Me,
    /// List banks that accept SBP payouts
    SbpBanks,
    #[command(subcommand)]
    Payment(PaymentCommand),
    #[command(subcommand)]
    Payout(PayoutCommand),
    #[command(subcommand)]
    Refund(RefundCommand),
    #[command(subcommand)]
    Deal(DealCommand),
    #[command(subcommand)]
    Receipt(ReceiptCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum PaymentCommand {
    Get {
        id: String,
    },
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        status: Option<String>,
    },
    /// Create a payment from a JSON request body
    Create {
        #[arg(long)]
        body: PathBuf,
    },
    Capture {
        id: String,
        /// Optional JSON body for a partial capture
        #[arg(long)]
        body: Option<PathBuf>,
    },
    Cancel {
        id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PayoutCommand {
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        body: PathBuf,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum RefundCommand {
    Get {
        id: String,
    },
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        payment_id: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    Create {
        #[arg(long)]
        body: PathBuf,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DealCommand {
    Get {
        id: String,
    },
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        status: Option<String>,
    },
    Create {
        #[arg(long)]
        body: PathBuf,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ReceiptCommand {
    Get {
        id: String,
    },
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        payment_id: Option<String>,
        #[arg(long)]
        refund_id: Option<String>,
    },
    Create {
        #[arg(long)]
        body: PathBuf,
    },
}

/// Paging and time window shared by the `list` subcommands.
#[derive(Debug, Clone, Args, Default)]
pub struct PageArgs {
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub cursor: Option<String>,
    /// RFC 3339 timestamp, inclusive
    #[arg(long)]
    pub created_from: Option<DateTime<Utc>>,
    /// RFC 3339 timestamp, exclusive
    #[arg(long)]
    pub created_to: Option<DateTime<Utc>>,
}
