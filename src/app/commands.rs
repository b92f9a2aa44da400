use crate::config::cli::{
    Command, DealCommand, PageArgs, PaymentCommand, PayoutCommand, ReceiptCommand, RefundCommand,
};
use crate::core::Client;
use crate::domain::deal::{DealFilter, NewDeal};
use crate::domain::payment::{CapturePayment, NewPayment, PaymentFilter};
use crate::domain::payout::NewPayout;
use crate::domain::receipt::{NewReceipt, ReceiptFilter};
use crate::domain::refund::{NewRefund, RefundFilter};
use crate::utils::error::{Result, YooKassaError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Runs one CLI command and returns the API result as JSON for printing.
pub async fn run(client: &Client, command: &Command, idempotency_key: Option<&str>) -> Result<Value> {
    match command {
        Command::Me => to_json(client.settings().get_account_settings().await?),
        Command::SbpBanks => to_json(client.payouts().get_sbp_banks().await?),
        Command::Payment(cmd) => run_payment(client, cmd, idempotency_key).await,
        Command::Payout(cmd) => run_payout(client, cmd, idempotency_key).await,
        Command::Refund(cmd) => run_refund(client, cmd, idempotency_key).await,
        Command::Deal(cmd) => run_deal(client, cmd, idempotency_key).await,
        Command::Receipt(cmd) => run_receipt(client, cmd, idempotency_key).await,
    }
}

async fn run_payment(
    client: &Client,
    command: &PaymentCommand,
    idempotency_key: Option<&str>,
) -> Result<Value> {
    let mut handler = client.payments();
    if let Some(key) = idempotency_key {
        handler = handler.with_idempotency_key(key);
    }

    match command {
        PaymentCommand::Get { id } => to_json(handler.find_payment(id).await?),
        PaymentCommand::List { page, status } => {
            let filter = PaymentFilter {
                created_at_gte: page.created_from,
                created_at_lt: page.created_to,
                status: status.as_deref().map(parse_enum).transpose()?,
                limit: page.limit,
                cursor: page.cursor.clone(),
                ..Default::default()
            };
            to_json(handler.find_payments(&filter).await?)
        }
        PaymentCommand::Create { body } => {
            let payment: NewPayment = read_body(body)?;
            to_json(handler.create_payment(&payment).await?)
        }
        PaymentCommand::Capture { id, body } => {
            let capture: Option<CapturePayment> = body.as_deref().map(read_body).transpose()?;
            to_json(handler.capture_payment(id, capture.as_ref()).await?)
        }
        PaymentCommand::Cancel { id } => to_json(handler.cancel_payment(id).await?),
    }
}

async fn run_payout(
    client: &Client,
    command: &PayoutCommand,
    idempotency_key: Option<&str>,
) -> Result<Value> {
    let mut handler = client.payouts();
    if let Some(key) = idempotency_key {
        handler = handler.with_idempotency_key(key);
    }

    match command {
        PayoutCommand::Get { id } => to_json(handler.get_payout(id).await?),
        PayoutCommand::Create { body } => {
            let payout: NewPayout = read_body(body)?;
            to_json(handler.create_payout(&payout).await?)
        }
    }
}

async fn run_refund(
    client: &Client,
    command: &RefundCommand,
    idempotency_key: Option<&str>,
) -> Result<Value> {
    let mut handler = client.refunds();
    if let Some(key) = idempotency_key {
        handler = handler.with_idempotency_key(key);
    }

    match command {
        RefundCommand::Get { id } => to_json(handler.find_refund(id).await?),
        RefundCommand::List {
            page,
            payment_id,
            status,
        } => {
            let filter = RefundFilter {
                created_at_gte: page.created_from,
                created_at_lt: page.created_to,
                payment_id: payment_id.clone(),
                status: status.as_deref().map(parse_enum).transpose()?,
                limit: page.limit,
                cursor: page.cursor.clone(),
                ..Default::default()
            };
            to_json(handler.find_refunds(&filter).await?)
        }
        RefundCommand::Create { body } => {
            let refund: NewRefund = read_body(body)?;
            to_json(handler.create_refund(&refund).await?)
        }
    }
}

async fn run_deal(
    client: &Client,
    command: &DealCommand,
    idempotency_key: Option<&str>,
) -> Result<Value> {
    let mut handler = client.deals();
    if let Some(key) = idempotency_key {
        handler = handler.with_idempotency_key(key);
    }

    match command {
        DealCommand::Get { id } => to_json(handler.find_deal(id).await?),
        DealCommand::List { page, status } => {
            let filter = DealFilter {
                created_at_gte: page.created_from,
                created_at_lt: page.created_to,
                status: status.as_deref().map(parse_enum).transpose()?,
                limit: page.limit,
                cursor: page.cursor.clone(),
                ..Default::default()
            };
            to_json(handler.find_deals(&filter).await?)
        }
        DealCommand::Create { body } => {
            let deal: NewDeal = read_body(body)?;
            to_json(handler.create_deal(&deal).await?)
        }
    }
}

async fn run_receipt(
    client: &Client,
    command: &ReceiptCommand,
    idempotency_key: Option<&str>,
) -> Result<Value> {
    let mut handler = client.receipts();
    if let Some(key) = idempotency_key {
        handler = handler.with_idempotency_key(key);
    }

    match command {
        ReceiptCommand::Get { id } => to_json(handler.find_receipt(id).await?),
        ReceiptCommand::List {
            page,
            payment_id,
            refund_id,
        } => {
            let filter = receipt_filter(page, payment_id, refund_id);
            to_json(handler.find_receipts(&filter).await?)
        }
        ReceiptCommand::Create { body } => {
            let receipt: NewReceipt = read_body(body)?;
            to_json(handler.create_receipt(&receipt).await?)
        }
    }
}

fn receipt_filter(
    page: &PageArgs,
    payment_id: &Option<String>,
    refund_id: &Option<String>,
) -> ReceiptFilter {
    ReceiptFilter {
        created_at_gte: page.created_from,
        created_at_lt: page.created_to,
        payment_id: payment_id.clone(),
        refund_id: refund_id.clone(),
        limit: page.limit,
        cursor: page.cursor.clone(),
        ..Default::default()
    }
}

fn read_body<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Parses a status given on the command line, e.g. `waiting_for_capture`.
fn parse_enum<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_value(Value::String(raw.to_string()))
        .map_err(|_| YooKassaError::validation(format!("unknown status '{}'", raw)))
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
