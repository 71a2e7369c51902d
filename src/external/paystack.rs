use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{invalid_input_error, upstream_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transaction {
    pub reference: String,
    pub status: String,
    pub amount: i64,
}

impl Transaction {
    pub fn is_successful(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: bool,
    message: String,
    data: Option<T>,
}

#[tracing::instrument]
pub async fn verify_transaction(reference: String) -> Result<Transaction, Error> {
    let api_base = env::var("PAYSTACK_API_BASE")?;
    let url = format!("https://{}/transaction/verify/{}", api_base, reference);
    let key = env::var("PAYSTACK_SECRET_KEY")?;

    let res = reqwest::Client::new().get(url).bearer_auth(key).send().await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response<Transaction> = res.json().await?;

    if !data.status {
        tracing::warn!("verification rejected: {}", data.message);
        return Err(upstream_error());
    }

    Ok(data.data.ok_or_else(|| upstream_error())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_successful_transactions_pass() {
        let transaction = Transaction {
            reference: "ref_001".into(),
            status: "success".into(),
            amount: 2000,
        };
        assert!(transaction.is_successful());

        let transaction = Transaction {
            reference: "ref_002".into(),
            status: "abandoned".into(),
            amount: 2000,
        };
        assert!(!transaction.is_successful());
    }
}
