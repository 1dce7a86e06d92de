use bytes::Bytes;
use futures::channel::oneshot;
use log::{debug, error, warn};
use serde::de::DeserializeOwned;

use crate::fetch::error::FetchError;

pub mod error;

/// Performs a single GET against `url` and decodes the body into `T`.
///
/// A non-success status is only logged: lookup services answer unknown codes
/// with a JSON error document, which still decodes into an empty record.
pub async fn fetch_record<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let client = reqwest::Client::builder().build()?;

    debug!("GET {}", url);
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        warn!("{} answered with status {}", url, status);
    }

    let body = resp.bytes().await?;
    decode_body(&body)
}

fn decode_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

/// Starts a fetcher on the current runtime. The record is sent on `sender`
/// only on success; on failure the error is logged and `sender` is dropped
/// without a value.
pub fn spawn_fetcher<T>(label: &'static str, url: String, sender: oneshot::Sender<T>)
where
    T: DeserializeOwned + 'static,
{
    actix_rt::spawn(async move {
        match fetch_record::<T>(&url).await {
            Ok(record) => {
                if sender.send(record).is_err() {
                    debug!("{} answered after the race was settled", label);
                }
            },
            Err(err) => {
                error!("{} lookup failed: {}", label, err);
            },
        }
    });
}
