use std::fmt::Formatter;

use futures::channel::oneshot;
use futures::{future, pin_mut, select, FutureExt};
use log::{debug, info};

use crate::cep::Cep;
use crate::config::Config;
use crate::fetch::spawn_fetcher;
use crate::providers::{brasil_api, via_cep, BrasilApiAddress, ViaCepAddress};

#[derive(Debug, PartialEq)]
pub enum RaceOutcome {
    BrasilApi(BrasilApiAddress),
    ViaCep(ViaCepAddress),
    Timeout,
}

impl std::fmt::Display for RaceOutcome {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            RaceOutcome::BrasilApi(address) => {
                write!(f, "{} response:\n{}", brasil_api::LABEL, address)
            },
            RaceOutcome::ViaCep(address) => {
                write!(f, "{} response:\n{}", via_cep::LABEL, address)
            },
            RaceOutcome::Timeout => write!(f, "timeout"),
        }
    }
}

/// Queries both providers concurrently and returns whichever record arrives
/// first, or `Timeout` once `config.timeout` elapses.
///
/// The losing fetcher is not cancelled, it keeps running on the runtime and
/// its result is dropped.
pub async fn race(cep: &Cep, config: &Config) -> RaceOutcome {
    info!("Looking up CEP {}", cep);

    let (brasil_api_tx, brasil_api_rx) = oneshot::channel::<BrasilApiAddress>();
    let (via_cep_tx, via_cep_rx) = oneshot::channel::<ViaCepAddress>();

    spawn_fetcher(
        brasil_api::LABEL,
        brasil_api::url(&config.brasil_api_url, cep),
        brasil_api_tx,
    );
    spawn_fetcher(
        via_cep::LABEL,
        via_cep::url(&config.via_cep_url, cep),
        via_cep_tx,
    );

    let brasil_api = delivered(brasil_api_rx).fuse();
    let via_cep = delivered(via_cep_rx).fuse();
    let deadline = actix_rt::time::sleep(config.timeout).fuse();
    pin_mut!(brasil_api, via_cep, deadline);

    let outcome = select! {
        address = brasil_api => RaceOutcome::BrasilApi(address),
        address = via_cep => RaceOutcome::ViaCep(address),
        () = deadline => RaceOutcome::Timeout,
    };
    debug!("Race settled: {:?}", outcome);

    outcome
}

// A fetcher that failed drops its sender without a value; treat it as one
// that never answers so only the sibling or the deadline can settle the race.
async fn delivered<T>(receiver: oneshot::Receiver<T>) -> T {
    match receiver.await {
        Ok(record) => record,
        Err(oneshot::Canceled) => future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_display_brasil_api() {
        let outcome = RaceOutcome::BrasilApi(BrasilApiAddress {
            cep: "01310100".to_string(),
            state: "SP".to_string(),
            city: "São Paulo".to_string(),
            neighborhood: "Bela Vista".to_string(),
            street: "Avenida Paulista".to_string(),
            service: "open-cep".to_string(),
        });
        assert_eq!(
            outcome.to_string(),
            "Brasil API response:\n{01310100 SP São Paulo Bela Vista Avenida Paulista open-cep}"
        );
    }

    #[test]
    fn test_display_via_cep() {
        let outcome = RaceOutcome::ViaCep(ViaCepAddress {
            cep: "01310-100".to_string(),
            uf: "SP".to_string(),
            ..Default::default()
        });
        assert_eq!(outcome.to_string(), "Via CEP response:\n{01310-100     SP    }");
    }

    #[test]
    fn test_display_timeout() {
        assert_eq!(RaceOutcome::Timeout.to_string(), "timeout");
    }

    #[actix_rt::test]
    async fn test_delivered_failed_sender_never_resolves() {
        let (tx, rx) = oneshot::channel::<u8>();
        drop(tx);
        let result = actix_rt::time::timeout(Duration::from_millis(50), delivered(rx)).await;
        assert!(result.is_err());
    }

    #[actix_rt::test]
    async fn test_delivered_value() {
        let (tx, rx) = oneshot::channel::<u8>();
        tx.send(7).unwrap();
        assert_eq!(delivered(rx).await, 7);
    }
}
