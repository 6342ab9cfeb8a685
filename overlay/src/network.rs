use crate::recorded::RecordedFeed;
use crossbeam_channel::{Sender, TrySendError};
use league_common::{config::Bridge, game_packet::GameTickPacket};
use log::{debug, info, trace, warn};
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tokio::time::{MissedTickBehavior, interval};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Bridge request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Bridge answered with status {0}")]
    Status(StatusCode),
    #[error("Packet could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Recording could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("The recording contains no packets")]
    EmptyRecording,
}

/// Source of game tick packets. Each call is one request; the poller never has more than one
/// outstanding at a time.
#[allow(async_fn_in_trait)]
pub trait SnapshotProvider {
    async fn fetch(&mut self) -> Result<GameTickPacket, FetchError>;
}

/// Reads packets from the game bridge over HTTP
pub struct BridgeClient {
    client: Client,
    packet_url: String,
}

impl BridgeClient {
    pub fn new(config: &Bridge) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        let base_url = config.url.trim_end_matches('/');

        Ok(Self {
            client,
            packet_url: format!("{base_url}/game_tick_packet"),
        })
    }

    pub fn packet_url(&self) -> &str {
        &self.packet_url
    }
}

impl SnapshotProvider for BridgeClient {
    async fn fetch(&mut self) -> Result<GameTickPacket, FetchError> {
        let response = self.client.get(&self.packet_url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Where the overlay gets its packets from, picked once at startup
pub enum Feed {
    Bridge(BridgeClient),
    Recorded(RecordedFeed),
}

impl SnapshotProvider for Feed {
    async fn fetch(&mut self) -> Result<GameTickPacket, FetchError> {
        match self {
            Self::Bridge(client) => client.fetch().await,
            Self::Recorded(feed) => feed.fetch().await,
        }
    }
}

/// Requests a packet from `provider` once per `period` and forwards every successful one to `tx`.
///
/// A request is always awaited before the next one is issued. Ticks that fall due while a request
/// is still outstanding are skipped rather than queued, so a slow bridge lowers the packet rate
/// instead of piling up requests. Failed requests are dropped. Returns once the receiving end of
/// `tx` has been dropped.
pub async fn poll_packets<P: SnapshotProvider>(
    mut provider: P,
    period: Duration,
    tx: Sender<GameTickPacket>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut loaded = false;

    loop {
        ticker.tick().await;

        let packet = match provider.fetch().await {
            Ok(packet) => packet,
            Err(e) => {
                debug!("Packet request dropped: {e}");
                continue;
            }
        };

        if !loaded {
            info!("Loaded game tick packet feed");
            loaded = true;
        }

        match tx.try_send(packet) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => trace!("Frontend is behind, packet dropped"),
            Err(TrySendError::Disconnected(_)) => {
                warn!("Frontend stopped receiving packets, polling stopped");
                return;
            }
        }
    }
}

#[tokio::main]
pub async fn networking_thread(tx: Sender<GameTickPacket>, feed: Feed, period: Duration) {
    info!(
        "Networking thread initialized, requesting a packet every {} ms",
        period.as_millis()
    );
    poll_packets(feed, period, tx).await;
}
