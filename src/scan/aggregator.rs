/// Concurrent fan-out over the three providers
///
/// All providers are queried at the same time and the aggregator waits for every
/// one of them. Results arrive in completion order but each carries its slot, so
/// the merge always sees GoPlus, Honeypot.is, QuickIntel in that order.
use super::merge::merge;
use super::provider::{scan_normalized, ScanProvider};
use super::token_info::{TokenInfo, UnifiedTokenInfo};
use crate::apis::{GoPlusClient, HoneypotClient, QuickIntelClient};
use crate::arguments::is_debug_scanner_enabled;
use crate::config::ScannersConfig;
use crate::logger::{self, LogTag};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

pub struct MultiScanner<A, B, C> {
    a: Arc<A>,
    b: Arc<B>,
    c: Arc<C>,
}

/// Production scanner over the three HTTP adapters
pub type TokenScanner = MultiScanner<GoPlusClient, HoneypotClient, QuickIntelClient>;

impl TokenScanner {
    /// Build the three adapters from configuration
    pub fn from_config(config: &ScannersConfig) -> Result<Self, String> {
        let timeout = config.request_timeout_secs;
        Ok(Self::new(
            GoPlusClient::new(config.goplus.clone(), timeout)?,
            HoneypotClient::new(config.honeypot.clone(), timeout)?,
            QuickIntelClient::new(config.quickintel.clone(), timeout)?,
        ))
    }
}

impl<A, B, C> MultiScanner<A, B, C>
where
    A: ScanProvider,
    B: ScanProvider,
    C: ScanProvider,
{
    pub fn new(a: A, b: B, c: C) -> Self {
        Self {
            a: Arc::new(a),
            b: Arc::new(b),
            c: Arc::new(c),
        }
    }

    /// Scan `token` with every provider and merge the worst case
    ///
    /// Never fails: a provider that errors or whose task dies contributes an
    /// empty report.
    pub async fn aggregate(&self, token: &str) -> UnifiedTokenInfo {
        let start = Instant::now();
        let mut tasks: JoinSet<(usize, TokenInfo)> = JoinSet::new();

        spawn_scan(&mut tasks, 0, Arc::clone(&self.a), token);
        spawn_scan(&mut tasks, 1, Arc::clone(&self.b), token);
        spawn_scan(&mut tasks, 2, Arc::clone(&self.c), token);

        let mut slots: [TokenInfo; 3] = Default::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, info)) => {
                    if is_debug_scanner_enabled() {
                        logger::debug(
                            LogTag::Scanner,
                            &format!(
                                "{} finished after {}ms",
                                self.slot_name(slot),
                                start.elapsed().as_millis()
                            ),
                        );
                    }
                    slots[slot] = info;
                }
                Err(e) => {
                    logger::error(
                        LogTag::Scanner,
                        &format!("Provider task failed: {}, using empty report", e),
                    );
                }
            }
        }

        let [a, b, c] = slots;
        let unified = merge(&a, &b, &c);

        match unified.to_json() {
            Ok(json) => logger::debug(LogTag::Merge, &format!("Unified report: {}", json)),
            Err(e) => logger::debug(LogTag::Merge, &e),
        }

        if unified.is_empty() {
            logger::warning(
                LogTag::Scanner,
                &format!("No provider returned data for {}", token),
            );
        } else {
            logger::info(
                LogTag::Scanner,
                &format!(
                    "Scanned {} in {}ms: {} risk flags raised",
                    token,
                    start.elapsed().as_millis(),
                    unified.risk_flag_count()
                ),
            );
        }

        unified
    }

    fn slot_name(&self, slot: usize) -> &str {
        match slot {
            0 => self.a.name(),
            1 => self.b.name(),
            _ => self.c.name(),
        }
    }
}

fn spawn_scan<P>(
    tasks: &mut JoinSet<(usize, TokenInfo)>,
    slot: usize,
    provider: Arc<P>,
    token: &str,
) where
    P: ScanProvider,
{
    let token = token.to_string();
    tasks.spawn(async move { (slot, scan_normalized(provider.as_ref(), &token).await) });
}
