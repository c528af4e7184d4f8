//! Result aggregation.

use crate::types::Port;
use tokio::sync::mpsc;

/// Drain `results` until every sender is gone, then return the ports sorted.
///
/// Channel closure is the only termination signal; the number of open ports
/// is not known up front. Each port is reported at most once, so no dedup.
pub async fn collect(mut results: mpsc::Receiver<Port>) -> Vec<Port> {
    let mut open = Vec::new();
    while let Some(port) = results.recv().await {
        open.push(port);
    }
    open.sort_unstable();
    open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_collect_sorts_until_closed() {
        let (tx, rx) = mpsc::channel(1);
        let producer = tokio::spawn(async move {
            for p in [443u16, 22, 8080, 80] {
                tx.send(Port::new(p).unwrap()).await.unwrap();
            }
        });

        let open = collect(rx).await;
        producer.await.unwrap();

        let nums: Vec<u16> = open.iter().map(|p| p.as_u16()).collect();
        assert_eq!(nums, vec![22, 80, 443, 8080]);
    }

    #[tokio::test]
    async fn test_collect_empty() {
        let (tx, rx) = mpsc::channel::<Port>(1);
        drop(tx);
        assert!(collect(rx).await.is_empty());
    }
}
