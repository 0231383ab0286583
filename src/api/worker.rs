use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;

use crate::api::client::PlateSource;
use crate::api::error::FetchFailure;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Executes UI commands until the command channel closes.
///
/// Every fetch runs as its own task and reports through `events` as
/// `AppEvent::FetchSettled`. Requests are not cancelled or serialized here;
/// the controller discards outcomes for superseded request ids.
pub async fn run_fetch_worker(
    source: Arc<dyn PlateSource>,
    mut commands: Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::FetchPlate { request } => {
                let source = Arc::clone(&source);
                let events = events.clone();
                tokio::spawn(async move {
                    let outcome = source.fetch_new_plate().await.map_err(|err| {
                        tracing::debug!(
                            request = %request,
                            kind = %err.kind(),
                            error = %err,
                            "Plate fetch returned an error"
                        );
                        FetchFailure::from(&err)
                    });
                    if events
                        .send(AppEvent::FetchSettled { request, outcome })
                        .is_err()
                    {
                        tracing::trace!(request = %request, "Fetch result dropped (UI loop gone)");
                    }
                });
            }
        }
    }
    tracing::debug!("Fetch worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::{FetchError, FetchErrorKind};
    use crate::model::ResultRecord;
    use crate::ui::fetch::RequestId;
    use async_trait::async_trait;
    use std::io;
    use std::sync::Mutex;
    use std::time::Duration;

    struct Unavailable;

    #[async_trait]
    impl PlateSource for Unavailable {
        async fn fetch_new_plate(&self) -> Result<ResultRecord, FetchError> {
            Err(FetchError::HttpStatus {
                status: 503,
                reason: "Service Unavailable".to_string(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if let Ok(mut bytes) = self.0.lock() {
                bytes.extend_from_slice(buf);
            }
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failures_are_reported_without_warning() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let (event_tx, event_rx) = std::sync::mpsc::channel();
        tracing::subscriber::with_default(subscriber, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async {
                let (command_tx, command_rx) = tokio::sync::mpsc::channel(1);
                command_tx
                    .send(UiCommand::FetchPlate {
                        request: RequestId::FIRST,
                    })
                    .await
                    .unwrap();
                drop(command_tx);
                run_fetch_worker(Arc::new(Unavailable), command_rx, event_tx).await;
                // Let the spawned fetch task finish.
                tokio::time::sleep(Duration::from_millis(50)).await;
            });
        });

        match event_rx.try_recv() {
            Ok(AppEvent::FetchSettled { request, outcome }) => {
                assert_eq!(request, RequestId::FIRST);
                let failure = outcome.unwrap_err();
                assert_eq!(failure.kind, FetchErrorKind::HttpStatus);
                assert_eq!(failure.message, "Error: 503 Service Unavailable");
            }
            _ => panic!("expected a settled fetch"),
        }
        let logged = String::from_utf8_lossy(&captured.0.lock().unwrap()).to_string();
        assert!(!logged.contains("WARN"), "worker logged: {logged}");
    }
}
