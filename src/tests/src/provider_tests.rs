//! Tests for provider resolution against unreachable networks.

use bridge::{resolve_base_chain_provider, resolve_layer2_provider, Endpoints, NetworkEndpoints};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use tracing::Level;

/// Collects everything the subscriber writes.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn error_lines(&self) -> usize {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .filter(|line| line.contains(" ERROR "))
            .count()
    }
}

/// Runs `f` on a fresh runtime with a capturing subscriber installed.
fn with_captured_logs<T>(f: impl FnOnce(&Runtime) -> T) -> (T, CapturedLogs) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .finish();

    let rt = Runtime::new().unwrap();
    let result = tracing::subscriber::with_default(subscriber, || f(&rt));
    (result, logs)
}

fn unreachable_endpoints() -> Endpoints {
    let mut networks = BTreeMap::new();
    networks.insert(
        "unreachable".to_string(),
        NetworkEndpoints {
            layer2: Some("http://127.0.0.1:1".to_string()),
            base_chain: Some("http://127.0.0.1:1".to_string()),
        },
    );
    Endpoints {
        networks,
        request_timeout_secs: 5,
    }
}

/// Tests that an unreachable layer-2 network resolves to none with one error.
#[test]
fn test_unreachable_layer2_logs_one_error() {
    let endpoints = unreachable_endpoints();
    let (provider, logs) =
        with_captured_logs(|rt| rt.block_on(resolve_layer2_provider(&endpoints, "unreachable")));

    assert!(provider.is_none());
    assert_eq!(logs.error_lines(), 1);
}

/// Tests that an unreachable base chain resolves to none with one error.
#[test]
fn test_unreachable_base_chain_logs_one_error() {
    let endpoints = unreachable_endpoints();
    let (provider, logs) =
        with_captured_logs(|rt| rt.block_on(resolve_base_chain_provider(&endpoints, "unreachable")));

    assert!(provider.is_none());
    assert_eq!(logs.error_lines(), 1);
}

/// Tests that an unknown network name resolves to none with one error.
#[test]
fn test_unknown_network_logs_one_error() {
    let endpoints = Endpoints::default();
    let (provider, logs) =
        with_captured_logs(|rt| rt.block_on(resolve_layer2_provider(&endpoints, "no-such-network")));

    assert!(provider.is_none());
    assert_eq!(logs.error_lines(), 1);
}
