// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loader tests against a local one-shot HTTP responder and temporary files.

use std::io::Write;
use std::time::Duration;

use tempmap::{ChartError, DataLoader, DataSource, LoaderConfig, load_file};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const BODY: &str = r#"{
    "baseTemperature": 8.66,
    "monthlyVariance": [
        { "year": 1753, "month": 1, "variance": -1.366 },
        { "year": 1753, "month": 2, "variance": -2.223 }
    ]
}"#;

/// Serves one canned response and returns the URL to request.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = vec![0_u8; 4096];
        let mut read = 0;
        while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf[read..]).await.expect("read");
            if n == 0 {
                return;
            }
            read += n;
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write");
        socket.shutdown().await.ok();
    });
    format!("http://{addr}/global-temperature.json")
}

fn loader(url: String, timeout: Duration) -> DataLoader {
    DataLoader::new(LoaderConfig {
        source: DataSource::Url(url),
        timeout,
    })
    .expect("client")
}

#[tokio::test]
async fn fetch_parses_and_normalizes_months() {
    let url = serve_once("200 OK", BODY).await;
    let dataset = loader(url, Duration::from_secs(5))
        .load()
        .await
        .expect("dataset");
    assert_eq!(dataset.base_temperature, 8.66);
    let months: Vec<u8> = dataset.records.iter().map(|r| r.month).collect();
    assert_eq!(months, [0, 1]);
}

#[tokio::test]
async fn non_success_status_is_data_unavailable() {
    let url = serve_once("404 Not Found", "{}").await;
    let err = loader(url, Duration::from_secs(5))
        .load()
        .await
        .expect_err("404");
    assert!(matches!(err, ChartError::DataUnavailable(_)), "{err}");
}

#[tokio::test]
async fn wrong_payload_shape_is_data_unavailable() {
    let url = serve_once("200 OK", r#"{"monthlyVariance": "nope"}"#).await;
    let err = loader(url, Duration::from_secs(5))
        .load()
        .await
        .expect_err("bad shape");
    assert!(matches!(err, ChartError::DataUnavailable(_)), "{err}");
}

#[tokio::test]
async fn unresponsive_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.expect("accept");
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let err = loader(format!("http://{addr}/"), Duration::from_millis(200))
        .load()
        .await
        .expect_err("timeout");
    assert!(matches!(err, ChartError::DataUnavailable(_)), "{err}");
    server.abort();
}

#[tokio::test]
async fn connection_refused_is_data_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = loader(format!("http://{addr}/"), Duration::from_secs(2))
        .load()
        .await
        .expect_err("refused");
    assert!(matches!(err, ChartError::DataUnavailable(_)), "{err}");
}

#[tokio::test]
async fn file_source_reads_local_json() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(BODY.as_bytes()).expect("write");

    let dataset = DataLoader::new(LoaderConfig {
        source: DataSource::File(file.path().to_path_buf()),
        timeout: Duration::from_secs(1),
    })
    .expect("loader")
    .load()
    .await
    .expect("dataset");
    assert_eq!(dataset.records.len(), 2);
    assert_eq!(dataset.years(), [1753]);
}

#[tokio::test]
async fn missing_file_is_data_unavailable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_file(&dir.path().join("missing.json"))
        .await
        .expect_err("missing");
    assert!(matches!(err, ChartError::DataUnavailable(_)), "{err}");
}

#[tokio::test]
async fn malformed_record_in_file_is_validation() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(br#"{"baseTemperature": 8.66, "monthlyVariance": [{"year": 1753, "variance": 0.1}]}"#)
        .expect("write");
    let err = load_file(file.path()).await.expect_err("missing month");
    assert!(matches!(err, ChartError::Validation(_)), "{err}");
}
