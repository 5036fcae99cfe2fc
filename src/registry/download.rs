// DMR Database Download Module
//
// Downloads the radioid.net user dump (users.json, ~50MB) and stores it at
// the local database path for offline selection. The body is streamed into
// a sibling `.part` file and renamed into place once complete, so a failed
// download never replaces a good database.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{DmrError, Result};

/// radioid.net DMR user database URL
pub const DMR_URL: &str = "https://radioid.net/static/users.json";

/// Limit for establishing the connection
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Limit between two reads; the transfer as a whole is unbounded
const READ_TIMEOUT: Duration = Duration::from_secs(30);

fn build_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .read_timeout(READ_TIMEOUT)
        .build()
        .map_err(|e| DmrError::Download(format!("failed to create HTTP client: {}", e)))
}

/// Temporary file the body is streamed into
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}

/// Download the DMR user database from `url` into `dest`
///
/// Returns the number of bytes written
pub async fn download_database(url: &str, dest: &Path) -> Result<u64> {
    log::info!("Starting DMR database download from {}", url);

    let client = build_client()?;
    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DmrError::Download(e.to_string()))?;

    if !response.status().is_success() {
        return Err(DmrError::DownloadStatus(response.status().as_u16()));
    }

    let part = partial_path(dest);
    let result = stream_to_file(&mut response, &part).await;
    let written = match result {
        Ok(written) => written,
        Err(e) => {
            let _ = fs::remove_file(&part).await;
            return Err(e);
        }
    };

    fs::rename(&part, dest).await.map_err(|e| DmrError::io(dest, e))?;

    log::info!("Downloaded {} bytes to {:?}", written, dest);
    Ok(written)
}

async fn stream_to_file(response: &mut reqwest::Response, path: &Path) -> Result<u64> {
    let mut file = fs::File::create(path).await.map_err(|e| DmrError::io(path, e))?;
    let mut written = 0u64;

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| DmrError::Download(format!("failed to read response: {}", e)))?
    {
        file.write_all(&chunk).await.map_err(|e| DmrError::io(path, e))?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(|e| DmrError::io(path, e))?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    /// Serve one HTTP response, sending the body in chunks with a pause between them
    async fn serve_once(
        status: &'static str,
        chunks: Vec<&'static str>,
        pause: Duration,
    ) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;

            let length: usize = chunks.iter().map(|c| c.len()).sum();
            let head = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status, length
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            for chunk in chunks {
                socket.write_all(chunk.as_bytes()).await.unwrap();
                socket.flush().await.unwrap();
                tokio::time::sleep(pause).await;
            }
        });

        format!("http://{}/users.json", addr)
    }

    #[test]
    fn test_url_format() {
        assert!(DMR_URL.starts_with("https://"));
        assert!(DMR_URL.ends_with(".json"));
    }

    #[test]
    fn test_timeouts_bound_phases_not_the_transfer() {
        assert!(CONNECT_TIMEOUT <= READ_TIMEOUT);
        assert!(build_client().is_ok());
    }

    #[test]
    fn test_partial_path() {
        assert_eq!(
            partial_path(Path::new("/data/users.json")),
            PathBuf::from("/data/users.json.part")
        );
    }

    #[tokio::test]
    async fn test_slow_body_is_downloaded_completely() {
        let url = serve_once(
            "200 OK",
            vec![r#"{"users": ["#, r#"{"radio_id": 2420001}"#, "]}"],
            Duration::from_millis(200),
        )
        .await;
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("users.json");

        let written = download_database(&url, &dest).await.unwrap();

        let body = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(body, r#"{"users": [{"radio_id": 2420001}]}"#);
        assert_eq!(written, body.len() as u64);
        assert!(!partial_path(&dest).exists());
    }

    #[tokio::test]
    async fn test_failed_download_keeps_existing_database() {
        let url = serve_once("500 Internal Server Error", vec!["oops"], Duration::ZERO).await;
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("users.json");
        std::fs::write(&dest, r#"{"users": []}"#).unwrap();

        let result = download_database(&url, &dest).await;

        assert!(matches!(result, Err(DmrError::DownloadStatus(500))));
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), r#"{"users": []}"#);
        assert!(!partial_path(&dest).exists());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_download_error() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("users.json");
        let result = download_database("http://127.0.0.1:9/users.json", &dest).await;
        assert!(matches!(result, Err(DmrError::Download(_))));
        assert!(!dest.exists());
    }
}
