//! Remote source: one HTTP GET on a worker thread.
//!
//! The terminal loop must keep drawing while the request is in flight, so
//! the blocking client runs on its own thread and reports back over a
//! channel. The loop picks the result up with [`RemoteSource::poll`].

use crate::model::FetchError;
use crate::source::{parse_members, FetchResult};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// In-flight (or finished) fetch of the member list.
#[derive(Debug)]
pub struct RemoteSource {
    url: String,
    rx: Receiver<FetchResult>,
    done: bool,
}

impl RemoteSource {
    /// Start fetching `url` in the background.
    pub fn spawn(url: String, timeout: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker_url = url.clone();
        thread::spawn(move || {
            let result = fetch_members(&worker_url, timeout);
            // Receiver gone means the UI already exited.
            let _ = tx.send(result);
        });
        info!(url = %url, timeout_secs = timeout.as_secs(), "Fetching members");
        Self {
            url,
            rx,
            done: false,
        }
    }

    /// Wrap an existing channel (test seam).
    #[cfg(test)]
    pub(crate) fn from_receiver(url: impl Into<String>, rx: Receiver<FetchResult>) -> Self {
        Self {
            url: url.into(),
            rx,
            done: false,
        }
    }

    /// The URL being fetched.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Non-blocking check for the outcome. `Some` exactly once.
    pub fn poll(&mut self) -> Option<FetchResult> {
        if self.done {
            return None;
        }
        match self.rx.try_recv() {
            Ok(result) => {
                self.done = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.done = true;
                Some(Err(FetchError::WorkerGone))
            }
        }
    }
}

/// Blocking GET of `url`, decoded as a member array.
///
/// # Errors
///
/// - `FetchError::Http` when the request cannot be sent or the body read
/// - `FetchError::Status` for non-2xx responses
/// - `FetchError::Decode` when the body is not a member array
pub fn fetch_members(url: &str, timeout: Duration) -> FetchResult {
    let http_error = |e: reqwest::Error| FetchError::Http {
        url: url.to_string(),
        reason: e.to_string(),
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(http_error)?;

    let response = client.get(url).send().map_err(http_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(http_error)?;
    debug!(bytes = body.len(), "Member payload received");
    parse_members(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Member;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;

    /// Serve exactly one canned HTTP response on a loopback port.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut line = String::new();
                while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                    if line == "\r\n" {
                        break;
                    }
                    line.clear();
                }
                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/members.json", addr)
    }

    #[test]
    fn fetch_members_decodes_success_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"id":"1","name":"Aaron","email":"aaron@x.com","role":"member"}]"#,
        );

        let members = fetch_members(&url, Duration::from_secs(5)).unwrap();

        assert_eq!(
            members,
            vec![Member::new("1", "Aaron", "aaron@x.com", "member")]
        );
    }

    #[test]
    fn fetch_members_maps_error_status() {
        let url = serve_once("HTTP/1.1 404 Not Found", "");

        let result = fetch_members(&url, Duration::from_secs(5));

        assert!(matches!(result, Err(FetchError::Status { status: 404, .. })));
    }

    #[test]
    fn fetch_members_reports_refused_connection() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = fetch_members(&format!("http://{}/m.json", addr), Duration::from_secs(5));

        assert!(matches!(result, Err(FetchError::Http { .. })));
    }

    #[test]
    fn poll_delivers_result_once() {
        let (tx, rx) = mpsc::channel();
        let mut source = RemoteSource::from_receiver("http://test", rx);

        assert!(source.poll().is_none(), "nothing sent yet");
        tx.send(Ok(Vec::new())).unwrap();
        assert!(matches!(source.poll(), Some(Ok(_))));
        assert!(source.poll().is_none());
    }

    #[test]
    fn dropped_worker_reports_worker_gone_once() {
        let (tx, rx) = mpsc::channel::<FetchResult>();
        drop(tx);
        let mut source = RemoteSource::from_receiver("http://test", rx);

        assert!(matches!(source.poll(), Some(Err(FetchError::WorkerGone))));
        assert!(source.poll().is_none());
    }

    #[test]
    fn spawned_fetch_arrives_through_poll() {
        let url = serve_once("HTTP/1.1 200 OK", "[]");
        let mut source = RemoteSource::spawn(url, Duration::from_secs(5));

        let mut outcome = None;
        for _ in 0..200 {
            outcome = source.poll();
            if outcome.is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(25));
        }

        assert!(matches!(outcome, Some(Ok(members)) if members.is_empty()));
    }
}
