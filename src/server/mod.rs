//! Local static file server.
//!
//! [`StaticServer`] wraps a `tiny_http` listener bound to an explicit root
//! directory and runs the request loop on a background thread, so starting
//! the server does not block the caller. The lifecycle is an explicit
//! state machine: Stopped -> Running via [`StaticServer::start`], back via
//! [`StaticServer::stop`].

mod path;
mod response;

use crate::error::{Error, Result};
use crate::{debug, log};
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tiny_http::{Method, Request, Server};

/// Static file server over one root directory.
///
/// The root is fixed at construction and passed to request handling
/// directly; the process working directory is never touched.
pub struct StaticServer {
    root: PathBuf,
    running: Option<Running>,
}

/// Live listener state, present only while Running.
struct Running {
    server: Arc<Server>,
    handle: JoinHandle<()>,
    addr: SocketAddr,
    base_url: String,
}

impl StaticServer {
    /// Create a Stopped server for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            running: None,
        }
    }

    /// Bind `interface:port` and start serving on a background thread.
    ///
    /// Returns the base URL of the listener. Port 0 requests an ephemeral
    /// port; the returned URL carries the port actually bound. Fails with
    /// [`Error::AlreadyRunning`] when called from the Running state and
    /// [`Error::Bind`] when the address cannot be bound.
    pub fn start(&mut self, interface: IpAddr, port: u16) -> Result<String> {
        if let Some(running) = &self.running {
            return Err(Error::AlreadyRunning(running.base_url.clone()));
        }

        let requested = SocketAddr::new(interface, port);
        let server = Server::http(requested).map_err(|e| Error::Bind {
            addr: requested,
            source: io::Error::other(e),
        })?;

        let addr = server.server_addr().to_ip().unwrap_or(requested);
        let base_url = format!("http://{addr}");

        let server = Arc::new(server);
        let handle = thread::spawn({
            let server = Arc::clone(&server);
            let root = self.root.clone();
            move || run_request_loop(&server, &root)
        });

        log!("serve"; "serving {} at {}", self.root.display(), base_url);
        self.running = Some(Running {
            server,
            handle,
            addr,
            base_url: base_url.clone(),
        });
        Ok(base_url)
    }

    /// Unblock the listener, join the request loop, and close the socket.
    ///
    /// No-op when already Stopped.
    pub fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        running.server.unblock();
        let _ = running.handle.join();
        log!("serve"; "stopped");
    }

    /// Base URL of the running listener, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.running.as_ref().map(|r| r.base_url.as_str())
    }

    /// Bound address of the running listener, if any.
    pub fn addr(&self) -> Option<SocketAddr> {
        self.running.as_ref().map(|r| r.addr)
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

impl Drop for StaticServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_request_loop(server: &Server, root: &Path) {
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, root) {
            debug!("serve"; "request error: {e}");
        }
    }
}

/// Handle a single HTTP request.
///
/// Access logging is suppressed unless --verbose is set.
fn handle_request(request: Request, root: &Path) -> anyhow::Result<()> {
    debug!("serve"; "{} {}", request.method(), request.url());

    if !matches!(request.method(), Method::Get | Method::Head) {
        return response::respond_method_not_allowed(request);
    }

    match path::resolve(request.url(), root) {
        Some(file) => response::respond_file(request, &file),
        None => response::respond_not_found(request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{Read, Write};
    use std::net::{Ipv4Addr, TcpStream};

    fn loopback() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    fn http_request(addr: SocketAddr, method: &str, path: &str) -> Vec<u8> {
        let mut stream = TcpStream::connect(addr).unwrap();
        write!(stream, "{method} {path} HTTP/1.0\r\nHost: localhost\r\n\r\n").unwrap();
        let mut response = Vec::new();
        stream.read_to_end(&mut response).unwrap();
        response
    }

    fn status_of(response: &[u8]) -> u16 {
        let line_end = response
            .windows(2)
            .position(|w| w == b"\r\n")
            .expect("status line");
        let line = std::str::from_utf8(&response[..line_end]).unwrap();
        line.split_whitespace().nth(1).unwrap().parse().unwrap()
    }

    fn body_of(response: &[u8]) -> &[u8] {
        let pos = response
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("header terminator");
        &response[pos + 4..]
    }

    #[test]
    fn test_round_trip_and_stop() {
        let dir = tempfile::tempdir().unwrap();
        let content: Vec<u8> = (0u8..10).collect();
        fs::write(dir.path().join("a.bin"), &content).unwrap();

        let mut server = StaticServer::new(dir.path());
        let base = server.start(loopback(), 0).unwrap();
        let addr = server.addr().unwrap();
        assert!(base.starts_with("http://127.0.0.1:"));
        assert_eq!(server.base_url(), Some(base.as_str()));

        let response = http_request(addr, "GET", "/a.bin");
        assert_eq!(status_of(&response), 200);
        assert_eq!(body_of(&response), content.as_slice());

        server.stop();
        assert!(!server.is_running());
        assert!(TcpStream::connect(addr).is_err());
    }

    #[test]
    fn test_not_found_and_head() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("img.png"), b"png bytes").unwrap();

        let mut server = StaticServer::new(dir.path());
        server.start(loopback(), 0).unwrap();
        let addr = server.addr().unwrap();

        let response = http_request(addr, "GET", "/missing.png");
        assert_eq!(status_of(&response), 404);

        let response = http_request(addr, "HEAD", "/img.png");
        assert_eq!(status_of(&response), 200);
        assert!(body_of(&response).is_empty());

        let response = http_request(addr, "POST", "/img.png");
        assert_eq!(status_of(&response), 405);

        server.stop();
    }

    #[test]
    fn test_start_twice_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let mut server = StaticServer::new(dir.path());
        server.start(loopback(), 0).unwrap();

        let err = server.start(loopback(), 0).unwrap_err();
        assert!(matches!(err, Error::AlreadyRunning(_)));
        // The first listener is unaffected by the failed second start.
        assert!(server.is_running());

        server.stop();
    }

    #[test]
    fn test_stop_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut server = StaticServer::new(dir.path());

        // Stop from Stopped is a defined no-op.
        server.stop();

        server.start(loopback(), 0).unwrap();
        server.stop();
        server.stop();
        assert!(!server.is_running());
    }

    #[test]
    fn test_bind_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = StaticServer::new(dir.path());
        first.start(loopback(), 0).unwrap();
        let taken = first.addr().unwrap().port();

        let mut second = StaticServer::new(dir.path());
        let err = second.start(loopback(), taken).unwrap_err();
        assert!(matches!(err, Error::Bind { .. }));

        first.stop();
    }
}
