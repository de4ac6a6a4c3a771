//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed routes (status, extra headers, body) keyed by request path and
//! records every raw request head so tests can inspect what the client sent.
//! Unknown paths answer 404. Every response closes its connection.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub reason: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
    /// Advertised Content-Length when it should differ from `body.len()`.
    pub content_length: Option<usize>,
}

impl Route {
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            reason: "OK",
            headers: Vec::new(),
            body,
            content_length: None,
        }
    }

    pub fn status(status: u16, reason: &'static str) -> Self {
        Self {
            status,
            reason,
            headers: Vec::new(),
            body: reason.as_bytes().to_vec(),
            content_length: None,
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 302,
            reason: "Found",
            headers: vec![("Location", location.to_string())],
            body: Vec::new(),
            content_length: None,
        }
    }

    /// 200 that promises `advertised` bytes but closes after sending `body`.
    pub fn truncated(body: Vec<u8>, advertised: usize) -> Self {
        Self {
            content_length: Some(advertised),
            ..Self::ok(body)
        }
    }
}

pub struct ImageServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    #[allow(dead_code)]
    requests: Arc<Mutex<Vec<String>>>,
}

impl ImageServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Raw request heads received so far, in arrival order.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> ImageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (p.to_string(), r))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &routes, &log));
        }
    });
    ImageServer {
        base: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut head = Vec::new();
    let mut buf = [0u8; 4096];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&head).into_owned();
    let path = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(request);

    let not_found = Route::status(404, "Not Found");
    let route = routes.get(&path).unwrap_or(&not_found);
    let mut response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.reason,
        route.content_length.unwrap_or(route.body.len())
    );
    for (name, value) in &route.headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&route.body);
}
