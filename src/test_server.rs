//! A one-shot HTTP responder on localhost, used to exercise the clients
//! without reaching the real service.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serves exactly one request with `status` (e.g. `"200 OK"`) and `body`.
///
/// Returns the base url to query and a handle yielding the raw request head.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let address = listener.local_addr().expect("test listener address");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept test connection");
        let mut head = Vec::new();
        let mut buffer = [0u8; 1024];
        while !head.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = stream.read(&mut buffer).expect("read test request");
            if read == 0 {
                break;
            }
            head.extend_from_slice(&buffer[..read]);
        }
        stream
            .write_all(response.as_bytes())
            .expect("write test response");
        String::from_utf8_lossy(&head).into_owned()
    });

    (format!("http://{}/nwis/iv/", address), handle)
}

/// The request target (path and query) of a captured request head.
pub fn request_target(head: &str) -> &str {
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
}
