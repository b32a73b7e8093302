// src/core/net.rs
// HTTP/1.0 GET over TCP (std-only). HTTP/1.0 so the server closes the
// connection at the end and never sends a chunked body.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::{HOST, PORT, TIMEOUT_SECS, USER_AGENT};

/// GET `path` (starting with `/`) from the Last.fm host and return the body.
pub fn http_get(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((HOST, PORT))?;
    s.set_read_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;

    let full = request_path(path);
    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        full, HOST, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}{}", status, HOST, full).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

/// Links on the page may be absolute; the request line wants the path only.
pub fn request_path(link: &str) -> String {
    let l = link.trim();
    let rest = l
        .strip_prefix("http://")
        .or_else(|| l.strip_prefix("https://"));
    match rest {
        Some(r) => match r.find('/') {
            Some(i) => s!(&r[i..]),
            None => s!("/"),
        },
        None if l.starts_with('/') => s!(l),
        None => join!("/", l),
    }
}

#[cfg(test)]
mod tests {
    use super::request_path;

    #[test]
    fn request_path_forms() {
        assert_eq!(request_path("/music/Cher/_/Believe"), "/music/Cher/_/Believe");
        assert_eq!(request_path("http://www.last.fm/music/Cher"), "/music/Cher");
        assert_eq!(request_path("https://www.last.fm"), "/");
        assert_eq!(request_path("music/Cher"), "/music/Cher");
    }
}
