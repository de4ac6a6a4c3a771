//! Browser-like request headers.
//!
//! Some image hosts reject requests that do not look like they come from a
//! desktop browser. None of these headers matter for protocol correctness.

/// Accept header preferring image types.
pub const ACCEPT: &str = "image/webp,image/apng,image/*,*/*;q=0.8";
/// Sent verbatim; libcurl does not decode the body, so it is stored as served.
pub const ACCEPT_ENCODING: &str = "gzip, deflate, br";

/// Header name/value pairs sent with every image GET.
pub fn browser_headers(user_agent: &str) -> Vec<(&'static str, String)> {
    vec![
        ("User-Agent", user_agent.to_string()),
        ("Accept", ACCEPT.to_string()),
        ("Accept-Encoding", ACCEPT_ENCODING.to_string()),
        ("Connection", "keep-alive".to_string()),
        ("Upgrade-Insecure-Requests", "1".to_string()),
    ]
}

/// Build a libcurl header list ("Name: value" lines).
pub(crate) fn header_list(user_agent: &str) -> Result<curl::easy::List, curl::Error> {
    let mut list = curl::easy::List::new();
    for (k, v) in browser_headers(user_agent) {
        list.append(&format!("{}: {}", k, v.trim()))?;
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_browser_headers() {
        let headers = browser_headers("TestAgent/1.0");
        let names: Vec<_> = headers.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec![
                "User-Agent",
                "Accept",
                "Accept-Encoding",
                "Connection",
                "Upgrade-Insecure-Requests"
            ]
        );
        assert_eq!(headers[0].1, "TestAgent/1.0");
        assert_eq!(headers[1].1, "image/webp,image/apng,image/*,*/*;q=0.8");
        assert_eq!(headers[4].1, "1");
    }

    #[test]
    fn header_list_has_one_line_per_header() {
        let list = header_list("UA").unwrap();
        let lines: Vec<String> = list
            .iter()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "User-Agent: UA");
        assert_eq!(lines[3], "Connection: keep-alive");
    }
}
