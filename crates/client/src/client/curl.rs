//! curl reproductions of requests, written to the request log.

use reqwest::Method;

/// Render `method url [body]` as a shell-ready curl command.
///
/// Single quotes in the URL or body are escaped for POSIX shells.
pub fn to_curl(method: &Method, url: &str, body: Option<&str>) -> String {
    let mut command = format!("curl -X {} '{}'", method, shell_escape(url));
    if let Some(body) = body.filter(|b| !b.is_empty()) {
        command.push_str(&format!(" -d '{}'", shell_escape(body)));
    }
    command
}

fn shell_escape(value: &str) -> String {
    value.replace('\'', r"'\''")
}
