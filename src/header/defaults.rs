//! Baseline header template and block appending.

const DEFAULT_HEADERS: &str = "accept: application/json\n\
                               accept-encoding: gzip, deflate\n\
                               accept-language: en-US,en;q=0.8\n";

const DEFAULT_CONTENT_TYPE: &str = "content-type: application/json\n";

/// Builds the default header set.
///
/// The `content-type` line is only present when the request carries a
/// payload. `user_agent` is taken as is.
pub fn default_header_set(requires_content_type: bool, user_agent: &str) -> String {
    let mut txt = String::from(DEFAULT_HEADERS);
    if requires_content_type {
        txt.push_str(DEFAULT_CONTENT_TYPE);
    }
    txt.push_str("user-agent: ");
    txt.push_str(user_agent);
    txt
}

/// Appends `defaults` to `raw`, separated by a single newline.
pub fn append_defaults(raw: &str, defaults: &str) -> String {
    let mut headers = String::with_capacity(raw.len() + defaults.len() + 1);
    headers.push_str(raw);
    if !headers.is_empty() && !headers.ends_with('\n') {
        headers.push('\n');
    }
    headers.push_str(defaults);
    headers
}
