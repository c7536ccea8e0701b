//! Input validation for dialog fields

use once_cell::sync::Lazy;
use regex::Regex;

static ACCOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)+$")
        .expect("account pattern is valid")
});

/// Maximum length of nicks, aliases and personal messages
pub const MAX_TEXT_LEN: usize = 256;

/// Validates a contact account (`user@domain.tld`)
pub fn validate_account(account: &str) -> Result<(), String> {
    let account = account.trim();
    if account.is_empty() {
        return Err("Account cannot be empty".to_string());
    }

    if account.len() > 254 {
        return Err("Account too long (max 254 characters)".to_string());
    }

    if !ACCOUNT_RE.is_match(account) {
        return Err(format!("'{}' is not a valid account", account));
    }

    Ok(())
}

/// Validates a contact group name
pub fn validate_group_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Group name cannot be empty".to_string());
    }

    if name.chars().count() > 64 {
        return Err("Group name too long (max 64 characters)".to_string());
    }

    if name.contains(|c: char| c.is_control()) {
        return Err("Group name contains invalid characters".to_string());
    }

    Ok(())
}

/// Validates free text shown to contacts (nick, alias, personal message).
/// Empty text is allowed.
pub fn validate_display_text(text: &str) -> Result<(), String> {
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(format!("Text too long (max {} characters)", MAX_TEXT_LEN));
    }

    if text.contains('\r') || text.contains('\n') {
        return Err("Text cannot contain newline characters".to_string());
    }

    Ok(())
}

/// Validates a proxy port typed as text
pub fn validate_port(port: &str) -> Result<u16, String> {
    let port = port.trim();
    if port.is_empty() {
        return Err("Port cannot be empty".to_string());
    }

    let port_num = port
        .parse::<u16>()
        .map_err(|_| format!("Invalid port number: {}", port))?;

    if port_num == 0 {
        return Err("Port number must be greater than 0".to_string());
    }

    Ok(port_num)
}

/// Validates a proxy host name
pub fn validate_host(host: &str) -> Result<(), String> {
    let host = host.trim();
    if host.is_empty() {
        return Err("Hostname cannot be empty".to_string());
    }

    if host.contains(|c: char| c.is_whitespace() || c == '/' || c == ':') {
        return Err("Hostname contains invalid characters".to_string());
    }

    Ok(())
}

/// Strip characters that cannot appear in display text
pub fn sanitize_display_text(text: &str) -> String {
    text.chars()
        .filter(|&c| c != '\r' && c != '\n' && c != '\0')
        .take(MAX_TEXT_LEN)
        .collect()
}
