use colored::Colorize;

use crate::safe_truncate;

const MAX_BODY_CHARS: usize = 2000;

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S%.3f").to_string()
}

/// Log an outbound request (stderr, verbose only)
pub fn log_request(method: &str, url: &str, verbose: bool) {
    if !verbose {
        return;
    }

    eprintln!("\n{}", "═".repeat(60).bright_cyan());
    eprintln!("{} {}", "🔍 HTTP REQUEST".bright_cyan().bold(), timestamp().bright_black());
    eprintln!("{}: {} {}", "Request".bright_yellow(), method.bold(), url);

    // Parse URL to show host and port
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        eprintln!("{}: {}", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown"));
        eprintln!("{}: {}", "Port".bright_yellow(), parsed_url.port_or_known_default()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "unknown".to_string()));
    }

    eprintln!("{}", "═".repeat(60).bright_cyan());
}

/// Log a successful response (stderr, verbose only)
pub fn log_response(status: u16, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown");

    eprintln!("\n{}", "═".repeat(60).bright_green());
    eprintln!("{} {}", "📥 HTTP RESPONSE".bright_green().bold(), timestamp().bright_black());
    eprintln!("{}: {} {}", "Status".bright_yellow(), status, reason);

    eprintln!("{}", "Response Body:".bright_yellow());
    // Try to pretty-print JSON, fall back to raw text
    let rendered = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string());

    if rendered.chars().count() > MAX_BODY_CHARS {
        eprintln!("{}", safe_truncate(&rendered, MAX_BODY_CHARS));
        eprintln!("{}", format!("... (truncated, total {} bytes)", rendered.len()).bright_black());
    } else {
        eprintln!("{}", rendered);
    }

    eprintln!("{}", "═".repeat(60).bright_green());
}

/// Log a request that ended in an error (stderr, verbose only)
pub fn log_failure(method: &str, url: &str, message: &str, verbose: bool) {
    if !verbose {
        return;
    }

    eprintln!(
        "{} {} {} {}",
        "❌ HTTP FAILURE".red().bold(),
        timestamp().bright_black(),
        format!("{} {}", method, url).bright_black(),
        message.red()
    );
}
