//! Human-readable startup banner written to stdout after a successful bind.

use std::fmt::Write;

use crate::config::TRACKED_VARS;
use crate::routes::home::ENDPOINTS;
use crate::secrets::SecretStatus;

/// Render the banner: base URL, endpoint URLs, and whether each tracked
/// variable is currently set.
pub fn startup_banner<F>(port: u16, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let base = format!("http://localhost:{}", port);
    let mut out = String::new();

    let _ = writeln!(out, "Environment check server running on port {}", port);
    let _ = writeln!(out, "Endpoints:");
    for endpoint in ENDPOINTS.iter() {
        let _ = writeln!(out, "   - {}{}", base, endpoint.path);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Checking environment variables...");
    for var in TRACKED_VARS.iter() {
        let status = SecretStatus::from_value(lookup(var.name).as_deref(), var.preview_len);
        let label = if status.exists() { "Set" } else { "Not set" };
        let _ = writeln!(out, "   {}: {}", var.name, label);
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lists_endpoints() {
        let banner = startup_banner(8080, |_| None);
        assert!(banner.contains("http://localhost:8080/\n"));
        assert!(banner.contains("http://localhost:8080/health"));
        assert!(banner.contains("http://localhost:8080/secrets"));
    }

    #[test]
    fn test_banner_reports_presence() {
        let banner = startup_banner(3000, |name| {
            (name == "GITHUB_TOKEN").then(|| "ghp_x".to_string())
        });
        assert!(banner.contains("ATLAS_CONNECTION_STRING: Not set"));
        assert!(banner.contains("GITHUB_TOKEN: Set"));
    }

    #[test]
    fn test_banner_empty_value_is_not_set() {
        let banner = startup_banner(3000, |_| Some(String::new()));
        assert!(banner.contains("GITHUB_TOKEN: Not set"));
    }
}
