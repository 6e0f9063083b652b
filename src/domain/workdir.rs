//! Working-directory suggestions.
//!
//! Every launch records its working directory against the project; forms
//! later offer the recorded paths as quick-fill options, most recent first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A previously used local or remote path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkdirSuggestion {
    /// Kept as text so remote specs (`host:/path`, `ssh://...`) survive.
    pub path: String,
    #[serde(default)]
    pub remote: bool,
    pub last_used: DateTime<Utc>,
}

impl WorkdirSuggestion {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let remote = is_remote_path(&path);
        Self {
            path,
            remote,
            last_used: Utc::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_used = Utc::now();
    }
}

/// Remote specs are offered for display but never used as a local cwd.
fn is_remote_path(path: &str) -> bool {
    if path.contains("://") {
        return true;
    }
    // scp-style host:path, but not a Windows drive letter
    match path.split_once(':') {
        Some((host, _)) => host.len() > 1 && !host.contains('/') && !host.contains('\\'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_path_detection() {
        assert!(is_remote_path("ssh://dev.example.com/srv/app"));
        assert!(is_remote_path("build-host:/srv/app"));
        assert!(!is_remote_path("/home/user/app"));
        assert!(!is_remote_path("C:\\work\\app"));
        assert!(!is_remote_path("relative/dir"));
    }
}
