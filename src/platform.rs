//! Host URL opening.
//!
//! Link rows never open anything themselves; they ask a [`UrlOpener`].
//! [`SystemOpener`] hands URLs to the desktop's launcher.

use std::process::{Command, Stdio};
use thiserror::Error;
use url::Url;

/// URL-opening capability supplied by the host
pub trait UrlOpener {
    /// Whether something on this system can handle `url`
    fn can_open(&self, url: &Url) -> bool;

    /// Open `url` without waiting for the result
    fn open(&self, url: &Url);
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no launcher available on this platform")]
    Unsupported,
    #[error("failed to start {launcher}: {source}")]
    Spawn {
        launcher: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Opens URLs with `xdg-open`, `open` or `start`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn launcher() -> Option<(&'static str, &'static [&'static str])> {
        if cfg!(target_os = "macos") {
            Some(("open", &[]))
        } else if cfg!(target_os = "windows") {
            Some(("cmd", &["/C", "start", ""]))
        } else if cfg!(unix) {
            Some(("xdg-open", &[]))
        } else {
            None
        }
    }

    /// Spawn the launcher for `url`; the child is not awaited
    pub fn spawn(&self, url: &Url) -> Result<(), OpenError> {
        let (launcher, args) = Self::launcher().ok_or(OpenError::Unsupported)?;

        Command::new(launcher)
            .args(args)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| OpenError::Spawn { launcher, source })?;

        Ok(())
    }

    /// Ask the desktop whether a handler is registered for `scheme`
    fn has_scheme_handler(scheme: &str) -> bool {
        if !cfg!(all(unix, not(target_os = "macos"))) {
            return false;
        }

        let output = Command::new("xdg-mime")
            .args(["query", "default", &format!("x-scheme-handler/{scheme}")])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(output) => output.status.success() && !output.stdout.trim_ascii().is_empty(),
            Err(e) => {
                tracing::debug!("xdg-mime unavailable: {}", e);
                false
            }
        }
    }
}

impl UrlOpener for SystemOpener {
    fn can_open(&self, url: &Url) -> bool {
        match url.scheme() {
            "http" | "https" | "mailto" => Self::launcher().is_some(),
            scheme => Self::has_scheme_handler(scheme),
        }
    }

    fn open(&self, url: &Url) {
        if let Err(e) = self.spawn(url) {
            tracing::warn!("Could not open {}: {}", url, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_messages() {
        let err = OpenError::Spawn {
            launcher: "xdg-open",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to start xdg-open: missing");
        assert_eq!(
            OpenError::Unsupported.to_string(),
            "no launcher available on this platform"
        );
    }
}
