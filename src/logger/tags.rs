/// Log tags identify the subsystem a message comes from
///
/// Each tag has a debug key used by the `--debug-<key>` command-line flags.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Scanner,
    GoPlus,
    Honeypot,
    QuickIntel,
    Merge,
}

impl LogTag {
    /// Key matched against `--debug-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Scanner => "scanner".to_string(),
            LogTag::GoPlus => "goplus".to_string(),
            LogTag::Honeypot => "honeypot".to_string(),
            LogTag::QuickIntel => "quickintel".to_string(),
            LogTag::Merge => "merge".to_string(),
        }
    }

    /// Provider tags are also enabled by `--debug-api`
    pub fn is_provider(&self) -> bool {
        matches!(self, LogTag::GoPlus | LogTag::Honeypot | LogTag::QuickIntel)
    }

    /// Uncolored label used in the log line prefix
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::Scanner => "SCANNER".to_string(),
            LogTag::GoPlus => "GOPLUS".to_string(),
            LogTag::Honeypot => "HONEYPOT".to_string(),
            LogTag::QuickIntel => "QUICKINTL".to_string(),
            LogTag::Merge => "MERGE".to_string(),
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
