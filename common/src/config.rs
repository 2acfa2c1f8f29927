use std::path::PathBuf;

/// Runtime options shared across the drill commands.
pub struct Config {
    /// Number of graded questions per score report window.
    ///
    /// A summary is emitted when exactly this many answers have been
    /// graded, then the window starts over. Must be at least 1.
    pub report_every: u32,

    /// Location of the prefix store document.
    pub store_path: PathBuf,

    /// Suppresses decorative output such as headers and separators.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_every: 10,
            store_path: PathBuf::from("drillr.json"),
            quiet: false,
        }
    }
}
