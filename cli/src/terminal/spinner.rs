use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

pub fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb
}

/// Shows the spinner with `message` until [`stop`] is called.
pub fn start(message: String) {
    let pb = get_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(TICK_INTERVAL);
}

pub fn stop() {
    get_spinner().finish_and_clear();
}

/// Runs `f` with the spinner temporarily hidden, so terminal output does not
/// tear the bar.
pub fn suspend<F: FnOnce() -> R, R>(f: F) -> R {
    get_spinner().suspend(f)
}

/// Terminal stream written around the spinner: results on stdout, logs on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerWriter {
    Stdout,
    Stderr,
}

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        suspend(|| match self {
            Self::Stdout => std::io::stdout().lock().write_all(buf),
            Self::Stderr => std::io::stderr().lock().write_all(buf),
        })?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout => std::io::stdout().flush(),
            Self::Stderr => std::io::stderr().flush(),
        }
    }
}
