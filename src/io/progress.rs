//! Progress reporting for multi-image and multi-frame runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// A progress bar that costs nothing in quiet mode
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter over `total` units; disabled reporters show nothing
    pub fn new(enabled: bool, total: u64, message: &'static str) -> Self {
        let bar = enabled.then(|| {
            let pb = ProgressBar::new(total);
            pb.set_style(BAR_STYLE.clone());
            pb.set_message(message);
            pb
        });
        Self { bar }
    }

    /// Advance by one unit
    pub fn tick(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
