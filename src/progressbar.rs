use indicatif::{ProgressBar, ProgressStyle};

pub fn new(len: usize) -> ProgressBar {
    ProgressBar::new(len as u64).with_style(style())
}

pub fn style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:.bold.dim} {spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
}
