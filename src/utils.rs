use indicatif::{ProgressBar, ProgressStyle};

/// Creates a spinner for tasks with indeterminate duration, like the
/// source scan. Draws on stderr so stdout stays machine-readable.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb
}

/// Creates a progress bar for tasks with a known step count, like the
/// registry verification pass.
pub fn create_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb
}
