//! Terminal progress bars fed by makemkvcon progress updates

use crate::robot::ProgressHandler;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::trace;

const BAR_TEMPLATE: &str = "{msg} {wide_bar:.cyan/blue} {percent:>3}% {eta}";

/// Shows one bar per progress title.
///
/// When the title changes the previous bar is completed and cleared, so the
/// terminal holds at most one bar.
#[derive(Debug)]
pub struct ProgressParser {
    description: Option<String>,
    bar: Option<ProgressBar>,
    visible: bool,
}

impl Default for ProgressParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressParser {
    pub fn new() -> Self {
        ProgressParser {
            description: None,
            bar: None,
            visible: true,
        }
    }

    /// Track progress without drawing anything
    pub fn hidden() -> Self {
        ProgressParser {
            description: None,
            bar: None,
            visible: false,
        }
    }

    /// Title of the bar currently shown
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Position and length of the current bar
    pub fn position(&self) -> Option<(u64, u64)> {
        self.bar
            .as_ref()
            .map(|bar| (bar.position(), bar.length().unwrap_or(0)))
    }

    pub fn parse_progress(&mut self, description: &str, progress: u32, max: u32) {
        if self.description.as_deref() == Some(description) {
            if let Some(bar) = &self.bar {
                if bar.length() != Some(u64::from(max)) {
                    bar.set_length(u64::from(max));
                }
                bar.set_position(u64::from(progress));
            }
            return;
        }

        self.finish_current();
        trace!("📊 New progress bar: {description}");
        let bar = self.new_bar(max);
        bar.set_message(description.to_string());
        bar.set_position(u64::from(progress));
        bar.reset_eta();
        self.description = Some(description.to_string());
        self.bar = Some(bar);
    }

    /// Complete and remove the current bar
    pub fn finish(&mut self) {
        self.finish_current();
        self.description = None;
    }

    fn finish_current(&mut self) {
        if let Some(bar) = self.bar.take() {
            if let Some(len) = bar.length() {
                bar.set_position(len);
            }
            bar.finish_and_clear();
        }
    }

    fn new_bar(&self, max: u32) -> ProgressBar {
        let bar = ProgressBar::with_draw_target(
            Some(u64::from(max)),
            if self.visible {
                ProgressDrawTarget::stderr()
            } else {
                ProgressDrawTarget::hidden()
            },
        );
        bar.set_style(
            ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    }
}

impl ProgressHandler for ProgressParser {
    fn progress(&mut self, title: &str, current: u32, max: u32) {
        self.parse_progress(title, current, max);
    }
}

impl Drop for ProgressParser {
    fn drop(&mut self) {
        self.finish_current();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_description_updates_bar() {
        let mut parser = ProgressParser::hidden();
        parser.parse_progress("Saving to MKV file", 0, 65536);
        parser.parse_progress("Saving to MKV file", 1024, 65536);
        assert_eq!(parser.description(), Some("Saving to MKV file"));
        assert_eq!(parser.position(), Some((1024, 65536)));
    }

    #[test]
    fn test_new_description_replaces_bar() {
        let mut parser = ProgressParser::hidden();
        parser.parse_progress("Scanning CD-ROM devices", 65536, 65536);
        parser.parse_progress("Processing titles", 12, 65536);
        assert_eq!(parser.description(), Some("Processing titles"));
        assert_eq!(parser.position(), Some((12, 65536)));
    }

    #[test]
    fn test_finish_clears() {
        let mut parser = ProgressParser::hidden();
        parser.parse_progress("Analyzing seamless segments", 5, 10);
        parser.finish();
        assert_eq!(parser.description(), None);
        assert_eq!(parser.position(), None);
    }

    #[test]
    fn test_hidden_starts_empty() {
        let parser = ProgressParser::hidden();
        assert!(!parser.visible);
        assert_eq!(parser.description(), None);
        assert_eq!(parser.position(), None);
    }

    #[test]
    fn test_as_progress_handler() {
        let mut parser = ProgressParser::hidden();
        let handler: &mut dyn ProgressHandler = &mut parser;
        handler.progress("Opening disc", 3, 4);
        assert_eq!(parser.position(), Some((3, 4)));
    }
}
