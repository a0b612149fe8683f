/**
    Observer notified while a normalization pass walks its units.
    Purely cosmetic, nothing it does can affect the produced corpora.
*/
pub trait Progress {
    fn start(&self, total: usize);
    fn advance(&self);
    fn finish(&self);
}

/// Reports nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn start(&self, _total: usize) {}
    fn advance(&self) {}
    fn finish(&self) {}
}

#[cfg(feature = "progress")]
impl Progress for indicatif::ProgressBar {
    fn start(&self, total: usize) {
        self.set_length(total as u64);
        self.set_position(0);
    }

    fn advance(&self) {
        self.inc(1);
    }

    fn finish(&self) {
        self.finish_and_clear();
    }
}

#[cfg(feature = "progress")]
#[test]
fn test_progress_bar_counts_units() {
    let bar = indicatif::ProgressBar::hidden();
    Progress::start(&bar, 3);
    bar.advance();
    bar.advance();

    assert_eq!(bar.length(), Some(3));
    assert_eq!(bar.position(), 2);
}
