use chrono::{DateTime, NaiveDate, Utc};

/// Wall clock. Date-window composers ask it for "today".
pub trait IClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date used for today/tomorrow/week windows.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
