use chrono::{DateTime, Utc};

const QUERY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub trait UtcFormat {
    /// Formats as accepted by the FDSN event service, e.g. `2024-03-01T12:00:00`.
    fn to_query_time(&self) -> String;

    /// Formats for people, e.g. `2024-03-01 12:00:00 UTC`.
    fn to_display_time(&self) -> String;
}

impl UtcFormat for DateTime<Utc> {
    fn to_query_time(&self) -> String {
        self.format(QUERY_FORMAT).to_string()
    }

    fn to_display_time(&self) -> String {
        self.format(DISPLAY_FORMAT).to_string()
    }
}
