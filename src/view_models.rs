/// One row of the results view: the question, what the user picked,
/// and what was right.
#[derive(Clone, Debug)]
pub struct ResultRow {
    pub number: usize,
    pub question: String,
    pub selected: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Formats seconds as `m:ss` for the timer readout.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_zero_padded_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(605), "10:05");
    }
}
