use chrono::NaiveDateTime;
use thiserror::Error;

/// APIが受け付ける時刻形式。秒は省略される場合がある。
const WIRE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// 時刻文字列を解釈できなかったことを表すエラー。
#[derive(Debug, Error)]
#[error("Failed to parse timestamp: {value:?}")]
pub struct TimestampError {
    pub value: String,
}

/// datetime-local形式(`YYYY-MM-DDTHH:MM`)をAPIの形式(`YYYY-MM-DD HH:MM`)に変換する。
///
/// 区切り文字を置き換えるだけで、値の妥当性は確認しない。
pub fn to_wire(local: &str) -> String {
    local.replacen('T', " ", 1)
}

/// APIの形式をdatetime-local形式に変換する。
pub fn to_datetime_local(wire: &str) -> String {
    wire.replacen(' ', "T", 1)
}

/// APIの時刻文字列をパースする。
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = value.trim();
    WIRE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| TimestampError {
            value: value.to_string(),
        })
}

/// 開始時刻と終了時刻の差を`{H}h {M}m`形式で返す。
///
/// 終了時刻が開始時刻より前でも絶対値で計算する。1分未満は切り捨てる。
pub fn calculate_time_spent(start_time: &str, end_time: &str) -> Result<String, TimestampError> {
    let start = parse_timestamp(start_time)?;
    let end = parse_timestamp(end_time)?;
    let seconds = (end - start).num_seconds().abs();
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    Ok(format!("{}h {}m", hours, minutes))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{calculate_time_spent, parse_timestamp, to_datetime_local, to_wire};

    #[rstest]
    #[case::without_seconds("2024-01-01T09:00", "2024-01-01 09:00")]
    #[case::with_seconds("2024-01-01T09:00:30", "2024-01-01 09:00:30")]
    #[case::empty("", "")]
    #[case::no_separator("garbage", "garbage")]
    fn test_to_wire(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_wire(input), expected);
    }

    #[test]
    fn test_to_datetime_local() {
        assert_eq!(
            to_datetime_local("2024-01-01 09:00:00"),
            "2024-01-01T09:00:00"
        );
    }

    /// datetime-local形式からAPIの形式に変換し、元に戻せることを確認する。
    #[test]
    fn test_round_trip() {
        let input = "2024-01-01T09:00";

        assert_eq!(to_datetime_local(&to_wire(input)), input);
    }

    #[rstest]
    #[case::seconds("2024-01-01 09:00:00")]
    #[case::minutes("2024-01-01 09:00")]
    #[case::local("2024-01-01T09:00")]
    fn test_parse_timestamp(#[case] input: &str) {
        let parsed = parse_timestamp(input).unwrap();

        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2024-01-01 09:00");
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        let err = parse_timestamp("yesterday").unwrap_err();

        assert_eq!(err.value, "yesterday");
    }

    #[rstest]
    #[case::hour_and_half("2024-01-01 09:00:00", "2024-01-01 10:30:00", "1h 30m")]
    #[case::zero("2024-01-01 09:00:00", "2024-01-01 09:00:00", "0h 0m")]
    #[case::seconds_truncated("2024-01-01 09:00:00", "2024-01-01 09:01:59", "0h 1m")]
    #[case::overnight("2024-01-01 22:15", "2024-01-02 01:00", "2h 45m")]
    #[case::over_a_day("2024-01-01 09:00", "2024-01-03 10:05", "49h 5m")]
    fn test_calculate_time_spent(#[case] start: &str, #[case] end: &str, #[case] expected: &str) {
        assert_eq!(calculate_time_spent(start, end).unwrap(), expected);
    }

    /// 終了時刻が開始時刻より前の場合は、入れ替えた場合と同じ結果になることを確認する。
    #[test]
    fn test_calculate_time_spent_is_symmetric() {
        let a = "2024-01-01 09:00:00";
        let b = "2024-01-01 10:30:00";

        assert_eq!(
            calculate_time_spent(b, a).unwrap(),
            calculate_time_spent(a, b).unwrap()
        );
    }

    #[test]
    fn test_calculate_time_spent_invalid() {
        assert!(calculate_time_spent("2024-01-01 09:00", "").is_err());
    }
}
