// Formatters - 목록/속성 표시용 크기, 날짜 포맷팅

use chrono::{DateTime, Local};
use std::time::SystemTime;

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// 목록 표시용 크기 문자열
///
/// # Examples
/// ```
/// use panesync::utils::formatter::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(1_048_576), "1.0 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    match bytes {
        0 => "0 B".to_string(),
        b if b < KB => format!("{} B", b),
        b if b < MB => format!("{:.1} KB", b as f64 / KB as f64),
        b if b < GB => format!("{:.1} MB", b as f64 / MB as f64),
        b => format!("{:.1} GB", b as f64 / GB as f64),
    }
}

/// 속성 창용 크기 문자열 (항상 KB, 소수점 2자리)
///
/// # Examples
/// ```
/// use panesync::utils::formatter::format_size_kb;
///
/// assert_eq!(format_size_kb(0), "0.00 KB");
/// assert_eq!(format_size_kb(2048), "2.00 KB");
/// ```
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / KB as f64)
}

/// 목록 표시용 날짜 ("YYYY-MM-DD HH:MM", 16자 고정)
pub fn format_date(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M").to_string()
}

/// 속성 창용 날짜 ("YYYY-MM-DD HH:MM:SS", 19자 고정)
pub fn format_date_full(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 개수에 따라 단수/복수형 반환
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
