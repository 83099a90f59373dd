//! 로그 초기화
//!
//! 셸의 표준 출력을 깨끗하게 유지하기 위해 로그는 stderr로 보냅니다.

use tracing_subscriber::EnvFilter;

/// 설정 레벨 문자열을 필터 지시자로 정규화 (알 수 없으면 info)
pub fn level_directive(level: &str) -> &'static str {
    match level.trim().to_lowercase().as_str() {
        "error" => "error",
        "warn" | "warning" => "warn",
        "debug" => "debug",
        "trace" => "trace",
        "off" => "off",
        _ => "info",
    }
}

/// 전역 subscriber 설치
///
/// `RUST_LOG`가 있으면 그것을, 없으면 설정의 레벨을 사용합니다.
/// 이미 설치되어 있으면 아무것도 하지 않습니다.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive("DEBUG"), "debug");
        assert_eq!(level_directive(" warning "), "warn");
        assert_eq!(level_directive("verbose"), "info");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init("warn");
        init("debug");
        tracing::info!("logging initialised");
    }
}
