//! 클립보드 모델
//!
//! 복사/잘라내기 후 붙여넣기까지 기억해 두는 단일 작업 의도.

use std::path::{Path, PathBuf};

/// 클립보드 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardMode {
    /// 복사
    #[default]
    Copy,
    /// 잘라내기 (붙여넣기 성공 후 원본 삭제)
    Cut,
}

impl ClipboardMode {
    /// 상태 표시줄용 이름
    pub fn name(&self) -> &'static str {
        match self {
            ClipboardMode::Copy => "Copied",
            ClipboardMode::Cut => "Cut",
        }
    }
}

/// 클립보드 상태
///
/// 항목은 최대 하나. 마지막에 기록한 것이 이전 내용을 덮어씁니다.
/// 탐색과 무관하게 유지됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardState {
    source: Option<PathBuf>,
    mode: ClipboardMode,
}

impl ClipboardState {
    /// 빈 클립보드 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 복사 의도 기록 (파일 시스템은 건드리지 않음)
    pub fn copy(&mut self, path: PathBuf) {
        self.source = Some(path);
        self.mode = ClipboardMode::Copy;
    }

    /// 잘라내기 의도 기록
    ///
    /// 원본 삭제는 붙여넣기 시점까지 미룹니다.
    pub fn cut(&mut self, path: PathBuf) {
        self.source = Some(path);
        self.mode = ClipboardMode::Cut;
    }

    pub fn clear(&mut self) {
        self.source = None;
        self.mode = ClipboardMode::Copy;
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn mode(&self) -> ClipboardMode {
        self.mode
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_none()
    }

    pub fn is_cut(&self) -> bool {
        self.source.is_some() && self.mode == ClipboardMode::Cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_starts_empty() {
        let clipboard = ClipboardState::new();
        assert!(clipboard.is_empty());
        assert!(!clipboard.is_cut());
        assert_eq!(clipboard.source(), None);
    }

    #[test]
    fn test_clipboard_last_write_wins() {
        let mut clipboard = ClipboardState::new();
        clipboard.cut(PathBuf::from("/tmp/a"));
        assert!(clipboard.is_cut());

        clipboard.copy(PathBuf::from("/tmp/b"));
        assert_eq!(clipboard.source(), Some(Path::new("/tmp/b")));
        assert_eq!(clipboard.mode(), ClipboardMode::Copy);
        assert!(!clipboard.is_cut());
    }

    #[test]
    fn test_clipboard_clear() {
        let mut clipboard = ClipboardState::new();
        clipboard.cut(PathBuf::from("/tmp/a"));
        clipboard.clear();
        assert!(clipboard.is_empty());
        assert_eq!(clipboard.mode(), ClipboardMode::Copy);
    }

    #[test]
    fn test_mode_name() {
        assert_eq!(ClipboardMode::Copy.name(), "Copied");
        assert_eq!(ClipboardMode::Cut.name(), "Cut");
    }
}
