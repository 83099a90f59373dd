//! 설정 파일 (TOML)
//!
//! `<config_dir>/panesync/config.toml`에서 읽으며, 파일이 없으면 기본값을 사용합니다.

use crate::core::transfer::TransferPolicy;
use crate::utils::error::{PaneError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "panesync";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 시작 디렉토리 (없으면 홈)
    pub start_dir: Option<PathBuf>,
    /// 로그 레벨 ("error" | "warn" | "info" | "debug" | "trace"), RUST_LOG가 우선
    pub log_level: String,
    /// 삭제 전 확인
    pub confirm_delete: bool,
    /// 붙여넣기로 기존 엔트리를 덮어쓰기 전 확인
    pub confirm_overwrite: bool,
    /// 잘라내기-붙여넣기 성공 후 클립보드 비우기
    pub clear_clipboard_after_move: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_dir: None,
            log_level: "info".to_string(),
            confirm_delete: true,
            confirm_overwrite: false,
            clear_clipboard_after_move: false,
        }
    }
}

impl AppConfig {
    /// 기본 설정 파일 경로
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// TOML 파일에서 설정 로드
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PaneError::Config(format!("{}: {}", path.display(), e)))
    }

    /// 기본 위치에서 로드 (파일이 없으면 기본값)
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn transfer_policy(&self) -> TransferPolicy {
        TransferPolicy {
            confirm_overwrite: self.confirm_overwrite,
            clear_after_move: self.clear_clipboard_after_move,
        }
    }
}
