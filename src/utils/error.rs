use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 에러 분류
///
/// UI 계층이 사용자에게 보여줄 메시지를 고를 때 사용하는 굵은 분류입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 경로가 조회와 사용 사이에 사라짐
    NotFound,
    /// 생성 대상이 이미 존재
    AlreadyExists,
    /// 권한 없음
    PermissionDenied,
    /// 일반 I/O 실패 (부분 복사/삭제 중단 포함)
    Io,
    /// 비어 있거나 허용되지 않는 이름
    InvalidName,
    /// 수행할 수 없는 작업 (자기 자신으로 붙여넣기 등)
    InvalidOperation,
    /// 사용자가 확인 단계에서 취소
    Cancelled,
}

#[derive(Error, Debug)]
pub enum PaneError {
    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Already exists: {}", path.display())]
    FileExists { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid operation: {reason}")]
    InvalidOperation { reason: String },

    #[error("Clipboard is empty")]
    ClipboardEmpty,

    #[error("No entry selected")]
    NoSelection,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Failed to create {}: {reason}", path.display())]
    CreateFailed { path: PathBuf, reason: String },

    #[error("Failed to copy {} to {}: {reason}", src.display(), dest.display())]
    CopyFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    #[error("Failed to delete {}: {reason}", path.display())]
    DeleteFailed { path: PathBuf, reason: String },

    #[error("Failed to rename {} to {}: {reason}", src.display(), dest.display())]
    RenameFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    #[error("Failed to open {}: {reason}", path.display())]
    ExternalOpenFailed { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl PaneError {
    /// 에러 분류 반환
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaneError::PathNotFound { .. } => ErrorKind::NotFound,
            PaneError::FileExists { .. } => ErrorKind::AlreadyExists,
            PaneError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            PaneError::InvalidName { .. } => ErrorKind::InvalidName,
            PaneError::InvalidOperation { .. }
            | PaneError::ClipboardEmpty
            | PaneError::NoSelection
            | PaneError::NotADirectory { .. } => ErrorKind::InvalidOperation,
            PaneError::Cancelled => ErrorKind::Cancelled,
            PaneError::Io(e) => match e.kind() {
                io::ErrorKind::NotFound => ErrorKind::NotFound,
                io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
                io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
                _ => ErrorKind::Io,
            },
            PaneError::CreateFailed { .. }
            | PaneError::CopyFailed { .. }
            | PaneError::DeleteFailed { .. }
            | PaneError::RenameFailed { .. }
            | PaneError::ExternalOpenFailed { .. }
            | PaneError::Config(_) => ErrorKind::Io,
        }
    }

    /// std I/O 에러를 경로 기반 에러로 분류
    ///
    /// NotFound/AlreadyExists/PermissionDenied는 공통 variant로, 나머지는 `fallback`으로 변환합니다.
    pub(crate) fn classify(
        err: io::Error,
        path: &Path,
        fallback: impl FnOnce(io::Error) -> PaneError,
    ) -> PaneError {
        match err.kind() {
            io::ErrorKind::NotFound => PaneError::PathNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::AlreadyExists => PaneError::FileExists {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => PaneError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => fallback(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, PaneError>;
