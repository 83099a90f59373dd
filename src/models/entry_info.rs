use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// 엔트리 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 디렉토리
    Directory,
    /// 일반 파일
    File,
    /// 심볼릭 링크 (재귀 복사/삭제 시 따라가지 않음)
    Symlink,
}

impl EntryKind {
    /// 링크 자체 메타데이터로 종류 판단
    pub fn from_metadata(metadata: &Metadata) -> Self {
        if metadata.file_type().is_symlink() {
            EntryKind::Symlink
        } else if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }

    /// 속성 창 표시용 이름
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Directory => "Folder",
            EntryKind::File => "File",
            EntryKind::Symlink => "Symlink",
        }
    }
}

/// 파일 시스템 엔트리 정보
///
/// 요청 시점에 provider가 만들어 주며, 한 요청을 넘어서 캐시하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// 절대 경로
    pub path: PathBuf,
    /// 파일/디렉토리 이름
    pub name: String,
    /// 엔트리 종류
    pub kind: EntryKind,
    /// 바이트 단위 크기 (디렉토리는 0)
    pub size: u64,
    /// 수정 시간
    pub modified: SystemTime,
}

impl EntryInfo {
    /// 경로와 메타데이터로 엔트리 생성
    pub fn from_metadata(path: &Path, metadata: &Metadata) -> Self {
        let kind = EntryKind::from_metadata(metadata);
        let size = match kind {
            EntryKind::Directory => 0,
            _ => metadata.len(),
        };
        Self {
            path: path.to_path_buf(),
            name: crate::utils::path::entry_name(path),
            kind,
            size,
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }
}
