use crate::models::entry_info::EntryInfo;
use crate::utils::error::{PaneError, Result};
use std::fs;
use std::path::Path;

/// 파일 시스템 접근 계층
///
/// 단일 엔트리 수준의 원시 연산만 제공합니다. 재귀 복사/삭제는
/// `TransferEngine`이 이 연산들을 조합해 구현합니다.
pub trait FileSystemProvider {
    /// 디렉토리의 직계 엔트리 목록 (`.`/`..` 제외, 순서 보장 없음)
    fn list_entries(&self, path: &Path) -> Result<Vec<EntryInfo>>;

    /// 경로 메타데이터 (심볼릭 링크는 따라가지 않음)
    fn stat(&self, path: &Path) -> Result<EntryInfo>;

    /// 링크를 따라갔을 때 디렉토리인지 여부 (탐색용)
    fn is_dir(&self, path: &Path) -> bool;

    /// 경로 존재 여부 (깨진 심볼릭 링크도 존재하는 것으로 간주)
    fn exists(&self, path: &Path) -> bool;

    /// 디렉토리 하나 생성 (이미 있으면 `FileExists`)
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// 중간 경로를 포함해 디렉토리 생성 (이미 있으면 성공)
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// 파일 또는 심볼릭 링크 삭제
    fn remove_file(&self, path: &Path) -> Result<()>;

    /// 빈 디렉토리 삭제
    fn remove_dir(&self, path: &Path) -> Result<()>;

    /// 파일 내용 복사, 복사된 바이트 수 반환
    fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64>;

    /// 이름 변경 (대상이 이미 있으면 `FileExists`)
    fn rename_path(&self, src: &Path, dest: &Path) -> Result<()>;
}

/// 로컬 파일 시스템 (std::fs)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystemProvider for LocalFileSystem {
    fn list_entries(&self, path: &Path) -> Result<Vec<EntryInfo>> {
        // 1. 디렉토리 여부 확인
        let metadata = fs::metadata(path).map_err(|e| PaneError::classify(e, path, PaneError::Io))?;
        if !metadata.is_dir() {
            return Err(PaneError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        // 2. 디렉토리 읽기
        let read_dir = fs::read_dir(path).map_err(|e| PaneError::classify(e, path, PaneError::Io))?;

        // 3. 각 엔트리의 링크 자체 메타데이터로 정보 생성
        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(PaneError::Io)?;
            let entry_path = entry.path();
            let link_metadata = fs::symlink_metadata(&entry_path)
                .map_err(|e| PaneError::classify(e, &entry_path, PaneError::Io))?;
            entries.push(EntryInfo::from_metadata(&entry_path, &link_metadata));
        }

        Ok(entries)
    }

    fn stat(&self, path: &Path) -> Result<EntryInfo> {
        let metadata =
            fs::symlink_metadata(path).map_err(|e| PaneError::classify(e, path, PaneError::Io))?;
        Ok(EntryInfo::from_metadata(path, &metadata))
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_dir())
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        if self.exists(path) {
            return Err(PaneError::FileExists {
                path: path.to_path_buf(),
            });
        }

        fs::create_dir(path).map_err(|e| {
            PaneError::classify(e, path, |e| PaneError::CreateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| {
            PaneError::classify(e, path, |e| PaneError::CreateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|e| {
            PaneError::classify(e, path, |e| PaneError::DeleteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })
    }

    fn remove_dir(&self, path: &Path) -> Result<()> {
        fs::remove_dir(path).map_err(|e| {
            PaneError::classify(e, path, |e| PaneError::DeleteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64> {
        // 소스와 대상이 동일하면 fs::copy가 파일을 비워버림
        if src == dest {
            return Err(PaneError::InvalidOperation {
                reason: format!("source and destination are the same: {}", src.display()),
            });
        }

        if !self.exists(src) {
            return Err(PaneError::PathNotFound {
                path: src.to_path_buf(),
            });
        }

        // 심볼릭 링크는 대상 내용이 아니라 링크 자체를 복제
        #[cfg(unix)]
        if fs::symlink_metadata(src).is_ok_and(|m| m.file_type().is_symlink()) {
            let target = fs::read_link(src).map_err(PaneError::Io)?;
            return std::os::unix::fs::symlink(&target, dest)
                .map(|_| 0)
                .map_err(|e| PaneError::CopyFailed {
                    src: src.to_path_buf(),
                    dest: dest.to_path_buf(),
                    reason: e.to_string(),
                });
        }

        fs::copy(src, dest).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                PaneError::PermissionDenied {
                    path: dest.to_path_buf(),
                }
            } else {
                PaneError::CopyFailed {
                    src: src.to_path_buf(),
                    dest: dest.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        })
    }

    fn rename_path(&self, src: &Path, dest: &Path) -> Result<()> {
        if !self.exists(src) {
            return Err(PaneError::PathNotFound {
                path: src.to_path_buf(),
            });
        }

        if self.exists(dest) {
            return Err(PaneError::FileExists {
                path: dest.to_path_buf(),
            });
        }

        fs::rename(src, dest).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                PaneError::PermissionDenied {
                    path: src.to_path_buf(),
                }
            } else {
                PaneError::RenameFailed {
                    src: src.to_path_buf(),
                    dest: dest.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry_info::EntryKind;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[cfg(unix)]
    use std::os::unix::fs as unix_fs;

    #[test]
    fn test_list_entries() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "aaa").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let mut entries = provider.list_entries(temp.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.txt");
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[0].size, 3);
        assert_eq!(entries[1].name, "sub");
        assert!(entries[1].is_directory());
    }

    #[test]
    fn test_list_nonexistent_directory() {
        let provider = LocalFileSystem::new();
        let result = provider.list_entries(&PathBuf::from("/nonexistent/path/12345"));

        match result {
            Err(PaneError::PathNotFound { .. }) => {}
            other => panic!("Expected PathNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_entries_on_file_is_not_a_directory() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        match provider.list_entries(&file) {
            Err(PaneError::NotADirectory { path }) => assert_eq!(path, file),
            other => panic!("Expected NotADirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_stat_missing_path() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("ghost");

        assert!(!provider.exists(&missing));
        match provider.stat(&missing) {
            Err(PaneError::PathNotFound { path }) => assert_eq!(path, missing),
            other => panic!("Expected PathNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_create_dir() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        let new_dir = temp.path().join("new_folder");

        assert!(provider.create_dir(&new_dir).is_ok());
        assert!(new_dir.is_dir());

        // 이미 존재하면 에러
        match provider.create_dir(&new_dir) {
            Err(PaneError::FileExists { .. }) => {}
            other => panic!("Expected FileExists error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        let deep = temp.path().join("a").join("b").join("c");

        provider.create_dir_all(&deep).unwrap();
        provider.create_dir_all(&deep).unwrap();
        assert!(deep.is_dir());
    }

    #[test]
    fn test_rename_path() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();

        let src = temp.path().join("old.txt");
        let dest = temp.path().join("new.txt");
        fs::write(&src, "test").unwrap();

        assert!(provider.rename_path(&src, &dest).is_ok());
        assert!(!src.exists());
        assert!(dest.exists());

        // 이미 존재하는 대상
        let src2 = temp.path().join("another.txt");
        fs::write(&src2, "other").unwrap();
        match provider.rename_path(&src2, &dest) {
            Err(PaneError::FileExists { .. }) => {}
            other => panic!("Expected FileExists error, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&dest).unwrap(), "test");
    }

    #[test]
    fn test_copy_file_same_path_is_rejected() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("keep.txt");
        fs::write(&file, "precious").unwrap();

        assert!(matches!(
            provider.copy_file(&file, &file),
            Err(PaneError::InvalidOperation { .. })
        ));
        assert_eq!(fs::read_to_string(&file).unwrap(), "precious");
    }

    #[test]
    fn test_copy_file_missing_source() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        let result = provider.copy_file(&temp.path().join("nope"), &temp.path().join("dst"));
        assert!(matches!(result, Err(PaneError::PathNotFound { .. })));
    }

    #[test]
    fn test_remove_dir_requires_empty() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("full");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("f"), "x").unwrap();

        assert!(provider.remove_dir(&dir).is_err());
        provider.remove_file(&dir.join("f")).unwrap();
        provider.remove_dir(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_list_entries_reports_symlink_kind() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target.txt");
        let link = temp.path().join("target_link");

        fs::write(&target, "link target").unwrap();
        unix_fs::symlink(&target, &link).unwrap();

        let entries = provider.list_entries(temp.path()).unwrap();
        let symlink_entry = entries
            .iter()
            .find(|entry| entry.name == "target_link")
            .expect("symlink entry not found");
        assert_eq!(symlink_entry.kind, EntryKind::Symlink);
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_file_recreates_symlink() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        let target_dir = temp.path().join("target_dir");
        let link = temp.path().join("dir_link");
        let copied = temp.path().join("dir_link_copy");
        fs::create_dir(&target_dir).unwrap();
        unix_fs::symlink(&target_dir, &link).unwrap();

        assert_eq!(provider.copy_file(&link, &copied).unwrap(), 0);
        assert!(fs::symlink_metadata(&copied).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&copied).unwrap(), target_dir);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_exists() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("dangling");
        unix_fs::symlink(temp.path().join("missing"), &link).unwrap();

        assert!(provider.exists(&link));
        provider.remove_file(&link).unwrap();
        assert!(!provider.exists(&link));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_dir_follows_links_but_stat_does_not() {
        let provider = LocalFileSystem::new();
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real");
        fs::create_dir(&real).unwrap();
        let link = temp.path().join("link");
        unix_fs::symlink(&real, &link).unwrap();
        fs::write(temp.path().join("plain.txt"), "p").unwrap();

        assert!(provider.is_dir(&real));
        assert!(provider.is_dir(&link));
        assert!(provider.stat(&link).unwrap().is_symlink());
        assert!(!provider.is_dir(&temp.path().join("plain.txt")));
        assert!(!provider.is_dir(&temp.path().join("missing")));
    }
}
