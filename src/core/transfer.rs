//! 파일 작업 엔진 (생성/이름 변경/삭제/붙여넣기)
//!
//! 모든 작업은 호출 스레드에서 동기적으로 끝까지 실행됩니다.
//! 재귀 복사/삭제는 트랜잭션이 아닙니다: 첫 실패에서 멈추고, 이미 처리한
//! 부분은 되돌리지 않습니다.

use crate::models::clipboard::{ClipboardMode, ClipboardState};
use crate::system::filesystem::FileSystemProvider;
use crate::ui::prompt::Prompt;
use crate::utils::error::{PaneError, Result};
use crate::utils::path::{entry_name, is_within, validate_name};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// 덮어쓰기/클립보드 정책
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferPolicy {
    /// 붙여넣기 대상이 이미 있을 때 `Prompt::confirm`으로 확인
    pub confirm_overwrite: bool,
    /// 잘라내기-붙여넣기 성공 후 클립보드 비우기
    pub clear_after_move: bool,
}

/// 복사 통계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferStats {
    /// 생성(또는 재사용)한 디렉토리 수
    pub directories: usize,
    /// 복사한 파일 수
    pub files: usize,
    /// 복사한 바이트 수
    pub bytes: u64,
}

pub struct TransferEngine {
    provider: Rc<dyn FileSystemProvider>,
    policy: TransferPolicy,
}

impl TransferEngine {
    pub fn new(provider: Rc<dyn FileSystemProvider>, policy: TransferPolicy) -> Self {
        Self { provider, policy }
    }

    // === 생성 / 이름 변경 ===

    /// `parent` 아래에 새 디렉토리 생성
    ///
    /// 같은 이름의 엔트리가 있으면 덮어쓰지 않고 `FileExists`.
    pub fn create_directory(&self, parent: &Path, name: &str) -> Result<()> {
        validate_name(name)?;

        let path = parent.join(name);
        if self.provider.exists(&path) {
            return Err(PaneError::FileExists { path });
        }

        self.provider.create_dir(&path)?;
        tracing::info!(path = %path.display(), "directory created");
        Ok(())
    }

    /// 같은 디렉토리 안에서 이름 변경, 새 경로 반환
    ///
    /// 대상 이름이 이미 있으면 `FileExists` (덮어쓰지 않음).
    pub fn rename(&self, path: &Path, new_name: &str) -> Result<PathBuf> {
        validate_name(new_name)?;

        let parent = path.parent().ok_or_else(|| PaneError::InvalidOperation {
            reason: format!("cannot rename {}", path.display()),
        })?;
        let new_path = parent.join(new_name);

        // 사라진 경로는 같은 이름이어도 PathNotFound
        self.provider.stat(path)?;
        if new_path == path {
            return Ok(new_path);
        }

        self.provider.rename_path(path, &new_path)?;
        tracing::info!(
            from = %path.display(),
            to = %new_path.display(),
            "renamed"
        );
        Ok(new_path)
    }

    // === 삭제 ===

    /// 파일은 단일 삭제, 디렉토리는 재귀 삭제
    ///
    /// 첫 실패에서 중단하며 디렉토리가 일부만 삭제된 채 남을 수 있습니다.
    pub fn delete(&self, path: &Path) -> Result<()> {
        let info = self.provider.stat(path)?;

        let result = if info.is_directory() {
            self.remove_tree(path)
        } else {
            self.provider.remove_file(path)
        };

        match &result {
            Ok(()) => tracing::info!(path = %path.display(), "deleted"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "delete aborted"),
        }
        result
    }

    /// 디렉토리 재귀 삭제 (깊이 우선)
    ///
    /// 파일과 심볼릭 링크를 먼저 지우고, 하위 디렉토리를 재귀로 비운 뒤,
    /// 마지막으로 디렉토리 자신을 지웁니다.
    fn remove_tree(&self, dir: &Path) -> Result<()> {
        let (subdirs, leaves) = self.sorted_children(dir)?;

        for leaf in leaves {
            self.provider.remove_file(&leaf)?;
        }
        for subdir in subdirs {
            self.remove_tree(&subdir)?;
        }

        tracing::debug!(path = %dir.display(), "directory removed");
        self.provider.remove_dir(dir)
    }

    /// 디렉토리 직계 엔트리를 (하위 디렉토리, 나머지)로 나눠 이름순 정렬
    fn sorted_children(&self, dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        let mut entries = self.provider.list_entries(dir)?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let (subdirs, leaves): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|entry| entry.is_directory());
        Ok((
            subdirs.into_iter().map(|e| e.path).collect(),
            leaves.into_iter().map(|e| e.path).collect(),
        ))
    }

    // === 복사 ===

    /// 디렉토리 재귀 복사 (전위 깊이 우선)
    ///
    /// 1. 대상 디렉토리를 (중간 경로 포함) 보장하고, 실패하면 내려가지 않는다.
    /// 2. 직계 파일을 복사하며, 같은 이름의 대상 파일은 먼저 지운다.
    /// 3. 하위 디렉토리마다 재귀.
    ///
    /// 첫 실패에서 전체를 중단하고, 이미 쓴 것은 지우지 않습니다.
    pub fn copy_tree(&self, src: &Path, dst: &Path) -> Result<TransferStats> {
        let mut stats = TransferStats::default();
        self.copy_tree_into(src.to_path_buf(), dst.to_path_buf(), &mut stats)?;
        Ok(stats)
    }

    fn copy_tree_into(&self, src: PathBuf, dst: PathBuf, stats: &mut TransferStats) -> Result<()> {
        self.provider.create_dir_all(&dst)?;
        stats.directories += 1;

        let (subdirs, leaves) = self.sorted_children(&src)?;

        for leaf in leaves {
            let target = dst.join(entry_name(&leaf));
            self.replace_existing_file(&target)?;
            stats.bytes += self.provider.copy_file(&leaf, &target)?;
            stats.files += 1;
            tracing::debug!(src = %leaf.display(), dst = %target.display(), "file copied");
        }

        for subdir in subdirs {
            let target = dst.join(entry_name(&subdir));
            self.copy_tree_into(subdir, target, stats)?;
        }

        Ok(())
    }

    /// 덮어쓸 대상 파일 제거
    ///
    /// 디렉토리는 파일로 덮어쓰지 않고 `FileExists`로 거부합니다.
    fn replace_existing_file(&self, target: &Path) -> Result<()> {
        if !self.provider.exists(target) {
            return Ok(());
        }
        if self.provider.stat(target)?.is_directory() {
            return Err(PaneError::FileExists {
                path: target.to_path_buf(),
            });
        }
        self.provider.remove_file(target)
    }

    // === 붙여넣기 ===

    /// 클립보드 내용을 `destination_dir` 아래로 붙여넣기, 결과 경로 반환
    ///
    /// - 파일: 기존 대상 파일은 조용히 덮어씀
    /// - 디렉토리: 재귀 복사로 기존 대상 디렉토리에 병합
    /// - 잘라내기: 복사가 완전히 성공한 뒤에만 원본 삭제
    ///
    /// 클립보드는 기본적으로 비우지 않으므로 같은 원본을 여러 곳에 붙여넣을 수 있습니다.
    /// 이미 이동된 원본을 다시 붙여넣으면 `PathNotFound`.
    pub fn paste(
        &self,
        clipboard: &mut ClipboardState,
        destination_dir: &Path,
        prompt: &dyn Prompt,
    ) -> Result<PathBuf> {
        let source = clipboard
            .source()
            .ok_or(PaneError::ClipboardEmpty)?
            .to_path_buf();
        let mode = clipboard.mode();

        let info = self.provider.stat(&source)?;
        let name = source.file_name().ok_or_else(|| PaneError::InvalidOperation {
            reason: format!("cannot paste {}", source.display()),
        })?;
        let dst = destination_dir.join(name);

        // 자기 자신 위치 또는 자기 하위로의 붙여넣기 거부
        if is_within(&source, &dst) {
            return Err(PaneError::InvalidOperation {
                reason: if dst == source || !info.is_directory() {
                    format!("{} is already in {}", info.name, destination_dir.display())
                } else {
                    format!("cannot paste {} into itself", source.display())
                },
            });
        }

        if self.policy.confirm_overwrite && self.provider.exists(&dst) {
            let message = format!(
                "'{}' already exists in {}. Overwrite?",
                info.name,
                destination_dir.display()
            );
            if !prompt.confirm("Overwrite", &message) {
                return Err(PaneError::Cancelled);
            }
        }

        let stats = if info.is_directory() {
            self.copy_tree(&source, &dst)?
        } else {
            self.replace_existing_file(&dst)?;
            let bytes = self.provider.copy_file(&source, &dst)?;
            TransferStats {
                directories: 0,
                files: 1,
                bytes,
            }
        };

        if mode == ClipboardMode::Cut {
            self.delete(&source)?;
            if self.policy.clear_after_move {
                clipboard.clear();
            }
        }

        tracing::info!(
            src = %source.display(),
            dst = %dst.display(),
            mode = mode.name(),
            files = stats.files,
            bytes = stats.bytes,
            "pasted"
        );
        Ok(dst)
    }
}
