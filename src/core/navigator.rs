//! 트리 뷰와 목록 뷰 사이의 탐색 동기화
//!
//! 두 뷰가 공유하는 현재 디렉토리를 소유하고, 어느 한쪽의 선택 이벤트를
//! 다른 쪽이 그대로 반영할 수 있는 상태로 바꿔 돌려줍니다.

use crate::models::entry_info::EntryInfo;
use crate::models::navigation_state::{Activation, NavigationState};
use crate::system::filesystem::FileSystemProvider;
use crate::utils::error::{PaneError, Result};
use crate::utils::path::normalize_path;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub struct NavigationSynchronizer {
    provider: Rc<dyn FileSystemProvider>,
    state: NavigationState,
}

impl NavigationSynchronizer {
    /// 시작 디렉토리로 초기화
    ///
    /// 시작 경로가 없거나 비어 있으면 홈 디렉토리에서 시작합니다.
    pub fn new(provider: Rc<dyn FileSystemProvider>, start: Option<&Path>) -> Self {
        let home = crate::utils::path::home_dir();
        let start = start
            .map(|p| normalize_path(p, &home))
            .unwrap_or(home);
        Self {
            provider,
            state: NavigationState::new(start),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_directory(&self) -> &Path {
        &self.state.current_directory
    }

    /// 입력 경로를 현재 디렉토리 기준 절대 경로로 변환
    pub fn resolve(&self, path: &Path) -> PathBuf {
        normalize_path(path, &self.state.current_directory)
    }

    /// 트리 뷰에서 항목 선택
    ///
    /// 디렉토리는 그 자체가, 파일은 부모 디렉토리가 현재 디렉토리가 되고
    /// 파일은 목록에서 강조할 엔트리로 기록됩니다.
    pub fn select_in_tree(&mut self, path: &Path) -> Result<NavigationState> {
        let path = self.resolve(path);
        self.provider.stat(&path)?;

        // 디렉토리를 가리키는 링크도 디렉토리로 탐색
        if self.provider.is_dir(&path) {
            self.state.change_directory(path);
        } else {
            // 파일 시스템 루트 자체는 디렉토리이므로 파일에는 항상 부모가 있다
            let parent = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| path.clone());
            self.state.change_directory_and_select(parent, path);
        }

        tracing::debug!(
            directory = %self.state.current_directory.display(),
            "tree selection"
        );
        Ok(self.state.clone())
    }

    /// 목록 뷰에서 항목 활성화
    ///
    /// 디렉토리면 이동까지 적용한 뒤 `Navigate`를 돌려주고, 호출자는 트리 뷰에서
    /// 해당 경로를 펼쳐 강조합니다. 파일이면 상태를 바꾸지 않고 `OpenExternal`.
    pub fn activate_in_listing(&mut self, path: &Path) -> Result<Activation> {
        let path = self.resolve(path);
        self.provider.stat(&path)?;

        if self.provider.is_dir(&path) {
            self.state.change_directory(path.clone());
            tracing::debug!(directory = %path.display(), "listing activation");
            Ok(Activation::Navigate(path))
        } else {
            Ok(Activation::OpenExternal(path))
        }
    }

    /// 상위 디렉토리로 이동
    ///
    /// 파일 시스템 루트에서는 아무것도 바꾸지 않고 `None`.
    pub fn navigate_up(&mut self) -> Option<PathBuf> {
        let parent = self.state.current_directory.parent()?.to_path_buf();
        self.state.change_directory(parent.clone());
        tracing::debug!(directory = %parent.display(), "navigate up");
        Some(parent)
    }

    /// 목록에서 엔트리 강조 (디렉토리는 바꾸지 않음)
    ///
    /// 현재 디렉토리의 직계 엔트리만 선택할 수 있습니다.
    pub fn select_in_listing(&mut self, path: &Path) -> Result<()> {
        let path = self.resolve(path);
        if path.parent() != Some(self.state.current_directory.as_path()) {
            return Err(PaneError::InvalidOperation {
                reason: format!(
                    "{} is not in {}",
                    path.display(),
                    self.state.current_directory.display()
                ),
            });
        }
        if !self.provider.exists(&path) {
            return Err(PaneError::PathNotFound { path });
        }
        self.state.selected_entry = Some(path);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_entry = None;
    }

    /// 현재 디렉토리 목록 (디렉토리 먼저, 이름 대소문자 무시 정렬)
    ///
    /// 외부에서 현재 디렉토리가 삭제되었다면 `PathNotFound`.
    pub fn listing(&self) -> Result<Vec<EntryInfo>> {
        let mut entries = self.provider.list_entries(&self.state.current_directory)?;
        entries.sort_by(|a, b| {
            b.is_directory()
                .cmp(&a.is_directory())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(entries)
    }

    /// 트리 뷰용 하위 디렉토리 목록 (디렉토리 링크 포함, 이름 정렬)
    pub fn tree_children(&self, path: &Path) -> Result<Vec<EntryInfo>> {
        let path = self.resolve(path);
        let mut dirs: Vec<EntryInfo> = self
            .provider
            .list_entries(&path)?
            .into_iter()
            .filter(|entry| {
                entry.is_directory() || (entry.is_symlink() && self.provider.is_dir(&entry.path))
            })
            .collect();
        dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(dirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::filesystem::LocalFileSystem;
    use std::fs;
    use tempfile::TempDir;

    fn navigator_at(path: &Path) -> NavigationSynchronizer {
        NavigationSynchronizer::new(Rc::new(LocalFileSystem::new()), Some(path))
    }

    #[test]
    fn test_start_defaults_to_home() {
        let nav = NavigationSynchronizer::new(Rc::new(LocalFileSystem::new()), None);
        assert_eq!(nav.current_directory(), crate::utils::path::home_dir());

        let nav = NavigationSynchronizer::new(Rc::new(LocalFileSystem::new()), Some(Path::new("")));
        assert_eq!(nav.current_directory(), crate::utils::path::home_dir());
    }

    #[test]
    fn test_select_directory_in_tree() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).unwrap();

        let mut nav = navigator_at(temp.path());
        nav.select_in_listing(&sub).unwrap();

        let state = nav.select_in_tree(&sub).unwrap();
        assert_eq!(state.current_directory, sub);
        assert_eq!(state.selected_entry, None);
        assert_eq!(nav.state(), &state);
    }

    #[test]
    fn test_select_file_in_tree_points_listing_at_parent() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("sub");
        let file = sub.join("readme.txt");
        fs::create_dir(&sub).unwrap();
        fs::write(&file, "hi").unwrap();

        let mut nav = navigator_at(temp.path());
        let state = nav.select_in_tree(&file).unwrap();

        assert_eq!(state.current_directory, sub);
        assert_eq!(state.selected_entry, Some(file));
    }

    #[test]
    fn test_select_missing_path_leaves_state_unchanged() {
        let temp = TempDir::new().unwrap();
        let mut nav = navigator_at(temp.path());

        let result = nav.select_in_tree(&temp.path().join("ghost"));
        assert!(matches!(result, Err(PaneError::PathNotFound { .. })));
        assert_eq!(nav.current_directory(), temp.path());
    }

    #[test]
    fn test_activate_directory_navigates() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("photos");
        fs::create_dir(&sub).unwrap();

        let mut nav = navigator_at(temp.path());
        let activation = nav.activate_in_listing(Path::new("photos")).unwrap();

        assert_eq!(activation, Activation::Navigate(sub.clone()));
        assert_eq!(nav.current_directory(), sub);
        assert!(nav.state().selected_entry.is_none());
    }

    #[test]
    fn test_activate_file_requests_external_open() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("doc.pdf");
        fs::write(&file, "%PDF").unwrap();

        let mut nav = navigator_at(temp.path());
        nav.select_in_listing(&file).unwrap();
        let before = nav.state().clone();

        let activation = nav.activate_in_listing(&file).unwrap();
        assert_eq!(activation, Activation::OpenExternal(file));
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn test_navigate_up_reaches_root_and_stabilizes() {
        let temp = TempDir::new().unwrap();
        let deep = temp.path().join("a").join("b");
        fs::create_dir_all(&deep).unwrap();

        let mut nav = navigator_at(&deep);
        assert_eq!(nav.navigate_up(), Some(temp.path().join("a")));
        assert_eq!(nav.current_directory(), temp.path().join("a"));

        let mut guard = 0;
        while nav.navigate_up().is_some() {
            guard += 1;
            assert!(guard < 256, "navigate_up never reached a root");
        }

        let root = nav.current_directory().to_path_buf();
        assert!(root.parent().is_none());
        assert_eq!(nav.navigate_up(), None);
        assert_eq!(nav.current_directory(), root);
    }

    #[test]
    fn test_listing_sorts_directories_first() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "").unwrap();
        fs::write(temp.path().join("A.txt"), "").unwrap();
        fs::create_dir(temp.path().join("zeta")).unwrap();

        let nav = navigator_at(temp.path());
        let names: Vec<String> = nav.listing().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["zeta", "A.txt", "b.txt"]);
    }

    #[test]
    fn test_listing_of_deleted_directory_fails() {
        let temp = TempDir::new().unwrap();
        let doomed = temp.path().join("doomed");
        fs::create_dir(&doomed).unwrap();

        let nav = navigator_at(&doomed);
        fs::remove_dir(&doomed).unwrap();

        assert!(matches!(nav.listing(), Err(PaneError::PathNotFound { .. })));
    }

    #[test]
    fn test_select_in_listing_rejects_entries_outside_current_directory() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner.txt"), "i").unwrap();

        let mut nav = navigator_at(temp.path());
        match nav.select_in_listing(&sub.join("inner.txt")) {
            Err(PaneError::InvalidOperation { .. }) => {}
            other => panic!("expected InvalidOperation, got {:?}", other),
        }
        assert_eq!(nav.state().selected(), None);

        nav.select_in_listing(Path::new("sub")).unwrap();
        assert_eq!(nav.state().selected(), Some(sub.as_path()));
    }

    #[cfg(unix)]
    fn linked_directory(temp: &TempDir) -> (PathBuf, PathBuf) {
        let real = temp.path().join("real");
        fs::create_dir(&real).unwrap();
        fs::write(real.join("inside.txt"), "x").unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();
        (real, link)
    }

    #[cfg(unix)]
    #[test]
    fn test_activate_symlinked_directory_navigates() {
        let temp = TempDir::new().unwrap();
        let (_, link) = linked_directory(&temp);

        let mut nav = navigator_at(temp.path());
        let activation = nav.activate_in_listing(Path::new("link")).unwrap();

        assert_eq!(activation, Activation::Navigate(link.clone()));
        assert_eq!(nav.current_directory(), link);
        let names: Vec<String> = nav.listing().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["inside.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_select_symlinked_directory_in_tree() {
        let temp = TempDir::new().unwrap();
        let (_, link) = linked_directory(&temp);

        let mut nav = navigator_at(temp.path());
        let state = nav.select_in_tree(&link).unwrap();

        assert_eq!(state.current_directory, link);
        assert_eq!(state.selected_entry, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_tree_children_include_symlinked_directories() {
        let temp = TempDir::new().unwrap();
        linked_directory(&temp);
        std::os::unix::fs::symlink(
            temp.path().join("real").join("inside.txt"),
            temp.path().join("file_link"),
        )
        .unwrap();

        let nav = navigator_at(temp.path());
        let names: Vec<String> = nav
            .tree_children(temp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["link", "real"]);
    }

    #[test]
    fn test_tree_children_only_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dir_b")).unwrap();
        fs::create_dir(temp.path().join("dir_a")).unwrap();
        fs::write(temp.path().join("file.txt"), "").unwrap();

        let nav = navigator_at(temp.path());
        let names: Vec<String> = nav
            .tree_children(temp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["dir_a", "dir_b"]);
    }
}
