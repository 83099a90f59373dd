use std::path::{Path, PathBuf};

/// 탐색 상태
///
/// 트리 뷰와 목록 뷰가 공유하는 현재 디렉토리와 목록에서 강조할 엔트리.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// 목록 뷰에 표시 중인 디렉토리 (항상 절대 경로)
    pub current_directory: PathBuf,
    /// 목록에서 강조할 엔트리
    pub selected_entry: Option<PathBuf>,
}

impl NavigationState {
    /// 새 탐색 상태 생성 (선택 없음)
    pub fn new(current_directory: PathBuf) -> Self {
        Self {
            current_directory,
            selected_entry: None,
        }
    }

    /// 디렉토리 변경 + 선택 해제
    pub fn change_directory(&mut self, path: PathBuf) {
        self.current_directory = path;
        self.selected_entry = None;
    }

    /// 디렉토리 변경 + 엔트리 선택
    pub fn change_directory_and_select(&mut self, directory: PathBuf, entry: PathBuf) {
        self.current_directory = directory;
        self.selected_entry = Some(entry);
    }

    pub fn selected(&self) -> Option<&Path> {
        self.selected_entry.as_deref()
    }
}

/// 목록 뷰에서 엔트리를 활성화(더블클릭/Enter)한 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// 디렉토리로 이동함 - 트리 뷰에서 해당 경로를 펼치고 강조해야 함
    Navigate(PathBuf),
    /// 파일 - 외부 프로그램으로 열어야 함 (탐색 상태는 그대로)
    OpenExternal(PathBuf),
}
