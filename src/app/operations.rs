use super::*;
use crate::models::entry_info::EntryKind;
use crate::utils::formatter::{format_date_full, format_size_kb};
use crate::utils::path::entry_name;
use std::time::SystemTime;

/// 선택 항목 속성
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub kind: EntryKind,
    pub modified: SystemTime,
}

impl From<EntryInfo> for Properties {
    fn from(info: EntryInfo) -> Self {
        Self {
            name: info.name,
            path: info.path,
            size: info.size,
            kind: info.kind,
            modified: info.modified,
        }
    }
}

impl Properties {
    /// 여러 줄 텍스트로 표시
    pub fn render(&self) -> String {
        format!(
            "Name: {}\nPath: {}\nSize: {}\nType: {}\nLast Modified: {}",
            self.name,
            self.path.display(),
            format_size_kb(self.size),
            self.kind.label(),
            format_date_full(self.modified)
        )
    }
}

impl Browser {
    // === 생성 / 이름 변경 / 삭제 ===

    /// 현재 디렉토리에 새 폴더 생성
    ///
    /// 입력을 취소하거나 빈 이름이면 아무것도 하지 않고 `None`.
    pub fn new_folder(&mut self) -> Result<Option<PathBuf>> {
        let Some(name) = self
            .prompt
            .ask_text("New Folder", "Folder Name:", "New Folder")
        else {
            return Ok(None);
        };
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let parent = self.current_directory().to_path_buf();
        let result = self.engine.create_directory(&parent, name);
        self.track("new_folder", result)?;

        let path = parent.join(name);
        self.set_status(format!("Created: {}", path.display()));
        Ok(Some(path))
    }

    /// 선택 항목 이름 변경, 선택은 새 경로를 따라감
    pub fn rename_selected(&mut self) -> Result<Option<PathBuf>> {
        let result = self.require_selection();
        let selected = self.track("rename", result)?;

        let current_name = entry_name(&selected);
        let Some(new_name) = self.prompt.ask_text("Rename", "New name:", &current_name) else {
            return Ok(None);
        };
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Ok(None);
        }

        let result = self.engine.rename(&selected, new_name);
        let renamed = self.track("rename", result)?;
        let result = self.navigator.select_in_listing(&renamed);
        self.track("rename", result)?;

        self.set_status(format!("Renamed: {}", renamed.display()));
        Ok(Some(renamed))
    }

    /// 선택 항목 삭제 (디렉토리는 재귀)
    ///
    /// 확인을 거절하면 `false`.
    pub fn delete_selected(&mut self) -> Result<bool> {
        let result = self.require_selection();
        let selected = self.track("delete", result)?;

        if self.config.confirm_delete {
            let message = format!(
                "Are you sure you want to delete {}?",
                entry_name(&selected)
            );
            if !self.prompt.confirm("Delete", &message) {
                return Ok(false);
            }
        }

        let result = self.engine.delete(&selected);
        self.track("delete", result)?;
        self.navigator.clear_selection();

        self.set_status(format!("Deleted: {}", selected.display()));
        Ok(true)
    }

    // === 클립보드 ===

    /// 선택 항목을 복사 대상으로 기록
    pub fn copy_selected(&mut self) -> Result<PathBuf> {
        let result = self.require_selection();
        let selected = self.track("copy", result)?;
        self.clipboard.copy(selected.clone());
        self.set_status(format!("Copied: {}", selected.display()));
        Ok(selected)
    }

    /// 선택 항목을 이동 대상으로 기록
    pub fn cut_selected(&mut self) -> Result<PathBuf> {
        let result = self.require_selection();
        let selected = self.track("cut", result)?;
        self.clipboard.cut(selected.clone());
        self.set_status(format!("Cut: {}", selected.display()));
        Ok(selected)
    }

    /// 클립보드 내용을 현재 디렉토리에 붙여넣기
    pub fn paste(&mut self) -> Result<PathBuf> {
        let destination = self.current_directory().to_path_buf();
        let result = self
            .engine
            .paste(&mut self.clipboard, &destination, self.prompt.as_ref());
        let pasted = self.track("paste", result)?;
        self.set_status(format!("Pasted to: {}", destination.display()));
        Ok(pasted)
    }

    // === 속성 ===

    /// 선택 항목 속성
    pub fn properties(&mut self) -> Result<Properties> {
        let result = self
            .require_selection()
            .and_then(|path| self.provider.stat(&path))
            .map(Properties::from);
        self.track("properties", result)
    }
}
