use super::*;

impl Browser {
    // === 트리 뷰 ===

    /// 트리 뷰 선택을 목록 뷰에 반영
    pub fn select_in_tree(&mut self, path: &Path) -> Result<NavigationState> {
        let result = self.navigator.select_in_tree(path);
        let state = self.track("select_in_tree", result)?;
        self.set_status(state.current_directory.display().to_string());
        Ok(state)
    }

    // === 목록 뷰 ===

    /// 목록 항목 활성화
    ///
    /// 파일 열기 실패는 상태 메시지로만 알리고 `Ok`를 돌려줍니다.
    pub fn activate(&mut self, path: &Path) -> Result<Activation> {
        let result = self.navigator.activate_in_listing(path);
        let activation = self.track("activate", result)?;

        match &activation {
            Activation::Navigate(dir) => {
                self.set_status(dir.display().to_string());
            }
            Activation::OpenExternal(file) => match self.opener.open(file) {
                Ok(()) => self.set_status(format!("Opened: {}", file.display())),
                Err(err) => {
                    tracing::warn!(path = %file.display(), error = %err, "external open failed");
                    self.set_status(format!("Failed to open: {}", file.display()));
                }
            },
        }
        Ok(activation)
    }

    /// 상위 디렉토리로 이동 (루트면 `None`)
    pub fn go_up(&mut self) -> Option<PathBuf> {
        let parent = self.navigator.navigate_up()?;
        self.set_status(parent.display().to_string());
        Some(parent)
    }

    /// 목록에서 엔트리 선택
    pub fn select(&mut self, path: &Path) -> Result<()> {
        let result = self.navigator.select_in_listing(path);
        self.track("select", result)
    }
}
