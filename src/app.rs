//! 브라우저 명령 계층
//!
//! UI(창, 셸)가 호출하는 진입점입니다. 탐색기, 클립보드, 작업 엔진과
//! 프롬프트/opener를 묶고 마지막 상태 메시지를 보관합니다.

use crate::config::AppConfig;
use crate::core::navigator::NavigationSynchronizer;
use crate::core::transfer::TransferEngine;
use crate::models::clipboard::ClipboardState;
use crate::models::entry_info::EntryInfo;
use crate::models::navigation_state::{Activation, NavigationState};
use crate::system::filesystem::{FileSystemProvider, LocalFileSystem};
use crate::system::opener::ExternalOpener;
use crate::ui::prompt::Prompt;
use crate::utils::error::{PaneError, Result};
use std::path::{Path, PathBuf};
use std::rc::Rc;

mod navigation;
mod operations;

pub use operations::Properties;

const READY_STATUS: &str = "Ready";

pub struct Browser {
    provider: Rc<dyn FileSystemProvider>,
    navigator: NavigationSynchronizer,
    clipboard: ClipboardState,
    engine: TransferEngine,
    prompt: Box<dyn Prompt>,
    opener: Box<dyn ExternalOpener>,
    config: AppConfig,
    status: String,
}

impl Browser {
    /// 로컬 파일 시스템 위에서 브라우저 생성
    pub fn new(config: AppConfig, prompt: Box<dyn Prompt>, opener: Box<dyn ExternalOpener>) -> Self {
        Self::with_provider(Rc::new(LocalFileSystem::new()), config, prompt, opener)
    }

    /// 임의의 provider로 브라우저 생성 (테스트용 장애 주입 등)
    pub fn with_provider(
        provider: Rc<dyn FileSystemProvider>,
        config: AppConfig,
        prompt: Box<dyn Prompt>,
        opener: Box<dyn ExternalOpener>,
    ) -> Self {
        let navigator = NavigationSynchronizer::new(provider.clone(), config.start_dir.as_deref());
        let engine = TransferEngine::new(provider.clone(), config.transfer_policy());

        tracing::info!(
            directory = %navigator.current_directory().display(),
            "browser ready"
        );

        Self {
            provider,
            navigator,
            clipboard: ClipboardState::new(),
            engine,
            prompt,
            opener,
            config,
            status: READY_STATUS.to_string(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        self.navigator.state()
    }

    pub fn current_directory(&self) -> &Path {
        self.navigator.current_directory()
    }

    pub fn selected(&self) -> Option<&Path> {
        self.navigator.state().selected()
    }

    pub fn clipboard(&self) -> &ClipboardState {
        &self.clipboard
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 마지막 상태 메시지
    pub fn status(&self) -> &str {
        &self.status
    }

    /// 현재 디렉토리 목록
    pub fn listing(&self) -> Result<Vec<EntryInfo>> {
        self.navigator.listing()
    }

    /// 트리 뷰 하위 디렉토리 (`None`이면 현재 디렉토리)
    pub fn tree_children(&self, path: Option<&Path>) -> Result<Vec<EntryInfo>> {
        self.navigator
            .tree_children(path.unwrap_or_else(|| self.navigator.current_directory()))
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// 선택된 엔트리 경로 (없으면 `NoSelection`)
    fn require_selection(&self) -> Result<PathBuf> {
        self.selected()
            .map(Path::to_path_buf)
            .ok_or(PaneError::NoSelection)
    }

    /// 실패를 로그와 상태 메시지에 남기고 그대로 돌려줌
    fn track<T>(&mut self, command: &str, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            tracing::warn!(command, kind = ?err.kind(), error = %err, "command failed");
            self.status = format!("Error: {}", err);
        }
        result
    }
}
