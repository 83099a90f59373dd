use crate::utils::error::{PaneError, Result};
use std::path::Path;
use std::process::Command;
use std::rc::Rc;

/// OS 연결 프로그램으로 파일 열기
///
/// 실패는 보고만 하며 코어 상태에는 영향을 주지 않습니다.
pub trait ExternalOpener {
    fn open(&self, path: &Path) -> Result<()>;
}

impl<O: ExternalOpener + ?Sized> ExternalOpener for Rc<O> {
    fn open(&self, path: &Path) -> Result<()> {
        (**self).open(path)
    }
}

/// 플랫폼 기본 명령(`open`, `xdg-open`, `start`)을 사용하는 opener
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    pub fn new() -> Self {
        Self
    }

    fn command_for(path: &Path) -> Option<Command> {
        #[cfg(target_os = "macos")]
        {
            let mut command = Command::new("open");
            command.arg(path);
            Some(command)
        }

        #[cfg(windows)]
        {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", ""]).arg(path);
            Some(command)
        }

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            let mut command = Command::new("xdg-open");
            command.arg(path);
            Some(command)
        }

        #[cfg(not(any(unix, windows)))]
        {
            let _ = path;
            None
        }
    }
}

impl ExternalOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PaneError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        let Some(mut command) = Self::command_for(path) else {
            return Err(PaneError::ExternalOpenFailed {
                path: path.to_path_buf(),
                reason: "no opener available on this platform".to_string(),
            });
        };

        let status = command
            .status()
            .map_err(|e| PaneError::ExternalOpenFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PaneError::ExternalOpenFailed {
                path: path.to_path_buf(),
                reason: format!("opener exited with status {}", status),
            })
        }
    }
}
