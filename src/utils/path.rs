//! 경로 정규화와 이름 검증

use crate::utils::error::{PaneError, Result};
use std::path::{Component, Path, PathBuf};

/// 홈 디렉토리 (없으면 파일 시스템 루트)
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(std::path::MAIN_SEPARATOR_STR))
}

/// `~`, `~/...` 입력을 홈 디렉토리 기준으로 확장
pub fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        return home_dir();
    }
    match input
        .strip_prefix("~/")
        .or_else(|| input.strip_prefix("~\\"))
    {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(input),
    }
}

/// 경로를 절대 경로로 정규화
///
/// 상대 경로는 `base`에 이어 붙이고, `.`/`..` 성분은 실제 파일 시스템을
/// 조회하지 않고 어휘적으로 정리합니다. 빈 경로는 홈 디렉토리가 됩니다.
pub fn normalize_path(path: &Path, base: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        return home_dir();
    }

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            // 루트에서의 ".."는 루트에 머문다
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(name) => normalized.push(name),
        }
    }

    if normalized.as_os_str().is_empty() {
        home_dir()
    } else {
        normalized
    }
}

/// 새 엔트리 이름 검증
///
/// 빈 이름, `.`/`..`, 경로 구분자나 NUL을 포함한 이름은 거부합니다.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Err(PaneError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if name.trim().is_empty() {
        return invalid("name is empty");
    }
    if name == "." || name == ".." {
        return invalid("reserved name");
    }
    if name.chars().any(std::path::is_separator) {
        return invalid("name contains a path separator");
    }
    if name.contains('\0') {
        return invalid("name contains a NUL character");
    }
    Ok(())
}

/// 경로의 마지막 성분 (루트 등 이름이 없으면 경로 전체)
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// `inner`가 `outer` 자신이거나 그 하위 경로인지 확인
///
/// 두 경로 모두 가능하면 canonicalize하여 심볼릭 링크를 해소하고,
/// 존재하지 않는 경로는 어휘적으로 비교합니다.
pub fn is_within(outer: &Path, inner: &Path) -> bool {
    let outer = outer
        .canonicalize()
        .unwrap_or_else(|_| outer.to_path_buf());
    let inner = canonicalize_existing_prefix(inner);
    inner.starts_with(&outer)
}

/// 존재하는 가장 긴 조상을 canonicalize하고 나머지 성분을 이어 붙임
fn canonicalize_existing_prefix(path: &Path) -> PathBuf {
    let mut tail = Vec::new();
    let mut current = path.to_path_buf();
    loop {
        if let Ok(canonical) = current.canonicalize() {
            let mut result = canonical;
            for name in tail.iter().rev() {
                result.push(name);
            }
            return result;
        }
        match (current.file_name().map(|n| n.to_os_string()), current.parent()) {
            (Some(name), Some(parent)) => {
                tail.push(name);
                current = parent.to_path_buf();
            }
            _ => return path.to_path_buf(),
        }
    }
}
