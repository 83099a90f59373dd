//! 액션 레지스트리
//!
//! 셸 명령어 해석과 도움말이 모두 이 모듈의 `ACTION_DEFS`를 참조합니다.

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    ShowListing,
    ShowTree,
    SelectInTree,
    Activate,
    GoToParent,
    SelectEntry,
    PrintDirectory,
    // File Operations
    MakeDirectory,
    Rename,
    Delete,
    Copy,
    Cut,
    Paste,
    ShowProperties,
    // System
    ShowHelp,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    FileOperation,
    System,
}

impl ActionCategory {
    pub fn title(&self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::FileOperation => "File",
            ActionCategory::System => "System",
        }
    }
}

/// 인자 요구 사항
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Optional,
    Required,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub arity: Arity,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::ShowListing,
        id: "ls",
        aliases: &["list"],
        usage: "ls",
        label: "List current directory",
        category: ActionCategory::Navigation,
        arity: Arity::None,
    },
    ActionDef {
        action: Action::ShowTree,
        id: "tree",
        aliases: &[],
        usage: "tree [path]",
        label: "Show subdirectories",
        category: ActionCategory::Navigation,
        arity: Arity::Optional,
    },
    ActionDef {
        action: Action::SelectInTree,
        id: "cd",
        aliases: &["goto"],
        usage: "cd <path>",
        label: "Select in tree",
        category: ActionCategory::Navigation,
        arity: Arity::Required,
    },
    ActionDef {
        action: Action::Activate,
        id: "open",
        aliases: &["enter"],
        usage: "open <name>",
        label: "Enter folder / open file",
        category: ActionCategory::Navigation,
        arity: Arity::Required,
    },
    ActionDef {
        action: Action::GoToParent,
        id: "up",
        aliases: &[".."],
        usage: "up",
        label: "Parent dir",
        category: ActionCategory::Navigation,
        arity: Arity::None,
    },
    ActionDef {
        action: Action::SelectEntry,
        id: "select",
        aliases: &["sel"],
        usage: "select <name>",
        label: "Select entry",
        category: ActionCategory::Navigation,
        arity: Arity::Required,
    },
    ActionDef {
        action: Action::PrintDirectory,
        id: "pwd",
        aliases: &[],
        usage: "pwd",
        label: "Current directory",
        category: ActionCategory::Navigation,
        arity: Arity::None,
    },
    // File Operations
    ActionDef {
        action: Action::MakeDirectory,
        id: "mkdir",
        aliases: &["new"],
        usage: "mkdir",
        label: "New folder",
        category: ActionCategory::FileOperation,
        arity: Arity::None,
    },
    ActionDef {
        action: Action::Rename,
        id: "rename",
        aliases: &["mv"],
        usage: "rename",
        label: "Rename selected",
        category: ActionCategory::FileOperation,
        arity: Arity::None,
    },
    ActionDef {
        action: Action::Delete,
        id: "rm",
        aliases: &["delete"],
        usage: "rm",
        label: "Delete selected",
        category: ActionCategory::FileOperation,
        arity: Arity::None,
    },
    ActionDef {
        action: Action::Copy,
        id: "copy",
        aliases: &["cp"],
        usage: "copy",
        label: "Copy selected",
        category: ActionCategory::FileOperation,
        arity: Arity::None,
    },
    ActionDef {
        action: Action::Cut,
        id: "cut",
        aliases: &[],
        usage: "cut",
        label: "Cut selected",
        category: ActionCategory::FileOperation,
        arity: Arity::None,
    },
    ActionDef {
        action: Action::Paste,
        id: "paste",
        aliases: &[],
        usage: "paste",
        label: "Paste here",
        category: ActionCategory::FileOperation,
        arity: Arity::None,
    },
    ActionDef {
        action: Action::ShowProperties,
        id: "props",
        aliases: &["info"],
        usage: "props",
        label: "Properties",
        category: ActionCategory::FileOperation,
        arity: Arity::None,
    },
    // System
    ActionDef {
        action: Action::ShowHelp,
        id: "help",
        aliases: &["?"],
        usage: "help",
        label: "Help",
        category: ActionCategory::System,
        arity: Arity::None,
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        aliases: &["exit", "q"],
        usage: "quit",
        label: "Quit",
        category: ActionCategory::System,
        arity: Arity::None,
    },
];

/// 입력한 명령어(id 또는 별칭)로 액션 조회
pub fn find_action(word: &str) -> Option<&'static ActionDef> {
    let word = word.to_lowercase();
    ACTION_DEFS
        .iter()
        .find(|d| d.id == word || d.aliases.contains(&word.as_str()))
}

/// 도움말용 엔트리 생성
///
/// 반환: (카테고리명, Vec<(사용법, 설명)>) 목록
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    [
        ActionCategory::Navigation,
        ActionCategory::FileOperation,
        ActionCategory::System,
    ]
    .iter()
    .map(|cat| {
        let items = ACTION_DEFS
            .iter()
            .filter(|d| d.category == *cat)
            .map(|d| (d.usage, d.label))
            .collect();
        (cat.title(), items)
    })
    .collect()
}
