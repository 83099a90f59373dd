//! 텍스트 입력/확인 다이얼로그 추상화
//!
//! 엔진과 명령 계층은 다이얼로그 구현을 모르고 이 trait만 호출합니다.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// 동기식 입력 프롬프트
pub trait Prompt {
    /// 텍스트 입력 요청. 취소하면 `None`
    fn ask_text(&self, title: &str, label: &str, default: &str) -> Option<String>;

    /// 예/아니오 확인
    fn confirm(&self, title: &str, message: &str) -> bool;
}

impl<P: Prompt + ?Sized> Prompt for Rc<P> {
    fn ask_text(&self, title: &str, label: &str, default: &str) -> Option<String> {
        (**self).ask_text(title, label, default)
    }

    fn confirm(&self, title: &str, message: &str) -> bool {
        (**self).confirm(title, message)
    }
}

/// 표준 입출력 기반 프롬프트
///
/// 빈 입력은 기본값을 선택한 것으로, EOF는 취소로 처리합니다.
pub struct StdioPrompt<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl StdioPrompt<io::StdinLock<'static>, io::Stdout> {
    /// 프로세스 표준 입출력에 연결
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    /// 프롬프트 문자열을 출력하고 한 줄 읽기 (EOF면 `None`)
    pub fn read_input(&self, text: &str) -> Option<String> {
        self.write_prompt(text);
        self.read_line()
    }

    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn write_prompt(&self, text: &str) {
        let mut output = self.output.borrow_mut();
        let _ = write!(output, "{}", text);
        let _ = output.flush();
    }
}

impl<R: BufRead, W: Write> Prompt for StdioPrompt<R, W> {
    fn ask_text(&self, title: &str, label: &str, default: &str) -> Option<String> {
        self.write_prompt(&format!("[{}] {} ({}) ", title, label, default));
        let line = self.read_line()?;
        if line.trim().is_empty() {
            Some(default.to_string())
        } else {
            Some(line)
        }
    }

    fn confirm(&self, title: &str, message: &str) -> bool {
        self.write_prompt(&format!("[{}] {} [y/N] ", title, message));
        self.read_line()
            .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }
}

/// 미리 정해 둔 응답을 순서대로 돌려주는 프롬프트
///
/// 응답이 떨어지면 텍스트는 취소, 확인은 거부로 처리합니다.
/// 받은 질문은 `asked()`로 확인할 수 있습니다.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    texts: RefCell<VecDeque<Option<String>>>,
    confirms: RefCell<VecDeque<bool>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// 다음 `ask_text` 응답 추가
    pub fn with_text(self, answer: Option<&str>) -> Self {
        self.texts
            .borrow_mut()
            .push_back(answer.map(|s| s.to_string()));
        self
    }

    /// 다음 `confirm` 응답 추가
    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    /// 지금까지 받은 질문 (title: label/message)
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask_text(&self, title: &str, label: &str, default: &str) -> Option<String> {
        self.asked
            .borrow_mut()
            .push(format!("{}: {} [{}]", title, label, default));
        self.texts.borrow_mut().pop_front().flatten()
    }

    fn confirm(&self, title: &str, message: &str) -> bool {
        self.asked.borrow_mut().push(format!("{}: {}", title, message));
        self.confirms.borrow_mut().pop_front().unwrap_or(false)
    }
}
