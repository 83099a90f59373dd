//! 한 줄 명령 해석기
//!
//! 입력을 shlex로 나눠 `ACTION_DEFS`에서 명령을 찾고 `Browser`에 전달합니다.
//! 명령 실패는 출력에 알리고 루프는 계속됩니다.

use crate::app::Browser;
use crate::core::actions::{find_action, generate_help_entries, Action, ActionDef, Arity};
use crate::models::entry_info::{EntryInfo, EntryKind};
use crate::models::navigation_state::Activation;
use crate::utils::error::Result;
use crate::utils::formatter::{format_date, format_file_size, pluralize};
use crate::utils::path::expand_home;
use std::io::{self, Write};
use std::path::Path;

/// 명령 처리 후 루프 진행 여부
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 한 줄 실행
///
/// 출력 쓰기 실패만 에러로 돌려줍니다.
pub fn run_command<W: Write>(browser: &mut Browser, line: &str, out: &mut W) -> io::Result<Flow> {
    let Some(words) = shlex::split(line) else {
        writeln!(out, "Error: unbalanced quotes")?;
        return Ok(Flow::Continue);
    };
    let Some((command, args)) = words.split_first() else {
        return Ok(Flow::Continue);
    };

    let Some(def) = find_action(command) else {
        writeln!(out, "Unknown command: {} (type 'help')", command)?;
        return Ok(Flow::Continue);
    };

    let arg = args.first().map(String::as_str);
    match (def.arity, arg) {
        (Arity::Required, None) => {
            writeln!(out, "Usage: {}", def.usage)?;
            return Ok(Flow::Continue);
        }
        (Arity::None, Some(_)) => {
            writeln!(out, "Usage: {}", def.usage)?;
            return Ok(Flow::Continue);
        }
        _ => {}
    }

    tracing::debug!(command = def.id, "shell command");
    dispatch(browser, def, arg, out)
}

fn dispatch<W: Write>(
    browser: &mut Browser,
    def: &ActionDef,
    arg: Option<&str>,
    out: &mut W,
) -> io::Result<Flow> {
    let path = arg.map(expand_home);

    match def.action {
        Action::ShowListing => {
            let listing = browser.listing();
            report(out, listing, |out, entries| print_listing(out, browser, &entries))?;
        }
        Action::ShowTree => {
            let children = browser.tree_children(path.as_deref());
            report(out, children, |out, dirs| {
                for dir in &dirs {
                    writeln!(out, "  {}/", dir.name)?;
                }
                writeln!(out, "{}", pluralize(dirs.len(), "folder", "folders"))
            })?;
        }
        Action::SelectInTree => {
            let state = browser.select_in_tree(path.as_deref().unwrap_or(Path::new("")));
            report(out, state, |out, state| {
                writeln!(out, "{}", state.current_directory.display())?;
                if let Some(selected) = state.selected() {
                    writeln!(out, "selected: {}", selected.display())?;
                }
                Ok(())
            })?;
        }
        Action::Activate => {
            let activation = browser.activate(path.as_deref().unwrap_or(Path::new("")));
            report(out, activation, |out, activation| match activation {
                Activation::Navigate(dir) => writeln!(out, "{}", dir.display()),
                Activation::OpenExternal(_) => writeln!(out, "{}", browser.status()),
            })?;
        }
        Action::GoToParent => match browser.go_up() {
            Some(parent) => writeln!(out, "{}", parent.display())?,
            None => writeln!(out, "Already at the top")?,
        },
        Action::SelectEntry => {
            let result = browser.select(path.as_deref().unwrap_or(Path::new("")));
            report(out, result, |out, ()| {
                let selected = browser.selected().map(|p| p.display().to_string());
                writeln!(out, "selected: {}", selected.unwrap_or_default())
            })?;
        }
        Action::PrintDirectory => {
            writeln!(out, "{}", browser.current_directory().display())?;
        }
        Action::MakeDirectory => {
            let created = browser.new_folder();
            report_status(out, browser, created)?;
        }
        Action::Rename => {
            let renamed = browser.rename_selected();
            report_status(out, browser, renamed)?;
        }
        Action::Delete => {
            let deleted = browser.delete_selected();
            report_status(out, browser, deleted)?;
        }
        Action::Copy => {
            let copied = browser.copy_selected();
            report_status(out, browser, copied)?;
        }
        Action::Cut => {
            let cut = browser.cut_selected();
            report_status(out, browser, cut)?;
        }
        Action::Paste => {
            let pasted = browser.paste();
            report_status(out, browser, pasted)?;
        }
        Action::ShowProperties => {
            let properties = browser.properties();
            report(out, properties, |out, props| writeln!(out, "{}", props.render()))?;
        }
        Action::ShowHelp => print_help(out)?,
        Action::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// 성공이면 `on_ok`, 실패면 에러 메시지 출력
fn report<W: Write, T>(
    out: &mut W,
    result: Result<T>,
    on_ok: impl FnOnce(&mut W, T) -> io::Result<()>,
) -> io::Result<()> {
    match result {
        Ok(value) => on_ok(out, value),
        Err(err) => writeln!(out, "Error: {}", err),
    }
}

/// 성공이면 브라우저 상태 메시지 출력
fn report_status<W: Write, T>(out: &mut W, browser: &Browser, result: Result<T>) -> io::Result<()> {
    report(out, result, |out, _| writeln!(out, "{}", browser.status()))
}

fn print_listing<W: Write>(out: &mut W, browser: &Browser, entries: &[EntryInfo]) -> io::Result<()> {
    writeln!(out, "{}", browser.current_directory().display())?;
    for entry in entries {
        let marker = if browser.selected() == Some(entry.path.as_path()) {
            '*'
        } else {
            ' '
        };
        let (tag, size) = match entry.kind {
            EntryKind::Directory => ("DIR", "-".to_string()),
            EntryKind::Symlink => ("LNK", format_file_size(entry.size)),
            EntryKind::File => ("", format_file_size(entry.size)),
        };
        writeln!(
            out,
            "{} {:<3} {:>10}  {}  {}",
            marker,
            tag,
            size,
            format_date(entry.modified),
            entry.name
        )?;
    }
    writeln!(out, "{}", pluralize(entries.len(), "entry", "entries"))
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    for (category, items) in generate_help_entries() {
        writeln!(out, "{}:", category)?;
        for (usage, label) in items {
            writeln!(out, "  {:<16} {}", usage, label)?;
        }
    }
    Ok(())
}
