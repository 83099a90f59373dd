use anyhow::Context;
use panesync::app::Browser;
use panesync::config::AppConfig;
use panesync::logging;
use panesync::shell::{run_command, Flow};
use panesync::system::SystemOpener;
use panesync::ui::StdioPrompt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    let mut config = AppConfig::load_default().context("failed to load configuration")?;

    // 첫 번째 인자가 있으면 시작 디렉토리로 사용
    if let Some(dir) = std::env::args_os().nth(1) {
        config.start_dir = Some(PathBuf::from(dir));
    }

    logging::init(&config.log_level);

    let prompt = Rc::new(StdioPrompt::stdio());
    let mut browser = Browser::new(config, Box::new(prompt.clone()), Box::new(SystemOpener::new()));

    let mut stdout = io::stdout();
    writeln!(stdout, "panesync - type 'help' for commands")?;

    loop {
        let prompt_text = format!("{}> ", browser.current_directory().display());
        let Some(line) = prompt.read_input(&prompt_text) else {
            writeln!(stdout)?;
            break;
        };

        if run_command(&mut browser, &line, &mut stdout)? == Flow::Quit {
            break;
        }
    }

    tracing::info!("panesync exiting");
    Ok(())
}
