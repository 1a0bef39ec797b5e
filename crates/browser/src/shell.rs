//! Line-driven browser shell.
//!
//! Drives one browser window from text commands, the way a toolbar, tab
//! strip and address bar would, and renders the chrome state as text.

use std::fmt::Write as _;

use common::{ShellError, ShellResult, TabId, WindowId};
use ui::address_bar::Key;
use ui::shortcuts::KeyboardShortcut;
use ui::{Browser, SurfaceFactory, ToolbarCommand, WindowCommand, WindowStatus};

/// Help text for the interactive shell.
pub const HELP: &str = "\
commands:
  new                 open a tab
  close [N]           close tab N, or the active tab
  tab N               activate tab N
  back | forward | reload | home
  go TEXT             load a URL or search for TEXT
  type TEXT           type TEXT into the address bar and press Enter
  key ACCEL           press a shortcut, e.g. key Ctrl+T
  theme               toggle light/dark
  tabs                show the window
  help                show this help
  quit                exit";

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellInput {
    Window(WindowCommand),
    Type(String),
    ToggleTheme,
    Show,
    Help,
    Quit,
}

/// Whether the shell keeps running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Exit,
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse_line(line: &str) -> ShellResult<Option<ShellInput>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let toolbar = |button| Ok(Some(ShellInput::Window(WindowCommand::Toolbar(button))));

    match word.to_ascii_lowercase().as_str() {
        "new" => toolbar(ToolbarCommand::NewTab),
        "close" if rest.is_empty() => toolbar(ToolbarCommand::CloseTab),
        "close" => Ok(Some(ShellInput::Window(WindowCommand::CloseTab(parse_tab(rest)?)))),
        "tab" => Ok(Some(ShellInput::Window(WindowCommand::ActivateTab(parse_tab(rest)?)))),
        "back" => toolbar(ToolbarCommand::Back),
        "forward" => toolbar(ToolbarCommand::Forward),
        "reload" => toolbar(ToolbarCommand::Reload),
        "home" => toolbar(ToolbarCommand::Home),
        "go" if rest.is_empty() => Err(ShellError::command("go needs a URL or search text")),
        "go" => Ok(Some(ShellInput::Window(WindowCommand::SubmitAddress(rest.to_string())))),
        "type" if rest.is_empty() => Err(ShellError::command("type needs some text")),
        "type" => Ok(Some(ShellInput::Type(rest.to_string()))),
        "key" => {
            let shortcut: KeyboardShortcut = rest.parse()?;
            Ok(Some(ShellInput::Window(WindowCommand::Shortcut(shortcut))))
        }
        "theme" => Ok(Some(ShellInput::ToggleTheme)),
        "tabs" | "show" => Ok(Some(ShellInput::Show)),
        "help" | "?" => Ok(Some(ShellInput::Help)),
        "quit" | "exit" => Ok(Some(ShellInput::Quit)),
        other => Err(ShellError::command(format!("unknown command {:?}", other))),
    }
}

fn parse_tab(text: &str) -> ShellResult<TabId> {
    let digits = text.strip_prefix("tab-").unwrap_or(text);
    digits
        .parse()
        .map(TabId)
        .map_err(|_| ShellError::command(format!("not a tab number: {:?}", text)))
}

/// A browser with one window driven by text commands.
pub struct Shell {
    browser: Browser,
    window: WindowId,
}

impl Shell {
    /// Open the shell's window on `browser`.
    pub fn new(mut browser: Browser, factory: Box<dyn SurfaceFactory>) -> Self {
        let window = browser.open_window(factory);
        Self { browser, window }
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Apply pending surface notifications.
    pub fn pump(&mut self) -> usize {
        self.browser.pump_events()
    }

    /// Run one input.
    pub fn execute(&mut self, input: ShellInput) -> ShellFlow {
        match input {
            ShellInput::Window(command) => {
                tracing::debug!(?command, "shell command");
                match self.browser.dispatch(self.window, command) {
                    WindowStatus::Open => ShellFlow::Continue,
                    WindowStatus::Closed => ShellFlow::Exit,
                }
            }
            ShellInput::Type(text) => self.type_address(&text),
            ShellInput::ToggleTheme => {
                self.browser.toggle_theme();
                ShellFlow::Continue
            }
            ShellInput::Show | ShellInput::Help => ShellFlow::Continue,
            ShellInput::Quit => {
                self.browser.close_window(self.window);
                ShellFlow::Exit
            }
        }
    }

    /// Render the window chrome as text.
    pub fn render(&self) -> String {
        let Some(window) = self.browser.window(self.window) else {
            return "window closed".to_string();
        };
        let controller = window.controller();
        let mut out = String::new();

        let _ = writeln!(out, "[{}] theme: {}", window.title(), window.theme().name);

        let toolbar = window.toolbar();
        let buttons: Vec<_> = toolbar
            .buttons()
            .iter()
            .map(|button| format!("[{}]", button.label()))
            .collect();
        let busy = if toolbar.is_loading() { " ..." } else { "" };
        let _ = writeln!(out, " {}{}", buttons.join(" "), busy);
        for label in controller.tab_bar().tabs() {
            let marker = if controller.active_tab_id() == Some(label.id) { '*' } else { ' ' };
            let loading = if label.loading { " (loading)" } else { "" };
            let id = label.id.to_string();
            let _ = writeln!(out, " {} {:<7} {}{}", marker, id, label.title, loading);
        }

        let bar = controller.address_bar();
        if bar.text().is_empty() {
            let _ = write!(out, " > ({})", bar.placeholder());
        } else {
            let _ = write!(out, " > {}", bar.text());
        }
        out
    }

    /// Type `text` into the address bar key by key and press Enter.
    fn type_address(&mut self, text: &str) -> ShellFlow {
        let mut flow = self.execute(ShellInput::Window(WindowCommand::Shortcut(
            KeyboardShortcut::FocusAddressBar,
        )));
        for key in text.chars().map(Key::Char).chain([Key::Enter]) {
            flow = self.execute(ShellInput::Window(WindowCommand::AddressKey(key)));
        }
        flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessEngine;
    use std::time::Duration;
    use tokio::runtime::Handle;
    use ui::{ShellConfig, ThemeMode};

    const DELAY: Duration = Duration::from_millis(5);

    fn shell() -> Shell {
        let browser = Browser::new(ShellConfig::default()).unwrap();
        Shell::new(browser, Box::new(HeadlessEngine::new(Handle::current(), DELAY)))
    }

    async fn settle(shell: &mut Shell) {
        tokio::time::sleep(DELAY * 10).await;
        shell.pump();
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(
            parse_line("new").unwrap(),
            Some(ShellInput::Window(WindowCommand::Toolbar(ToolbarCommand::NewTab)))
        );
        assert_eq!(
            parse_line("close 2").unwrap(),
            Some(ShellInput::Window(WindowCommand::CloseTab(TabId(2))))
        );
        assert_eq!(
            parse_line("TAB tab-1").unwrap(),
            Some(ShellInput::Window(WindowCommand::ActivateTab(TabId(1))))
        );
        assert_eq!(
            parse_line("go  rust borrow checker ").unwrap(),
            Some(ShellInput::Window(WindowCommand::SubmitAddress(
                "rust borrow checker".to_string()
            )))
        );
        assert_eq!(
            parse_line("key Ctrl+W").unwrap(),
            Some(ShellInput::Window(WindowCommand::Shortcut(KeyboardShortcut::CloseTab)))
        );
        assert_eq!(
            parse_line("type rust lang").unwrap(),
            Some(ShellInput::Type("rust lang".to_string()))
        );
        assert_eq!(parse_line("exit").unwrap(), Some(ShellInput::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_line("fly"), Err(ShellError::InvalidCommand(_))));
        assert!(matches!(parse_line("go"), Err(ShellError::InvalidCommand(_))));
        assert!(matches!(parse_line("type "), Err(ShellError::InvalidCommand(_))));
        assert!(matches!(parse_line("tab x"), Err(ShellError::InvalidCommand(_))));
        assert!(matches!(parse_line("key Ctrl+Q"), Err(ShellError::InvalidShortcut(_))));
    }

    #[tokio::test]
    async fn test_start_page_loads() {
        let mut shell = shell();
        settle(&mut shell).await;

        let screen = shell.render();
        assert!(screen.starts_with("[duckduckgo.com - CrypBrowser] theme: Light"), "{}", screen);
        assert!(
            screen.contains(" [Back] [Forward] [Refresh] [Home] [Add Tab] [Remove Current Tab]\n"),
            "{}",
            screen
        );
        assert!(screen.contains(" * tab-0   duckduckgo.com"), "{}", screen);
        assert!(screen.ends_with(" > https://duckduckgo.com/"), "{}", screen);
    }

    #[tokio::test]
    async fn test_toolbar_shows_pending_load() {
        let mut shell = shell();
        shell.pump();

        let screen = shell.render();
        assert!(screen.contains("[Remove Current Tab] ...\n"), "{}", screen);
        assert!(screen.contains(" * tab-0   Loading... (loading)"), "{}", screen);

        settle(&mut shell).await;
        assert!(shell.render().contains("[Remove Current Tab]\n"));
    }

    #[tokio::test]
    async fn test_search_in_new_tab() {
        let mut shell = shell();
        settle(&mut shell).await;

        shell.execute(parse_line("new").unwrap().unwrap());
        shell.execute(parse_line("type rust").unwrap().unwrap());
        settle(&mut shell).await;

        let screen = shell.render();
        assert!(screen.contains(" * tab-1 "), "{}", screen);
        assert!(screen.ends_with(" > https://duckduckgo.com/?q=rust"), "{}", screen);
    }

    #[tokio::test]
    async fn test_background_tab_keeps_its_url_out_of_the_bar() {
        let mut shell = shell();
        settle(&mut shell).await;

        shell.execute(parse_line("new").unwrap().unwrap());
        shell.execute(parse_line("go https://background.example/").unwrap().unwrap());
        // Switch away before the load finishes.
        shell.execute(parse_line("tab 0").unwrap().unwrap());
        settle(&mut shell).await;

        assert!(shell.render().ends_with(" > https://duckduckgo.com/"));

        shell.execute(parse_line("tab 1").unwrap().unwrap());
        assert!(shell.render().ends_with(" > https://background.example/"));
    }

    #[tokio::test]
    async fn test_theme_and_quit() {
        let mut shell = shell();

        assert_eq!(shell.execute(ShellInput::ToggleTheme), ShellFlow::Continue);
        assert_eq!(shell.browser().theme().mode, ThemeMode::Dark);
        assert!(shell.render().contains("theme: Dark"));

        assert_eq!(shell.execute(ShellInput::Quit), ShellFlow::Exit);
        assert!(!shell.browser().is_running());
        assert_eq!(shell.render(), "window closed");
    }

    #[tokio::test]
    async fn test_closing_last_tab_exits() {
        let mut shell = shell();

        let flow = shell.execute(parse_line("close").unwrap().unwrap());

        assert_eq!(flow, ShellFlow::Exit);
        assert!(!shell.browser().is_running());
    }
}
