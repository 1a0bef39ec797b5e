//! CrypBrowser - a tabbed browser shell.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Handle;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use browser::shell::HELP;
use browser::{parse_line, HeadlessEngine, Shell, ShellFlow, ShellInput};
use ui::{Browser, ShellConfig, ThemeMode, WindowCommand};

/// CrypBrowser - a tabbed browser shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL or search text to open in the first tab
    url: Option<String>,

    /// Home page
    #[arg(long)]
    home: Option<String>,

    /// Search URL template, with %s marking the query
    #[arg(long)]
    search: Option<String>,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,

    /// Simulated page load latency in milliseconds
    #[arg(long, default_value = "150")]
    load_delay_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn shell_config(&self) -> ShellConfig {
        let mut config = ShellConfig::default();
        if let Some(home) = &self.home {
            config = config.with_home_page(home);
        }
        if let Some(search) = &self.search {
            config = config.with_search_template(search);
        }
        if self.dark {
            config = config.with_theme(ThemeMode::Dark);
        }
        config
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let builder = FmtSubscriber::builder().with_writer(std::io::stderr);
    if verbose {
        tracing::subscriber::set_global_default(builder.with_max_level(Level::DEBUG).finish())?;
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    info!("CrypBrowser v{}", browser::VERSION);

    let browser = Browser::new(args.shell_config())?;
    let engine = HeadlessEngine::new(Handle::current(), Duration::from_millis(args.load_delay_ms));
    let mut shell = Shell::new(browser, Box::new(engine));

    if let Some(url) = args.url {
        info!("Opening: {}", url);
        shell.execute(ShellInput::Window(WindowCommand::SubmitAddress(url)));
    }

    println!("{}", HELP);
    println!("{}", shell.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tick = tokio::time::interval(Duration::from_millis(50));

    while shell.browser().is_running() {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_line(&line) {
                    Ok(None) => continue,
                    Ok(Some(ShellInput::Help)) => println!("{}", HELP),
                    Ok(Some(input)) => {
                        if shell.execute(input) == ShellFlow::Exit {
                            break;
                        }
                        shell.pump();
                        println!("{}", shell.render());
                    }
                    Err(err) => eprintln!("{}", err),
                }
            }
            _ = tick.tick() => {
                if shell.pump() > 0 {
                    println!("{}", shell.render());
                }
            }
        }
    }

    info!("Browser shutdown complete");
    Ok(())
}
