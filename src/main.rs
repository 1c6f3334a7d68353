use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;

use pixel_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use pixel_wm::runner::{DesktopConfig, run_desktop};
use pixel_wm::tracing_sub;

#[derive(Parser, Debug)]
#[command(
    name = "pixel-wm",
    about = "Clipping window compositor rendered into the terminal",
    after_help = indoc! {"
        Controls:
          click \"New Calculator\"   open a calculator
          drag a titlebar          move a window
          q / Ctrl+C               quit
    "}
)]
struct Cli {
    /// Buffer pixels per terminal column
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=8))]
    scale: u16,

    /// Append debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Input poll interval in milliseconds
    #[arg(long, default_value_t = 16)]
    poll_ms: u64,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init_default(cli.log_file.as_deref())?;

    let config = DesktopConfig {
        scale: cli.scale,
        poll_interval: Duration::from_millis(cli.poll_ms),
    };
    let mut output = ConsoleOutputDriver::new(config.scale)?;
    let result = run_desktop(ConsoleInputDriver::new(), &mut output, config);
    if let Err(err) = &result {
        tracing::error!(error = %err, "desktop exited with error");
    }
    result
}
