use clap::Parser;
use console::Style;
use futures::FutureExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tokio::io::AsyncBufReadExt;
use todo_query_lib::{dispatch, finder::langs, Message, Reply, Snapshot};

#[derive(clap::Parser, Debug)]
#[command(
    version,
    about,
    author,
    help_template(
        "\
{before-help}{name} {version} by {author-with-newline}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}"
    )
)]
struct Cli {
    #[clap(default_value = ".")]
    /// The directory to scan for TODOs.
    path: PathBuf,

    #[clap(short = 'x', long = "extension")]
    /// File extension to scan, may be supplied multiple times.
    /// Defaults to the extensions of every language with `//` line comments.
    extensions: Vec<String>,

    #[clap(short, long)]
    /// Name of a directory to skip, may be supplied multiple times.
    exclude: Vec<String>,

    #[clap(long)]
    /// Print the TODOs as JSON to stdout and exit instead of reading commands.
    json: bool,
}

struct Printer {
    red: Style,
    yellow: Style,
    green: Style,
    dim: Style,
    read_files_progress: ProgressBar,
}

impl Default for Printer {
    fn default() -> Self {
        let spinner_style = ProgressStyle::with_template("{spinner} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ");
        let read_files_progress = ProgressBar::new_spinner();
        read_files_progress.set_style(spinner_style);

        Self {
            red: Style::new().red(),
            yellow: Style::new().yellow(),
            green: Style::new().green(),
            dim: Style::new().dim(),
            read_files_progress,
        }
    }
}

impl Printer {
    fn print(&mut self, msg: Message) {
        use Message::*;

        match msg {
            Error(err) => {
                self.read_files_progress.finish_and_clear();
                eprintln!("{}", self.red.apply_to(err.to_string()));
            }

            ScanningFiles { root } => eprintln!("Scanning {} for TODOs...", root.display()),

            ReadFile { path } => {
                self.read_files_progress.inc(1);
                self.read_files_progress.set_message(format!(
                    "Read {} files {}",
                    self.read_files_progress.position(),
                    self.dim.apply_to(path.display())
                ));
            }

            SkippedFile { path, reason } => {
                self.read_files_progress.suspend(|| {
                    eprintln!(
                        "{} {} {}",
                        self.yellow.apply_to("  skipped"),
                        path.display(),
                        self.dim.apply_to(reason)
                    );
                });
            }

            ScannedFiles { count } => {
                self.read_files_progress.finish_and_clear();
                eprintln!("  scanned {count} file{}", if count == 1 { "" } else { "s" });
            }
        }
    }

    async fn message_loop<T>(&mut self, handle: &tokio::task::JoinHandle<T>) {
        let recv = Message::receiver();
        loop {
            let mut timeout =
                std::pin::pin!(tokio::time::sleep(std::time::Duration::from_millis(100)).fuse());
            let mut get_msg = std::pin::pin!(recv.recv().fuse());
            futures::select! {
                msg = get_msg => if let Ok(msg) = msg {
                    self.print(msg);
                },
                _ = timeout => {}
            }
            if handle.is_finished() {
                break;
            }
        }
        while let Ok(msg) = recv.try_recv() {
            self.print(msg);
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::builder().init();

    let Cli {
        path,
        extensions,
        exclude,
        json,
    } = Cli::parse();
    let extensions = if extensions.is_empty() {
        langs::default_extensions()
    } else {
        for ext in extensions.iter().map(|ext| ext.trim_start_matches('.')) {
            let names = langs::languages_for(ext);
            if names.is_empty() {
                log::warn!("no known language with `//` comments uses .{ext}");
            } else {
                log::debug!(".{ext} is {}", names.join(", "));
            }
        }
        extensions
    };
    log::debug!("scanning extensions {extensions:?}, excluding {exclude:?}");

    eprintln!("🌈 Starting todo_query...");

    let mut printer = Printer::default();
    let handle = tokio::task::spawn(async move {
        Snapshot::from_directory(path, &extensions, &exclude).await
    });

    // While the snapshot is being taken, print the messages to the terminal
    printer.message_loop(&handle).await;
    let snapshot = match handle.await {
        Ok(Ok(snapshot)) => snapshot,
        Ok(Err(err)) => {
            printer.print(Message::Error(err));
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{}", printer.red.apply_to(err.to_string()));
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&snapshot.todos()) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{}", printer.red.apply_to(err.to_string()));
                std::process::exit(1);
            }
        }
        return;
    }

    eprintln!("Please, write your command!");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match dispatch(&snapshot, &line) {
                Reply::Text(text) => println!("{text}"),
                Reply::Exit => break,
            },
            Ok(None) => break,
            Err(err) => {
                eprintln!("{}", printer.red.apply_to(err.to_string()));
                break;
            }
        }
    }

    eprintln!("🏁 {}", printer.green.apply_to("All done!"));
}
