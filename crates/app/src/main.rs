use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use akson_core::model::{Activity, LessonCatalog};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::AppServices;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LESSONS_PATH: &str = "data/lessons.json";
const WINDOW_TITLE: &str = "តោះរៀនជាមួយប៉ាៗ";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLessonsPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLessonsPath { raw } => write!(f, "invalid --lessons value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    lessons_path: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--lessons <path>]");
    eprintln!("  cargo run -p app -- check [--lessons <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --lessons {DEFAULT_LESSONS_PATH}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  AKSON_LESSONS_PATH                  lesson data file");
    eprintln!("  AKSON_AI_API_KEY                    enables generated stories");
    eprintln!("  AKSON_AI_BASE_URL, AKSON_AI_MODEL   chat completions endpoint and model");
    eprintln!("  RUST_LOG                            log filter (default: info)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut lessons_path = std::env::var("AKSON_LESSONS_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_LESSONS_PATH), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--lessons" => {
                    let value = require_value(args, "--lessons")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLessonsPath { raw: value });
                    }
                    lessons_path = PathBuf::from(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { lessons_path })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        eprintln!("logging disabled: {err}");
    }
}

fn print_catalog(catalog: &LessonCatalog) {
    println!("{} lessons", catalog.len());
    for (index, lesson) in catalog.iter() {
        let availability = lesson.availability();
        let activities: Vec<&str> = Activity::ALL
            .iter()
            .filter(|&&activity| availability.allows(activity))
            .map(|activity| activity.slug())
            .collect();
        println!(
            "  [{index}] {} {} (p.{}): {} syllables, {} words, {} story lines; {}",
            lesson.number(),
            lesson.title(),
            lesson.source_page(),
            lesson.syllables().len(),
            lesson.words().len(),
            lesson.story().lines().len(),
            activities.join(", "),
        );
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    tracing::info!(lessons = %parsed.lessons_path.display(), command = ?cmd, "starting");

    let services = AppServices::from_json_file(parsed.lessons_path.clone());
    if !services.story_service().enabled() {
        tracing::info!("AKSON_AI_API_KEY not set; generated stories are disabled");
    }

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(services);
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(WINDOW_TITLE)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            let lessons = services.lesson_service();
            let catalog = lessons.load_catalog().await?;
            println!("source: {}", lessons.source());
            print_catalog(&catalog);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
