use anyhow::{Context, Result};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;
use tangoboard::client::FeedClient;
use tangoboard::config::Config;
use tangoboard::context::StandardContext;
use tangoboard::page::Page;

#[derive(Debug, Default)]
struct Args {
    root: Option<PathBuf>,
    base_url: Option<String>,
    viewport: Option<u32>,
    more: usize,
}

fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let mut parsed = Args::default();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => return Ok(None),
            "--config" => {
                let v = iter.next().context("--config needs a directory")?;
                parsed.root = Some(PathBuf::from(v));
            }
            "--base-url" => {
                parsed.base_url = Some(iter.next().context("--base-url needs a URL")?.clone());
            }
            "--viewport" => {
                let v = iter.next().context("--viewport needs a width")?;
                parsed.viewport = Some(
                    v.parse()
                        .with_context(|| format!("Invalid viewport width '{}'", v))?,
                );
            }
            "--more" => {
                let v = iter.next().context("--more needs a count")?;
                parsed.more = v
                    .parse()
                    .with_context(|| format!("Invalid --more count '{}'", v))?;
            }
            other => anyhow::bail!("Unknown argument '{}'. Try --help.", other),
        }
    }
    Ok(Some(parsed))
}

fn init_logging() {
    let level = env::var("TANGOBOARD_LOG")
        .ok()
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(args) = parse_args(&args)? else {
        print_help();
        return Ok(());
    };

    init_logging();

    let ctx = StandardContext::new(args.root);
    let mut config = Config::load_or_default(&ctx)?;
    if let Some(url) = args.base_url {
        config.base_url = url;
    }
    if let Some(width) = args.viewport {
        config.viewport_width = width;
    }

    let client = FeedClient::new(&config.base_url, &config.user_agent);
    let mut page = Page::init(config, &client).await;
    for _ in 0..args.more {
        page.show_more();
    }

    print!("{}", page.render_html());
    Ok(())
}

fn print_help() {
    println!(
        "Tangoboard v{} - Milonga calendar and teacher directory renderer",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    tangoboard [OPTIONS]            Fetch both feeds and print the page to stdout");
    println!();
    println!("OPTIONS:");
    println!("    --config <dir>       Read <dir>/config/config.toml instead of the user config");
    println!("    --base-url <url>     Site the data/*.json feeds are served from");
    println!("    --viewport <px>      Viewport width; 600 or less shows 2 milongas, else 5");
    println!("    --more <n>           Press \"Mehr anzeigen\" n times before rendering");
    println!("    --help               Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    TANGOBOARD_LOG       Log level on stderr (error, warn, info, debug, trace)");
}
