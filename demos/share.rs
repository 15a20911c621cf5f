//! Print a share URL for a book given in the command line.

use std::fs;
use std::path::PathBuf;

use booklink::{Book, Locator, RoutingMode};
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the web application.
    #[arg(short, long, env = "BOOKLINK_BASE_URL")]
    base_url: String,

    /// Routing mode of the web application (`path` or `hash`).
    #[arg(short, long, env = "BOOKLINK_ROUTING", default_value_t)]
    routing: RoutingMode,

    /// Title of the book.
    #[arg(short, long)]
    title: String,

    /// Author of the book.
    #[arg(short, long)]
    author: String,

    /// Font used to render the book.
    #[arg(long)]
    font: Option<String>,

    /// Theme used to render the book.
    #[arg(long)]
    theme: Option<String>,

    /// File with the content of the book.
    content: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = Args::parse();

    let mut book = Book::new(args.title, args.author, fs::read_to_string(&args.content)?);

    if let Some(font) = args.font.take() {
        book = book.with_font(font);
    }

    if let Some(theme) = args.theme.take() {
        book = book.with_theme(theme);
    }

    if !book.is_valid() {
        return Err("title, author, and content must not be empty".into());
    }

    let locator = Locator::new(args.base_url).with_routing(args.routing);
    println!("{}", locator.share_url(&book));

    Ok(())
}
