//! Show the book contained in a share URL.

use booklink::{Locator, RoutingMode};
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Routing mode of the web application (`path` or `hash`).
    #[arg(short, long, env = "BOOKLINK_ROUTING", default_value_t)]
    routing: RoutingMode,

    /// Share URL.
    url: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // The base URL is not needed to read a book.
    let locator = Locator::new("").with_routing(args.routing);

    let book = match locator.read(&args.url)? {
        Some(book) => book,
        None => {
            eprintln!("No book in {}", args.url);
            return Ok(());
        }
    };

    println!("Title: {}", book.title());
    println!("Author: {}", book.author());

    if let Some(font) = book.font() {
        println!("Font: {}", font);
    }

    if let Some(theme) = book.theme() {
        println!("Theme: {}", theme);
    }

    println!("\n{}", book.content());

    Ok(())
}
