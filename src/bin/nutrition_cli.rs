use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use nutrition_finder::ui::{view, Controller, HttpBackend};

#[derive(Debug, Parser)]
#[command(name = "nutrition-cli", about = "Search foods, adjust calories and save result sets")]
struct Args {
    /// API root of a running nutrition-finder server
    #[arg(long, env = "NUTRITION_API_URL", default_value = "http://localhost:8080/api")]
    api_url: String,
}

#[derive(Debug, Parser)]
#[command(no_binary_name = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search the food database
    Search {
        #[arg(required = true, trailing_var_arg = true)]
        words: Vec<String>,
    },
    /// Toggle selection of a result by index
    Toggle { index: usize },
    SelectAll,
    DeselectAll,
    /// Serving multiplier between 0.5 and 2.0
    Multiplier { value: f64 },
    /// Save every current result
    Save,
    SaveSelected,
    SaveAll,
    /// Show saved queries
    Saved,
    /// Show one saved query as JSON
    View { id: i32 },
    /// Show the current results again
    Results,
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "nutrition_finder=warn".to_string()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut controller = Controller::start(HttpBackend::new(&args.api_url)).await;
    let mut last_error = None;
    report_error(&controller, &mut last_error);
    print!("{}", view::render_saved(controller.saved()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(raw) = lines.next_line().await? {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let line = match Line::try_parse_from(tokens) {
            Ok(line) => line,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match line.command {
            Command::Search { words } => {
                controller.set_query(words.join(" "));
                controller.search().await;
                print!("{}", view::render_results(&controller));
            }
            Command::Toggle { index } => {
                controller.toggle_select(index);
                print!("{}", view::render_results(&controller));
            }
            Command::SelectAll => {
                controller.select_all();
                print!("{}", view::render_results(&controller));
            }
            Command::DeselectAll => {
                controller.deselect_all();
                print!("{}", view::render_results(&controller));
            }
            Command::Multiplier { value } => {
                controller.set_multiplier(value);
                print!("{}", view::render_results(&controller));
            }
            Command::Save => {
                controller.save_results().await;
                print!("{}", view::render_saved(controller.saved()));
            }
            Command::SaveSelected => {
                controller.save_selected().await;
                print!("{}", view::render_saved(controller.saved()));
            }
            Command::SaveAll => {
                controller.save_all().await;
                print!("{}", view::render_saved(controller.saved()));
            }
            Command::Saved => {
                controller.load_saved().await;
                print!("{}", view::render_saved(controller.saved()));
            }
            Command::View { id } => {
                controller.view_saved(id).await;
                if let Some(details) = controller.selected_details() {
                    println!("{}", view::render_details(details));
                }
            }
            Command::Results => print!("{}", view::render_results(&controller)),
            Command::Quit => break,
        }
        report_error(&controller, &mut last_error);
    }

    Ok(())
}

/// The view keeps its error until the next search; print each one once.
fn report_error(controller: &Controller<HttpBackend>, last: &mut Option<String>) {
    let current = controller.error().map(str::to_owned);
    if current != *last {
        if let Some(err) = &current {
            eprintln!("error: {err}");
        }
        *last = current;
    }
}
