use clap::{Parser, Subcommand};
use reqwest::{RequestBuilder, Url};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "notes-cli")]
#[command(about = "Command-line client for the notes API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: Url,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every note
    List,
    /// Show a single note
    Get { id: String },
    /// Create a note from a title and its items
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Replace the title and items of a note
    Update {
        id: String,
        #[arg(short, long)]
        title: String,
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Delete a note
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let list_url = notes_url(&cli.url, None)?;

    let request = match cli.command {
        Commands::List => client.get(list_url),
        Commands::Get { id } => client.get(notes_url(&cli.url, Some(&id))?),
        Commands::Create { title, items } => client
            .post(list_url)
            .json(&json!({ "title": title, "list": items })),
        Commands::Update { id, title, items } => client
            .put(notes_url(&cli.url, Some(&id))?)
            .json(&json!({ "title": title, "notes": items })),
        Commands::Delete { id } => client.delete(notes_url(&cli.url, Some(&id))?),
    };

    send(request).await
}

/// `<base>/api/v1/notes[/<id>]`, with the id percent-encoded as one segment.
fn notes_url(base: &Url, id: Option<&str>) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| format!("{} cannot be used as a base URL", base))?;
        segments.pop_if_empty().extend(["api", "v1", "notes"]);
        if let Some(id) = id {
            segments.push(id);
        }
    }
    Ok(url)
}

async fn send(request: RequestBuilder) -> Result<(), Box<dyn std::error::Error>> {
    let res = request.send().await?;
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: notes API returned status {}", status);
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    if text.is_empty() {
        println!("{}", status);
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
