use clap::{Parser, Subcommand};
use murmur_embeddings::{HashEmbeddingGenerator, EMBEDDING_DIMENSION};
use murmur_llm::{ChatMessage, ChatResponder};
use tracing_subscriber::EnvFilter;

/// Chat with Gemini or print placeholder embeddings.
#[derive(Parser)]
#[command(name = "murmur", about = "Gemini chat replies and placeholder embeddings")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reply to a conversation; the last message is the prompt
    Chat {
        /// Conversation turns, oldest first
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// Print the embedding of a text
    Embed {
        /// Text to embed
        text: String,

        /// Number of leading elements to print
        #[arg(long, default_value_t = 8)]
        head: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Chat { messages } => {
            let responder = ChatResponder::from_env()?;
            let messages: Vec<ChatMessage> = messages.into_iter().map(ChatMessage::from).collect();
            println!("{}", responder.respond(&messages).await);
        }
        Command::Embed { text, head } => {
            let vector = HashEmbeddingGenerator.generate_text_embedding(&text);
            let shown = head.min(EMBEDDING_DIMENSION);
            println!("dimension: {}", vector.len());
            for (i, value) in vector.iter().take(shown).enumerate() {
                println!("{i}\t{value}");
            }
        }
    }

    Ok(())
}
