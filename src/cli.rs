use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "advisor")]
#[command(
    about = "Weather-aware activity recommendations via LLM tool calling",
    long_about = None
)]
pub struct Args {
    #[arg(long = "model", help = "Model to use (default: gpt-4)")]
    pub model: Option<String>,

    #[arg(
        long = "api-endpoint",
        help = "Custom API base URL (e.g., http://localhost:11434/v1)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Print diagnostic output to stderr")]
    pub verbose: bool,

    #[arg(
        long = "max-rounds",
        help = "Maximum number of completion requests per run"
    )]
    pub max_rounds: Option<usize>,

    #[arg(help = "Question to ask (default: activity recommendations)")]
    pub query: Vec<String>,
}

impl Args {
    pub fn query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}
