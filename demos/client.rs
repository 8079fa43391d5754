use argh::FromArgs;
use std::path::PathBuf;

// defaults for the client
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 7860;

#[derive(FromArgs)]
/// Client for the mixing degree assessment server
struct ClientArgs {
    /// the host to connect to
    #[argh(option, short = 'h', default = "DEFAULT_HOST.to_string()")]
    host: String,

    /// the port to connect to
    #[argh(option, short = 'p', default = "DEFAULT_PORT")]
    port: u16,

    /// command to execute: "assess" or "options"
    #[argh(subcommand)]
    command: ClientCommands,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum ClientCommands {
    Assess(AssessCommand),
    Options(OptionsCommand),
}

#[derive(FromArgs)]
/// Ask for an assessment, sending no image when the path is omitted
#[argh(subcommand, name = "assess")]
struct AssessCommand {
    /// the path to the image
    #[argh(option, short = 'i')]
    image_path: Option<PathBuf>,
}

#[derive(FromArgs)]
/// List the labels the server may answer
#[argh(subcommand, name = "options")]
struct OptionsCommand {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: ClientArgs = argh::from_env();

    let client = reqwest::Client::new();

    // format the host and port
    let addr = format!("{}:{}", args.host, args.port);

    let response = match args.command {
        ClientCommands::Assess(assess_command) => {
            let body = match assess_command.image_path {
                Some(path) => tokio::fs::read(path).await?,
                None => Vec::new(),
            };
            client
                .post(format!("http://{}/assess", addr))
                .header("Content-Type", "application/octet-stream")
                .body(body)
                .send()
                .await?
        }
        ClientCommands::Options(_) => {
            client
                .get(format!("http://{}/options", addr))
                .send()
                .await?
        }
    };

    let result = response.json::<serde_json::Value>().await?;
    println!("Result: {}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
