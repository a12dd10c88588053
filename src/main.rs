use anyhow::Result;
use imprint::cli::App;

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = App::from_args().await?;
    let args = imprint::cli::Args::parse_args();

    app.run(args).await?;

    Ok(())
}
