#[tokio::main]
async fn main() -> anyhow::Result<()> {
    namecard_server::run().await
}
