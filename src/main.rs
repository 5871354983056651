#[tokio::main]
async fn main() {
    if let Err(e) = sessiongate::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
