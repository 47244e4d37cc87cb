#[tokio::main]
async fn main() {
    if let Err(e) = icu_edu::run().await {
        eprintln!("icu-edu: {e}");
        std::process::exit(1);
    }
}
