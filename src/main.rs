#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    ticketing_backend::run().await;
}
