#[tokio::main]
async fn main() {
    sliding_window::start_server().await;
}
