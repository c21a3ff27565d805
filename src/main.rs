#[actix_web::main]
async fn main() -> std::io::Result<()> {
    portfolio_backend::serve().await
}
