use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let addr = mock_server::resolve_addr(
        std::env::args().nth(1),
        std::env::var("COMPRAS_MOCK_ADDR").ok(),
    );
    let listener = TcpListener::bind(&addr).await?;
    println!("mock ListaCompras listening on {addr}");
    mock_server::run(listener).await
}
