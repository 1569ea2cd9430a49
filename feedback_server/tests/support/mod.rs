use std::sync::{OnceLock, mpsc};
use std::thread;

static BASE_URL: OnceLock<String> = OnceLock::new();

// Starts the server once on its own thread and runtime, so it outlives every
// `#[tokio::test]` runtime, and returns its base URL. The listener is bound
// before the address is published, so early connections queue until accept.
pub fn base_url() -> &'static str {
    BASE_URL.get_or_init(|| {
        let (addr_tx, addr_rx) = mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                addr_tx.send(addr).expect("publish server addr");
                feedback_server::run(listener).await.expect("server failed");
            });
        });

        let addr = addr_rx.recv().expect("server thread should publish its addr");
        format!("http://{addr}")
    })
}
