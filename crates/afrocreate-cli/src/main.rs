// AfroCreate CLI Entry Point

use afrocreate_cli::{output, router::CommandRouter};

#[tokio::main]
async fn main() {
    if let Err(e) = CommandRouter::route().await {
        output::print_error(&e.user_message());
        std::process::exit(1);
    }
}
