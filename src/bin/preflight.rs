use movie_catalog::infra::{config, stores, telemetry};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads env vars (all optional):\n\
           HOST, PORT, STORE_BACKEND=memory|postgres, DATABASE_URL, DB_MAX_CONNECTIONS, REQUIRE_AUTH\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if something is malformed)
    let addr = config::bind_addr()?;
    let backend = config::store_backend()?;
    let require_auth = config::require_auth();

    println!("> Preflight:");
    println!("  bind address: {}", addr);
    println!("  store backend: {:?}", backend);
    println!("  auth guard on /movies/:id: {}", require_auth);

    let stores = stores::open_from_env().await?;
    stores
        .movies
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("Movie store unreachable: {}", e))?;
    stores
        .users
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("User store unreachable: {}", e))?;
    println!("  Stores reachable.");

    let movies = stores.movies.list().await?;
    let users = stores.users.list().await?;
    println!("  {} movies, {} users", movies.len(), users.len());

    println!("> Preflight OK.");
    Ok(())
}
