use anyhow::Context;
use ohm::kernel::config::load_config;
use ohm_logger::Logger;
use ohm_server::Server;
use std::path::PathBuf;

#[cfg(feature = "profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[ohm_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    #[cfg(feature = "profiling")]
    let _profiler = dhat::Profiler::new_heap();

    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    // An explicit path must exist; without one `server.toml` is optional.
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg = load_config(path).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
