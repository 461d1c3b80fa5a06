use proxyprobe::cli::Cli;
use proxyprobe::config::ProxyEndpoint;
use proxyprobe::core::probe::{render_report, run_all_checks, ProbeClient};

#[cfg(feature = "network-probe")]
use proxyprobe::core::probe::IsahcProbeClient;

#[cfg(not(feature = "network-probe"))]
use proxyprobe::core::probe::MockProbeClient;

#[cfg(feature = "network-probe")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    main_impl().await
}

#[cfg(not(feature = "network-probe"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    futures::executor::block_on(main_impl())
}

async fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    let endpoint = ProxyEndpoint::new(cli.host, cli.port);
    let proxy_url = endpoint.proxy_url()?;

    #[cfg(feature = "network-probe")]
    let client: Box<dyn ProbeClient> = Box::new(IsahcProbeClient::new(&proxy_url)?);
    #[cfg(not(feature = "network-probe"))]
    let client: Box<dyn ProbeClient> = Box::new(MockProbeClient::default());

    // Check failures become report lines, never a non-zero exit status.
    let results = run_all_checks(client.as_ref(), cli.timeout_ms).await;
    print!("{}", render_report(&proxy_url, &results));

    Ok(())
}
