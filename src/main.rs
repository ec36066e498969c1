use keybox_checker::{
    config::Config, pki::revocation::RevocationListFetcher, scanner::Scanner, telemetry,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    telemetry::init_tracing();

    // Load configuration
    let config = Config::load()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    // The scan is meaningless without the revocation list, so any
    // download failure ends the run here.
    println!("\nDownloading online attestation list...");
    let fetcher = RevocationListFetcher::new(
        config.revocation.status_url.clone(),
        config.revocation.timeout_secs,
    )?;
    let revoked = fetcher.fetch().await?;

    let scanner = Scanner::new(revoked);
    let report = scanner.scan_directory(&config.scan.directory).await?;

    if report.files_scanned() == 0 {
        println!(
            "\nNo XML files found in {}",
            config.scan.directory.display()
        );
        return Ok(());
    }

    report.print_summary();
    Ok(())
}
