// Resolves once the process is asked to stop.
#[cfg(unix)]
pub async fn handle_shutdown() {
    use tokio::signal::unix;

    let signals = (
        unix::signal(unix::SignalKind::quit()),
        unix::signal(unix::SignalKind::terminate()),
        unix::signal(unix::SignalKind::interrupt()),
    );

    let (mut sigquit_signal, mut sigterm_signal, mut sigint_signal) = match signals {
        (Ok(quit), Ok(term), Ok(int)) => (quit, term, int),
        _ => {
            log::error!("Failed to install signal handlers, falling back to Ctrl-C");
            wait_for_ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = sigquit_signal.recv() => {
            log::info!("Received SIGQUIT signal");
        }
        _ = sigterm_signal.recv() => {
            log::info!("Received SIGTERM signal");
        }
        _ = sigint_signal.recv() => {
            log::info!("Received SIGINT signal");
        }
    };
}

#[cfg(not(unix))]
pub async fn handle_shutdown() {
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Received Ctrl-C"),
        Err(e) => {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
