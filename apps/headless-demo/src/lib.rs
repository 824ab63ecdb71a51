pub mod scenarios;

use carousel::HostLauncher;

fn create_launcher() -> HostLauncher {
    HostLauncher::new().with_container(390.0, 240.0)
}

/// Runs every scenario and logs what the carousel did.
pub fn entry_point() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();

    for scenario in scenarios::ALL {
        log::info!("--- {} ---", scenario.name);
        let report = (scenario.run)(create_launcher())?;
        log::info!(
            "{}: final index {}, {} selection changes, {} frames",
            scenario.name,
            report.final_index,
            report.selection_changes.len(),
            report.frames
        );
    }
    Ok(())
}
