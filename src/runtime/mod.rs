use async_io::block_on;
use clap::Parser;
use tracing::{info, warn};

use crate::actuator::CommandActuator;
use crate::cli::Cli;
use crate::controller::TrackChangeController;
use crate::mpris::PlayerWatcher;
use crate::player::PlayerProfile;
use crate::scheduler::ToggleScheduler;
use crate::sinks::CommandSinkLister;

mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (settings, problem) = settings::load_settings(&cli);

    logging::init(&settings.log, cli.verbose);
    if let Some(msg) = problem {
        warn!("admute: {msg}");
    }

    let profile = PlayerProfile::from_settings(&settings.player);
    info!(
        player = %profile.bus_name,
        binary = %profile.binary_name,
        "starting ad muter"
    );

    let lister = CommandSinkLister::new(settings.audio.list_command.clone());
    let actuator = CommandActuator::new(
        settings.audio.stream_mute_command.clone(),
        settings.audio.master_mute_command.clone(),
    );
    let scheduler = ToggleScheduler::new(actuator, settings.scheduler.drop_superseded);
    let controller = TrackChangeController::new(profile, lister, scheduler);

    block_on(async move {
        let watcher = PlayerWatcher::connect(controller).await?;
        watcher.run().await
    })?;

    Ok(())
}
