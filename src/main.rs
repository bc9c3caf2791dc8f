use chrono::Local;
use color_eyre::{eyre::eyre, Result};
use inputbridge::backend::GilrsBackend;
use inputbridge::config::BridgeConfig;
use inputbridge::envelope::Envelope;
use inputbridge::pump::EventPump;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = setup()?;

    info!("inputbridge {}", inputbridge::version());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Envelope>();

    let mut pump = EventPump::new(config.pump.clone());
    let gilrs_settings = config.gilrs.clone();
    pump.start(move || GilrsBackend::init(&gilrs_settings), event_tx)
        .map_err(|e| eyre!("Failed to start event pump: {}", e))?;

    info!("Listening for events, press Ctrl-C to quit");
    loop {
        tokio::select! {
            envelope = event_rx.recv() => match envelope {
                Some(envelope) => print_envelope(&envelope),
                None => {
                    warn!("Event pump closed the queue");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    pump.stop();
    tokio::task::spawn_blocking(move || pump.wait())
        .await?
        .map_err(|e| eyre!("Event pump did not shut down cleanly: {}", e))?;

    Ok(())
}

fn setup() -> Result<BridgeConfig> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;

    let path = BridgeConfig::default_path();
    let (config, loaded) = match path.as_deref().map(BridgeConfig::load_optional) {
        Some(Ok(Some(config))) => (config, Ok(true)),
        Some(Ok(None)) | None => (BridgeConfig::default(), Ok(false)),
        Some(Err(e)) => (BridgeConfig::default(), Err(e)),
    };

    // The subscriber comes from the config, so load results are logged after.
    inputbridge::logging::init(&config.logging)?;
    match (path, loaded) {
        (Some(path), Ok(true)) => info!("Loaded config from {}", path.display()),
        (Some(path), Ok(false)) => info!("No config at {}, using defaults", path.display()),
        (Some(path), Err(e)) => warn!(
            "Unable to load config from {}, using defaults: {}",
            path.display(),
            e
        ),
        (None, _) => warn!("No config directory on this platform, using defaults"),
    }
    Ok(config)
}

fn print_envelope(envelope: &Envelope) {
    let now = Local::now().format("%H:%M:%S.%3f");
    match envelope {
        Envelope::Device(e) => println!("{now} {:<28} gamepad {}", e.type_name(), e.event().which),
        Envelope::Button(e) => println!(
            "{now} {:<28} gamepad {} {:?}",
            e.type_name(),
            e.event().which,
            e.event().button
        ),
        Envelope::Axis(e) => println!(
            "{now} {:<28} gamepad {} {:?} = {}",
            e.type_name(),
            e.event().which,
            e.event().axis,
            e.event().value
        ),
        Envelope::Sensor(e) => println!(
            "{now} {:<28} gamepad {} {:?} {:?}",
            e.type_name(),
            e.event().which,
            e.event().sensor,
            e.event().data
        ),
        Envelope::Touchpad(e) => println!(
            "{now} {:<28} gamepad {} finger {} at ({:.3}, {:.3})",
            e.type_name(),
            e.event().which,
            e.event().finger,
            e.event().x,
            e.event().y
        ),
        Envelope::Generic(e) => println!("{now} {}", e.type_name()),
    }
}
