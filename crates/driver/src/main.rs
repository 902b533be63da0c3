mod settings;

use crate::settings::Settings;
use anyhow::{Context, anyhow};
use clap::Parser;
use config::Config;
use crossbeam_channel as channel;
use hui_library::{HuiEvent, Surface};
use midir::os::unix::{VirtualInput, VirtualOutput};
use midir::{MidiInput, MidiInputConnection, MidiOutput, MidiOutputConnection};
use std::io::BufRead;
use std::thread;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

#[derive(Parser, Debug)]
#[clap(
    name = "Headless HUI control surface",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
)]
struct Args {
    #[clap(short, long, help = "Config file (see example_config.toml)")]
    config: Option<String>,

    #[clap(long, help = "Do not answer host pings")]
    no_ping_reply: bool,

    #[clap(long, help = "Do not send a system reset once the ports are up")]
    no_reset_on_start: bool,
}

impl Args {
    /// Command line switches override the config file.
    fn override_settings(&self, settings: &mut Settings) {
        if self.no_ping_reply {
            settings.reply_to_ping = false;
        }
        if self.no_reset_on_start {
            settings.reset_on_start = false;
        }
    }
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut cfg = Config::builder();

    if let Some(config_fn) = &args.config {
        cfg = cfg.add_source(config::File::with_name(config_fn.as_str()));
    }

    let cfg = cfg.build().context("Can't create settings")?;
    let mut settings: Settings = cfg.try_deserialize().context("Can't parse settings")?;

    args.override_settings(&mut settings);
    settings.validate().map_err(|e| anyhow!(e))?;
    Ok(settings)
}

/// `log_level` from the settings is the default, `RUST_LOG` wins.
fn setup_logger(settings: &Settings) {
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&settings.log_level)
        .parse_default_env()
        .init()
}

fn create_midi_input(
    settings: &Settings,
    tx: channel::Sender<Vec<u8>>,
) -> Result<MidiInputConnection<()>> {
    let midi_input = MidiInput::new(&format!("{} In", settings.client_name))
        .context("Couldn't open MIDI input")?;

    midi_input
        .create_virtual(
            &settings.port_name_in,
            move |_timestamp, message, _| {
                // The receiving side is gone only while shutting down.
                let _ = tx.send(message.to_vec());
            },
            (),
        )
        .map_err(|e| anyhow!("Couldn't create virtual input port: {e}"))
}

fn create_midi_output(settings: &Settings) -> Result<MidiOutputConnection> {
    let output = MidiOutput::new(&settings.client_name).context("Couldn't open MIDI output")?;
    output
        .create_virtual(&settings.port_name)
        .map_err(|e| anyhow!("Couldn't create virtual output port: {e}"))
}

/// Quit on end of input or a line reading "q".
fn spawn_quit_watcher() -> channel::Receiver<()> {
    let (tx, rx) = channel::bounded(0);
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim() == "q" => break,
                Ok(_) => {}
                Err(_) => break,
            }
        }
        let _ = tx.send(());
    });
    rx
}

fn flush(surface: &mut Surface, port: &mut MidiOutputConnection) -> Result {
    for message in surface.take_outbound() {
        log::trace!("sending {message}");
        port.send(&message.to_bytes())
            .with_context(|| format!("Couldn't send {message}"))?;
    }
    Ok(())
}

fn log_event(surface: &Surface, event: &HuiEvent, settings: &Settings) {
    match event {
        HuiEvent::PingReceived => log::trace!("{event}"),
        HuiEvent::FaderLevel { .. } | HuiEvent::VPot { .. } | HuiEvent::LevelMeter { .. } => {
            log::debug!("{event}")
        }
        HuiEvent::LargeDisplay { .. } => {
            log::info!("{event}");
            if settings.dump_displays {
                let display = &surface.state().large_display;
                log::info!("|{}|", display.top());
                log::info!("|{}|", display.bottom());
            }
        }
        HuiEvent::TimeDisplay { .. } => {
            if settings.dump_displays {
                log::info!("time [{}]", surface.state().time_display.text());
            } else {
                log::debug!("{event}");
            }
        }
        _ => log::info!("{event}"),
    }
}

fn main_loop(
    surface: &mut Surface,
    port: &mut MidiOutputConnection,
    inbound: channel::Receiver<Vec<u8>>,
    quit: channel::Receiver<()>,
    settings: &Settings,
) -> Result {
    loop {
        channel::select! {
            recv(inbound) -> raw => {
                let Ok(raw) = raw else {
                    log::warn!("MIDI input closed");
                    break;
                };
                if let Some(event) = surface.midi_in(&raw) {
                    log_event(surface, &event, settings);
                }
                flush(surface, port)?;
            }
            recv(quit) -> _ => break,
        }
    }
    Ok(())
}

fn run(settings: Settings) -> Result {
    log::info!("Running with settings: {settings:?}");

    let mut port = create_midi_output(&settings)?;

    let (tx, inbound) = channel::unbounded();
    let input_connection = create_midi_input(&settings, tx)?;

    let mut surface = Surface::new().with_ping_reply(settings.reply_to_ping);
    if settings.reset_on_start {
        surface.power_on();
        flush(&mut surface, &mut port)?;
    }

    let quit = spawn_quit_watcher();
    log::info!("Ready. Type q or close stdin to quit");
    main_loop(&mut surface, &mut port, inbound, quit, &settings)?;

    input_connection.close();
    surface.power_off();
    flush(&mut surface, &mut port)?;
    port.close();
    Ok(())
}

fn main() -> Result {
    let args = Args::parse();
    let settings = load_settings(&args)?;
    setup_logger(&settings);
    run(settings)
}
