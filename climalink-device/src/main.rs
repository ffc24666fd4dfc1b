//! Climalink - environmental sensor node
//!
//! Runs the node on the host: the serial link is stdin/stdout, peripherals
//! are simulated and logs go to stderr (`RUST_LOG`, default `info`).
//!
//! ```text
//! $ printf '#PT025|059!' | climalink-device
//! #PT+35|055!
//! ```

use std::path::PathBuf;

use clap::Parser;
use embassy_executor::{SpawnError, Spawner};
use log::{error, info};

use climalink_core::config::DeviceConfig;
use climalink_protocol::command::{BUTTON_COUNT, LED_COUNT};
use climalink_protocol::Dialect;

mod channels;
mod config;
mod sim;
mod tasks;

use sim::{SimAdc, SimButton, SimLed, StdinUart, StdoutUart};

/// ADC step per sample of the simulated input
const ADC_SWEEP_STEP: u16 = 37;

/// Base press cycle of the simulated buttons
const BUTTON_CYCLE_MS: u32 = 4000;

#[derive(Parser, Debug)]
#[command(version, about = "Climalink sensor node with simulated peripherals")]
struct Args {
    /// TOML configuration file (defaults to the embedded device.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Accept the hardware opcodes (B, D, O<n>, V) regardless of the config
    #[arg(long)]
    hardware: bool,
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("Climalink device starting...");

    let mut config = match config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{e:#}");
            std::process::exit(2);
        }
    };
    if args.hardware {
        config.protocol.dialect = Dialect::Hardware;
    }
    config::log_summary(&config);

    if let Err(e) = sim::spawn_stdin_reader(StdinUart::new()) {
        error!("Cannot start link reader: {e}");
        std::process::exit(1);
    }

    if let Err(e) = spawn_tasks(spawner, &config) {
        error!("Task spawn failed: {:?}", e);
        std::process::exit(1);
    }

    info!("All tasks spawned, device running");
}

fn spawn_tasks(spawner: Spawner, config: &DeviceConfig) -> Result<(), SpawnError> {
    let adc = SimAdc::new(config.adc.resolution_bits, ADC_SWEEP_STEP);
    let buttons: [SimButton; BUTTON_COUNT] =
        core::array::from_fn(|index| SimButton::new(index, BUTTON_CYCLE_MS));
    let leds: [SimLed; LED_COUNT] = core::array::from_fn(SimLed::new);
    let tx = StdoutUart::new(config.protocol.echo_newline);

    spawner.spawn(tasks::adc_task(adc, config.adc))?;
    spawner.spawn(tasks::button_task(buttons, config.buttons.period_ms))?;
    spawner.spawn(tasks::led_task(leds, config.leds.period_ms))?;
    if config.sensors.is_periodic() {
        spawner.spawn(tasks::sensor_task(config.sensors.period_ms))?;
    }
    spawner.spawn(tasks::protocol_task(tx, config.protocol.dialect))?;

    Ok(())
}
