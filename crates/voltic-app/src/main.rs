use std::fs;
use std::path::PathBuf;

use clap::Parser;
use flexi_logger::{LogSpecBuilder, Logger};
use iced::widget::{checkbox, column, container, slider, text};
use iced::{Alignment, Element, Length, Task};
use log::{debug, error};

use voltic_gui::battery_icon;
use voltic_proto::BatteryIconConfig;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Initial charge level in [0, 1].
    #[arg(short, long, default_value_t = 0.8)]
    level: f32,

    /// Start in the charging state.
    #[arg(short, long)]
    charging: bool,

    /// TOML file overriding the icon configuration.
    #[arg(long, value_parser = clap::value_parser!(PathBuf))]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
enum Message {
    LevelChanged(f32),
    ChargingToggled(bool),
}

struct Demo {
    config: BatteryIconConfig,
    level: f32,
    charging: bool,
}

impl Demo {
    fn update(&mut self, message: Message) {
        match message {
            Message::LevelChanged(level) => self.level = level,
            Message::ChargingToggled(charging) => self.charging = charging,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let percentage = (self.level * 100.0).round().clamp(0.0, 100.0);

        container(
            column![
                battery_icon(self.config.clone(), self.level, self.charging),
                text(format!("{percentage:.0}%")),
                // The slider deliberately overshoots [0, 1] to demonstrate
                // the renderer clamping out-of-range levels.
                slider(-0.2..=1.2, self.level, Message::LevelChanged).step(0.01),
                checkbox("Charging", self.charging).on_toggle(Message::ChargingToggled),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        )
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

fn load_config(path: Option<PathBuf>) -> Result<BatteryIconConfig, String> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .map_err(|err| format!("failed to read config at {}: {err}", path.display()))?;

            toml::from_str(&content)
                .map_err(|err| format!("failed to parse config at {}: {err}", path.display()))
        }
        None => Ok(BatteryIconConfig::default()),
    }
}

fn main() -> iced::Result {
    let args = Args::parse();

    let _logger = Logger::with(
        LogSpecBuilder::new()
            .default(log::LevelFilter::Info)
            .build(),
    )
    .start()
    .expect("Failed to initialize logging");

    debug!("args: {args:?}");

    let config = load_config(args.config_path).unwrap_or_else(|err| {
        error!("{err}");

        std::process::exit(1);
    });

    let demo = Demo {
        config,
        level: args.level,
        charging: args.charging,
    };

    iced::application("voltic", Demo::update, Demo::view)
        .run_with(move || (demo, Task::none()))
}
