//! Canvas widget rendering the battery icon.

use iced::mouse::Cursor;
use iced::widget::canvas::{self, Cache, Canvas, Geometry, Program, Stroke};
use iced::{Element, Length, Rectangle, Renderer, Theme};

use voltic_core::{DrawOp, Rect, compose_battery_icon};
use voltic_proto::BatteryIconConfig;

use crate::convert;

/// Battery icon canvas program.
///
/// A plain value: the hosting view rebuilds it with the current level and
/// charging flag on every render, and the geometry is recomputed from
/// scratch each draw.
#[derive(Clone, Debug)]
pub struct BatteryIcon {
    pub config: BatteryIconConfig,
    pub level: f32,
    pub charging: bool,
}

impl BatteryIcon {
    pub fn new(level: f32, charging: bool) -> Self {
        Self::with_config(BatteryIconConfig::default(), level, charging)
    }

    pub fn with_config(config: BatteryIconConfig, level: f32, charging: bool) -> Self {
        Self {
            config,
            level,
            charging,
        }
    }
}

impl<Message> Program<Message> for BatteryIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let cache = Cache::new();

        vec![cache.draw(renderer, bounds.size(), |frame| {
            let area = Rect::new(0.0, 0.0, bounds.width, bounds.height);

            for op in compose_battery_icon(area, &self.config, self.level, self.charging) {
                match op {
                    DrawOp::Fill { path, color } => {
                        frame.fill(&convert::path(&path), convert::color(color));
                    }
                    DrawOp::Stroke {
                        path,
                        color,
                        width,
                        cap,
                        join,
                    } => {
                        frame.stroke(
                            &convert::path(&path),
                            Stroke {
                                style: canvas::Style::Solid(convert::color(color)),
                                width,
                                line_cap: convert::line_cap(cap),
                                line_join: convert::line_join(join),
                                ..Stroke::default()
                            },
                        );
                    }
                }
            }
        })]
    }
}

/// Convenience constructor returning the icon as an [`Element`].
pub fn battery_icon<'a, Message: 'a>(
    config: BatteryIconConfig,
    level: f32,
    charging: bool,
) -> Element<'a, Message> {
    Canvas::new(BatteryIcon::with_config(config, level, charging))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_config() {
        let icon = BatteryIcon::new(0.5, false);
        assert_eq!(icon.config, BatteryIconConfig::default());
        assert_eq!(icon.level, 0.5);
        assert!(!icon.charging);
    }
}
