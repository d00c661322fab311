use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

pub const BANNER_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerVariant {
    Error,
    Success,
}

impl BannerVariant {
    fn color(self) -> Color {
        match self {
            BannerVariant::Error => Color::Red,
            BannerVariant::Success => Color::Green,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub variant: BannerVariant,
    pub created_at: Instant,
}

impl Banner {
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_variant(message, BannerVariant::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_variant(message, BannerVariant::Success)
    }

    fn with_variant(message: impl Into<String>, variant: BannerVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }

    /// Draws the banner centred along the top edge of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let color = self.variant.color();

        let box_width = (self.message.chars().count() + 4).min(area.width as usize) as u16;
        let banner_area = Rect {
            x: area.x + area.width.saturating_sub(box_width) / 2,
            y: area.y,
            width: box_width,
            height: area.height.min(3),
        };

        let widget = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        frame.render_widget(Clear, banner_area);
        frame.render_widget(widget, banner_area);
    }
}
