//! Cell formats shared by every sheet of a tracker workbook

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

/// Palette built once per generated workbook and borrowed by the sheet emitters
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    pub header: Format,
    pub date: Format,
    pub centered: Format,
    pub time: Format,
    pub percent: Format,
    pub done: Format,
    pub pending: Format,
    pub skipped: Format,
    pub high: Format,
    pub medium: Format,
    pub low: Format,
    pub title: Format,
}

impl StyleRegistry {
    pub fn new() -> Self {
        StyleRegistry {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(0x0B5394))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin),
            date: bordered_center().set_num_format("dd-mm-yyyy"),
            centered: bordered_center(),
            time: bordered_center().set_num_format("0.00"),
            percent: bordered_center().set_num_format("0.0%"),
            done: Format::new()
                .set_background_color(Color::RGB(0xC6EFCE))
                .set_font_color(Color::RGB(0x006100)),
            pending: Format::new()
                .set_background_color(Color::RGB(0xFFEB9C))
                .set_font_color(Color::RGB(0x9C6500)),
            skipped: Format::new()
                .set_background_color(Color::RGB(0xFFC7CE))
                .set_font_color(Color::RGB(0x9C0006)),
            high: Format::new().set_background_color(Color::RGB(0xFFCDD2)),
            medium: Format::new().set_background_color(Color::RGB(0xFFF9C4)),
            low: Format::new().set_background_color(Color::RGB(0xC8E6C9)),
            title: Format::new()
                .set_bold()
                .set_font_size(16)
                .set_align(FormatAlign::Center),
        }
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn bordered_center() -> Format {
    Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
}
