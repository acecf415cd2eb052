use ratatui::layout::Rect;

use crate::ui::render::BUTTON_LABEL;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    pub button_row: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let button_height =
        BUTTON_HEIGHT.min(area.height.saturating_sub(header_height + footer_height));
    let body_height = area
        .height
        .saturating_sub(header_height + footer_height + button_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: body_height,
    };
    let button_row = Rect {
        x: area.x,
        y: body.y + body_height,
        width: area.width,
        height: button_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    Regions {
        header,
        body,
        button_row,
        footer,
    }
}

/// Where the refresh button is drawn; also its click target.
pub fn button_rect(area: Rect) -> Rect {
    let row = layout_regions(area).button_row;
    // Label plus one space of padding and a border on each side
    let wanted = BUTTON_LABEL.chars().count() as u16 + 4;
    let width = wanted.min(row.width);
    Rect {
        x: row.x + (row.width - width) / 2,
        y: row.y,
        width,
        height: row.height,
    }
}
