pub type Rgb = (u8, u8, u8);

pub const CORRECT: Rgb = (0x28, 0xa7, 0x45);
pub const INCORRECT: Rgb = (0xdc, 0x35, 0x45);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Palette {
    pub text: Rgb,
    pub accent: Rgb,
    pub accent_hover: Rgb,
    pub panel: Rgb,
    pub explanation_panel: Rgb,
    pub explanation_text: Rgb,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                text: (0x00, 0x00, 0x00),
                accent: (0x8c, 0x52, 0xff),
                accent_hover: (0x6b, 0x35, 0xcc),
                panel: (0xf0, 0xf2, 0xf6),
                explanation_panel: (0xe0, 0xe0, 0xe0),
                explanation_text: (0x33, 0x33, 0x33),
            },
            Theme::Dark => Palette {
                text: (0xf0, 0xf0, 0xf0),
                accent: (0xbb, 0x86, 0xfc),
                accent_hover: (0x9f, 0x6e, 0xf2),
                panel: (0x2c, 0x2c, 0x2c),
                explanation_panel: (0x3a, 0x3a, 0x3a),
                explanation_text: (0xdc, 0xdc, 0xdc),
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
