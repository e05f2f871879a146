use std::fmt;
use std::str::FromStr;

/// A color from the named-color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    name: &'static str,
    rgb: (u8, u8, u8),
}

impl NamedColor {
    const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { name, rgb: (r, g, b) }
    }

    pub const BLACK: NamedColor = NamedColor::new("Black", 0, 0, 0);
    pub const CYAN: NamedColor = NamedColor::new("Cyan", 0, 255, 255);
    pub const LIGHT_GRAY: NamedColor = NamedColor::new("LightGray", 211, 211, 211);
    pub const LIME_GREEN: NamedColor = NamedColor::new("LimeGreen", 50, 205, 50);
    pub const RED: NamedColor = NamedColor::new("Red", 255, 0, 0);
    pub const WHITE: NamedColor = NamedColor::new("White", 255, 255, 255);
    pub const YELLOW: NamedColor = NamedColor::new("Yellow", 255, 255, 0);

    /// Looks a token up in the table, ignoring ASCII case and surrounding whitespace.
    pub fn lookup(token: &str) -> Option<NamedColor> {
        let token = token.trim();
        NAMED_COLORS
            .iter()
            .find(|color| color.name.eq_ignore_ascii_case(token))
            .copied()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color name: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for NamedColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedColor::lookup(s).ok_or_else(|| UnknownColor(s.trim().to_string()))
    }
}

/// Foreground and background of the scrollback and the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub foreground: NamedColor,
    pub background: NamedColor,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: NamedColor::LIME_GREEN,
            background: NamedColor::BLACK,
        }
    }
}

const NAMED_COLORS: &[NamedColor] = &[
    NamedColor::new("AliceBlue", 240, 248, 255),
    NamedColor::new("AntiqueWhite", 250, 235, 215),
    NamedColor::new("Aqua", 0, 255, 255),
    NamedColor::new("Aquamarine", 127, 255, 212),
    NamedColor::new("Azure", 240, 255, 255),
    NamedColor::new("Beige", 245, 245, 220),
    NamedColor::new("Bisque", 255, 228, 196),
    NamedColor::BLACK,
    NamedColor::new("BlanchedAlmond", 255, 235, 205),
    NamedColor::new("Blue", 0, 0, 255),
    NamedColor::new("BlueViolet", 138, 43, 226),
    NamedColor::new("Brown", 165, 42, 42),
    NamedColor::new("BurlyWood", 222, 184, 135),
    NamedColor::new("CadetBlue", 95, 158, 160),
    NamedColor::new("Chartreuse", 127, 255, 0),
    NamedColor::new("Chocolate", 210, 105, 30),
    NamedColor::new("Coral", 255, 127, 80),
    NamedColor::new("CornflowerBlue", 100, 149, 237),
    NamedColor::new("Cornsilk", 255, 248, 220),
    NamedColor::new("Crimson", 220, 20, 60),
    NamedColor::CYAN,
    NamedColor::new("DarkBlue", 0, 0, 139),
    NamedColor::new("DarkCyan", 0, 139, 139),
    NamedColor::new("DarkGoldenrod", 184, 134, 11),
    NamedColor::new("DarkGray", 169, 169, 169),
    NamedColor::new("DarkGreen", 0, 100, 0),
    NamedColor::new("DarkKhaki", 189, 183, 107),
    NamedColor::new("DarkMagenta", 139, 0, 139),
    NamedColor::new("DarkOliveGreen", 85, 107, 47),
    NamedColor::new("DarkOrange", 255, 140, 0),
    NamedColor::new("DarkOrchid", 153, 50, 204),
    NamedColor::new("DarkRed", 139, 0, 0),
    NamedColor::new("DarkSalmon", 233, 150, 122),
    NamedColor::new("DarkSeaGreen", 143, 188, 143),
    NamedColor::new("DarkSlateBlue", 72, 61, 139),
    NamedColor::new("DarkSlateGray", 47, 79, 79),
    NamedColor::new("DarkTurquoise", 0, 206, 209),
    NamedColor::new("DarkViolet", 148, 0, 211),
    NamedColor::new("DeepPink", 255, 20, 147),
    NamedColor::new("DeepSkyBlue", 0, 191, 255),
    NamedColor::new("DimGray", 105, 105, 105),
    NamedColor::new("DodgerBlue", 30, 144, 255),
    NamedColor::new("Firebrick", 178, 34, 34),
    NamedColor::new("FloralWhite", 255, 250, 240),
    NamedColor::new("ForestGreen", 34, 139, 34),
    NamedColor::new("Fuchsia", 255, 0, 255),
    NamedColor::new("Gainsboro", 220, 220, 220),
    NamedColor::new("GhostWhite", 248, 248, 255),
    NamedColor::new("Gold", 255, 215, 0),
    NamedColor::new("Goldenrod", 218, 165, 32),
    NamedColor::new("Gray", 128, 128, 128),
    NamedColor::new("Green", 0, 128, 0),
    NamedColor::new("GreenYellow", 173, 255, 47),
    NamedColor::new("Honeydew", 240, 255, 240),
    NamedColor::new("HotPink", 255, 105, 180),
    NamedColor::new("IndianRed", 205, 92, 92),
    NamedColor::new("Indigo", 75, 0, 130),
    NamedColor::new("Ivory", 255, 255, 240),
    NamedColor::new("Khaki", 240, 230, 140),
    NamedColor::new("Lavender", 230, 230, 250),
    NamedColor::new("LavenderBlush", 255, 240, 245),
    NamedColor::new("LawnGreen", 124, 252, 0),
    NamedColor::new("LemonChiffon", 255, 250, 205),
    NamedColor::new("LightBlue", 173, 216, 230),
    NamedColor::new("LightCoral", 240, 128, 128),
    NamedColor::new("LightCyan", 224, 255, 255),
    NamedColor::new("LightGoldenrodYellow", 250, 250, 210),
    NamedColor::LIGHT_GRAY,
    NamedColor::new("LightGreen", 144, 238, 144),
    NamedColor::new("LightPink", 255, 182, 193),
    NamedColor::new("LightSalmon", 255, 160, 122),
    NamedColor::new("LightSeaGreen", 32, 178, 170),
    NamedColor::new("LightSkyBlue", 135, 206, 250),
    NamedColor::new("LightSlateGray", 119, 136, 153),
    NamedColor::new("LightSteelBlue", 176, 196, 222),
    NamedColor::new("LightYellow", 255, 255, 224),
    NamedColor::new("Lime", 0, 255, 0),
    NamedColor::LIME_GREEN,
    NamedColor::new("Linen", 250, 240, 230),
    NamedColor::new("Magenta", 255, 0, 255),
    NamedColor::new("Maroon", 128, 0, 0),
    NamedColor::new("MediumAquamarine", 102, 205, 170),
    NamedColor::new("MediumBlue", 0, 0, 205),
    NamedColor::new("MediumOrchid", 186, 85, 211),
    NamedColor::new("MediumPurple", 147, 112, 219),
    NamedColor::new("MediumSeaGreen", 60, 179, 113),
    NamedColor::new("MediumSlateBlue", 123, 104, 238),
    NamedColor::new("MediumSpringGreen", 0, 250, 154),
    NamedColor::new("MediumTurquoise", 72, 209, 204),
    NamedColor::new("MediumVioletRed", 199, 21, 133),
    NamedColor::new("MidnightBlue", 25, 25, 112),
    NamedColor::new("MintCream", 245, 255, 250),
    NamedColor::new("MistyRose", 255, 228, 225),
    NamedColor::new("Moccasin", 255, 228, 181),
    NamedColor::new("NavajoWhite", 255, 222, 173),
    NamedColor::new("Navy", 0, 0, 128),
    NamedColor::new("OldLace", 253, 245, 230),
    NamedColor::new("Olive", 128, 128, 0),
    NamedColor::new("OliveDrab", 107, 142, 35),
    NamedColor::new("Orange", 255, 165, 0),
    NamedColor::new("OrangeRed", 255, 69, 0),
    NamedColor::new("Orchid", 218, 112, 214),
    NamedColor::new("PaleGoldenrod", 238, 232, 170),
    NamedColor::new("PaleGreen", 152, 251, 152),
    NamedColor::new("PaleTurquoise", 175, 238, 238),
    NamedColor::new("PaleVioletRed", 219, 112, 147),
    NamedColor::new("PapayaWhip", 255, 239, 213),
    NamedColor::new("PeachPuff", 255, 218, 185),
    NamedColor::new("Peru", 205, 133, 63),
    NamedColor::new("Pink", 255, 192, 203),
    NamedColor::new("Plum", 221, 160, 221),
    NamedColor::new("PowderBlue", 176, 224, 230),
    NamedColor::new("Purple", 128, 0, 128),
    NamedColor::RED,
    NamedColor::new("RosyBrown", 188, 143, 143),
    NamedColor::new("RoyalBlue", 65, 105, 225),
    NamedColor::new("SaddleBrown", 139, 69, 19),
    NamedColor::new("Salmon", 250, 128, 114),
    NamedColor::new("SandyBrown", 244, 164, 96),
    NamedColor::new("SeaGreen", 46, 139, 87),
    NamedColor::new("SeaShell", 255, 245, 238),
    NamedColor::new("Sienna", 160, 82, 45),
    NamedColor::new("Silver", 192, 192, 192),
    NamedColor::new("SkyBlue", 135, 206, 235),
    NamedColor::new("SlateBlue", 106, 90, 205),
    NamedColor::new("SlateGray", 112, 128, 144),
    NamedColor::new("Snow", 255, 250, 250),
    NamedColor::new("SpringGreen", 0, 255, 127),
    NamedColor::new("SteelBlue", 70, 130, 180),
    NamedColor::new("Tan", 210, 180, 140),
    NamedColor::new("Teal", 0, 128, 128),
    NamedColor::new("Thistle", 216, 191, 216),
    NamedColor::new("Tomato", 255, 99, 71),
    NamedColor::new("Turquoise", 64, 224, 208),
    NamedColor::new("Violet", 238, 130, 238),
    NamedColor::new("Wheat", 245, 222, 179),
    NamedColor::WHITE,
    NamedColor::new("WhiteSmoke", 245, 245, 245),
    NamedColor::YELLOW,
    NamedColor::new("YellowGreen", 154, 205, 50),
];
