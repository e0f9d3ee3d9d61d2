#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BgColor {
    White,
    #[default]
    Gray,
}

impl BgColor {
    pub fn css_class(&self) -> &'static str {
        match self {
            BgColor::White => "bg-white",
            BgColor::Gray => "bg-gray-100",
        }
    }
}
