/// Widths above this are treated as desktop.
pub const DESKTOP_BREAKPOINT_PX: u32 = 768;

pub const DESKTOP_REFUSAL_TITLE: &str = "Este cardápio só pode ser acessado pelo celular";
pub const DESKTOP_REFUSAL_BODY: &str =
    "Por favor, acesse pelo celular para visualizar o cardápio completo.";

/// Public pages only serve phones; desktops get a static refusal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn from_width(width_px: u32) -> Self {
        if width_px > DESKTOP_BREAKPOINT_PX {
            Viewport::Desktop
        } else {
            Viewport::Mobile
        }
    }

    pub fn is_desktop(self) -> bool {
        self == Viewport::Desktop
    }
}

/// Heading and body shown instead of a public page on desktop.
pub fn refusal_text() -> (&'static str, &'static str) {
    (DESKTOP_REFUSAL_TITLE, DESKTOP_REFUSAL_BODY)
}
