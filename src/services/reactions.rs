//! Pre-written one-liners used instead of a generated blurb.

/// Which catalogue a canned line came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Catalogue {
    /// QB taken and it wasn't the priority player
    Meltdown,
    Reach,
    Value,
}

impl Catalogue {
    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            Catalogue::Meltdown => MELTDOWN,
            Catalogue::Reach => REACH,
            Catalogue::Value => VALUE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Catalogue::Meltdown => "meltdown",
            Catalogue::Reach => "reach",
            Catalogue::Value => "value",
        }
    }

    /// Pick a line with a draw in [0, 1). Out-of-range draws are clamped.
    pub fn pick(&self, draw: f64) -> &'static str {
        let lines = self.lines();
        lines[draw_index(draw, lines.len())]
    }
}

/// Map a draw in [0, 1) onto `0..len`. `len` must be non-zero.
pub fn draw_index(draw: f64, len: usize) -> usize {
    if !draw.is_finite() || draw <= 0.0 {
        return 0;
    }
    ((draw * len as f64) as usize).min(len - 1)
}

const MELTDOWN: &[&str] = &[
    "ANOTHER quarterback?! And it's NOT him?! I need a minute. I need several minutes.",
    "I have his tape on a loop in my basement and you people keep passing on him. UNBELIEVABLE.",
    "Somebody check on the war room, because they just took the wrong QB and I am not okay.",
    "That's a quarterback. That is not THE quarterback. My big board is on fire right now.",
    "I'm tearing up my mock draft. I'm tearing up ALL the mock drafts.",
];

const REACH: &[&str] = &[
    "Way too early. ADP is a suggestion, but come on.",
    "Somebody's been reading their own mock draft.",
    "Bold. Wrong, but bold.",
    "You could've gotten him two rounds later and you know it.",
    "The market said wait. You said no.",
];

const VALUE: &[&str] = &[
    "Robbery in broad daylight.",
    "That's the pick. Fell right into your lap.",
    "Everybody else was asleep. Great value.",
    "ADP says steal and so do I.",
    "Patience pays. Love this one.",
];
