use crate::constants::personas::{MEL, MEL_COLOR};
use crate::personas::Persona;

/// High-energy voice. Forced on QB picks.
pub struct MelPersona;

impl Persona for MelPersona {
    fn name(&self) -> &str {
        MEL
    }

    fn voice(&self) -> &str {
        r#"You are "Mel Kiper Jr." - rapid-fire draft analyst energy, punchy one-liners, hair-level confidence.
Witty hyperbole, no profanity. 1-3 sentences."#
    }

    fn signature_color(&self) -> u32 {
        MEL_COLOR
    }
}
