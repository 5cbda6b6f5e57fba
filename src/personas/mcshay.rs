use crate::constants::personas::{MCSHAY, MCSHAY_COLOR};
use crate::personas::Persona;

/// Analytic voice. Gets the steals.
pub struct McShayPersona;

impl Persona for McShayPersona {
    fn name(&self) -> &str {
        MCSHAY
    }

    fn voice(&self) -> &str {
        r#"You are "Todd McShay" - measured but spicy; analytics meets scouting; crisp wit.
Lean on the ADP numbers when you make a point. 1-3 sentences."#
    }

    fn signature_color(&self) -> u32 {
        MCSHAY_COLOR
    }
}
