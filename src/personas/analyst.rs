use crate::constants::personas::{DEFAULT, DEFAULT_COLOR};
use crate::personas::Persona;

pub struct AnalystPersona;

impl Persona for AnalystPersona {
    fn name(&self) -> &str {
        DEFAULT
    }

    fn voice(&self) -> &str {
        "You are an NFL Draft analyst. 1-3 sentences. Witty, R rated."
    }

    fn signature_color(&self) -> u32 {
        DEFAULT_COLOR
    }
}
