pub mod analyst;
pub mod mcshay;
pub mod mel;

use analyst::AnalystPersona;
use mcshay::McShayPersona;
use mel::MelPersona;

/// A named commentator voice
pub trait Persona: Send + Sync {
    fn name(&self) -> &str;

    /// Voice instruction placed at the top of the system prompt
    fn voice(&self) -> &str;

    /// Embed color used when a pick lands right on its ADP
    fn signature_color(&self) -> u32;
}

static MEL: MelPersona = MelPersona;
static MCSHAY: McShayPersona = McShayPersona;
static ANALYST: AnalystPersona = AnalystPersona;

/// Look up a persona by id. Unknown ids get the generic analyst.
pub fn persona_for(name: &str) -> &'static dyn Persona {
    match name {
        n if n.eq_ignore_ascii_case(MEL.name()) => &MEL,
        n if n.eq_ignore_ascii_case(MCSHAY.name()) => &MCSHAY,
        _ => &ANALYST,
    }
}

/// True when `name` has its own voice rather than the generic fallback
pub fn is_known(name: &str) -> bool {
    [MEL.name(), MCSHAY.name()]
        .iter()
        .any(|known| known.eq_ignore_ascii_case(name))
}
