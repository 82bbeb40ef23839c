#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AutoAdvance {
    Off,                           // Pages only turn on user request
    Armed,                         // Enabled, waiting for the first frame to start the clock
    Running { last_transition: f64 }, // Enabled, counting from the last automatic or manual reset
}

impl AutoAdvance {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, AutoAdvance::Off)
    }
}
