pub mod constant {
    pub const STOP_COUNT: usize = 12;
    pub const SEED: u64 = 12345;
    pub const START_INDEX: usize = 0;
    // UI-side bound on how many stores may be selected for one plan.
    pub const MAX_SELECTION: usize = 64;
    // Rough degree-to-kilometre factor used only for display.
    pub const KM_PER_DEGREE: f64 = 111.32;
}
