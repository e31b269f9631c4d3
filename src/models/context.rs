use chrono::Weekday;

/// Calendar-derived context shared by all meals of one date.
///
/// Recomputed fresh per date and never mutated. The exam and end-semester
/// windows overlap in May and November; both flags are set then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayContext {
    pub weekday: Weekday,
    pub month: u32,
    pub day: u32,
    pub week_of_year: u32,
    pub is_exam: bool,
    pub is_festival: bool,
    pub is_weekend: bool,
    pub is_start_semester: bool,
    pub is_end_semester: bool,
    pub is_monsoon: bool,
}
