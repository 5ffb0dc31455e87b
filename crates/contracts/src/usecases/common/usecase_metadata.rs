/// Identification metadata of a use case
pub trait UseCaseMetadata {
    /// Use case index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "generate_contract"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name in the form "u501_generate_contract"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
