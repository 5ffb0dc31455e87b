use super::browser;

/// Side effect requested by page logic, executed in order by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    /// Blocking notification to the user
    Alert(String),
    /// Reload the whole page
    Reload,
    /// Diagnostic console entry only
    Log(String),
}

pub fn run_effects(effects: Vec<PageEffect>) {
    for effect in effects {
        match effect {
            PageEffect::Alert(message) => browser::alert(&message),
            PageEffect::Reload => browser::reload_page(),
            PageEffect::Log(message) => log::error!("{}", message),
        }
    }
}
