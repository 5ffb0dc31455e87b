use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_generate_contract::GenerateContract;
use contracts::usecases::u502_create_employee::CreateEmployee;
use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::usecases::u501_generate_contract::GenerateContractPage;
use crate::usecases::u502_create_employee::CreateEmployeePage;

/// Page shown in the main area; switching remounts it, so lists are refetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    GenerateContract,
    CreateEmployee,
}

impl AppPage {
    pub const ALL: [AppPage; 2] = [AppPage::GenerateContract, AppPage::CreateEmployee];

    pub fn title(self) -> &'static str {
        match self {
            AppPage::GenerateContract => GenerateContract::display_name(),
            AppPage::CreateEmployee => CreateEmployee::display_name(),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let current = RwSignal::new(AppPage::default());

    view! {
        <ConfigProvider>
            <nav class="app-nav">
                {AppPage::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="button button--secondary"
                                class:active=move || current.get() == page
                                on:click=move |_| current.set(page)
                            >
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || match current.get() {
                AppPage::GenerateContract => view! { <GenerateContractPage /> }.into_any(),
                AppPage::CreateEmployee => view! { <CreateEmployeePage /> }.into_any(),
            }}
        </ConfigProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_come_from_usecase_metadata() {
        assert_eq!(AppPage::GenerateContract.title(), "Generate contract");
        assert_eq!(AppPage::CreateEmployee.title(), "Create employee");
        assert_eq!(AppPage::default(), AppPage::GenerateContract);
    }
}
