use crate::domain::a003_term_condition::api;
use crate::shared::form_status::FormStatus;
use contracts::domain::a003_term_condition::{TermCondition, TermConditionDto, TermConditionId};
use leptos::prelude::*;

/// ViewModel of the terms & conditions form
#[derive(Clone, Copy)]
pub struct TermConditionDetailsViewModel {
    pub form: RwSignal<TermConditionDto>,
    pub status: FormStatus,
}

impl TermConditionDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(TermConditionDto::default()),
            status: FormStatus::new(),
        }
    }

    pub fn load_if_needed(&self, id: Option<TermConditionId>) {
        if let Some(id) = id {
            let form = self.form;
            self.status
                .load(api::fetch_term_condition(id), move |term: TermCondition| {
                    form.set(TermConditionDto::from(&term))
                });
        }
    }

    pub fn set_title(&self, value: String) {
        self.form.update(|f| f.title = value);
        self.status.clear("title");
    }

    pub fn set_content(&self, value: String) {
        self.form.update(|f| f.content = value);
        self.status.clear("content");
    }

    pub fn set_default(&self, value: bool) {
        self.form.update(|f| f.is_default = value);
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if let Err(errors) = dto.validate() {
            self.status.reject(errors);
            return;
        }

        let message = match dto.id {
            Some(_) => "Terms & conditions updated",
            None => "Terms & conditions created",
        };
        self.status.save(
            async move {
                match dto.id {
                    Some(id) => api::update_term_condition(id, dto).await,
                    None => api::create_term_condition(dto).await,
                }
            },
            message.to_string(),
            move |_| on_saved.run(()),
        );
    }
}

impl Default for TermConditionDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
