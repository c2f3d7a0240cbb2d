use super::view_model::TermConditionDetailsViewModel;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_term_condition::TermConditionId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TermConditionDetails(
    id: Option<TermConditionId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = TermConditionDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;
    let status = vm.status;

    view! {
        <PageFrame page_id="a003_term_condition--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if form.with(|f| f.id.is_some()) { "Edit terms & conditions" } else { "New terms & conditions" }}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=status.busy()
                    >
                        {icon("save")}
                        " Save"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || status.load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <Input
                        label="Title"
                        id="title"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.title.clone()))
                        on_input=Callback::new(move |v| vm.set_title(v))
                        error=status.error("title")
                    />
                    <Textarea
                        label="Content"
                        id="content"
                        required=true
                        rows=12
                        value=Signal::derive(move || form.with(|f| f.content.clone()))
                        on_input=Callback::new(move |v| vm.set_content(v))
                        error=status.error("content")
                        placeholder="One clause per line"
                    />
                    <Checkbox
                        label="Use as default for new quotations"
                        id="is_default"
                        checked=Signal::derive(move || form.with(|f| f.is_default))
                        on_change=Callback::new(move |v| vm.set_default(v))
                    />
                </div>
            </div>
        </PageFrame>
    }
}
