use crate::domain::a002_item_product::api;
use crate::shared::form_status::FormStatus;
use contracts::domain::a002_item_product::{ItemProduct, ItemProductDto, ItemProductId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ItemProductDetailsViewModel {
    pub form: RwSignal<ItemProductDto>,
    pub status: FormStatus,
}

impl ItemProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ItemProductDto::default()),
            status: FormStatus::new(),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.id.is_some()))
    }

    pub fn load_if_needed(&self, id: Option<ItemProductId>) {
        let Some(id) = id else {
            return;
        };
        let form = self.form;
        self.status
            .load(api::fetch_item_product(id), move |product: ItemProduct| {
                form.set(ItemProductDto::from(&product));
            });
    }

    pub fn set_field(&self, field: &'static str, value: String) {
        self.form.update(|f| match field {
            "item_code" => f.item_code = value,
            "item_name" => f.item_name = value,
            "brand" => f.brand = value,
            "unit" => f.unit = value,
            "price" => f.price = value,
            "description" => f.description = value,
            _ => {}
        });
        self.status.clear(field);
    }

    pub fn field(&self, field: &'static str) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| match field {
                "item_code" => f.item_code.clone(),
                "item_name" => f.item_name.clone(),
                "brand" => f.brand.clone(),
                "unit" => f.unit.clone(),
                "price" => f.price.clone(),
                _ => f.description.clone(),
            })
        })
    }

    // Specification rows

    pub fn add_specification(&self) {
        self.form.update(|f| f.add_specification());
    }

    /// Row errors are index-keyed, so they are dropped for every row.
    pub fn remove_specification(&self, index: usize) {
        self.form.update(|f| f.remove_specification(index));
        self.status.clear_prefix("specifications");
    }

    pub fn set_spec_name(&self, index: usize, value: String) {
        self.form.update(|f| {
            if let Some(spec) = f.specifications.get_mut(index) {
                spec.spec_name = value;
            }
        });
        self.status.clear(&format!("specifications.{}.spec_name", index));
    }

    pub fn set_spec_value(&self, index: usize, value: String) {
        self.form.update(|f| {
            if let Some(spec) = f.specifications.get_mut(index) {
                spec.spec_value = value;
            }
        });
        self.status.clear(&format!("specifications.{}.spec_value", index));
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if let Err(errors) = dto.validate() {
            self.status.reject(errors);
            return;
        }

        let message = if dto.id.is_some() {
            "Product updated"
        } else {
            "Product created"
        };
        let request = async move {
            match dto.id {
                Some(id) => api::update_item_product(id, dto).await,
                None => api::create_item_product(dto).await,
            }
        };
        self.status
            .save(request, message.to_string(), move |_| on_saved.run(()));
    }
}

impl Default for ItemProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
