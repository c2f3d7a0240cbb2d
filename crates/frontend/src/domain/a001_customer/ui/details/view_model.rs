use crate::domain::a001_customer::api;
use crate::shared::form_status::FormStatus;
use contracts::domain::a001_customer::{Customer, CustomerDto, CustomerId};
use contracts::enums::CustomerType;
use leptos::prelude::*;

/// Editable fields of a contact person row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Position,
    Phone,
    Email,
}

impl ContactField {
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Position => "position",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
        }
    }
}

#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub status: FormStatus,
}

impl CustomerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CustomerDto::default()),
            status: FormStatus::new(),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.is_edit()))
    }

    pub fn load_if_needed(&self, id: Option<CustomerId>) {
        let Some(id) = id else {
            return;
        };
        let form = self.form;
        self.status.load(api::fetch_customer(id), move |customer: Customer| {
            form.set(CustomerDto::from(&customer));
        });
    }

    pub fn field(&self, field: &'static str) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| match field {
                "customer_code" => f.customer_code.clone(),
                "customer_name" => f.customer_name.clone(),
                "customer_type" => f.customer_type.code().to_string(),
                "npwp" => f.npwp.clone(),
                "email" => f.email.clone(),
                "phone" => f.phone.clone(),
                "address" => f.address.clone(),
                "city" => f.city.clone(),
                "province" => f.province.clone(),
                "postal_code" => f.postal_code.clone(),
                _ => f.notes.clone(),
            })
        })
    }

    pub fn set_field(&self, field: &'static str, value: String) {
        self.form.update(|f| match field {
            "customer_code" => f.customer_code = value,
            "customer_name" => f.customer_name = value,
            "customer_type" => {
                f.customer_type = CustomerType::from_code(&value).unwrap_or_default()
            }
            "npwp" => f.npwp = value,
            "email" => f.email = value,
            "phone" => f.phone = value,
            "address" => f.address = value,
            "city" => f.city = value,
            "province" => f.province = value,
            "postal_code" => f.postal_code = value,
            "notes" => f.notes = value,
            _ => {}
        });
        self.status.clear(field);
    }

    // Contact persons

    pub fn add_contact(&self) {
        self.form.update(|f| f.add_contact());
    }

    pub fn remove_contact(&self, index: usize) {
        self.form.update(|f| f.remove_contact(index));
        self.status.clear_prefix("contact_persons");
    }

    pub fn set_primary_contact(&self, index: usize) {
        self.form.update(|f| f.set_primary_contact(index));
        self.status.clear("contact_persons");
    }

    pub fn contact_value(&self, index: usize, field: ContactField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| {
                f.contact_persons
                    .get(index)
                    .map(|c| match field {
                        ContactField::Name => c.name.clone(),
                        ContactField::Position => c.position.clone(),
                        ContactField::Phone => c.phone.clone(),
                        ContactField::Email => c.email.clone(),
                    })
                    .unwrap_or_default()
            })
        })
    }

    pub fn set_contact_field(&self, index: usize, field: ContactField, value: String) {
        self.form.update(|f| {
            if let Some(c) = f.contact_persons.get_mut(index) {
                match field {
                    ContactField::Name => c.name = value,
                    ContactField::Position => c.position = value,
                    ContactField::Phone => c.phone = value,
                    ContactField::Email => c.email = value,
                }
            }
        });
        self.status
            .clear(&format!("contact_persons.{}.{}", index, field.key()));
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if let Err(errors) = dto.validate() {
            self.status.reject(errors);
            return;
        }

        let message = if dto.is_edit() {
            format!("Customer \"{}\" updated", dto.customer_name.trim())
        } else {
            format!("Customer \"{}\" created", dto.customer_name.trim())
        };
        let request = async move {
            match dto.id {
                Some(id) => api::update_customer(id, dto).await,
                None => api::create_customer(dto).await,
            }
        };
        self.status.save(request, message, move |_| on_saved.run(()));
    }
}

impl Default for CustomerDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
